use crate::export::{io_common::*, io_csv::*, *};

/// The answers of each party: party -> question index -> answer.
pub fn answer_matrix(table: &QuestionTable) -> JSMap<String, JSValue> {
    let mut res: JSMap<String, JSValue> = JSMap::new();
    for (pos, party) in table.parties.iter().enumerate() {
        let mut answers: JSMap<String, JSValue> = JSMap::new();
        for (index, q) in table.questions.iter().enumerate() {
            answers.insert(index.to_string(), q.answers[pos].to_json());
        }
        res.insert(party.clone(), JSValue::Object(answers));
    }
    res
}

/// Writes `party_answers.json` and returns the number of parties.
pub fn export_party_answers(questions_path: &Path, output_dir: &Path) -> ExportResult<usize> {
    prepare_output_dir(output_dir)?;
    let output_path = output_dir.join(PARTY_ANSWERS_JSON);

    let table = read_question_table(questions_path)?;
    let matrix = answer_matrix(&table);
    write_json(&output_path, &matrix, false)?;
    info!(
        "Wrote the answers of {} parties to {:?}",
        matrix.len(),
        output_path
    );
    Ok(matrix.len())
}
