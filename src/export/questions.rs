use crate::export::{io_common::*, io_csv::*, *};

/// A question, as read by the front-end.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "pergunta")]
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub theme: String,
    pub short: bool,
    pub index: usize,
    pub multiplier: i64,
}

pub fn question_records(table: &QuestionTable) -> ExportResult<Vec<QuestionRecord>> {
    let mut res: Vec<QuestionRecord> = Vec::new();
    for (index, q) in table.questions.iter().enumerate() {
        res.push(QuestionRecord {
            text: q.text.clone(),
            kind: q.kind.clone(),
            theme: q.theme.clone(),
            short: q.short,
            index,
            multiplier: q.multiplier(index)?,
        });
    }
    Ok(res)
}

/// Writes `questions.json` and returns the number of questions.
pub fn export_questions(questions_path: &Path, output_dir: &Path) -> ExportResult<usize> {
    prepare_output_dir(output_dir)?;
    let output_path = output_dir.join(QUESTIONS_JSON);

    let table = read_question_table(questions_path)?;
    let records = question_records(&table)?;
    write_json(&output_path, &records, true)?;

    println!(
        "Successfully converted CSV to JSON. Output saved to {}",
        output_path.display()
    );
    println!("Total questions processed: {}", records.len());
    Ok(records.len())
}
