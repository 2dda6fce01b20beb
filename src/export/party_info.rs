use crate::export::{io_common::*, io_csv::*, *};

/// The description of a party, with its position on the compass.
#[derive(PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PartyRecord {
    pub key: String,
    pub abbreviation: String,
    pub fullname: String,
    pub leaning: String,
    pub programme: String,
    pub website: String,
    pub blurb: String,
    pub economic: f64,
    pub social: f64,
    pub political: f64,
    pub left: String,
    pub top: String,
}

impl PartyRecord {
    fn new(row: &PartyInfoRow, scores: CompassScores) -> PartyRecord {
        PartyRecord {
            key: row.party_key.clone(),
            abbreviation: row.abbreviation.clone(),
            fullname: row.fullname.clone(),
            leaning: row.leaning.clone(),
            programme: row.programme.clone(),
            website: row.website.clone(),
            blurb: row.party_blurb.clone(),
            economic: scores.economic,
            social: scores.social,
            political: scores.political,
            left: scores.position.left,
            top: scores.position.top,
        }
    }
}

/// Computes the compass scores of a party from its answer column.
pub fn score_party(
    table: &QuestionTable,
    party: &str,
    rules: &ScoringRules,
) -> ExportResult<CompassScores> {
    let answers = table.axis_answers(party)?;
    let scores = compass_scores(&answers, rules).context(ScoringSnafu { party })?;
    debug!("score_party: {:?}: {:?}", party, scores);
    Ok(scores)
}

pub fn party_records(
    table: &QuestionTable,
    rows: &[PartyInfoRow],
    rules: &ScoringRules,
) -> ExportResult<JSMap<String, JSValue>> {
    let mut res: JSMap<String, JSValue> = JSMap::new();
    for row in rows.iter() {
        let scores = score_party(table, row.party_key.as_str(), rules)?;
        let record = PartyRecord::new(row, scores);
        let js = serde_json::to_value(&record).context(SerializingJsonSnafu {})?;
        if res.insert(row.party_key.clone(), js).is_some() {
            warn!(
                "Party {:?} is described more than once, keeping the last description",
                row.party_key
            );
        }
    }
    Ok(res)
}

/// Writes `party_info.json` and returns the number of parties.
///
/// The question file is read once for all the parties.
pub fn export_party_info(
    questions_path: &Path,
    party_info_path: &Path,
    output_dir: &Path,
    rules: &ScoringRules,
) -> ExportResult<usize> {
    prepare_output_dir(output_dir)?;
    let output_path = output_dir.join(PARTY_INFO_JSON);

    let rows = read_party_info(party_info_path)?;
    let table = read_question_table(questions_path)?;
    let records = party_records(&table, &rows, rules)?;
    write_json(&output_path, &records, true)?;

    println!(
        "Successfully converted party info to JSON. Output saved to {}",
        output_path.display()
    );
    println!("Total parties processed: {}", records.len());
    Ok(records.len())
}
