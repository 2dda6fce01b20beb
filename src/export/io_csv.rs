// Primitives for reading the survey CSV files.

use csv::StringRecord;

use crate::export::{io_common::display_path, *};

/// The columns of the question file that do not hold party answers.
pub const QUESTION_COLUMNS: [&str; 5] = ["pergunta", "type", "theme", "short", "multiplier"];

/// The content of one party cell.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Answer {
    /// The literal `NaN`
    Missing,
    Value(i64),
    /// Anything else, kept as is. This includes integers that do not fit in an i64.
    Unparsed(String),
}

impl Answer {
    pub fn parse(cell: &str) -> Answer {
        if cell == "NaN" {
            return Answer::Missing;
        }
        match cell.trim().parse::<i64>() {
            Ok(x) => Answer::Value(x),
            Err(_) => Answer::Unparsed(cell.to_string()),
        }
    }

    pub fn to_json(&self) -> JSValue {
        match self {
            Answer::Missing => JSValue::Null,
            Answer::Value(x) => json!(x),
            Answer::Unparsed(s) => json!(s),
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuestionRow {
    pub text: String,
    pub kind: String,
    pub theme: String,
    pub short: bool,
    multiplier: String,
    /// One per party, in the order of the party columns.
    pub answers: Vec<Answer>,
}

impl QuestionRow {
    pub fn multiplier(&self, index: usize) -> ExportResult<i64> {
        self.multiplier
            .trim()
            .parse::<i64>()
            .ok()
            .context(InvalidMultiplierSnafu {
                index,
                content: self.multiplier.clone(),
            })
    }

    pub fn axis(&self) -> Option<Axis> {
        Axis::from_label(self.kind.as_str())
    }
}

/// The parsed question file. Rows are in file order, so the position of a
/// row is the index of the question.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct QuestionTable {
    pub path: String,
    pub parties: Vec<String>,
    pub questions: Vec<QuestionRow>,
}

impl QuestionTable {
    pub fn party_position(&self, party: &str) -> Option<usize> {
        self.parties.iter().position(|p| p == party)
    }

    /// The answers of one party with the weight and axis of each question.
    pub fn axis_answers(&self, party: &str) -> ExportResult<Vec<AxisAnswer>> {
        let pos = self.party_position(party).context(UnknownPartySnafu {
            party,
            path: self.path.clone(),
        })?;
        let mut res: Vec<AxisAnswer> = Vec::new();
        for (index, q) in self.questions.iter().enumerate() {
            let axis = q.axis();
            let answer = match &q.answers[pos] {
                Answer::Value(x) => Some(*x),
                Answer::Missing => None,
                // An empty cell is an unanswered question.
                Answer::Unparsed(s) if s.trim().is_empty() => None,
                Answer::Unparsed(_) if axis.is_none() => None,
                Answer::Unparsed(s) => {
                    return InvalidAnswerSnafu {
                        party,
                        index,
                        content: s.clone(),
                    }
                    .fail();
                }
            };
            res.push(AxisAnswer {
                axis,
                multiplier: q.multiplier(index)?,
                answer,
            });
        }
        Ok(res)
    }
}

pub fn read_question_table(path: &Path) -> ExportResult<QuestionTable> {
    let p = display_path(path);
    info!("Attempting to read question file {:?}", p);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu { path: p.clone() })?;
    let header = rdr
        .headers()
        .context(CsvLineParseSnafu {
            path: p.clone(),
            lineno: 1usize,
        })?
        .clone();
    debug!("read_question_table: header: {:?}", header);

    let text_idx = column_index(&header, "pergunta", &p)?;
    let type_idx = column_index(&header, "type", &p)?;
    let theme_idx = column_index(&header, "theme", &p)?;
    let short_idx = column_index(&header, "short", &p)?;
    let multiplier_idx = column_index(&header, "multiplier", &p)?;

    let party_columns: Vec<(usize, String)> = header
        .iter()
        .enumerate()
        .filter(|(_, name)| !QUESTION_COLUMNS.contains(name))
        .map(|(idx, name)| (idx, name.to_string()))
        .collect();
    debug!("read_question_table: parties: {:?}", party_columns);

    let mut questions: Vec<QuestionRow> = Vec::new();
    for (idx, line_r) in rdr.records().enumerate() {
        let lineno = idx + 2;
        let line = line_r.context(CsvLineParseSnafu {
            path: p.clone(),
            lineno,
        })?;
        let cell = |col: usize| get_cell(&line, col, &p, lineno);

        let mut answers: Vec<Answer> = Vec::new();
        for (col, _) in party_columns.iter() {
            answers.push(Answer::parse(cell(*col)?));
        }
        let q = QuestionRow {
            text: cell(text_idx)?.to_string(),
            kind: cell(type_idx)?.to_string(),
            theme: cell(theme_idx)?.to_string(),
            short: cell(short_idx)? == "1",
            multiplier: cell(multiplier_idx)?.to_string(),
            answers,
        };
        if q.axis().is_none() {
            warn!(
                "Question {}: type {:?} is not an axis, it will not be scored",
                idx, q.kind
            );
        }
        questions.push(q);
    }
    info!("Read {} questions from {:?}", questions.len(), p);

    Ok(QuestionTable {
        path: p,
        parties: party_columns.into_iter().map(|(_, name)| name).collect(),
        questions,
    })
}

/// One row of the party description file.
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct PartyInfoRow {
    pub party_key: String,
    pub abbreviation: String,
    pub fullname: String,
    pub leaning: String,
    pub programme: String,
    pub website: String,
    pub party_blurb: String,
}

pub fn read_party_info(path: &Path) -> ExportResult<Vec<PartyInfoRow>> {
    let p = display_path(path);
    info!("Attempting to read party file {:?}", p);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .context(CsvOpenSnafu { path: p.clone() })?;
    let mut res: Vec<PartyInfoRow> = Vec::new();
    for (idx, row_r) in rdr.deserialize::<PartyInfoRow>().enumerate() {
        let row: PartyInfoRow = row_r.context(CsvLineParseSnafu {
            path: p.clone(),
            lineno: idx + 2,
        })?;
        debug!("read_party_info: {:?}", row);
        res.push(row);
    }
    Ok(res)
}

fn get_cell<'a>(
    line: &'a StringRecord,
    col: usize,
    path: &str,
    lineno: usize,
) -> ExportResult<&'a str> {
    line.get(col)
        .context(CsvLineToShortSnafu { path, lineno })
}

fn column_index(header: &StringRecord, column: &str, path: &str) -> ExportResult<usize> {
    header
        .iter()
        .position(|h| h == column)
        .context(MissingColumnSnafu { column, path })
}
