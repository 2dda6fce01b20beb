use log::{debug, info, warn};

use political_compass::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Map as JSMap;
use serde_json::Value as JSValue;
use text_diff::print_diff;

pub mod config_reader;
mod io_common;
mod io_csv;
mod party_answers;
mod party_info;
mod questions;

pub use crate::export::party_answers::export_party_answers;
pub use crate::export::party_info::export_party_info;
pub use crate::export::questions::export_questions;

pub const QUESTIONS_JSON: &str = "questions.json";
pub const PARTY_ANSWERS_JSON: &str = "party_answers.json";
pub const PARTY_INFO_JSON: &str = "party_info.json";

#[derive(Debug, Snafu)]
pub enum ExportError {
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of {path}"))]
    CsvLineParse {
        source: csv::Error,
        path: String,
        lineno: usize,
    },
    #[snafu(display("Line {lineno} of {path} is too short"))]
    CsvLineToShort { path: String, lineno: usize },
    #[snafu(display("Missing column {column:?} in {path}"))]
    MissingColumn { column: String, path: String },
    #[snafu(display("Question {index}: multiplier {content:?} is not an integer"))]
    InvalidMultiplier { index: usize, content: String },
    #[snafu(display("Party {party:?} has no answer column in {path}"))]
    UnknownParty { party: String, path: String },
    #[snafu(display("Party {party:?}: answer {content:?} to question {index} is not a number"))]
    InvalidAnswer {
        party: String,
        index: usize,
        content: String,
    },
    #[snafu(display("Could not score party {party:?}"))]
    Scoring {
        source: ScoringErrors,
        party: String,
    },
    #[snafu(display("Could not create the output directory {path}"))]
    CreatingOutputDir {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Could not write {path}"))]
    WritingJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON file {path}"))]
    ParsingJson {
        source: serde_json::Error,
        path: String,
    },
    #[snafu(display("Error serializing JSON"))]
    SerializingJson { source: serde_json::Error },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type ExportResult<T> = Result<T, ExportError>;

/// The resolved locations and rules of one export run.
#[derive(PartialEq, Debug, Clone)]
pub struct ExportSettings {
    pub questions_path: PathBuf,
    pub party_info_path: PathBuf,
    pub output_dir: PathBuf,
    pub reference_dir: Option<PathBuf>,
    pub rules: ScoringRules,
}

impl Default for ExportSettings {
    fn default() -> Self {
        ExportSettings {
            questions_path: PathBuf::from("questions.csv"),
            party_info_path: PathBuf::from("party_info.csv"),
            output_dir: PathBuf::from("src"),
            reference_dir: None,
            rules: ScoringRules::DEFAULT_RULES,
        }
    }
}

/// Runs all the exports in order.
///
/// Failures of the question and answer exports are reported and the run continues,
/// so that the party descriptions are still produced. A failure of the party
/// export stops the run.
pub fn run_export(settings: &ExportSettings) -> ExportResult<()> {
    info!("settings: {:?}", settings);

    if let Err(e) = export_questions(&settings.questions_path, &settings.output_dir) {
        report_error(&e);
    }

    if let Err(e) = export_party_answers(&settings.questions_path, &settings.output_dir) {
        report_error(&e);
    }
    println!("Successfully converted numeric columns to JSON.");

    if let Err(e) = export_party_info(
        &settings.questions_path,
        &settings.party_info_path,
        &settings.output_dir,
        &settings.rules,
    ) {
        // Reported by the caller.
        return Err(e);
    }

    // The reference files, if provided for comparison
    if let Some(reference_dir) = &settings.reference_dir {
        check_references(&settings.output_dir, reference_dir)?;
    }

    Ok(())
}

pub fn report_error(e: &ExportError) {
    warn!("Error occurred {:?}", e);
    println!("Error occurred: {}", error_chain(e));
}

/// The message of the error followed by the messages of its sources.
pub fn error_chain(e: &dyn std::error::Error) -> String {
    let mut msg = e.to_string();
    let mut cur = e.source();
    while let Some(s) = cur {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        cur = s.source();
    }
    msg
}

/// Compares the generated files with the files of the same name in the reference directory.
///
/// Files that have no reference are skipped.
pub fn check_references(output_dir: &Path, reference_dir: &Path) -> ExportResult<()> {
    let mut mismatches: Vec<&str> = Vec::new();
    for name in [QUESTIONS_JSON, PARTY_ANSWERS_JSON, PARTY_INFO_JSON] {
        let reference_p = reference_dir.join(name);
        if !reference_p.exists() {
            debug!("check_references: no reference for {:?}", name);
            continue;
        }
        let generated = io_common::read_json(&output_dir.join(name))?;
        let reference = io_common::read_json(&reference_p)?;
        let pretty_generated =
            serde_json::to_string_pretty(&generated).context(SerializingJsonSnafu {})?;
        let pretty_reference =
            serde_json::to_string_pretty(&reference).context(SerializingJsonSnafu {})?;
        if pretty_reference != pretty_generated {
            warn!("Found differences with the reference file {:?}", name);
            print_diff(pretty_reference.as_str(), pretty_generated.as_str(), "\n");
            mismatches.push(name);
        } else {
            info!("{:?} matches the reference", name);
        }
    }
    if !mismatches.is_empty() {
        whatever!(
            "Difference detected between the generated files and the references: {:?}",
            mismatches
        )
    }
    Ok(())
}
