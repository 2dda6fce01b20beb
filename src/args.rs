use clap::Parser;

/// Converts the political compass survey sheets into the JSON files used by the compass website.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file with the paths and settings of the export.
    /// Relative paths in this file are resolved against the directory of the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, default questions.csv) The CSV file with the questions and the answers of each party.
    /// Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub questions: Option<String>,

    /// (file path, default party_info.csv) The CSV file with the description of each party.
    #[clap(short, long, value_parser)]
    pub party_info: Option<String>,

    /// (directory, default src) The directory in which the JSON files are written. It is created if needed.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (directory or empty) A directory containing reference JSON files. If provided, the
    /// generated files are checked against the files with the same name in this directory.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
