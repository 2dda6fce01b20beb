use clap::Parser;
use log::{info, LevelFilter};
use std::path::{Path, PathBuf};

mod args;
mod export;

use crate::args::Args;
use crate::export::config_reader::settings_from_config;
use crate::export::{report_error, run_export, ExportResult, ExportSettings};

/// Default settings, then the configuration file, then the command line.
fn settings_from_args(args: &Args) -> ExportResult<ExportSettings> {
    let mut settings = match &args.config {
        Some(config_path) => settings_from_config(Path::new(config_path))?,
        None => ExportSettings::default(),
    };
    if let Some(p) = &args.questions {
        settings.questions_path = PathBuf::from(p);
    }
    if let Some(p) = &args.party_info {
        settings.party_info_path = PathBuf::from(p);
    }
    if let Some(p) = &args.out {
        settings.output_dir = PathBuf::from(p);
    }
    if let Some(p) = &args.reference {
        settings.reference_dir = Some(PathBuf::from(p));
    }
    Ok(settings)
}

fn main() {
    let args = Args::parse();
    if args.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Debug)
            .init();
    } else {
        env_logger::init();
    }
    info!("args: {:?}", args);

    let res = settings_from_args(&args).and_then(|settings| run_export(&settings));
    if let Err(e) = res {
        report_error(&e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_uses_fixed_paths() {
        let args = Args::parse_from(["compass-export"]);
        let settings = settings_from_args(&args).unwrap();
        assert_eq!(settings, ExportSettings::default());
        assert_eq!(settings.questions_path, PathBuf::from("questions.csv"));
        assert_eq!(settings.party_info_path, PathBuf::from("party_info.csv"));
        assert_eq!(settings.output_dir, PathBuf::from("src"));
    }

    #[test]
    fn flags_override_config() {
        let config = format!("{}/tests/data/config.json", env!("CARGO_MANIFEST_DIR"));
        let args = Args::parse_from([
            "compass-export",
            "--config",
            config.as_str(),
            "--out",
            "public",
            "--reference",
            "expected",
        ]);
        let settings = settings_from_args(&args).unwrap();
        assert_eq!(settings.output_dir, PathBuf::from("public"));
        assert_eq!(settings.reference_dir, Some(PathBuf::from("expected")));
        assert!(settings.questions_path.ends_with("tests/data/questions.csv"));
        assert_eq!(settings.rules.marker_offset, 2.5);
    }
}
