use crate::export::*;

use serde::{Deserialize, Serialize};

#[derive(PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(rename = "questionsPath")]
    pub questions_path: Option<String>,
    #[serde(rename = "partyInfoPath")]
    pub party_info_path: Option<String>,
    #[serde(rename = "outputDirectory")]
    pub output_directory: Option<String>,
    #[serde(rename = "referenceDirectory")]
    pub reference_directory: Option<String>,
    #[serde(rename = "markerOffset")]
    pub marker_offset: Option<f64>,
}

impl PipelineConfig {
    /// Overrides the settings with the values present in this configuration.
    ///
    /// Relative paths are resolved against `root`, the directory of the configuration file.
    pub fn apply(&self, root: &Path, settings: &mut ExportSettings) {
        if let Some(p) = &self.questions_path {
            settings.questions_path = root.join(p);
        }
        if let Some(p) = &self.party_info_path {
            settings.party_info_path = root.join(p);
        }
        if let Some(p) = &self.output_directory {
            settings.output_dir = root.join(p);
        }
        if let Some(p) = &self.reference_directory {
            settings.reference_dir = Some(root.join(p));
        }
        if let Some(offset) = self.marker_offset {
            settings.rules.marker_offset = offset;
        }
    }
}

pub fn read_config(path: &Path) -> ExportResult<PipelineConfig> {
    let p = path.display().to_string();
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path: p.clone() })?;
    debug!("read_config: {:?}", contents);
    serde_json::from_str(contents.as_str()).context(ParsingJsonSnafu { path: p })
}

/// Reads a configuration file and applies it on top of the default settings.
pub fn settings_from_config(path: &Path) -> ExportResult<ExportSettings> {
    let config = read_config(path)?;
    info!("config: {:?}", config);
    let root = path.parent().unwrap_or_else(|| Path::new(""));
    let mut settings = ExportSettings::default();
    config.apply(root, &mut settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::test_data;

    #[test]
    fn read_test_config() {
        let settings = settings_from_config(&test_data("config.json")).unwrap();
        assert_eq!(settings.questions_path, test_data("questions.csv"));
        assert_eq!(settings.party_info_path, test_data("party_info.csv"));
        assert_eq!(settings.output_dir, test_data("out"));
        assert_eq!(settings.reference_dir, None);
        assert_eq!(settings.rules.marker_offset, 2.5);
        assert_eq!(settings.rules.max_contribution, 2.0);
    }

    #[test]
    fn empty_config_keeps_defaults() {
        let config: PipelineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PipelineConfig::default());
        let mut settings = ExportSettings::default();
        config.apply(Path::new("/data"), &mut settings);
        assert_eq!(settings, ExportSettings::default());
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = PipelineConfig {
            output_directory: Some("/var/www/src".to_string()),
            reference_directory: Some("expected".to_string()),
            ..PipelineConfig::default()
        };
        let mut settings = ExportSettings::default();
        config.apply(Path::new("/data"), &mut settings);
        assert_eq!(settings.output_dir, PathBuf::from("/var/www/src"));
        assert_eq!(settings.reference_dir, Some(PathBuf::from("/data/expected")));
        assert_eq!(settings.questions_path, PathBuf::from("questions.csv"));
    }

    #[test]
    fn invalid_config() {
        let tmp = tempfile::tempdir().unwrap();
        let p = tmp.path().join("config.json");
        fs::write(&p, r#"{"markerOffset": "three"}"#).unwrap();
        assert!(matches!(
            settings_from_config(&p),
            Err(ExportError::ParsingJson { .. })
        ));
    }
}
