//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the eligibility
//! tables from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::bonuses::BonusTable;
use super::thresholds::ThresholdTable;
use super::types::{ChildBonusReporting, EligibilityConfig, ProgramConfig, ProgramMetadata};

/// Loads and provides access to the eligibility configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── program.yaml     # Program metadata and child bonus reporting mode
/// ├── thresholds.yaml  # Base thresholds by household shape
/// └── bonuses.yaml     # Per-child and marriage bonuses
/// ```
///
/// # Example
///
/// ```no_run
/// use housing_eligibility::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let row = loader.config().thresholds().base_thresholds(2, true, false)?;
/// println!("Group A gross limit: {}", row.gross_a);
/// # Ok::<(), housing_eligibility::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EligibilityConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A threshold row has Group B figures below its Group A figures
    /// - Any amount is negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let program_path = path.join("program.yaml");
        let program = Self::load_yaml::<ProgramConfig>(&program_path)?;

        let thresholds_path = path.join("thresholds.yaml");
        let thresholds = Self::load_yaml::<ThresholdTable>(&thresholds_path)?;
        Self::validate_thresholds(&thresholds, &thresholds_path)?;

        let bonuses_path = path.join("bonuses.yaml");
        let bonuses = Self::load_yaml::<BonusTable>(&bonuses_path)?;
        if !bonuses.is_non_negative() {
            return Err(EngineError::ConfigInvalid {
                path: bonuses_path.display().to_string(),
                message: "bonus amounts must not be negative".to_string(),
            });
        }

        let config = EligibilityConfig::new(
            program.program,
            thresholds,
            bonuses,
            program.child_bonus_reporting,
        );

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in tables.
    pub fn standard() -> Self {
        Self {
            config: EligibilityConfig::standard().clone(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Checks every threshold row for negative figures and tier ordering.
    fn validate_thresholds(table: &ThresholdTable, path: &Path) -> EngineResult<()> {
        for (label, row) in table.rows() {
            if !row.is_non_negative() {
                return Err(EngineError::ConfigInvalid {
                    path: path.display().to_string(),
                    message: format!("row {} has a negative threshold", label),
                });
            }
            if !row.is_monotonic() {
                return Err(EngineError::ConfigInvalid {
                    path: path.display().to_string(),
                    message: format!("row {} has a Group B threshold below Group A", label),
                });
            }
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EligibilityConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn program(&self) -> &ProgramMetadata {
        self.config.program()
    }

    /// Returns the child bonus reporting mode.
    pub fn child_bonus_reporting(&self) -> ChildBonusReporting {
        self.config.child_bonus_reporting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    /// Copies the shipped config into a scratch directory, replacing one file.
    fn config_with_override(test_name: &str, file: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "housing-eligibility-{}-{}",
            test_name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        for name in ["program.yaml", "thresholds.yaml", "bonuses.yaml"] {
            fs::copy(Path::new(config_path()).join(name), dir.join(name)).unwrap();
        }
        fs::write(dir.join(file), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.program().code, "default");
        assert_eq!(
            loader.child_bonus_reporting(),
            ChildBonusReporting::SingleRates
        );
    }

    #[test]
    fn test_shipped_files_match_builtin_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), EligibilityConfig::standard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("program.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_yaml_returns_parse_error() {
        let dir = config_with_override("malformed", "bonuses.yaml", "marriage_bonus: [");

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("bonuses.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_non_monotonic_thresholds_are_rejected() {
        let thresholds = r#"
without_children:
  one_adult:
    base: { gross_a: 60000, net_a: 23540, gross_b: 52724, net_b: 32956 }
    retired: { gross_a: 31076, net_a: 23540, gross_b: 40911, net_b: 32956 }
  two_adults:
    base: { gross_a: 51777, net_a: 28350, gross_b: 69496, net_b: 39690 }
    retired: { gross_a: 42668, net_a: 28350, gross_b: 56244, net_b: 39690 }
with_children:
  one_adult:
    base: { gross_a: 53121, net_a: 29210, gross_b: 71377, net_b: 40894 }
    retired: { gross_a: 31076, net_a: 23540, gross_b: 40911, net_b: 32956 }
  two_adults:
    base: { gross_a: 57074, net_a: 35740, gross_b: 79411, net_b: 50036 }
    retired: { gross_a: 42668, net_a: 28350, gross_b: 56244, net_b: 39690 }
"#;
        let dir = config_with_override("non-monotonic", "thresholds.yaml", thresholds);

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigInvalid { message, .. }) => {
                assert!(message.contains("without_children.one_adult.base"));
            }
            other => panic!("Expected ConfigInvalid, got {:?}", other),
        }
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let bonuses = r#"
marriage_bonus: -1
child_bonus:
  single: { gross_a: 5297, net_a: 7390, gross_b: 9916, net_b: 10346 }
  couple: { gross_a: 11547, net_a: 7390, gross_b: 16166, net_b: 10346 }
"#;
        let dir = config_with_override("negative-bonus", "bonuses.yaml", bonuses);

        assert!(matches!(
            ConfigLoader::load(&dir),
            Err(EngineError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_standard_loader_uses_builtin_tables() {
        let loader = ConfigLoader::standard();
        assert_eq!(loader.config(), EligibilityConfig::standard());
    }
}
