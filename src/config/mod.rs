use crate::error::{ErrorCode, FixerError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub mod loader;

pub use loader::ConfigLoader;

/// Input file read when nothing else is configured
pub const DEFAULT_INPUT_PATH: &str = "data.csv";
/// Output file written when nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "data_fixed.csv";
/// Configuration file picked up from the working directory when present
pub const CONFIG_FILE_NAME: &str = "fixer.toml";

pub const ENV_INPUT: &str = "FIXER_INPUT";
pub const ENV_OUTPUT: &str = "FIXER_OUTPUT";

/// Where the projector reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectorConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

/// On-disk shape of `fixer.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
}

impl Default for ProjectorConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

impl ProjectorConfig {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
        }
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Overlay values present in a parsed configuration file
    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(input) = file.input_path {
            self.input_path = input;
        }
        if let Some(output) = file.output_path {
            self.output_path = output;
        }
    }

    /// Overlay `FIXER_INPUT` / `FIXER_OUTPUT` using the given lookup.
    ///
    /// A variable that is set but empty is rejected rather than treated as
    /// an empty path.
    pub fn merge_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(input) = lookup(ENV_INPUT) {
            self.input_path = non_empty_path(ENV_INPUT, input)?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output_path = non_empty_path(ENV_OUTPUT, output)?;
        }
        Ok(())
    }

    /// Reject configurations that cannot possibly run
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.input_path) {
            return Err(invalid_value("input_path must not be empty"));
        }
        if is_blank(&self.output_path) {
            return Err(invalid_value("output_path must not be empty"));
        }
        if self.input_path == self.output_path {
            return Err(invalid_value(format!(
                "input_path and output_path both point to {}",
                self.input_path.display()
            )));
        }
        Ok(())
    }
}

fn non_empty_path(key: &str, value: String) -> Result<PathBuf> {
    if value.trim().is_empty() {
        return Err(invalid_value(format!("{} is set but empty", key)));
    }
    Ok(PathBuf::from(value))
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}

fn invalid_value(message: impl Into<String>) -> FixerError {
    FixerError::config_with_code(ErrorCode::CONFIG_INVALID_VALUE, message, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_match_fixed_file_names() {
        let config = ProjectorConfig::default();
        assert_eq!(config.input_path, PathBuf::from("data.csv"));
        assert_eq!(config.output_path, PathBuf::from("data_fixed.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_file_overrides_only_present_keys() {
        let mut config = ProjectorConfig::default();
        config.merge_file(FileConfig {
            input_path: None,
            output_path: Some(PathBuf::from("out.txt")),
        });

        assert_eq!(config.input_path, PathBuf::from("data.csv"));
        assert_eq!(config.output_path, PathBuf::from("out.txt"));
    }

    #[test]
    fn test_merge_env_overrides_paths() {
        let vars = env(&[("FIXER_INPUT", "in.csv"), ("FIXER_OUTPUT", "out.txt")]);
        let mut config = ProjectorConfig::default();
        config
            .merge_env_with(|key| vars.get(key).cloned())
            .unwrap();

        assert_eq!(config, ProjectorConfig::new("in.csv", "out.txt"));
    }

    #[test]
    fn test_merge_env_rejects_empty_value() {
        let vars = env(&[("FIXER_OUTPUT", "  ")]);
        let mut config = ProjectorConfig::default();
        let err = config
            .merge_env_with(|key| vars.get(key).cloned())
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::CONFIG_INVALID_VALUE);
        assert!(err.to_string().contains("FIXER_OUTPUT"));
    }

    #[test]
    fn test_validate_rejects_same_input_and_output() {
        let config = ProjectorConfig::new("data.csv", "data.csv");
        let err = config.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_validate_rejects_empty_path() {
        let config = ProjectorConfig::default().with_input("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_config_rejects_unknown_keys() {
        let parsed: std::result::Result<FileConfig, _> = toml::from_str("columns = [1, 4]\n");
        assert!(parsed.is_err());
    }
}
