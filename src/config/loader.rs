use super::{FileConfig, ProjectorConfig, CONFIG_FILE_NAME};
use crate::error::{common, ErrorCode, ErrorExt, FixerError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds a [`ProjectorConfig`] from defaults, an optional TOML file and the
/// environment, in that order of precedence.
pub struct ConfigLoader {
    working_dir: PathBuf,
    explicit_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            explicit_file: None,
        }
    }

    /// Use this file instead of looking for `fixer.toml`. It must exist.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.explicit_file = Some(path.into());
        self
    }

    /// Load using the real process environment
    pub fn load(&self) -> Result<ProjectorConfig> {
        self.load_with_env(|key| std::env::var(key).ok())
    }

    pub fn load_with_env<F>(&self, lookup: F) -> Result<ProjectorConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ProjectorConfig::default();

        if let Some(path) = self.config_file()? {
            debug!("Loading configuration from {}", path.display());
            config.merge_file(read_file_config(&path)?);
        }

        config.merge_env_with(lookup)?;
        Ok(config)
    }

    fn config_file(&self) -> Result<Option<PathBuf>> {
        if let Some(path) = &self.explicit_file {
            if !path.is_file() {
                return Err(common::config_not_found(path));
            }
            return Ok(Some(path.clone()));
        }

        let implicit = self.working_dir.join(CONFIG_FILE_NAME);
        Ok(implicit.is_file().then_some(implicit))
    }
}

fn read_file_config(path: &Path) -> Result<FileConfig> {
    let content = fs::read_to_string(path)
        .to_config_error("failed to read configuration file")
        .map_err(|e| e.with_path(path))?;

    toml::from_str(&content).map_err(|e| {
        FixerError::config_with_code(
            ErrorCode::CONFIG_PARSE_ERROR,
            "invalid configuration file",
            Some(path.to_path_buf()),
        )
        .with_source(e)
    })
}
