//! Application configuration
//!
//! Loaded from TOML. Every key is optional; missing keys take the
//! [`AppConfig::default`] value.
//!
//! ```toml
//! data_file = "streams/delivery.json"
//! export_dir = "exports"
//! log_filter = "vs_editor=debug,info"
//! confirm_deletes = true
//! io_filter = "both"
//!
//! [[lanes]]
//! name = "QA"
//! role = "Testing"
//! phases = [4, 5]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vs_projection::{default_lanes, IoFilter, SwimLane};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "value-stream.toml";

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Settings for the `value-stream` binary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Document to open; the bundled document when unset
    pub data_file: Option<PathBuf>,

    /// Where exports are written
    pub export_dir: PathBuf,

    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,

    /// Ask before deleting a phase
    pub confirm_deletes: bool,

    /// Initial illustration filter
    pub io_filter: IoFilter,

    /// Visualization swim lanes
    pub lanes: Vec<SwimLane>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            export_dir: PathBuf::from("."),
            log_filter: "warn".to_string(),
            confirm_deletes: true,
            io_filter: IoFilter::Both,
            lanes: default_lanes(),
        }
    }
}

impl AppConfig {
    #[inline]
    #[must_use]
    pub fn with_data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = Some(path.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_confirm_deletes(mut self, confirm: bool) -> Self {
        self.confirm_deletes = confirm;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_io_filter(mut self, filter: IoFilter) -> Self {
        self.io_filter = filter;
        self
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Returns error if the text is not valid TOML for this schema
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a config file
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Resolve the configuration for a run
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_FILE`] is
    /// read from `dir` if present, otherwise defaults apply.
    ///
    /// # Errors
    /// Returns error if a config file exists but cannot be read or parsed
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(&fallback)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vs_model::PhaseId;

    #[test]
    fn empty_toml_is_default() {
        let config = AppConfig::from_toml("", Path::new("x.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lanes.len(), 7);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let text = r#"
            export_dir = "out"
            io_filter = "outputs"
            confirm_deletes = false
        "#;
        let config = AppConfig::from_toml(text, Path::new("x.toml")).unwrap();
        assert_eq!(
            config,
            AppConfig::default()
                .with_export_dir("out")
                .with_io_filter(IoFilter::Outputs)
                .with_confirm_deletes(false)
        );
    }

    #[test]
    fn lanes_can_be_replaced() {
        let text = r#"
            [[lanes]]
            name = "QA"
            role = "Testing"
            phases = [4, 5]
        "#;
        let config = AppConfig::from_toml(text, Path::new("x.toml")).unwrap();
        assert_eq!(config.lanes.len(), 1);
        assert_eq!(config.lanes[0].phases, vec![PhaseId(4), PhaseId(5)]);
    }

    #[test]
    fn bad_value_names_the_file() {
        let err = AppConfig::from_toml("io_filter = \"sideways\"", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn load_reads_default_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "log_filter = \"debug\"").unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = AppConfig::load(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
