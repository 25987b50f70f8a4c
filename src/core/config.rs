//! Logger configuration
//!
//! [`LoggerConfig`] holds the construction parameters: minimum level, target
//! directory and application name. It can be built in code,
//! through [`LoggerBuilder`](super::LoggerBuilder), or loaded from JSON:
//!
//! ```
//! use rust_queue_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{ "level": "warning", "app_name": "billing" }"#).unwrap();
//! assert_eq!(config.level, "warning");
//! assert!(config.log_path("src/main.rs").ends_with("billing.log"));
//! ```

use super::call_site::source_name_of;
use super::error::{LoggerError, Result};
use super::filter::SeverityFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Log file stem used when neither an application name nor a source file name is known.
pub const DEFAULT_APP_NAME: &str = "application";

/// Extension of every log file.
pub const LOG_FILE_EXTENSION: &str = "log";

/// Root of the system drive: `C:\` on Windows, `/` elsewhere.
pub fn default_log_directory() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from(r"C:\")
    } else {
        PathBuf::from("/")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// One of `DEBUG`, `INFO`, `WARNING`, `ERROR` or `EXCEPTION`, any case
    pub level: String,

    /// Directory that holds the log file; created if missing
    pub directory: PathBuf,

    /// Log file stem; blank means "derive from the caller's source file"
    pub app_name: Option<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: "INFO".to_string(),
            directory: default_log_directory(),
            app_name: None,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation("reading logger config", path.display().to_string(), e)
        })?;
        Self::from_json(&json)
    }

    /// Reject values that cannot name a log file.
    pub fn validate(&self) -> Result<()> {
        if self.directory.as_os_str().is_empty() {
            return Err(LoggerError::config("directory", "must not be empty"));
        }
        if let Some(name) = self.app_name.as_deref() {
            if name.contains(&['/', '\\'][..]) {
                return Err(LoggerError::config(
                    "app_name",
                    format!("'{}' must not contain a path separator", name),
                ));
            }
        }
        Ok(())
    }

    /// File stem for the log: the application name if set, otherwise the
    /// stem of `source_path`, otherwise [`DEFAULT_APP_NAME`].
    pub fn file_stem(&self, source_path: &str) -> String {
        if let Some(name) = self.app_name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name.to_string();
        }
        match source_name_of(source_path) {
            "" => DEFAULT_APP_NAME.to_string(),
            stem => stem.to_string(),
        }
    }

    /// `<directory>/<file stem>.log`
    pub fn log_path(&self, source_path: &str) -> PathBuf {
        self.directory
            .join(format!("{}.{}", self.file_stem(source_path), LOG_FILE_EXTENSION))
    }

    /// Filter for the configured level; an unrecognized level keeps the default `INFO`.
    pub fn severity_filter(&self) -> SeverityFilter {
        let mut filter = SeverityFilter::default();
        if !filter.set_level_str(&self.level) {
            tracing::warn!(level = %self.level, "unrecognized log level, keeping INFO");
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::log_level::LogLevel;

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::default();
        assert_eq!(config.level, "INFO");
        assert_eq!(config.directory, default_log_directory());
        assert_eq!(config.app_name, None);
    }

    #[test]
    fn test_app_name_wins() {
        let config = LoggerConfig {
            directory: PathBuf::from("logs"),
            app_name: Some("billing".to_string()),
            ..LoggerConfig::default()
        };
        assert_eq!(config.log_path("src/main.rs"), PathBuf::from("logs").join("billing.log"));
    }

    #[test]
    fn test_blank_app_name_falls_back_to_source() {
        let config = LoggerConfig {
            directory: PathBuf::from("logs"),
            app_name: Some("   ".to_string()),
            ..LoggerConfig::default()
        };
        assert_eq!(config.log_path("src/worker.rs"), PathBuf::from("logs").join("worker.log"));
    }

    #[test]
    fn test_no_name_at_all() {
        let config = LoggerConfig::default();
        assert_eq!(config.file_stem(""), DEFAULT_APP_NAME);
    }

    #[test]
    fn test_from_json_partial() {
        let config = LoggerConfig::from_json(r#"{ "level": "error", "directory": "/tmp/app" }"#).unwrap();
        assert_eq!(config.directory, PathBuf::from("/tmp/app"));
        assert_eq!(config.app_name, None);
        assert_eq!(config.severity_filter().min_level(), LogLevel::Error);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = LoggerConfig::from_json("{ level: ").unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_from_missing_file() {
        let err = LoggerConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_validate() {
        assert!(LoggerConfig::default().validate().is_ok());

        let empty_dir = LoggerConfig {
            directory: PathBuf::new(),
            ..LoggerConfig::default()
        };
        assert!(matches!(
            empty_dir.validate(),
            Err(LoggerError::InvalidConfiguration { ref component, .. }) if component == "directory"
        ));

        let nested_name = LoggerConfig {
            app_name: Some("team/billing".to_string()),
            ..LoggerConfig::default()
        };
        let err = nested_name.validate().unwrap_err();
        assert!(err.to_string().contains("app_name"));
    }

    #[test]
    fn test_unrecognized_level_keeps_info() {
        for level in ["chatty", "OFF", "WARN", " warning "] {
            let config = LoggerConfig {
                level: level.to_string(),
                ..LoggerConfig::default()
            };
            assert_eq!(config.severity_filter().min_level(), LogLevel::Info, "{:?}", level);
        }
    }
}
