//! Subscriber settings: console format, optional JSONL file, field layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Everything [`FolioSubscriberBuilder`](crate::FolioSubscriberBuilder) needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or `folio_site=debug`.
    pub default_level: String,
    pub console: ConsoleConfig,
    /// `None` keeps logs on the console only.
    pub file: Option<FileConfig>,
    pub jsonl: JsonlConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            default_level: "info".to_string(),
            console: ConsoleConfig::default(),
            file: None,
            jsonl: JsonlConfig::default(),
        }
    }
}

impl LogConfig {
    /// Colored human-readable console at debug level.
    pub fn development() -> Self {
        Self {
            default_level: "debug".to_string(),
            console: ConsoleConfig {
                enabled: true,
                pretty: true,
                ansi: true,
                level: Some("debug".to_string()),
            },
            ..Default::default()
        }
    }

    /// Returns the filter directive used when `RUST_LOG` is unset.
    ///
    /// A console-specific level wins over the default level.
    pub fn effective_level(&self) -> &str {
        self.console
            .level
            .as_deref()
            .filter(|_| self.console.enabled)
            .unwrap_or(&self.default_level)
    }
}

/// Stdout sink.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub enabled: bool,
    /// Plain text lines instead of JSONL.
    pub pretty: bool,
    pub ansi: bool,
    /// Overrides [`LogConfig::default_level`] while the console is enabled.
    pub level: Option<String>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pretty: false,
            ansi: false,
            level: None,
        }
    }
}

/// JSONL file sink, always written through a non-blocking worker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub directory: PathBuf,
    /// File name stem: `folio.log`, or `folio.2026-10-14` when rotating daily.
    pub prefix: String,
    pub rotation: RotationStrategy,
}

impl FileConfig {
    /// Daily files named `folio.<date>` inside `directory`.
    pub fn daily(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: "folio".to_string(),
            rotation: RotationStrategy::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    /// One file, truncated at startup.
    Never,
}

/// Which span and source fields each JSONL line carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonlConfig {
    /// Event fields at the top level instead of under `fields`.
    pub flatten_events: bool,
    pub include_spans: bool,
    pub include_current_span: bool,
    /// Source file and line.
    pub include_location: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
            include_current_span: true,
            include_location: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_jsonl_console_at_info() {
        let config = LogConfig::default();
        assert_eq!(config.effective_level(), "info");
        assert!(config.console.enabled);
        assert!(!config.console.pretty);
        assert!(config.file.is_none());
    }

    #[test]
    fn test_development_is_pretty_debug() {
        let config = LogConfig::development();
        assert_eq!(config.effective_level(), "debug");
        assert!(config.console.pretty);
        assert!(config.console.ansi);
    }

    #[test]
    fn test_console_level_only_counts_while_enabled() {
        let mut config = LogConfig {
            default_level: "trace".to_string(),
            ..LogConfig::default()
        };
        config.console.level = Some("warn".to_string());
        assert_eq!(config.effective_level(), "warn");

        config.console.enabled = false;
        assert_eq!(config.effective_level(), "trace");
    }

    #[test]
    fn test_daily_file_config() {
        let file = FileConfig::daily("/var/log/folio");
        assert_eq!(file.directory, PathBuf::from("/var/log/folio"));
        assert_eq!(file.prefix, "folio");
        assert_eq!(file.rotation, RotationStrategy::Daily);
    }

    #[test]
    fn test_rotation_serializes_lowercase() {
        let json = serde_json::to_string(&RotationStrategy::Hourly).unwrap();
        assert_eq!(json, "\"hourly\"");
        let parsed: RotationStrategy = serde_json::from_str("\"never\"").unwrap();
        assert_eq!(parsed, RotationStrategy::Never);
    }
}
