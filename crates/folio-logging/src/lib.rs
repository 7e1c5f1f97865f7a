//! Console and JSONL file logging for the Folio portfolio
//!
//! # Quick Start
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! // JSONL to console
//! let _guard = FolioSubscriberBuilder::new().init()?;
//!
//! // Development mode with pretty human-readable output
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init()?;
//! ```
//!
//! The returned [`LogGuard`] flushes the non-blocking file writer when dropped,
//! so keep it alive for the lifetime of the process.

pub mod config;

pub use config::{ConsoleConfig, FileConfig, JsonlConfig, LogConfig, RotationStrategy};

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{
    layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Errors raised while installing the global subscriber
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create log file {path}: {source}")]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the background file writer alive; dropping it flushes pending lines.
#[must_use = "dropping the guard stops file logging"]
#[derive(Default)]
pub struct LogGuard {
    file: Option<WorkerGuard>,
}

impl LogGuard {
    /// Whether a file writer is attached.
    pub fn has_file_writer(&self) -> bool {
        self.file.is_some()
    }
}

/// Assembles the console and file layers and installs them globally.
///
/// Starts from [`LogConfig::default`]: JSONL on stdout at `info`, no file.
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Switch the console between pretty and JSONL output
    pub fn with_pretty_console(mut self, pretty: bool) -> Self {
        self.config.console.pretty = pretty;
        self.config.console.ansi = pretty;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Returns the configuration the subscriber will be built from.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Install the subscriber globally.
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    pub fn init(self) -> Result<LogGuard, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.config.effective_level()));

        let mut layers: Vec<BoxedLayer> = Vec::new();
        let mut guard = LogGuard::default();

        if self.config.console.enabled {
            let console_layer = if self.config.console.pretty {
                tracing_subscriber::fmt::layer()
                    .with_ansi(self.config.console.ansi)
                    .with_target(true)
                    .boxed()
            } else {
                json_layer(&self.config.jsonl, std::io::stdout)
            };
            layers.push(console_layer);
        }

        if let Some(file_config) = &self.config.file {
            let (writer, worker) = create_file_writer(file_config)?;
            layers.push(json_layer(&self.config.jsonl, writer));
            guard.file = Some(worker);
        }

        Registry::default().with(layers).with(env_filter).try_init()?;

        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn json_layer<W>(jsonl: &JsonlConfig, writer: W) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(jsonl.include_current_span)
        .with_span_list(jsonl.include_spans)
        .flatten_event(jsonl.flatten_events)
        .with_file(jsonl.include_location)
        .with_line_number(jsonl.include_location)
        .with_writer(writer)
        .boxed()
}

/// Truncates a single file for `Never` rotation, appends to rolling files otherwise.
fn create_file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggingError> {
    fs::create_dir_all(&config.directory).map_err(|source| LoggingError::CreateDir {
        path: config.directory.clone(),
        source,
    })?;

    let rotation = match config.rotation {
        RotationStrategy::Never => {
            let path = log_file_path(config);
            let file = File::create(&path)
                .map_err(|source| LoggingError::CreateFile { path, source })?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };

    let appender = RollingFileAppender::new(rotation, &config.directory, &config.prefix);
    Ok(tracing_appender::non_blocking(appender))
}

/// Path of the single log file used by `Never` rotation.
fn log_file_path(config: &FileConfig) -> PathBuf {
    config.directory.join(format!("{}.log", config.prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = FolioSubscriberBuilder::new();
        assert_eq!(builder.config().default_level, "info");
    }

    #[test]
    fn test_default_is_jsonl() {
        let builder = FolioSubscriberBuilder::new();
        assert!(!builder.config().console.pretty);
    }

    #[test]
    fn test_builder_with_level() {
        let builder = FolioSubscriberBuilder::new().with_level("trace");
        assert_eq!(builder.config().default_level, "trace");
    }

    #[test]
    fn test_builder_with_pretty_console() {
        let builder = FolioSubscriberBuilder::new().with_pretty_console(true);
        assert!(builder.config().console.pretty);
        assert!(builder.config().console.ansi);
    }

    #[test]
    fn test_builder_with_file_output() {
        let builder = FolioSubscriberBuilder::new()
            .with_console(false)
            .with_file_output(FileConfig::daily("logs"));
        assert!(!builder.config().console.enabled);
        assert_eq!(builder.config().file.as_ref().unwrap().prefix, "folio");
    }

    #[test]
    fn test_log_file_path_uses_prefix() {
        let config = FileConfig {
            directory: PathBuf::from("/tmp/folio-logs"),
            prefix: "site".to_string(),
            rotation: RotationStrategy::Never,
        };
        assert_eq!(log_file_path(&config), PathBuf::from("/tmp/folio-logs/site.log"));
    }

    #[test]
    fn test_create_dir_error_reports_path() {
        let config = FileConfig {
            // A regular file cannot be used as a log directory
            directory: PathBuf::from("Cargo.toml/logs"),
            ..FileConfig::daily("logs")
        };
        let Err(err) = create_file_writer(&config) else {
            panic!("expected directory creation to fail");
        };
        assert!(matches!(err, LoggingError::CreateDir { .. }));
        assert!(err.to_string().contains("Cargo.toml/logs"));
    }

    #[test]
    fn test_guard_reports_file_writer() {
        assert!(!LogGuard::default().has_file_writer());

        let directory = std::env::temp_dir().join(format!("folio-log-{}", std::process::id()));
        let config = FileConfig {
            rotation: RotationStrategy::Never,
            ..FileConfig::daily(&directory)
        };
        let Ok((_writer, worker)) = create_file_writer(&config) else {
            panic!("expected the log file to be created");
        };
        let guard = LogGuard { file: Some(worker) };
        assert!(guard.has_file_writer());
        assert!(log_file_path(&config).exists());

        drop(guard);
        let _ = fs::remove_dir_all(&directory);
    }
}
