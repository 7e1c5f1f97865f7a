//! Command-line and environment configuration.

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use folio_logging::{FileConfig, FolioSubscriberBuilder, LogConfig, LogGuard};

use crate::theme::ThemeMode;

/// Process-wide configuration, set once before launch.
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "folio")]
#[command(about = "Animated, themeable personal portfolio")]
pub struct SiteConfig {
    /// Theme shown on start
    #[arg(long, value_enum, env = "FOLIO_THEME", default_value = "dark")]
    pub theme: ThemeMode,

    /// Default log filter (RUST_LOG takes precedence)
    #[arg(long, env = "FOLIO_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Write JSONL logs into this directory
    #[arg(long, env = "FOLIO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Human-readable console logs instead of JSONL
    #[arg(long, env = "FOLIO_LOG_PRETTY")]
    pub pretty: bool,

    /// Window width in logical pixels
    #[arg(long, env = "FOLIO_WIN_W", default_value_t = 1280.0)]
    pub width: f64,

    /// Window height in logical pixels
    #[arg(long, env = "FOLIO_WIN_H", default_value_t = 900.0)]
    pub height: f64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            log_level: "info".to_string(),
            log_dir: None,
            pretty: false,
            width: 1280.0,
            height: 900.0,
        }
    }
}

impl SiteConfig {
    /// Builds the logging configuration these arguments describe.
    pub fn log_config(&self) -> LogConfig {
        let mut config = if self.pretty {
            LogConfig::development()
        } else {
            LogConfig::default()
        };
        config.default_level = self.log_level.clone();
        config.console.level = None;
        config.file = self.log_dir.as_ref().map(FileConfig::daily);
        config
    }

    /// Installs the global subscriber; keep the guard alive until exit.
    pub fn init_logging(&self) -> crate::Result<LogGuard> {
        let guard = FolioSubscriberBuilder::new()
            .with_config(self.log_config())
            .init()?;
        Ok(guard)
    }

    /// Stores this configuration for the running process.
    ///
    /// Only the first call has an effect.
    pub fn install(self) {
        if SITE_CONFIG.set(self).is_err() {
            tracing::warn!("Site configuration already installed, keeping the first one");
        }
    }

    /// Returns the installed configuration, or the defaults when none was installed.
    pub fn current() -> SiteConfig {
        SITE_CONFIG.get().cloned().unwrap_or_default()
    }
}
