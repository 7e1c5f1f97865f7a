//! Entry point for the portfolio.

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use folio_site::components::App;
use folio_site::config::SiteConfig;
use folio_site::content::DISPLAY_NAME;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

fn main() -> anyhow::Result<()> {
    let config = SiteConfig::parse();
    let log_guard = config
        .init_logging()
        .context("failed to initialize logging")?;

    tracing::info!(
        theme = config.theme.css_value(),
        width = config.width,
        height = config.height,
        file_logging = log_guard.has_file_writer(),
        "Starting portfolio"
    );

    let window = WindowBuilder::new()
        .with_title(format!("{DISPLAY_NAME} - Portfolio"))
        .with_inner_size(LogicalSize::new(config.width, config.height));

    config.install();

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!("<style>{}</style>", STYLES_CSS)),
        )
        .launch(App);

    Ok(())
}
