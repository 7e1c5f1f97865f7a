//! Error type for the portfolio library.

/// Errors raised while setting up the portfolio.
///
/// Nothing in the rendered page fails visibly; these only surface at startup.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("typewriter needs at least one phrase")]
    EmptyPhraseList,

    #[error(transparent)]
    Logging(#[from] folio_logging::LoggingError),
}

pub type Result<T> = std::result::Result<T, SiteError>;
