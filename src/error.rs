//! Error types for the transferlead host.

/// Top-level error type for configuration, logging and export.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration file could not be parsed or is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// Logging could not be initialised.
    #[error("logging error: {0}")]
    Logging(String),

    /// Export file could not be written.
    #[error("export error: {0}")]
    Export(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Pipeline error surfaced by the search library.
    #[error(transparent)]
    Lead(#[from] lead_search::LeadError),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
