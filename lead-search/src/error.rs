//! Error types for the lead-search crate.
//!
//! Fetch failures carry a coarse [`FetchErrorKind`] so callers can tell a
//! timeout from an HTTP status without string matching. Everything else
//! is folded into [`LeadError`] with stable, lower-case messages.

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// Connection refused, DNS failure, TLS failure, body read failure.
    Network,
    /// The server answered with a non-2xx status.
    Http,
    /// The request did not complete within its timeout.
    Timeout,
}

/// A fetch that failed after all retry attempts.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Response status code.
        status: u16,
        /// Final URL after redirects.
        url: String,
    },

    /// Per-call timeout elapsed.
    #[error("request timed out: {0}")]
    Timeout(String),
}

impl FetchError {
    /// Returns the coarse kind of this failure.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network(_) => FetchErrorKind::Network,
            Self::Http { .. } => FetchErrorKind::Http,
            Self::Timeout(_) => FetchErrorKind::Timeout,
        }
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            Self::Timeout(url.to_owned())
        } else if let Some(status) = err.status() {
            Self::Http {
                status: status.as_u16(),
                url: url.to_owned(),
            }
        } else {
            Self::Network(format!("{url}: {err}"))
        }
    }
}

/// Errors surfaced by the lead pipeline.
#[derive(Debug, thiserror::Error)]
pub enum LeadError {
    /// A page could not be fetched.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Invalid pipeline configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Malformed search request.
    #[error("invalid request: {0}")]
    Validation(String),

    /// Writing export artifacts failed.
    #[error("export error: {0}")]
    Export(String),
}

/// Convenience type alias for lead-search results.
pub type Result<T> = std::result::Result<T, LeadError>;
