//! transferlead: find, enrich and rank airport ground-transportation
//! operators.
//!
//! The search, crawl, dedup and scoring pipeline lives in the
//! [`lead_search`] crate. This crate supplies what a host needs around it:
//!
//! - **Configuration**: a TOML file with `[pipeline]`, `[export]` and
//!   `[logging]` sections ([`config`])
//! - **Airports**: a bundled directory that resolves loose airport input
//!   into canonical names and cities ([`airports`])
//! - **Export**: CSV and JSON files per run ([`export`])
//! - **Logging**: stderr plus an optional rolling file ([`logging`])
//!
//! The `transferlead` binary wires these together.

pub mod airports;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;

pub use airports::{Airport, AirportDirectory};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use export::FileExporter;

use lead_search::{HttpFetcher, Pipeline, RateLimiter};

/// Build the production pipeline for a config: live HTTP fetcher, built-in
/// airport directory and file exporter.
///
/// # Errors
///
/// Returns an error if the config is invalid or the HTTP client cannot be
/// built.
pub fn build_pipeline(config: &AppConfig) -> Result<Pipeline<HttpFetcher>> {
    config.validate()?;
    let limiter = RateLimiter::new(config.pipeline.max_concurrent_requests);
    let fetcher = HttpFetcher::new(&config.pipeline, limiter)?;
    Ok(Pipeline::new(fetcher, config.pipeline.clone())
        .with_resolver(AirportDirectory::builtin())
        .with_exporter(FileExporter::new(&config.export.dir)))
}
