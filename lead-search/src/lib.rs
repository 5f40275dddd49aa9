//! # lead-search
//!
//! Discovers ground-transportation companies (airport transfer, chauffeur,
//! taxi and shuttle operators) near a location, enriches them from their
//! own websites, and ranks them as sales leads.
//!
//! ## Design
//!
//! - Scrapes DuckDuckGo, Bing and Google result pages with CSS selectors,
//!   falling back through alternative layouts when markup drifts
//! - One shared request limiter caps outbound concurrency across search
//!   and crawling; every request is preceded by a random politeness delay
//! - Crawls each candidate's homepage plus a few contact/about pages for
//!   emails, phones, LinkedIn and service signals
//! - Merges duplicates by registrable domain and scores leads 0-100
//! - Graceful degradation: failed queries and unreachable sites are
//!   logged and skipped, never fatal
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> lead_search::Result<()> {
//! use lead_search::{HttpFetcher, Pipeline, PipelineConfig, RateLimiter, SearchRequest};
//!
//! let config = PipelineConfig::default();
//! let fetcher = HttpFetcher::new(&config, RateLimiter::new(config.max_concurrent_requests))?;
//! let pipeline = Pipeline::new(fetcher, config);
//! let result = pipeline
//!     .run_to_completion(SearchRequest::new("France", "Paris Charles de Gaulle"))
//!     .await?;
//! for lead in &result.leads {
//!     println!("{:>3} {} {}", lead.score, lead.company_name, lead.website);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod content;
pub mod crawler;
pub mod engine;
pub mod engines;
pub mod error;
pub mod export;
pub mod http;
pub mod identity;
pub mod location;
pub mod orchestrator;
pub mod text;
pub mod types;

pub use config::{PipelineConfig, RetryConfig, DEFAULT_KEYWORDS};
pub use crawler::Crawler;
pub use engine::{ParseStrategy, SearchBackend};
pub use error::{FetchError, FetchErrorKind, LeadError, Result};
pub use export::{ExportArtifacts, ExportRecord, LeadExporter, NoopExporter, EXPORT_COLUMNS};
pub use http::{FetchResponse, HttpFetcher, PageFetcher, RateLimiter};
pub use location::{LocationResolver, PassthroughResolver};
pub use orchestrator::Pipeline;
pub use types::{
    Backend, Lead, LocationContext, PipelineEvent, ProgressEvent, ResultEvent, SearchHit,
    SearchRequest, Stage,
};
pub use tokio_util::sync::CancellationToken;

#[cfg(test)]
mod tests {
    use super::*;

    struct Unreachable;

    impl PageFetcher for Unreachable {
        async fn fetch(
            &self,
            url: &str,
            _timeout: std::time::Duration,
        ) -> std::result::Result<FetchResponse, FetchError> {
            Err(FetchError::Network(format!("unreachable: {url}")))
        }
    }

    #[tokio::test]
    async fn run_rejects_missing_country() {
        let pipeline = Pipeline::new(Unreachable, PipelineConfig::default());
        let err = pipeline
            .run_to_completion(SearchRequest::new("", "CDG"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("country"));
    }

    #[tokio::test]
    async fn run_rejects_invalid_config() {
        let config = PipelineConfig {
            crawl_batch_size: 0,
            ..Default::default()
        };
        let pipeline = Pipeline::new(Unreachable, config);
        assert!(pipeline.run(SearchRequest::new("France", "CDG")).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn all_backends_failing_yields_empty_result() {
        let pipeline = Pipeline::new(Unreachable, PipelineConfig::default());
        let result = pipeline
            .run_to_completion(SearchRequest::new("France", "Lyon"))
            .await
            .expect("pipeline completes");
        assert_eq!(result.total, 0);
        assert!(result.leads.is_empty());
        assert_eq!(result.query, "Lyon, Lyon, France");
        assert!(result.export_csv_path.is_none());
    }
}
