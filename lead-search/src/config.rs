//! Pipeline configuration with sensible defaults.
//!
//! [`PipelineConfig`] controls politeness (concurrency cap, jitter, retry
//! backoff), harvesting caps, crawl batching and which backends run. The
//! defaults are tuned for slow, polite scraping rather than throughput.

use serde::{Deserialize, Serialize};

use crate::error::LeadError;
use crate::types::Backend;

/// Seed keywords used when a request carries no overrides.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "airport transfer",
    "chauffeur service",
    "taxi service",
    "private transfer",
    "limousine service",
    "shuttle service",
];

/// Retry policy for failed fetches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts including the first one.
    pub max_attempts: u32,
    /// Delay before the second attempt; doubles after each failure.
    pub base_delay_ms: u64,
    /// Upper bound for a single backoff delay.
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay_ms: 2_000,
            max_delay_ms: 10_000,
        }
    }
}

/// Configuration for a lead search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Capacity of the shared outbound request limiter.
    pub max_concurrent_requests: usize,
    /// Random politeness delay range in milliseconds `(min, max)`, slept
    /// before every request and between successive backend queries.
    pub request_delay_ms: (u64, u64),
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    pub retry: RetryConfig,
    /// Upstream HTTP proxy URL.
    pub proxy: Option<String>,
    /// Fixed User-Agent. If `None`, rotates through built-in browser strings.
    pub user_agent: Option<String>,
    /// Maximum unique hits harvested per backend.
    pub max_results_per_backend: usize,
    /// Maximum contact/about pages fetched per lead.
    pub max_pages_to_crawl: usize,
    /// Leads enriched concurrently per batch.
    pub crawl_batch_size: usize,
    /// Backends to query. Always run in priority order.
    pub backends: Vec<Backend>,
    /// Run backends concurrently instead of one after another.
    pub concurrent_backends: bool,
    /// Keywords used when the request supplies none.
    pub default_keywords: Vec<String>,
    /// Capacity of the progress event channel.
    pub progress_buffer: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_concurrent_requests: 3,
            request_delay_ms: (1_500, 3_500),
            timeout_seconds: 20,
            retry: RetryConfig::default(),
            proxy: None,
            user_agent: None,
            max_results_per_backend: 20,
            max_pages_to_crawl: 5,
            crawl_batch_size: 5,
            backends: Backend::all().to_vec(),
            concurrent_backends: false,
            default_keywords: DEFAULT_KEYWORDS.iter().map(|k| (*k).to_owned()).collect(),
            progress_buffer: 32,
        }
    }
}

impl PipelineConfig {
    /// Validates this configuration, returning an error if any field is invalid.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.max_concurrent_requests == 0 {
            return Err(LeadError::Config(
                "max_concurrent_requests must be greater than 0".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(LeadError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.request_delay_ms.0 > self.request_delay_ms.1 {
            return Err(LeadError::Config(
                "request_delay_ms min must be <= max".into(),
            ));
        }
        if self.retry.max_attempts == 0 {
            return Err(LeadError::Config(
                "retry.max_attempts must be greater than 0".into(),
            ));
        }
        if self.retry.base_delay_ms > self.retry.max_delay_ms {
            return Err(LeadError::Config(
                "retry.base_delay_ms must be <= retry.max_delay_ms".into(),
            ));
        }
        if self.max_results_per_backend == 0 {
            return Err(LeadError::Config(
                "max_results_per_backend must be greater than 0".into(),
            ));
        }
        if self.crawl_batch_size == 0 {
            return Err(LeadError::Config(
                "crawl_batch_size must be greater than 0".into(),
            ));
        }
        if self.backends.is_empty() {
            return Err(LeadError::Config(
                "at least one backend must be enabled".into(),
            ));
        }
        if self.progress_buffer == 0 {
            return Err(LeadError::Config(
                "progress_buffer must be greater than 0".into(),
            ));
        }
        if let Some(proxy) = &self.proxy {
            if url::Url::parse(proxy).is_err() {
                return Err(LeadError::Config(format!("proxy is not a valid URL: {proxy}")));
            }
        }
        Ok(())
    }

    /// Enabled backends in priority order, without duplicates.
    pub fn ordered_backends(&self) -> Vec<Backend> {
        let mut backends = self.backends.clone();
        backends.sort();
        backends.dedup();
        backends
    }

    /// Keywords for a request: its overrides when non-empty, else the defaults.
    pub fn keywords_for(&self, overrides: &[String]) -> Vec<String> {
        let cleaned: Vec<String> = overrides
            .iter()
            .map(|k| k.trim().to_owned())
            .filter(|k| !k.is_empty())
            .collect();
        if cleaned.is_empty() {
            self.default_keywords.clone()
        } else {
            cleaned
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_concurrent_requests, 3);
        assert_eq!(config.request_delay_ms, (1_500, 3_500));
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.max_results_per_backend, 20);
        assert_eq!(config.max_pages_to_crawl, 5);
        assert_eq!(config.crawl_batch_size, 5);
        assert!(config.proxy.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_concurrency_rejected() {
        let config = PipelineConfig {
            max_concurrent_requests: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrent_requests"));
    }

    #[test]
    fn invalid_delay_range_rejected() {
        let config = PipelineConfig {
            request_delay_ms: (500, 100),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("delay"));
    }

    #[test]
    fn invalid_retry_rejected() {
        let config = PipelineConfig {
            retry: RetryConfig {
                max_attempts: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = PipelineConfig {
            retry: RetryConfig {
                base_delay_ms: 20_000,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("retry"));
    }

    #[test]
    fn empty_backends_rejected() {
        let config = PipelineConfig {
            backends: vec![],
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("backend"));
    }

    #[test]
    fn bad_proxy_rejected() {
        let config = PipelineConfig {
            proxy: Some("not a proxy".into()),
            ..Default::default()
        };
        assert!(config.validate().unwrap_err().to_string().contains("proxy"));
    }

    #[test]
    fn backends_are_ordered_by_priority() {
        let config = PipelineConfig {
            backends: vec![Backend::Google, Backend::DuckDuckGo, Backend::Google],
            ..Default::default()
        };
        assert_eq!(
            config.ordered_backends(),
            vec![Backend::DuckDuckGo, Backend::Google]
        );
    }

    #[test]
    fn keyword_overrides_replace_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.keywords_for(&[]).len(), DEFAULT_KEYWORDS.len());
        assert_eq!(
            config.keywords_for(&["  minibus hire ".into(), "".into()]),
            vec!["minibus hire"]
        );
    }

    #[test]
    fn partial_toml_like_json_fills_defaults() {
        let config: PipelineConfig =
            serde_json::from_str(r#"{"max_concurrent_requests": 7}"#).expect("parse");
        assert_eq!(config.max_concurrent_requests, 7);
        assert_eq!(config.crawl_batch_size, 5);
    }
}
