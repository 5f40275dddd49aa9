//! Rate-limited, retrying page fetcher.
//!
//! Every outbound request in the pipeline goes through a [`PageFetcher`].
//! The production [`HttpFetcher`] takes a slot from a shared
//! [`RateLimiter`], sleeps a random politeness delay while holding it,
//! then issues a GET with a rotated User-Agent and browser-like headers.
//! Failed attempts are retried with exponential backoff outside the slot.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::config::{PipelineConfig, RetryConfig};
use crate::error::{FetchError, LeadError};

/// Realistic browser User-Agent strings, rotated per request.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_7_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/18.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36 Edg/131.0.0.0",
];

const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// A successfully fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
    /// URL after following redirects.
    pub final_url: String,
}

/// Something that can GET a page.
///
/// All implementations must be `Send + Sync`; crawl batches share one
/// fetcher across concurrent tasks.
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, giving up on a single attempt after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] once the implementation's retry policy is
    /// exhausted.
    fn fetch(
        &self,
        url: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<FetchResponse, FetchError>> + Send;
}

/// Fixed-capacity counting limiter shared by every fetch in a run.
///
/// Cloning shares the same underlying slots.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    slots: Arc<Semaphore>,
    capacity: usize,
}

impl RateLimiter {
    /// Create a limiter allowing `capacity` requests in flight.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Arc::new(Semaphore::new(capacity)),
            capacity,
        }
    }

    /// Wait for a free slot. The slot is released when the permit drops.
    pub async fn acquire(&self) -> Result<OwnedSemaphorePermit, FetchError> {
        Arc::clone(&self.slots)
            .acquire_owned()
            .await
            .map_err(|_| FetchError::Network("request limiter closed".into()))
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots not currently held.
    pub fn available(&self) -> usize {
        self.slots.available_permits()
    }
}

/// Random politeness delay drawn uniformly from `range` (milliseconds).
pub fn politeness_delay(range: (u64, u64)) -> Duration {
    let (min, max) = range;
    if max <= min {
        return Duration::from_millis(min);
    }
    Duration::from_millis(rand::thread_rng().gen_range(min..=max))
}

/// Backoff before retry number `attempt` (0-based): base, doubling, capped.
pub fn backoff_delay(retry: &RetryConfig, attempt: u32) -> Duration {
    let delay = retry
        .base_delay_ms
        .saturating_mul(2u64.saturating_pow(attempt.min(20)));
    Duration::from_millis(delay.min(retry.max_delay_ms))
}

/// Select a random User-Agent string from the rotation list.
pub fn random_user_agent() -> &'static str {
    let mut rng = rand::thread_rng();
    USER_AGENTS
        .choose(&mut rng)
        .copied()
        // SAFETY: USER_AGENTS is a non-empty const array, choose only returns None on empty slices
        .unwrap_or(USER_AGENTS[0])
}

/// Production fetcher backed by [`reqwest`].
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    limiter: RateLimiter,
    delay_ms: (u64, u64),
    retry: RetryConfig,
    user_agent: Option<String>,
}

impl HttpFetcher {
    /// Build a fetcher that draws slots from `limiter`.
    ///
    /// The client keeps cookies, follows up to 10 redirects, decompresses
    /// gzip/brotli and routes through `config.proxy` when set.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Config`] if the proxy URL is rejected or the
    /// client cannot be constructed.
    pub fn new(config: &PipelineConfig, limiter: RateLimiter) -> Result<Self, LeadError> {
        let mut builder = reqwest::Client::builder()
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::limited(10));

        if let Some(ref proxy) = config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| LeadError::Config(format!("invalid proxy {proxy}: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| LeadError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            limiter,
            delay_ms: config.request_delay_ms,
            retry: config.retry.clone(),
            user_agent: config.user_agent.clone(),
        })
    }

    /// The limiter this fetcher draws from.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// One attempt: take a slot, sleep the jitter, request, release.
    async fn attempt(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let permit = self.limiter.acquire().await?;
        tokio::time::sleep(politeness_delay(self.delay_ms)).await;
        let outcome = self.send(url, timeout).await;
        drop(permit);
        outcome
    }

    async fn send(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let ua = match self.user_agent {
            Some(ref custom) => custom.clone(),
            None => random_user_agent().to_owned(),
        };

        tracing::trace!(url, "fetching");

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .header(USER_AGENT, ua)
            .header(ACCEPT, BROWSER_ACCEPT)
            .header(ACCEPT_LANGUAGE, BROWSER_ACCEPT_LANGUAGE)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(&e, url))?;

        let status = response.status();
        let final_url = response.url().to_string();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
                url: final_url,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(&e, url))?;

        tracing::trace!(url, bytes = body.len(), "response received");

        Ok(FetchResponse {
            status: status.as_u16(),
            body,
            final_url,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, timeout: Duration) -> Result<FetchResponse, FetchError> {
        let attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;
        loop {
            match self.attempt(url, timeout).await {
                Ok(response) => return Ok(response),
                Err(err) if attempt + 1 < attempts => {
                    let delay = backoff_delay(&self.retry, attempt);
                    tracing::debug!(url, attempt = attempt + 1, error = %err, ?delay, "fetch failed, retrying");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
