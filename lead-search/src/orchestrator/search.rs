//! Per-backend harvesting: sequential queries, politeness delays,
//! domain-level dedup and the result cap.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::PipelineConfig;
use crate::engine::SearchBackend;
use crate::http::{politeness_delay, PageFetcher};
use crate::identity::registrable_domain;
use crate::text::{clean_company_name, extract_phones, truncate_chars};
use crate::types::{Backend, Lead, LocationContext, SearchHit};

/// Snippet characters kept in a fresh lead's notes.
const SNIPPET_NOTE_CHARS: usize = 300;

/// Run one backend's query plan and collect unique hits.
///
/// Queries run strictly one after another with a politeness delay in
/// between. A failing query is logged and skipped. Hits are unique by
/// registrable domain and capped at `config.max_results_per_backend`.
/// Cancellation is honoured before each query and during the delay.
pub async fn harvest<F, B>(
    fetcher: &F,
    config: &PipelineConfig,
    backend: &B,
    ctx: &LocationContext,
    keywords: &[String],
    cancel: &CancellationToken,
) -> Vec<SearchHit>
where
    F: PageFetcher,
    B: SearchBackend + ?Sized,
{
    let name = backend.backend();
    let queries = backend.build_queries(ctx, keywords);
    let cap = config.max_results_per_backend;
    let timeout = Duration::from_secs(config.timeout_seconds);

    let mut hits: Vec<SearchHit> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (i, query) in queries.iter().enumerate() {
        if hits.len() >= cap {
            break;
        }
        if cancel.is_cancelled() {
            tracing::info!(backend = %name, "search cancelled");
            break;
        }
        if i > 0 {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!(backend = %name, "search cancelled");
                    break;
                }
                () = tokio::time::sleep(politeness_delay(config.request_delay_ms)) => {}
            }
        }

        tracing::trace!(backend = %name, query, "querying backend");
        let response = match fetcher.fetch(&backend.search_url(query), timeout).await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(backend = %name, query, error = %err, "search query failed, skipping");
                continue;
            }
        };

        let parsed = backend.parse(&response.body);
        let before = hits.len();
        for hit in parsed {
            let domain = registrable_domain(&hit.url);
            if domain.is_empty() || !seen.insert(domain) {
                continue;
            }
            hits.push(hit);
            if hits.len() >= cap {
                break;
            }
        }
        tracing::debug!(backend = %name, query, new = hits.len() - before, total = hits.len(), "query harvested");
    }

    hits
}

/// Assemble a preliminary lead from a search hit.
pub fn lead_from_hit(hit: &SearchHit, backend: Backend, ctx: &LocationContext) -> Lead {
    Lead {
        company_name: clean_company_name(&hit.title),
        website: hit.url.clone(),
        phone: extract_phones(&hit.snippet)
            .into_iter()
            .next()
            .unwrap_or_default(),
        city: ctx.city.clone(),
        country: ctx.country.clone(),
        notes: truncate_chars(hit.snippet.trim(), SNIPPET_NOTE_CHARS),
        source: backend.source_id().to_owned(),
        ..Default::default()
    }
}

/// Harvest one backend and turn its hits into leads.
pub async fn backend_leads<F>(
    fetcher: &F,
    config: &PipelineConfig,
    backend: Backend,
    ctx: &LocationContext,
    keywords: &[String],
    cancel: &CancellationToken,
) -> Vec<Lead>
where
    F: PageFetcher,
{
    let implementation = crate::engines::backend_for(backend);
    let hits = harvest(fetcher, config, implementation.as_ref(), ctx, keywords, cancel).await;
    tracing::info!(backend = %backend, hits = hits.len(), "backend finished");
    hits.iter()
        .map(|hit| lead_from_hit(hit, backend, ctx))
        .collect()
}
