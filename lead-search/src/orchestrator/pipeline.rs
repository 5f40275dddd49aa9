//! The lead pipeline state machine.
//!
//! `searching → dedup → crawling → dedup → scoring → exporting → done`
//!
//! Crawling is skipped when nothing survives the first dedup. Progress is
//! reported as [`PipelineEvent::Progress`] values followed by exactly one
//! [`PipelineEvent::Result`].

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

use crate::config::PipelineConfig;
use crate::crawler::Crawler;
use crate::error::LeadError;
use crate::export::{ExportArtifacts, LeadExporter, NoopExporter};
use crate::http::PageFetcher;
use crate::location::{LocationResolver, PassthroughResolver};
use crate::types::{
    Backend, Lead, LocationContext, PipelineEvent, ProgressEvent, ResultEvent, SearchRequest, Stage,
};

use super::dedup::merge_leads;
use super::scoring::rank_leads;
use super::search::backend_leads;

/// Runs searches, enrichment, dedup, scoring and export for one request.
///
/// Cheap to clone; all state is shared behind `Arc`s.
pub struct Pipeline<F> {
    fetcher: Arc<F>,
    config: Arc<PipelineConfig>,
    resolver: Arc<dyn LocationResolver>,
    exporter: Arc<dyn LeadExporter>,
}

impl<F> Clone for Pipeline<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            config: Arc::clone(&self.config),
            resolver: Arc::clone(&self.resolver),
            exporter: Arc::clone(&self.exporter),
        }
    }
}

/// Sends events, cancelling the run once nobody is listening.
struct Emitter {
    tx: mpsc::Sender<PipelineEvent>,
    cancel: CancellationToken,
}

impl Emitter {
    async fn progress(&self, event: ProgressEvent) {
        tracing::debug!(stage = %event.stage, current = event.current, total = event.total, "{}", event.message);
        self.send(PipelineEvent::Progress(event)).await;
    }

    async fn send(&self, event: PipelineEvent) {
        if self.tx.send(event).await.is_err() && !self.cancel.is_cancelled() {
            tracing::info!("event receiver dropped, cancelling pipeline");
            self.cancel.cancel();
        }
    }
}

impl<F: PageFetcher + 'static> Pipeline<F> {
    /// Pipeline with no location dataset and no exporter.
    pub fn new(fetcher: F, config: PipelineConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            config: Arc::new(config),
            resolver: Arc::new(PassthroughResolver),
            exporter: Arc::new(NoopExporter),
        }
    }

    #[must_use]
    pub fn with_resolver(mut self, resolver: impl LocationResolver + 'static) -> Self {
        self.resolver = Arc::new(resolver);
        self
    }

    #[must_use]
    pub fn with_exporter(mut self, exporter: impl LeadExporter + 'static) -> Self {
        self.exporter = Arc::new(exporter);
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Start a run and stream its events.
    ///
    /// Must be called inside a Tokio runtime. Dropping the stream cancels
    /// the run.
    ///
    /// # Errors
    ///
    /// Returns [`LeadError::Validation`] or [`LeadError::Config`] before
    /// any work starts.
    pub fn run(&self, request: SearchRequest) -> Result<ReceiverStream<PipelineEvent>, LeadError> {
        self.run_with_cancel(request, CancellationToken::new())
    }

    /// [`Self::run`] with a caller-held cancellation token.
    ///
    /// After cancellation no new fetches start; the leads gathered so far
    /// are still deduplicated and scored, export is skipped, and the
    /// result event is still sent.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`].
    pub fn run_with_cancel(
        &self,
        request: SearchRequest,
        cancel: CancellationToken,
    ) -> Result<ReceiverStream<PipelineEvent>, LeadError> {
        request.validate()?;
        self.config.validate()?;

        let (tx, rx) = mpsc::channel(self.config.progress_buffer);
        let pipeline = self.clone();
        tokio::spawn(async move {
            pipeline.drive(request, Emitter { tx, cancel }).await;
        });
        Ok(ReceiverStream::new(rx))
    }

    /// Run to the end and return only the final result.
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`].
    pub async fn run_to_completion(&self, request: SearchRequest) -> Result<ResultEvent, LeadError> {
        request.validate()?;
        self.config.validate()?;

        let (tx, mut rx) = mpsc::channel(self.config.progress_buffer);
        let emitter = Emitter {
            tx,
            cancel: CancellationToken::new(),
        };
        let drain = async move { while rx.recv().await.is_some() {} };
        let (result, ()) = tokio::join!(self.drive(request, emitter), drain);
        Ok(result)
    }

    async fn drive(&self, request: SearchRequest, emitter: Emitter) -> ResultEvent {
        let ctx = self.resolver.resolve(&request);
        let keywords = self.config.keywords_for(&request.keywords);
        let label = ctx.label();
        tracing::info!(query = %label, keywords = keywords.len(), "lead search started");

        let raw = self.search(&ctx, &keywords, &emitter).await;

        let mut leads = merge_leads(raw);
        let steps = self.config.ordered_backends().len() + 1;
        emitter
            .progress(
                ProgressEvent::new(
                    Stage::Dedup,
                    format!("{} unique companies after deduplication", leads.len()),
                    steps,
                    steps,
                )
                .with_leads(leads.len()),
            )
            .await;

        if !leads.is_empty() {
            leads = self.crawl(leads, &emitter).await;
        }
        let leads = merge_leads(leads);

        emitter
            .progress(ProgressEvent::new(Stage::Scoring, "Scoring leads...", 0, 1))
            .await;
        let leads = rank_leads(leads);
        emitter
            .progress(ProgressEvent::new(Stage::Scoring, "Scoring complete", 1, 1).with_leads(leads.len()))
            .await;

        let artifacts = if emitter.cancel.is_cancelled() {
            tracing::info!("run cancelled, skipping export");
            ExportArtifacts::default()
        } else {
            self.export(&leads, &emitter).await
        };

        emitter
            .progress(
                ProgressEvent::new(
                    Stage::Done,
                    format!("Found {} leads", leads.len()),
                    leads.len(),
                    leads.len(),
                )
                .with_leads(leads.len()),
            )
            .await;

        tracing::info!(query = %label, leads = leads.len(), "lead search finished");
        let result = ResultEvent {
            query: label,
            total: leads.len(),
            leads,
            export_csv_path: artifacts.csv_path,
            export_json_path: artifacts.json_path,
        };
        emitter.send(PipelineEvent::Result(result.clone())).await;
        result
    }

    /// Query every enabled backend in priority order.
    async fn search(
        &self,
        ctx: &LocationContext,
        keywords: &[String],
        emitter: &Emitter,
    ) -> Vec<Lead> {
        let backends = self.config.ordered_backends();
        let steps = backends.len() + 1;
        let cancel = &emitter.cancel;

        emitter
            .progress(ProgressEvent::new(
                Stage::Searching,
                format!("Searching for transport companies near {}...", ctx.airport),
                0,
                steps,
            ))
            .await;

        let mut all: Vec<Lead> = Vec::new();

        if self.config.concurrent_backends {
            let runs = backends.iter().map(|backend| {
                backend_leads(self.fetcher.as_ref(), &self.config, *backend, ctx, keywords, cancel)
            });
            let outcomes = join_all(runs).await;
            for (i, (backend, leads)) in backends.iter().zip(outcomes).enumerate() {
                all.extend(leads);
                self.backend_done(*backend, i + 1, steps, all.len(), emitter).await;
            }
            return all;
        }

        for (i, backend) in backends.iter().enumerate() {
            if cancel.is_cancelled() {
                break;
            }
            if i > 0 {
                emitter
                    .progress(ProgressEvent::new(
                        Stage::Searching,
                        format!("Searching {backend} for more results..."),
                        i,
                        steps,
                    ))
                    .await;
            }
            let before = all.len();
            all.extend(backend_leads(self.fetcher.as_ref(), &self.config, *backend, ctx, keywords, cancel).await);
            tracing::debug!(backend = %backend, found = all.len() - before, "backend harvested");
            self.backend_done(*backend, i + 1, steps, all.len(), emitter).await;
        }

        all
    }

    async fn backend_done(
        &self,
        backend: Backend,
        current: usize,
        steps: usize,
        leads_found: usize,
        emitter: &Emitter,
    ) {
        emitter
            .progress(
                ProgressEvent::new(
                    Stage::Searching,
                    format!("{backend} search complete"),
                    current,
                    steps,
                )
                .with_leads(leads_found),
            )
            .await;
    }

    /// Enrich leads in fixed-size batches, one task per lead.
    ///
    /// A batch completes fully before the next starts. A task that fails
    /// leaves its lead as it was.
    async fn crawl(&self, leads: Vec<Lead>, emitter: &Emitter) -> Vec<Lead> {
        let total = leads.len();
        let batch_size = self.config.crawl_batch_size.max(1);
        emitter
            .progress(ProgressEvent::new(
                Stage::Crawling,
                format!("Crawling {total} company websites for contact details..."),
                0,
                total,
            ))
            .await;

        let mut enriched: Vec<Lead> = Vec::with_capacity(total);
        let mut pending = leads.into_iter().peekable();

        while pending.peek().is_some() {
            if emitter.cancel.is_cancelled() {
                tracing::info!(remaining = total - enriched.len(), "crawl cancelled");
                enriched.extend(pending);
                break;
            }

            let batch: Vec<Lead> = pending.by_ref().take(batch_size).collect();
            let tasks = batch.iter().cloned().map(|lead| {
                let fetcher = Arc::clone(&self.fetcher);
                let config = Arc::clone(&self.config);
                tokio::spawn(async move { Crawler::new(fetcher.as_ref(), &config).enrich(lead).await })
            });
            let outcomes = join_all(tasks).await;

            for (original, outcome) in batch.into_iter().zip(outcomes) {
                match outcome {
                    Ok(lead) => enriched.push(lead),
                    Err(err) => {
                        tracing::warn!(website = %original.website, error = %err, "crawl task failed");
                        enriched.push(original);
                    }
                }
            }

            emitter
                .progress(
                    ProgressEvent::new(
                        Stage::Crawling,
                        format!("Crawled {}/{total} websites", enriched.len()),
                        enriched.len(),
                        total,
                    )
                    .with_leads(enriched.len()),
                )
                .await;
        }

        enriched
    }

    async fn export(&self, leads: &[Lead], emitter: &Emitter) -> ExportArtifacts {
        emitter
            .progress(ProgressEvent::new(Stage::Exporting, "Exporting results...", 0, 1))
            .await;
        // Exporters do blocking file IO.
        let exporter = Arc::clone(&self.exporter);
        let leads = leads.to_vec();
        let artifacts = match tokio::task::spawn_blocking(move || exporter.export(&leads)).await {
            Ok(Ok(artifacts)) => artifacts,
            Ok(Err(err)) => {
                tracing::warn!(error = %err, "export failed");
                ExportArtifacts::default()
            }
            Err(err) => {
                tracing::warn!(error = %err, "export task failed");
                ExportArtifacts::default()
            }
        };
        emitter
            .progress(ProgressEvent::new(Stage::Exporting, "Export complete", 1, 1))
            .await;
        artifacts
    }
}
