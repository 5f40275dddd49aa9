//! Lead orchestration: per-backend harvesting, dedup, scoring and the
//! staged pipeline that ties them to the crawler.
//!
//! Backends are queried in priority order, their leads merged by identity
//! key, enriched in bounded batches, merged again, ranked and exported.

pub mod dedup;
pub mod pipeline;
pub mod scoring;
pub mod search;

pub use pipeline::Pipeline;
