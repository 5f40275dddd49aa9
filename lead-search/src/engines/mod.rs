//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::engine::SearchBackend`]
//! for one engine's HTML results page.

pub mod bing;
pub mod duckduckgo;
pub mod google;

pub use bing::BingBackend;
pub use duckduckgo::DuckDuckGoBackend;
pub use google::GoogleBackend;

use crate::engine::SearchBackend;
use crate::types::Backend;

/// The implementation behind a [`Backend`] variant.
pub fn backend_for(backend: Backend) -> Box<dyn SearchBackend> {
    match backend {
        Backend::DuckDuckGo => Box::new(DuckDuckGoBackend),
        Backend::Bing => Box::new(BingBackend),
        Backend::Google => Box::new(GoogleBackend),
    }
}
