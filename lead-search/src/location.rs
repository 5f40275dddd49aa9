//! Turning a request into location terms.

use crate::types::{LocationContext, SearchRequest};

/// Resolves a request's airport/location and country into query terms.
pub trait LocationResolver: Send + Sync {
    fn resolve(&self, request: &SearchRequest) -> LocationContext;
}

/// Uses the request as given: the airport text is the airport name, and
/// the city is the request city or, failing that, the airport text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughResolver;

impl LocationResolver for PassthroughResolver {
    fn resolve(&self, request: &SearchRequest) -> LocationContext {
        let airport = request.airport.trim().to_owned();
        let city = request
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map_or_else(|| airport.clone(), str::to_owned);
        LocationContext {
            airport,
            city,
            country: request.country.trim().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_defaults_to_airport_text() {
        let ctx = PassthroughResolver.resolve(&SearchRequest::new(" France ", " Nice "));
        assert_eq!(ctx.airport, "Nice");
        assert_eq!(ctx.city, "Nice");
        assert_eq!(ctx.country, "France");
    }

    #[test]
    fn request_city_overrides() {
        let request = SearchRequest {
            city: Some("Roissy-en-France".into()),
            ..SearchRequest::new("France", "CDG")
        };
        let ctx = PassthroughResolver.resolve(&request);
        assert_eq!(ctx.airport, "CDG");
        assert_eq!(ctx.city, "Roissy-en-France");
    }

    #[test]
    fn blank_city_ignored() {
        let request = SearchRequest {
            city: Some("  ".into()),
            ..SearchRequest::new("France", "Lyon")
        };
        assert_eq!(PassthroughResolver.resolve(&request).city, "Lyon");
    }
}
