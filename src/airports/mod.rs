//! Built-in airport directory and the location resolver built on it.
//!
//! Requests name an airport loosely: `"London Heathrow (LHR)"`, `"cdg"`,
//! `"Gatwick"`. [`AirportDirectory`] maps these onto a known airport so
//! search queries use its canonical name and city. Inputs it cannot place
//! are used verbatim.

mod data;

use std::collections::BTreeSet;

use lead_search::{LocationContext, LocationResolver, PassthroughResolver, SearchRequest};

/// Maximum matches returned by [`AirportDirectory::search_airports`].
pub const MAX_SEARCH_RESULTS: usize = 20;

/// One airport in the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Airport {
    pub iata: &'static str,
    pub name: &'static str,
    pub city: &'static str,
    pub country: &'static str,
}

impl Airport {
    const fn new(
        iata: &'static str,
        name: &'static str,
        city: &'static str,
        country: &'static str,
    ) -> Self {
        Self {
            iata,
            name,
            city,
            country,
        }
    }

    /// Display label, e.g. `"London Heathrow (LHR)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.iata)
    }

    fn matches(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || format!("{} {} {} {}", self.iata, self.name, self.city, self.country)
                .to_lowercase()
                .contains(query_lower)
    }
}

/// Read-only airport lookup.
#[derive(Debug, Clone, Copy)]
pub struct AirportDirectory {
    airports: &'static [Airport],
}

impl Default for AirportDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AirportDirectory {
    /// Directory over the bundled airport table.
    pub fn builtin() -> Self {
        Self {
            airports: data::AIRPORTS,
        }
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Exact IATA lookup, case-insensitive.
    pub fn by_iata(&self, code: &str) -> Option<&'static Airport> {
        let code = code.trim();
        self.airports
            .iter()
            .find(|a| a.iata.eq_ignore_ascii_case(code))
    }

    /// Case-insensitive substring search over IATA code, name, city and
    /// country, optionally restricted to one country. An empty query
    /// matches everything. At most [`MAX_SEARCH_RESULTS`] in table order.
    pub fn search_airports(&self, query: &str, country: Option<&str>) -> Vec<&'static Airport> {
        let query = query.trim().to_lowercase();
        let country = country.map(str::trim).filter(|c| !c.is_empty());
        self.airports
            .iter()
            .filter(|a| country.is_none_or(|c| a.country.eq_ignore_ascii_case(c)))
            .filter(|a| a.matches(&query))
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }

    /// Sorted unique country names.
    pub fn countries(&self) -> Vec<&'static str> {
        self.airports
            .iter()
            .map(|a| a.country)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Find the airport a request refers to.
    ///
    /// Tries an IATA code in parentheses, then a bare three-letter code,
    /// then a name search within `country`.
    pub fn find(&self, input: &str, country: &str) -> Option<&'static Airport> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if let Some(airport) = iata_in_parens(input).and_then(|code| self.by_iata(code)) {
            return Some(airport);
        }
        if input.len() == 3 && input.chars().all(|c| c.is_ascii_alphabetic()) {
            if let Some(airport) = self.by_iata(input) {
                return Some(airport);
            }
        }
        self.search_airports(input, Some(country)).into_iter().next()
    }
}

impl LocationResolver for AirportDirectory {
    fn resolve(&self, request: &SearchRequest) -> LocationContext {
        let country = request.country.trim();
        let Some(airport) = self.find(&request.airport, country) else {
            tracing::debug!(airport = %request.airport, "airport not in directory, using input as given");
            return PassthroughResolver.resolve(request);
        };
        let city = request
            .city
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(airport.city);
        tracing::debug!(iata = airport.iata, airport = airport.name, city, "airport resolved");
        LocationContext {
            airport: airport.name.to_owned(),
            city: city.to_owned(),
            country: country.to_owned(),
        }
    }
}

/// First `(XXX)` group of three upper-case ASCII letters.
fn iata_in_parens(input: &str) -> Option<&str> {
    input.match_indices('(').find_map(|(start, _)| {
        let code = input.get(start + 1..start + 4)?;
        let closed = input.get(start + 4..start + 5) == Some(")");
        (closed && code.bytes().all(|b| b.is_ascii_uppercase())).then_some(code)
    })
}
