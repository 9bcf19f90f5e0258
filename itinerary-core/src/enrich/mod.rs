//! Stop enrichment.
//!
//! Supplements a stop's descriptive, visual, and geospatial fields from an
//! external place lookup without destroying caller-supplied data. Lookup
//! failures degrade to a no-op: a stop that cannot be enriched is returned
//! unchanged rather than surfacing an error, so a missing photo or rating
//! never blocks itinerary display.

mod config;
mod merge;

pub use config::EnrichConfig;

use futures::future::join_all;
use tracing::{debug, trace};

use crate::domain::{Place, Stop};

/// Error reported by a [`PlaceLookup`] implementation.
///
/// Carries only a message: the enrichment service treats every failure the
/// same way (log and degrade), so adapters flatten their own error types
/// into this one at the boundary.
#[derive(Debug, Clone, thiserror::Error)]
#[error("place lookup failed: {0}")]
pub struct LookupError(pub String);

/// Capability trait for the external place lookup.
///
/// The service only ever asks for the single best match for a free-text
/// query. Implementations must report every failure through the `Result`;
/// nothing may escape this boundary in a form the service can't catch.
pub trait PlaceLookup {
    /// Find the best-matching place for a query, if any.
    async fn find_one(&self, query: &str) -> Result<Option<Place>, LookupError>;

    /// Label recorded in enriched stops' tags to mark provenance.
    fn source_tag(&self) -> &str;
}

/// Build the lookup query for a stop: name, municipality (or the given
/// default), and category, space-separated with blank parts omitted.
fn lookup_query(stop: &Stop, default_municipality: &str) -> String {
    let municipality = stop
        .municipality
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| default_municipality.trim());

    let mut parts = vec![stop.name.trim(), municipality];
    if let Some(category) = stop.category.as_deref() {
        parts.push(category.trim());
    }
    parts.retain(|p| !p.is_empty());
    parts.join(" ")
}

/// Enrichment service over a place lookup source.
///
/// Stateless across calls: each invocation operates on its own stop or
/// sequence argument, so a service value can be shared freely.
pub struct EnrichService<L> {
    lookup: L,
    config: EnrichConfig,
}

impl<L: PlaceLookup> EnrichService<L> {
    /// Create a service over the given lookup source.
    pub fn new(lookup: L, config: EnrichConfig) -> Self {
        Self { lookup, config }
    }

    /// Supplement a single stop from the lookup source.
    ///
    /// Returns the stop unchanged when the lookup finds nothing or fails.
    /// Re-enriching an already-enriched stop is a no-op, because every
    /// target field is already populated.
    pub async fn enrich(&self, stop: Stop) -> Stop {
        let query = lookup_query(&stop, &self.config.default_municipality);

        match self.lookup.find_one(&query).await {
            Ok(Some(place)) => merge::merge_place(stop, &place, self.lookup.source_tag()),
            Ok(None) => {
                trace!(query = %query, "no place match");
                stop
            }
            Err(e) => {
                debug!(query = %query, error = %e, "place lookup failed, stop left unenriched");
                stop
            }
        }
    }

    /// Enrich every stop of an itinerary, preserving input order.
    ///
    /// Lookups run `batch_size` at a time. Per-stop enrichment is
    /// independent, so completion order within a batch does not matter;
    /// the output sequence always matches the input sequence.
    pub async fn enrich_itinerary(&self, stops: Vec<Stop>) -> Vec<Stop> {
        let batch_size = self.config.batch_size.max(1);
        let mut enriched = Vec::with_capacity(stops.len());
        let mut pending = stops.into_iter();

        loop {
            let batch: Vec<Stop> = pending.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }
            let lookups: Vec<_> = batch.into_iter().map(|stop| self.enrich(stop)).collect();
            enriched.extend(join_all(lookups).await);
        }

        enriched
    }
}
