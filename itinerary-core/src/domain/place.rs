//! Place lookup results.

use super::hours::OpeningHours;
use super::stop::Coords;

/// Supplementary place data returned by a lookup source.
///
/// Every descriptive field is optional: a source contributes whatever it
/// knows, and the enrichment merge fills only what the caller's stop is
/// missing. Values here have already passed boundary validation (finite
/// coordinates, in-range rating and price level).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Place {
    /// The matched place's name, used by mock lookups for query matching.
    pub name: String,
    pub coords: Option<Coords>,
    pub photo_url: Option<String>,
    /// Rating, 0-5.
    pub rating: Option<f32>,
    /// Price level, 0-4.
    pub price_level: Option<u8>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<OpeningHours>,
}
