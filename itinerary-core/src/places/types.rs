//! Wire types for the places API.
//!
//! Mirrors the JSON shape returned by the search endpoint. Kept separate
//! from the domain [`Place`](crate::domain::Place): the wire shape is the
//! provider's contract, and conversion applies our own bounds checks.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Top-level search response.
#[derive(Debug, Deserialize)]
pub struct PlaceSearchResponse {
    #[serde(default)]
    pub results: Vec<PlaceDto>,
}

/// One place as returned by the API. Everything but the name is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceDto {
    pub name: String,
    pub location: Option<LocationDto>,
    pub photo_url: Option<String>,
    pub rating: Option<f64>,
    pub price_level: Option<i64>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    /// Weekday key ("mon".."sun") to a list of `[open, close]` pairs.
    pub opening_hours: Option<BTreeMap<String, Vec<Vec<String>>>>,
}

/// A raw coordinate pair from the API.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_result() {
        let json = r#"{
            "results": [{
                "name": "Museo del Valle",
                "location": {"lat": 38.15, "lng": -1.37},
                "photoUrl": "https://example.com/museo.jpg",
                "rating": 4.5,
                "priceLevel": 1,
                "address": "Plaza Mayor 1",
                "openingHours": {"mon": [["09:00", "17:00"]]}
            }]
        }"#;

        let response: PlaceSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);

        let dto = &response.results[0];
        assert_eq!(dto.name, "Museo del Valle");
        assert_eq!(dto.rating, Some(4.5));
        assert!(dto.opening_hours.is_some());
        assert!(dto.website.is_none());
    }

    #[test]
    fn deserialize_empty_response() {
        let response: PlaceSearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.results.is_empty());
    }
}
