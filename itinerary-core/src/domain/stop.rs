//! The itinerary stop model.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::duration::DurationMins;
use super::hours::OpeningHours;

/// A latitude/longitude pair in decimal degrees.
///
/// Holds raw floats: coordinates may arrive straight out of a document
/// store, so unusable values are representable and queried with
/// [`Coords::is_finite`] rather than rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

impl Coords {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// True when both components are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// One planned visit within an itinerary.
///
/// Position in the itinerary's sequence is the visit order. Only `id`,
/// `name`, `start`, and `duration_minutes` are always present; descriptive
/// and geospatial fields may be absent until enrichment supplies them.
///
/// Field names serialize in camelCase so values round-trip unchanged
/// through the external document store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    /// Stable identifier, unique within an itinerary.
    pub id: String,

    /// Display name. Required, non-empty (enforced upstream).
    pub name: String,

    /// When the visit starts (local time).
    pub start: NaiveDateTime,

    /// How long the visit lasts.
    pub duration_minutes: DurationMins,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Local insight shown alongside the stop. May be synthesized from
    /// opening hours during enrichment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<String>,

    /// Municipality the stop belongs to; lookups fall back to a
    /// region-wide default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,

    /// Category tag, e.g. "museo" or "playa".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coords: Option<Coords>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub photos: Vec<String>,

    /// Source rating, 0-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,

    /// Source price level, 0-4.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<OpeningHours>,

    /// Free-form labels; also records which lookup source contributed data.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
}

impl Stop {
    /// Create a stop with the required fields; everything else starts empty.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        start: NaiveDateTime,
        duration_minutes: DurationMins,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            start,
            duration_minutes,
            description: None,
            tip: None,
            municipality: None,
            category: None,
            coords: None,
            image_url: None,
            photos: Vec::new(),
            rating: None,
            price_level: None,
            address: None,
            website: None,
            phone: None,
            hours: None,
            tags: BTreeSet::new(),
        }
    }

    /// When the visit ends: `start` plus the duration.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDateTime;
    /// use itinerary_core::domain::{DurationMins, Stop};
    ///
    /// let start = NaiveDateTime::parse_from_str("2024-06-01T09:00", "%Y-%m-%dT%H:%M").unwrap();
    /// let stop = Stop::new("s1", "Castillo", start, DurationMins::new(90).unwrap());
    /// assert_eq!(stop.end().to_string(), "2024-06-01 10:30:00");
    /// ```
    pub fn end(&self) -> NaiveDateTime {
        self.start + self.duration_minutes.to_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn stop(s: &str, minutes: u32) -> Stop {
        Stop::new("s1", "Museo", start(s), DurationMins::new(minutes).unwrap())
    }

    #[test]
    fn end_is_start_plus_duration() {
        let s = stop("2024-06-01T09:00", 60);
        assert_eq!(s.end(), start("2024-06-01T10:00"));
    }

    #[test]
    fn end_crosses_midnight() {
        let s = stop("2024-06-01T23:30", 60);
        assert_eq!(s.end(), start("2024-06-02T00:30"));
    }

    #[test]
    fn coords_finite() {
        assert!(Coords::new(38.1, -1.4).is_finite());
        assert!(!Coords::new(f64::NAN, -1.4).is_finite());
        assert!(!Coords::new(38.1, f64::INFINITY).is_finite());
    }

    #[test]
    fn serde_camel_case() {
        let mut s = stop("2024-06-01T09:00", 60);
        s.price_level = Some(2);
        s.image_url = Some("https://example.com/p.jpg".to_string());

        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("\"durationMinutes\":60"));
        assert!(json.contains("\"priceLevel\":2"));
        assert!(json.contains("\"imageUrl\""));
        // Absent options are omitted entirely
        assert!(!json.contains("municipality"));
    }

    #[test]
    fn serde_roundtrip() {
        let mut s = stop("2024-06-01T09:00", 60);
        s.coords = Some(Coords::new(38.1, -1.4));
        s.tags.insert("playa".to_string());

        let json = serde_json::to_string(&s).unwrap();
        let back: Stop = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn deserialize_minimal() {
        let json = r#"{
            "id": "s1",
            "name": "Museo",
            "start": "2024-06-01T09:00:00",
            "durationMinutes": 45
        }"#;

        let s: Stop = serde_json::from_str(json).unwrap();
        assert_eq!(s.duration_minutes.get(), 45);
        assert!(s.tags.is_empty());
        assert!(s.photos.is_empty());
    }

    #[test]
    fn deserialize_rejects_zero_duration() {
        let json = r#"{
            "id": "s1",
            "name": "Museo",
            "start": "2024-06-01T09:00:00",
            "durationMinutes": 0
        }"#;

        assert!(serde_json::from_str::<Stop>(json).is_err());
    }
}
