//! Conversion from wire DTOs to domain types.
//!
//! Conversion is lenient: a field the provider got wrong (rating out of
//! bounds, malformed window time, unknown weekday key) is dropped rather
//! than failing the whole place. Caller-side data is trusted upstream;
//! source-side data is re-validated here, at the boundary.

use std::collections::BTreeMap;

use crate::domain::{ClockTime, Coords, OpeningHours, Place, TimeWindow, Weekday};

use super::types::PlaceDto;

/// Bounds asserted on source data.
const MAX_RATING: f64 = 5.0;
const MAX_PRICE_LEVEL: i64 = 4;

/// Convert a wire place into the domain `Place`, dropping invalid fields.
pub fn convert_place(dto: &PlaceDto) -> Place {
    Place {
        name: dto.name.clone(),
        coords: dto
            .location
            .map(|l| Coords::new(l.lat, l.lng))
            .filter(Coords::is_finite),
        photo_url: dto.photo_url.clone(),
        rating: dto
            .rating
            .filter(|r| r.is_finite() && (0.0..=MAX_RATING).contains(r))
            .map(|r| r as f32),
        price_level: dto
            .price_level
            .filter(|p| (0..=MAX_PRICE_LEVEL).contains(p))
            .map(|p| p as u8),
        address: dto.address.clone(),
        website: dto.website.clone(),
        phone: dto.phone.clone(),
        hours: dto
            .opening_hours
            .as_ref()
            .map(convert_hours)
            .filter(|h| !h.is_empty()),
    }
}

fn convert_hours(raw: &BTreeMap<String, Vec<Vec<String>>>) -> OpeningHours {
    let mut hours = OpeningHours::new();

    for (day_key, windows) in raw {
        let Some(day) = parse_day(day_key) else {
            continue;
        };
        for window in windows {
            let [open, close] = window.as_slice() else {
                continue;
            };
            let (Ok(open), Ok(close)) = (ClockTime::parse(open), ClockTime::parse(close)) else {
                continue;
            };
            hours.add(day, TimeWindow(open, close));
        }
    }

    hours
}

fn parse_day(key: &str) -> Option<Weekday> {
    match key.to_ascii_lowercase().as_str() {
        "mon" => Some(Weekday::Mon),
        "tue" => Some(Weekday::Tue),
        "wed" => Some(Weekday::Wed),
        "thu" => Some(Weekday::Thu),
        "fri" => Some(Weekday::Fri),
        "sat" => Some(Weekday::Sat),
        "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
