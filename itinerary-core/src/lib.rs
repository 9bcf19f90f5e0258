//! Itinerary scheduling and enrichment.
//!
//! The core behind an itinerary generator: reflow a day's stops so that
//! no visit starts before the previous one ends, and fill the gaps in each
//! stop's descriptive data from an external place lookup without touching
//! anything the caller already supplied.

pub mod cache;
pub mod domain;
pub mod enrich;
pub mod places;
pub mod schedule;
