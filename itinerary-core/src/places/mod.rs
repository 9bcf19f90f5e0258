//! Place lookup adapters.
//!
//! Concrete implementations of the enrichment service's
//! [`PlaceLookup`](crate::enrich::PlaceLookup) capability:
//!
//! - [`PlacesClient`] talks to an HTTP place-search provider
//! - [`MockPlaceClient`] serves fixtures for development and tests
//!
//! Wire DTOs are kept separate from domain types; conversion re-validates
//! source data (bounds, finiteness, time formats) and drops what fails.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{PlacesClient, PlacesConfig};
pub use convert::convert_place;
pub use error::PlaceError;
pub use mock::MockPlaceClient;
pub use types::{LocationDto, PlaceDto, PlaceSearchResponse};
