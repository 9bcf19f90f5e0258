//! Visit durations.

use serde::{Deserialize, Serialize};

/// Error returned for a zero-minute duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("duration must be a positive number of minutes")]
pub struct InvalidDuration;

/// A visit duration in whole minutes, strictly positive by construction.
///
/// # Examples
///
/// ```
/// use itinerary_core::domain::DurationMins;
///
/// let dur = DurationMins::new(60).unwrap();
/// assert_eq!(dur.get(), 60);
///
/// assert!(DurationMins::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct DurationMins(u32);

impl DurationMins {
    /// Create a duration from a minute count. Zero is rejected.
    pub fn new(minutes: u32) -> Result<Self, InvalidDuration> {
        if minutes == 0 {
            return Err(InvalidDuration);
        }
        Ok(Self(minutes))
    }

    /// Returns the duration in minutes.
    pub fn get(&self) -> u32 {
        self.0
    }

    /// Converts to a `chrono::Duration`.
    pub fn to_duration(self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.0))
    }
}

impl TryFrom<u32> for DurationMins {
    type Error = InvalidDuration;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::new(minutes)
    }
}

impl From<DurationMins> for u32 {
    fn from(d: DurationMins) -> Self {
        d.0
    }
}
