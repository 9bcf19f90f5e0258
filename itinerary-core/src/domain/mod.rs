//! Domain types for the itinerary core.
//!
//! Schema-level invariants (positive durations, well-formed wall-clock
//! times) are enforced at construction, so code that receives these types
//! can trust their validity. Cross-stop invariants are the schedule
//! module's job; merge policy belongs to enrichment.

mod clock;
mod duration;
mod hours;
mod place;
mod stop;

pub use clock::{ClockTime, TimeError};
pub use duration::{DurationMins, InvalidDuration};
pub use hours::{OpeningHours, TimeWindow, Weekday};
pub use place::Place;
pub use stop::{Coords, Stop};
