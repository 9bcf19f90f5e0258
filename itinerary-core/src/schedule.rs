//! Schedule reflow.
//!
//! Given an ordered sequence of stops, shifts later stops' start times
//! forward so that no visit begins before its predecessor ends. Gaps
//! between stops are intentional and preserved; the pass only closes
//! overlaps, it never compresses an itinerary.

use crate::domain::Stop;

/// Push each stop's start to its predecessor's end where they overlap.
///
/// A single left-to-right pass suffices: each stop's adjusted start depends
/// only on the already-adjusted stop before it, and adjustments only move
/// starts later, so earlier entries are never invalidated by later ones. A
/// start exactly equal to the previous end is not an overlap. Empty and
/// single-stop sequences are left untouched, and re-running the pass on an
/// already-monotonic sequence changes nothing.
///
/// Only `start` fields change; order, length, and every other field are
/// preserved.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDateTime;
/// use itinerary_core::domain::{DurationMins, Stop};
/// use itinerary_core::schedule::reflow;
///
/// let start = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap();
/// let mut stops = vec![
///     Stop::new("a", "Castillo", start("2024-06-01T09:00"), DurationMins::new(60).unwrap()),
///     Stop::new("b", "Museo", start("2024-06-01T09:30"), DurationMins::new(30).unwrap()),
/// ];
///
/// reflow(&mut stops);
/// assert_eq!(stops[1].start, start("2024-06-01T10:00"));
/// ```
pub fn reflow(stops: &mut [Stop]) {
    for i in 1..stops.len() {
        let prev_end = stops[i - 1].end();
        if stops[i].start < prev_end {
            stops[i].start = prev_end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DurationMins;
    use chrono::NaiveDateTime;

    fn start(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
    }

    fn stop(id: &str, at: &str, minutes: u32) -> Stop {
        Stop::new(id, id, start(at), DurationMins::new(minutes).unwrap())
    }

    #[test]
    fn empty_sequence() {
        let mut stops: Vec<Stop> = vec![];
        reflow(&mut stops);
        assert!(stops.is_empty());
    }

    #[test]
    fn single_stop_untouched() {
        let mut stops = vec![stop("a", "2024-06-01T09:00", 60)];
        let before = stops.clone();

        reflow(&mut stops);
        assert_eq!(stops, before);
    }

    #[test]
    fn overlap_corrected() {
        // Second stop starts during the first; third already clears the
        // adjusted second (boundary case: equal is not overlapping).
        let mut stops = vec![
            stop("a", "2024-06-01T09:00", 60),
            stop("b", "2024-06-01T09:30", 30),
            stop("c", "2024-06-01T10:30", 30),
        ];

        reflow(&mut stops);

        assert_eq!(stops[0].start, start("2024-06-01T09:00"));
        assert_eq!(stops[1].start, start("2024-06-01T10:00"));
        assert_eq!(stops[2].start, start("2024-06-01T10:30"));
    }

    #[test]
    fn duration_change_propagates() {
        let mut stops = vec![
            stop("a", "2024-06-01T09:00", 60),
            stop("b", "2024-06-01T10:00", 30),
        ];

        // Caller stretches the first visit, then reflows.
        stops[0].duration_minutes = DurationMins::new(90).unwrap();
        reflow(&mut stops);

        assert_eq!(stops[1].start, start("2024-06-01T10:30"));
    }

    #[test]
    fn cascade_through_whole_sequence() {
        let mut stops = vec![
            stop("a", "2024-06-01T09:00", 120),
            stop("b", "2024-06-01T09:30", 60),
            stop("c", "2024-06-01T10:00", 30),
            stop("d", "2024-06-01T10:15", 45),
        ];

        reflow(&mut stops);

        assert_eq!(stops[1].start, start("2024-06-01T11:00"));
        assert_eq!(stops[2].start, start("2024-06-01T12:00"));
        assert_eq!(stops[3].start, start("2024-06-01T12:30"));
    }

    #[test]
    fn gaps_preserved() {
        let mut stops = vec![
            stop("a", "2024-06-01T09:00", 60),
            stop("b", "2024-06-01T12:00", 30),
        ];
        let before = stops.clone();

        reflow(&mut stops);
        assert_eq!(stops, before);
    }

    #[test]
    fn idempotent() {
        let mut stops = vec![
            stop("a", "2024-06-01T09:00", 90),
            stop("b", "2024-06-01T09:30", 30),
            stop("c", "2024-06-01T09:45", 60),
        ];

        reflow(&mut stops);
        let once = stops.clone();
        reflow(&mut stops);

        assert_eq!(stops, once);
    }

    #[test]
    fn only_start_changes() {
        let mut overlapping = stop("b", "2024-06-01T09:30", 30);
        overlapping.municipality = Some("Ojós".to_string());
        overlapping.tags.insert("playa".to_string());

        let mut stops = vec![stop("a", "2024-06-01T09:00", 60), overlapping.clone()];
        reflow(&mut stops);

        let mut expected = overlapping;
        expected.start = start("2024-06-01T10:00");
        assert_eq!(stops[1], expected);
    }

    #[test]
    fn crosses_midnight() {
        let mut stops = vec![
            stop("a", "2024-06-01T23:30", 60),
            stop("b", "2024-06-01T23:45", 30),
        ];

        reflow(&mut stops);
        assert_eq!(stops[1].start, start("2024-06-02T00:30"));
    }
}
