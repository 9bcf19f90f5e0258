//! Structured opening hours.
//!
//! A place's weekly schedule: for each day, an ordered list of open/close
//! windows. The wire format keys days by lowercase English abbreviation
//! ("mon".."sun"); display uses Spanish abbreviations.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::clock::ClockTime;

/// Days of the week, in the fixed Monday-first display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    /// All days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Abbreviated display name.
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Mon => "Lun",
            Weekday::Tue => "Mar",
            Weekday::Wed => "Mié",
            Weekday::Thu => "Jue",
            Weekday::Fri => "Vie",
            Weekday::Sat => "Sáb",
            Weekday::Sun => "Dom",
        }
    }
}

/// A single open/close window within a day.
///
/// Serializes as a two-element array, e.g. `["09:00", "17:00"]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow(pub ClockTime, pub ClockTime);

impl TimeWindow {
    /// The opening time.
    pub fn open(&self) -> ClockTime {
        self.0
    }

    /// The closing time.
    pub fn close(&self) -> ClockTime {
        self.1
    }
}

/// Weekly opening hours: an ordered list of windows per day.
///
/// Days with no windows are absent. Window order within a day is preserved
/// as supplied by the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningHours {
    windows: BTreeMap<Weekday, Vec<TimeWindow>>,
}

impl OpeningHours {
    /// Create an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a window to a day's list.
    pub fn add(&mut self, day: Weekday, window: TimeWindow) {
        self.windows.entry(day).or_default().push(window);
    }

    /// The windows for a day, empty if it has none.
    pub fn windows_for(&self, day: Weekday) -> &[TimeWindow] {
        self.windows.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// True when no day has any window.
    pub fn is_empty(&self) -> bool {
        self.windows.values().all(Vec::is_empty)
    }

    /// Render a one-line weekly summary, or `None` when no day has a window.
    ///
    /// Days appear in Monday-to-Sunday order; days without windows are
    /// omitted. Multiple windows within a day are joined with a comma.
    ///
    /// # Examples
    ///
    /// ```
    /// use itinerary_core::domain::{ClockTime, OpeningHours, TimeWindow, Weekday};
    ///
    /// let mut hours = OpeningHours::new();
    /// hours.add(Weekday::Mon, TimeWindow(
    ///     ClockTime::parse("09:00").unwrap(),
    ///     ClockTime::parse("17:00").unwrap(),
    /// ));
    /// assert_eq!(hours.summary().unwrap(), "Lun: 09:00–17:00");
    /// ```
    pub fn summary(&self) -> Option<String> {
        let days: Vec<String> = Weekday::ALL
            .iter()
            .filter_map(|&day| {
                let windows = self.windows_for(day);
                if windows.is_empty() {
                    return None;
                }
                let ranges: Vec<String> = windows
                    .iter()
                    .map(|w| format!("{}–{}", w.open(), w.close()))
                    .collect();
                Some(format!("{}: {}", day.abbrev(), ranges.join(", ")))
            })
            .collect();

        if days.is_empty() {
            None
        } else {
            Some(days.join(" · "))
        }
    }
}
