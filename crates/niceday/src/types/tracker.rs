//! Tracker types.
//!
//! The niceday-api identifies a tracker kind in two unrelated ways: a numeric
//! id for enabling/disabling it, and a string schedule type for reminders.
//! Both encodings hang off the single [`Tracker`] tag.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

/// A kind of tracker known to the niceday-api.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracker {
    /// Cigarette counter.
    Smoking,
}

impl Tracker {
    /// Every known tracker.
    pub const ALL: [Tracker; 1] = [Tracker::Smoking];

    /// Symbolic name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Tracker::Smoking => "smoking",
        }
    }

    /// Numeric tracker id used by `usertrackers/statuses`.
    pub fn id(self) -> i64 {
        match self {
            Tracker::Smoking => 1,
        }
    }

    /// Schedule type used by `usertrackers/reminder`.
    pub fn schedule_type(self) -> &'static str {
        match self {
            Tracker::Smoking => "tracker_smoking",
        }
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tracker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tracker::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown tracker: {}", s))
    }
}

/// Enabled/disabled status of one tracker for a user.
///
/// Serialized verbatim as `{"trackerId": .., "isEnabled": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackerStatus {
    /// Numeric tracker id, see [`Tracker::id`].
    pub tracker_id: i64,
    /// Whether the tracker should be enabled.
    pub is_enabled: bool,
}

impl TrackerStatus {
    /// Create a status from a raw tracker id.
    pub fn new(tracker_id: i64, is_enabled: bool) -> Self {
        Self {
            tracker_id,
            is_enabled,
        }
    }

    /// Create a status for a known tracker.
    pub fn for_tracker(tracker: Tracker, is_enabled: bool) -> Self {
        Self::new(tracker.id(), is_enabled)
    }
}

/// A timestamp that can be rendered in ISO-8601 form.
///
/// Naive values render without an offset, zoned values with `+HH:MM`.
/// Microseconds appear only when non-zero.
pub trait IsoTimestamp {
    /// Render the timestamp in ISO-8601 form.
    fn to_isoformat(&self) -> String;
}

impl IsoTimestamp for NaiveDateTime {
    fn to_isoformat(&self) -> String {
        if self.nanosecond() / 1_000 == 0 {
            self.format("%Y-%m-%dT%H:%M:%S").to_string()
        } else {
            self.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
        }
    }
}

impl<Tz: TimeZone> IsoTimestamp for DateTime<Tz>
where
    Tz::Offset: fmt::Display,
{
    fn to_isoformat(&self) -> String {
        format!(
            "{}{}",
            self.naive_local().to_isoformat(),
            self.format("%:z")
        )
    }
}
