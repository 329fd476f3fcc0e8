//! Tracker operations.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use niceday::{NicedayClient, Tracker, TrackerStatus};
//!
//! # async fn example() -> niceday::Result<()> {
//! let client = NicedayClient::new();
//!
//! client
//!     .trackers()
//!     .set_statuses(38527, &[TrackerStatus::for_tracker(Tracker::Smoking, true)])
//!     .await?;
//!
//! let start = NaiveDate::from_ymd_opt(2021, 10, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let end = NaiveDate::from_ymd_opt(2022, 2, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let entries = client.trackers().smoking(38527, &start, &end).await?;
//! println!("{} entries", entries.len());
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;

use serde_json::Value;

use crate::client::NicedayClient;
use crate::error::{Error, Result};
use crate::request::{ReminderBody, TrackerStatusesBody};
use crate::types::{Acknowledgement, IsoTimestamp, TrackerStatus};

/// Provides access to tracker operations.
///
/// Obtained via [`NicedayClient::trackers()`].
#[derive(Debug)]
pub struct TrackerActions<'a> {
    pub(crate) client: &'a NicedayClient,
}

impl<'a> TrackerActions<'a> {
    /// Enable or disable trackers for a user.
    ///
    /// Statuses are sent in the given order, duplicates included.
    pub async fn set_statuses(
        &self,
        user_id: i64,
        statuses: &[TrackerStatus],
    ) -> Result<Acknowledgement> {
        let body = TrackerStatusesBody {
            user_id,
            tracker_statuses: statuses,
        };
        self.client.post_json("usertrackers/statuses", &body).await
    }

    /// Get a user's smoking tracker entries between two timestamps.
    ///
    /// Entries are returned as the server sends them; each usually carries
    /// `startTime`, `endTime` and `value.quantity`.
    pub async fn smoking<T>(&self, user_id: i64, start: &T, end: &T) -> Result<Vec<Value>>
    where
        T: IsoTimestamp + ?Sized,
    {
        let query = [
            ("startTime", query_time(start)),
            ("endTime", query_time(end)),
        ];
        let value = self
            .client
            .get_json(&format!("usertrackers/smoking/{}", user_id), &query)
            .await?;

        match value {
            Value::Array(entries) => Ok(entries),
            other => Err(Error::MalformedResponse(format!(
                "expected a list of smoking tracker entries, got {}",
                json_kind(&other)
            ))),
        }
    }

    /// Schedule a recurring reminder for a tracker.
    ///
    /// `schedule_type` is the server's tracker name, e.g.
    /// [`Tracker::Smoking.schedule_type()`](crate::Tracker::schedule_type).
    /// `recurrence_rule` is sent in its string form, typically an RFC 5545
    /// `RRULE`. The reminder margin is fixed at 0 minutes before and 60 after.
    pub async fn set_reminder<R>(
        &self,
        user_id: i64,
        schedule_type: &str,
        title: &str,
        recurrence_rule: &R,
    ) -> Result<Acknowledgement>
    where
        R: Display + ?Sized,
    {
        let body = ReminderBody::new(user_id, schedule_type, title, recurrence_rule.to_string());
        self.client.post_json("usertrackers/reminder", &body).await
    }
}

/// ISO-8601 with a literal `Z` appended, whatever the timestamp's own zone.
fn query_time<T: IsoTimestamp + ?Sized>(time: &T) -> String {
    format!("{}Z", time.to_isoformat())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
