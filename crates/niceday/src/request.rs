//! Internal request body types for the niceday-api endpoints.

use serde::Serialize;

use crate::types::TrackerStatus;

/// Reminder margin, in minutes, sent with every tracker reminder.
const MARGIN_BEFORE: u32 = 0;
const MARGIN_AFTER: u32 = 60;

/// Body for `POST messages/`.
#[derive(Debug, Serialize)]
pub(crate) struct MessageBody<'a> {
    pub recipient_id: i64,
    pub text: &'a str,
}

/// Body for `POST usertrackers/statuses`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TrackerStatusesBody<'a> {
    pub user_id: i64,
    pub tracker_statuses: &'a [TrackerStatus],
}

/// Body for `POST usertrackers/reminder`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReminderBody<'a> {
    /// Sent as a string; the reminder endpoint expects it that way.
    pub user_id: String,
    pub recurring_schedule: RecurringSchedule<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecurringSchedule<'a> {
    pub title: &'a str,
    pub schedule_type: &'a str,
    pub recurring_expression: RecurringExpression,
}

#[derive(Debug, Serialize)]
pub(crate) struct RecurringExpression {
    pub margin: Margin,
    pub reminder_enabled: bool,
    pub reminder_margin: Vec<Margin>,
    pub rrule: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct Margin {
    pub before: u32,
    pub after: u32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            before: MARGIN_BEFORE,
            after: MARGIN_AFTER,
        }
    }
}

impl<'a> ReminderBody<'a> {
    /// Build a reminder with the fixed margins and reminders switched on.
    pub fn new(user_id: i64, schedule_type: &'a str, title: &'a str, rrule: String) -> Self {
        Self {
            user_id: user_id.to_string(),
            recurring_schedule: RecurringSchedule {
                title,
                schedule_type,
                recurring_expression: RecurringExpression {
                    margin: Margin::default(),
                    reminder_enabled: true,
                    reminder_margin: vec![Margin::default()],
                    rrule,
                },
            },
        }
    }
}
