//! Calendar event payload construction.
//!
//! [`BirthdayEvent`] serializes to the Google Calendar API v3 event resource
//! shape: an all-day event (date-only start and end), a yearly recurrence
//! rule, and a single email reminder override.

use serde::{Deserialize, Serialize};

/// The recurrence rule attached to every birthday event.
pub const YEARLY_RECURRENCE: &str = "RRULE:FREQ=YEARLY";

/// Minutes before the event for the email reminder (6 hours).
pub const REMINDER_MINUTES: u32 = 360;

/// An event payload for the Calendar API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthdayEvent {
    /// The event title.
    pub summary: String,
    /// The event description.
    pub description: String,
    /// All-day start date.
    pub start: EventDate,
    /// All-day end date (same day as start).
    pub end: EventDate,
    /// Recurrence rules in RFC 5545 RRULE form.
    pub recurrence: Vec<String>,
    /// Reminder configuration.
    pub reminders: Reminders,
}

/// A date-only event boundary, as the API represents all-day events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDate {
    /// The date in `YYYY-MM-DD` form.
    pub date: String,
    /// IANA timezone identifier.
    pub time_zone: String,
}

impl EventDate {
    fn utc(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            time_zone: "UTC".to_string(),
        }
    }
}

/// Reminder settings overriding the calendar defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminders {
    /// Whether to use the calendar's default reminders.
    pub use_default: bool,
    /// Explicit reminder overrides.
    pub overrides: Vec<ReminderOverride>,
}

/// A single reminder override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderOverride {
    /// Delivery method, e.g. `"email"` or `"popup"`.
    pub method: String,
    /// Minutes before the event start.
    pub minutes: u32,
}

impl BirthdayEvent {
    /// Builds the event payload for a person's birthday.
    ///
    /// `date` must already be normalized to `YYYY-MM-DD`. Start and end are
    /// the same day, making this an all-day event, and the yearly recurrence
    /// rule makes the calendar service generate future occurrences.
    pub fn for_name(name: &str, date: &str) -> Self {
        Self {
            summary: format!("{}'s birthday", name),
            description: format!("It's {}'s birthday!!", name),
            start: EventDate::utc(date),
            end: EventDate::utc(date),
            recurrence: vec![YEARLY_RECURRENCE.to_string()],
            reminders: Reminders {
                use_default: false,
                overrides: vec![ReminderOverride {
                    method: "email".to_string(),
                    minutes: REMINDER_MINUTES,
                }],
            },
        }
    }
}
