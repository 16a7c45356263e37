//! Core types: birthday entries, date normalization, event payloads

pub mod date;
pub mod entry;
pub mod event;
pub mod tracing;

pub use date::{normalize_date, DateParseError};
pub use entry::{parse_birthday_file, parse_birthday_lines, BirthdayEntry};
pub use event::{BirthdayEvent, EventDate, Reminders, ReminderOverride};
pub use self::tracing::{init_tracing, TracingConfig, TracingError, TracingOutputFormat};
