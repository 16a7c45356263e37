//! The birthday import loop.
//!
//! Strictly sequential: one create-event call per entry, a fixed pacing
//! delay after each submission, and per-entry error isolation. A bad date
//! or a rejected submission is logged and skipped; nothing short of startup
//! failure aborts the run.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tracing::{error, info};

use bdaycal_core::{normalize_date, BirthdayEntry, BirthdayEvent};
use bdaycal_google::{CalendarClient, GoogleResult};

/// A boxed future, as returned by [`EventSubmitter`] methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Seam between the loop and the calendar service.
///
/// The loop only ever inspects the returned result; a submitter must never
/// panic on a service rejection.
pub trait EventSubmitter: Send + Sync {
    /// Submits one create-event request, returning the created event id.
    fn submit<'a>(
        &'a self,
        calendar_id: &'a str,
        event: BirthdayEvent,
    ) -> BoxFuture<'a, GoogleResult<String>>;
}

impl EventSubmitter for CalendarClient {
    fn submit<'a>(
        &'a self,
        calendar_id: &'a str,
        event: BirthdayEvent,
    ) -> BoxFuture<'a, GoogleResult<String>> {
        Box::pin(async move {
            self.insert_event(calendar_id, &event)
                .await
                .map(|created| created.id)
        })
    }
}

/// Outcome counts for one import run.
///
/// Informational only; per-entry failures never affect the exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Events successfully created.
    pub created: usize,
    /// Entries whose submission was rejected or failed.
    pub failed: usize,
    /// Entries skipped because their date could not be parsed.
    pub skipped: usize,
}

impl ImportSummary {
    /// Total number of entries processed.
    pub fn total(&self) -> usize {
        self.created + self.failed + self.skipped
    }
}

/// Runs the import loop over the parsed entries, in file order.
///
/// For each entry: normalize the date, build the event payload, submit it,
/// log the outcome, then wait `pacing` before the next entry. Entries whose
/// date fails to normalize are skipped without a network call (and without
/// the delay - the pacing exists for the remote service).
pub async fn run_import(
    entries: &[BirthdayEntry],
    submitter: &dyn EventSubmitter,
    calendar_id: &str,
    pacing: Duration,
) -> ImportSummary {
    let mut summary = ImportSummary::default();

    for entry in entries {
        let date = match normalize_date(&entry.raw_date) {
            Ok(date) => date,
            Err(e) => {
                error!("skipping {}: {}", entry.name, e);
                summary.skipped += 1;
                continue;
            }
        };

        let event = BirthdayEvent::for_name(&entry.name, &date);

        match submitter.submit(calendar_id, event).await {
            Ok(event_id) => {
                info!("created event {} for {} ({})", event_id, entry.name, date);
                summary.created += 1;
            }
            Err(e) => {
                error!("failed to create event for {}: {}", entry.name, e);
                summary.failed += 1;
            }
        }

        tokio::time::sleep(pacing).await;
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records submissions; entries whose summary contains `fail_marker`
    /// are rejected.
    struct RecordingSubmitter {
        calls: Mutex<Vec<(String, BirthdayEvent)>>,
        fail_marker: Option<String>,
    }

    impl RecordingSubmitter {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_marker: None,
            }
        }

        fn failing_on(marker: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail_marker: Some(marker.to_string()),
            }
        }

        fn calls(&self) -> Vec<(String, BirthdayEvent)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EventSubmitter for RecordingSubmitter {
        fn submit<'a>(
            &'a self,
            calendar_id: &'a str,
            event: BirthdayEvent,
        ) -> BoxFuture<'a, GoogleResult<String>> {
            Box::pin(async move {
                let rejected = self
                    .fail_marker
                    .as_ref()
                    .is_some_and(|marker| event.summary.contains(marker));

                self.calls
                    .lock()
                    .unwrap()
                    .push((calendar_id.to_string(), event));

                if rejected {
                    Err(bdaycal_google::GoogleError::server("simulated rejection"))
                } else {
                    Ok(format!("event-{}", self.calls.lock().unwrap().len()))
                }
            })
        }
    }

    fn entries(pairs: &[(&str, &str)]) -> Vec<BirthdayEntry> {
        pairs
            .iter()
            .map(|(name, date)| BirthdayEntry::new(*name, *date))
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn submits_one_event_per_valid_entry_in_order() {
        let submitter = RecordingSubmitter::new();
        let entries = entries(&[("Alice", "03/05/1990"), ("Bob", "12/31/1985")]);

        let summary =
            run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(summary.created, 2);
        assert_eq!(summary.total(), 2);

        let calls = submitter.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "primary");
        assert_eq!(calls[0].1.summary, "Alice's birthday");
        assert_eq!(calls[0].1.start.date, "1990-03-05");
        assert_eq!(calls[1].1.summary, "Bob's birthday");
        assert_eq!(calls[1].1.start.date, "1985-12-31");
    }

    #[tokio::test(start_paused = true)]
    async fn waits_pacing_delay_per_submission() {
        let submitter = RecordingSubmitter::new();
        let entries = entries(&[
            ("A", "01/01/2000"),
            ("B", "02/02/2000"),
            ("C", "03/03/2000"),
        ]);

        let start = tokio::time::Instant::now();
        run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert!(start.elapsed() >= Duration::from_millis(6000));
    }

    #[tokio::test(start_paused = true)]
    async fn bad_date_is_skipped_without_submission() {
        let submitter = RecordingSubmitter::new();
        let entries = entries(&[("Alice", "03/05/1990"), ("Glitch", "not-a-date")]);

        let summary =
            run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(summary.created, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(submitter.calls().len(), 1);
        assert_eq!(submitter.calls()[0].1.summary, "Alice's birthday");
    }

    #[tokio::test(start_paused = true)]
    async fn submission_failure_does_not_stop_the_run() {
        let submitter = RecordingSubmitter::failing_on("Bob");
        let entries = entries(&[
            ("Alice", "03/05/1990"),
            ("Bob", "12/31/1985"),
            ("Carol", "07/04/1976"),
        ]);

        let summary =
            run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(summary.created, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(submitter.calls().len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn trailing_artifact_date_is_normalized_before_submission() {
        let submitter = RecordingSubmitter::new();
        let entries = entries(&[("Alice", "03/05/1990X")]);

        run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(submitter.calls()[0].1.start.date, "1990-03-05");
    }

    #[tokio::test(start_paused = true)]
    async fn malformed_line_produces_no_call() {
        let submitter = RecordingSubmitter::new();
        let entries =
            bdaycal_core::parse_birthday_lines("Alice - 03/05/1990\nBadLineNoDash\n");

        let summary =
            run_import(&entries, &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(summary.created, 1);
        assert_eq!(summary.total(), 1);

        let calls = submitter.calls();
        assert_eq!(calls.len(), 1);
        let event = &calls[0].1;
        assert_eq!(event.summary, "Alice's birthday");
        assert_eq!(event.start.date, "1990-03-05");
        assert_eq!(event.end.date, "1990-03-05");
        assert_eq!(event.recurrence, vec!["RRULE:FREQ=YEARLY".to_string()]);
        assert_eq!(event.reminders.overrides[0].minutes, 360);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_input_yields_empty_summary() {
        let submitter = RecordingSubmitter::new();
        let summary =
            run_import(&[], &submitter, "primary", Duration::from_millis(2000)).await;

        assert_eq!(summary, ImportSummary::default());
        assert!(submitter.calls().is_empty());
    }
}
