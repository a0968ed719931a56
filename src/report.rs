//! Emits the log entry for an outcome. Subscriber setup, formatting, and the
//! destination all stay with the embedding harness.

use tracing::{error, info};

use crate::status::{TestFailure, TestOutcome, TestSuccess};

pub fn outcome(outcome: &TestOutcome) {
    match outcome {
        TestOutcome::Success(success) => self::success(success),
        TestOutcome::Failure(failure) => self::failure(failure),
    }
}

/// One error-level entry per failure; the cause chain rides along when present.
pub fn failure(failure: &TestFailure) {
    match failure.cause() {
        Some(cause) => error!("{} :: {}", failure.message(), cause_chain(cause)),
        None => error!("{}", failure.message()),
    }
}

/// One info-level entry, and only when the success carries a note.
pub fn success(success: &TestSuccess) {
    if let Some(message) = success.message() {
        info!("{}", message);
    }
}

pub(crate) fn cause_chain(cause: &(dyn std::error::Error + 'static)) -> String {
    let mut rendered = cause.to_string();
    let mut source = cause.source();
    while let Some(err) = source {
        rendered.push_str(": ");
        rendered.push_str(&err.to_string());
        source = err.source();
    }
    rendered
}
