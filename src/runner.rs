use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::record::OutcomeRecord;
use crate::report;
use crate::status::{TestFailure, TestOutcome, TestStatus, TestSuccess};

/// Runs one test body, reports the outcome, and returns it.
///
/// A panicking body counts as a failure rather than tearing down the whole
/// run; the panic payload becomes the failure message.
pub fn run_test<F>(name: &str, test: F) -> TestOutcome
where
    F: FnOnce() -> Result<TestSuccess, TestFailure>,
{
    let outcome = match panic::catch_unwind(AssertUnwindSafe(test)) {
        Ok(Ok(success)) => TestOutcome::Success(success),
        Ok(Err(failure)) => TestOutcome::Failure(failure),
        Err(payload) => {
            let message = panic_message(payload.as_ref());
            TestOutcome::Failure(TestFailure::new(format!(
                "test '{}' panicked: {}",
                name, message
            )))
        }
    };
    report::outcome(&outcome);
    outcome
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "opaque panic payload"
    }
}

/// Tally of one run's outcomes, in the order they finished.
#[derive(Serialize, Debug, Default, Clone)]
pub struct Summary {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    records: Vec<OutcomeRecord>,
}

impl Summary {
    pub fn new() -> Summary {
        Summary::default()
    }

    pub fn record(&mut self, name: &str, outcome: &TestOutcome) {
        self.total += 1;
        match outcome.status() {
            TestStatus::Passed => self.passed += 1,
            TestStatus::Failed => self.failed += 1,
        }
        self.records.push(OutcomeRecord::new(name, outcome));
    }

    pub fn overall(&self) -> TestStatus {
        if self.failed == 0 {
            TestStatus::Passed
        } else {
            TestStatus::Failed
        }
    }

    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_body_maps_to_success() {
        let outcome = run_test("shuffle_grouping", || {
            Ok(TestSuccess::with_message("all 12 cases passed"))
        });
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), Some("all 12 cases passed"));
    }

    #[test]
    fn err_body_maps_to_failure() {
        let outcome = run_test("fields_grouping", || {
            Err(TestFailure::new("wrong tuple count"))
        });
        assert!(outcome.is_failure());
        assert_eq!(outcome.message(), Some("wrong tuple count"));
    }

    #[test]
    fn panicking_body_maps_to_failure() {
        let outcome = run_test("all_grouping", || panic!("spout never acked"));
        assert!(outcome.is_failure());
        let message = outcome.message().unwrap();
        assert!(message.contains("all_grouping"));
        assert!(message.contains("spout never acked"));
    }

    #[test]
    fn summary_tallies_and_reports_overall_status() {
        let mut summary = Summary::new();
        assert_eq!(summary.overall(), TestStatus::Passed);

        summary.record(
            "one",
            &TestOutcome::from(TestSuccess::with_message("done")),
        );
        summary.record("two", &TestOutcome::from(TestFailure::new("boom")));
        summary.record("three", &TestOutcome::from(TestSuccess::new()));

        assert_eq!(summary.total, 3);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.overall(), TestStatus::Failed);
        assert_eq!(summary.records().len(), 3);
        assert_eq!(summary.records()[1].test_name, "two");
    }

    #[test]
    fn summary_serializes_records() {
        let mut summary = Summary::new();
        summary.record("one", &TestOutcome::from(TestSuccess::new()));
        let json = summary.to_json().unwrap();
        assert!(json.contains("\"test_name\":\"one\""));
        assert!(json.contains("\"status\":\"Passed\""));
    }
}
