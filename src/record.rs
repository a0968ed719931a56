use serde::{Deserialize, Serialize};

use crate::report;
use crate::status::{TestOutcome, TestStatus};

/// One outcome flattened into the shape the harness persists and ships
/// around: the live cause error becomes its rendered chain.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct OutcomeRecord {
    pub test_name: String,
    pub status: TestStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,

    pub time_stamp: String,
}

impl OutcomeRecord {
    pub fn new(test_name: impl Into<String>, outcome: &TestOutcome) -> OutcomeRecord {
        let time_stamp = chrono::Local::now()
            .format("%Y-%m-%d %H:%M:%S.%f")
            .to_string();
        let cause = match outcome {
            TestOutcome::Failure(failure) => failure.cause().map(report::cause_chain),
            TestOutcome::Success(_) => None,
        };

        OutcomeRecord {
            test_name: test_name.into(),
            status: outcome.status(),
            message: outcome.message().map(str::to_string),
            cause,
            time_stamp,
        }
    }
}
