use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Underlying error attached to a failed test.
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single integration test: a reason, plus the error that
/// triggered it when there is one.
///
/// The value itself is inert; call [`TestFailure::recorded`] or
/// [`crate::report::failure`] to emit the error-level log entry.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct TestFailure {
    message: String,
    #[source]
    cause: Option<Cause>,
}

impl TestFailure {
    /// `message` must be non-empty; it is the only explanation the failure carries.
    pub fn new(message: impl Into<String>) -> TestFailure {
        TestFailure {
            message: message.into(),
            cause: None,
        }
    }

    pub fn with_cause(message: impl Into<String>, cause: impl Into<Cause>) -> TestFailure {
        TestFailure {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Emits the error-level log entry for this failure, then hands the value back.
    pub fn recorded(self) -> TestFailure {
        crate::report::failure(&self);
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self)
    }
}

/// Successful completion of a single integration test, with an optional note.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct TestSuccess {
    #[serde(default)]
    message: Option<String>,
}

impl TestSuccess {
    pub fn new() -> TestSuccess {
        TestSuccess { message: None }
    }

    /// An empty `message` is treated the same as no message at all.
    pub fn with_message(message: impl Into<String>) -> TestSuccess {
        let message = message.into();
        TestSuccess {
            message: if message.is_empty() {
                None
            } else {
                Some(message)
            },
        }
    }

    /// Emits the info-level log entry when a note is present, then hands the value back.
    pub fn recorded(self) -> TestSuccess {
        crate::report::success(&self);
        self
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// The two possible outcomes of running one test.
#[derive(Debug)]
pub enum TestOutcome {
    Success(TestSuccess),
    Failure(TestFailure),
}

impl TestOutcome {
    pub fn status(&self) -> TestStatus {
        match self {
            TestOutcome::Success(_) => TestStatus::Passed,
            TestOutcome::Failure(_) => TestStatus::Failed,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestOutcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, TestOutcome::Failure(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            TestOutcome::Success(success) => success.message(),
            TestOutcome::Failure(failure) => Some(failure.message()),
        }
    }

    /// Converts back into a plain `Result` so callers can propagate the
    /// failure with `?`.
    pub fn into_result(self) -> Result<TestSuccess, TestFailure> {
        match self {
            TestOutcome::Success(success) => Ok(success),
            TestOutcome::Failure(failure) => Err(failure),
        }
    }
}

impl From<TestSuccess> for TestOutcome {
    fn from(success: TestSuccess) -> TestOutcome {
        TestOutcome::Success(success)
    }
}

impl From<TestFailure> for TestOutcome {
    fn from(failure: TestFailure) -> TestOutcome {
        TestOutcome::Failure(failure)
    }
}

/// Flat status tag for serialized reports.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed,
}
