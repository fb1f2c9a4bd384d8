//! The submit boundary: handing answers to an external finalizer.

use std::fmt;

use async_trait::async_trait;
use questionnaire_types::{QuestionId, ResponseMap};
use serde::{Deserialize, Serialize};

/// A named place the presentation layer should navigate to.
///
/// The engine never knows concrete routes, only names like `"completed"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NavigationTarget(String);

impl NavigationTarget {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NavigationTarget {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NavigationTarget {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Receives the finished answers, e.g. by sending them to a server.
#[async_trait]
pub trait Finalizer: Send + Sync {
    /// Finalize the answers. Any error becomes the form-level error message.
    async fn finalize(&self, responses: &ResponseMap) -> anyhow::Result<()>;
}

/// Error type for submitting a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Submit is only offered on the last step.
    #[error("Submit is only allowed on the last step (active step: {active_step})")]
    NotOnLastStep { active_step: usize },

    /// Another submit has not finished yet.
    #[error("A submit is already in progress")]
    InFlight,

    /// Required answers are missing somewhere in the questionnaire.
    #[error("{} required question(s) are unanswered", .missing.len())]
    Incomplete { missing: Vec<QuestionId> },

    /// The finalizer reported a failure.
    #[error("Submit failed: {0}")]
    Finalize(#[from] anyhow::Error),
}

impl SubmitError {
    /// Check if the submit was refused before reaching the finalizer.
    pub fn is_rejected(&self) -> bool {
        !matches!(self, Self::Finalize(_))
    }
}

/// Proof that a submit was started; hand it back to finish the submit.
#[derive(Debug)]
#[must_use = "a started submit must be finished, or the session stays busy"]
pub struct SubmitTicket {
    pub(crate) responses: ResponseMap,
}

impl SubmitTicket {
    /// The answers being submitted, compacted.
    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }
}
