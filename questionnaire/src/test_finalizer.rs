//! Test finalizer for driving submits without a real backend.
//!
//! `TestFinalizer` either accepts or rejects every submit and remembers what
//! it was given, so tests can assert on the submitted answers.
//!
//! # Example
//!
//! ```rust,ignore
//! use questionnaire::{TestFinalizer, WizardSession};
//!
//! let finalizer = TestFinalizer::succeeding();
//! let target = session.submit(&finalizer).await?;
//!
//! assert_eq!(target.as_str(), "completed");
//! assert_eq!(finalizer.calls(), 1);
//! ```

use std::sync::Mutex;

use async_trait::async_trait;
use questionnaire_types::ResponseMap;

use crate::Finalizer;

/// A finalizer with a fixed outcome that records every submit.
#[derive(Debug, Default)]
pub struct TestFinalizer {
    failure: Option<String>,
    received: Mutex<Vec<ResponseMap>>,
}

impl TestFinalizer {
    /// A finalizer that accepts every submit.
    pub fn succeeding() -> Self {
        Self::default()
    }

    /// A finalizer that rejects every submit with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            received: Mutex::default(),
        }
    }

    /// How many times `finalize` was called.
    pub fn calls(&self) -> usize {
        self.lock().len()
    }

    /// The answers passed to the most recent call.
    pub fn last_submitted(&self) -> Option<ResponseMap> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ResponseMap>> {
        self.received
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl Finalizer for TestFinalizer {
    async fn finalize(&self, responses: &ResponseMap) -> anyhow::Result<()> {
        self.lock().push(responses.clone());
        match &self.failure {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}
