use serde::Deserialize;

use crate::NavigationTarget;

/// Settings for a wizard session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WizardConfig {
    /// Message attached to a required field that has no answer.
    pub required_message: String,

    /// Where the presentation layer should go after a successful submit.
    pub completion_target: NavigationTarget,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            required_message: "Required".to_string(),
            completion_target: NavigationTarget::new("completed"),
        }
    }
}

impl WizardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message shown under unanswered required fields.
    pub fn with_required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    /// Set the named target returned after a successful submit.
    pub fn with_completion_target(mut self, target: impl Into<NavigationTarget>) -> Self {
        self.completion_target = target.into();
        self
    }
}
