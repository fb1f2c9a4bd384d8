use std::collections::{BTreeMap, BTreeSet};

use questionnaire_types::QuestionId;
use serde::Serialize;

/// Everything the presentation layer needs to render the wizard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    /// One label per step, in order.
    pub steps: Vec<String>,
    pub active_step: usize,
    pub completed: BTreeSet<usize>,
    /// Completion ratio in `[0, 1]`.
    pub progress_ratio: f64,
    /// Field-level messages keyed by question id.
    pub errors: BTreeMap<QuestionId, String>,
    /// Form-level message from a failed submit.
    pub form_error: Option<String>,
    pub is_submitting: bool,
    pub can_go_back: bool,
    pub is_last_step: bool,
    pub all_steps_completed: bool,
}
