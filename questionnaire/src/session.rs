//! A single wizard session: the owned state every transition works on.

use std::collections::BTreeMap;

use questionnaire_types::{
    Question, QuestionId, ResponseError, ResponseMap, ResponseValue, SchemaError, walk,
};

use crate::{
    Advance, CategoryGroup, Finalizer, NavigationTarget, Progress, StepController, SubmitError,
    SubmitTicket, ValidationSchema, Violation, WizardConfig, WizardView, derive_schema,
    group_by_category, progress,
};

/// Owns the question tree, the answers and the step state of one wizard run.
///
/// Everything is driven through `&mut self` from the UI thread. Dropping the
/// session abandons the wizard; there is nothing to clean up.
#[derive(Debug, Clone)]
pub struct WizardSession {
    questions: Vec<Question>,
    groups: Vec<CategoryGroup>,
    schema: ValidationSchema,
    responses: ResponseMap,
    steps: StepController,
    errors: BTreeMap<QuestionId, String>,
    form_error: Option<String>,
    progress: Progress,
    submitting: bool,
    config: WizardConfig,
}

impl WizardSession {
    /// Start a session with default settings and no answers.
    pub fn new(questions: Vec<Question>) -> Result<Self, SchemaError> {
        Self::with_config(questions, WizardConfig::default())
    }

    /// Start a session with the given settings and no answers.
    ///
    /// Fails fast if the tree has duplicate ids.
    pub fn with_config(
        questions: Vec<Question>,
        config: WizardConfig,
    ) -> Result<Self, SchemaError> {
        let schema = derive_schema(&questions)?;
        let groups = group_by_category(&questions);
        let steps = StepController::new(&groups);
        let progress = progress(&questions, &ResponseMap::new());

        tracing::debug!(
            steps = groups.len(),
            fields = schema.len(),
            required = progress.total,
            "questionnaire session started"
        );

        Ok(Self {
            questions,
            groups,
            schema,
            responses: ResponseMap::new(),
            steps,
            errors: BTreeMap::new(),
            form_error: None,
            progress,
            submitting: false,
            config,
        })
    }

    /// Resume from previously saved answers.
    ///
    /// Every entry is checked like [`answer`](Self::answer); the first bad
    /// entry rejects the whole map.
    pub fn with_responses(mut self, responses: ResponseMap) -> Result<Self, ResponseError> {
        if self.submitting {
            return Err(ResponseError::Busy);
        }
        for (id, value) in &responses {
            self.check_answer(id, value)?;
        }
        self.responses = responses;
        self.refresh_progress();
        Ok(self)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn responses(&self) -> &ResponseMap {
        &self.responses
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn errors(&self) -> &BTreeMap<QuestionId, String> {
        &self.errors
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn active_step(&self) -> usize {
        self.steps.active_step()
    }

    /// Top-level questions of the active step.
    pub fn active_questions(&self) -> &[Question] {
        self.groups
            .get(self.steps.active_step())
            .map(|group| group.questions.as_slice())
            .unwrap_or_default()
    }

    pub fn step_labels(&self) -> Vec<String> {
        self.groups.iter().map(CategoryGroup::label).collect()
    }

    /// Record an answer, replacing any previous one, and return fresh progress.
    ///
    /// Refused with [`ResponseError::Busy`] while a submit is in flight.
    pub fn answer(
        &mut self,
        id: impl Into<QuestionId>,
        value: impl Into<ResponseValue>,
    ) -> Result<Progress, ResponseError> {
        let id = id.into();
        let value = value.into();
        if self.submitting {
            tracing::warn!(%id, "answer rejected, submit in progress");
            return Err(ResponseError::Busy);
        }
        if let Err(err) = self.check_answer(&id, &value) {
            tracing::warn!(%id, error = %err, "answer rejected");
            return Err(err);
        }

        if !value.is_empty() {
            self.errors.remove(&id);
        }
        tracing::debug!(%id, kind = value.type_name(), "answer recorded");
        self.responses.set(id, value);
        Ok(self.refresh_progress())
    }

    /// Remove an answer and return fresh progress.
    ///
    /// A no-op while a submit is in flight.
    pub fn clear_answer(&mut self, id: &QuestionId) -> Progress {
        if self.submitting {
            return self.progress;
        }
        if self.responses.remove(id).is_some() {
            tracing::debug!(%id, "answer cleared");
        }
        self.refresh_progress()
    }

    /// Try to complete the active step and move on.
    ///
    /// Clears previous errors first. When blocked, every unanswered field of
    /// the step is validated and the failures become field errors.
    pub fn next(&mut self) -> Advance {
        if self.submitting {
            return Advance::Busy;
        }
        self.errors.clear();
        self.form_error = None;

        let outcome = self.steps.advance(&self.responses);
        match &outcome {
            Advance::Blocked {
                missing,
                unanswered,
            } => {
                for id in unanswered {
                    if let Err(violation) = self.schema.validate_field(id, &self.responses) {
                        let message = self.message(violation);
                        self.errors.insert(id.clone(), message);
                    }
                }
                tracing::warn!(
                    step = self.steps.active_step(),
                    missing = missing.len(),
                    "step blocked on required answers"
                );
            }
            Advance::Moved { from, to } => {
                tracing::info!(step = from, next = to, "step completed");
            }
            Advance::Finished { step } => {
                tracing::info!(step, "all steps completed");
            }
            Advance::Busy => {}
        }
        outcome
    }

    /// Go to the previous step.
    pub fn back(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        let moved = self.steps.back();
        if moved {
            tracing::debug!(step = self.steps.active_step(), "stepped back");
        }
        moved
    }

    /// Jump to a completed step; anything else is a no-op.
    pub fn jump(&mut self, step: usize) -> bool {
        if self.submitting {
            return false;
        }
        let moved = self.steps.jump(step);
        if moved {
            tracing::debug!(step, "jumped to step");
        }
        moved
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        self.steps.is_last_step() && !self.submitting
    }

    /// Start a submit.
    ///
    /// Refuses when not on the last step, when a submit is already in flight,
    /// or when any required answer in the whole questionnaire is missing (those
    /// become field errors). On success the session is busy until
    /// [`finish_submit`](Self::finish_submit) is called with the ticket.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, SubmitError> {
        if self.submitting {
            return Err(SubmitError::InFlight);
        }
        if !self.steps.is_last_step() {
            return Err(SubmitError::NotOnLastStep {
                active_step: self.steps.active_step(),
            });
        }

        self.errors.clear();
        self.form_error = None;

        let failures = self.schema.validate_all(&self.responses);
        if !failures.is_empty() {
            let missing: Vec<QuestionId> = failures.keys().cloned().collect();
            for (id, violation) in failures {
                let message = self.message(violation);
                self.errors.insert(id, message);
            }
            tracing::warn!(missing = missing.len(), "submit refused, answers missing");
            return Err(SubmitError::Incomplete { missing });
        }

        self.submitting = true;
        tracing::info!(answers = self.responses.len(), "submit started");
        Ok(SubmitTicket {
            responses: self.responses.clone(),
        })
    }

    /// Finish a submit started with [`begin_submit`](Self::begin_submit).
    ///
    /// On failure the answers are kept so the user can retry, and the error
    /// becomes the form-level message.
    pub fn finish_submit(
        &mut self,
        _ticket: SubmitTicket,
        result: anyhow::Result<()>,
    ) -> Result<NavigationTarget, SubmitError> {
        self.submitting = false;

        match result {
            Ok(()) => {
                tracing::info!(destination = %self.config.completion_target, "submit finished");
                Ok(self.config.completion_target.clone())
            }
            Err(err) => {
                tracing::warn!(error = %err, "submit failed");
                self.form_error = Some(err.to_string());
                Err(SubmitError::Finalize(err))
            }
        }
    }

    /// Submit the answers through `finalizer`, returning where to navigate on success.
    pub async fn submit<F>(&mut self, finalizer: &F) -> Result<NavigationTarget, SubmitError>
    where
        F: Finalizer + ?Sized,
    {
        let ticket = self.begin_submit()?;
        let result = finalizer.finalize(ticket.responses()).await;
        self.finish_submit(ticket, result)
    }

    /// Snapshot of the state for rendering.
    pub fn view(&self) -> WizardView {
        WizardView {
            steps: self.step_labels(),
            active_step: self.steps.active_step(),
            completed: self.steps.completed().clone(),
            progress_ratio: self.progress.ratio(),
            errors: self.errors.clone(),
            form_error: self.form_error.clone(),
            is_submitting: self.submitting,
            can_go_back: self.steps.can_go_back() && !self.submitting,
            is_last_step: self.steps.is_last_step(),
            all_steps_completed: self.steps.all_steps_completed(),
        }
    }

    fn check_answer(&self, id: &QuestionId, value: &ResponseValue) -> Result<(), ResponseError> {
        let Some(rule) = self.schema.get(id) else {
            return Err(if walk(&self.questions).any(|q| q.id() == id) {
                ResponseError::NotAnswerable(id.clone())
            } else {
                ResponseError::UnknownQuestion(id.clone())
            });
        };
        if value.shape() != rule.shape {
            return Err(ResponseError::ShapeMismatch {
                id: id.clone(),
                expected: rule.shape,
                actual: value.shape(),
            });
        }
        Ok(())
    }

    fn refresh_progress(&mut self) -> Progress {
        self.responses.compact();
        self.progress = progress(&self.questions, &self.responses);
        tracing::debug!(
            filled = self.progress.filled,
            total = self.progress.total,
            ratio = self.progress.ratio(),
            "progress updated"
        );
        self.progress
    }

    fn message(&self, violation: Violation) -> String {
        match violation {
            Violation::Missing => self.config.required_message.clone(),
            Violation::WrongShape { expected, .. } => format!("Expected a {expected} answer"),
        }
    }
}
