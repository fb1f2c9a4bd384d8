//! The step state machine.
//!
//! A step can only be completed by advancing out of it with every required
//! answer filled. Completed steps need not be contiguous, and only completed
//! steps can be jumped to.

use std::collections::BTreeSet;

use questionnaire_types::{QuestionId, ResponseMap};

use crate::CategoryGroup;

/// Result of trying to advance past the active step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// The step was completed and another step is now active.
    Moved { from: usize, to: usize },

    /// The last step was completed and every step is now complete.
    Finished { step: usize },

    /// Required answers are missing; nothing changed.
    Blocked {
        /// Required ids of the step without an answer.
        missing: Vec<QuestionId>,
        /// Every answerable id of the step without an answer, required or not.
        unanswered: Vec<QuestionId>,
    },

    /// A submit is in flight; transitions are disabled.
    Busy,
}

impl Advance {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
struct StepFields {
    answerable: Vec<QuestionId>,
    required: Vec<QuestionId>,
}

/// Tracks the active step and which steps are complete.
#[derive(Debug, Clone, PartialEq)]
pub struct StepController {
    steps: Vec<StepFields>,
    active: usize,
    completed: BTreeSet<usize>,
}

impl StepController {
    /// Build a controller with one step per group, starting on step 0.
    pub fn new(groups: &[CategoryGroup]) -> Self {
        let steps = groups
            .iter()
            .map(|group| StepFields {
                answerable: group.answerable_ids(),
                required: group.required_ids(),
            })
            .collect();

        Self {
            steps,
            active: 0,
            completed: BTreeSet::new(),
        }
    }

    pub fn active_step(&self) -> usize {
        self.active
    }

    pub fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn completed_steps(&self) -> usize {
        self.completed.len()
    }

    pub fn is_step_complete(&self, step: usize) -> bool {
        self.completed.contains(&step)
    }

    pub fn is_last_step(&self) -> bool {
        self.active + 1 == self.steps.len()
    }

    pub fn all_steps_completed(&self) -> bool {
        self.completed.len() == self.steps.len()
    }

    pub fn can_go_back(&self) -> bool {
        self.active > 0
    }

    /// The lowest step index not yet completed.
    pub fn first_incomplete(&self) -> Option<usize> {
        (0..self.steps.len()).find(|step| !self.completed.contains(step))
    }

    /// Answerable ids of a step, sub-questions included.
    pub fn step_ids(&self, step: usize) -> &[QuestionId] {
        self.steps
            .get(step)
            .map(|fields| fields.answerable.as_slice())
            .unwrap_or_default()
    }

    /// Required answerable ids of a step.
    pub fn required_ids(&self, step: usize) -> &[QuestionId] {
        self.steps
            .get(step)
            .map(|fields| fields.required.as_slice())
            .unwrap_or_default()
    }

    /// Try to complete the active step and move on.
    ///
    /// Moves to the next step, or from the last step back to the first
    /// incomplete one. When the last step completes the whole wizard, stays put.
    pub fn advance(&mut self, responses: &ResponseMap) -> Advance {
        let Some(fields) = self.steps.get(self.active) else {
            return Advance::Finished { step: self.active };
        };

        let missing: Vec<QuestionId> = fields
            .required
            .iter()
            .filter(|id| !responses.is_filled(id))
            .cloned()
            .collect();
        if !missing.is_empty() {
            let unanswered = fields
                .answerable
                .iter()
                .filter(|id| !responses.is_filled(id))
                .cloned()
                .collect();
            return Advance::Blocked {
                missing,
                unanswered,
            };
        }

        let from = self.active;
        self.completed.insert(from);

        if !self.is_last_step() {
            self.active += 1;
        } else if let Some(first) = self.first_incomplete() {
            self.active = first;
        } else {
            return Advance::Finished { step: from };
        }

        Advance::Moved {
            from,
            to: self.active,
        }
    }

    /// Go to the previous step. Returns `false` on the first step.
    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.active -= 1;
        true
    }

    /// Jump to a completed step. Returns `false`, changing nothing, otherwise.
    pub fn jump(&mut self, step: usize) -> bool {
        if !self.completed.contains(&step) {
            return false;
        }
        self.active = step;
        true
    }
}
