//! Validation schema derived from a question tree.

use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use questionnaire_types::{
    AnswerShape, Question, QuestionId, ResponseMap, ResponseValue, SchemaError, walk,
};

/// The rule for a single answerable question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub shape: AnswerShape,
    pub required: bool,
}

/// Why an answer failed its rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// Required, but missing or empty.
    Missing,

    /// The stored value has the wrong shape for the question.
    WrongShape {
        expected: AnswerShape,
        actual: AnswerShape,
    },
}

impl FieldRule {
    /// Check a (possibly absent) value against this rule.
    pub fn check(&self, value: Option<&ResponseValue>) -> Result<(), Violation> {
        match value {
            Some(value) if value.shape() != self.shape => Err(Violation::WrongShape {
                expected: self.shape,
                actual: value.shape(),
            }),
            Some(value) if !value.is_empty() => Ok(()),
            _ if self.required => Err(Violation::Missing),
            _ => Ok(()),
        }
    }
}

/// Per-question rules for every answerable node in a tree, in pre-order.
///
/// Two schemas compare equal when they hold the same rules, whatever order
/// they were inserted in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationSchema {
    rules: IndexMap<QuestionId, FieldRule>,
}

impl ValidationSchema {
    pub fn get(&self, id: &QuestionId) -> Option<&FieldRule> {
        self.rules.get(id)
    }

    pub fn contains(&self, id: &QuestionId) -> bool {
        self.rules.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &FieldRule)> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Ids of every required field.
    pub fn required_ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.rules
            .iter()
            .filter(|(_, rule)| rule.required)
            .map(|(id, _)| id)
    }

    /// Validate one field. Ids outside the schema always pass.
    pub fn validate_field(
        &self,
        id: &QuestionId,
        responses: &ResponseMap,
    ) -> Result<(), Violation> {
        match self.rules.get(id) {
            Some(rule) => rule.check(responses.get(id)),
            None => Ok(()),
        }
    }

    /// Validate every field, returning the failures keyed by id.
    pub fn validate_all(&self, responses: &ResponseMap) -> BTreeMap<QuestionId, Violation> {
        self.rules
            .iter()
            .filter_map(|(id, rule)| rule.check(responses.get(id)).err().map(|v| (id.clone(), v)))
            .collect()
    }
}

/// Derive the validation schema for a question tree.
///
/// Informational nodes (no response type) get no rule, but their ids still
/// take part in the uniqueness check.
pub fn derive_schema(questions: &[Question]) -> Result<ValidationSchema, SchemaError> {
    let mut seen = HashSet::new();
    let mut rules = IndexMap::new();

    for question in walk(questions) {
        if !seen.insert(question.id()) {
            return Err(SchemaError::DuplicateId {
                id: question.id().clone(),
            });
        }
        if let Some(shape) = question.shape() {
            rules.insert(
                question.id().clone(),
                FieldRule {
                    shape,
                    required: question.is_required(),
                },
            );
        }
    }

    tracing::debug!(fields = rules.len(), "derived validation schema");
    Ok(ValidationSchema { rules })
}
