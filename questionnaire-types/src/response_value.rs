use serde::{Deserialize, Serialize};

use crate::AnswerShape;

/// A single answer collected from the questionnaire.
///
/// Scalar questions (text, select) store `Text`, collection questions
/// (multiselect, checkbox) store `Choices`. An empty string or an empty
/// list is an unfilled answer, equivalent to no answer at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    /// A single value (from text or select questions).
    Text(String),

    /// An ordered selection of values (from multiselect or checkbox questions).
    Choices(Vec<String>),
}

impl ResponseValue {
    /// Check whether this value counts as unfilled.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::Choices(c) => c.is_empty(),
        }
    }

    /// The answer shape this value has.
    pub fn shape(&self) -> AnswerShape {
        match self {
            Self::Text(_) => AnswerShape::Scalar,
            Self::Choices(_) => AnswerShape::Collection,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Choices(_) => None,
        }
    }

    /// Try to get this value as a list of choices.
    pub fn as_choices(&self) -> Option<&[String]> {
        match self {
            Self::Choices(c) => Some(c),
            Self::Text(_) => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "Text",
            Self::Choices(_) => "Choices",
        }
    }
}

impl From<String> for ResponseValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ResponseValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Vec<String>> for ResponseValue {
    fn from(choices: Vec<String>) -> Self {
        Self::Choices(choices)
    }
}

impl From<Vec<&str>> for ResponseValue {
    fn from(choices: Vec<&str>) -> Self {
        Self::Choices(choices.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ResponseValue {
    fn from(choices: [&str; N]) -> Self {
        Self::Choices(choices.iter().map(|c| c.to_string()).collect())
    }
}
