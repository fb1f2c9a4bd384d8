use crate::{AnswerShape, QuestionId};

/// Error type for building a questionnaire from a question tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Two nodes anywhere in the tree share an id.
    #[error("Duplicate question id: {id}")]
    DuplicateId { id: QuestionId },

    /// A catalog used a response type this crate does not know.
    #[error("Unknown response type '{value}' for question {id}")]
    UnknownResponseType { id: QuestionId, value: String },
}

impl SchemaError {
    /// The question the error is about.
    pub fn id(&self) -> &QuestionId {
        match self {
            Self::DuplicateId { id } | Self::UnknownResponseType { id, .. } => id,
        }
    }
}

/// Error type for recording an answer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    #[error("No question with id: {0}")]
    UnknownQuestion(QuestionId),

    #[error("Question {0} is informational and takes no answer")]
    NotAnswerable(QuestionId),

    #[error("Shape mismatch for question {id}: expected {expected}, got {actual}")]
    ShapeMismatch {
        id: QuestionId,
        expected: AnswerShape,
        actual: AnswerShape,
    },

    /// A submit is in flight; answers are frozen until it finishes.
    #[error("Answers cannot change while a submit is in progress")]
    Busy,
}
