use std::fmt;
use std::str::FromStr;

use crate::{QuestionId, SchemaError};

/// A single question in a questionnaire, possibly with nested sub-questions.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Identifier, unique across the whole tree including sub-questions.
    id: QuestionId,

    /// The category this question belongs to. Top-level questions sharing a
    /// category form one wizard step.
    category: String,

    /// The prompt text shown to the user.
    prompt: String,

    /// The kind of answer expected, `None` for informational nodes.
    response_type: Option<ResponseType>,

    /// Whether an answer is mandatory.
    required: bool,

    /// Options offered by select-like questions.
    options: Vec<String>,

    /// Follow-up questions shown beneath this one.
    sub_questions: Vec<Question>,
}

impl Question {
    /// Create a new optional question.
    pub fn new(
        id: impl Into<QuestionId>,
        category: impl Into<String>,
        response_type: Option<ResponseType>,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            prompt: String::new(),
            response_type,
            required: false,
            options: Vec::new(),
            sub_questions: Vec::new(),
        }
    }

    /// Create an informational node (a header or note) that takes no answer.
    pub fn info(id: impl Into<QuestionId>, category: impl Into<String>) -> Self {
        Self::new(id, category, None)
    }

    /// Mark this question as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Set whether this question is required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the prompt text.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Set the options offered by select-like questions.
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Set the sub-questions.
    pub fn with_sub_questions(mut self, sub_questions: Vec<Question>) -> Self {
        self.sub_questions = sub_questions;
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn sub_questions(&self) -> &[Question] {
        &self.sub_questions
    }

    /// Check if this question takes an answer at all.
    pub fn is_answerable(&self) -> bool {
        self.response_type.is_some()
    }

    /// The shape of the expected answer, `None` for informational nodes.
    pub fn shape(&self) -> Option<AnswerShape> {
        self.response_type.map(ResponseType::shape)
    }
}

/// The kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// Free text input.
    Text,

    /// Pick exactly one option.
    Select,

    /// Pick any number of options from a list.
    Multiselect,

    /// Tick any number of checkboxes.
    Checkbox,
}

impl ResponseType {
    /// Multiselect and checkbox answers are collections, everything else is scalar.
    pub fn shape(self) -> AnswerShape {
        match self {
            Self::Multiselect | Self::Checkbox => AnswerShape::Collection,
            Self::Text | Self::Select => AnswerShape::Scalar,
        }
    }

    /// The catalog name of this response type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Select => "select",
            Self::Multiselect => "multiselect",
            Self::Checkbox => "checkbox",
        }
    }

    /// Parse a catalog name, reporting the offending question on failure.
    pub fn parse_for(id: &QuestionId, value: &str) -> Result<Self, SchemaError> {
        value
            .parse()
            .map_err(|_| SchemaError::UnknownResponseType {
                id: id.clone(),
                value: value.to_string(),
            })
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known response type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownResponseType(pub String);

impl FromStr for ResponseType {
    type Err = UnknownResponseType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "select" => Ok(Self::Select),
            "multiselect" => Ok(Self::Multiselect),
            "checkbox" => Ok(Self::Checkbox),
            other => Err(UnknownResponseType(other.to_string())),
        }
    }
}

/// Whether an answer is a single value or a collection of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerShape {
    Scalar,
    Collection,
}

impl AnswerShape {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Collection => "collection",
        }
    }
}

impl fmt::Display for AnswerShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
