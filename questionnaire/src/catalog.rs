//! Loading question trees from JSON catalogs.
//!
//! ```json
//! {
//!   "questions": [
//!     {
//!       "id": 1,
//!       "category": "network",
//!       "question": "How many employees?",
//!       "responseType": "select",
//!       "required": true,
//!       "options": ["1-100", "101-500"],
//!       "subQuestions": []
//!     }
//!   ]
//! }
//! ```
//!
//! A missing or `null` `responseType` marks an informational node.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use questionnaire_types::{Question, QuestionId, ResponseType, SchemaError};
use serde::Deserialize;

use crate::{WizardConfig, WizardSession, derive_schema};

/// Error type for loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid question tree: {0}")]
    Schema(#[from] SchemaError),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCatalog {
    questions: Vec<RawQuestion>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawQuestion {
    id: QuestionId,
    category: String,
    #[serde(default, alias = "question")]
    prompt: String,
    #[serde(default)]
    response_type: Option<String>,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    sub_questions: Option<Vec<RawQuestion>>,
}

impl RawQuestion {
    fn into_question(self) -> Result<Question, SchemaError> {
        let response_type = self
            .response_type
            .as_deref()
            .map(|value| ResponseType::parse_for(&self.id, value))
            .transpose()?;

        let sub_questions = self
            .sub_questions
            .unwrap_or_default()
            .into_iter()
            .map(RawQuestion::into_question)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Question::new(self.id, self.category, response_type)
            .with_prompt(self.prompt)
            .with_required(self.required)
            .with_options(self.options)
            .with_sub_questions(sub_questions))
    }
}

/// A validated question tree loaded from JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    questions: Vec<Question>,
}

impl Catalog {
    /// Validate an in-memory tree.
    pub fn new(questions: Vec<Question>) -> Result<Self, SchemaError> {
        derive_schema(&questions)?;
        Ok(Self { questions })
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_reader(reader)?;
        Self::from_raw(raw)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        tracing::debug!(
            path = %path.display(),
            questions = catalog.questions.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    fn from_raw(raw: RawCatalog) -> Result<Self, CatalogError> {
        let questions = raw
            .questions
            .into_iter()
            .map(RawQuestion::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(questions)?)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    /// Start a wizard session over this catalog.
    pub fn into_session(self, config: WizardConfig) -> Result<WizardSession, SchemaError> {
        WizardSession::with_config(self.questions, config)
    }
}
