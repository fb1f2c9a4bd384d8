//! Core types for the questionnaire crate.
//!
//! This crate provides the foundational types for defining questionnaires:
//! - `Question` and `ResponseType` - The recursive question tree
//! - `walk` and `flatten_with` - The single pre-order traversal over that tree
//! - `ResponseValue` and `ResponseMap` - Collected answers keyed by `QuestionId`
//! - `SchemaError` and `ResponseError` - What can go wrong building or answering

mod question_id;
pub use question_id::QuestionId;

mod response_value;
pub use response_value::ResponseValue;

mod response_map;
pub use response_map::ResponseMap;

mod question;
pub use question::{AnswerShape, Question, ResponseType, UnknownResponseType};

mod walk;
pub use walk::{PreOrder, flatten_with, walk};

mod error;
pub use error::{ResponseError, SchemaError};
