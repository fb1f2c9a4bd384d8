//! # questionnaire
//!
//! A multi-step questionnaire engine. Presentation-agnostic.
//!
//! A question tree is split into steps by category. The engine derives a
//! validation schema from the tree, keeps the answers, refuses to leave a step
//! while required answers are missing, and reports overall progress. Rendering
//! is left to whoever drives the [`WizardSession`]; [`WizardSession::view`]
//! gives them everything to draw.
//!
//! ## Usage
//!
//! ```rust
//! use questionnaire::{Advance, Question, ResponseType, WizardSession};
//!
//! let mut session = WizardSession::new(vec![
//!     Question::new(1, "network", Some(ResponseType::Text)).required(),
//!     Question::new(2, "infra", Some(ResponseType::Text)),
//! ])
//! .unwrap();
//!
//! assert!(session.next().is_blocked());
//!
//! session.answer(1, "yes").unwrap();
//! assert_eq!(session.next(), Advance::Moved { from: 0, to: 1 });
//! assert_eq!(session.view().steps, vec!["Network", "Infra"]);
//! ```
//!
//! ## Submitting
//!
//! On the last step, [`WizardSession::submit`] hands the answers to a
//! [`Finalizer`] and returns the [`NavigationTarget`] to go to. Hosts that
//! need to render while the finalizer runs use
//! [`begin_submit`](WizardSession::begin_submit) and
//! [`finish_submit`](WizardSession::finish_submit) instead.

// Re-export all types from questionnaire-types
pub use questionnaire_types::*;

mod grouping;
pub use grouping::{CategoryGroup, group_by_category, step_label};

mod schema;
pub use schema::{FieldRule, ValidationSchema, Violation, derive_schema};

mod progress;
pub use progress::{Progress, progress, total_required};

mod steps;
pub use steps::{Advance, StepController};

mod config;
pub use config::WizardConfig;

mod submit;
pub use submit::{Finalizer, NavigationTarget, SubmitError, SubmitTicket};

mod view;
pub use view::WizardView;

mod session;
pub use session::WizardSession;

mod catalog;
pub use catalog::{Catalog, CatalogError};

// Test finalizer for exercising submits without a real backend
mod test_finalizer;
pub use test_finalizer::TestFinalizer;
