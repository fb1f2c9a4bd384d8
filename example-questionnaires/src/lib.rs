//! Ready-made questionnaires for demos and tests.

pub mod network_infra;
pub mod risk_assessment;

pub use risk_assessment::{demo_responses, questions as risk_assessment};
