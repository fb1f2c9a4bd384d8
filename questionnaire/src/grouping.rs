//! Grouping questions into wizard steps.

use indexmap::IndexMap;
use questionnaire_types::{Question, QuestionId, flatten_with};

/// All top-level questions that share a category. Each group is one wizard step.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    pub category: String,
    pub questions: Vec<Question>,
}

impl CategoryGroup {
    /// The label shown for this step, see [`step_label`].
    pub fn label(&self) -> String {
        step_label(&self.category)
    }

    /// Every answerable id in this group, sub-questions included, in pre-order.
    pub fn answerable_ids(&self) -> Vec<QuestionId> {
        flatten_with(&self.questions, |q| q.is_answerable().then(|| q.id().clone()))
    }

    /// The answerable ids whose question is required.
    pub fn required_ids(&self) -> Vec<QuestionId> {
        flatten_with(&self.questions, |q| {
            (q.is_answerable() && q.is_required()).then(|| q.id().clone())
        })
    }
}

/// Group top-level questions by category, in the order each category first appears.
///
/// Sub-questions travel with their parent, whatever their own category says.
pub fn group_by_category(questions: &[Question]) -> Vec<CategoryGroup> {
    let mut groups: IndexMap<&str, Vec<Question>> = IndexMap::new();
    for question in questions {
        groups
            .entry(question.category())
            .or_default()
            .push(question.clone());
    }

    groups
        .into_iter()
        .map(|(category, questions)| CategoryGroup {
            category: category.to_string(),
            questions,
        })
        .collect()
}

/// Turn a category key into a step label: first letter uppercased, first
/// underscore replaced by a space. `"company_profile"` becomes `"Company profile"`.
pub fn step_label(category: &str) -> String {
    let mut chars = category.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let label: String = first.to_uppercase().chain(chars).collect();
    label.replacen('_', " ", 1)
}
