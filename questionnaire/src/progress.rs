//! Completion progress over the whole question tree.

use questionnaire_types::{Question, ResponseMap, walk};
use serde::Serialize;

/// Filled answers against required questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub filled: usize,
    pub total: usize,
}

impl Progress {
    /// `filled / total` in `[0, 1]`; `0` when nothing is required.
    ///
    /// Optional answers count as filled too, so the quotient is clamped.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.filled as f64 / self.total as f64).min(1.0)
    }

    /// Whole-number percentage, rounded down.
    pub fn percent(&self) -> u8 {
        (self.ratio() * 100.0).floor() as u8
    }
}

/// Count every required node at any depth, informational nodes included.
pub fn total_required(questions: &[Question]) -> usize {
    walk(questions).filter(|q| q.is_required()).count()
}

/// Compute progress for a tree and the current answers.
pub fn progress(questions: &[Question], responses: &ResponseMap) -> Progress {
    Progress {
        filled: responses.count_filled(),
        total: total_required(questions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire_types::ResponseType;

    fn tree() -> Vec<Question> {
        vec![
            Question::info(100, "network")
                .required()
                .with_sub_questions(vec![
                    Question::new(1, "network", Some(ResponseType::Text)).required(),
                    Question::new(2, "network", Some(ResponseType::Text)),
                ]),
            Question::new(3, "infra", Some(ResponseType::Multiselect)).required(),
        ]
    }

    #[test]
    fn counts_required_at_any_depth_including_info() {
        assert_eq!(total_required(&tree()), 3);
    }

    #[test]
    fn nothing_required_is_zero_not_nan() {
        let questions = vec![Question::new(1, "network", Some(ResponseType::Text))];
        let responses = ResponseMap::new().with_response(1, "yes");

        let p = progress(&questions, &responses);
        assert_eq!(p.total, 0);
        assert_eq!(p.ratio(), 0.0);
        assert_eq!(progress(&[], &ResponseMap::new()).ratio(), 0.0);
    }

    #[test]
    fn empty_answers_do_not_count() {
        let responses = ResponseMap::new()
            .with_response(1, "yes")
            .with_response(3, Vec::<String>::new());

        let p = progress(&tree(), &responses);
        assert_eq!(p.filled, 1);
        assert_eq!(p.percent(), 33);
    }

    #[test]
    fn clamped_when_optional_answers_overshoot() {
        let questions = vec![
            Question::new(1, "network", Some(ResponseType::Text)).required(),
            Question::new(2, "network", Some(ResponseType::Text)),
        ];
        let responses = ResponseMap::new()
            .with_response(1, "yes")
            .with_response(2, "also");

        assert_eq!(progress(&questions, &responses).ratio(), 1.0);
    }
}
