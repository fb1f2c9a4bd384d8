use questionnaire::{Question, ResponseType};

/// The smallest useful questionnaire: one required and one optional step.
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(1, "network", Some(ResponseType::Text))
            .with_prompt("Do you segment your internal network?")
            .required(),
        Question::new(2, "infra", Some(ResponseType::Text))
            .with_prompt("Anything else about your infrastructure?"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Advance, WizardSession};

    #[test]
    fn optional_last_step_finishes_unanswered() {
        let mut session = WizardSession::new(questions()).unwrap();
        assert!(session.next().is_blocked());

        session.answer(1, "yes").unwrap();
        assert_eq!(session.next(), Advance::Moved { from: 0, to: 1 });
        assert_eq!(session.next(), Advance::Finished { step: 1 });
        assert!(session.can_submit());
    }
}
