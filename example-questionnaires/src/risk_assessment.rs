//! Risk exposure assessment: four steps, nested follow-ups and informational headers.

use questionnaire::{Question, ResponseMap, ResponseType};

const YES_NO: [&str; 2] = ["Yes", "No"];

const SECURITY_TOOLS: [&str; 7] = [
    "SIEM",
    "Ticket Management",
    "Vulnerability Management",
    "Endpoint Monitoring",
    "Cloud Monitoring",
    "Application Monitoring",
    "Network Monitoring",
];

fn select(id: u32, category: &str, prompt: &str) -> Question {
    Question::new(id, category, Some(ResponseType::Select)).with_prompt(prompt)
}

fn text(id: u32, category: &str, prompt: &str) -> Question {
    Question::new(id, category, Some(ResponseType::Text)).with_prompt(prompt)
}

fn company_profile() -> Vec<Question> {
    const CATEGORY: &str = "company_profile";
    vec![
        select(1, CATEGORY, "How many employees does the company have?")
            .with_options(["1-100", "101-500", "501-1000", "1000+"])
            .required(),
        select(2, CATEGORY, "How many people work in security?")
            .with_options(["0", "1-5", "6-20", "20+"])
            .required(),
        text(4, CATEGORY, "What is the annual security budget (USD)?").required(),
    ]
}

fn security_operations() -> Vec<Question> {
    const CATEGORY: &str = "security_operations";
    vec![
        Question::info(9, CATEGORY)
            .with_prompt("Security tooling")
            .with_sub_questions(vec![
                Question::new(100, CATEGORY, Some(ResponseType::Multiselect))
                    .with_prompt("Which security tools are in use?")
                    .with_options(SECURITY_TOOLS)
                    .required(),
                Question::new(3, CATEGORY, Some(ResponseType::Multiselect))
                    .with_prompt("Which of them are monitored around the clock?")
                    .with_options(SECURITY_TOOLS)
                    .required(),
            ]),
        select(5, CATEGORY, "Is security monitoring outsourced?")
            .with_options(YES_NO)
            .required(),
        select(7, CATEGORY, "Do you run vulnerability scans?")
            .with_options(YES_NO)
            .required()
            .with_sub_questions(vec![
                select(11, CATEGORY, "How often?")
                    .with_options(["Weekly", "Monthly", "Quarterly"])
                    .required(),
            ]),
    ]
}

fn infrastructure() -> Vec<Question> {
    const CATEGORY: &str = "infrastructure";
    vec![
        Question::new(6, CATEGORY, Some(ResponseType::Checkbox))
            .with_prompt("Which infrastructure do you operate?")
            .with_options([
                "Network Infrastructure",
                "Cloud Infrastructure",
                "On-premise Servers",
                "Industrial Control Systems",
            ])
            .required(),
        Question::info(12, CATEGORY)
            .with_prompt("Asset inventory")
            .with_sub_questions(vec![
                text(13, CATEGORY, "Number of endpoints").required(),
                text(14, CATEGORY, "Number of servers").required(),
                text(19, CATEGORY, "Number of cloud workloads"),
                text(20, CATEGORY, "Number of network devices"),
                text(22, CATEGORY, "Number of customer records stored"),
            ]),
    ]
}

fn incident_response() -> Vec<Question> {
    const CATEGORY: &str = "incident_response";
    vec![
        select(8, CATEGORY, "Was there a security incident in the last 12 months?")
            .with_options(YES_NO)
            .required()
            .with_sub_questions(vec![text(10, CATEGORY, "Describe the incident")]),
        select(15, CATEGORY, "Is there a written incident response plan?")
            .with_options(YES_NO)
            .required(),
        Question::new(16, CATEGORY, Some(ResponseType::Checkbox))
            .with_prompt("Which frameworks do you follow?")
            .with_options(["ISO 27001", "NIST CSF", "SOC 2", "CIS Controls"]),
    ]
}

/// The full questionnaire.
pub fn questions() -> Vec<Question> {
    [
        company_profile(),
        security_operations(),
        infrastructure(),
        incident_response(),
    ]
    .concat()
}

/// Answers from an earlier, unfinished session. Pass them to
/// `WizardSession::with_responses` to resume; question 15 is still open.
pub fn demo_responses() -> ResponseMap {
    ResponseMap::new()
        .with_response(
            100,
            [
                "SIEM",
                "Ticket Management",
                "Vulnerability Management",
                "Cloud Monitoring",
            ],
        )
        .with_response(1, "101-500")
        .with_response(2, "1-5")
        .with_response(
            3,
            [
                "SIEM",
                "Ticket Management",
                "Vulnerability Management",
                "Endpoint Monitoring",
                "Cloud Monitoring",
                "Application Monitoring",
                "Network Monitoring",
            ],
        )
        .with_response(4, "23800")
        .with_response(22, "34000")
        .with_response(20, "1200")
        .with_response(13, "250")
        .with_response(14, "300")
        .with_response(19, "800")
        .with_response(5, "No")
        .with_response(6, ["Network Infrastructure", "Cloud Infrastructure"])
        .with_response(7, "Yes")
        .with_response(11, "Monthly")
        .with_response(8, "No")
}

#[cfg(test)]
mod tests {
    use super::*;
    use questionnaire::{Advance, QuestionId, WizardSession, derive_schema, total_required};

    #[test]
    fn catalog_is_valid() {
        let schema = derive_schema(&questions()).unwrap();
        // Two informational headers carry no rule.
        assert_eq!(schema.len(), 18);
        assert_eq!(total_required(&questions()), 13);
    }

    #[test]
    fn four_steps() {
        let session = WizardSession::new(questions()).unwrap();
        assert_eq!(
            session.step_labels(),
            vec![
                "Company profile",
                "Security operations",
                "Infrastructure",
                "Incident response"
            ]
        );
    }

    #[test]
    fn resumed_session_stops_at_open_question() {
        let mut session = WizardSession::new(questions())
            .unwrap()
            .with_responses(demo_responses())
            .unwrap();

        // 15 answers filled, 13 required: optional answers push the ratio to the top.
        assert_eq!(session.progress().filled, 15);
        assert_eq!(session.progress().ratio(), 1.0);

        assert_eq!(session.next(), Advance::Moved { from: 0, to: 1 });
        assert_eq!(session.next(), Advance::Moved { from: 1, to: 2 });
        assert_eq!(session.next(), Advance::Moved { from: 2, to: 3 });
        assert_eq!(
            session.next(),
            Advance::Blocked {
                missing: vec![QuestionId::from(15)],
                unanswered: vec![
                    QuestionId::from(10),
                    QuestionId::from(15),
                    QuestionId::from(16)
                ],
            }
        );

        session.answer(15, "Yes").unwrap();
        assert_eq!(session.next(), Advance::Finished { step: 3 });
    }
}
