//! Submit tests using the test finalizer

use questionnaire::{
    Question, QuestionId, ResponseType, SubmitError, TestFinalizer, WizardConfig, WizardSession,
};

fn ready_to_submit() -> WizardSession {
    let mut session = WizardSession::with_config(
        vec![
            Question::new(1, "network", Some(ResponseType::Text)).required(),
            Question::new(2, "infra", Some(ResponseType::Checkbox)),
        ],
        WizardConfig::new().with_completion_target("assessment-complete"),
    )
    .unwrap();
    session.answer(1, "yes").unwrap();
    session.next();
    session
}

#[tokio::test]
async fn test_successful_submit() {
    let mut session = ready_to_submit();
    session.answer(2, ["Cloud Infrastructure"]).unwrap();
    let finalizer = TestFinalizer::succeeding();

    let target = session.submit(&finalizer).await.unwrap();

    assert_eq!(target.as_str(), "assessment-complete");
    assert_eq!(finalizer.calls(), 1);
    let submitted = finalizer.last_submitted().unwrap();
    assert_eq!(submitted.count_filled(), 2);
    assert!(!session.is_submitting());
    assert_eq!(session.form_error(), None);
}

#[tokio::test]
async fn test_failed_submit_can_be_retried() {
    let mut session = ready_to_submit();

    let err = session
        .submit(&TestFinalizer::failing("assessment service unavailable"))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Finalize(_)));
    assert_eq!(session.form_error(), Some("assessment service unavailable"));
    assert!(session.view().form_error.is_some());
    assert!(session.responses().is_filled(&QuestionId::from(1)));

    let finalizer = TestFinalizer::succeeding();
    session.submit(&finalizer).await.unwrap();
    assert_eq!(session.form_error(), None);
    assert_eq!(finalizer.calls(), 1);
}

#[tokio::test]
async fn test_submit_refused_before_last_step() {
    let mut session = WizardSession::new(vec![
        Question::new(1, "network", Some(ResponseType::Text)).required(),
        Question::new(2, "infra", Some(ResponseType::Text)),
    ])
    .unwrap();
    let finalizer = TestFinalizer::succeeding();

    let err = session.submit(&finalizer).await.unwrap_err();
    assert!(matches!(err, SubmitError::NotOnLastStep { active_step: 0 }));
    assert!(err.is_rejected());
    assert_eq!(finalizer.calls(), 0);
}

#[tokio::test]
async fn test_submit_validates_whole_questionnaire() {
    let mut session = WizardSession::new(vec![
        Question::new(1, "network", Some(ResponseType::Text)).required(),
        Question::new(2, "infra", Some(ResponseType::Text)).required(),
    ])
    .unwrap();
    session.answer(1, "yes").unwrap();
    session.next();
    session.clear_answer(&QuestionId::from(1));
    session.answer(2, "on-prem").unwrap();

    let finalizer = TestFinalizer::succeeding();
    let err = session.submit(&finalizer).await.unwrap_err();

    match err {
        SubmitError::Incomplete { missing } => assert_eq!(missing, vec![QuestionId::from(1)]),
        other => panic!("Expected Incomplete, got {other:?}"),
    }
    assert_eq!(finalizer.calls(), 0);
    assert!(session.errors().contains_key(&QuestionId::from(1)));
    assert!(!session.is_submitting());
}

#[tokio::test]
async fn test_boxed_finalizer() {
    let mut session = ready_to_submit();
    let finalizer: Box<dyn questionnaire::Finalizer> = Box::new(TestFinalizer::succeeding());

    assert!(session.submit(finalizer.as_ref()).await.is_ok());
}
