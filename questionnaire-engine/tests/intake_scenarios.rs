//! End-to-end walks through the built-in intake questionnaire

use questionnaire_engine::reference::{
    NO_ISSUES_QUESTION_ID, OTHER_SYMPTOM_QUESTION_ID, PAIN_LOCATION_QUESTION_ID, ROOT_QUESTION_ID,
    SEVERITY_QUESTION_ID,
};
use questionnaire_engine::{HistoryEntry, NavigationEngine, Position, QuestionnaireError};

fn engine() -> NavigationEngine {
    NavigationEngine::reference().expect("reference questionnaire is valid")
}

#[test]
fn test_body_pain_yes_asks_for_location() {
    let engine = engine();
    let session = engine.start();
    assert_eq!(
        engine.current_question(&session).unwrap().text(),
        "体の痛みはありますか？"
    );

    let session = engine.answer(&session, "はい").unwrap();

    assert_eq!(session.current_question_id(), Some(PAIN_LOCATION_QUESTION_ID));
    assert_eq!(
        engine.current_question(&session).unwrap().text(),
        "痛みがある部位を教えてください。"
    );
    assert_eq!(
        session.history(),
        &[HistoryEntry {
            question_text: "体の痛みはありますか？".to_string(),
            answer_label: "はい".to_string(),
        }]
    );
}

#[test]
fn test_head_pain_then_severity_terminates() {
    let engine = engine();
    let session = engine.answer(&engine.start(), "はい").unwrap();

    let session = engine.answer(&session, "頭").unwrap();
    assert_eq!(session.current_question_id(), Some(SEVERITY_QUESTION_ID));

    let before = session.history().len();
    let session = engine.answer(&session, "7").unwrap();

    assert_eq!(session.position(), Position::Terminated);
    assert_eq!(session.history().len(), before + 1);
    let last = session.history().last().unwrap();
    assert_eq!(last.question_text, "痛みの度合いを教えてください（1〜10）。");
    assert_eq!(last.answer_label, "7");
}

#[test]
fn test_from_location_two_answers_end_with_seven() {
    let engine = engine();
    let location = engine.answer(&engine.start(), "はい").unwrap();
    let severity = engine
        .advance(&location, engine.resolve(&location, "頭").unwrap())
        .unwrap();
    let done = engine.answer(&severity, "しち").unwrap();

    let answers: Vec<&str> = done.history().iter().map(|e| e.answer_label.as_str()).collect();
    assert_eq!(answers, vec!["はい", "頭", "7"]);
}

#[test]
fn test_unmapped_spoken_digit_leaves_session_unchanged() {
    let engine = engine();
    let session = engine.answer(&engine.start(), "はい").unwrap();
    let session = engine.answer(&session, "頭").unwrap();
    let snapshot = session.clone();

    let err = engine.answer(&session, "なな").unwrap_err();

    assert!(matches!(
        err,
        QuestionnaireError::Unresolved { question_id, .. } if question_id == SEVERITY_QUESTION_ID
    ));
    assert_eq!(session, snapshot);
    assert_eq!(session.current_question_id(), Some(SEVERITY_QUESTION_ID));
    assert_eq!(session.history().len(), 2);
}

#[test]
fn test_other_symptom_loops_back_into_severity() {
    let engine = engine();
    let session = engine.answer(&engine.start(), "いいえ").unwrap();
    assert_eq!(session.current_question_id(), Some(NO_ISSUES_QUESTION_ID));
    assert_eq!(
        engine.current_question(&session).unwrap().text(),
        "特に問題がないようですね。ほかに質問はありますか？"
    );

    let session = engine.answer(&session, "はい").unwrap();
    assert_eq!(session.current_question_id(), Some(OTHER_SYMPTOM_QUESTION_ID));

    let session = engine.answer(&session, "発熱").unwrap();
    assert_eq!(session.current_question_id(), Some(SEVERITY_QUESTION_ID));
    assert_eq!(session.history().len(), 3);

    let session = engine.answer(&session, "じゅう").unwrap();
    assert!(session.is_terminated());
    assert_eq!(session.history().last().unwrap().answer_label, "10");
}

#[test]
fn test_terminated_session_requires_restart() {
    let engine = engine();
    let session = engine.answer(&engine.start(), "いいえ").unwrap();
    let session = engine.answer(&session, "いいえ").unwrap();
    assert!(session.is_terminated());

    assert!(matches!(
        engine.answer(&session, "はい"),
        Err(QuestionnaireError::InvalidState(_))
    ));

    let fresh = engine.restart(&session);
    assert_eq!(fresh.current_question_id(), Some(ROOT_QUESTION_ID));
    assert!(engine.answer(&fresh, "はい").is_ok());
}

#[test]
fn test_shipped_yaml_matches_built_in_questionnaire() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../questionnaires/reference.yaml");
    let from_file = questionnaire_engine::QuestionGraph::from_path(path).unwrap();
    assert_eq!(from_file, questionnaire_engine::QuestionGraph::reference().unwrap());
}
