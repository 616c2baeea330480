use std::io::Write as _;

use intake_cli::render::{COMPLETED_NOTICE, UNRESOLVED_NOTICE, VOICE_DISABLED_NOTICE};
use intake_cli::{IntakeRunner, RunOutcome};
use questionnaire_engine::{NavigationEngine, QuestionnaireDefinition};
use tokio::io::BufReader;
use voice_recognition_service::providers::{shared_lines, LineProvider, ScriptStep, ScriptedProvider};
use voice_recognition_service::{SpeechInputAdapter, VoiceConfig};

fn engine() -> NavigationEngine {
    NavigationEngine::reference().unwrap()
}

fn answers(outcome: &RunOutcome) -> Vec<String> {
    outcome
        .session()
        .history()
        .iter()
        .map(|entry| entry.answer_label.clone())
        .collect()
}

#[tokio::test]
async fn test_typed_answers_complete_the_intake() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new("はい\n頭\n7\n".as_bytes()));

    let outcome = IntakeRunner::new(engine(), input, &mut out).run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(answers(&outcome), vec!["はい", "頭", "7"]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("体の痛みはありますか？"));
    assert!(text.contains(COMPLETED_NOTICE));
}

#[tokio::test]
async fn test_unrecognized_answer_asks_again() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new("はい\n頭\nなな\nしち\n".as_bytes()));

    let outcome = IntakeRunner::new(engine(), input, &mut out).run().await.unwrap();

    assert_eq!(answers(&outcome), vec!["はい", "頭", "7"]);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches(UNRESOLVED_NOTICE).count(), 1);
    assert_eq!(text.matches("痛みの度合いを教えてください（1〜10）。").count(), 2);
}

#[tokio::test]
async fn test_dictation_shares_terminal_input() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new(
        ":v\nいいえ\n:voice\nはい\n発熱\nじゅう\n".as_bytes(),
    ));
    let adapter = SpeechInputAdapter::new(VoiceConfig::default(), Box::new(LineProvider::new(input.clone())));

    let outcome = IntakeRunner::new(engine(), input, &mut out)
        .with_voice(adapter)
        .run()
        .await
        .unwrap();

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(answers(&outcome), vec!["いいえ", "はい", "発熱", "10"]);
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("音声認識: ").count(), 2);
}

#[tokio::test]
async fn test_voice_without_adapter() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new(":v\n".as_bytes()));

    let outcome = IntakeRunner::new(engine(), input, &mut out).run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Abandoned(_)));
    assert!(outcome.session().history().is_empty());
    assert!(String::from_utf8(out).unwrap().contains(VOICE_DISABLED_NOTICE));
}

#[tokio::test]
async fn test_recognition_failure_leaves_session_unchanged() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new(":v\n:v\n:v\n".as_bytes()));
    let provider = ScriptedProvider::new(vec![
        ScriptStep::failed("microphone permission denied"),
        ScriptStep::recognized("なな"),
        ScriptStep::recognized("はい"),
    ]);
    let adapter = SpeechInputAdapter::new(VoiceConfig::default(), Box::new(provider));

    let outcome = IntakeRunner::new(engine(), input, &mut out)
        .with_voice(adapter)
        .run()
        .await
        .unwrap();

    assert!(matches!(outcome, RunOutcome::Abandoned(_)));
    assert_eq!(answers(&outcome), vec!["はい"]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("音声認識に失敗しました。"));
    assert!(text.contains(UNRESOLVED_NOTICE));
}

#[tokio::test]
async fn test_history_restart_and_quit() {
    let mut out = Vec::new();
    let input = shared_lines(BufReader::new("はい\n:h\n:r\nいいえ\n:q\nいいえ\n".as_bytes()));

    let outcome = IntakeRunner::new(engine(), input, &mut out).run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Abandoned(_)));
    assert_eq!(answers(&outcome), vec!["いいえ"]);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("問診履歴"));
}

#[tokio::test]
async fn test_custom_questionnaire_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "questions:\n  - id: 1\n    text: 咳は出ますか？\n    options:\n      - {{ label: はい, next: 2 }}\n      - {{ label: いいえ }}\n  - id: 2\n    text: 咳の強さは？\n    rating: {{ min: 1, max: 3 }}\n"
    )
    .unwrap();

    let definition = QuestionnaireDefinition::from_path(file.path()).unwrap();
    let engine = NavigationEngine::from_definition(&definition).unwrap();

    let mut out = Vec::new();
    let input = shared_lines(BufReader::new("はい\nさん\n".as_bytes()));
    let outcome = IntakeRunner::new(engine, input, &mut out).run().await.unwrap();

    assert!(matches!(outcome, RunOutcome::Completed(_)));
    assert_eq!(answers(&outcome), vec!["はい", "3"]);
}
