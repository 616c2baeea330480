use std::io::Write;

use error_common::{ErrorContext, ErrorReporter, IntakeError, Result};
use logger_redacted::TranscriptRedactor;
use questionnaire_engine::{NavigationEngine, QuestionnaireError, Session};
use tokio::io::AsyncBufRead;
use voice_recognition_service::providers::SharedLines;
use voice_recognition_service::{RecognitionOutcome, SpeechInputAdapter, VoiceError};

use crate::render;

/// One line of terminal input, classified
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInput<'a> {
    Answer(&'a str),
    Voice,
    History,
    Restart,
    Quit,
}

impl<'a> UserInput<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":v" | ":voice" => Self::Voice,
            ":h" | ":history" => Self::History,
            ":r" | ":restart" => Self::Restart,
            ":q" | ":quit" => Self::Quit,
            _ => Self::Answer(line),
        }
    }
}

/// How a run ended
#[derive(Debug)]
pub enum RunOutcome {
    Completed(Session),
    /// The user quit or input ended before the last question
    Abandoned(Session),
}

impl RunOutcome {
    pub fn session(&self) -> &Session {
        match self {
            Self::Completed(session) | Self::Abandoned(session) => session,
        }
    }
}

/// Interactive loop between the terminal and the navigation engine
pub struct IntakeRunner<R, W> {
    engine: NavigationEngine,
    input: SharedLines<R>,
    output: W,
    voice: Option<SpeechInputAdapter>,
    redactor: TranscriptRedactor,
    reporter: ErrorReporter,
}

impl<R, W> IntakeRunner<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(engine: NavigationEngine, input: SharedLines<R>, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            voice: None,
            redactor: TranscriptRedactor::default(),
            reporter: ErrorReporter::new(),
        }
    }

    pub fn with_voice(mut self, adapter: SpeechInputAdapter) -> Self {
        self.voice = Some(adapter);
        self
    }

    pub fn with_redactor(mut self, redactor: TranscriptRedactor) -> Self {
        self.redactor = redactor;
        self
    }

    pub async fn run(mut self) -> Result<RunOutcome> {
        let mut session = self.engine.start();

        loop {
            let question = self.engine.current_question(&session)?;
            render::question(&mut self.output, question)?;
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.input.lock().await.next_line().await? else {
                return Ok(RunOutcome::Abandoned(session));
            };

            let answered = match UserInput::parse(&line) {
                UserInput::Quit => return Ok(RunOutcome::Abandoned(session)),
                UserInput::History => {
                    render::history(&mut self.output, session.history())?;
                    continue;
                }
                UserInput::Restart => {
                    session = self.engine.restart(&session);
                    continue;
                }
                UserInput::Answer(raw) => self.apply(&session, raw)?,
                UserInput::Voice => match self.listen().await? {
                    Some(transcript) => self.apply(&session, &transcript)?,
                    None => None,
                },
            };

            if let Some(next) = answered {
                session = next;
                if session.is_terminated() {
                    render::completed(&mut self.output, session.history())?;
                    return Ok(RunOutcome::Completed(session));
                }
            }
        }
    }

    /// Resolve and apply one answer; `None` when it was not recognized
    fn apply(&mut self, session: &Session, raw: &str) -> Result<Option<Session>> {
        match self.engine.answer(session, raw) {
            Ok(next) => Ok(Some(next)),
            Err(QuestionnaireError::Unresolved { question_id, input }) => {
                let context = ErrorContext::new()
                    .with_session_id(session.id().to_string())
                    .with_question_id(question_id)
                    .add_context("input", self.redactor.redact_answer(&input));
                self.reporter.report(
                    &IntakeError::Unresolved {
                        input: self.redactor.redact_answer(&input),
                        question_id,
                    },
                    &context,
                );
                render::notice(&mut self.output, render::UNRESOLVED_NOTICE)?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Run one speech activation; `None` when nothing usable was heard
    async fn listen(&mut self) -> Result<Option<String>> {
        let Some(adapter) = &self.voice else {
            render::notice(&mut self.output, render::VOICE_DISABLED_NOTICE)?;
            return Ok(None);
        };

        match adapter.activate().await {
            Ok(RecognitionOutcome::Recognized(transcript)) => {
                render::heard(&mut self.output, &transcript.text)?;
                Ok(Some(transcript.text))
            }
            Ok(RecognitionOutcome::Failed { reason }) => {
                render::recognition_failed(&mut self.output, &reason)?;
                Ok(None)
            }
            Err(VoiceError::AlreadyActive) => Ok(None),
            Err(VoiceError::Disabled) => {
                render::notice(&mut self.output, render::VOICE_DISABLED_NOTICE)?;
                Ok(None)
            }
            Err(err) => {
                let err = IntakeError::from(err);
                self.reporter.report(&err, &ErrorContext::new());
                render::recognition_failed(&mut self.output, &err.to_string())?;
                Ok(None)
            }
        }
    }
}
