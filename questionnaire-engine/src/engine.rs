use std::sync::Arc;

use crate::definition::QuestionnaireDefinition;
use crate::error::{QuestionnaireError, Result};
use crate::graph::QuestionGraph;
use crate::question::{AnswerOption, Question};
use crate::resolver::AnswerResolver;
use crate::session::{HistoryEntry, Position, Session};

/// State machine over a [`QuestionGraph`]
///
/// The engine never mutates a session in place and keeps no per-session
/// state of its own; every operation is a function of its arguments.
#[derive(Debug, Clone)]
pub struct NavigationEngine {
    graph: Arc<QuestionGraph>,
    resolver: AnswerResolver,
}

impl NavigationEngine {
    pub fn new(graph: Arc<QuestionGraph>, resolver: AnswerResolver) -> Self {
        Self { graph, resolver }
    }

    /// Built-in questionnaire with the Japanese digit rules
    pub fn reference() -> Result<Self> {
        Ok(Self::new(
            Arc::new(QuestionGraph::reference()?),
            AnswerResolver::japanese_digits()?,
        ))
    }

    pub fn from_definition(definition: &QuestionnaireDefinition) -> Result<Self> {
        let graph = QuestionGraph::from_definition(definition)?;
        let resolver = match &definition.normalization {
            Some(rules) => AnswerResolver::from_definitions(rules)?,
            None => AnswerResolver::japanese_digits()?,
        };
        Ok(Self::new(Arc::new(graph), resolver))
    }

    pub fn graph(&self) -> &QuestionGraph {
        &self.graph
    }

    pub fn resolver(&self) -> &AnswerResolver {
        &self.resolver
    }

    pub fn start(&self) -> Session {
        let session = Session::new(self.graph.root());
        tracing::info!(session_id = %session.id(), root = self.graph.root(), "Intake session started");
        session
    }

    /// Discard `previous` and begin again at the root
    pub fn restart(&self, previous: &Session) -> Session {
        tracing::info!(
            session_id = %previous.id(),
            answers = previous.history().len(),
            completed = previous.is_terminated(),
            "Intake session discarded"
        );
        self.start()
    }

    pub fn current_question(&self, session: &Session) -> Result<&Question> {
        match session.position() {
            Position::AtQuestion(id) => self.graph.lookup(id).map_err(|_| {
                QuestionnaireError::InvalidState(format!(
                    "session {} points at unknown question {id}",
                    session.id()
                ))
            }),
            Position::Terminated => Err(QuestionnaireError::InvalidState(format!(
                "session {} has already terminated",
                session.id()
            ))),
        }
    }

    /// Resolve raw input against the session's current question
    pub fn resolve(&self, session: &Session, raw: &str) -> Result<&AnswerOption> {
        let question = self.current_question(session)?;
        self.resolver.resolve(question, raw)
    }

    /// Record `option` as the answer to the current question and move on
    pub fn advance(&self, session: &Session, option: &AnswerOption) -> Result<Session> {
        let question = self.current_question(session)?;

        if question.option(option.label()) != Some(option) {
            return Err(QuestionnaireError::OptionNotOffered {
                question_id: question.id(),
                label: option.label().to_string(),
            });
        }

        let position = match option.next() {
            Some(next) => Position::AtQuestion(next),
            None => Position::Terminated,
        };

        tracing::debug!(
            session_id = %session.id(),
            question_id = question.id(),
            next = ?option.next(),
            answers = session.history().len() + 1,
            "Question answered"
        );
        if position == Position::Terminated {
            tracing::info!(session_id = %session.id(), "Intake session completed");
        }

        let entry = HistoryEntry {
            question_text: question.text().to_string(),
            answer_label: option.label().to_string(),
        };
        Ok(session.advanced(entry, position))
    }

    /// Resolve `raw` and advance; an unresolved answer leaves `session` as is
    pub fn answer(&self, session: &Session, raw: &str) -> Result<Session> {
        let option = self.resolve(session, raw)?;
        self.advance(session, option)
    }
}
