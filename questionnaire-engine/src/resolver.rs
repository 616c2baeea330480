use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{QuestionnaireError, Result};
use crate::question::{AnswerOption, Question};

/// Spoken and written forms of 1 through 10, highest priority first.
///
/// The order is significant: `1` is a substring of `10` and `に` occurs in
/// longer words, so the first matching rule decides.
pub const JAPANESE_DIGIT_RULES: [(&str, &str); 10] = [
    ("いち|1", "1"),
    ("に|2", "2"),
    ("さん|3", "3"),
    ("よん|4", "4"),
    ("ご|5", "5"),
    ("ろく|6", "6"),
    ("しち|7", "7"),
    ("はち|8", "8"),
    ("きゅう|9", "9"),
    ("じゅう|10", "10"),
];

/// Serializable form of a normalization rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    pub pattern: String,
    pub value: String,
}

/// Maps any input the pattern matches to a canonical value
#[derive(Debug, Clone)]
pub struct NormalizationRule {
    pattern: Regex,
    canonical: String,
}

impl NormalizationRule {
    pub fn new(pattern: &str, canonical: impl Into<String>) -> Result<Self> {
        let compiled = Regex::new(pattern).map_err(|source| QuestionnaireError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self {
            pattern: compiled,
            canonical: canonical.into(),
        })
    }

    /// True when the pattern occurs anywhere in `input`
    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Resolves raw typed or spoken input to one option of a question
///
/// Resolution order:
/// 1. trim surrounding whitespace
/// 2. an option whose label equals the trimmed input wins outright
/// 3. otherwise the first matching normalization rule supplies the canonical
///    value, falling back to the trimmed input itself
/// 4. the canonical value must equal an option label exactly
#[derive(Debug, Clone, Default)]
pub struct AnswerResolver {
    rules: Vec<NormalizationRule>,
}

impl AnswerResolver {
    pub fn new(rules: Vec<NormalizationRule>) -> Self {
        Self { rules }
    }

    /// Resolver with no normalization; only exact labels resolve
    pub fn exact() -> Self {
        Self::default()
    }

    pub fn japanese_digits() -> Result<Self> {
        let rules = JAPANESE_DIGIT_RULES
            .iter()
            .map(|(pattern, value)| NormalizationRule::new(pattern, *value))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self> {
        let rules = definitions
            .iter()
            .map(|definition| NormalizationRule::new(&definition.pattern, definition.value.clone()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(rules))
    }

    pub fn rules(&self) -> &[NormalizationRule] {
        &self.rules
    }

    /// Canonical value for `raw` before label lookup
    pub fn normalize<'a>(&'a self, raw: &'a str) -> &'a str {
        let trimmed = raw.trim();
        self.rules
            .iter()
            .find(|rule| rule.matches(trimmed))
            .map_or(trimmed, NormalizationRule::canonical)
    }

    pub fn resolve<'q>(&self, question: &'q Question, raw: &str) -> Result<&'q AnswerOption> {
        let trimmed = raw.trim();
        if let Some(option) = question.option(trimmed) {
            return Ok(option);
        }

        let canonical = self.normalize(trimmed);
        match question.option(canonical) {
            Some(option) => {
                tracing::trace!(question_id = question.id(), "Answer resolved through normalization");
                Ok(option)
            }
            None => Err(QuestionnaireError::Unresolved {
                question_id: question.id(),
                input: raw.to_string(),
            }),
        }
    }
}
