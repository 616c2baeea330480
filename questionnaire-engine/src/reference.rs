//! Built-in intake questionnaire
//!
//! Five questions: body pain, pain location, no-issues follow-up, severity
//! rating and other symptoms. The symptom question loops back into the
//! severity rating.

use crate::definition::{OptionDefinition, QuestionDefinition, QuestionnaireDefinition, RatingScale};
use crate::error::Result;
use crate::graph::QuestionGraph;
use crate::question::QuestionId;

pub const ROOT_QUESTION_ID: QuestionId = 1;
pub const PAIN_LOCATION_QUESTION_ID: QuestionId = 2;
pub const NO_ISSUES_QUESTION_ID: QuestionId = 3;
pub const SEVERITY_QUESTION_ID: QuestionId = 4;
pub const OTHER_SYMPTOM_QUESTION_ID: QuestionId = 5;

fn option(label: &str, next: Option<QuestionId>) -> OptionDefinition {
    OptionDefinition {
        label: label.to_string(),
        next,
    }
}

fn question(id: QuestionId, text: &str, options: Vec<OptionDefinition>) -> QuestionDefinition {
    QuestionDefinition {
        id,
        text: text.to_string(),
        options,
        rating: None,
    }
}

pub fn reference_definition() -> QuestionnaireDefinition {
    QuestionnaireDefinition {
        root: ROOT_QUESTION_ID,
        questions: vec![
            question(
                ROOT_QUESTION_ID,
                "体の痛みはありますか？",
                vec![
                    option("はい", Some(PAIN_LOCATION_QUESTION_ID)),
                    option("いいえ", Some(NO_ISSUES_QUESTION_ID)),
                ],
            ),
            question(
                PAIN_LOCATION_QUESTION_ID,
                "痛みがある部位を教えてください。",
                vec![
                    option("頭", Some(SEVERITY_QUESTION_ID)),
                    option("腹部", Some(SEVERITY_QUESTION_ID)),
                ],
            ),
            question(
                NO_ISSUES_QUESTION_ID,
                "特に問題がないようですね。ほかに質問はありますか？",
                vec![
                    option("はい", Some(OTHER_SYMPTOM_QUESTION_ID)),
                    option("いいえ", None),
                ],
            ),
            QuestionDefinition {
                id: SEVERITY_QUESTION_ID,
                text: "痛みの度合いを教えてください（1〜10）。".to_string(),
                options: Vec::new(),
                rating: Some(RatingScale {
                    min: 1,
                    max: 10,
                    next: None,
                }),
            },
            question(
                OTHER_SYMPTOM_QUESTION_ID,
                "別の症状を教えてください。",
                vec![
                    option("頭痛", Some(SEVERITY_QUESTION_ID)),
                    option("発熱", Some(SEVERITY_QUESTION_ID)),
                ],
            ),
        ],
        normalization: None,
    }
}

impl QuestionGraph {
    /// The built-in five question intake
    pub fn reference() -> Result<Self> {
        Self::from_definition(&reference_definition())
    }
}
