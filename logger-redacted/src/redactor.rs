use regex::Regex;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sha2::{Sha256, Digest};
use base64::{Engine as _, engine::general_purpose};
use uuid::Uuid;

// Unicode `\b` treats kana and kanji as word characters; phone boundaries
// are checked in `replace_isolated` instead.
lazy_static! {
    static ref EMAIL_REGEX: Regex = Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap();
    static ref PHONE_REGEX: Regex = Regex::new(r"0[0-9]{1,4}-?[0-9]{1,4}-?[0-9]{4}").unwrap();
    static ref PROCESS_SALT: [u8; 16] = *Uuid::new_v4().as_bytes();
}

/// PHI redaction configuration
///
/// Correlation hashes are salted once per process. Equal values hash alike
/// within one run's logs, but the small set of answer labels cannot be
/// recovered from a hash by precomputing digests, and hashes from different
/// runs do not line up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Replace answer labels and transcripts with a hash or mask
    pub redact_answers: bool,
    pub redact_emails: bool,
    pub redact_phones: bool,
    /// Hash redacted values so repeated answers can be correlated
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_answers: true,
            redact_emails: true,
            redact_phones: true,
            hash_for_correlation: true,
        }
    }
}

/// Redactor for patient answers and speech transcripts
#[derive(Debug, Clone, Default)]
pub struct TranscriptRedactor {
    config: RedactionConfig,
}

impl TranscriptRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    /// Redactor that passes everything through, for local debugging
    pub fn disabled() -> Self {
        Self::new(RedactionConfig {
            redact_answers: false,
            redact_emails: false,
            redact_phones: false,
            hash_for_correlation: false,
        })
    }

    /// Redact a whole answer label or transcript
    pub fn redact_answer(&self, answer: &str) -> String {
        if !self.config.redact_answers {
            return self.scrub(answer);
        }
        if self.config.hash_for_correlation {
            format!("ANSWER[{}]", self.hash_value(answer))
        } else {
            "ANSWER[***]".to_string()
        }
    }

    /// Remove contact details from free text while keeping the rest readable
    pub fn scrub(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.config.redact_emails {
            result = EMAIL_REGEX.replace_all(&result, |caps: &regex::Captures| {
                if self.config.hash_for_correlation {
                    format!("EMAIL[{}]", self.hash_value(&caps[0]))
                } else {
                    "***@***".to_string()
                }
            }).to_string();
        }

        if self.config.redact_phones {
            result = replace_isolated(&PHONE_REGEX, &result, |phone| {
                if self.config.hash_for_correlation {
                    format!("PHONE[{}]", self.hash_value(phone))
                } else {
                    "***-****-****".to_string()
                }
            });
        }

        result
    }

    fn hash_value(&self, value: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(PROCESS_SALT.as_slice());
        hasher.update(value.as_bytes());
        let digest = hasher.finalize();
        // first 8 bytes are enough to correlate within one log stream
        general_purpose::STANDARD.encode(&digest[..8])
    }
}

/// Replace matches that are not glued to further ASCII digits or letters
fn replace_isolated<F>(pattern: &Regex, text: &str, mut replace: F) -> String
where
    F: FnMut(&str) -> String,
{
    let mut result = String::with_capacity(text.len());
    let mut last = 0;

    for found in pattern.find_iter(text) {
        let before = text[..found.start()].chars().next_back();
        let after = text[found.end()..].chars().next();
        let glued = |c: Option<char>| matches!(c, Some(c) if c.is_ascii_alphanumeric());
        if glued(before) || glued(after) {
            continue;
        }
        result.push_str(&text[last..found.start()]);
        result.push_str(&replace(found.as_str()));
        last = found.end();
    }

    result.push_str(&text[last..]);
    result
}
