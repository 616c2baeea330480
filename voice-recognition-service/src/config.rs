use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use crate::error::{VoiceError, VoiceResult};

/// Where recognized text comes from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceProvider {
    /// Dictation typed at the terminal, one line per activation
    Console,
    /// Pre-recorded outcomes replayed in order
    Scripted { script_path: PathBuf },
}

/// Speech input configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VoiceConfig {
    pub provider: VoiceProvider,
    pub voice_enabled: bool,
    /// BCP 47 recognition locale
    pub language: String,
    pub interim_results: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::Console,
            voice_enabled: true,
            language: "ja-JP".to_string(),
            interim_results: false,
        }
    }
}

impl VoiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> VoiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key lookup, `VOICE_*` names as keys
    pub fn from_lookup<F>(lookup: F) -> VoiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let voice_enabled = lookup("VOICE_ENABLED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.voice_enabled);

        let language = lookup("VOICE_LANGUAGE")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.language);

        let interim_results = lookup("VOICE_INTERIM_RESULTS")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.interim_results);

        if interim_results {
            // the questionnaire acts on final results only
            return Err(VoiceError::Config(
                "interim results are not supported; set VOICE_INTERIM_RESULTS=false".to_string(),
            ));
        }

        let provider = match lookup("VOICE_PROVIDER") {
            None => VoiceProvider::Console,
            Some(provider_type) => match provider_type.to_lowercase().as_str() {
                "console" => VoiceProvider::Console,
                "scripted" => VoiceProvider::Scripted {
                    script_path: lookup("VOICE_SCRIPT_PATH").map(PathBuf::from).ok_or_else(|| {
                        VoiceError::Config(
                            "VOICE_SCRIPT_PATH is required for the scripted provider".to_string(),
                        )
                    })?,
                },
                _ => {
                    return Err(VoiceError::Config(format!(
                        "Unknown voice provider: {}",
                        provider_type
                    )))
                }
            },
        };

        Ok(Self {
            provider,
            voice_enabled,
            language,
            interim_results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = VoiceConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, VoiceConfig::default());
        assert_eq!(config.language, "ja-JP");
        assert!(!config.interim_results);
    }

    #[test]
    fn test_scripted_provider_requires_path() {
        let err = VoiceConfig::from_lookup(lookup(&[("VOICE_PROVIDER", "scripted")])).unwrap_err();
        assert!(matches!(err, VoiceError::Config(_)));

        let config = VoiceConfig::from_lookup(lookup(&[
            ("VOICE_PROVIDER", "Scripted"),
            ("VOICE_SCRIPT_PATH", "demo.yaml"),
            ("VOICE_ENABLED", "false"),
            ("VOICE_LANGUAGE", "en-US"),
        ]))
        .unwrap();
        assert_eq!(
            config.provider,
            VoiceProvider::Scripted { script_path: PathBuf::from("demo.yaml") }
        );
        assert!(!config.voice_enabled);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_rejects_unknown_provider_and_interim_results() {
        assert!(VoiceConfig::from_lookup(lookup(&[("VOICE_PROVIDER", "whisper")])).is_err());
        assert!(VoiceConfig::from_lookup(lookup(&[("VOICE_INTERIM_RESULTS", "true")])).is_err());
    }

    #[test]
    fn test_only_recognised_settings_are_exposed() {
        let config = VoiceConfig::from_lookup(lookup(&[("VOICE_MAX_ALTERNATIVES", "5")])).unwrap();
        assert_eq!(config, VoiceConfig::default());

        let value = serde_yaml::to_value(&config).unwrap();
        let mut keys: Vec<&str> = value
            .as_mapping()
            .unwrap()
            .keys()
            .filter_map(|k| k.as_str())
            .collect();
        keys.sort_unstable();
        assert_eq!(keys, ["interim_results", "language", "provider", "voice_enabled"]);
    }
}
