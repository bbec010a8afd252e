//! Configuration of the HTTP text generation client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Public inference endpoint of the hosted text generation model.
pub const DEFAULT_ENDPOINT: &str =
    "https://api.aicloud.sbercloud.ru/public/v1/public_inference/gpt3/predict";

/// Settings for [`HttpTextSource`](crate::HttpTextSource).
///
/// The prompt sent for a word is `preamble + word + separator`. The
/// preamble holds a few example definitions so the model continues in the
/// same "word - definition" shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextGenConfig {
    /// URL the prompt is POSTed to.
    pub endpoint: String,

    /// Example lines placed before the word.
    pub preamble: String,

    /// Text between the word and the definition the model completes.
    pub separator: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

impl TextGenConfig {
    /// Builds the prompt for `word`.
    pub fn prompt_for(&self, word: &str) -> String {
        format!("{}{}{}", self.preamble, word, self.separator)
    }
}

impl Default for TextGenConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            preamble: "Quokka - a small wallaby living on islands off Western Australia.\n\
                       Snollygoster - a shrewd person guided by personal advantage.\n"
                .to_string(),
            separator: " - ".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_for_appends_word_and_separator() {
        let config = TextGenConfig {
            preamble: "Axe - a tool.\n".into(),
            ..TextGenConfig::default()
        };
        assert_eq!(config.prompt_for("Saw"), "Axe - a tool.\nSaw - ");
    }

    #[test]
    fn test_default_preamble_ends_with_newline() {
        let config = TextGenConfig::default();
        assert!(config.preamble.ends_with('\n'));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TextGenConfig =
            serde_json::from_str(r#"{ "endpoint": "http://localhost:9000/predict" }"#).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/predict");
        assert_eq!(config.separator, " - ");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
