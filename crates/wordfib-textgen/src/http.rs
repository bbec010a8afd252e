//! HTTP client for the hosted text generation model.
//!
//! The service takes `{"text": <prompt>}` and answers with
//! `{"predictions": ...}`, where the prediction is the prompt followed by
//! the model's continuation. The definition is the first line of that
//! continuation.

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};

use crate::{TextGenConfig, TextGenError, TextSource};

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Option<Predictions>,
}

/// The service returns either one prediction or a list of them.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Predictions {
    One(String),
    Many(Vec<String>),
}

impl Predictions {
    fn first(&self) -> Option<&str> {
        match self {
            Self::One(text) => Some(text.as_str()),
            Self::Many(texts) => texts.first().map(String::as_str),
        }
    }
}

/// A [`TextSource`] that asks the hosted model over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
    config: TextGenConfig,
}

impl HttpTextSource {
    /// Creates a client with the configured timeout.
    pub fn new(config: TextGenConfig) -> Result<Self, TextGenError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a source that sends requests through an existing client.
    pub fn with_client(config: TextGenConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TextGenConfig {
        &self.config
    }
}

impl TextSource for HttpTextSource {
    async fn generate_definition(&self, word: &str) -> Result<String, TextGenError> {
        let prompt = self.config.prompt_for(word);
        tracing::debug!(%word, endpoint = %self.config.endpoint, "requesting definition");

        let response = self
            .client
            .post(&self.config.endpoint)
            .header(ACCEPT, "application/json")
            .json(&PredictRequest { text: &prompt })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%word, status = status.as_u16(), "text generation request rejected");
            return Err(TextGenError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: PredictResponse = response.json().await?;
        let prediction = body
            .predictions
            .as_ref()
            .and_then(Predictions::first)
            .ok_or(TextGenError::MissingPredictions)?;

        extract_definition(&prompt, prediction)
            .ok_or_else(|| TextGenError::EmptyPrediction(word.to_string()))
    }
}

/// Pulls the definition out of a prediction.
///
/// Drops the echoed prompt (if the service echoes it), then keeps the
/// first line of the continuation, trimmed. Returns `None` if that line is
/// blank: whatever the model wrote after it belongs to another word.
pub fn extract_definition(prompt: &str, prediction: &str) -> Option<String> {
    let continuation = prediction
        .strip_prefix(prompt)
        .or_else(|| prediction.strip_prefix(prompt.trim_end()))
        .unwrap_or(prediction);

    continuation
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_strips_echoed_prompt() {
        let prompt = "Axe - a tool.\nSaw - ";
        let prediction = "Axe - a tool.\nSaw - a toothed blade.\nHammer - a thing.";
        assert_eq!(
            extract_definition(prompt, prediction).as_deref(),
            Some("a toothed blade.")
        );
    }

    #[test]
    fn test_extract_without_echo() {
        assert_eq!(
            extract_definition("Saw - ", "  a toothed blade\nmore").as_deref(),
            Some("a toothed blade")
        );
    }

    #[test]
    fn test_extract_echo_with_trimmed_separator() {
        assert_eq!(
            extract_definition("Saw - ", "Saw -a toothed blade").as_deref(),
            Some("a toothed blade")
        );
    }

    #[test]
    fn test_extract_empty_continuation() {
        assert_eq!(extract_definition("Saw - ", "Saw - \n\n  "), None);
    }

    #[test]
    fn test_extract_blank_first_line_ignores_later_lines() {
        assert_eq!(extract_definition("cat - ", "cat - \nsecond line"), None);
        assert_eq!(extract_definition("Saw - ", "Saw -\na toothed blade"), None);
    }

    #[test]
    fn test_predictions_accepts_string_or_list() {
        let one: PredictResponse =
            serde_json::from_str(r#"{ "predictions": "Saw - a blade" }"#).unwrap();
        assert_eq!(one.predictions.as_ref().and_then(Predictions::first), Some("Saw - a blade"));

        let many: PredictResponse =
            serde_json::from_str(r#"{ "predictions": ["first", "second"] }"#).unwrap();
        assert_eq!(many.predictions.as_ref().and_then(Predictions::first), Some("first"));

        let none: PredictResponse = serde_json::from_str(r#"{ "other": 1 }"#).unwrap();
        assert!(none.predictions.is_none());
    }
}
