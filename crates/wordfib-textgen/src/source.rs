//! The text source abstraction and a fixed-table implementation.

use std::collections::HashMap;

use crate::TextGenError;

/// Produces the genuine description of a word.
///
/// The game only needs a word → description mapping to build its
/// questions; where the description comes from (a hosted language model,
/// a dictionary, a fixed table in tests) is up to the implementation.
///
/// # Example
///
/// ```rust
/// use wordfib_textgen::{TextGenError, TextSource};
///
/// /// Describes every word the same way.
/// struct Shrug;
///
/// impl TextSource for Shrug {
///     async fn generate_definition(&self, word: &str) -> Result<String, TextGenError> {
///         Ok(format!("nobody knows what {word} means"))
///     }
/// }
/// ```
pub trait TextSource: Send + Sync + 'static {
    /// Returns a one-line description of `word`.
    fn generate_definition(
        &self,
        word: &str,
    ) -> impl std::future::Future<Output = Result<String, TextGenError>> + Send;
}

/// A [`TextSource`] backed by a fixed word → description table.
#[derive(Debug, Clone, Default)]
pub struct StaticTextSource {
    definitions: HashMap<String, String>,
}

impl StaticTextSource {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition, replacing any earlier one for the same word.
    pub fn with(mut self, word: impl Into<String>, description: impl Into<String>) -> Self {
        self.definitions.insert(word.into(), description.into());
        self
    }
}

impl<W: Into<String>, D: Into<String>> FromIterator<(W, D)> for StaticTextSource {
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self {
            definitions: iter
                .into_iter()
                .map(|(word, description)| (word.into(), description.into()))
                .collect(),
        }
    }
}

impl TextSource for StaticTextSource {
    async fn generate_definition(&self, word: &str) -> Result<String, TextGenError> {
        self.definitions
            .get(word)
            .cloned()
            .ok_or_else(|| TextGenError::UnknownWord(word.to_string()))
    }
}

/// Asks `source` for a description of every word, in order, and returns
/// the `(word, description)` pairs a game is started with.
///
/// Stops at the first failure.
pub async fn generate_questions<S, I, W>(
    source: &S,
    words: I,
) -> Result<Vec<(String, String)>, TextGenError>
where
    S: TextSource + ?Sized,
    I: IntoIterator<Item = W>,
    W: Into<String>,
{
    let mut questions = Vec::new();
    for word in words {
        let word = word.into();
        let description = source.generate_definition(&word).await?;
        tracing::debug!(%word, "description generated");
        questions.push((word, description));
    }
    Ok(questions)
}
