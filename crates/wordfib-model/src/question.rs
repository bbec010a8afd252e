//! Questions and question sets.

use serde::{Deserialize, Serialize};

/// A word and its genuine description.
///
/// Immutable once created: the fields are private and only readable
/// through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    word: String,
    description: String,
}

impl Question {
    /// Creates a new question.
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            description: description.into(),
        }
    }

    /// The word players have to describe.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The genuine description of the word.
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// The ordered questions of one game. Position `i` is played in round `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    /// Creates a question set from questions in round order.
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Number of questions (and therefore rounds).
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Returns `true` if there are no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Returns the question for round `idx`, if there is one.
    pub fn get(&self, idx: usize) -> Option<&Question> {
        self.questions.get(idx)
    }

    /// Iterates over the questions in round order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<W, D> FromIterator<(W, D)> for QuestionSet
where
    W: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(word, description)| Question::new(word, description))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
