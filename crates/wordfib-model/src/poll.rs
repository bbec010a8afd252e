use serde::{Deserialize, Serialize};

use crate::UserId;

/// One option of a round's poll.
///
/// `author` is the user who submitted the description, or `None` for the
/// genuine description taken from the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub description: String,
    pub author: Option<UserId>,
}

impl PollOption {
    /// An option holding the genuine description.
    pub fn genuine(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            author: None,
        }
    }

    /// An option holding a description submitted by `author`.
    pub fn submitted(description: impl Into<String>, author: UserId) -> Self {
        Self {
            description: description.into(),
            author: Some(author),
        }
    }

    /// Returns `true` for the genuine description.
    pub fn is_genuine(&self) -> bool {
        self.author.is_none()
    }
}
