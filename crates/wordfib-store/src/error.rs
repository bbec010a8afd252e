//! Error types for the store layer.

use wordfib_model::{MessageId, RoomId, UserId};

/// Errors that can occur during store operations.
///
/// Three classes of failure exist:
///
/// - **Not found**: the room, its game, or the round's poll is missing
///   ([`NotFound`](Self::NotFound), [`NoGame`](Self::NoGame),
///   [`NoPoll`](Self::NoPoll)). See [`is_not_found`](Self::is_not_found).
/// - **Out of range**: a round advance was requested on the final round.
/// - **No room for message**: a reverse lookup by private message id
///   matched no room.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The room does not exist.
    #[error("room {0} not found")]
    NotFound(RoomId),

    /// The room exists but no game has been started in it.
    #[error("no game running in room {0}")]
    NoGame(RoomId),

    /// The current round of the room has no poll recorded yet.
    #[error("no poll recorded for the current round of room {0}")]
    NoPoll(RoomId),

    /// `next_round` was called on the final round. Nothing was changed.
    #[error(
        "room {room_id} has no question after index {question_idx} ({question_count} questions)"
    )]
    OutOfRange {
        room_id: RoomId,
        question_idx: usize,
        question_count: usize,
    },

    /// `start_game` was given no questions.
    #[error("cannot start a game without questions in room {0}")]
    EmptyQuestionSet(RoomId),

    /// No room's current round recorded `message_id` as `user_id`'s prompt.
    #[error("no room found for message {message_id} sent to user {user_id}")]
    NoRoomForMessage {
        user_id: UserId,
        message_id: MessageId,
    },
}

impl StoreError {
    /// Returns `true` for errors caused by a missing room, game, or poll.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::NoGame(_) | Self::NoPoll(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_class() {
        assert!(StoreError::NotFound(RoomId(1)).is_not_found());
        assert!(StoreError::NoGame(RoomId(1)).is_not_found());
        assert!(StoreError::NoPoll(RoomId(1)).is_not_found());
        assert!(
            !StoreError::OutOfRange {
                room_id: RoomId(1),
                question_idx: 1,
                question_count: 2,
            }
            .is_not_found()
        );
        assert!(
            !StoreError::NoRoomForMessage {
                user_id: UserId(1),
                message_id: MessageId(2),
            }
            .is_not_found()
        );
    }

    #[test]
    fn test_messages_mention_identities() {
        let err = StoreError::OutOfRange {
            room_id: RoomId(4),
            question_idx: 1,
            question_count: 2,
        };
        assert_eq!(err.to_string(), "room R-4 has no question after index 1 (2 questions)");

        let err = StoreError::NoRoomForMessage {
            user_id: UserId(7),
            message_id: MessageId(99),
        };
        assert!(err.to_string().contains("U-7"));
        assert!(err.to_string().contains("M-99"));
    }
}
