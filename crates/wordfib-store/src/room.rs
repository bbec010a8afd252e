//! Room, game, and round state.
//!
//! Ownership is strictly nested:
//!
//! ```text
//! Room ─┬─ participants
//!       ├─ Game ─┬─ QuestionSet
//!       │        └─ Scoreboard        (lives as long as the game)
//!       └─ GameState                  (replaced every round)
//! ```

use std::collections::HashMap;

use wordfib_model::{MessageId, PollId, PollOption, QuestionSet, RoomId, User, UserId};

use crate::RoundPhase;

// ---------------------------------------------------------------------------
// Scoreboard
// ---------------------------------------------------------------------------

/// Cumulative scores of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    scores: HashMap<User, i64>,
}

impl Scoreboard {
    /// Adds `delta` to `user`'s score, starting from 0 for a new user.
    pub fn add(&mut self, user: User, delta: i64) {
        *self.scores.entry(user).or_insert(0) += delta;
    }

    /// Returns a user's score, if they have one.
    pub fn get(&self, user_id: UserId) -> Option<i64> {
        self.scores
            .iter()
            .find(|(user, _)| user.id == user_id)
            .map(|(_, score)| *score)
    }

    /// The full user → score mapping.
    pub fn scores(&self) -> &HashMap<User, i64> {
        &self.scores
    }

    /// Users sorted by score (highest first), ties broken by user id.
    pub fn standings(&self) -> Vec<(&User, i64)> {
        let mut standings: Vec<_> =
            self.scores.iter().map(|(user, score)| (user, *score)).collect();
        standings.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.id.cmp(&b.0.id)));
        standings
    }
}

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// A running game: its questions and the scores accumulated so far.
///
/// Created once by `start_game` and kept until the game ends.
#[derive(Debug, Clone)]
pub struct Game {
    pub question_set: QuestionSet,
    pub scoreboard: Scoreboard,
}

impl Game {
    /// Creates a game with an empty scoreboard.
    pub fn new(question_set: QuestionSet) -> Self {
        Self {
            question_set,
            scoreboard: Scoreboard::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// GameState
// ---------------------------------------------------------------------------

/// Bookkeeping of the current round.
///
/// Never cleared field by field: a round advance replaces the whole value
/// with [`GameState::new`] so nothing from the previous round survives
/// except the incremented `question_idx`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    /// Index into the game's question set.
    pub question_idx: usize,

    /// Descriptions submitted this round, by author.
    pub user_descriptions: HashMap<UserId, String>,

    /// The private message each user was prompted with this round.
    pub user_question_message_id: HashMap<UserId, MessageId>,

    /// The order in which descriptions are shown as poll options.
    pub poll_description_order: Vec<PollOption>,

    /// The poll created for this round, if any.
    pub poll_id: Option<PollId>,

    /// The chat message carrying the poll, if any.
    pub poll_message_id: Option<MessageId>,

    /// Each voter's chosen option index into `poll_description_order`.
    pub user_votes: HashMap<UserId, usize>,
}

impl GameState {
    /// Fresh round state for question `question_idx`.
    pub fn new(question_idx: usize) -> Self {
        Self {
            question_idx,
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One game session: a chat, its participants, and the running game.
///
/// `game` and `game_state` are either both present or both absent.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: RoomId,
    pub participants: HashMap<UserId, User>,
    pub game: Option<Game>,
    pub game_state: Option<GameState>,
}

impl Room {
    /// Creates an empty room with no game.
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            participants: HashMap::new(),
            game: None,
            game_state: None,
        }
    }

    /// Returns the room's position in the round state machine.
    pub fn phase(&self) -> RoundPhase {
        match (&self.game, &self.game_state) {
            (Some(game), Some(state)) => RoundPhase::InRound {
                question_idx: state.question_idx,
                question_count: game.question_set.len(),
            },
            _ => RoundPhase::NoGame,
        }
    }
}
