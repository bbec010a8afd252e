//! Scoring configuration and the round phase state machine.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ScoringConfig
// ---------------------------------------------------------------------------

/// Points awarded when a round is tallied.
///
/// Override individual values with struct-update syntax:
/// `ScoringConfig { correct_guess_points: 3, ..ScoringConfig::default() }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Awarded to a voter who picked the genuine description.
    pub correct_guess_points: i64,

    /// Awarded to an author for each other player who voted for their
    /// made-up description.
    pub fooled_player_points: i64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            correct_guess_points: 2,
            fooled_player_points: 1,
        }
    }
}

// ---------------------------------------------------------------------------
// RoundPhase
// ---------------------------------------------------------------------------

/// Where a room is in its game.
///
/// ```text
/// NoGame → InRound { 0 } → InRound { 1 } → … → InRound { N-1 }
/// ```
///
/// - **NoGame**: the room exists but `start_game` hasn't been called, or
///   the game was ended.
/// - **InRound**: round `question_idx` of `question_count` is active. The
///   last round is terminal: advancing past it fails and the caller is
///   expected to end the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    NoGame,
    InRound {
        question_idx: usize,
        question_count: usize,
    },
}

impl RoundPhase {
    /// Returns `true` while a game is running.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::InRound { .. })
    }

    /// Returns `true` on the last round of a game.
    pub fn is_final(&self) -> bool {
        match self {
            Self::NoGame => false,
            Self::InRound {
                question_idx,
                question_count,
            } => question_idx + 1 >= *question_count,
        }
    }

    /// Returns `true` if `next_round` would succeed.
    pub fn has_next(&self) -> bool {
        self.is_active() && !self.is_final()
    }

    /// The phase `next_round` moves to, or `None` if it would fail.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::InRound {
                question_idx,
                question_count,
            } if question_idx + 1 < question_count => Some(Self::InRound {
                question_idx: question_idx + 1,
                question_count,
            }),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoGame => write!(f, "NoGame"),
            Self::InRound {
                question_idx,
                question_count,
            } => write!(f, "InRound({}/{})", question_idx + 1, question_count),
        }
    }
}
