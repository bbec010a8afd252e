//! In-memory game storage for wordfib.
//!
//! Tracks rooms, their participants, the running game, and the bookkeeping
//! of the current round (submitted descriptions, the poll, votes). Nothing
//! is persisted: state lives as long as the [`StorageController`] that owns
//! it.
//!
//! # Key types
//!
//! - [`StorageController`]: every operation the chat layer performs
//! - [`Storage`] / [`Room`]: the room index and one room's state
//! - [`Game`] / [`GameState`]: a running game and its current round
//! - [`RoundPhase`]: the round state machine
//! - [`build_poll_order`] / [`tally_round`]: poll and scoring helpers

mod config;
mod controller;
mod error;
mod poll;
mod room;
mod scoring;
mod storage;

pub use config::{RoundPhase, ScoringConfig};
pub use controller::StorageController;
pub use error::StoreError;
pub use poll::build_poll_order;
pub use room::{Game, GameState, Room, Scoreboard};
pub use scoring::tally_round;
pub use storage::Storage;
