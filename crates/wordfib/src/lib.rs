//! # wordfib
//!
//! State store for a multiplayer word-description chat game.
//!
//! Each chat is a room. A game walks through a list of words; every round
//! players privately invent a description of the current word, then vote
//! in a poll mixing their inventions with the genuine description. Picking
//! the genuine one scores, and so does fooling others.
//!
//! This crate ties the layers together:
//!
//! ```text
//! chat dispatch (yours) → SharedController → StorageController → rooms, rounds, scores
//!                               ↓
//!                          TextSource (descriptions for new games)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use wordfib::prelude::*;
//!
//! # async fn run() -> Result<(), WordfibError> {
//! let shared = SharedController::default();
//! shared.write().await.create_room(RoomId(-100));
//!
//! let source = StaticTextSource::new().with("cat", "a small pet");
//! shared.start_generated_game(RoomId(-100), &source, ["cat"]).await?;
//!
//! assert_eq!(shared.read().await.get_current_word(RoomId(-100))?, "cat");
//! # Ok(())
//! # }
//! ```

mod error;
mod shared;

pub use error::WordfibError;
pub use shared::{RoundOutcome, SharedController};

pub use wordfib_model as model;
pub use wordfib_store as store;
pub use wordfib_textgen as textgen;

/// The types a chat dispatch layer needs, in one import.
pub mod prelude {
    pub use crate::{RoundOutcome, SharedController, WordfibError};
    pub use wordfib_model::{
        MessageId, PollId, PollOption, Question, QuestionSet, RoomId, User, UserId,
    };
    pub use wordfib_store::{
        RoundPhase, ScoringConfig, Scoreboard, StorageController, StoreError,
        build_poll_order, tally_round,
    };
    pub use wordfib_textgen::{
        HttpTextSource, StaticTextSource, TextGenConfig, TextGenError, TextSource,
        generate_questions,
    };
}
