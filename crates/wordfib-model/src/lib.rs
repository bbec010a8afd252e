//! Data model for wordfib.
//!
//! This crate defines the plain values every other layer passes around:
//!
//! - **Identities** ([`RoomId`], [`UserId`], [`MessageId`], [`PollId`]):
//!   the keys the chat platform hands us.
//! - **Participants** ([`User`]): who is playing.
//! - **Content** ([`Question`], [`QuestionSet`]): the words and genuine
//!   descriptions that drive a game, one question per round.
//! - **Polls** ([`PollOption`]): one entry of the order in which
//!   descriptions are shown to voters.
//!
//! # Architecture
//!
//! The model layer has no behavior beyond construction and lookup. It
//! doesn't know about rooms, rounds, or storage.
//!
//! ```text
//! Store (rooms, rounds, scores) → Model (ids, users, questions)
//! ```

mod poll;
mod question;
mod types;

pub use poll::PollOption;
pub use question::{Question, QuestionSet};
pub use types::{MessageId, PollId, RoomId, User, UserId};
