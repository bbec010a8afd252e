//! Description generation for wordfib.
//!
//! A game needs one genuine description per word. This crate defines where
//! those come from:
//!
//! - [`TextSource`]: the trait the game setup calls
//! - [`HttpTextSource`]: asks a hosted language model over HTTP
//! - [`StaticTextSource`]: a fixed table, for tests and offline play
//! - [`generate_questions`]: turns a word list into the `(word,
//!   description)` pairs `StorageController::start_game` takes

#![allow(async_fn_in_trait)]

mod config;
mod error;
mod http;
mod source;

pub use config::{DEFAULT_ENDPOINT, TextGenConfig};
pub use error::TextGenError;
pub use http::{HttpTextSource, extract_definition};
pub use source::{StaticTextSource, TextSource, generate_questions};
