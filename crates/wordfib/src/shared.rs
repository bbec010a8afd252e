//! A lockable, cloneable handle to the storage controller.
//!
//! The chat layer usually handles updates on several Tokio tasks at once.
//! `SharedController` puts the single [`StorageController`] behind one
//! `RwLock`: mutations take the write lock, lookups the read lock. The two
//! reverse scans run under a single read guard, so they see every room's
//! current round as of one instant.

use std::sync::Arc;

use rand::Rng;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use wordfib_model::{MessageId, PollId, PollOption, RoomId, UserId};
use wordfib_store::{
    ScoringConfig, Scoreboard, StorageController, StoreError, build_poll_order, tally_round,
};
use wordfib_textgen::{TextSource, generate_questions};

use crate::WordfibError;

/// What happened when a round was closed.
#[derive(Debug)]
pub enum RoundOutcome {
    /// Scores were added and the next question is active.
    NextRound { question_idx: usize },

    /// That was the last question. The game has ended and the room is
    /// back to no game; here are the final scores.
    GameOver(Scoreboard),
}

/// Cheap to clone; every clone refers to the same controller.
#[derive(Clone, Default)]
pub struct SharedController {
    inner: Arc<RwLock<StorageController>>,
}

impl SharedController {
    /// Wraps a controller.
    pub fn new(controller: StorageController) -> Self {
        Self {
            inner: Arc::new(RwLock::new(controller)),
        }
    }

    /// Locks the controller for reading.
    pub async fn read(&self) -> RwLockReadGuard<'_, StorageController> {
        self.inner.read().await
    }

    /// Locks the controller for writing.
    pub async fn write(&self) -> RwLockWriteGuard<'_, StorageController> {
        self.inner.write().await
    }

    /// Resolves a reply to a private question prompt to its room.
    pub async fn room_for_private_message(
        &self,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<RoomId, StoreError> {
        self.read()
            .await
            .get_room_id_by_private_message_id(user_id, message_id)
    }

    /// Resolves a poll answer to its room, if the poll is still current.
    pub async fn room_for_poll(&self, poll_id: &PollId) -> Option<RoomId> {
        self.read().await.get_room_id_by_poll_id(poll_id)
    }

    /// Generates a description for each word and starts a game with them.
    ///
    /// Descriptions are generated before the lock is taken, so slow text
    /// generation doesn't block other rooms. Returns the number of
    /// questions.
    pub async fn start_generated_game<S, I, W>(
        &self,
        room_id: RoomId,
        source: &S,
        words: I,
    ) -> Result<usize, WordfibError>
    where
        S: TextSource + ?Sized,
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        if !self.read().await.has_room(room_id) {
            return Err(StoreError::NotFound(room_id).into());
        }

        let questions = generate_questions(source, words).await?;
        let question_count = questions.len();
        tracing::debug!(%room_id, question_count, "questions generated");
        self.write().await.start_game(room_id, questions)?;
        Ok(question_count)
    }

    /// Builds the current round's poll from the submitted descriptions and
    /// stores its order. Returns the order so the caller can post the poll.
    pub async fn prepare_poll<R: Rng + ?Sized>(
        &self,
        room_id: RoomId,
        rng: &mut R,
    ) -> Result<Vec<PollOption>, StoreError> {
        let mut controller = self.write().await;
        let order = build_poll_order(
            controller.get_current_description(room_id)?,
            controller.get_current_user_descriptions(room_id)?,
            rng,
        );
        controller.set_poll_description_order(room_id, order.clone())?;
        tracing::debug!(%room_id, options = order.len(), "poll prepared");
        Ok(order)
    }

    /// Scores the current round's votes and moves on.
    ///
    /// On the last question the game is ended instead and the final
    /// scoreboard returned. All of it happens under one write lock, so no
    /// vote can land between tallying and advancing.
    pub async fn finish_round(
        &self,
        room_id: RoomId,
        scoring: &ScoringConfig,
    ) -> Result<RoundOutcome, StoreError> {
        let mut controller = self.write().await;
        let deltas = tally_round(
            controller.get_description_order(room_id)?,
            controller.get_user_votes(room_id)?,
            controller.get_users_in_room(room_id)?,
            scoring,
        );
        controller.add_scores(room_id, deltas)?;

        match controller.next_round(room_id) {
            Ok(()) => {
                let question_idx = controller.current_question_idx(room_id)?;
                tracing::info!(%room_id, question_idx, "round finished, next round started");
                Ok(RoundOutcome::NextRound { question_idx })
            }
            Err(StoreError::OutOfRange { .. }) => {
                let scoreboard = controller.end_game(room_id)?;
                tracing::info!(
                    %room_id,
                    players = scoreboard.scores().len(),
                    "round finished, game over"
                );
                Ok(RoundOutcome::GameOver(scoreboard))
            }
            Err(e) => Err(e),
        }
    }
}
