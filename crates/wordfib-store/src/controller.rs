//! The storage controller: every operation the chat layer performs on
//! rooms, rounds, polls, and scores.
//!
//! # Concurrency note
//!
//! `StorageController` is NOT thread-safe by itself. Mutating operations
//! take `&mut self` and there is no internal locking. A host that calls
//! it from several tasks wraps it in a lock (the `wordfib` crate provides
//! `SharedController` for that); a single-threaded bot loop owns it
//! directly.

use std::collections::HashMap;

use wordfib_model::{
    MessageId, PollId, PollOption, Question, QuestionSet, RoomId, User, UserId,
};

use crate::{Game, GameState, Room, RoundPhase, Scoreboard, Storage, StoreError};

/// Facade over [`Storage`].
///
/// Operations key off a room id. A missing room fails with
/// [`StoreError::NotFound`]; a room without a running game fails per-round
/// operations with [`StoreError::NoGame`].
///
/// ## Lifecycle
///
/// ```text
/// create_room ──→ add_user_to_room ──→ start_game ──→ next_round … ──→ end_game / remove_room
/// ```
#[derive(Debug, Default)]
pub struct StorageController {
    storage: Storage,
}

impl StorageController {
    /// Creates a controller over an empty storage.
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }

    /// Creates a controller over an existing storage.
    pub fn with_storage(storage: Storage) -> Self {
        Self { storage }
    }

    // -----------------------------------------------------------------------
    // Rooms
    // -----------------------------------------------------------------------

    /// Creates an empty room. An existing room with the same id is replaced.
    pub fn create_room(&mut self, room_id: RoomId) {
        if self
            .storage
            .rooms
            .insert(room_id, Room::new(room_id))
            .is_some()
        {
            tracing::warn!(%room_id, "room re-created, previous state dropped");
        } else {
            tracing::info!(%room_id, "room created");
        }
    }

    /// Removes a room and returns it. Does nothing if the room is absent.
    pub fn remove_room(&mut self, room_id: RoomId) -> Option<Room> {
        let removed = self.storage.rooms.remove(&room_id);
        if removed.is_some() {
            tracing::info!(%room_id, "room removed");
        }
        removed
    }

    /// Returns `true` if the room exists.
    pub fn has_room(&self, room_id: RoomId) -> bool {
        self.storage.rooms.contains_key(&room_id)
    }

    /// Returns the number of rooms.
    pub fn room_count(&self) -> usize {
        self.storage.rooms.len()
    }

    /// Lists all room ids in ascending order.
    pub fn room_ids(&self) -> Vec<RoomId> {
        self.storage.rooms.keys().copied().collect()
    }

    /// Returns the room's position in the round state machine.
    pub fn phase(&self, room_id: RoomId) -> Result<RoundPhase, StoreError> {
        Ok(self.room(room_id)?.phase())
    }

    // -----------------------------------------------------------------------
    // Participants
    // -----------------------------------------------------------------------

    /// Adds a participant, replacing any participant with the same id.
    pub fn add_user_to_room(&mut self, room_id: RoomId, user: User) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;
        tracing::debug!(%room_id, user_id = %user.id, "user added to room");
        room.participants.insert(user.id, user);
        Ok(())
    }

    /// Removes a participant and returns them, if they were in the room.
    pub fn remove_user_from_room(
        &mut self,
        room_id: RoomId,
        user_id: UserId,
    ) -> Result<Option<User>, StoreError> {
        let removed = self.room_mut(room_id)?.participants.remove(&user_id);
        if removed.is_some() {
            tracing::debug!(%room_id, %user_id, "user removed from room");
        }
        Ok(removed)
    }

    /// Returns `true` if the user is a participant of the room.
    pub fn is_user_in_room(&self, room_id: RoomId, user_id: UserId) -> Result<bool, StoreError> {
        Ok(self.room(room_id)?.participants.contains_key(&user_id))
    }

    /// Returns the room's participants, keyed by user id.
    pub fn get_users_in_room(&self, room_id: RoomId) -> Result<&HashMap<UserId, User>, StoreError> {
        Ok(&self.room(room_id)?.participants)
    }

    // -----------------------------------------------------------------------
    // Game lifecycle
    // -----------------------------------------------------------------------

    /// Starts a game with the given `(word, description)` pairs, one per
    /// round, in order. Any game already running in the room is replaced.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`]: the room doesn't exist
    /// - [`StoreError::EmptyQuestionSet`]: `questions` was empty; nothing
    ///   was changed
    pub fn start_game<I, W, D>(&mut self, room_id: RoomId, questions: I) -> Result<(), StoreError>
    where
        I: IntoIterator<Item = (W, D)>,
        W: Into<String>,
        D: Into<String>,
    {
        let room = self.room_mut(room_id)?;
        let question_set: QuestionSet = questions.into_iter().collect();
        if question_set.is_empty() {
            return Err(StoreError::EmptyQuestionSet(room_id));
        }

        let question_count = question_set.len();
        room.game = Some(Game::new(question_set));
        room.game_state = Some(GameState::new(0));
        tracing::info!(%room_id, question_count, "game started");
        Ok(())
    }

    /// Advances to the next question with a fresh round state.
    ///
    /// # Errors
    /// - [`StoreError::NotFound`] / [`StoreError::NoGame`]
    /// - [`StoreError::OutOfRange`]: the current question is the last one;
    ///   the round state is left untouched
    pub fn next_round(&mut self, room_id: RoomId) -> Result<(), StoreError> {
        let room = self.room_mut(room_id)?;
        let (game, state) = match (&room.game, &mut room.game_state) {
            (Some(game), Some(state)) => (game, state),
            _ => return Err(StoreError::NoGame(room_id)),
        };

        let question_count = game.question_set.len();
        let question_idx = state.question_idx;
        if question_idx + 1 >= question_count {
            tracing::warn!(%room_id, question_idx, question_count, "no round left to advance to");
            return Err(StoreError::OutOfRange {
                room_id,
                question_idx,
                question_count,
            });
        }

        *state = GameState::new(question_idx + 1);
        tracing::info!(%room_id, question_idx = question_idx + 1, question_count, "round advanced");
        Ok(())
    }

    /// Ends the running game and returns its final scoreboard.
    ///
    /// The room and its participants stay; the room goes back to
    /// [`RoundPhase::NoGame`].
    pub fn end_game(&mut self, room_id: RoomId) -> Result<Scoreboard, StoreError> {
        let room = self.room_mut(room_id)?;
        let game = room.game.take().ok_or(StoreError::NoGame(room_id))?;
        room.game_state = None;
        tracing::info!(%room_id, players = game.scoreboard.scores().len(), "game ended");
        Ok(game.scoreboard)
    }

    /// Number of questions in the running game.
    pub fn question_count(&self, room_id: RoomId) -> Result<usize, StoreError> {
        Ok(self.round(room_id)?.0.question_set.len())
    }

    /// Index of the current question.
    pub fn current_question_idx(&self, room_id: RoomId) -> Result<usize, StoreError> {
        Ok(self.round(room_id)?.1.question_idx)
    }

    /// The current question.
    pub fn get_current_question(&self, room_id: RoomId) -> Result<&Question, StoreError> {
        let (game, state) = self.round(room_id)?;
        // `start_game` and `next_round` keep the index within bounds.
        game.question_set
            .get(state.question_idx)
            .ok_or(StoreError::NoGame(room_id))
    }

    /// The word of the current question.
    pub fn get_current_word(&self, room_id: RoomId) -> Result<&str, StoreError> {
        Ok(self.get_current_question(room_id)?.word())
    }

    /// The genuine description of the current question.
    pub fn get_current_description(&self, room_id: RoomId) -> Result<&str, StoreError> {
        Ok(self.get_current_question(room_id)?.description())
    }

    // -----------------------------------------------------------------------
    // Descriptions
    // -----------------------------------------------------------------------

    /// Descriptions submitted this round, by author.
    pub fn get_current_user_descriptions(
        &self,
        room_id: RoomId,
    ) -> Result<&HashMap<UserId, String>, StoreError> {
        Ok(&self.round(room_id)?.1.user_descriptions)
    }

    /// Records the private message `user_id` was prompted with this round.
    pub fn add_user_question_message_id(
        &mut self,
        room_id: RoomId,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<(), StoreError> {
        let state = self.round_mut(room_id)?;
        state.user_question_message_id.insert(user_id, message_id);
        tracing::debug!(%room_id, %user_id, %message_id, "question prompt recorded");
        Ok(())
    }

    /// Finds the room whose current round prompted `user_id` with
    /// `message_id`.
    ///
    /// Replies to private prompts carry no room id, so the room is found by
    /// scanning every room the user is in. Rooms are visited in ascending
    /// id order and the first match wins.
    ///
    /// # Errors
    /// [`StoreError::NoRoomForMessage`] if no room matches.
    pub fn get_room_id_by_private_message_id(
        &self,
        user_id: UserId,
        message_id: MessageId,
    ) -> Result<RoomId, StoreError> {
        self.storage
            .rooms
            .values()
            .filter(|room| room.participants.contains_key(&user_id))
            .find(|room| {
                room.game_state.as_ref().is_some_and(|state| {
                    state.user_question_message_id.get(&user_id) == Some(&message_id)
                })
            })
            .map(|room| room.id)
            .ok_or(StoreError::NoRoomForMessage {
                user_id,
                message_id,
            })
    }

    /// Records `user_id`'s description for the current round, replacing
    /// any earlier submission.
    pub fn add_user_description(
        &mut self,
        room_id: RoomId,
        user_id: UserId,
        description: impl Into<String>,
    ) -> Result<(), StoreError> {
        let state = self.round_mut(room_id)?;
        state.user_descriptions.insert(user_id, description.into());
        tracing::debug!(
            %room_id,
            %user_id,
            submitted = state.user_descriptions.len(),
            "description recorded"
        );
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Polls and votes
    // -----------------------------------------------------------------------

    /// Stores the order in which descriptions are shown as poll options.
    pub fn set_poll_description_order(
        &mut self,
        room_id: RoomId,
        order: Vec<PollOption>,
    ) -> Result<(), StoreError> {
        let state = self.round_mut(room_id)?;
        tracing::debug!(%room_id, options = order.len(), "poll order set");
        state.poll_description_order = order;
        Ok(())
    }

    /// The order in which descriptions are shown as poll options.
    pub fn get_description_order(&self, room_id: RoomId) -> Result<&[PollOption], StoreError> {
        Ok(&self.round(room_id)?.1.poll_description_order)
    }

    /// Records the poll created for the current round.
    pub fn add_poll(
        &mut self,
        room_id: RoomId,
        poll_id: PollId,
        message_id: MessageId,
    ) -> Result<(), StoreError> {
        let state = self.round_mut(room_id)?;
        tracing::debug!(%room_id, %poll_id, %message_id, "poll recorded");
        state.poll_id = Some(poll_id);
        state.poll_message_id = Some(message_id);
        Ok(())
    }

    /// Finds the room whose current round owns `poll_id`.
    ///
    /// Returns `None` rather than an error: a vote on a poll from an
    /// earlier round is expected after the round has advanced. Rooms are
    /// visited in ascending id order and the first match wins.
    pub fn get_room_id_by_poll_id(&self, poll_id: &PollId) -> Option<RoomId> {
        self.storage
            .rooms
            .values()
            .find(|room| {
                room.game_state
                    .as_ref()
                    .is_some_and(|state| state.poll_id.as_ref() == Some(poll_id))
            })
            .map(|room| room.id)
    }

    /// The chat message carrying the current round's poll.
    ///
    /// # Errors
    /// [`StoreError::NoPoll`] if no poll was recorded this round.
    pub fn get_poll_message_id(&self, room_id: RoomId) -> Result<MessageId, StoreError> {
        self.round(room_id)?
            .1
            .poll_message_id
            .ok_or(StoreError::NoPoll(room_id))
    }

    /// Records `user_id`'s vote (an index into the poll order), replacing
    /// any earlier vote.
    pub fn add_user_vote(
        &mut self,
        room_id: RoomId,
        user_id: UserId,
        vote: usize,
    ) -> Result<(), StoreError> {
        let state = self.round_mut(room_id)?;
        state.user_votes.insert(user_id, vote);
        tracing::debug!(%room_id, %user_id, vote, "vote recorded");
        Ok(())
    }

    /// Votes cast this round, by voter.
    pub fn get_user_votes(&self, room_id: RoomId) -> Result<&HashMap<UserId, usize>, StoreError> {
        Ok(&self.round(room_id)?.1.user_votes)
    }

    // -----------------------------------------------------------------------
    // Scores
    // -----------------------------------------------------------------------

    /// Adds each delta to the user's cumulative score.
    pub fn add_scores(
        &mut self,
        room_id: RoomId,
        deltas: HashMap<User, i64>,
    ) -> Result<(), StoreError> {
        let game = self
            .room_mut(room_id)?
            .game
            .as_mut()
            .ok_or(StoreError::NoGame(room_id))?;
        tracing::debug!(%room_id, users = deltas.len(), "scores added");
        for (user, delta) in deltas {
            game.scoreboard.add(user, delta);
        }
        Ok(())
    }

    /// Cumulative scores of the running game.
    pub fn get_scores(&self, room_id: RoomId) -> Result<&HashMap<User, i64>, StoreError> {
        Ok(self.round(room_id)?.0.scoreboard.scores())
    }

    // -----------------------------------------------------------------------
    // Lookup helpers
    // -----------------------------------------------------------------------

    fn room(&self, room_id: RoomId) -> Result<&Room, StoreError> {
        self.storage
            .rooms
            .get(&room_id)
            .ok_or(StoreError::NotFound(room_id))
    }

    fn room_mut(&mut self, room_id: RoomId) -> Result<&mut Room, StoreError> {
        self.storage
            .rooms
            .get_mut(&room_id)
            .ok_or(StoreError::NotFound(room_id))
    }

    fn round(&self, room_id: RoomId) -> Result<(&Game, &GameState), StoreError> {
        let room = self.room(room_id)?;
        match (&room.game, &room.game_state) {
            (Some(game), Some(state)) => Ok((game, state)),
            _ => Err(StoreError::NoGame(room_id)),
        }
    }

    fn round_mut(&mut self, room_id: RoomId) -> Result<&mut GameState, StoreError> {
        self.room_mut(room_id)?
            .game_state
            .as_mut()
            .ok_or(StoreError::NoGame(room_id))
    }
}
