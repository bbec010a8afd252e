//! Integration tests for the shared controller: a whole game played the
//! way a chat dispatch layer drives it.

use std::collections::HashMap;

use rand::SeedableRng;
use rand::rngs::StdRng;
use wordfib::prelude::*;

// =========================================================================
// Helpers
// =========================================================================

const ROOM: RoomId = RoomId(-100);

fn user(id: u64) -> User {
    User::new(UserId(id), format!("user{id}"))
}

fn source() -> StaticTextSource {
    [("cat", "a small pet"), ("eel", "a long fish")].into_iter().collect()
}

async fn room_with_players(players: &[u64]) -> SharedController {
    let shared = SharedController::default();
    let mut controller = shared.write().await;
    controller.create_room(ROOM);
    for id in players {
        controller.add_user_to_room(ROOM, user(*id)).unwrap();
    }
    drop(controller);
    shared
}

/// Submits a description for each user and votes per `votes`
/// (voter → author of the chosen option, `None` for the genuine one).
async fn play_round(
    shared: &SharedController,
    descriptions: &[(u64, &str)],
    votes: &[(u64, Option<u64>)],
    rng: &mut StdRng,
) {
    {
        let mut controller = shared.write().await;
        for (id, text) in descriptions {
            controller.add_user_description(ROOM, UserId(*id), *text).unwrap();
        }
    }

    let order = shared.prepare_poll(ROOM, rng).await.unwrap();

    let mut controller = shared.write().await;
    controller.add_poll(ROOM, PollId::new("poll"), MessageId(1)).unwrap();
    for (voter, choice) in votes {
        let idx = order
            .iter()
            .position(|o| o.author == choice.map(UserId))
            .unwrap();
        controller.add_user_vote(ROOM, UserId(*voter), idx).unwrap();
    }
}

// =========================================================================
// Setup
// =========================================================================

#[tokio::test]
async fn test_start_generated_game() {
    let shared = room_with_players(&[1, 2]).await;

    let count = shared
        .start_generated_game(ROOM, &source(), ["eel", "cat"])
        .await
        .unwrap();

    assert_eq!(count, 2);
    let controller = shared.read().await;
    assert_eq!(controller.get_current_word(ROOM).unwrap(), "eel");
    assert_eq!(controller.get_current_description(ROOM).unwrap(), "a long fish");
}

#[tokio::test]
async fn test_start_generated_game_missing_room() {
    let shared = SharedController::default();

    let result = shared.start_generated_game(ROOM, &source(), ["cat"]).await;

    assert!(matches!(result, Err(WordfibError::Store(StoreError::NotFound(_)))));
}

#[tokio::test]
async fn test_start_generated_game_text_failure_leaves_room_idle() {
    let shared = room_with_players(&[1]).await;

    let result = shared.start_generated_game(ROOM, &source(), ["cat", "yeti"]).await;

    assert!(matches!(result, Err(WordfibError::TextGen(TextGenError::UnknownWord(_)))));
    assert_eq!(shared.read().await.phase(ROOM).unwrap(), RoundPhase::NoGame);
}

// =========================================================================
// Lookups
// =========================================================================

#[tokio::test]
async fn test_reverse_lookups() {
    let shared = room_with_players(&[1]).await;
    shared.start_generated_game(ROOM, &source(), ["cat"]).await.unwrap();
    {
        let mut controller = shared.write().await;
        controller.add_user_question_message_id(ROOM, UserId(1), MessageId(42)).unwrap();
        controller.add_poll(ROOM, PollId::new("p-9"), MessageId(43)).unwrap();
    }

    assert_eq!(
        shared.room_for_private_message(UserId(1), MessageId(42)).await.unwrap(),
        ROOM
    );
    assert!(shared.room_for_private_message(UserId(2), MessageId(42)).await.is_err());
    assert_eq!(shared.room_for_poll(&PollId::new("p-9")).await, Some(ROOM));
    assert_eq!(shared.room_for_poll(&PollId::new("stale")).await, None);
}

#[tokio::test]
async fn test_clones_share_state() {
    let shared = SharedController::default();
    let clone = shared.clone();

    let handle = tokio::spawn(async move {
        clone.write().await.create_room(ROOM);
    });
    handle.await.unwrap();

    assert!(shared.read().await.has_room(ROOM));
}

// =========================================================================
// Full game
// =========================================================================

#[tokio::test]
async fn test_full_game_to_game_over() {
    let shared = room_with_players(&[1, 2, 3]).await;
    shared
        .start_generated_game(ROOM, &source(), ["cat", "eel"])
        .await
        .unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let scoring = ScoringConfig::default();

    // Round 1: 2 guesses right, 3 is fooled by 1.
    play_round(
        &shared,
        &[(1, "a rock"), (2, "a cloud")],
        &[(2, None), (3, Some(1))],
        &mut rng,
    )
    .await;
    let outcome = shared.finish_round(ROOM, &scoring).await.unwrap();
    assert!(matches!(outcome, RoundOutcome::NextRound { question_idx: 1 }));
    assert_eq!(shared.room_for_poll(&PollId::new("poll")).await, None);
    {
        let controller = shared.read().await;
        assert!(controller.get_user_votes(ROOM).unwrap().is_empty());
        assert_eq!(controller.get_scores(ROOM).unwrap()[&user(2)], 2);
    }

    // Round 2: 1 and 2 guess right, 3 sits it out.
    play_round(
        &shared,
        &[(3, "a snake")],
        &[(1, None), (2, None)],
        &mut rng,
    )
    .await;
    let outcome = shared.finish_round(ROOM, &scoring).await.unwrap();

    let board = match outcome {
        RoundOutcome::GameOver(board) => board,
        other => panic!("expected GameOver, got {other:?}"),
    };
    let standings: HashMap<u64, i64> = board
        .standings()
        .into_iter()
        .map(|(u, score)| (u.id.0, score))
        .collect();
    assert_eq!(standings, HashMap::from([(1, 3), (2, 4)]));
    assert_eq!(shared.read().await.phase(ROOM).unwrap(), RoundPhase::NoGame);
}

#[tokio::test]
async fn test_finish_round_without_game() {
    let shared = room_with_players(&[1]).await;

    let result = shared.finish_round(ROOM, &ScoringConfig::default()).await;

    assert!(matches!(result, Err(StoreError::NoGame(_))));
}
