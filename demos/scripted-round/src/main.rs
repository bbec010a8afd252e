use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;
use wordfib::prelude::*;

// ---------------------------------------------------------------------------
// Text source selection
// ---------------------------------------------------------------------------

/// Uses the hosted model when `WORDFIB_TEXTGEN_URL` is set, a fixed table
/// otherwise.
enum DemoSource {
    Static(StaticTextSource),
    Http(HttpTextSource),
}

impl DemoSource {
    fn from_env() -> Result<Self, WordfibError> {
        match std::env::var("WORDFIB_TEXTGEN_URL") {
            Ok(endpoint) => {
                tracing::info!(%endpoint, "using HTTP text source");
                let config = TextGenConfig {
                    endpoint,
                    ..TextGenConfig::default()
                };
                Ok(Self::Http(HttpTextSource::new(config)?))
            }
            Err(_) => Ok(Self::Static(offline_definitions())),
        }
    }
}

impl TextSource for DemoSource {
    async fn generate_definition(&self, word: &str) -> Result<String, TextGenError> {
        match self {
            Self::Static(source) => source.generate_definition(word).await,
            Self::Http(source) => source.generate_definition(word).await,
        }
    }
}

fn offline_definitions() -> StaticTextSource {
    [
        ("quokka", "a small wallaby living on islands off Western Australia"),
        ("gongoozler", "a person who idly watches boats on a canal"),
        ("snollygoster", "a shrewd person guided by personal advantage"),
    ]
    .into_iter()
    .collect()
}

const WORDS: [&str; 3] = ["quokka", "gongoozler", "snollygoster"];

// ---------------------------------------------------------------------------
// Scripted game
// ---------------------------------------------------------------------------

const ROOM: RoomId = RoomId(-1001);

const PLAYERS: [(u64, &str); 3] = [(1, "ada"), (2, "brook"), (3, "cyd")];

/// Plays a full game in one room: every player submits a made-up
/// description, then votes for a random option other than their own.
async fn play(
    shared: &SharedController,
    source: &DemoSource,
    rng: &mut StdRng,
) -> Result<Scoreboard, WordfibError> {
    {
        let mut controller = shared.write().await;
        controller.create_room(ROOM);
        for (id, name) in PLAYERS {
            controller.add_user_to_room(ROOM, User::new(UserId(id), name))?;
        }
    }

    shared.start_generated_game(ROOM, source, WORDS).await?;
    let scoring = ScoringConfig::default();
    let mut next_message = 1;

    loop {
        {
            let mut controller = shared.write().await;
            let word = controller.get_current_word(ROOM)?.to_string();
            for (id, name) in PLAYERS {
                controller.add_user_question_message_id(ROOM, UserId(id), MessageId(next_message))?;
                next_message += 1;
                controller.add_user_description(
                    ROOM,
                    UserId(id),
                    format!("something {name} once saw called a {word}"),
                )?;
            }
        }

        let order = shared.prepare_poll(ROOM, rng).await?;
        let poll_id = PollId::new(format!("poll-{next_message}"));
        {
            let mut controller = shared.write().await;
            controller.add_poll(ROOM, poll_id.clone(), MessageId(next_message))?;
            next_message += 1;
        }

        for (id, _) in PLAYERS {
            let choices: Vec<usize> = order
                .iter()
                .enumerate()
                .filter(|(_, option)| option.author != Some(UserId(id)))
                .map(|(idx, _)| idx)
                .collect();
            let vote = choices[rng.random_range(0..choices.len())];

            // Poll answers arrive with only the poll id attached.
            let Some(room_id) = shared.room_for_poll(&poll_id).await else {
                continue;
            };
            shared.write().await.add_user_vote(room_id, UserId(id), vote)?;
        }

        match shared.finish_round(ROOM, &scoring).await? {
            RoundOutcome::NextRound { question_idx } => {
                tracing::info!(room_id = %ROOM, question_idx, "next round");
            }
            RoundOutcome::GameOver(board) => {
                shared.write().await.remove_room(ROOM);
                return Ok(board);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let source = DemoSource::from_env()?;
    let shared = SharedController::default();
    let mut rng = StdRng::from_os_rng();

    let board = play(&shared, &source, &mut rng).await?;

    for (rank, (user, score)) in board.standings().into_iter().enumerate() {
        println!("{}. {}: {}", rank + 1, user.name, score);
    }
    Ok(())
}
