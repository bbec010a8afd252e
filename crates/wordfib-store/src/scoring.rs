//! Turning a round's votes into score deltas.

use std::collections::HashMap;

use wordfib_model::{PollOption, User, UserId};

use crate::ScoringConfig;

/// Computes each user's score delta for a finished round.
///
/// `order` is the poll order the votes index into. The result feeds
/// straight into `StorageController::add_scores`:
///
/// - a voter who picked the genuine description earns
///   `correct_guess_points`;
/// - an author earns `fooled_player_points` for every other player who
///   picked their description.
///
/// Votes for one's own description, vote indices outside `order`, and
/// users who are no longer participants earn nothing.
pub fn tally_round(
    order: &[PollOption],
    votes: &HashMap<UserId, usize>,
    participants: &HashMap<UserId, User>,
    scoring: &ScoringConfig,
) -> HashMap<User, i64> {
    let mut deltas: HashMap<User, i64> = HashMap::new();
    let mut award = |user_id: UserId, points: i64| match participants.get(&user_id) {
        Some(user) => *deltas.entry(user.clone()).or_insert(0) += points,
        None => tracing::debug!(%user_id, "points for a departed user skipped"),
    };

    for (&voter, &choice) in votes {
        let Some(option) = order.get(choice) else {
            tracing::debug!(%voter, choice, options = order.len(), "vote outside the poll ignored");
            continue;
        };

        match option.author {
            None => award(voter, scoring.correct_guess_points),
            Some(author) if author == voter => {
                tracing::debug!(%voter, "vote for own description ignored");
            }
            Some(author) => award(author, scoring.fooled_player_points),
        }
    }

    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn participants(ids: &[u64]) -> HashMap<UserId, User> {
        ids.iter()
            .map(|id| (UserId(*id), User::new(UserId(*id), format!("user{id}"))))
            .collect()
    }

    fn votes(entries: &[(u64, usize)]) -> HashMap<UserId, usize> {
        entries.iter().map(|(id, v)| (UserId(*id), *v)).collect()
    }

    fn score(deltas: &HashMap<User, i64>, id: u64) -> Option<i64> {
        deltas.get(&User::new(UserId(id), "")).copied()
    }

    fn order() -> Vec<PollOption> {
        vec![
            PollOption::submitted("a rock", UserId(1)),
            PollOption::genuine("a pet"),
            PollOption::submitted("a fish", UserId(2)),
        ]
    }

    #[test]
    fn test_correct_guess_and_fooled_votes() {
        let deltas = tally_round(
            &order(),
            &votes(&[(1, 1), (2, 0), (3, 0)]),
            &participants(&[1, 2, 3]),
            &ScoringConfig::default(),
        );

        // 1 guessed right (+2) and fooled 2 and 3 (+1 each).
        assert_eq!(score(&deltas, 1), Some(4));
        assert_eq!(score(&deltas, 2), None);
        assert_eq!(score(&deltas, 3), None);
    }

    #[test]
    fn test_own_vote_and_out_of_range_ignored() {
        let deltas = tally_round(
            &order(),
            &votes(&[(2, 2), (3, 9)]),
            &participants(&[1, 2, 3]),
            &ScoringConfig::default(),
        );
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_departed_author_earns_nothing() {
        let deltas = tally_round(
            &order(),
            &votes(&[(3, 2)]),
            &participants(&[1, 3]),
            &ScoringConfig::default(),
        );
        assert!(deltas.is_empty());
    }

    #[test]
    fn test_custom_scoring() {
        let scoring = ScoringConfig {
            correct_guess_points: 10,
            ..ScoringConfig::default()
        };
        let deltas = tally_round(&order(), &votes(&[(3, 1)]), &participants(&[3]), &scoring);
        assert_eq!(score(&deltas, 3), Some(10));
    }
}
