//! Building the poll shown to voters at the end of a round.

use std::collections::HashMap;

use rand::Rng;
use rand::seq::SliceRandom;
use wordfib_model::{PollOption, UserId};

/// Builds a shuffled poll order from the genuine description and the
/// descriptions users submitted this round.
///
/// Submissions matching the genuine description (ignoring case and
/// surrounding whitespace) are dropped, so the genuine option appears
/// exactly once and a player who guessed the real meaning can't collect
/// votes for it. Two players submitting the same made-up text still get one
/// option each, since an option has a single author to credit. Submissions
/// are ordered by author before shuffling, so a seeded `rng` always yields
/// the same order.
pub fn build_poll_order<R: Rng + ?Sized>(
    genuine: &str,
    user_descriptions: &HashMap<UserId, String>,
    rng: &mut R,
) -> Vec<PollOption> {
    let genuine_key = normalize(genuine);

    let mut submitted: Vec<(&UserId, &String)> = user_descriptions
        .iter()
        .filter(|(user_id, description)| {
            let duplicate = normalize(description) == genuine_key;
            if duplicate {
                tracing::debug!(%user_id, "submission matches the genuine description, dropped");
            }
            !duplicate
        })
        .collect();
    submitted.sort_by_key(|(user_id, _)| **user_id);

    let mut order: Vec<PollOption> = submitted
        .into_iter()
        .map(|(user_id, description)| PollOption::submitted(description.clone(), *user_id))
        .collect();
    order.push(PollOption::genuine(genuine));
    order.shuffle(rng);
    order
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn descriptions(entries: &[(u64, &str)]) -> HashMap<UserId, String> {
        entries
            .iter()
            .map(|(id, text)| (UserId(*id), text.to_string()))
            .collect()
    }

    #[test]
    fn test_every_submission_and_genuine_present() {
        let submitted = descriptions(&[(1, "a rock"), (2, "a fish")]);
        let mut rng = StdRng::seed_from_u64(7);

        let order = build_poll_order("a pet", &submitted, &mut rng);

        assert_eq!(order.len(), 3);
        assert_eq!(order.iter().filter(|o| o.is_genuine()).count(), 1);
        assert!(order.contains(&PollOption::submitted("a rock", UserId(1))));
        assert!(order.contains(&PollOption::submitted("a fish", UserId(2))));
        assert!(order.contains(&PollOption::genuine("a pet")));
    }

    #[test]
    fn test_duplicate_of_genuine_dropped() {
        let submitted = descriptions(&[(1, "  A Pet "), (2, "a fish")]);
        let mut rng = StdRng::seed_from_u64(7);

        let order = build_poll_order("a pet", &submitted, &mut rng);

        assert_eq!(order.len(), 2);
        assert!(order.iter().all(|o| o.author != Some(UserId(1))));
    }

    #[test]
    fn test_identical_submissions_keep_one_option_each() {
        let submitted = descriptions(&[(1, "a rock"), (2, "a rock")]);
        let mut rng = StdRng::seed_from_u64(7);

        let order = build_poll_order("a pet", &submitted, &mut rng);

        assert_eq!(order.len(), 3);
        assert!(order.contains(&PollOption::submitted("a rock", UserId(1))));
        assert!(order.contains(&PollOption::submitted("a rock", UserId(2))));
    }

    #[test]
    fn test_same_seed_same_order() {
        let submitted = descriptions(&[(3, "c"), (1, "a"), (2, "b"), (4, "d")]);

        let first = build_poll_order("g", &submitted, &mut StdRng::seed_from_u64(42));
        let second = build_poll_order("g", &submitted, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_no_submissions_yields_only_genuine() {
        let order = build_poll_order("a pet", &HashMap::new(), &mut StdRng::seed_from_u64(1));
        assert_eq!(order, vec![PollOption::genuine("a pet")]);
    }
}
