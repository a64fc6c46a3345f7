// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::progress::ProgressStore;
use crate::types::card::Card;
use crate::types::session::Mode;
use crate::types::session::SessionConfig;
use crate::types::session::SessionItem;

/// Build a session queue: flashcards first, then choice items, then fill
/// items. Each stage is drawn independently, so a card may appear in more
/// than one stage. Stages with too few eligible cards come up short.
pub fn build_queue<R: Rng + ?Sized>(
    cards: &[Card],
    progress: &ProgressStore,
    config: &SessionConfig,
    rng: &mut R,
) -> Vec<SessionItem> {
    let mut queue = Vec::new();
    for card in most_overdue(cards, progress, config.flashcards) {
        queue.push(item(Mode::Flashcard, card));
    }
    for card in sample(cards, Card::has_choice, config.choices, rng) {
        queue.push(item(Mode::Choice, card));
    }
    for card in sample(cards, Card::has_fill, config.fills, rng) {
        queue.push(item(Mode::Fill, card));
    }
    log::debug!(
        "Built session of {} items from {} cards.",
        queue.len(),
        cards.len()
    );
    queue
}

/// The `count` cards with the earliest next review time. Unreviewed cards
/// come first. The sort is stable, so ties keep corpus order.
fn most_overdue<'a>(cards: &'a [Card], progress: &ProgressStore, count: usize) -> Vec<&'a Card> {
    let mut sorted: Vec<&Card> = cards.iter().collect();
    sorted.sort_by_key(|card| progress.get(card.id()).map(|state| state.next_review_at));
    sorted.truncate(count);
    sorted
}

/// Up to `count` distinct eligible cards in uniformly random order.
fn sample<'a, R: Rng + ?Sized>(
    cards: &'a [Card],
    eligible: fn(&Card) -> bool,
    count: usize,
    rng: &mut R,
) -> Vec<&'a Card> {
    let mut pool: Vec<&Card> = cards.iter().filter(|card| eligible(card)).collect();
    pool.shuffle(rng);
    pool.truncate(count);
    pool
}

fn item(mode: Mode, card: &Card) -> SessionItem {
    SessionItem {
        mode,
        card: card.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;

    use super::*;
    use crate::types::review_state::ReviewState;
    use crate::types::timestamp::Timestamp;

    fn config(flashcards: usize, choices: usize, fills: usize) -> SessionConfig {
        SessionConfig {
            flashcards,
            choices,
            fills,
        }
    }

    fn reviewed(progress: &mut ProgressStore, id: &str, millis: i64) {
        progress.insert(
            id,
            ReviewState {
                next_review_at: Timestamp::from_millis(millis).unwrap(),
                level: 1,
            },
        );
    }

    /// Five cards: `a`, `b`, `c` have choice payloads, `d` and `e` have fill
    /// payloads.
    fn corpus() -> Vec<Card> {
        vec![
            Card::new("a", "", "").with_choice(json!(["x", "y"])),
            Card::new("b", "", "").with_choice(json!(["x", "y"])),
            Card::new("c", "", "").with_choice(json!(["x", "y"])),
            Card::new("d", "", "").with_fill(json!("blank")),
            Card::new("e", "", "").with_fill(json!("blank")),
        ]
    }

    fn ids(items: &[SessionItem]) -> Vec<&str> {
        items.iter().map(|item| item.card.id()).collect()
    }

    #[test]
    fn test_mixed_session() {
        let cards = corpus();
        let mut progress = ProgressStore::new();
        reviewed(&mut progress, "a", 5_000);
        reviewed(&mut progress, "b", 1_000);
        reviewed(&mut progress, "c", 3_000);
        let mut rng = StdRng::seed_from_u64(7);
        let queue = build_queue(&cards, &progress, &config(2, 1, 1), &mut rng);
        assert_eq!(queue.len(), 4);
        // Unreviewed `d` and `e` come first, in corpus order.
        assert_eq!(queue[0], item(Mode::Flashcard, &cards[3]));
        assert_eq!(queue[1], item(Mode::Flashcard, &cards[4]));
        assert_eq!(queue[2].mode, Mode::Choice);
        assert!(["a", "b", "c"].contains(&queue[2].card.id()));
        assert_eq!(queue[3].mode, Mode::Fill);
        assert!(["d", "e"].contains(&queue[3].card.id()));
    }

    #[test]
    fn test_flashcards_by_next_review() {
        let cards = corpus();
        let mut progress = ProgressStore::new();
        reviewed(&mut progress, "a", 5_000);
        reviewed(&mut progress, "b", 1_000);
        reviewed(&mut progress, "c", 3_000);
        reviewed(&mut progress, "d", 1_000);
        let mut rng = StdRng::seed_from_u64(0);
        let queue = build_queue(&cards, &progress, &config(5, 0, 0), &mut rng);
        assert_eq!(ids(&queue), vec!["e", "b", "d", "c", "a"]);
    }

    #[test]
    fn test_short_stages() {
        let cards = corpus();
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(1);
        let queue = build_queue(&cards, &progress, &config(10, 10, 10), &mut rng);
        let modes: Vec<Mode> = queue.iter().map(|item| item.mode).collect();
        assert_eq!(modes.iter().filter(|m| **m == Mode::Flashcard).count(), 5);
        assert_eq!(modes.iter().filter(|m| **m == Mode::Choice).count(), 3);
        assert_eq!(modes.iter().filter(|m| **m == Mode::Fill).count(), 2);
    }

    #[test]
    fn test_more_choices_than_eligible() {
        let cards = vec![
            Card::new("a", "", "").with_choice(json!(1)),
            Card::new("b", "", ""),
            Card::new("c", "", "").with_choice(json!(2)),
        ];
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(2);
        let queue = build_queue(&cards, &progress, &config(0, 10, 0), &mut rng);
        assert_eq!(queue.len(), 2);
        let distinct: HashSet<&str> = ids(&queue).into_iter().collect();
        assert_eq!(distinct, HashSet::from(["a", "c"]));
    }

    #[test]
    fn test_empty_corpus() {
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(3);
        assert!(build_queue(&[], &progress, &config(3, 3, 3), &mut rng).is_empty());
    }

    #[test]
    fn test_stages_do_not_deduplicate() {
        let cards = vec![
            Card::new("a", "", "")
                .with_choice(json!(1))
                .with_fill(json!(2)),
        ];
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(4);
        let queue = build_queue(&cards, &progress, &config(1, 1, 1), &mut rng);
        assert_eq!(ids(&queue), vec!["a", "a", "a"]);
    }

    /// A comparator-based "shuffle" (sorting with a random comparison) is
    /// biased. Sampling here must be uniform over permutations, so every
    /// ordering of three cards should show up about a sixth of the time.
    #[test]
    fn test_sampling_is_uniform_over_permutations() {
        let cards: Vec<Card> = corpus().into_iter().take(3).collect();
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 60_000;
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();
        for _ in 0..trials {
            let queue = build_queue(&cards, &progress, &config(0, 3, 0), &mut rng);
            let order: Vec<String> = queue.iter().map(|i| i.card.id().to_string()).collect();
            *counts.entry(order).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        for count in counts.values() {
            let share = *count as f64 / trials as f64;
            assert!((share - 1.0 / 6.0).abs() < 0.02, "share = {share}");
        }
    }

    #[test]
    fn test_flashcard_order_is_deterministic() {
        let cards = corpus();
        let progress = ProgressStore::new();
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..10 {
            let queue = build_queue(&cards, &progress, &config(5, 0, 0), &mut rng);
            assert_eq!(ids(&queue), vec!["a", "b", "c", "d", "e"]);
        }
    }
}
