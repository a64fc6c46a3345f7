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

use std::collections::BTreeMap;

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::store::BlobStore;
use crate::study::Study;
use crate::types::timestamp::Timestamp;

pub fn print_book_stats(directory: Option<String>, book_id: &str) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let study = coll.open_book(book_id)?;
    let stats = get_stats(book_id, &study, Timestamp::now());
    let stats_json = serde_json::to_string_pretty(&stats)?;
    println!("{stats_json}");
    Ok(())
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    book: String,
    card_count: usize,
    due_count: usize,
    reviewed_count: usize,
    mastered_count: usize,
    choice_count: usize,
    fill_count: usize,
    /// Number of cards at each level. Unreviewed cards are at level zero.
    level_counts: BTreeMap<u32, usize>,
}

fn get_stats<S: BlobStore>(book_id: &str, study: &Study<S>, now: Timestamp) -> Stats {
    let mut stats = Stats {
        book: book_id.to_string(),
        card_count: study.cards().len(),
        due_count: study.due_cards(now).len(),
        reviewed_count: 0,
        mastered_count: 0,
        choice_count: 0,
        fill_count: 0,
        level_counts: BTreeMap::new(),
    };
    for card in study.cards() {
        let level = match study.progress().get(card.id()) {
            Some(state) => {
                stats.reviewed_count += 1;
                if state.is_mastered() {
                    stats.mastered_count += 1;
                }
                state.level
            }
            None => 0,
        };
        *stats.level_counts.entry(level).or_default() += 1;
        if card.has_choice() {
            stats.choice_count += 1;
        }
        if card.has_fill() {
            stats.fill_count += 1;
        }
    }
    stats
}
