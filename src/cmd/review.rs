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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::outcome::Outcome;
use crate::types::review_state::ReviewState;

/// Record the outcome of reviewing a card and print its new state.
pub fn record_review(
    directory: Option<String>,
    book_id: &str,
    card_id: &str,
    outcome: Outcome,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let mut study = coll.open_book(book_id)?;
    if !study.cards().iter().any(|card| card.id() == card_id) {
        return fail(format!("no card {card_id} in {book_id}."));
    }
    let state = study.record_result(card_id, outcome);
    let report = ReviewReport {
        card: card_id,
        outcome,
        state,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Serialize)]
struct ReviewReport<'a> {
    card: &'a str,
    outcome: Outcome,
    #[serde(flatten)]
    state: ReviewState,
}
