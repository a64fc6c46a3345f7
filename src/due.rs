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

use crate::progress::ProgressStore;
use crate::types::card::Card;
use crate::types::timestamp::Timestamp;

/// The cards due for review at `now`, in corpus order. A card is due if it
/// has never been reviewed or its next review time has arrived.
pub fn due_cards<'a>(cards: &'a [Card], progress: &ProgressStore, now: Timestamp) -> Vec<&'a Card> {
    cards
        .iter()
        .filter(|card| match progress.get(card.id()) {
            // Never reviewed, so it's due.
            None => true,
            Some(state) => state.is_due(now),
        })
        .collect()
}
