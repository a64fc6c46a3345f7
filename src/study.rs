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

//! The study context: one book's cards, their progress, and the current
//! session. A context lives for as long as its book is selected; selecting
//! another book means building a new one.

pub mod builder;
pub mod runner;
pub mod updater;

use rand::Rng;

use crate::due::due_cards;
use crate::progress::ProgressStore;
use crate::progress::progress_key;
use crate::store::BlobStore;
use crate::study::builder::build_queue;
use crate::study::runner::Advance;
use crate::study::runner::SessionRunner;
use crate::study::updater::next_review_state;
use crate::types::card::Card;
use crate::types::outcome::Outcome;
use crate::types::review_state::ReviewState;
use crate::types::session::SessionConfig;
use crate::types::session::SessionItem;
use crate::types::timestamp::Timestamp;

pub struct Study<S: BlobStore> {
    book_id: String,
    cards: Vec<Card>,
    progress: ProgressStore,
    store: S,
    session: SessionRunner,
}

impl<S: BlobStore> Study<S> {
    /// Select a book: take its cards and load its progress from `store`.
    pub fn open(book_id: impl Into<String>, cards: Vec<Card>, store: S) -> Self {
        let book_id = book_id.into();
        let progress = ProgressStore::load(&store, &progress_key(&book_id));
        log::debug!(
            "Opened {book_id}: {} cards, {} with progress.",
            cards.len(),
            progress.len()
        );
        Self {
            book_id,
            cards,
            progress,
            store,
            session: SessionRunner::default(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    pub fn session(&self) -> &SessionRunner {
        &self.session
    }

    pub fn due_cards(&self, now: Timestamp) -> Vec<&Card> {
        due_cards(&self.cards, &self.progress, now)
    }

    /// Build a fresh session, discarding the previous one and its results.
    pub fn start_session(&mut self, config: &SessionConfig) -> &[SessionItem] {
        self.start_session_with(config, &mut rand::rng())
    }

    pub fn start_session_with<R: Rng + ?Sized>(
        &mut self,
        config: &SessionConfig,
        rng: &mut R,
    ) -> &[SessionItem] {
        let queue = build_queue(&self.cards, &self.progress, config, rng);
        self.session = SessionRunner::new(queue);
        self.session.queue()
    }

    pub fn current_item(&self) -> Option<&SessionItem> {
        self.session.current_item()
    }

    pub fn advance(&mut self) -> Advance {
        self.session.advance()
    }

    pub fn record_result(&mut self, card_id: &str, outcome: Outcome) -> ReviewState {
        self.record_result_at(card_id, outcome, Timestamp::now())
    }

    /// Apply an outcome to a card and persist the whole progress store.
    ///
    /// The answer is logged to the session only if `card_id` is the card
    /// under the cursor, but the card is rescheduled regardless. A failed
    /// write is logged and the in-memory update is kept, so the change is
    /// lost if the book is reloaded before the next successful write.
    pub fn record_result_at(
        &mut self,
        card_id: &str,
        outcome: Outcome,
        now: Timestamp,
    ) -> ReviewState {
        if !self.session.log_result(card_id, outcome, now) {
            log::debug!("{card_id} is not the current session item; not logged.");
        }
        let state = next_review_state(self.progress.get(card_id), outcome, now);
        log::debug!(
            "{card_id} {outcome} level={} due={}",
            state.level,
            state.next_review_at
        );
        self.progress.insert(card_id, state);
        let key = progress_key(&self.book_id);
        if let Err(e) = self.progress.persist(&self.store, &key) {
            log::error!("Failed to save progress for {}: {e}", self.book_id);
        }
        state
    }
}
