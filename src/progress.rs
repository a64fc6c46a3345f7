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

use crate::error::Fallible;
use crate::store::BlobStore;
use crate::types::review_state::ReviewState;

/// Namespace prefix under which progress blobs are stored.
const STORAGE_KEY: &str = "tcm_study_progress";

/// The blob key for a book's progress.
pub fn progress_key(book_id: &str) -> String {
    format!("{STORAGE_KEY}.{book_id}")
}

/// The review state of every card in a book that has been reviewed at least
/// once. Cards with no entry are new.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ProgressStore {
    states: BTreeMap<String, ReviewState>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a store from the blob under `key`. A missing or unreadable blob
    /// yields an empty store; the failure is logged, not returned.
    pub fn load(store: &impl BlobStore, key: &str) -> Self {
        let blob = match store.load_blob(key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                log::debug!("No progress stored under {key}.");
                return Self::new();
            }
            Err(e) => {
                log::warn!("Failed to load progress from {key}: {e}");
                return Self::new();
            }
        };
        match Self::from_blob(&blob) {
            Ok(progress) => {
                log::debug!("Loaded progress for {} cards.", progress.len());
                progress
            }
            Err(e) => {
                log::warn!("Discarding corrupt progress under {key}: {e}");
                Self::new()
            }
        }
    }

    /// Overwrite the blob under `key` with the whole store.
    pub fn persist(&self, store: &impl BlobStore, key: &str) -> Fallible<()> {
        store.save_blob(key, &self.to_blob()?)
    }

    pub fn from_blob(blob: &str) -> Fallible<Self> {
        let states: BTreeMap<String, ReviewState> = serde_json::from_str(blob)?;
        Ok(Self { states })
    }

    pub fn to_blob(&self) -> Fallible<String> {
        Ok(serde_json::to_string(&self.states)?)
    }

    pub fn get(&self, card_id: &str) -> Option<&ReviewState> {
        self.states.get(card_id)
    }

    pub fn insert(&mut self, card_id: impl Into<String>, state: ReviewState) {
        self.states.insert(card_id.into(), state);
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
