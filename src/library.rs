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

use std::collections::HashSet;
use std::fs::read_to_string;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::card::Card;

/// Read-only access to the books in a collection directory. Each book is a
/// JSON array of cards stored as `<book id>.json`.
pub struct Library {
    directory: PathBuf,
}

impl Library {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// The ids of all books in the directory, sorted.
    pub fn book_ids(&self) -> Fallible<Vec<String>> {
        let mut ids = Vec::new();
        for entry in WalkDir::new(&self.directory).min_depth(1).max_depth(1) {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if is_valid_book_id(stem) {
                        ids.push(stem.to_string());
                    }
                }
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// The cards of a book, in file order. An unknown book has no cards.
    pub fn get_cards(&self, book_id: &str) -> Fallible<Vec<Card>> {
        if !is_valid_book_id(book_id) {
            return fail(format!("invalid book id: {book_id:?}"));
        }
        let path = self.directory.join(format!("{book_id}.json"));
        if !path.exists() {
            log::debug!("No book named {book_id}.");
            return Ok(Vec::new());
        }
        let content = read_to_string(&path)?;
        parse_book(&content)
            .map_err(|e| ErrorReport::new(format!("{}: {}", path.display(), e.message())))
    }
}

/// Parse a book's JSON. Card ids must be non-empty and unique.
pub fn parse_book(content: &str) -> Fallible<Vec<Card>> {
    let cards: Vec<Card> = serde_json::from_str(content)?;
    let mut seen: HashSet<&str> = HashSet::new();
    for card in &cards {
        if card.id().is_empty() {
            return fail("card with an empty id.");
        }
        if !seen.insert(card.id()) {
            return fail(format!("duplicate card id: {}", card.id()));
        }
    }
    Ok(cards)
}

fn is_valid_book_id(book_id: &str) -> bool {
    !book_id.is_empty()
        && book_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
