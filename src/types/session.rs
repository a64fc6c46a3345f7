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

use serde::Deserialize;
use serde::Serialize;

use crate::types::card::Card;
use crate::types::outcome::Outcome;
use crate::types::timestamp::Timestamp;

/// How a card is presented during a session.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Flashcard,
    Choice,
    Fill,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SessionItem {
    pub mode: Mode,
    pub card: Card,
}

/// An answered session item.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResult {
    pub item: SessionItem,
    pub outcome: Outcome,
    pub recorded_at: Timestamp,
}

/// How many items of each mode a session should contain.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    pub flashcards: usize,
    pub choices: usize,
    pub fills: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            flashcards: 10,
            choices: 5,
            fills: 5,
        }
    }
}
