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

use crate::types::timestamp::Timestamp;

/// Level at and above which a card is in the mastered tier.
pub const MASTERED_LEVEL: u32 = 2;

/// The scheduling record for a card that has been reviewed at least once.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ReviewState {
    /// When the card is next due.
    #[serde(rename = "nextReview", alias = "nextReviewAt")]
    pub next_review_at: Timestamp,
    /// Proficiency tier. Zero means reset.
    pub level: u32,
}

impl ReviewState {
    pub fn is_due(&self, now: Timestamp) -> bool {
        self.next_review_at <= now
    }

    pub fn is_mastered(&self) -> bool {
        self.level >= MASTERED_LEVEL
    }
}
