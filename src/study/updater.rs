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

use chrono::TimeDelta;

use crate::types::outcome::Outcome;
use crate::types::outcome::OutcomeClass;
use crate::types::review_state::MASTERED_LEVEL;
use crate::types::review_state::ReviewState;
use crate::types::timestamp::Timestamp;

/// Delay before a forgotten card comes back.
const WRONG_DELAY: TimeDelta = TimeDelta::minutes(5);

/// Delay before a vaguely remembered card comes back.
const VAGUE_DELAY: TimeDelta = TimeDelta::hours(24);

/// Delay after a correct answer on a card below the mastered tier.
const CORRECT_DELAY: TimeDelta = TimeDelta::days(3);

/// Delay after a correct answer on a card already in the mastered tier.
const MASTERED_DELAY: TimeDelta = TimeDelta::days(7);

/// Compute a card's next review state. `current` is `None` for a card that
/// has never been reviewed, which is treated as level zero.
pub fn next_review_state(
    current: Option<&ReviewState>,
    outcome: Outcome,
    now: Timestamp,
) -> ReviewState {
    let level = current.map_or(0, |state| state.level);
    let (level, delay) = match outcome.class() {
        OutcomeClass::Wrong => (0, WRONG_DELAY),
        OutcomeClass::Vague => (1, VAGUE_DELAY),
        OutcomeClass::Correct => {
            let delay = if level >= MASTERED_LEVEL {
                MASTERED_DELAY
            } else {
                CORRECT_DELAY
            };
            (MASTERED_LEVEL.max(level.saturating_add(1)), delay)
        }
    };
    ReviewState {
        next_review_at: now.plus(delay),
        level,
    }
}
