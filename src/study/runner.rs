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

use crate::types::outcome::Outcome;
use crate::types::outcome::OutcomeClass;
use crate::types::session::SessionItem;
use crate::types::session::SessionResult;
use crate::types::timestamp::Timestamp;

/// Result of asking the runner to move to the next item.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Advance {
    Advanced,
    Complete,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Complete,
}

/// Walks a session queue front to back and keeps the log of answers.
#[derive(Default)]
pub struct SessionRunner {
    queue: Vec<SessionItem>,
    cursor: usize,
    finished: bool,
    results: Vec<SessionResult>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub queued: usize,
    pub answered: usize,
    pub wrong: usize,
    pub vague: usize,
    pub correct: usize,
}

impl SessionRunner {
    pub fn new(queue: Vec<SessionItem>) -> Self {
        Self {
            queue,
            cursor: 0,
            finished: false,
            results: Vec::new(),
        }
    }

    pub fn queue(&self) -> &[SessionItem] {
        &self.queue
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn results(&self) -> &[SessionResult] {
        &self.results
    }

    pub fn state(&self) -> SessionState {
        if self.finished {
            SessionState::Complete
        } else if self.queue.is_empty() {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    pub fn current_item(&self) -> Option<&SessionItem> {
        self.queue.get(self.cursor)
    }

    /// Move to the next item. At the last item this reports completion and
    /// leaves the cursor where it is; completion is sticky.
    pub fn advance(&mut self) -> Advance {
        if self.cursor + 1 < self.queue.len() {
            self.cursor += 1;
            Advance::Advanced
        } else {
            if !self.finished {
                log::debug!("Session completed");
                self.finished = true;
            }
            Advance::Complete
        }
    }

    /// Log an answer if it is for the card under the cursor. Returns whether
    /// the answer was logged.
    pub fn log_result(&mut self, card_id: &str, outcome: Outcome, recorded_at: Timestamp) -> bool {
        let item = match self.current_item() {
            Some(item) if item.card.id() == card_id => item.clone(),
            _ => return false,
        };
        self.results.push(SessionResult {
            item,
            outcome,
            recorded_at,
        });
        true
    }

    pub fn summary(&self) -> SessionSummary {
        let mut summary = SessionSummary {
            queued: self.queue.len(),
            answered: self.results.len(),
            ..SessionSummary::default()
        };
        for result in &self.results {
            match result.outcome.class() {
                OutcomeClass::Wrong => summary.wrong += 1,
                OutcomeClass::Vague => summary.vague += 1,
                OutcomeClass::Correct => summary.correct += 1,
            }
        }
        summary
    }
}
