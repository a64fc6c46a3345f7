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
use serde_json::Value;

/// A study item from a book. Cards are never mutated after loading.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within a book.
    id: String,
    #[serde(default)]
    front: String,
    #[serde(default)]
    back: String,
    /// Multiple-choice payload. Its presence makes the card eligible for
    /// choice exercises; the contents are for the UI to interpret.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    choice: Option<Value>,
    /// Fill-in-the-blank payload. Gates fill exercises.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fill: Option<Value>,
}

impl Card {
    #[cfg(test)]
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
            choice: None,
            fill: None,
        }
    }

    #[cfg(test)]
    pub fn with_choice(mut self, choice: Value) -> Self {
        self.choice = Some(choice);
        self
    }

    #[cfg(test)]
    pub fn with_fill(mut self, fill: Value) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn front(&self) -> &str {
        &self.front
    }

    pub fn has_choice(&self) -> bool {
        // An explicit `null` payload counts as absent.
        self.choice.as_ref().is_some_and(|v| !v.is_null())
    }

    pub fn has_fill(&self) -> bool {
        self.fill.as_ref().is_some_and(|v| !v.is_null())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_minimal() {
        let card: Card = serde_json::from_str(r#"{"id": "1"}"#).unwrap();
        assert_eq!(card.id(), "1");
        assert_eq!(card.front(), "");
        assert!(!card.has_choice());
        assert!(!card.has_fill());
    }

    #[test]
    fn test_payload_gates() {
        let card = Card::new("1", "front", "back")
            .with_choice(json!({"options": ["a", "b"], "answer": 0}))
            .with_fill(json!("text"));
        assert!(card.has_choice());
        assert!(card.has_fill());
    }

    #[test]
    fn test_null_payload_is_absent() {
        let card: Card =
            serde_json::from_str(r#"{"id": "1", "choice": null, "fill": null}"#).unwrap();
        assert!(!card.has_choice());
        assert!(!card.has_fill());
    }
}
