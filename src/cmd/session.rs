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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::types::session::SessionConfig;

/// Item counts given on the command line. Missing counts fall back to the
/// collection's configuration.
pub struct SessionCounts {
    pub flashcards: Option<usize>,
    pub choices: Option<usize>,
    pub fills: Option<usize>,
}

impl SessionCounts {
    fn or(self, defaults: &SessionConfig) -> SessionConfig {
        SessionConfig {
            flashcards: self.flashcards.unwrap_or(defaults.flashcards),
            choices: self.choices.unwrap_or(defaults.choices),
            fills: self.fills.unwrap_or(defaults.fills),
        }
    }
}

/// Build a session for a book and print its queue as JSON.
pub fn print_session(
    directory: Option<String>,
    book_id: &str,
    counts: SessionCounts,
) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let config = counts.or(&coll.config.session);
    let mut study = coll.open_book(book_id)?;
    let queue = study.start_session(&config);
    let json = serde_json::to_string_pretty(queue)?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_counts_fall_back_to_config() {
        let counts = SessionCounts {
            flashcards: Some(1),
            choices: None,
            fills: Some(0),
        };
        let defaults = SessionConfig {
            flashcards: 10,
            choices: 4,
            fills: 5,
        };
        assert_eq!(
            counts.or(&defaults),
            SessionConfig {
                flashcards: 1,
                choices: 4,
                fills: 0,
            }
        );
    }

    #[test]
    fn test_print_session() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let counts = SessionCounts {
            flashcards: None,
            choices: None,
            fills: None,
        };
        print_session(Some(dir.path().display().to_string()), "shanghanlun", counts)?;
        Ok(())
    }
}
