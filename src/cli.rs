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

use clap::Parser;

use crate::cmd::check::check_collection;
use crate::cmd::due::print_due;
use crate::cmd::review::record_review;
use crate::cmd::session::SessionCounts;
use crate::cmd::session::print_session;
use crate::cmd::stats::print_book_stats;
use crate::error::Fallible;
use crate::types::outcome::Outcome;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Check that every book in a collection parses.
    Check {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
    },
    /// Print statistics about a book.
    Stats {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The book to report on.
        #[arg(long)]
        book: String,
    },
    /// Print the number of cards due now.
    Due {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The book to report on.
        #[arg(long)]
        book: String,
        /// Keep printing the due count until interrupted.
        #[arg(long)]
        watch: bool,
        /// Also list the due cards.
        #[arg(long)]
        list: bool,
    },
    /// Build a study session and print its queue as JSON.
    Session {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The book to study.
        #[arg(long)]
        book: String,
        /// Number of flashcard items. Defaults to the collection's configuration.
        #[arg(long)]
        flashcards: Option<usize>,
        /// Number of multiple-choice items.
        #[arg(long)]
        choices: Option<usize>,
        /// Number of fill-in-the-blank items.
        #[arg(long)]
        fills: Option<usize>,
    },
    /// Record the outcome of reviewing a card.
    Review {
        /// Path to the collection directory. By default, the current working directory is used.
        directory: Option<String>,
        /// The book the card belongs to.
        #[arg(long)]
        book: String,
        /// The card's id.
        #[arg(long)]
        card: String,
        /// One of: wrong, forgot, vague, correct, mastered.
        #[arg(long)]
        outcome: Outcome,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Check { directory } => check_collection(directory),
        Command::Stats { directory, book } => print_book_stats(directory, &book),
        Command::Due {
            directory,
            book,
            watch,
            list,
        } => print_due(directory, &book, watch, list).await,
        Command::Session {
            directory,
            book,
            flashcards,
            choices,
            fills,
        } => {
            let counts = SessionCounts {
                flashcards,
                choices,
                fills,
            };
            print_session(directory, &book, counts)
        }
        Command::Review {
            directory,
            book,
            card,
            outcome,
        } => record_review(directory, &book, &card, outcome),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Command::command().debug_assert();
    }

    #[test]
    fn test_parse_review() {
        let cli = Command::try_parse_from([
            "tcmstudy", "review", "--book", "neijing", "--card", "nj-1", "--outcome", "forgot",
        ]);
        match cli {
            Ok(Command::Review { outcome, .. }) => assert_eq!(outcome, Outcome::Forgot),
            _ => panic!("Expected review command"),
        }
    }

    #[test]
    fn test_parse_invalid_outcome() {
        let cli = Command::try_parse_from([
            "tcmstudy", "review", "--book", "neijing", "--card", "nj-1", "--outcome", "meh",
        ]);
        assert!(cli.is_err());
    }
}
