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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::library::Library;
use crate::study::Study;

/// Name of the progress database in a collection directory.
const DATABASE_FILE: &str = "progress.db";

/// A collection directory: its books, its configuration, and the database
/// holding review progress for every book.
pub struct Collection {
    pub config: Config,
    pub library: Library,
    pub db: Database,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory = resolve_directory(directory)?;

        let config = Config::load(&directory)?;

        let db_path: PathBuf = directory.join(DATABASE_FILE);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let db: Database = Database::new(db_path)?;

        let library = Library::new(directory);

        Ok(Self {
            config,
            library,
            db,
        })
    }

    /// Select a book for study.
    pub fn open_book(&self, book_id: &str) -> Fallible<Study<&Database>> {
        let cards = self.library.get_cards(book_id)?;
        Ok(Study::open(book_id, cards, &self.db))
    }
}

/// The canonical path of a collection directory, defaulting to the current
/// directory.
pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if directory.exists() {
        Ok(directory.canonicalize()?)
    } else {
        fail("directory does not exist.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::create_tmp_copy_of_test_directory;
    use crate::types::outcome::Outcome;

    #[test]
    fn test_non_existent_directory() {
        let result = Collection::new(Some("./derpherp".to_string()));
        let err = result.err().map(|e| e.to_string());
        assert_eq!(err, Some("error: directory does not exist.".to_string()));
    }

    #[test]
    fn test_open_book() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let coll = Collection::new(Some(dir.path().display().to_string()))?;
        assert_eq!(coll.config.session.flashcards, 2);
        let study = coll.open_book("shanghanlun")?;
        assert_eq!(study.cards().len(), 5);
        assert_eq!(study.progress().len(), 0);
        Ok(())
    }

    #[test]
    fn test_progress_survives_reopening() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        let path = dir.path().display().to_string();
        {
            let coll = Collection::new(Some(path.clone()))?;
            let mut study = coll.open_book("shanghanlun")?;
            study.record_result("shl-2", Outcome::Vague);
        }
        let coll = Collection::new(Some(path))?;
        let study = coll.open_book("shanghanlun")?;
        assert_eq!(study.progress().get("shl-2").map(|s| s.level), Some(1));
        Ok(())
    }
}
