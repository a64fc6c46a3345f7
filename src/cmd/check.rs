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

use crate::collection::resolve_directory;
use crate::config::Config;
use crate::error::Fallible;
use crate::library::Library;

/// Validate the configuration and every book. Leaves the directory untouched.
pub fn check_collection(directory: Option<String>) -> Fallible<()> {
    let directory = resolve_directory(directory)?;
    Config::load(&directory)?;
    let library = Library::new(directory);
    for book_id in library.book_ids()? {
        let cards = library.get_cards(&book_id)?;
        log::debug!("{book_id}: {} cards.", cards.len());
    }
    println!("ok");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use super::check_collection;
    use crate::error::Fallible;
    use crate::helper::create_tmp_copy_of_test_directory;

    #[test]
    fn test_non_existent_directory() {
        assert!(check_collection(Some("./derpherp".to_string())).is_err());
    }

    #[test]
    fn test_directory() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        assert!(check_collection(Some(dir.path().display().to_string())).is_ok());
        Ok(())
    }

    #[test]
    fn test_does_not_create_database() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        check_collection(Some(dir.path().display().to_string()))?;
        assert!(!dir.path().join("progress.db").exists());
        Ok(())
    }

    #[test]
    fn test_broken_book() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        write(dir.path().join("wenbing.json"), r#"[{"id": "1"}, {"id": "1"}]"#)?;
        assert!(check_collection(Some(dir.path().display().to_string())).is_err());
        Ok(())
    }

    #[test]
    fn test_broken_config() -> Fallible<()> {
        let dir = create_tmp_copy_of_test_directory()?;
        write(dir.path().join("tcmstudy.toml"), "[clock]\nrefresh_seconds = 0\n")?;
        assert!(check_collection(Some(dir.path().display().to_string())).is_err());
        Ok(())
    }
}
