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

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::Fallible;

/// A key-value store of text blobs. Knows nothing about scheduling.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any.
    fn load_blob(&self, key: &str) -> Fallible<Option<String>>;

    /// Overwrite the blob stored under `key`.
    fn save_blob(&self, key: &str, blob: &str) -> Fallible<()>;
}

impl<T: BlobStore + ?Sized> BlobStore for &T {
    fn load_blob(&self, key: &str) -> Fallible<Option<String>> {
        (**self).load_blob(key)
    }

    fn save_blob(&self, key: &str, blob: &str) -> Fallible<()> {
        (**self).save_blob(key, blob)
    }
}

/// A blob store that lives in memory and is lost when dropped.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: RefCell<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryBlobStore {
    fn load_blob(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.blobs.borrow().get(key).cloned())
    }

    fn save_blob(&self, key: &str, blob: &str) -> Fallible<()> {
        self.blobs
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}
