//! Decoded record lists keyed by block location
//!
//! Entries are never invalidated: the image is opened read-only and the
//! cache lives exactly as long as its `FileSystem`.

use std::collections::HashMap;

use super::record::DirectoryRecord;

#[derive(Debug, Default)]
pub struct DirectoryCache {
    entries: HashMap<u32, Vec<DirectoryRecord>>,
}

impl DirectoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, location: u32) -> Option<&[DirectoryRecord]> {
        self.entries.get(&location).map(Vec::as_slice)
    }

    /// Store a decoded list and hand back the cached copy
    pub fn insert(&mut self, location: u32, records: Vec<DirectoryRecord>) -> &[DirectoryRecord] {
        self.entries.entry(location).or_insert(records).as_slice()
    }

    pub fn contains(&self, location: u32) -> bool {
        self.entries.contains_key(&location)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
