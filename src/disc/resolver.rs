//! Path resolution by walking directory records from the root
//!
//! Paths are slash separated and relative to the root ("folder/sub"); an
//! empty segment stays at the current level, so "" and "/" both name the
//! root. Every step is a linear scan of the current record list and the
//! first record with a matching name wins.

use std::borrow::Cow;

use super::error::{FsError, Result};
use super::filesystem::FileSystem;
use super::record::DirectoryRecord;

pub const PATH_SEPARATOR: char = '/';

impl FileSystem {
    /// Entries of the directory at `path`, "." and ".." included
    pub fn list(&mut self, path: &str) -> Result<Vec<DirectoryRecord>> {
        let location = self.resolve(path)?;
        Ok(self.directory(location)?.to_vec())
    }

    /// Block location of the record list `path` points to
    pub(crate) fn resolve(&mut self, path: &str) -> Result<u32> {
        let mut location = self.descriptor().root_dir_location;
        let case_insensitive = self.options().case_insensitive_paths;

        for segment in path.split(PATH_SEPARATOR) {
            let wanted = normalize_segment(segment, case_insensitive);
            let records = self.directory(location)?;

            let target = find_record(records, &wanted)
                .ok_or_else(|| FsError::PathNotFound(segment.to_string()))?;

            log::debug!("'{}' resolved to sector {}", wanted, target.extent_pos);
            location = target.extent_pos;
        }

        Ok(location)
    }
}

/// Map a caller supplied segment onto the stored name form
pub(crate) fn normalize_segment(segment: &str, case_insensitive: bool) -> Cow<'_, str> {
    if segment.is_empty() {
        Cow::Borrowed(".")
    } else if case_insensitive {
        Cow::Owned(segment.to_lowercase())
    } else {
        Cow::Borrowed(segment)
    }
}

pub(crate) fn find_record<'a>(records: &'a [DirectoryRecord], name: &str) -> Option<&'a DirectoryRecord> {
    records.iter().find(|record| record.name == name)
}
