//! File extraction
//!
//! Files are loaded whole: the extent is one contiguous run starting at
//! `extent_pos` and exactly `extent_size` bytes long.

use std::borrow::Cow;
use std::io;
use std::path::{Path, PathBuf};

use super::error::{FsError, Result};
use super::filesystem::FileSystem;
use super::resolver::{find_record, normalize_segment, PATH_SEPARATOR};

/// Content of a file read from the image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    pub name: String,
    /// Length in bytes
    pub size: u32,
    /// First block of the extent
    pub position: u32,
    pub bytes: Vec<u8>,
}

impl File {
    /// Content as text, with invalid UTF-8 replaced
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Write the content to `dir`, keeping the file's name
    pub fn save_in(&self, dir: &Path) -> io::Result<PathBuf> {
        let target = dir.join(&self.name);
        std::fs::write(&target, &self.bytes)?;
        Ok(target)
    }
}

impl FileSystem {
    /// Read the file at `path` ("folder/readme.txt") into memory.
    ///
    /// The last segment names the file and everything before it is resolved
    /// as a directory path.
    pub fn read_file(&mut self, path: &str) -> Result<File> {
        let (parent, name) = path.rsplit_once(PATH_SEPARATOR).unwrap_or(("", path));
        let wanted = normalize_segment(name, self.options().case_insensitive_paths);

        let location = self.resolve(parent)?;
        let record = find_record(self.directory(location)?, &wanted)
            .cloned()
            .ok_or_else(|| FsError::PathNotFound(name.to_string()))?;

        if record.is_directory() {
            return Err(FsError::IsADirectory(path.to_string()));
        }

        log::debug!(
            "Reading '{}': {} bytes at sector {}",
            record.name,
            record.extent_size,
            record.extent_pos
        );
        let bytes = self.read_extent(record.extent_pos, record.extent_size)?;

        Ok(File {
            name: record.name,
            size: record.extent_size,
            position: record.extent_pos,
            bytes,
        })
    }
}
