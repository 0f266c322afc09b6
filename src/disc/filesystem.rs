//! Open handle over an ISO 9660 image
//!
//! Owns the sector reader, the primary volume descriptor read at open time,
//! and the cache of decoded directories.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::cache::DirectoryCache;
use super::descriptor::PrimaryDescriptor;
use super::error::Result;
use super::reader::{ImageReader, SectorReader, SECTOR_SIZE};
use super::record::{decode_directory, DirectoryRecord};

/// Lookup behaviour of an open filesystem
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FsOptions {
    /// Lowercase path segments before comparing them with stored names
    #[serde(default)]
    pub case_insensitive_paths: bool,
}

/// Read-only ISO 9660 filesystem
pub struct FileSystem {
    reader: Box<dyn SectorReader>,
    descriptor: PrimaryDescriptor,
    cache: DirectoryCache,
    options: FsOptions,
}

impl FileSystem {
    /// Directory record lists and file extents are read as one block and
    /// one contiguous run respectively
    pub const SUPPORTS_MULTI_SECTOR_RECORDS: bool = false;

    /// Open an image file with default options
    pub fn open(path: &Path) -> Result<Self> {
        Self::open_with(path, FsOptions::default())
    }

    pub fn open_with(path: &Path, options: FsOptions) -> Result<Self> {
        let reader = ImageReader::open(path)?;
        log::info!("Opening ISO 9660 image {}", path.display());
        Self::from_reader_with(Box::new(reader), options)
    }

    /// Open a filesystem over an arbitrary sector source
    pub fn from_reader(reader: Box<dyn SectorReader>) -> Result<Self> {
        Self::from_reader_with(reader, FsOptions::default())
    }

    pub fn from_reader_with(mut reader: Box<dyn SectorReader>, options: FsOptions) -> Result<Self> {
        let descriptor = PrimaryDescriptor::read_from(reader.as_mut())?;

        log::info!(
            "Volume '{}': {} blocks, root directory at sector {}",
            descriptor.volume_identifier,
            descriptor.volume_size,
            descriptor.root_dir_location
        );

        Ok(Self {
            reader,
            descriptor,
            cache: DirectoryCache::new(),
            options,
        })
    }

    pub fn descriptor(&self) -> &PrimaryDescriptor {
        &self.descriptor
    }

    pub fn options(&self) -> &FsOptions {
        &self.options
    }

    pub fn supports_multi_sector_records(&self) -> bool {
        Self::SUPPORTS_MULTI_SECTOR_RECORDS
    }

    /// Number of directories decoded so far
    pub fn cached_directories(&self) -> usize {
        self.cache.len()
    }

    /// Release the image. Dropping the handle has the same effect.
    pub fn close(mut self) {
        self.cache.clear();
        log::debug!("Closed volume '{}'", self.descriptor.volume_identifier);
    }

    /// Record list stored at `location`, decoded at most once per handle
    pub(crate) fn directory(&mut self, location: u32) -> Result<&[DirectoryRecord]> {
        if self.cache.contains(location) {
            log::debug!("Directory cache hit for sector {}", location);
            return Ok(self.cache.get(location).unwrap_or_default());
        }

        let sector = self.reader.read_sector(location as u64)?;
        let records = decode_directory(&sector, location)?;
        log::debug!("Decoded {} records at sector {}", records.len(), location);

        Ok(self.cache.insert(location, records))
    }

    /// Bytes of an extent, read in one go
    pub(crate) fn read_extent(&mut self, location: u32, size: u32) -> Result<Vec<u8>> {
        let offset = location as u64 * SECTOR_SIZE;
        Ok(self.reader.read_bytes(offset, size as usize)?)
    }
}
