//! Sector reader trait and the positioned-read implementation for plain images

use std::fs::File;
use std::io::{self, BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Logical block size of an ISO 9660 volume
pub const SECTOR_SIZE: u64 = 2048;

/// Upper bound on the buffer reserved ahead of a read; longer reads grow as
/// data actually arrives
const MAX_PREALLOCATION: usize = 1024 * 1024;

/// Size of the reserved system area preceding the first volume descriptor
pub const SYSTEM_AREA_SIZE: u64 = 16 * SECTOR_SIZE;

/// Trait for positioned reads against a disc image
pub trait SectorReader {
    /// Read exactly `length` bytes at an absolute byte offset
    fn read_bytes(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, io::Error>;

    /// Read a single logical block
    fn read_sector(&mut self, lba: u64) -> Result<Vec<u8>, io::Error> {
        self.read_bytes(lba * SECTOR_SIZE, SECTOR_SIZE as usize)
    }
}

/// Sector reader over any seekable byte source holding a cooked (2048-byte) image
pub struct ImageReader<R> {
    inner: R,
}

impl ImageReader<BufReader<File>> {
    /// Open an image file from disk
    pub fn open(path: &Path) -> Result<Self, io::Error> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: Read + Seek> ImageReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: Read + Seek> SectorReader for ImageReader<R> {
    fn read_bytes(&mut self, offset: u64, length: usize) -> Result<Vec<u8>, io::Error> {
        self.inner.seek(SeekFrom::Start(offset))?;
        let mut buffer = Vec::with_capacity(length.min(MAX_PREALLOCATION));
        (&mut self.inner).take(length as u64).read_to_end(&mut buffer)?;

        if buffer.len() < length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("read {} of {} bytes at offset {}", buffer.len(), length, offset),
            ));
        }
        Ok(buffer)
    }
}
