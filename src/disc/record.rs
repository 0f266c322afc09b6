//! Directory record decoding
//!
//! A directory's record list lives in a single logical block. Records never
//! cross a block boundary; the unused tail of the block is zero padding, so
//! the first zero length byte ends the list.

use super::date::RecordDate;
use super::error::{FsError, Result};

/// Length of the "." and ".." records that open every record list
pub const DOT_RECORD_LENGTH: u8 = 34;

/// File flag bit marking a directory
pub const FLAG_DIRECTORY: u8 = 0x02;

/// Separator between a file name and its version number ("README.TXT;1")
pub const VERSION_SEPARATOR: char = ';';

// Field offsets within a record
const EXTENT_POS: usize = 2;
const EXTENT_SIZE: usize = 10;
const RECORD_DATE: usize = 18;
const FILE_FLAGS: usize = 25;
const NAME_LENGTH: usize = 32;
const NAME: usize = 33;

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRecord {
    /// On-disk length of this record in bytes
    pub size: u8,
    /// Raw file flags
    pub flag: u8,
    /// Set when the stored name carries a version suffix
    pub is_file: bool,
    /// Lowercased name without version suffix; "." and ".." for the first two records
    pub name: String,
    /// Logical block where the content starts
    pub extent_pos: u32,
    /// Content length in bytes
    pub extent_size: u32,
    pub date: RecordDate,
}

impl DirectoryRecord {
    /// Decode a single record from its byte interval
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() <= NAME {
            return Err(FsError::InvalidData(format!(
                "directory record of {} bytes is too short",
                data.len()
            )));
        }

        let name_length = data[NAME_LENGTH] as usize;
        if NAME + name_length > data.len() {
            return Err(FsError::InvalidData(format!(
                "name of {} bytes overruns a {} byte record",
                name_length,
                data.len()
            )));
        }

        let (name, is_file) = match data[NAME] {
            0 => (".".to_string(), false),
            1 => ("..".to_string(), false),
            _ => decode_name(&data[NAME..NAME + name_length]),
        };

        Ok(Self {
            size: data[0],
            flag: data[FILE_FLAGS],
            is_file,
            name,
            extent_pos: le_u32(&data[EXTENT_POS..]),
            extent_size: le_u32(&data[EXTENT_SIZE..]),
            date: RecordDate::from_bytes(&data[RECORD_DATE..RECORD_DATE + 5]),
        })
    }

    /// Directory bit of the file flags
    pub fn is_directory(&self) -> bool {
        self.flag & FLAG_DIRECTORY != 0
    }

    /// True for the "." and ".." entries
    pub fn is_dot_entry(&self) -> bool {
        self.name == "." || self.name == ".."
    }

    /// Name with a trailing "/" for anything that is not a file
    pub fn display_name(&self) -> String {
        if self.is_file {
            self.name.clone()
        } else {
            format!("{}/", self.name)
        }
    }
}

/// Decode the record list held by one block at `location`
pub fn decode_directory(sector: &[u8], location: u32) -> Result<Vec<DirectoryRecord>> {
    // Not foolproof, but every record list opens with two 34 byte records
    let dot = DOT_RECORD_LENGTH as usize;
    if sector.len() <= dot || sector[0] != DOT_RECORD_LENGTH || sector[dot] != DOT_RECORD_LENGTH {
        return Err(FsError::NotADirectory(location));
    }

    let mut records = Vec::new();
    let mut index = 0;

    while index < sector.len() {
        let length = sector[index] as usize;
        if length == 0 {
            break;
        }

        if index + length > sector.len() {
            return Err(FsError::InvalidData(format!(
                "record at byte {} of sector {} crosses the block boundary",
                index, location
            )));
        }

        records.push(DirectoryRecord::parse(&sector[index..index + length])?);
        index += length;
    }

    Ok(records)
}

/// Lowercase the identifier and strip the ";version" suffix
fn decode_name(bytes: &[u8]) -> (String, bool) {
    let full = String::from_utf8_lossy(bytes).to_lowercase();
    let mut parts = full.split(VERSION_SEPARATOR);
    let name = parts.next().unwrap_or_default().to_string();
    let is_file = parts.next().is_some();
    (name, is_file)
}

fn le_u32(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
