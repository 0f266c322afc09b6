//! ISO 9660 Primary Volume Descriptor parsing
//!
//! The PVD is the first descriptor after the system area (sector 16, byte
//! offset 32768). Every field is read at its fixed ECMA-119 offset through
//! the typed field reader.

use std::io::{self, ErrorKind};

use super::date::DecDateTime;
use super::error::{FsError, Result};
use super::field::{read_field, FieldType, FieldValue};
use super::reader::SectorReader;

/// Standard identifier for ISO 9660 volume descriptors
pub const ISO9660_IDENTIFIER: &str = "CD001";

/// Volume descriptor type for Primary Volume Descriptor
pub const PVD_TYPE: u8 = 1;

/// Volume-level metadata, read once when an image is opened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryDescriptor {
    /// Descriptor type code (1 for a primary descriptor)
    pub volume_type: u8,
    /// Total logical blocks in the volume
    pub volume_size: u32,
    pub logical_block_size: u16,
    /// Not used for lookups
    pub path_table_size: u32,
    /// Not used for lookups
    pub path_table_location: u32,
    /// Logical block of the root directory's record list
    pub root_dir_location: u32,
    pub system_identifier: String,
    pub volume_identifier: String,
    pub volume_set_identifier: String,
    pub publisher: String,
    pub data_preparer: String,
    pub application_identifier: String,
    pub creation_date: DecDateTime,
}

impl PrimaryDescriptor {
    /// Validate the standard identifier and read the descriptor fields
    pub fn read_from<S: SectorReader + ?Sized>(reader: &mut S) -> Result<Self> {
        // A short image reads as end-of-data here, which is just as invalid
        let identifier = read_field(reader, 1, 5, FieldType::StrA)?.and_then(FieldValue::into_text);
        if identifier.as_deref() != Some(ISO9660_IDENTIFIER) {
            return Err(FsError::InvalidFormat);
        }

        let volume_type = int_field(reader, 0, 1, FieldType::U8)? as u8;
        if volume_type != PVD_TYPE {
            log::warn!("Descriptor type {} is not a primary volume descriptor", volume_type);
        }

        Ok(Self {
            volume_type,
            system_identifier: text_field(reader, 8, 32, FieldType::StrA)?,
            volume_identifier: text_field(reader, 40, 32, FieldType::StrD)?,
            volume_size: int_field(reader, 80, 8, FieldType::U32Both)?,
            logical_block_size: int_field(reader, 128, 4, FieldType::U16Both)? as u16,
            path_table_size: int_field(reader, 132, 8, FieldType::U32Both)?,
            path_table_location: int_field(reader, 140, 4, FieldType::U32Le)?,
            // Extent location inside the root directory record at offset 156
            root_dir_location: int_field(reader, 158, 8, FieldType::U32Both)?,
            volume_set_identifier: text_field(reader, 190, 128, FieldType::StrD)?,
            publisher: text_field(reader, 318, 128, FieldType::StrA)?,
            data_preparer: text_field(reader, 446, 128, FieldType::StrA)?,
            application_identifier: text_field(reader, 574, 128, FieldType::StrA)?,
            creation_date: timestamp_field(reader, 813)?,
        })
    }
}

fn required<S: SectorReader + ?Sized>(
    reader: &mut S,
    offset: u64,
    length: usize,
    field_type: FieldType,
) -> Result<FieldValue> {
    read_field(reader, offset, length, field_type)?.ok_or_else(|| {
        FsError::Io(io::Error::new(
            ErrorKind::UnexpectedEof,
            format!("volume descriptor truncated at offset {}", offset),
        ))
    })
}

fn int_field<S: SectorReader + ?Sized>(
    reader: &mut S,
    offset: u64,
    length: usize,
    field_type: FieldType,
) -> Result<u32> {
    required(reader, offset, length, field_type)?
        .into_int()
        .ok_or(FsError::MalformedField { field_type, length })
}

fn text_field<S: SectorReader + ?Sized>(
    reader: &mut S,
    offset: u64,
    length: usize,
    field_type: FieldType,
) -> Result<String> {
    required(reader, offset, length, field_type)?
        .into_text()
        .ok_or(FsError::MalformedField { field_type, length })
}

fn timestamp_field<S: SectorReader + ?Sized>(reader: &mut S, offset: u64) -> Result<DecDateTime> {
    let field_type = FieldType::DecDateTime;
    let length = DecDateTime::LENGTH;
    required(reader, offset, length, field_type)?
        .into_timestamp()
        .ok_or(FsError::MalformedField { field_type, length })
}
