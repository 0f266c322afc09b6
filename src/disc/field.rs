//! Typed field extraction from the volume descriptor area
//!
//! Offsets are relative to the end of the system area, so offset 0 is the
//! first byte of the first volume descriptor.

use std::io::ErrorKind;

use super::date::DecDateTime;
use super::error::{FsError, Result};
use super::reader::{SectorReader, SYSTEM_AREA_SIZE};

/// On-disk encoding of a descriptor field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Single unsigned byte
    U8,
    /// 16-bit little-endian integer
    U16Le,
    /// 32-bit little-endian integer
    U32Le,
    /// 16-bit integer stored little-endian then big-endian
    U16Both,
    /// 32-bit integer stored little-endian then big-endian
    U32Both,
    /// a-characters, decoded as a trimmed string
    StrA,
    /// d-characters, decoded as a trimmed string
    StrD,
    /// 17-byte ASCII digit timestamp with a trailing GMT offset byte
    DecDateTime,
}

/// Decoded field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Int(u32),
    Text(String),
    Timestamp(DecDateTime),
}

impl FieldType {
    /// Whether the value is stored twice, once per byte order
    pub fn is_both_endian(self) -> bool {
        matches!(self, Self::U16Both | Self::U32Both)
    }

    /// Number of bytes actually read for a field of the given on-disk length.
    /// Both-endian fields only read their leading little-endian half.
    pub fn effective_len(self, length: usize) -> usize {
        if self.is_both_endian() {
            length / 2
        } else {
            length
        }
    }

    fn min_len(self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16Le | Self::U16Both => 2,
            Self::U32Le | Self::U32Both => 4,
            Self::StrA | Self::StrD => 0,
            Self::DecDateTime => DecDateTime::LENGTH,
        }
    }

    /// Decode already-sliced bytes (of effective length) into a value
    pub fn decode(self, bytes: &[u8]) -> Result<FieldValue> {
        if bytes.len() < self.min_len() {
            return Err(FsError::MalformedField {
                field_type: self,
                length: bytes.len(),
            });
        }

        let value = match self {
            Self::U8 => FieldValue::Int(bytes[0] as u32),
            Self::U16Le | Self::U16Both => {
                FieldValue::Int(u16::from_le_bytes([bytes[0], bytes[1]]) as u32)
            }
            Self::U32Le | Self::U32Both => {
                FieldValue::Int(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
            }
            Self::StrA | Self::StrD => FieldValue::Text(trimmed_string(bytes)),
            Self::DecDateTime => FieldValue::Timestamp(DecDateTime::parse(bytes)),
        };

        Ok(value)
    }
}

impl FieldValue {
    pub fn into_int(self) -> Option<u32> {
        match self {
            Self::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_timestamp(self) -> Option<DecDateTime> {
        match self {
            Self::Timestamp(value) => Some(value),
            _ => None,
        }
    }
}

/// Read and decode one field. Returns `Ok(None)` when the image ends before
/// the field does, which callers treat as end-of-data rather than a value.
pub fn read_field<S: SectorReader + ?Sized>(
    reader: &mut S,
    offset: u64,
    length: usize,
    field_type: FieldType,
) -> Result<Option<FieldValue>> {
    let length = field_type.effective_len(length);

    let bytes = match reader.read_bytes(SYSTEM_AREA_SIZE + offset, length) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    field_type.decode(&bytes).map(Some)
}

/// Extract a string from a byte slice, trimming surrounding spaces and nulls
pub fn trimmed_string(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_matches(|c: char| c.is_whitespace() || c == '\0')
        .to_string()
}
