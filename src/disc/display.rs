//! Human-readable rendering of listing fields

use super::record::DirectoryRecord;

const SIZE_UNITS: [&str; 3] = ["K", "M", "G"];

/// Abbreviate a byte count with K/M/G steps of 1000, truncating
pub fn format_size(size: u64) -> String {
    let mut size = size;
    let mut unit = "";

    for next in SIZE_UNITS {
        if size < 1000 {
            break;
        }
        size /= 1000;
        unit = next;
    }

    format!("{}{}", size, unit)
}

/// Columns of one listing row: size, date, time, name
pub fn listing_columns(record: &DirectoryRecord) -> [String; 4] {
    [
        format_size(record.extent_size as u64),
        record.date.format_date(),
        record.date.format_time(),
        record.display_name(),
    ]
}
