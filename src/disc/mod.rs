//! ISO 9660 image reading
//!
//! Parses the primary volume descriptor, walks directory records to resolve
//! slash separated paths, and extracts file contents by extent.

mod cache;
mod date;
mod descriptor;
mod display;
mod error;
mod field;
mod file;
mod filesystem;
mod reader;
mod record;
mod resolver;

#[cfg(test)]
mod test_image;

pub use cache::DirectoryCache;
pub use date::{DecDateTime, RecordDate};
pub use descriptor::{PrimaryDescriptor, ISO9660_IDENTIFIER};
pub use display::{format_size, listing_columns};
pub use error::{FsError, Result};
pub use field::{read_field, FieldType, FieldValue};
pub use file::File;
pub use filesystem::{FileSystem, FsOptions};
pub use reader::{ImageReader, SectorReader, SECTOR_SIZE, SYSTEM_AREA_SIZE};
pub use record::{decode_directory, DirectoryRecord};
pub use resolver::PATH_SEPARATOR;
