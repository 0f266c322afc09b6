//! ISO Reader Library
//!
//! Read-only access to ISO 9660 disc images: volume descriptor parsing,
//! directory listing and file extraction.

pub mod config;
pub mod disc;
