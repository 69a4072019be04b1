//! IO module for format-specific reading and writing operations.
//!
//! Organized by format rather than domain; the domain types implement their
//! `from_*`/`to_*` methods on top of these helpers.
//!
//! # Format Modules
//!
//! - `csv` - result tables, read as all-text frames
//! - `geojson` - boundary collections
//! - `svg` - scene export
//! - `download` - remote fetch (requires `download` feature)

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod svg;

#[cfg(feature = "download")]
pub(crate) mod download;
