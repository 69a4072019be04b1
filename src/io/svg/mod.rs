//! SVG format writing operations for scene export.

mod writer;

pub(crate) use writer::*;
