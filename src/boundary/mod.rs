mod feature;
mod filter;
mod io;
mod set;
mod source;

pub use feature::{precinct_number, BoundaryFeature, GeometryKind};
pub use filter::in_jurisdiction;
pub use set::{BoundaryReport, BoundarySet};
pub use source::{BoundarySource, GeoJsonFile, GeoJsonText};

#[cfg(feature = "download")]
pub use source::GeoJsonUrl;
