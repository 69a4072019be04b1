#![doc = "Precinct-level election results on boundary geometry"]
mod boundary;
mod config;
mod dashboard;
mod election;
mod error;
mod io;
mod render;
mod view;

#[doc(inline)]
pub use boundary::{
    in_jurisdiction, precinct_number, BoundaryFeature, BoundaryReport, BoundarySet, BoundarySource,
    GeoJsonFile, GeoJsonText, GeometryKind,
};

#[cfg(feature = "download")]
#[doc(inline)]
pub use boundary::GeoJsonUrl;

#[doc(inline)]
pub use config::{Canvas, Config, GeoBounds, Jurisdiction, SeatMapping, SeatTable, ZoomConfig};

#[doc(inline)]
pub use dashboard::{Dashboard, LoadOutcome, MapType};

#[doc(inline)]
pub use election::{
    CandidateTotal, CandidateVotes, CsvFile, CsvText, Election, IngestReport, IngestWarning,
    PrecinctResult, RaceOverview, RaceResult, ResultSource, SampleSource,
};

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use render::{
    bounding_window, precinct_color, render_geographic, render_grid, turnout_color, winner_color,
    Label, MatchReport, Scene, SceneKind, ScreenTransform, Shape, Stroke, BACKGROUND, NO_DATA,
};

#[doc(inline)]
pub use view::{Controller, HitIndex, ViewMode, ViewState};
