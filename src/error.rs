//! Top-level failure conditions surfaced to callers.
//!
//! Row-level problems (bad numbers, unparseable precincts, unmatched features) are
//! never errors; they are collected in the ingest and match reports instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A result table or boundary collection could not be read at all.
    #[error("{what} unavailable: {reason}")]
    DataUnavailable { what: &'static str, reason: String },

    /// The boundary collection loaded, but nothing belongs to the jurisdiction.
    #[error("no boundary features matched jurisdiction {jurisdiction:?}")]
    NoMatchingJurisdiction { jurisdiction: String },

    /// No coordinate of any matched feature survived validation.
    #[error("invalid geometry: no valid coordinates for precincts with results")]
    InvalidGeometry,

    /// A scene was requested before any race was made active.
    #[error("no active race")]
    NoActiveRace,
}

impl Error {
    /// Wrap an IO/parse failure chain as `DataUnavailable`.
    pub(crate) fn unavailable(what: &'static str, err: anyhow::Error) -> Self {
        Error::DataUnavailable { what, reason: format!("{err:#}") }
    }

    /// Whether the failure should switch the map to the grid layout.
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Error::DataUnavailable { .. } | Error::NoMatchingJurisdiction { .. })
    }
}
