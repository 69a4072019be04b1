use std::{fmt, str::FromStr};

use anyhow::{bail, Result};
use geo::Coord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Fill by precinct winner.
    #[default]
    Results,
    /// Fill by turnout bucket.
    Turnout,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Results => "results",
            ViewMode::Turnout => "turnout",
        })
    }
}

impl FromStr for ViewMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "results" => Ok(ViewMode::Results),
            "turnout" => Ok(ViewMode::Turnout),
            other => bail!("[view] unknown view mode {other:?} (expected results or turnout)"),
        }
    }
}

/// Zoom, pan, selection and mode of one map view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Uniform scale about the canvas center, kept within the configured zoom range.
    pub zoom: f64,
    /// Pixel offset applied after zoom, unbounded.
    pub pan: Coord<f64>,
    /// Precinct number of the selected result in the active race.
    pub selected: Option<u32>,
    pub mode: ViewMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { zoom: 1.0, pan: Coord::zero(), selected: None, mode: ViewMode::Results }
    }
}
