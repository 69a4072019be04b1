use std::path::PathBuf;

use log::info;

use crate::{config::Config, error::Error, io::geojson::{read_geojson, read_geojson_str}};
use super::{BoundaryReport, BoundarySet};

/// Where a boundary collection comes from.
pub trait BoundarySource: Send + Sync {
    fn describe(&self) -> String;

    /// Load and jurisdiction-filter the collection.
    fn load(&self, config: &Config) -> Result<(BoundarySet, BoundaryReport), Error>;
}

/// GeoJSON file on disk.
#[derive(Debug, Clone)]
pub struct GeoJsonFile(pub PathBuf);

/// GeoJSON document already in memory.
#[derive(Debug, Clone)]
pub struct GeoJsonText(pub String);

/// GeoJSON fetched over HTTP(S).
#[cfg(feature = "download")]
#[derive(Debug, Clone)]
pub struct GeoJsonUrl(pub String);

impl BoundarySource for GeoJsonFile {
    fn describe(&self) -> String { self.0.display().to_string() }

    fn load(&self, config: &Config) -> Result<(BoundarySet, BoundaryReport), Error> {
        info!("[boundary::source] reading boundaries from {}", self.0.display());
        let value = read_geojson(&self.0).map_err(|e| Error::unavailable("boundaries", e))?;
        BoundarySet::from_geojson_value(&value, config)
    }
}

impl BoundarySource for GeoJsonText {
    fn describe(&self) -> String { "<inline geojson>".to_string() }

    fn load(&self, config: &Config) -> Result<(BoundarySet, BoundaryReport), Error> {
        let value = read_geojson_str(&self.0).map_err(|e| Error::unavailable("boundaries", e))?;
        BoundarySet::from_geojson_value(&value, config)
    }
}

#[cfg(feature = "download")]
impl BoundarySource for GeoJsonUrl {
    fn describe(&self) -> String { self.0.clone() }

    fn load(&self, config: &Config) -> Result<(BoundarySet, BoundaryReport), Error> {
        info!("[boundary::source] fetching boundaries from {}", self.0);
        let text = crate::io::download::fetch_text(&self.0).map_err(|e| Error::unavailable("boundaries", e))?;
        let value = read_geojson_str(&text).map_err(|e| Error::unavailable("boundaries", e))?;
        BoundarySet::from_geojson_value(&value, config)
    }
}
