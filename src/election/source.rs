use std::path::PathBuf;

use log::info;

use crate::{config::SeatTable, error::Error};
use super::{Election, IngestReport};

/// Where an election's results come from.
pub trait ResultSource: Send + Sync {
    /// Human-readable origin, used in diagnostics.
    fn describe(&self) -> String;

    /// Load the whole election. A source that cannot be read at all, or that
    /// yields no races, fails with `Error::DataUnavailable`.
    fn load(&self, seats: &SeatTable) -> Result<(Election, IngestReport), Error>;
}

/// Result CSV on disk.
#[derive(Debug, Clone)]
pub struct CsvFile(pub PathBuf);

/// Result CSV already in memory.
#[derive(Debug, Clone)]
pub struct CsvText(pub String);

/// The synthetic dataset; `seed: None` draws from the thread RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleSource {
    pub seed: Option<u64>,
}

fn non_empty(loaded: (Election, IngestReport)) -> Result<(Election, IngestReport), Error> {
    if loaded.0.is_empty() {
        return Err(Error::DataUnavailable { what: "results", reason: "no usable result rows".into() });
    }
    Ok(loaded)
}

impl ResultSource for CsvFile {
    fn describe(&self) -> String { self.0.display().to_string() }

    fn load(&self, seats: &SeatTable) -> Result<(Election, IngestReport), Error> {
        info!("[election::source] reading results from {}", self.0.display());
        let loaded = Election::from_csv_path(&self.0, seats)
            .map_err(|e| Error::unavailable("results", e))?;
        non_empty(loaded)
    }
}

impl ResultSource for CsvText {
    fn describe(&self) -> String { "<inline csv>".to_string() }

    fn load(&self, seats: &SeatTable) -> Result<(Election, IngestReport), Error> {
        let loaded = Election::from_csv_str(&self.0, seats)
            .map_err(|e| Error::unavailable("results", e))?;
        non_empty(loaded)
    }
}

impl ResultSource for SampleSource {
    fn describe(&self) -> String { "<sample data>".to_string() }

    fn load(&self, _seats: &SeatTable) -> Result<(Election, IngestReport), Error> {
        let election = match self.seed {
            Some(seed) => Election::sample_seeded(seed),
            None => Election::sample(),
        };
        let rows = election.races.iter().map(|race| race.len()).sum();
        Ok((election, IngestReport { rows_read: rows, rows_used: rows, warnings: Vec::new() }))
    }
}
