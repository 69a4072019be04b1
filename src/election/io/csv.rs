use std::path::Path;

use anyhow::Result;

use crate::{
    config::SeatTable,
    election::{ingest::election_from_table, Election, IngestReport},
    io::csv::{read_csv, read_csv_string, StringTable},
};

impl Election {
    /// Read an election from a result CSV at `path`.
    /// Only an unreadable file is an error; row-level problems land in the report.
    pub fn from_csv_path(path: &Path, seats: &SeatTable) -> Result<(Self, IngestReport)> {
        let table = StringTable::from_frame(&read_csv(path)?)?;
        Ok(election_from_table(&table, seats))
    }

    /// Read an election from CSV text.
    pub fn from_csv_str(csv: &str, seats: &SeatTable) -> Result<(Self, IngestReport)> {
        let table = StringTable::from_frame(&read_csv_string(csv)?)?;
        Ok(election_from_table(&table, seats))
    }
}
