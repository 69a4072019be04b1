mod ingest;
mod io;
mod overview;
mod race;
mod sample;
mod source;

pub use ingest::{IngestReport, IngestWarning};
pub use overview::{CandidateTotal, RaceOverview};
pub use race::{CandidateVotes, Election, PrecinctResult, RaceResult};
pub use source::{CsvFile, CsvText, ResultSource, SampleSource};

