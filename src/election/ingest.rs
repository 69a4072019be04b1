//! Result table -> `Election`.
//!
//! Tolerant by construction: missing or unparseable counts read as 0, rows without a
//! usable precinct number or position label are dropped and reported, never fatal.

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use log::{debug, warn};
use regex::Regex;
use serde::Serialize;

use crate::{config::SeatTable, io::csv::StringTable};
use super::race::{percentage_of, CandidateVotes, Election, PrecinctResult};

const POSITION: &[&str] = &["Position", "position"];
const PRECINCT: &[&str] = &["Precinct", "precinct"];
const BALLOTS_CAST: &[&str] = &["BallotsCast", "ballots_cast"];
const REGISTERED_VOTERS: &[&str] = &["RegisteredVoters", "registered_voters"];
const TOTAL_VOTES: &[&str] = &["TotalVotes", "total_votes"];

static CANDIDATE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Candidate(\d+)(Name|Votes|Percentage)$").expect("static regex")
});

/// Anything the ingester tolerated rather than failed on. Line numbers are 1-based
/// file lines (the header is line 1).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum IngestWarning {
    MissingPosition { line: usize },
    BadPrecinct { line: usize, value: String },
    DuplicatePrecinct { line: usize, seat: String, precinct: u32 },
    UnmappedPosition { position: String },
}

impl fmt::Display for IngestWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestWarning::MissingPosition { line } =>
                write!(f, "line {line}: no position label, row dropped"),
            IngestWarning::BadPrecinct { line, value } =>
                write!(f, "line {line}: unparseable precinct {value:?}, row dropped"),
            IngestWarning::DuplicatePrecinct { line, seat, precinct } =>
                write!(f, "line {line}: precinct {precinct} repeated for {seat}, row ignored"),
            IngestWarning::UnmappedPosition { position } =>
                write!(f, "position {position:?} has no seat mapping, using it verbatim"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IngestReport {
    pub rows_read: usize,
    pub rows_used: usize,
    pub warnings: Vec<IngestWarning>,
}

impl IngestReport {
    fn warn(&mut self, warning: IngestWarning) {
        warn!("[election::ingest] {warning}");
        self.warnings.push(warning);
    }
}

/// Column indices of one candidate slot.
#[derive(Debug, Clone, Copy, Default)]
struct CandidateSlot {
    name: Option<usize>,
    votes: Option<usize>,
    percentage: Option<usize>,
}

/// Discover `Candidate{N}{Name,Votes,Percentage}` columns, ordered by `N`.
fn candidate_slots(headers: &[String]) -> Vec<CandidateSlot> {
    let mut slots: BTreeMap<u32, CandidateSlot> = BTreeMap::new();
    for (idx, header) in headers.iter().enumerate() {
        let Some(caps) = CANDIDATE_HEADER.captures(header) else { continue };
        let Ok(n) = caps[1].parse::<u32>() else { continue };
        let slot = slots.entry(n).or_default();
        match &caps[2] {
            "Name" => slot.name = Some(idx),
            "Votes" => slot.votes = Some(idx),
            _ => slot.percentage = Some(idx),
        }
    }
    slots.into_values().filter(|slot| slot.name.is_some()).collect()
}

/// Leading integer of `s` after trimming (`"303"`, `"303.0"`, `"+12 votes"`); None without digits.
pub(crate) fn leading_int(s: &str) -> Option<u64> {
    let s = s.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

#[inline]
fn count(s: &str) -> u64 { leading_int(s).unwrap_or(0) }

fn percentage(s: &str) -> Option<f64> {
    s.trim().trim_end_matches('%').trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

pub(crate) fn election_from_table(table: &StringTable, seats: &SeatTable) -> (Election, IngestReport) {
    let mut election = Election::default();
    let mut report = IngestReport { rows_read: table.height(), ..Default::default() };

    let position_col = table.column_index(POSITION);
    let precinct_col = table.column_index(PRECINCT);
    let ballots_col = table.column_index(BALLOTS_CAST);
    let registered_col = table.column_index(REGISTERED_VOTERS);
    let total_col = table.column_index(TOTAL_VOTES);
    let slots = candidate_slots(table.headers());
    debug!("[election::ingest] {} rows, {} candidate slots", table.height(), slots.len());

    let mut unmapped: Vec<String> = Vec::new();

    for row in 0..table.height() {
        let line = row + 2;

        let position = table.cell(row, position_col);
        if position.is_empty() {
            report.warn(IngestWarning::MissingPosition { line });
            continue;
        }

        let raw_precinct = table.cell(row, precinct_col);
        let precinct_number = match leading_int(raw_precinct).and_then(|n| u32::try_from(n).ok()) {
            Some(n) if n > 0 => n,
            _ => {
                report.warn(IngestWarning::BadPrecinct { line, value: raw_precinct.to_string() });
                continue;
            }
        };

        let seat = match seats.lookup(position) {
            Some(seat) => seat.to_string(),
            None => {
                if !unmapped.iter().any(|p| p == position) {
                    unmapped.push(position.to_string());
                    report.warn(IngestWarning::UnmappedPosition { position: position.to_string() });
                }
                position.to_string()
            }
        };

        let total_votes = count(table.cell(row, total_col));
        let candidates = slots.iter()
            .filter_map(|slot| {
                let name = table.cell(row, slot.name);
                if name.is_empty() { return None }
                let votes = count(table.cell(row, slot.votes));
                let percentage = percentage(table.cell(row, slot.percentage))
                    .unwrap_or_else(|| percentage_of(votes, total_votes));
                Some(CandidateVotes { name: name.to_string(), votes, percentage })
            })
            .collect();

        let result = PrecinctResult {
            precinct_number,
            ballots_cast: count(table.cell(row, ballots_col)),
            registered_voters: count(table.cell(row, registered_col)),
            total_votes,
            candidates,
        };

        if election.race_mut_or_insert(&seat).insert(result) {
            report.rows_used += 1;
        } else {
            report.warn(IngestWarning::DuplicatePrecinct { line, seat, precinct: precinct_number });
        }
    }

    (election, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::csv::read_csv_string;

    fn ingest(csv: &str) -> (Election, IngestReport) {
        let df = read_csv_string(csv).unwrap();
        let table = StringTable::from_frame(&df).unwrap();
        election_from_table(&table, &SeatTable::default())
    }

    const HEADER: &str = "Position,Precinct,BallotsCast,RegisteredVoters,TotalVotes,Candidate1Name,Candidate1Votes,Candidate1Percentage,Candidate2Name,Candidate2Votes,Candidate2Percentage";

    #[test]
    fn groups_rows_by_mapped_seat() {
        let csv = format!("{HEADER}\n\
            Position 1,303,96,440,96,Sidney S Thomason,53,55.21,Yessica Hardin-Mercado,43,44.79\n\
            Position 1,304,220,1428,216,Sidney S Thomason,100,46.30,Yessica Hardin-Mercado,116,53.70\n\
            Position 4,303,90,440,80,Nancy Thomas,80,100,,,\n");
        let (election, report) = ingest(&csv);

        assert_eq!(election.seats().collect::<Vec<_>>(), vec!["Seat 1", "Seat 4"]);
        let seat1 = election.race("Seat 1").unwrap();
        assert_eq!(seat1.candidates, vec!["Sidney S Thomason", "Yessica Hardin-Mercado"]);
        let p304 = seat1.get(304).unwrap();
        assert_eq!(p304.ballots_cast, 220);
        assert_eq!(p304.registered_voters, 1428);
        assert_eq!(p304.candidates[1].votes, 116);
        assert_eq!(p304.candidates[1].percentage, 53.70);

        let seat4 = election.race("Seat 4").unwrap();
        assert_eq!(seat4.get(303).unwrap().candidates.len(), 1);
        assert_eq!(report.rows_used, 3);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn bad_numbers_default_to_zero_and_bad_precincts_drop() {
        let csv = format!("{HEADER}\n\
            Position 2,abc,10,20,10,Mark Watson,5,,Maureen Barnhart,5,\n\
            Position 2,305,n/a,,10,Mark Watson,x,,Maureen Barnhart,7,\n\
            ,306,1,1,1,Mark Watson,1,,,,\n");
        let (election, report) = ingest(&csv);

        let seat2 = election.race("Seat 2").unwrap();
        assert_eq!(seat2.len(), 1);
        let p = seat2.get(305).unwrap();
        assert_eq!(p.ballots_cast, 0);
        assert_eq!(p.registered_voters, 0);
        assert_eq!(p.turnout_rate(), 0.0);
        assert_eq!(p.candidates[0].votes, 0);
        assert_eq!(p.candidates[1].percentage, 70.0);

        assert_eq!(report.warnings, vec![
            IngestWarning::BadPrecinct { line: 2, value: "abc".into() },
            IngestWarning::MissingPosition { line: 4 },
        ]);
    }

    #[test]
    fn unmapped_positions_keep_raw_label_once() {
        let csv = format!("{HEADER}\n\
            Measure 34-1,303,1,1,1,Yes,1,,No,0,\n\
            Measure 34-1,304,1,1,1,Yes,0,,No,1,\n");
        let (election, report) = ingest(&csv);
        assert_eq!(election.seats().collect::<Vec<_>>(), vec!["Measure 34-1"]);
        assert_eq!(report.warnings, vec![IngestWarning::UnmappedPosition { position: "Measure 34-1".into() }]);
    }

    #[test]
    fn duplicate_precinct_keeps_first_row() {
        let csv = format!("{HEADER}\n\
            Position 6,303,10,20,10,Katie Rhyne,6,,Rebecca Descombes,4,\n\
            Position 6,303,99,99,99,Katie Rhyne,1,,Rebecca Descombes,98,\n");
        let (election, report) = ingest(&csv);
        assert_eq!(election.race("Seat 6").unwrap().get(303).unwrap().ballots_cast, 10);
        assert_eq!(report.rows_used, 1);
        assert!(matches!(report.warnings[0], IngestWarning::DuplicatePrecinct { line: 3, precinct: 303, .. }));
    }

    #[test]
    fn candidate_slots_generalize_past_two() {
        let csv = "Position,Precinct,TotalVotes,Candidate3Name,Candidate3Votes,Candidate1Name,Candidate1Votes,Candidate2Name,Candidate2Votes\n\
            Position 1,303,30,C,5,A,15,B,10\n";
        let (election, _) = ingest(csv);
        assert_eq!(election.race("Seat 1").unwrap().candidates, vec!["A", "B", "C"]);
    }

    #[test]
    fn leading_int_is_lenient() {
        assert_eq!(leading_int(" 303 "), Some(303));
        assert_eq!(leading_int("303.0"), Some(303));
        assert_eq!(leading_int("+12"), Some(12));
        assert_eq!(leading_int("W306"), None);
        assert_eq!(leading_int("-4"), None);
        assert_eq!(leading_int(""), None);
    }
}
