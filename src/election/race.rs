use std::collections::BTreeMap;

use serde::Serialize;

/// One candidate's tally within a precinct.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateVotes {
    pub name: String,
    pub votes: u64,
    /// As reported by the source; informational only.
    pub percentage: f64,
}

/// Results for one race in one precinct. Immutable once ingested.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecinctResult {
    pub precinct_number: u32,
    pub ballots_cast: u64,
    pub registered_voters: u64,
    pub total_votes: u64,
    pub candidates: Vec<CandidateVotes>,
}

impl PrecinctResult {
    /// Ballots cast over registered voters, as a percentage; 0 with no registered voters.
    pub fn turnout_rate(&self) -> f64 {
        if self.registered_voters == 0 { return 0.0 }
        self.ballots_cast as f64 / self.registered_voters as f64 * 100.0
    }

    /// Share of `total_votes` won by the candidate at `index`, recomputed from counts.
    pub fn vote_share(&self, index: usize) -> Option<f64> {
        self.candidates.get(index).map(|c| percentage_of(c.votes, self.total_votes))
    }

    /// Candidate with the strictly greatest vote count; ties go to the first listed.
    pub fn winner(&self) -> Option<&CandidateVotes> {
        let mut iter = self.candidates.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, c| if c.votes > best.votes { c } else { best }))
    }

    /// Votes for `name` in this precinct, 0 if the candidate is not listed.
    pub fn votes_for(&self, name: &str) -> u64 {
        self.candidates.iter()
            .filter(|c| c.name == name)
            .map(|c| c.votes)
            .sum()
    }
}

/// `part / whole * 100`, or 0 when `whole` is 0.
#[inline]
pub(crate) fn percentage_of(part: u64, whole: u64) -> f64 {
    if whole == 0 { 0.0 } else { part as f64 / whole as f64 * 100.0 }
}

/// All precinct results for one contested seat.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceResult {
    pub seat: String,
    /// Display/legend order.
    pub candidates: Vec<String>,
    pub precincts: BTreeMap<u32, PrecinctResult>,
}

impl RaceResult {
    pub fn new(seat: impl Into<String>) -> Self {
        Self { seat: seat.into(), candidates: Vec::new(), precincts: BTreeMap::new() }
    }

    #[inline] pub fn len(&self) -> usize { self.precincts.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.precincts.is_empty() }

    #[inline] pub fn get(&self, precinct: u32) -> Option<&PrecinctResult> { self.precincts.get(&precinct) }

    #[inline] pub fn contains(&self, precinct: u32) -> bool { self.precincts.contains_key(&precinct) }

    /// Precinct numbers in ascending order.
    pub fn precinct_numbers(&self) -> impl Iterator<Item = u32> + '_ { self.precincts.keys().copied() }

    /// Add a precinct result, registering any new candidate names.
    /// Returns false (and changes nothing) if the precinct is already present.
    pub fn insert(&mut self, result: PrecinctResult) -> bool {
        if self.precincts.contains_key(&result.precinct_number) { return false }
        for candidate in &result.candidates {
            if !self.candidates.iter().any(|name| *name == candidate.name) {
                self.candidates.push(candidate.name.clone());
            }
        }
        self.precincts.insert(result.precinct_number, result);
        true
    }
}

/// Every race of one election cycle, in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Election {
    pub races: Vec<RaceResult>,
}

impl Election {
    pub fn race(&self, seat: &str) -> Option<&RaceResult> {
        self.races.iter().find(|race| race.seat == seat)
    }

    pub fn seats(&self) -> impl Iterator<Item = &str> + '_ {
        self.races.iter().map(|race| race.seat.as_str())
    }

    #[inline] pub fn is_empty(&self) -> bool { self.races.is_empty() }

    pub(crate) fn race_mut_or_insert(&mut self, seat: &str) -> &mut RaceResult {
        let idx = match self.races.iter().position(|race| race.seat == seat) {
            Some(idx) => idx,
            None => {
                self.races.push(RaceResult::new(seat));
                self.races.len() - 1
            }
        };
        &mut self.races[idx]
    }
}
