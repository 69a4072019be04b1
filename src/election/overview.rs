//! Race-level reductions over precinct results.

use serde::Serialize;

use super::race::{percentage_of, RaceResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateTotal {
    pub name: String,
    pub votes: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RaceOverview {
    pub precincts: usize,
    pub total_votes: u64,
    pub total_ballots: u64,
    pub total_registered: u64,
    pub turnout_rate: f64,
    /// Sorted by votes, descending; equal totals keep legend order.
    pub candidates: Vec<CandidateTotal>,
}

impl RaceOverview {
    pub fn leader(&self) -> Option<&CandidateTotal> { self.candidates.first() }
}

impl RaceResult {
    /// Sum votes, ballots and registrations across every precinct of the race.
    pub fn overview(&self) -> RaceOverview {
        let total_votes = self.precincts.values().map(|p| p.total_votes).sum();
        let total_ballots = self.precincts.values().map(|p| p.ballots_cast).sum();
        let total_registered = self.precincts.values().map(|p| p.registered_voters).sum();

        let mut candidates: Vec<CandidateTotal> = self.candidates.iter()
            .map(|name| {
                let votes = self.precincts.values().map(|p| p.votes_for(name)).sum();
                CandidateTotal { name: name.clone(), votes, percentage: percentage_of(votes, total_votes) }
            })
            .collect();
        candidates.sort_by(|a, b| b.votes.cmp(&a.votes));

        RaceOverview {
            precincts: self.precincts.len(),
            total_votes,
            total_ballots,
            total_registered,
            turnout_rate: percentage_of(total_ballots, total_registered),
            candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::election::{CandidateVotes, PrecinctResult, RaceResult};

    fn add(race: &mut RaceResult, number: u32, ballots: u64, registered: u64, votes: &[(&str, u64)]) {
        race.insert(PrecinctResult {
            precinct_number: number,
            ballots_cast: ballots,
            registered_voters: registered,
            total_votes: votes.iter().map(|(_, v)| v).sum(),
            candidates: votes.iter()
                .map(|(n, v)| CandidateVotes { name: n.to_string(), votes: *v, percentage: 0.0 })
                .collect(),
        });
    }

    #[test]
    fn totals_and_ranking() {
        let mut race = RaceResult::new("Seat 2");
        add(&mut race, 303, 100, 400, &[("Mark Watson", 30), ("Maureen Barnhart", 60)]);
        add(&mut race, 304, 300, 600, &[("Mark Watson", 200), ("Maureen Barnhart", 80)]);

        let overview = race.overview();
        assert_eq!(overview.precincts, 2);
        assert_eq!(overview.total_votes, 370);
        assert_eq!(overview.total_ballots, 400);
        assert_eq!(overview.total_registered, 1000);
        assert_eq!(overview.turnout_rate, 40.0);

        let leader = overview.leader().unwrap();
        assert_eq!(leader.name, "Mark Watson");
        assert_eq!(leader.votes, 230);
        assert_eq!(overview.candidates[1].votes, 140);
    }

    #[test]
    fn ties_keep_legend_order() {
        let mut race = RaceResult::new("Seat 6");
        add(&mut race, 1, 10, 10, &[("Katie Rhyne", 5), ("Rebecca Descombes", 5)]);
        let names: Vec<_> = race.overview().candidates.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Katie Rhyne", "Rebecca Descombes"]);
    }

    #[test]
    fn empty_race_has_zero_rates() {
        let overview = RaceResult::new("Seat 9").overview();
        assert_eq!(overview.turnout_rate, 0.0);
        assert!(overview.leader().is_none());
    }
}
