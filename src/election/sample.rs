//! Synthetic stand-in dataset used when the real result table is unavailable.
//! The shape (seats, candidates, precincts) is fixed; the counts are random.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::race::{percentage_of, CandidateVotes, Election, PrecinctResult, RaceResult};

pub(crate) const SAMPLE_PRECINCTS: [u32; 46] = [
    303, 304, 307, 308, 309, 310, 313, 314, 315, 316, 317, 318, 319, 322, 326, 327,
    328, 329, 330, 332, 333, 334, 335, 336, 337, 338, 341, 343, 344, 345, 346, 356,
    369, 370, 373, 374, 382, 422, 426, 430, 431, 439, 440, 446, 450, 451,
];

const SAMPLE_RACES: &[(&str, &[&str])] = &[
    ("Seat 1", &["Sidney S Thompson", "Yesenia Hardin-Mercado"]),
    ("Seat 2", &["Mark Watson", "Maureen Barnhart"]),
    ("Seat 4", &["Nancy Thomas"]),
    ("Seat 6", &["Katie Rhyne", "Rebecca Descombes"]),
];

impl Election {
    /// Generate the sample election from the thread RNG.
    pub fn sample() -> Self {
        Self::sample_with(&mut rand::rng())
    }

    /// Generate the sample election reproducibly.
    pub fn sample_seeded(seed: u64) -> Self {
        Self::sample_with(&mut StdRng::seed_from_u64(seed))
    }

    pub fn sample_with(rng: &mut impl Rng) -> Self {
        let races = SAMPLE_RACES.iter()
            .map(|&(seat, names)| {
                let mut race = RaceResult::new(seat);
                race.candidates = names.iter().map(|s| s.to_string()).collect();
                for &number in &SAMPLE_PRECINCTS {
                    race.insert(sample_precinct(rng, number, names));
                }
                race
            })
            .collect();
        Self { races }
    }
}

fn sample_precinct(rng: &mut impl Rng, number: u32, names: &[&str]) -> PrecinctResult {
    let ballots_cast: u64 = rng.random_range(100..600);
    let registered_voters = (ballots_cast as f64 * rng.random_range(1.2..1.7)).floor() as u64;
    let total_votes = (ballots_cast as f64 * 0.9).floor() as u64;

    let candidates = names.iter().enumerate()
        .map(|(i, name)| {
            let base = if i == 0 { 0.4 } else { 0.6 };
            let base_votes = (total_votes as f64 * base).floor();
            let jitter = (rng.random::<f64>() * total_votes as f64 * 0.2).floor();
            let votes = ((base_votes + jitter) as u64).min(total_votes);
            CandidateVotes { name: name.to_string(), votes, percentage: percentage_of(votes, total_votes) }
        })
        .collect();

    PrecinctResult { precinct_number: number, ballots_cast, registered_voters, total_votes, candidates }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_has_fixed_shape() {
        let election = Election::sample();
        assert_eq!(election.seats().collect::<Vec<_>>(), vec!["Seat 1", "Seat 2", "Seat 4", "Seat 6"]);
        for race in &election.races {
            assert_eq!(race.len(), SAMPLE_PRECINCTS.len());
            assert_eq!(race.precinct_numbers().next(), Some(303));
        }
        assert_eq!(election.race("Seat 4").unwrap().candidates, vec!["Nancy Thomas"]);
    }

    #[test]
    fn sample_values_stay_in_range() {
        let election = Election::sample_seeded(7);
        for race in &election.races {
            for p in race.precincts.values() {
                assert!((100..600).contains(&p.ballots_cast));
                assert!(p.registered_voters >= p.ballots_cast);
                assert!(p.total_votes <= p.ballots_cast);
                for c in &p.candidates { assert!(c.votes <= p.total_votes) }
            }
        }
    }

    #[test]
    fn seeded_sample_is_reproducible() {
        assert_eq!(Election::sample_seeded(42), Election::sample_seeded(42));
    }
}
