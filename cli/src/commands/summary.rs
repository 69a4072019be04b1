use anyhow::{bail, Context, Result};
use precinctmap::{Election, RaceResult};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SummaryArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let (election, report) = Election::from_csv_path(&args.results, &config.seats)
        .with_context(|| format!("[summary] cannot read {}", args.results.display()))?;
    if cli.verbose > 0 {
        eprintln!("[summary] {} of {} rows used, {} warnings", report.rows_used, report.rows_read, report.warnings.len());
    }

    let races: Vec<&RaceResult> = match &args.race {
        Some(seat) => match election.race(seat) {
            Some(race) => vec![race],
            None => bail!("[summary] no race {seat:?} in {}", args.results.display()),
        },
        None => election.races.iter().collect(),
    };

    for race in races {
        let overview = race.overview();
        println!("{}", race.seat);
        println!("  precincts:   {}", overview.precincts);
        println!("  ballots:     {} of {} registered ({:.1}% turnout)",
            overview.total_ballots, overview.total_registered, overview.turnout_rate);
        println!("  votes:       {}", overview.total_votes);
        for (rank, candidate) in overview.candidates.iter().enumerate() {
            println!("  {:>2}. {:<32} {:>8} {:>6.2}%", rank + 1, candidate.name, candidate.votes, candidate.percentage);
        }
    }

    Ok(())
}
