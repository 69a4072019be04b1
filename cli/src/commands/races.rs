use anyhow::{Context, Result};
use precinctmap::Election;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RacesArgs) -> Result<()> {
    let config = super::load_config(&args.config)?;
    let (election, _) = Election::from_csv_path(&args.results, &config.seats)
        .with_context(|| format!("[races] cannot read {}", args.results.display()))?;

    for race in &election.races {
        println!("{}\t{} precincts\t{}", race.seat, race.len(), race.candidates.join(", "));
    }

    Ok(())
}
