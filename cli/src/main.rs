mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{races, render, summary};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
        Commands::Races(args) => races::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
