use std::path::PathBuf;

use precinctmap::ViewMode;

/// Precinct results map CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "precinctmap", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render one race as an SVG map (grid layout without boundaries)
    Render(RenderArgs),

    /// Print totals, turnout and ranked candidates for a race
    Summary(SummaryArgs),

    /// List the races in a result file
    Races(RacesArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Per-precinct result CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub results: PathBuf,

    /// Precinct boundary GeoJSON file
    #[arg(long, value_hint = clap::ValueHint::FilePath, conflicts_with = "boundaries_url")]
    pub boundaries: Option<PathBuf>,

    /// Precinct boundary GeoJSON URL
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub boundaries_url: Option<String>,

    /// Seat to render, defaults to the first race in the file
    #[arg(long)]
    pub race: Option<String>,

    /// Fill by winner (results) or turnout bucket (turnout)
    #[arg(long, default_value_t = ViewMode::Results)]
    pub mode: ViewMode,

    /// Zoom level, clamped to the configured range
    #[arg(long, default_value_t = 1.0, value_parser = finite_f64)]
    pub zoom: f64,

    /// Horizontal pan offset in pixels
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = finite_f64)]
    pub pan_x: f64,

    /// Vertical pan offset in pixels
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true, value_parser = finite_f64)]
    pub pan_y: f64,

    /// Precinct number to highlight
    #[arg(long)]
    pub select: Option<u32>,

    /// Force the grid layout even when boundaries load
    #[arg(long)]
    pub grid: bool,

    /// JSON configuration file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output SVG file, defaults to "./map.svg"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// Per-precinct result CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub results: PathBuf,

    /// Seat to summarize, defaults to every race
    #[arg(long)]
    pub race: Option<String>,

    /// JSON configuration file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct RacesArgs {
    /// Per-precinct result CSV
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub results: PathBuf,

    /// JSON configuration file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,
}

fn finite_f64(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        Ok(v) => Err(format!("expected a finite number, got {v}")),
        Err(e) => Err(e.to_string()),
    }
}
