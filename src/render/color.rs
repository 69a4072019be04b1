//! Fill color resolution. Pure: the same inputs always give the same color.

use std::collections::BTreeMap;

use crate::{config::Config, election::PrecinctResult, view::ViewMode};

/// Precinct with a boundary but no result for the race.
pub const NO_DATA: &str = "#E5E7EB";

/// Map background behind features that have no result to color by.
pub const BACKGROUND: &str = "#F3F4F6";

/// Turnout percentage buckets, lightest to darkest: `[lower, upper)`.
const TURNOUT_BREAKS: &[(f64, f64, &str)] = &[
    (f64::NEG_INFINITY, 15.0, "#FEF3C7"),
    (15.0,              25.0, "#FDE047"),
    (25.0,              35.0, "#EAB308"),
    (35.0,              45.0, "#CA8A04"),
    (45.0,   f64::INFINITY,   "#92400E"),
];

/// Turnout bucket color for a rate in percent. Non-finite rates have no data.
pub fn turnout_color(rate: f64) -> &'static str {
    if rate.is_nan() { return NO_DATA }
    TURNOUT_BREAKS.iter()
        .find(|&&(lo, hi, _)| rate >= lo && rate < hi)
        .map_or(TURNOUT_BREAKS[TURNOUT_BREAKS.len() - 1].2, |&(_, _, color)| color)
}

/// Configured color of the precinct winner; unknown names get `fallback`.
pub fn winner_color<'a>(result: &PrecinctResult, colors: &'a BTreeMap<String, String>, fallback: &'a str) -> &'a str {
    match result.winner() {
        Some(winner) => colors.get(&winner.name).map_or(fallback, String::as_str),
        None => NO_DATA,
    }
}

/// Fill for one precinct in the given mode.
pub fn precinct_color(result: Option<&PrecinctResult>, mode: ViewMode, config: &Config) -> String {
    let Some(result) = result else { return NO_DATA.to_string() };
    match mode {
        ViewMode::Turnout => turnout_color(result.turnout_rate()).to_string(),
        ViewMode::Results => winner_color(result, &config.candidate_colors, &config.fallback_color).to_string(),
    }
}
