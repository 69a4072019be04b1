//! Load orchestration and the state of one results map.

use std::thread;

use log::{info, warn};
use serde::Serialize;

use crate::{
    boundary::{BoundaryReport, BoundarySet, BoundarySource},
    config::Config,
    election::{Election, IngestReport, RaceOverview, RaceResult, ResultSource},
    error::Error,
    render::{render_geographic, render_grid, MatchReport, Scene},
    view::Controller,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MapType {
    Geographic,
    Grid,
}

/// What happened while loading, for diagnostics.
#[derive(Debug)]
pub struct LoadOutcome {
    /// Map type in effect after loading.
    pub map_type: MapType,
    /// Why the real results were replaced by sample data, if they were.
    pub results_fallback: Option<Error>,
    /// Why there is no geographic map, if there is none. `None` with a grid map
    /// means no boundary source was given.
    pub boundary_error: Option<Error>,
    pub ingest: IngestReport,
    pub boundaries: Option<BoundaryReport>,
}

pub struct Dashboard {
    config: Config,
    election: Election,
    boundaries: Option<BoundarySet>,
    controller: Controller,
    map_type: MapType,
    outcome: LoadOutcome,
}

fn joined<T>(handle: thread::ScopedJoinHandle<'_, Result<T, Error>>, what: &'static str) -> Result<T, Error> {
    handle.join().unwrap_or_else(|_| Err(Error::DataUnavailable { what, reason: "loader panicked".into() }))
}

impl Dashboard {
    /// Load results and boundaries concurrently and wait for both.
    ///
    /// Never fails: unreadable results fall back to the sample election, and missing
    /// or unusable boundaries fall back to the grid layout. The first race is active.
    pub fn load(results: &dyn ResultSource, boundaries: Option<&dyn BoundarySource>, config: Config) -> Self {
        let shared = &config;
        let (loaded_results, loaded_boundaries) = thread::scope(|s| {
            let r = s.spawn(move || results.load(&shared.seats));
            let b = boundaries.map(|source| s.spawn(move || source.load(shared)));
            (joined(r, "results"), b.map(|handle| joined(handle, "boundaries")))
        });

        let (election, ingest, results_fallback) = match loaded_results {
            Ok((election, ingest)) => (election, ingest, None),
            Err(err) => {
                warn!("[dashboard] {err}; using sample results from {}", results.describe());
                let election = Election::sample();
                let ingest = IngestReport { rows_read: 0, rows_used: 0, warnings: Vec::new() };
                (election, ingest, Some(err))
            }
        };

        let (boundary_set, boundary_report, boundary_error) = match loaded_boundaries {
            Some(Ok((set, report))) => (Some(set), Some(report), None),
            Some(Err(err)) => {
                warn!("[dashboard] {err}; using grid layout");
                (None, None, Some(err))
            }
            None => (None, None, None),
        };

        let map_type = if boundary_set.is_some() { MapType::Geographic } else { MapType::Grid };
        info!("[dashboard] loaded {} races, map type {map_type:?}", election.races.len());

        let mut controller = Controller::new(&config);
        if let Some(first) = election.seats().next() {
            controller.select_race(first);
        }

        let outcome = LoadOutcome {
            map_type,
            results_fallback,
            boundary_error,
            ingest,
            boundaries: boundary_report,
        };
        Self { config, election, boundaries: boundary_set, controller, map_type, outcome }
    }

    #[inline] pub fn config(&self) -> &Config { &self.config }

    #[inline] pub fn election(&self) -> &Election { &self.election }

    #[inline] pub fn boundaries(&self) -> Option<&BoundarySet> { self.boundaries.as_ref() }

    #[inline] pub fn outcome(&self) -> &LoadOutcome { &self.outcome }

    #[inline] pub fn controller(&self) -> &Controller { &self.controller }

    /// Zoom, pan and mode changes go through the controller. Races are switched
    /// with `select_race`, which checks the seat exists.
    #[inline] pub fn controller_mut(&mut self) -> &mut Controller { &mut self.controller }

    #[inline] pub fn map_type(&self) -> MapType { self.map_type }

    /// Choose the map type. Geographic is only honored when boundaries loaded;
    /// returns the map type in effect.
    pub fn set_map_type(&mut self, map_type: MapType) -> MapType {
        self.map_type = match (map_type, &self.boundaries) {
            (MapType::Geographic, None) => MapType::Grid,
            (map_type, _) => map_type,
        };
        self.map_type
    }

    /// The active race.
    pub fn race(&self) -> Option<&RaceResult> {
        self.controller.race().and_then(|seat| self.election.race(seat))
    }

    /// Make `seat` the active race. Unknown seats are ignored and return false.
    pub fn select_race(&mut self, seat: &str) -> bool {
        if self.election.race(seat).is_none() { return false }
        self.controller.select_race(seat);
        true
    }

    /// Select a precinct of the active race; `None` clears. A precinct without results
    /// in the race is not selectable and returns false.
    pub fn select_precinct(&mut self, precinct: Option<u32>) -> bool {
        let selectable = match precinct {
            Some(p) => self.race().is_some_and(|race| race.contains(p)),
            None => true,
        };
        if selectable { self.controller.select_precinct(precinct) }
        selectable
    }

    pub fn overview(&self) -> Option<RaceOverview> {
        self.race().map(RaceResult::overview)
    }

    /// Render the active race under the current view. The grid is used when boundaries
    /// are unavailable or chosen; geographic rendering with no valid coordinates is
    /// `InvalidGeometry`, for which callers show an error in place of the map.
    pub fn scene(&self) -> Result<(Scene, Option<MatchReport>), Error> {
        let race = self.race().ok_or(Error::NoActiveRace)?;
        let view = self.controller.state();
        match (&self.boundaries, self.map_type) {
            (Some(boundaries), MapType::Geographic) => {
                let (scene, report) = render_geographic(boundaries, race, view, &self.config)?;
                Ok((scene, Some(report)))
            }
            _ => Ok((render_grid(race, view, &self.config), None)),
        }
    }

    /// Click at a screen point of the current scene; see `Controller::click`.
    pub fn click(&mut self, x: f64, y: f64) -> Option<u32> {
        let (scene, _) = self.scene().ok()?;
        self.controller.click(&scene, x, y)
    }
}
