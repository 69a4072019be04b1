use geo::Coord;
use log::debug;

use crate::{config::{Config, ZoomConfig}, render::Scene};
use super::{HitIndex, ViewMode, ViewState};

/// Owns the view state of one map. Every transition is a synchronous update; callers
/// re-render after each one.
///
/// Pan moves the view, not the content: panning up shifts drawn geometry down.
#[derive(Debug, Clone)]
pub struct Controller {
    state: ViewState,
    race: Option<String>,
    zoom: ZoomConfig,
    pan_step: f64,
}

impl Controller {
    pub fn new(config: &Config) -> Self {
        Self { state: ViewState::default(), race: None, zoom: config.zoom, pan_step: config.pan_step }
    }

    #[inline] pub fn state(&self) -> &ViewState { &self.state }

    /// Seat of the active race.
    #[inline] pub fn race(&self) -> Option<&str> { self.race.as_deref() }

    pub fn zoom_in(&mut self) { self.set_zoom(self.state.zoom * self.zoom.factor) }

    pub fn zoom_out(&mut self) { self.set_zoom(self.state.zoom / self.zoom.factor) }

    /// Set the zoom level directly, clamped to the configured range. Non-finite
    /// levels are ignored.
    pub fn set_zoom(&mut self, zoom: f64) {
        if !zoom.is_finite() {
            debug!("[view::controller] ignoring zoom {zoom}");
            return;
        }
        self.state.zoom = zoom.max(self.zoom.min).min(self.zoom.max);
    }

    pub fn pan_up(&mut self) { self.state.pan.y += self.pan_step }

    pub fn pan_down(&mut self) { self.state.pan.y -= self.pan_step }

    pub fn pan_left(&mut self) { self.state.pan.x += self.pan_step }

    pub fn pan_right(&mut self) { self.state.pan.x -= self.pan_step }

    /// Set the pan offset directly. Non-finite offsets are ignored.
    pub fn set_pan(&mut self, x: f64, y: f64) {
        if x.is_finite() && y.is_finite() {
            self.state.pan = Coord { x, y };
        } else {
            debug!("[view::controller] ignoring pan ({x}, {y})");
        }
    }

    /// Zoom back to 1 and pan to the origin. Selection and mode are kept.
    pub fn reset_view(&mut self) {
        self.state.zoom = 1.0;
        self.state.pan = Coord::zero();
    }

    pub fn select_precinct(&mut self, precinct: Option<u32>) { self.state.selected = precinct }

    /// Switch the active race. Selection never carries over to a different race.
    /// Seats are checked against the election by `Dashboard::select_race`.
    pub(crate) fn select_race(&mut self, seat: &str) {
        if self.race.as_deref() != Some(seat) {
            self.state.selected = None;
            self.race = Some(seat.to_string());
        }
    }

    pub fn set_mode(&mut self, mode: ViewMode) { self.state.mode = mode }

    /// Resolve a screen point against the scene last rendered from this state and
    /// select the precinct under it, if it has results. Returns the new selection;
    /// clicks on background or empty canvas leave the selection unchanged.
    pub fn click(&mut self, scene: &Scene, x: f64, y: f64) -> Option<u32> {
        let hit = HitIndex::new(scene).shape_at(scene, x, y)
            .map(|idx| &scene.shapes[idx])
            .filter(|shape| shape.has_data)
            .and_then(|shape| shape.precinct);
        debug!("[view::controller] click at ({x}, {y}) -> {hit:?}");
        if hit.is_some() { self.state.selected = hit }
        hit
    }
}
