use geo::{coord, MultiPolygon, Rect};

use crate::{
    config::Config,
    election::RaceResult,
    view::{ViewMode, ViewState},
};
use super::{
    color::precinct_color,
    scene::{Label, Scene, SceneKind, Shape, Stroke},
};

const COLUMNS: usize = 8;
const CELL: f64 = 64.0;
const GAP: f64 = 8.0;

/// Non-geographic layout: result precincts ascending, in rows of `COLUMNS` square cells.
/// Used whenever boundaries are unavailable; every result precinct is represented.
pub fn render_grid(race: &RaceResult, view: &ViewState, config: &Config) -> Scene {
    let rows = race.len().div_ceil(COLUMNS).max(1);
    let width = GAP + COLUMNS as f64 * (CELL + GAP);
    let height = GAP + rows as f64 * (CELL + GAP);

    let shapes = race.precincts.values().enumerate()
        .map(|(i, result)| {
            let x = GAP + (i % COLUMNS) as f64 * (CELL + GAP);
            let y = GAP + (i / COLUMNS) as f64 * (CELL + GAP);
            let cell = Rect::new(coord! { x: x, y: y }, coord! { x: x + CELL, y: y + CELL });

            let sublabel = match view.mode {
                ViewMode::Turnout => format!("{:.0}%", result.turnout_rate()),
                ViewMode::Results => result.ballots_cast.to_string(),
            };
            let stroke = if view.selected == Some(result.precinct_number) { Stroke::Selected } else { Stroke::Normal };

            Shape {
                precinct: Some(result.precinct_number),
                path: format!(
                    "M {x:.2},{y:.2} L {:.2},{y:.2} L {:.2},{:.2} L {x:.2},{:.2} Z",
                    x + CELL, x + CELL, y + CELL, y + CELL,
                ),
                fill: precinct_color(Some(result), view.mode, config),
                stroke,
                label: Some(Label {
                    x: x + CELL / 2.0,
                    y: y + CELL / 2.0 - 4.0,
                    text: result.precinct_number.to_string(),
                    sublabel: Some(sublabel),
                    muted: false,
                }),
                has_data: true,
                outline: MultiPolygon(vec![cell.to_polygon()]),
            }
        })
        .collect();

    Scene { width, height, kind: SceneKind::Grid, shapes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::election::Election;

    #[test]
    fn lays_out_rows_of_eight_in_ascending_order() {
        let election = Election::sample_seeded(3);
        let race = election.race("Seat 1").unwrap();
        let scene = render_grid(race, &ViewState::default(), &Config::default());

        assert_eq!(scene.kind, SceneKind::Grid);
        assert_eq!(scene.shapes.len(), 46);
        assert_eq!(scene.width, 584.0);
        assert_eq!(scene.height, 8.0 + 6.0 * 72.0);

        let numbers: Vec<u32> = scene.shapes.iter().filter_map(|s| s.precinct).collect();
        assert!(numbers.windows(2).all(|w| w[0] < w[1]));

        let ninth = &scene.shapes[8];
        assert!(ninth.path.starts_with("M 8.00,80.00 L 72.00,80.00"));
        assert_eq!(ninth.label.as_ref().unwrap().text, numbers[8].to_string());
    }

    #[test]
    fn sublabel_follows_mode() {
        let election = Election::sample_seeded(3);
        let race = election.race("Seat 4").unwrap();
        let first = race.precincts.values().next().unwrap();

        let results = render_grid(race, &ViewState::default(), &Config::default());
        assert_eq!(results.shapes[0].label.as_ref().unwrap().sublabel.as_deref(), Some(first.ballots_cast.to_string().as_str()));

        let view = ViewState { mode: ViewMode::Turnout, selected: Some(first.precinct_number), ..ViewState::default() };
        let turnout = render_grid(race, &view, &Config::default());
        let sublabel = turnout.shapes[0].label.as_ref().unwrap().sublabel.clone().unwrap();
        assert!(sublabel.ends_with('%'));
        assert_eq!(turnout.shapes[0].stroke, Stroke::Selected);
    }
}
