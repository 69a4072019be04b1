mod bounds;
mod color;
mod grid;
mod io;
mod path;
mod proj;
mod scene;

pub use bounds::bounding_window;
pub use color::{precinct_color, turnout_color, winner_color, BACKGROUND, NO_DATA};
pub use grid::render_grid;
pub use proj::ScreenTransform;
pub use scene::{render_geographic, Label, MatchReport, Scene, SceneKind, Shape, Stroke};
