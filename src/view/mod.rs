mod controller;
mod hit;
mod state;

pub use controller::Controller;
pub use hit::HitIndex;
pub use state::{ViewMode, ViewState};
