mod job;
mod menu;
mod state;

pub use state::{AppState, InputAction, Scene, MAX_SELECTED};
