//! Geometry helpers shared by the generators.

mod path;
mod random;

pub use path::{smooth_closed_path, wave_path, Point};
pub use random::SeededRandom;
