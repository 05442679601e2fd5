mod cell;
mod coord;
mod grid;
mod evolution;
mod patterns;
pub mod life;

pub use cell::Cell;
pub use coord::{CellCoordinate, CellSize};
pub use grid::{GridError, GridState};
pub use evolution::{Evolution, PARALLEL_THRESHOLD};
pub use patterns::{Pattern, presets};
