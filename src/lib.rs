// Domain layer - board, rules, patterns
pub mod domain;

// Application layer - simulation loop, configuration, pacing
pub mod application;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellCoordinate, CellSize, Evolution, GridState, Pattern, presets};
pub use application::{FramePacer, LoopState, SimConfig, Simulation};
pub use input::{EventSource, InputEvent};
pub use rendering::{DisplaySurface, Palette};
