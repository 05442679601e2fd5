mod config;
mod pacer;
mod simulation;

pub use config::{ConfigError, SimConfig};
pub use pacer::{FramePacer, Pacer};
pub use simulation::{LoopState, Simulation};
