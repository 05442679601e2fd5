use std::time::Duration;

use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

use crate::domain::{CellSize, Evolution};

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Cell size must be at least one pixel")]
    ZeroCellSize,

    #[error("Target frame rate must be positive")]
    ZeroFrameRate,

    #[error("Alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("Surface of {width}x{height} pixels cannot fit a single {cell_size}px cell")]
    SurfaceTooSmall { width: u32, height: u32, cell_size: u32 },
}

/// Runtime settings, read from the command line
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "toroidal-life", version, about = "Conway's Game of Life on a torus")]
pub struct SimConfig {
    /// Side of one cell in pixels
    #[arg(long, default_value_t = 5)]
    pub cell_size: u32,

    /// Ticks per second
    #[arg(long, default_value_t = 60)]
    pub target_fps: u32,

    /// Chance for each cell to start alive
    #[arg(long, default_value_t = 0.5)]
    pub alive_probability: f64,

    /// Seed for the initial board; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// How generations are computed
    #[arg(long, value_enum, default_value_t = Evolution::Auto)]
    pub evolution: Evolution,

    /// Open a window instead of going fullscreen
    #[arg(long)]
    pub windowed: bool,

    #[arg(long, default_value_t = 1000)]
    pub window_width: i32,

    #[arg(long, default_value_t = 800)]
    pub window_height: i32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            target_fps: 60,
            alive_probability: 0.5,
            seed: None,
            evolution: Evolution::Auto,
            windowed: false,
            window_width: 1000,
            window_height: 800,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.target_fps == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(ConfigError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }

    pub fn cell_size(&self) -> CellSize {
        CellSize::square(self.cell_size)
    }

    /// Minimum time between two ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1)
    }

    /// Board size for a surface of `surface` pixels: how many whole cells fit
    /// on each axis.
    pub fn grid_dimensions(&self, surface: (u32, u32)) -> Result<(usize, usize), ConfigError> {
        let cell = self.cell_size();
        if cell.width == 0 || cell.height == 0 {
            return Err(ConfigError::ZeroCellSize);
        }

        let (width, height) = (surface.0 / cell.width, surface.1 / cell.height);
        if width == 0 || height == 0 {
            return Err(ConfigError::SurfaceTooSmall {
                width: surface.0,
                height: surface.1,
                cell_size: self.cell_size,
            });
        }
        Ok((width as usize, height as usize))
    }

    /// Random source for the initial board
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
