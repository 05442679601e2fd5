use rand::Rng;
use tracing::{debug, info, trace};

use crate::application::{ConfigError, Pacer, SimConfig};
use crate::domain::{CellSize, Evolution, GridState};
use crate::input::{self, EventSource, InputEvent};
use crate::rendering::{self, DisplaySurface, Palette};

/// Lifecycle of the simulation loop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal: no further ticks run
    Stopped,
}

/// Simulation owns the board for the whole run and drives one tick at a time:
/// input, render, snapshot, advance, pace.
pub struct Simulation {
    grid: GridState,
    cell_size: CellSize,
    palette: Palette,
    evolution: Evolution,
    state: LoopState,
    generation: u64,
}

impl Simulation {
    pub fn new(grid: GridState, cell_size: CellSize, evolution: Evolution) -> Self {
        Self {
            grid,
            cell_size,
            palette: Palette::default(),
            evolution,
            state: LoopState::Running,
            generation: 0,
        }
    }

    /// Size the board to the surface and seed it at random
    pub fn from_config<R: Rng + ?Sized>(
        config: &SimConfig,
        surface_size: (u32, u32),
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let (width, height) = config.grid_dimensions(surface_size)?;

        let mut grid = GridState::new(width, height);
        grid.seed_random(rng, config.alive_probability);
        grid.snapshot_previous();

        info!(
            width,
            height,
            cell_size = config.cell_size,
            evolution = config.evolution.name(),
            population = grid.population(),
            "grid seeded"
        );
        Ok(Self::new(grid, config.cell_size(), config.evolution))
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Number of completed generations
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one input event to the board or the loop state
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Quit => {
                debug!("quit requested");
                self.state = LoopState::Stopped;
            }
            InputEvent::PrimaryClickAt { x, y } => {
                input::apply_click(&mut self.grid, (x, y), self.cell_size);
            }
        }
    }

    /// Run a single tick.
    ///
    /// All pending events are applied first. If one of them was a quit the
    /// tick ends there; otherwise the current board is drawn, snapshotted,
    /// advanced and the pacer is waited on.
    pub fn tick<E, S, P>(&mut self, events: &mut E, surface: &mut S, pacer: &mut P) -> LoopState
    where
        E: EventSource + ?Sized,
        S: DisplaySurface + ?Sized,
        P: Pacer + ?Sized,
    {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        for event in events.drain() {
            self.handle_event(event);
        }
        if self.state == LoopState::Stopped {
            return self.state;
        }

        rendering::render(&self.grid, surface, self.cell_size, &self.palette);
        self.grid.snapshot_previous();
        self.evolution.advance(&mut self.grid);
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "tick");

        pacer.wait();
        self.state
    }

    /// Tick until a quit event stops the loop
    pub fn run<E, S, P>(&mut self, events: &mut E, surface: &mut S, pacer: &mut P)
    where
        E: EventSource + ?Sized,
        S: DisplaySurface + ?Sized,
        P: Pacer + ?Sized,
    {
        while self.tick(events, surface, pacer) == LoopState::Running {}
        info!(generation = self.generation, "simulation stopped");
    }
}
