use clap::Parser;
use macroquad::prelude::*;
use toroidal_life::{
    FramePacer, LoopState, SimConfig, Simulation,
    input::MacroquadEvents,
    rendering::{DisplaySurface, MacroquadSurface},
};
use tracing_subscriber::EnvFilter;

fn window_conf() -> Conf {
    let config = SimConfig::parse();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: config.window_width,
        window_height: config.window_height,
        fullscreen: !config.windowed,
        window_resizable: false,
        ..Default::default()
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    let config = SimConfig::parse();
    let mut surface = MacroquadSurface;
    let surface_size = surface.size();
    tracing::info!(?config, width = surface_size.0, height = surface_size.1, "starting");

    let mut sim = match Simulation::from_config(&config, surface_size, &mut config.rng()) {
        Ok(sim) => sim,
        Err(err) => {
            tracing::error!(%err, "failed to start simulation");
            std::process::exit(1);
        }
    };

    let mut events = MacroquadEvents::new();
    let mut pacer = FramePacer::new(config.frame_interval());

    while sim.tick(&mut events, &mut surface, &mut pacer) == LoopState::Running {
        next_frame().await;
    }

    tracing::info!(
        generation = sim.generation(),
        population = sim.grid().population(),
        "simulation stopped"
    );
}
