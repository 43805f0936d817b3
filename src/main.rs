extern crate sdl2;

pub mod advance;
pub mod ball;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod simulation;
pub mod viewport;
pub mod wall;
pub mod world_gen;

use error::BallsResult;
use input::{apply_command, command_for, Flow};
use legion::*;
use log::{error, info, LevelFilter};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use render::{init_graphics, render_balls, DisplayConfig};
use simulation::{SimulationControl, SimulationData};
use std::time::Instant;
use viewport::Viewport;
use world_gen::Population;

fn run(drop_height: i32) -> BallsResult<()> {
    // Setup.
    let (mut graphics, viewport) = init_graphics(DisplayConfig {
        position: config::window_position_from_env(),
    })?;
    let mut event_pump = graphics.event_pump()?;
    let mut world = World::default();
    let mut population = Population::new(Pcg64::from_entropy(), drop_height as f64);

    // Initialize world.
    let simulation_data = SimulationData::new(Instant::now());
    population.init_balls(&mut world, &viewport, simulation_data.ticks_ms);
    let mut resources = Resources::default();
    resources.insert(viewport);
    resources.insert(simulation_data);
    resources.insert(SimulationControl::default());
    info!(
        "Dropping {} balls from {} mm",
        population.len(),
        drop_height
    );

    let mut schedule = Schedule::builder()
        .add_system(crate::advance::advance_balls_system())
        .build();

    loop {
        if let Some(mut simulation_data) = resources.get_mut::<SimulationData>() {
            simulation::advance_time(&mut simulation_data);
        }

        for event in event_pump.poll_iter() {
            if let Some(command) = command_for(&event) {
                if apply_command(command, &mut world, &mut resources, &mut population) == Flow::Quit
                {
                    info!("Quitting");
                    return Ok(());
                }
            }
        }

        schedule.execute(&mut world, &mut resources);

        let viewport = resources
            .get::<Viewport>()
            .map(|viewport| *viewport)
            .unwrap_or(viewport);
        render_balls(&world, &mut graphics, &viewport)?;
    }
}

pub fn main() {
    if let Err(e) = logging::init_logging(LevelFilter::Info) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let stdin = std::io::stdin();
    let outcome = config::prompt_drop_height(&mut stdin.lock(), &mut std::io::stdout())
        .and_then(run);
    if let Err(e) = outcome {
        error!("An error occurred: {}", e);
        std::process::exit(1);
    }
}
