use legion::{IntoQuery, Resources, World};
use log::info;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;

use crate::{
    ball::Ball,
    config::{BOUNCE_HEIGHT_STEP, VELOCITY_STEP},
    simulation::{SimulationControl, SimulationData},
    viewport::Viewport,
    world_gen::Population,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Resize(u32, u32),
    TogglePause,
    Spawn,
    RemoveLast,
    Recolor,
    RaiseBounce,
    LowerBounce,
    SpeedUp,
    SlowDown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn command_for(event: &Event) -> Option<Command> {
    match event {
        Event::Quit { .. } => Some(Command::Quit),
        Event::Window {
            win_event: WindowEvent::Resized(w, h),
            ..
        }
        | Event::Window {
            win_event: WindowEvent::SizeChanged(w, h),
            ..
        } if *w > 0 && *h > 0 => Some(Command::Resize(*w as u32, *h as u32)),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => match keycode {
            // Q stays quit; recolor lives on C so both are reachable.
            Keycode::Q | Keycode::Escape => Some(Command::Quit),
            Keycode::P => Some(Command::TogglePause),
            Keycode::N => Some(Command::Spawn),
            Keycode::Return => Some(Command::RemoveLast),
            Keycode::C => Some(Command::Recolor),
            Keycode::Up => Some(Command::RaiseBounce),
            Keycode::Down => Some(Command::LowerBounce),
            Keycode::Left => Some(Command::SpeedUp),
            Keycode::Right => Some(Command::SlowDown),
            _ => None,
        },
        _ => None,
    }
}

pub fn apply_command(
    command: Command,
    world: &mut World,
    resources: &mut Resources,
    population: &mut Population,
) -> Flow {
    match command {
        Command::Quit => return Flow::Quit,
        Command::Resize(width, height) => {
            if let Some(mut viewport) = resources.get_mut::<Viewport>() {
                *viewport = Viewport::new(width, height);
                info!("Resized to {}x{}", width, height);
            }
        }
        Command::TogglePause => {
            if let Some(mut control) = resources.get_mut::<SimulationControl>() {
                control.paused = !control.paused;
                info!("Paused: {}", control.paused);
            }
        }
        Command::Spawn => {
            let now_ms = resources
                .get::<SimulationData>()
                .map_or(0, |simulation_data| simulation_data.ticks_ms);
            if let Some(viewport) = resources.get::<Viewport>() {
                population.spawn_at_margin(world, &viewport, now_ms);
                info!("Spawned ball, {} in play", population.len());
            }
        }
        Command::RemoveLast => {
            if population.remove_last(world).is_some() {
                info!("Removed ball, {} in play", population.len());
            }
        }
        Command::Recolor => {
            for ball in <&mut Ball>::query().iter_mut(world) {
                ball.color = population.random_color();
            }
        }
        Command::RaiseBounce => adjust_bounce_height(world, BOUNCE_HEIGHT_STEP),
        Command::LowerBounce => adjust_bounce_height(world, -BOUNCE_HEIGHT_STEP),
        Command::SpeedUp => adjust_velocity(world, VELOCITY_STEP),
        Command::SlowDown => adjust_velocity(world, -VELOCITY_STEP),
    }
    Flow::Continue
}

/// A bounce target below the floor has no launch speed, so it stops at zero.
fn adjust_bounce_height(world: &mut World, step: f64) {
    for ball in <&mut Ball>::query().iter_mut(world) {
        ball.bounce_height = (ball.bounce_height + step).max(0.);
    }
}

fn adjust_velocity(world: &mut World, step: f64) {
    for ball in <&mut Ball>::query().iter_mut(world) {
        ball.velocity.x += step;
        info!("Moving at {} mm/s", ball.velocity.x);
    }
}
