use std::io::{BufRead, Write};

use crate::error::BallsResult;

/// Gravitational acceleration in mm/s^2 (negative is down).
pub const GRAVITY: f64 = -9810.;
pub const FPS: u32 = 120;

/// Logical size of the simulated box, in millimeters.
pub const BOX_WIDTH: f64 = 500.;
pub const BOX_HEIGHT: f64 = 1000.;

/// Pixel inset from each horizontal window edge where balls turn around.
pub const MARGIN_PX: i32 = 340;

pub const DEFAULT_DROP_HEIGHT: i32 = 250;
pub const INITIAL_FLOORS: [f64; 5] = [50., 50., 250., 250., 300.];

pub const BALL_RADIUS: f64 = 30.;
pub const MAX_INITIAL_VX: i32 = 100;
pub const BOUNCE_HEIGHT_STEP: f64 = 10.;
pub const VELOCITY_STEP: f64 = 10.;

pub const WINDOW_TITLE: &str = "Bouncing Balls Simulation";
pub const WINDOW_POS_VAR: &str = "SDL_VIDEO_WINDOW_POS";
pub const BACKGROUND: (u8, u8, u8) = (0, 0, 0);

pub fn parse_drop_height(input: &str) -> i32 {
    input.trim().parse().unwrap_or(DEFAULT_DROP_HEIGHT)
}

/// Asks for the drop height. EOF counts as a blank answer.
pub fn prompt_drop_height<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> BallsResult<i32> {
    write!(
        output,
        "Enter the drop height in mm (default is `{}`): ",
        DEFAULT_DROP_HEIGHT
    )?;
    output.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(parse_drop_height(&line))
}

/// Parses an "x,y" window position.
pub fn parse_window_position(value: &str) -> Option<(i32, i32)> {
    let (x, y) = value.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

pub fn window_position_from_env() -> Option<(i32, i32)> {
    std::env::var(WINDOW_POS_VAR)
        .ok()
        .and_then(|value| parse_window_position(&value))
}
