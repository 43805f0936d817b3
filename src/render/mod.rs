use crate::{
    ball::Ball,
    config::{BACKGROUND, WINDOW_TITLE},
    error::{BallsError, BallsResult},
    viewport::Viewport,
};
use legion::{IntoQuery, World};
use log::info;
use sdl2::{gfx::primitives::DrawRenderer, pixels::Color, render::WindowCanvas, EventPump};

pub struct DisplayConfig {
    /// Explicit window position; defaults to the right half of the screen.
    pub position: Option<(i32, i32)>,
}

pub struct Graphics {
    pub sdl_context: sdl2::Sdl,
    pub canvas: WindowCanvas,
}

/// Opens a resizable window covering the right half of the desktop.
pub fn init_graphics(display_config: DisplayConfig) -> BallsResult<(Graphics, Viewport)> {
    let sdl_context = sdl2::init().map_err(BallsError::Sdl)?;
    let video_subsystem = sdl_context.video().map_err(BallsError::Sdl)?;
    let mode = video_subsystem
        .desktop_display_mode(0)
        .map_err(BallsError::Sdl)?;
    let viewport = Viewport::new((mode.w / 2).max(1) as u32, mode.h.max(1) as u32);
    info!(
        "Screen Width: {}, Screen Height: {}",
        viewport.width, viewport.height
    );

    let (x, y) = display_config.position.unwrap_or((mode.w / 2, 0));
    let window = video_subsystem
        .window(WINDOW_TITLE, viewport.width, viewport.height)
        .position(x, y)
        .resizable()
        .build()?;

    Ok((
        Graphics {
            sdl_context,
            canvas: window.into_canvas().build()?,
        },
        viewport,
    ))
}

impl Graphics {
    pub fn event_pump(&self) -> BallsResult<EventPump> {
        self.sdl_context.event_pump().map_err(BallsError::Sdl)
    }
}

fn to_i16(value: i32) -> i16 {
    value.clamp(i16::MIN as i32, i16::MAX as i32) as i16
}

pub fn render_balls(world: &World, graphics: &mut Graphics, viewport: &Viewport) -> BallsResult<()> {
    let (r, g, b) = BACKGROUND;
    graphics.canvas.set_draw_color(Color::RGB(r, g, b));
    graphics.canvas.clear();
    for ball in <&Ball>::query().iter(world) {
        let (x, y) = viewport.to_screen(&ball.position);
        graphics
            .canvas
            .filled_circle(
                to_i16(x),
                to_i16(y),
                to_i16(viewport.pixel_radius(ball.radius)),
                Color::RGB(ball.color.x, ball.color.y, ball.color.z),
            )
            .map_err(BallsError::Sdl)?;
    }
    graphics.canvas.present();
    Ok(())
}
