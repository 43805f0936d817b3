use crate::{ball::Ball, config::MARGIN_PX, viewport::Viewport};

/// True when pixel column `px` is on or past either side margin.
pub fn at_wall(px: i32, viewport: &Viewport) -> bool {
    px >= viewport.width as i32 - MARGIN_PX || px <= MARGIN_PX
}

/// Flips the horizontal velocity of a ball touching a margin.
pub fn reflect(ball: &mut Ball, viewport: &Viewport) -> bool {
    if at_wall(viewport.pixel_x(ball.position.x), viewport) {
        ball.velocity.x = -ball.velocity.x;
        return true;
    }
    false
}
