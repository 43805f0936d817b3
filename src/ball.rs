use nalgebra::{Vector2, Vector3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub radius: f64,
    pub color: Vector3<u8>,
    pub floor_height: f64,
    /// Apex above the floor that each bounce relaunches to.
    pub bounce_height: f64,
    pub bounces: u32,
    pub last_bounce_ms: u64,
    pub last_bpm: f64,
}

impl Ball {
    /// A ball resting on its floor, about to drop from `drop_height` above it.
    pub fn new(
        drop_height: f64,
        x: f64,
        vx: f64,
        radius: f64,
        color: Vector3<u8>,
        floor_height: f64,
        now_ms: u64,
    ) -> Ball {
        Ball {
            position: Vector2::new(x, floor_height + radius),
            velocity: Vector2::new(vx, 0.),
            radius,
            color,
            floor_height,
            bounce_height: (drop_height + radius).max(0.),
            bounces: 0,
            last_bounce_ms: now_ms,
            last_bpm: 0.,
        }
    }
}

/// Bounces per minute for a bounce cycle of `cycle_ms` milliseconds.
pub fn bounce_rate(cycle_ms: u64) -> f64 {
    60_000. / cycle_ms as f64
}
