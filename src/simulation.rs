use crate::config::FPS;
use log::debug;
use std::time::{Duration, Instant};

/// Frame clock shared with the physics system.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationData {
    /// Seconds between the start of the previous frame and this one.
    pub time_delta: f64,
    /// Milliseconds since the simulation started, sampled at frame start.
    pub ticks_ms: u64,
    pub started: Instant,
    pub last_simulated: Instant,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulationControl {
    pub paused: bool,
}

impl SimulationData {
    pub fn new(now: Instant) -> SimulationData {
        SimulationData {
            time_delta: 0.,
            ticks_ms: 0,
            started: now,
            last_simulated: now,
        }
    }

    /// Records the start of a frame at `now`.
    pub fn begin_frame(&mut self, now: Instant) {
        self.time_delta = now.saturating_duration_since(self.last_simulated).as_secs_f64();
        self.ticks_ms = now.saturating_duration_since(self.started).as_millis() as u64;
        self.last_simulated = now;
    }
}

pub fn frame_time_cap() -> Duration {
    Duration::from_secs(1) / FPS
}

/// How long to sleep so that a frame which already took `elapsed` lasts `cap`.
pub fn sleep_budget(cap: Duration, elapsed: Duration) -> Duration {
    cap.saturating_sub(elapsed)
}

/// Holds the loop at the target frame rate, then starts the next frame.
pub fn advance_time(simulation_data: &mut SimulationData) {
    let elapsed = simulation_data.last_simulated.elapsed();
    debug!("Frame time: {:?}", elapsed);
    std::thread::sleep(sleep_budget(frame_time_cap(), elapsed));
    simulation_data.begin_frame(Instant::now());
}
