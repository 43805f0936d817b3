use legion::*;
use log::info;

use crate::{
    ball::{bounce_rate, Ball},
    config::GRAVITY,
    simulation::{SimulationControl, SimulationData},
    viewport::Viewport,
    wall,
};

/// What happened at a bounce, for logging.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
    pub target_height: f64,
    pub height: f64,
    pub cycle_ms: Option<u64>,
    pub bpm: f64,
}

#[system(for_each)]
pub fn advance_balls(
    ball: &mut Ball,
    #[resource] simulation_data: &SimulationData,
    #[resource] control: &SimulationControl,
    #[resource] viewport: &Viewport,
) {
    if control.paused {
        return;
    }
    let bounce = advance_single_ball(
        ball,
        simulation_data.time_delta,
        simulation_data.ticks_ms,
        viewport,
    );
    if let Some(bounce) = bounce {
        info!(
            "Bouncing to {} mm at {} mm in {} ms at BPM {}",
            bounce.target_height,
            bounce.height,
            bounce
                .cycle_ms
                .map_or_else(|| "N/A".to_string(), |ms| ms.to_string()),
            bounce.bpm as i64
        );
    }
}

/// Speed needed to rise `height` mm against gravity.
pub fn launch_speed(height: f64) -> f64 {
    (2. * GRAVITY.abs() * height.max(0.)).sqrt()
}

/// One explicit Euler step of `dt` seconds.
pub fn advance_single_ball(
    ball: &mut Ball,
    dt: f64,
    now_ms: u64,
    viewport: &Viewport,
) -> Option<Bounce> {
    if dt <= 0. {
        return None;
    }
    ball.velocity.y += GRAVITY * dt;
    ball.position.y += ball.velocity.y * dt;
    ball.position.x += ball.velocity.x * dt;

    let bounced = if ball.position.y <= ball.floor_height {
        Some(bounce(ball, now_ms))
    } else {
        None
    };
    wall::reflect(ball, viewport);
    bounced
}

/// Puts the ball back on its floor and relaunches it.
pub fn bounce(ball: &mut Ball, now_ms: u64) -> Bounce {
    let cycle_ms = if ball.bounces > 0 {
        Some(now_ms.saturating_sub(ball.last_bounce_ms))
    } else {
        None
    };

    ball.position.y = ball.floor_height + ball.radius;
    ball.velocity.y = launch_speed(ball.bounce_height);

    if let Some(ms) = cycle_ms.filter(|ms| *ms > 0) {
        ball.last_bpm = bounce_rate(ms);
    }
    ball.last_bounce_ms = now_ms;
    ball.bounces += 1;

    Bounce {
        target_height: ball.bounce_height,
        height: ball.position.y,
        cycle_ms,
        bpm: ball.last_bpm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legion::{EntityStore, Resources, Schedule, World};
    use nalgebra::{Vector2, Vector3};
    use proptest::prelude::*;
    use std::time::{Duration, Instant};

    fn viewport() -> Viewport {
        Viewport::new(960, 1080)
    }

    fn resting_ball(x: f64, vx: f64, floor_height: f64) -> Ball {
        Ball::new(250., x, vx, 30., Vector3::new(200, 100, 50), floor_height, 0)
    }

    #[test]
    fn first_bounce_lands_on_floor_plus_radius() {
        let mut ball = resting_ball(250., 0., 50.);
        let mut now_ms = 0;
        let bounce = loop {
            now_ms += 10;
            if let Some(bounce) = advance_single_ball(&mut ball, 0.01, now_ms, &viewport()) {
                break bounce;
            }
            assert!(now_ms < 10_000, "ball never bounced");
        };
        assert_eq!(ball.position.y, 80.);
        assert_eq!(ball.velocity.y, (2. * 9810. * 280_f64).sqrt());
        assert_eq!(ball.position.x, 250.);
        assert_eq!(ball.bounces, 1);
        assert_eq!(bounce.cycle_ms, None);
        assert_eq!(bounce.target_height, 280.);
    }

    #[test]
    fn bounce_rate_needs_two_bounces() {
        let mut ball = resting_ball(250., 0., 50.);
        bounce(&mut ball, 1000);
        assert_eq!(ball.last_bpm, 0.);
        assert_eq!(ball.last_bounce_ms, 1000);

        let second = bounce(&mut ball, 1500);
        assert_eq!(second.cycle_ms, Some(500));
        assert_eq!(ball.last_bpm, 60000. / 500.);
        assert_eq!(ball.bounces, 2);
    }

    #[test]
    fn zero_interval_keeps_previous_rate() {
        let mut ball = resting_ball(250., 0., 50.);
        bounce(&mut ball, 1000);
        bounce(&mut ball, 2000);
        bounce(&mut ball, 2000);
        assert_eq!(ball.last_bpm, 60.);
        assert_eq!(ball.bounces, 3);
    }

    #[test]
    fn launch_speed_of_negative_height_is_zero() {
        assert_eq!(launch_speed(-10.), 0.);
    }

    #[test]
    fn non_positive_dt_is_ignored() {
        let mut ball = resting_ball(250., 40., 50.);
        let before = ball;
        assert_eq!(advance_single_ball(&mut ball, 0., 5, &viewport()), None);
        assert_eq!(ball, before);
    }

    #[test]
    fn launched_ball_rises_to_target_and_returns() {
        let dt = 1e-5;
        let floor_height = 100.;
        let mut ball = resting_ball(250., 0., floor_height);
        let speed = launch_speed(ball.bounce_height);
        ball.position = Vector2::new(250., floor_height);
        ball.velocity = Vector2::new(0., speed);

        let mut peak = ball.position.y;
        let mut descent_speed = 0.;
        for step in 1..1_000_000u64 {
            let falling_speed = ball.velocity.y + GRAVITY * dt;
            if advance_single_ball(&mut ball, dt, step, &viewport()).is_some() {
                descent_speed = falling_speed;
                break;
            }
            peak = peak.max(ball.position.y);
        }
        assert!((peak - (floor_height + ball.bounce_height)).abs() < 0.1);
        assert!(descent_speed < 0.);
        assert!((descent_speed.abs() - speed).abs() / speed < 1e-3);
    }

    #[test]
    fn paused_schedule_leaves_balls_alone() {
        let mut world = World::default();
        let entity = world.push((resting_ball(250., 40., 50.),));
        let mut resources = Resources::default();
        let start = Instant::now();
        let mut simulation_data = SimulationData::new(start);
        simulation_data.begin_frame(start + Duration::from_millis(10));
        resources.insert(simulation_data);
        resources.insert(SimulationControl { paused: true });
        resources.insert(viewport());
        let mut schedule = Schedule::builder()
            .add_system(advance_balls_system())
            .build();

        schedule.execute(&mut world, &mut resources);
        let ball = *world.entry_ref(entity).unwrap().get_component::<Ball>().unwrap();
        assert_eq!(ball, resting_ball(250., 40., 50.));

        resources.insert(SimulationControl { paused: false });
        schedule.execute(&mut world, &mut resources);
        let ball = *world.entry_ref(entity).unwrap().get_component::<Ball>().unwrap();
        assert_eq!(ball.position.x, 250. + 40. * 0.01);
        assert!(ball.velocity.y < 0.);
    }

    proptest! {
        #[test]
        fn falling_is_explicit_euler(
            x in 200.0..300.0f64,
            y in 1000.0..5000.0f64,
            vx in -100.0..100.0f64,
            vy in -1000.0..1000.0f64,
            dt in 0.001..0.02f64,
        ) {
            let mut ball = resting_ball(x, vx, 0.);
            ball.position = Vector2::new(x, y);
            ball.velocity = Vector2::new(vx, vy);

            prop_assert_eq!(advance_single_ball(&mut ball, dt, 0, &viewport()), None);
            prop_assert_eq!(ball.position.y, y + (vy + GRAVITY * dt) * dt);
            prop_assert_eq!(ball.position.x, x + vx * dt);
            prop_assert_eq!(ball.velocity.x, vx);
        }

        #[test]
        fn margins_reflect_horizontal_velocity(
            x in prop_oneof![0.0..170.0f64, 330.0..500.0f64],
            vx in 1.0..100.0f64,
            sign in prop_oneof![Just(1.0f64), Just(-1.0f64)],
        ) {
            let mut ball = resting_ball(x, sign * vx, 0.);
            ball.position.y = 2000.;
            ball.velocity.x = sign * vx;

            advance_single_ball(&mut ball, 0.001, 0, &viewport());
            prop_assert_eq!(ball.velocity.x, -sign * vx);
        }

        #[test]
        fn bounce_resets_height_and_speed(
            floor_height in 0.0..800.0f64,
            bounce_height in 0.0..1000.0f64,
            vy in -5000.0..-100.0f64,
        ) {
            let mut ball = resting_ball(250., 0., floor_height);
            ball.bounce_height = bounce_height;
            ball.position.y = floor_height + 0.01;
            ball.velocity.y = vy;

            prop_assert!(advance_single_ball(&mut ball, 0.01, 0, &viewport()).is_some());
            prop_assert_eq!(ball.position.y, floor_height + ball.radius);
            prop_assert!((ball.velocity.y - (2. * 9810. * bounce_height).sqrt()).abs() < 1e-9);
        }
    }
}
