use crate::ball::Ball;
use crate::config::{BALL_RADIUS, INITIAL_FLOORS, MARGIN_PX, MAX_INITIAL_VX};
use crate::viewport::Viewport;
use legion::{Entity, World};
use nalgebra::Vector3;
use rand::Rng;
use rand_pcg::Pcg64;

/// Tracks balls in creation order and owns the randomness used to make them.
pub struct Population {
    rng: Pcg64,
    drop_height: f64,
    order: Vec<Entity>,
}

impl Population {
    pub fn new(rng: Pcg64, drop_height: f64) -> Population {
        Population {
            rng,
            drop_height,
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.order
    }

    pub fn init_balls(&mut self, world: &mut World, viewport: &Viewport, now_ms: u64) {
        for floor_height in INITIAL_FLOORS.iter() {
            self.spawn(world, *floor_height, viewport, now_ms);
        }
    }

    /// A ball whose floor sits one margin above the bottom of the window.
    pub fn spawn_at_margin(&mut self, world: &mut World, viewport: &Viewport, now_ms: u64) -> Entity {
        let floor_height = viewport.height as f64 - MARGIN_PX as f64;
        self.spawn(world, floor_height, viewport, now_ms)
    }

    pub fn spawn(
        &mut self,
        world: &mut World,
        floor_height: f64,
        viewport: &Viewport,
        now_ms: u64,
    ) -> Entity {
        let vx = self.rng.gen_range(-MAX_INITIAL_VX..=MAX_INITIAL_VX) as f64;
        let x = self.random_x(viewport);
        let color = self.random_color();
        let ball = Ball::new(
            self.drop_height,
            x,
            vx,
            BALL_RADIUS,
            color,
            floor_height,
            now_ms,
        );
        let entity = world.push((ball,));
        self.order.push(entity);
        entity
    }

    /// Removes the most recently created ball, if any.
    pub fn remove_last(&mut self, world: &mut World) -> Option<Entity> {
        let entity = self.order.pop()?;
        world.remove(entity);
        Some(entity)
    }

    pub fn random_color(&mut self) -> Vector3<u8> {
        Vector3::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }

    /// Horizontal start strictly between the margins, so a new ball does not
    /// sit on a wall. Windows too narrow for that get the middle of the box.
    fn random_x(&mut self, viewport: &Viewport) -> f64 {
        let low = MARGIN_PX + 1;
        let high = viewport.width as i32 - MARGIN_PX - 1;
        if low >= high {
            return viewport.x_mm(viewport.width as i32 / 2);
        }
        viewport.x_mm(self.rng.gen_range(low..high))
    }
}
