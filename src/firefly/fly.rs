//! Single firefly physics
//!
//! Force integration each tick: gravity + cubic drag + key thrust.
//! Thrust is aimed relative to the local gravity vector, so "left" and
//! "right" always mean tangentially around the planet. A dead fly keeps
//! falling until it leaves the bottom of the screen.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::world::World;
use crate::consts::*;
use crate::{polar_to_cartesian, vector_angle};

/// One sample of the fading tail
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TailPoint {
    pub t: f32,
    pub pos: Vec2,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Firefly {
    pub hue: f32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Last force components, kept for the debug overlay
    pub force: Vec2,
    pub thrust: Vec2,
    pub drag: Vec2,
    /// Controls are dead until this time (wall hits, bounces)
    pub frozen_until: f32,
    pub key_left: bool,
    pub key_right: bool,
    pub dead: bool,
    /// When the corpse left the bottom of the screen, if it has
    pub off_screen_at: Option<f32>,
    /// Recent positions for rendering (oldest first)
    #[serde(skip)]
    pub tail: Vec<TailPoint>,
}

impl Firefly {
    pub fn new(hue: f32, pos: Vec2) -> Self {
        Self {
            hue,
            pos,
            vel: Vec2::ZERO,
            force: Vec2::ZERO,
            thrust: Vec2::ZERO,
            drag: Vec2::ZERO,
            frozen_until: 0.0,
            key_left: false,
            key_right: false,
            dead: false,
            off_screen_at: None,
            tail: Vec::new(),
        }
    }

    pub fn kill(&mut self) {
        self.dead = true;
    }

    /// Thrust force from the current key state, aimed relative to gravity:
    /// left/right rotate the gravity direction a quarter turn, both keys
    /// push straight up against it.
    fn thrust_force(&self, gravity: Vec2) -> Vec2 {
        let g_angle = vector_angle(gravity);
        let angle = match (self.key_left, self.key_right) {
            (true, false) => g_angle + FRAC_PI_2,
            (false, true) => g_angle - FRAC_PI_2,
            (true, true) => g_angle + PI,
            (false, false) => return Vec2::ZERO,
        };
        polar_to_cartesian(FLY_THRUST, angle)
    }

    /// Cubic drag opposing velocity
    fn drag_force(&self) -> Vec2 {
        let speed = self.vel.length();
        -self.vel.normalize_or_zero() * (FLY_DRAG_COEFF * speed * speed * speed)
    }

    /// Bounce off the side walls, freezing controls briefly
    fn check_side_walls(&mut self, world: &World, now: f32) {
        if self.pos.x < 0.0 {
            self.vel.x = -self.vel.x;
            self.frozen_until = now + SIDE_FREEZE_TIME;
        } else if self.pos.x > world.width {
            self.pos.x = world.width - 0.1;
            self.vel.x = -self.vel.x;
            self.frozen_until = now + SIDE_FREEZE_TIME;
        }
    }

    /// Ceiling, floor and planet contact. The planet ejects the corpse
    /// outward with a little random spread.
    fn check_ceiling_and_planet<R: Rng>(&mut self, world: &World, now: f32, rng: &mut R) {
        if !self.dead {
            if self.pos.y <= 0.0 {
                self.kill();
                self.vel.y = 0.0;
            } else if self.pos.y > world.height {
                self.kill();
            } else if world.planet.contains(self.pos) {
                self.kill();
                let g_angle = vector_angle(world.gravity(self.pos));
                let jitter = 0.4 * (rng.random::<f32>() - 0.5);
                self.vel = polar_to_cartesian(PLANET_EJECT_SPEED, g_angle + PI + jitter);
            }
        } else if self.pos.y > world.height && self.off_screen_at.is_none() {
            self.off_screen_at = Some(now);
        }
    }

    fn update_tail(&mut self, now: f32) {
        self.tail.retain(|p| now - p.t < FLY_TAIL_TIME);
        self.tail.push(TailPoint { t: now, pos: self.pos });
    }

    /// Advance one fixed timestep. `now` is session time after this tick.
    pub fn update<R: Rng>(&mut self, world: &World, now: f32, dt: f32, rng: &mut R) {
        let gravity = world.gravity(self.pos);
        self.drag = self.drag_force();
        let frozen = self.dead || now < self.frozen_until;
        self.thrust = if frozen {
            Vec2::ZERO
        } else {
            self.thrust_force(gravity)
        };
        self.force = gravity + self.drag + self.thrust;

        self.vel += self.force * dt / FLY_MASS;

        self.check_side_walls(world, now);
        self.check_ceiling_and_planet(world, now, rng);

        self.pos += self.vel * dt;

        self.update_tail(now);
    }
}
