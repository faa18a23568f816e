//! The planet and its gravity field
//!
//! The planet sits mostly below the bottom edge of the canvas and pulls
//! with an inverse-square force normalized so that the pull at the
//! surface equals `SURFACE_GRAVITY`. Collecting a star raises the
//! planet's target center; the visible planet eases toward it slowly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{angle_to, polar_to_cartesian};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub radius: f32,
    pub center: Vec2,
    /// Where the center is headed (raised per collected star)
    pub target_center: Vec2,
}

impl Planet {
    /// Is a point inside the planet body?
    pub fn contains(&self, p: Vec2) -> bool {
        p.distance_squared(self.center) <= self.radius * self.radius
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub width: f32,
    pub height: f32,
    pub planet: Planet,
    /// SURFACE_GRAVITY * radius^2, precomputed
    gravity_coeff: f32,
}

impl World {
    pub fn new(width: f32, height: f32) -> Self {
        let radius = width / 2.0;
        let center = Vec2::new(width / 2.0, height + radius - PLANET_BOTTOM_OFFSET);
        Self {
            width,
            height,
            planet: Planet {
                radius,
                center,
                target_center: center,
            },
            gravity_coeff: SURFACE_GRAVITY * radius * radius,
        }
    }

    /// Gravitational force at a location, pointing at the planet center
    pub fn gravity(&self, loc: Vec2) -> Vec2 {
        let d2 = loc.distance_squared(self.planet.center).max(1.0);
        polar_to_cartesian(self.gravity_coeff / d2, angle_to(loc, self.planet.center))
    }

    /// Raise the planet's target center (y shrinks upward)
    pub fn raise_planet(&mut self, amount: f32) {
        self.planet.target_center.y -= amount;
    }

    /// Ease the visible planet toward its target
    pub fn update_planet(&mut self, dt: f32) {
        if self.planet.center.y > self.planet.target_center.y {
            self.planet.center.y = (self.planet.center.y - PLANET_EASE_SPEED * dt)
                .max(self.planet.target_center.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_gravity_magnitude() {
        let world = World::new(800.0, 600.0);
        // A point one radius above the center feels the surface pull
        let surface = world.planet.center - Vec2::new(0.0, world.planet.radius);
        let g = world.gravity(surface);
        assert!((g.length() - SURFACE_GRAVITY).abs() < 0.5);
        // Pointing straight down at the center
        assert!(g.y > 0.0);
        assert!(g.x.abs() < 0.5);
    }

    #[test]
    fn test_gravity_inverse_square_falloff() {
        let world = World::new(800.0, 600.0);
        let c = world.planet.center;
        let r = world.planet.radius;
        let near = world.gravity(c - Vec2::new(0.0, r)).length();
        let far = world.gravity(c - Vec2::new(0.0, 2.0 * r)).length();
        assert!((near / far - 4.0).abs() < 0.01);
    }

    #[test]
    fn test_planet_eases_toward_raised_target() {
        let mut world = World::new(800.0, 600.0);
        let y0 = world.planet.center.y;
        world.raise_planet(PLANET_RISE_PER_STAR);
        assert_eq!(world.planet.center.y, y0); // visible planet unmoved yet

        world.update_planet(2.0);
        assert!(world.planet.center.y < y0);
        assert!(world.planet.center.y >= world.planet.target_center.y);

        // Never overshoots
        world.update_planet(1000.0);
        assert_eq!(world.planet.center.y, world.planet.target_center.y);
    }

    #[test]
    fn test_planet_contains() {
        let world = World::new(800.0, 600.0);
        assert!(world.planet.contains(world.planet.center));
        assert!(!world.planet.contains(Vec2::new(0.0, 0.0)));
    }
}
