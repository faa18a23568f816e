//! A single animated star shape
//!
//! Everything is a pure function of the shape's age: size follows a
//! damped oscillation toward the nominal size, rotation is linear, and
//! after the lifetime runs out the shape falls along a parabola.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::{Rgb, hsv_to_rgb};
use super::field::exp_interval;
use crate::consts::*;

/// An animated star, born at a point in field time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shape {
    pub center: Vec2,
    /// Nominal size the damped oscillation settles toward
    pub size: f32,
    /// Field time of birth (seconds)
    pub born_at: f32,
    /// Seconds after birth before the shape starts falling
    pub lifetime: f32,
    pub initial_rotation: f32,
    /// Radians per second, sign picked at spawn
    pub angular_vel: f32,
    pub color: Rgb,
}

impl Shape {
    /// Spawn a shape with random lifetime, spin and birth-time hue
    pub fn spawn<R: Rng>(center: Vec2, size: f32, born_at: f32, rng: &mut R) -> Self {
        let spin_period: f32 = rng.random_range(5.0..=50.0);
        let spin_dir = if rng.random::<bool>() { 1.0 } else { -1.0 };
        let hue = (born_at % 60.0) / 59.0;

        Self {
            center,
            size,
            born_at,
            lifetime: exp_interval(rng, SHAPE_LIFETIME_MEAN),
            initial_rotation: rng.random::<f32>() * std::f32::consts::TAU,
            angular_vel: std::f32::consts::TAU / spin_period * spin_dir,
            color: hsv_to_rgb(hue, 0.25, 0.85),
        }
    }

    /// Seconds since birth
    #[inline]
    pub fn age(&self, now: f32) -> f32 {
        now - self.born_at
    }

    /// Rotation at field time `now` (radians)
    pub fn rotation(&self, now: f32) -> f32 {
        self.initial_rotation + self.age(now) * self.angular_vel
    }

    /// Size at field time `now`: damped oscillation toward the nominal size
    pub fn current_size(&self, now: f32) -> f32 {
        let t = self.age(now);
        self.size * (1.0 - (-SHAPE_DAMPING * t).exp() * (SHAPE_SIZE_FREQ * t).cos())
    }

    /// Position at field time `now`: fixed until the lifetime runs out,
    /// then a parabolic fall
    pub fn location(&self, now: f32) -> Vec2 {
        let t = self.age(now);
        if t <= self.lifetime {
            return self.center;
        }
        let fall = t - self.lifetime;
        let y_delta = 40.0 * fall * fall - 40.0 * fall;
        Vec2::new(self.center.x, self.center.y + y_delta)
    }

    /// Still on screen (above the bottom edge)?
    pub fn is_visible(&self, now: f32, height: f32) -> bool {
        self.location(now).y - self.current_size(now) < height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn shape(rng: &mut Pcg32) -> Shape {
        Shape::spawn(Vec2::new(100.0, 100.0), 30.0, 0.0, rng)
    }

    #[test]
    fn test_size_starts_near_zero_and_settles() {
        let mut rng = Pcg32::seed_from_u64(1);
        let s = shape(&mut rng);
        // At birth the damped term cancels the nominal size exactly
        assert!(s.current_size(0.0).abs() < 1e-4);
        // Long after birth the oscillation has decayed away
        let settled = s.current_size(30.0);
        assert!((settled - s.size).abs() < 0.01 * s.size);
    }

    #[test]
    fn test_size_overshoots_nominal() {
        let mut rng = Pcg32::seed_from_u64(1);
        let s = shape(&mut rng);
        // Half an oscillation period in, cos = -1 and the size peaks
        let peak = s.current_size(1.0);
        assert!(peak > s.size);
    }

    #[test]
    fn test_stationary_until_lifetime() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut s = shape(&mut rng);
        s.lifetime = 10.0;
        assert_eq!(s.location(5.0), s.center);
        assert_eq!(s.location(10.0), s.center);
        // Right after the lifetime the parabola dips upward first
        let just_after = s.location(10.5);
        assert!(just_after.y < s.center.y);
        // Then the fall dominates
        let later = s.location(15.0);
        assert!(later.y > s.center.y);
    }

    #[test]
    fn test_falls_off_screen_eventually() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut s = shape(&mut rng);
        s.lifetime = 1.0;
        assert!(s.is_visible(0.5, 200.0));
        assert!(!s.is_visible(60.0, 200.0));
    }

    #[test]
    fn test_rotation_is_linear() {
        let mut rng = Pcg32::seed_from_u64(4);
        let s = shape(&mut rng);
        let d1 = s.rotation(1.0) - s.rotation(0.0);
        let d2 = s.rotation(2.0) - s.rotation(1.0);
        assert!((d1 - d2).abs() < 1e-5);
        assert!((d1 - s.angular_vel).abs() < 1e-5);
    }
}
