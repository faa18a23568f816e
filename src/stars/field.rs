//! The star field: spawn scheduling, sweeping, pointer-grown shapes

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::shape::Shape;
use crate::consts::*;

/// Interval drawn from an exponential distribution with the given mean
pub fn exp_interval<R: Rng>(rng: &mut R, mean: f32) -> f32 {
    // random::<f32>() is in [0, 1); flip it so ln never sees zero
    let u: f32 = rng.random();
    -(1.0 - u).ln() * mean
}

/// A pointer press growing a shape under the cursor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Press {
    pub center: Vec2,
    pub started_at: f32,
}

impl Press {
    /// Current radius of the growing shape
    pub fn size(&self, now: f32) -> f32 {
        (PRESS_MIN_SIZE + (now - self.started_at) * PRESS_GROWTH_RATE).min(PRESS_MAX_SIZE)
    }
}

/// The whole ambient field
#[derive(Debug, Clone)]
pub struct StarField {
    rng: Pcg32,
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
    /// Field time (seconds since start)
    pub time: f32,
    /// Mean seconds between ambient spawns
    pub spawn_interval_mean: f32,
    next_spawn_at: f32,
    next_sweep_at: f32,
    press: Option<Press>,
}

/// Invisible shapes are swept every 10 mean spawn intervals
const SWEEP_INTERVALS: f32 = 10.0;

impl StarField {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let first_spawn = exp_interval(&mut rng, SPAWN_INTERVAL_MEAN);
        log::debug!("star field {width}x{height} (seed {seed})");
        Self {
            rng,
            width,
            height,
            shapes: Vec::new(),
            time: 0.0,
            spawn_interval_mean: SPAWN_INTERVAL_MEAN,
            next_spawn_at: first_spawn,
            next_sweep_at: SWEEP_INTERVALS * SPAWN_INTERVAL_MEAN,
            press: None,
        }
    }

    /// Advance field time, spawning and sweeping as scheduled
    pub fn tick(&mut self, dt: f32) {
        self.time += dt;

        while self.time >= self.next_spawn_at {
            let size = self.rng.random_range(SHAPE_MIN_SIZE..=SHAPE_MAX_SIZE);
            let center = self.random_point();
            let born_at = self.next_spawn_at;
            self.shapes.push(Shape::spawn(center, size, born_at, &mut self.rng));
            self.next_spawn_at += exp_interval(&mut self.rng, self.spawn_interval_mean);
        }

        if self.time >= self.next_sweep_at {
            self.sweep();
            self.next_sweep_at = self.time + SWEEP_INTERVALS * self.spawn_interval_mean;
        }
    }

    /// Drop shapes that have fallen off screen
    pub fn sweep(&mut self) {
        let (now, height) = (self.time, self.height);
        self.shapes.retain(|s| s.is_visible(now, height));
    }

    /// Pointer pressed: start growing a shape under the cursor
    pub fn press_start(&mut self, at: Vec2) {
        self.press = Some(Press {
            center: at,
            started_at: self.time,
        });
    }

    /// Pointer released: spawn the grown shape
    pub fn press_end(&mut self) {
        if let Some(press) = self.press.take() {
            let size = press.size(self.time);
            let shape = Shape::spawn(press.center, size, self.time, &mut self.rng);
            self.shapes.push(shape);
        }
    }

    /// The in-progress press, if the pointer is down
    pub fn press(&self) -> Option<&Press> {
        self.press.as_ref()
    }

    fn random_point(&mut self) -> Vec2 {
        Vec2::new(
            self.rng.random_range(0.0..=self.width),
            self.rng.random_range(0.0..=self.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exp_interval_positive() {
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(exp_interval(&mut rng, 1.0) > 0.0);
        }
    }

    #[test]
    fn test_exp_interval_mean() {
        let mut rng = Pcg32::seed_from_u64(2);
        let n = 20_000;
        let sum: f32 = (0..n).map(|_| exp_interval(&mut rng, 3.0)).sum();
        let mean = sum / n as f32;
        assert!((mean - 3.0).abs() < 0.2, "sample mean {mean}");
    }

    #[test]
    fn test_shapes_spawn_over_time() {
        let mut field = StarField::new(3, 800.0, 600.0);
        for _ in 0..600 {
            field.tick(0.1); // 60 seconds, mean interval 1s
        }
        assert!(field.shapes.len() > 20);
        for s in &field.shapes {
            assert!(s.center.x >= 0.0 && s.center.x <= 800.0);
            assert!(s.center.y >= 0.0 && s.center.y <= 600.0);
            assert!((SHAPE_MIN_SIZE..=SHAPE_MAX_SIZE).contains(&s.size));
        }
    }

    #[test]
    fn test_sweep_drops_fallen_shapes() {
        let mut field = StarField::new(4, 800.0, 600.0);
        field.tick(1.0);
        let mut fallen = Shape::spawn(Vec2::new(10.0, 10.0), 20.0, 0.0, &mut Pcg32::seed_from_u64(5));
        fallen.lifetime = 0.1;
        fallen.born_at = -1000.0; // long gone
        field.shapes.push(fallen);
        let before = field.shapes.len();
        field.sweep();
        assert_eq!(field.shapes.len(), before - 1);
    }

    #[test]
    fn test_press_grows_and_spawns() {
        let mut field = StarField::new(6, 800.0, 600.0);
        field.press_start(Vec2::new(50.0, 60.0));
        let p = *field.press().unwrap();
        assert!((p.size(field.time) - PRESS_MIN_SIZE).abs() < 1e-4);

        field.tick(2.0);
        let grown = field.press().unwrap().size(field.time);
        assert!((grown - (PRESS_MIN_SIZE + 2.0 * PRESS_GROWTH_RATE)).abs() < 1e-3);

        field.sweep();
        let count = field.shapes.len();
        field.press_end();
        assert_eq!(field.shapes.len(), count + 1);
        assert!(field.press().is_none());
        let spawned = field.shapes.last().unwrap();
        assert_eq!(spawned.center, Vec2::new(50.0, 60.0));
        assert!((spawned.size - grown).abs() < 1e-3);
    }

    #[test]
    fn test_press_size_caps() {
        let press = Press {
            center: Vec2::ZERO,
            started_at: 0.0,
        };
        assert_eq!(press.size(100.0), PRESS_MAX_SIZE);
    }
}
