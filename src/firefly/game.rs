//! Two-player firefly session
//!
//! Lives, score, the collectible star, fly-vs-fly contact and respawns.
//! Advanced by `tick(input, dt)` on a fixed timestep; all randomness
//! comes from the session RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::fly::Firefly;
use super::world::World;
use crate::consts::*;
use crate::stars::Shape;

/// Extra contact slack on top of the two body radii
const COLLISION_PAD: f32 = 2.0;
/// Horizontal speed both flies get from a side-on bounce
const BOUNCE_SPEED: f32 = 100.0;

/// Key state for one fly
#[derive(Debug, Clone, Copy, Default)]
pub struct FlyKeys {
    pub left: bool,
    pub right: bool,
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub keys: [FlyKeys; 2],
    /// Start a fresh round
    pub restart: bool,
}

/// The whole duel: world, both flies, lives, score, collectible
#[derive(Debug, Clone)]
pub struct FireflyGame {
    rng: Pcg32,
    pub world: World,
    pub flies: [Firefly; 2],
    pub lives: [u8; 2],
    pub score: u32,
    /// Session time (seconds since round start)
    pub time: f32,
    pub game_over: bool,
    /// The star currently up for grabs (born in session time)
    pub collectible: Option<Shape>,
}

impl FireflyGame {
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        let world = World::new(width, height);
        let mut game = Self {
            rng: Pcg32::seed_from_u64(seed),
            flies: [
                Firefly::new(FLY_HUES[0], Vec2::ZERO),
                Firefly::new(FLY_HUES[1], Vec2::ZERO),
            ],
            world,
            lives: [INITIAL_LIVES; 2],
            score: 0,
            time: 0.0,
            game_over: false,
            collectible: None,
        };
        for i in 0..2 {
            game.flies[i].pos = game.life_marker(i, INITIAL_LIVES + 1);
        }
        log::info!("firefly round started (seed {seed})");
        game
    }

    /// Where the life marker for a fly's n-th life sits (also the spawn
    /// point for that life)
    pub fn life_marker(&self, fly: usize, life: u8) -> Vec2 {
        let dir = 2.0 * fly as f32 - 1.0;
        Vec2::new(
            self.world.width / 2.0 + dir * life as f32 * LIFE_MARKER_RADIUS * 2.0 + dir * 30.0,
            16.0,
        )
    }

    /// Advance one fixed timestep
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if input.restart {
            self.restart();
            return;
        }

        self.time += dt;
        let now = self.time;

        for (fly, keys) in self.flies.iter_mut().zip(&input.keys) {
            fly.key_left = keys.left;
            fly.key_right = keys.right;
            fly.update(&self.world, now, dt, &mut self.rng);
        }

        self.check_collection(now);
        self.world.update_planet(dt);

        let visible = self
            .collectible
            .as_ref()
            .is_some_and(|c| c.is_visible(now, self.world.height));
        if !visible {
            self.randomize_collectible(now);
        }

        if self.can_have_collisions(now) {
            self.check_fly_collision(now);
        }

        if self.flies.iter().any(|f| f.dead) {
            self.game_over = self
                .flies
                .iter()
                .zip(&self.lives)
                .all(|(f, &l)| f.dead && l == 0);

            for i in 0..2 {
                if self.flies[i].dead && self.can_respawn(i, now) {
                    self.respawn(i);
                }
            }
        }
    }

    /// Start over: fresh world, flies, lives and score
    pub fn restart(&mut self) {
        let seed = self.rng.random::<u64>();
        let (w, h) = (self.world.width, self.world.height);
        *self = Self::new(seed, w, h);
    }

    fn check_collection(&mut self, now: f32) {
        let Some(collectible) = &self.collectible else {
            return;
        };
        let loc = collectible.location(now);
        let hit = self
            .flies
            .iter()
            .any(|f| f.pos.distance_squared(loc) < COLLECTIBLE_RADIUS * COLLECTIBLE_RADIUS);
        if hit {
            self.score += 1;
            self.world.raise_planet(PLANET_RISE_PER_STAR);
            self.collectible = None;
            log::debug!("star collected, score {}", self.score);
        }
    }

    /// Place a fresh collectible at a random spot clear of the planet.
    /// If the draw lands too close it stays empty until the next tick.
    fn randomize_collectible(&mut self, now: f32) {
        let margin = COLLECTIBLE_RADIUS * 3.0;
        let loc = Vec2::new(
            margin + self.rng.random::<f32>() * (self.world.width - 2.0 * margin),
            margin + self.rng.random::<f32>() * (self.world.height - 2.0 * margin),
        );
        let clearance = self.world.planet.radius + margin;
        if loc.distance_squared(self.world.planet.center) > clearance * clearance {
            self.collectible = Some(Shape::spawn(loc, COLLECTIBLE_RADIUS, now, &mut self.rng));
        }
    }

    fn can_have_collisions(&self, now: f32) -> bool {
        self.flies
            .iter()
            .all(|f| !f.dead && f.frozen_until < now)
    }

    /// Fly-vs-fly contact: a mostly-horizontal approach bounces both
    /// apart, otherwise the lower fly is stomped.
    fn check_fly_collision(&mut self, now: f32) {
        let contact = 2.0 * FLY_RADIUS + COLLISION_PAD;
        let diff = self.flies[0].pos - self.flies[1].pos;
        if diff.length_squared() > contact * contact {
            return;
        }

        if diff.x.abs() > 2.0 * diff.y.abs() {
            let frozen_until = now + SIDE_FREEZE_TIME;
            self.flies[0].frozen_until = frozen_until;
            self.flies[1].frozen_until = frozen_until;
            self.flies[0].vel.x = diff.x.signum() * BOUNCE_SPEED;
            self.flies[1].vel.x = -diff.x.signum() * BOUNCE_SPEED;
        } else if diff.y > 0.0 {
            self.flies[0].kill();
        } else {
            self.flies[1].kill();
        }
    }

    fn can_respawn(&self, fly: usize, now: f32) -> bool {
        self.lives[fly] > 0
            && self.flies[fly]
                .off_screen_at
                .is_some_and(|t| now > t + RESPAWN_DELAY)
    }

    fn respawn(&mut self, fly: usize) {
        let pos = self.life_marker(fly, self.lives[fly]);
        self.flies[fly] = Firefly::new(FLY_HUES[fly], pos);
        self.lives[fly] -= 1;
        log::debug!("fly {fly} respawned, {} lives left", self.lives[fly]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn game() -> FireflyGame {
        FireflyGame::new(42, 800.0, 600.0)
    }

    #[test]
    fn test_new_game_shape() {
        let g = game();
        assert_eq!(g.lives, [INITIAL_LIVES; 2]);
        assert_eq!(g.score, 0);
        assert!(!g.game_over);
        // Flies start at mirrored life markers near the top
        assert_eq!(g.flies[0].pos.y, 16.0);
        assert_eq!(g.flies[1].pos.y, 16.0);
        assert!(g.flies[0].pos.x < 400.0);
        assert!(g.flies[1].pos.x > 400.0);
    }

    #[test]
    fn test_collectible_spawns_clear_of_planet() {
        let mut g = game();
        for _ in 0..300 {
            g.tick(&TickInput::default(), SIM_DT);
            if let Some(c) = &g.collectible {
                let clearance = g.world.planet.radius + COLLECTIBLE_RADIUS * 3.0;
                assert!(c.center.distance(g.world.planet.center) > clearance);
            }
        }
        assert!(g.collectible.is_some());
    }

    #[test]
    fn test_collecting_scores_and_raises_planet() {
        let mut g = game();
        g.tick(&TickInput::default(), SIM_DT);
        let target_before = g.world.planet.target_center.y;
        // Park the collectible on a fly
        let pos = g.flies[0].pos;
        g.collectible = Some(Shape::spawn(pos, COLLECTIBLE_RADIUS, g.time, &mut Pcg32::seed_from_u64(1)));
        g.tick(&TickInput::default(), SIM_DT);
        assert_eq!(g.score, 1);
        assert_eq!(
            g.world.planet.target_center.y,
            target_before - PLANET_RISE_PER_STAR
        );
    }

    #[test]
    fn test_side_on_contact_bounces_both() {
        let mut g = game();
        g.flies[0].pos = Vec2::new(395.0, 100.0);
        g.flies[1].pos = Vec2::new(400.0, 100.0);
        g.tick(&TickInput::default(), SIM_DT);
        assert!((g.flies[0].vel.x - -BOUNCE_SPEED).abs() < 1e-3);
        assert!((g.flies[1].vel.x - BOUNCE_SPEED).abs() < 1e-3);
        assert!(g.flies[0].frozen_until > g.time);
        assert!(!g.flies[0].dead && !g.flies[1].dead);
    }

    #[test]
    fn test_stomp_kills_lower_fly() {
        let mut g = game();
        g.flies[0].pos = Vec2::new(400.0, 104.0);
        g.flies[1].pos = Vec2::new(400.0, 100.0);
        g.tick(&TickInput::default(), SIM_DT);
        assert!(g.flies[0].dead);
        assert!(!g.flies[1].dead);
    }

    #[test]
    fn test_respawn_after_delay_consumes_life() {
        let mut g = game();
        g.flies[0].dead = true;
        g.flies[0].off_screen_at = Some(0.0);
        g.flies[0].pos = Vec2::new(400.0, 700.0); // below the screen
        g.tick(&TickInput::default(), RESPAWN_DELAY + 0.1);
        assert!(!g.flies[0].dead);
        assert_eq!(g.lives[0], INITIAL_LIVES - 1);
        assert_eq!(g.flies[0].pos.y, 16.0);
    }

    #[test]
    fn test_game_over_when_both_out() {
        let mut g = game();
        for i in 0..2 {
            g.flies[i].dead = true;
            g.lives[i] = 0;
        }
        g.tick(&TickInput::default(), SIM_DT);
        assert!(g.game_over);
    }

    #[test]
    fn test_one_fly_out_is_not_game_over() {
        let mut g = game();
        g.flies[0].dead = true;
        g.lives[0] = 0;
        g.tick(&TickInput::default(), SIM_DT);
        assert!(!g.game_over);
    }

    #[test]
    fn test_restart_resets_round() {
        let mut g = game();
        g.score = 12;
        g.lives = [0, 1];
        g.game_over = true;
        g.tick(
            &TickInput {
                restart: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(g.score, 0);
        assert_eq!(g.lives, [INITIAL_LIVES; 2]);
        assert!(!g.game_over);
    }
}
