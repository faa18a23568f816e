//! Glimmerbox - a trio of glowing canvas toys
//!
//! Core modules:
//! - `mastermind`: pin puzzle engine (hint scoring, game session)
//! - `firefly`: two-player orbital physics toy
//! - `stars`: ambient shape animator
//! - `render`: Canvas 2D drawing (wasm only)
//!
//! Gameplay logic is deterministic and platform-free: fixed timesteps,
//! seeded RNG, no rendering or browser dependencies. The wasm glue in
//! `main.rs` and `render` is the only code that touches the DOM.
//!
//! Coordinates follow the canvas convention: y grows downward.

pub mod firefly;
pub mod highscores;
pub mod mastermind;
#[cfg(target_arch = "wasm32")]
pub mod render;
pub mod settings;
pub mod stars;

pub use highscores::HighScores;
pub use settings::Settings;

use glam::Vec2;

/// Shared tuning constants
pub mod consts {
    /// Fixed simulation timestep for the firefly sim (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Firefly mass (force / mass = acceleration)
    pub const FLY_MASS: f32 = 0.6;
    /// Firefly body radius (pixels)
    pub const FLY_RADIUS: f32 = 3.0;
    /// Thrust force magnitude
    pub const FLY_THRUST: f32 = 1000.0;
    /// Cubic drag coefficient (force = coeff * speed^3)
    pub const FLY_DRAG_COEFF: f32 = 3.0e-5;
    /// Seconds a tail sample stays visible
    pub const FLY_TAIL_TIME: f32 = 0.6;
    /// Controls lock-out after a wall hit or bounce (seconds)
    pub const SIDE_FREEZE_TIME: f32 = 0.5;
    /// Speed a corpse is ejected at when it hits the planet
    pub const PLANET_EJECT_SPEED: f32 = 800.0;

    /// Gravitational force at the planet surface
    pub const SURFACE_GRAVITY: f32 = 800.0;
    /// How far the planet pokes above the bottom edge (pixels)
    pub const PLANET_BOTTOM_OFFSET: f32 = 30.0;
    /// Planet easing speed toward its target center (px/s)
    pub const PLANET_EASE_SPEED: f32 = 1.0;
    /// Planet rise per collected star (pixels)
    pub const PLANET_RISE_PER_STAR: f32 = 7.0;

    /// Lives per firefly at the start of a round
    pub const INITIAL_LIVES: u8 = 3;
    /// Seconds between a corpse leaving the screen and its respawn
    pub const RESPAWN_DELAY: f32 = 1.2;
    /// Collectible star pickup radius (pixels)
    pub const COLLECTIBLE_RADIUS: f32 = 8.0;
    /// Radius of the life markers along the top edge (pixels)
    pub const LIFE_MARKER_RADIUS: f32 = 12.0;
    /// Player hues (red, amber)
    pub const FLY_HUES: [f32; 2] = [0.0, 0.16];

    /// Star shape size oscillation damping
    pub const SHAPE_DAMPING: f32 = 0.8;
    /// Star shape size oscillation frequency (rad/s)
    pub const SHAPE_SIZE_FREQ: f32 = std::f32::consts::PI;
    /// Mean star lifetime before it falls (seconds)
    pub const SHAPE_LIFETIME_MEAN: f32 = 60.0;
    /// Mean interval between ambient spawns (seconds)
    pub const SPAWN_INTERVAL_MEAN: f32 = 1.0;
    /// Ambient spawn size range (pixels)
    pub const SHAPE_MIN_SIZE: f32 = 5.0;
    pub const SHAPE_MAX_SIZE: f32 = 50.0;
    /// Pointer-press shape growth (px/s), start and cap sizes
    pub const PRESS_GROWTH_RATE: f32 = 60.0;
    pub const PRESS_MIN_SIZE: f32 = 2.0;
    pub const PRESS_MAX_SIZE: f32 = 300.0;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Angle of a vector (radians, atan2 convention)
#[inline]
pub fn vector_angle(v: Vec2) -> f32 {
    v.y.atan2(v.x)
}

/// Angle of the direction from `from` to `to`
#[inline]
pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
    vector_angle(to - from)
}
