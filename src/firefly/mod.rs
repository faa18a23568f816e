//! Two-player firefly duel
//!
//! Deterministic fixed-timestep core: two fireflies orbit a planet with
//! inverse-square gravity, thrust tangentially, collect stars and stomp
//! each other. No rendering or platform dependencies; the wasm glue
//! feeds key state in and draws the state out.

pub mod fly;
pub mod game;
pub mod world;

pub use fly::{Firefly, TailPoint};
pub use game::{FireflyGame, FlyKeys, TickInput};
pub use world::{Planet, World};
