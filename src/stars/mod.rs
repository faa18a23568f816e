//! Ambient star field animator
//!
//! Shapes spawn at random, pulse in with a damped size oscillation, spin,
//! and after a random lifetime fall off the bottom of the screen. All of
//! it is a pure function of time; the wasm glue just asks for positions
//! and sizes each frame.

pub mod color;
pub mod field;
pub mod shape;

pub use color::{Rgb, hsv_to_css, hsv_to_rgb};
pub use field::{Press, StarField, exp_interval};
pub use shape::Shape;
