//! Canvas 2D drawing (wasm only)
//!
//! Thin, stateless glue: each frame the toys are drawn straight from
//! their state. Nothing here feeds back into the simulations.

pub mod firefly;
pub mod stars;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// Fill the whole canvas with a flat color
pub fn draw_background(
    ctx: &CanvasRenderingContext2d,
    width: f32,
    height: f32,
    color: &str,
) -> Result<(), JsValue> {
    ctx.set_fill_style_str(color);
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    Ok(())
}

/// Fill a circle
pub fn fill_circle(
    ctx: &CanvasRenderingContext2d,
    x: f32,
    y: f32,
    radius: f32,
) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(
        x as f64,
        y as f64,
        radius.max(0.0) as f64,
        0.0,
        std::f64::consts::TAU,
    )?;
    ctx.close_path();
    ctx.fill();
    Ok(())
}
