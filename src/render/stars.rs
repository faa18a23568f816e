//! Star field drawing

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::draw_background;
use crate::stars::{Press, Shape, StarField};

/// Five-pointed star path centered on the current origin
fn star_path_at_origin(ctx: &CanvasRenderingContext2d, size: f32) -> Result<(), JsValue> {
    const POINTS: u32 = 5;
    let inner = (size / 2.6) as f64;
    let outer = size as f64;
    let step = std::f64::consts::PI / POINTS as f64;

    ctx.begin_path();
    ctx.move_to(outer, 0.0);
    for i in 0..(POINTS * 2 - 1) {
        ctx.rotate(step)?;
        if i % 2 == 0 {
            ctx.line_to(inner, 0.0);
        } else {
            ctx.line_to(outer, 0.0);
        }
    }
    ctx.close_path();
    Ok(())
}

/// Draw one shape at its current location, size and rotation
pub fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, now: f32) -> Result<(), JsValue> {
    let loc = shape.location(now);
    ctx.save();
    ctx.translate(loc.x as f64, loc.y as f64)?;
    ctx.rotate(shape.rotation(now) as f64)?;
    star_path_at_origin(ctx, shape.current_size(now))?;
    ctx.set_fill_style_str(&shape.color.to_css());
    ctx.fill();
    ctx.restore();
    Ok(())
}

/// Draw the red ring of an in-progress pointer press
fn draw_press(ctx: &CanvasRenderingContext2d, press: &Press, now: f32) -> Result<(), JsValue> {
    let radius = press.size(now) as f64;
    let (cx, cy) = (press.center.x as f64, press.center.y as f64);

    let gradient =
        ctx.create_radial_gradient(cx, cy, (radius - 10.0).max(0.0), cx, cy, radius.max(1.0))?;
    gradient.add_color_stop(0.0, "rgba(255, 0, 0, 0)")?;
    gradient.add_color_stop(1.0, "rgba(255, 100, 100, 1)")?;

    ctx.begin_path();
    ctx.arc(cx, cy, radius, 0.0, std::f64::consts::TAU)?;
    ctx.close_path();
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.fill();
    Ok(())
}

/// Draw the whole field
pub fn draw_field(ctx: &CanvasRenderingContext2d, field: &StarField) -> Result<(), JsValue> {
    draw_background(ctx, field.width, field.height, "white")?;
    for shape in &field.shapes {
        draw_shape(ctx, shape, field.time)?;
    }
    if let Some(press) = field.press() {
        draw_press(ctx, press, field.time)?;
    }
    Ok(())
}
