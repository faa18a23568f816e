//! Firefly duel drawing

use glam::Vec2;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::stars::draw_shape;
use super::{draw_background, fill_circle};
use crate::consts::*;
use crate::firefly::{Firefly, FireflyGame};
use crate::stars::hsv_to_css;

/// Draw the complete duel frame
pub fn draw_game(
    ctx: &CanvasRenderingContext2d,
    game: &FireflyGame,
    tails: bool,
    debug_overlay: bool,
) -> Result<(), JsValue> {
    let now = game.time;
    let background = hsv_to_css(0.0, 0.0, 0.005);
    draw_background(ctx, game.world.width, game.world.height, &background)?;

    for fly_index in 0..2 {
        draw_lives(ctx, game, fly_index, now)?;
    }

    for fly in &game.flies {
        if tails {
            draw_tail(ctx, fly, now)?;
        }
        draw_fly(ctx, fly)?;
    }

    draw_planet(ctx, game, &background)?;
    draw_score(ctx, game)?;

    if let Some(collectible) = &game.collectible {
        draw_shape(ctx, collectible, now)?;
    }

    if debug_overlay {
        draw_debug_info(ctx, game)?;
        draw_forces(ctx, game, &game.flies[1])?;
    }

    if game.game_over {
        draw_game_over(ctx, game)?;
    }

    Ok(())
}

fn draw_planet(
    ctx: &CanvasRenderingContext2d,
    game: &FireflyGame,
    background: &str,
) -> Result<(), JsValue> {
    let planet = &game.world.planet;
    let (cx, cy) = (planet.center.x as f64, planet.center.y as f64);
    let r = planet.radius as f64;

    let gradient = ctx.create_radial_gradient(cx, cy, (r - 70.0).max(0.0), cx, cy, r)?;
    gradient.add_color_stop(0.0, background)?;
    gradient.add_color_stop(1.0, &hsv_to_css(0.0, 0.0, 0.2))?;
    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.set_stroke_style_str(&hsv_to_css(0.0, 0.0, 0.35));

    ctx.begin_path();
    ctx.arc(cx, cy, r, 0.0, std::f64::consts::TAU)?;
    ctx.close_path();
    ctx.fill();
    ctx.stroke();
    Ok(())
}

fn draw_fly(ctx: &CanvasRenderingContext2d, fly: &Firefly) -> Result<(), JsValue> {
    ctx.set_fill_style_str(&hsv_to_css(fly.hue, 0.8, 1.0));
    fill_circle(ctx, fly.pos.x, fly.pos.y, FLY_RADIUS)
}

fn draw_tail(ctx: &CanvasRenderingContext2d, fly: &Firefly, now: f32) -> Result<(), JsValue> {
    for point in &fly.tail {
        let fraction = (1.0 - (now - point.t) / FLY_TAIL_TIME).powi(2);
        ctx.set_fill_style_str(&hsv_to_css(fly.hue, 0.8, 0.7 * fraction));
        fill_circle(ctx, point.pos.x, point.pos.y, 0.7 * FLY_RADIUS * fraction)?;
    }
    Ok(())
}

/// Life markers along the top edge. The marker for the life currently
/// being consumed swells back up as the respawn timer runs.
fn draw_lives(
    ctx: &CanvasRenderingContext2d,
    game: &FireflyGame,
    fly_index: usize,
    now: f32,
) -> Result<(), JsValue> {
    let fly = &game.flies[fly_index];

    for life in 1..=game.lives[fly_index] {
        let loc = game.life_marker(fly_index, life);
        let mut radius = LIFE_MARKER_RADIUS;

        let gradient = ctx.create_radial_gradient(
            loc.x as f64,
            loc.y as f64,
            0.0,
            loc.x as f64,
            loc.y as f64,
            LIFE_MARKER_RADIUS as f64,
        )?;

        let respawning = fly.dead
            && life == game.lives[fly_index]
            && fly.off_screen_at.is_some_and(|t| now > t);
        if respawning {
            let t = fly.off_screen_at.unwrap_or(now);
            let value = 0.3 + 0.7 * ((now - t) / RESPAWN_DELAY).min(1.0);
            radius = value * FLY_RADIUS + (1.0 - value) * LIFE_MARKER_RADIUS;
            gradient.add_color_stop(0.2 * value, &hsv_to_css(fly.hue, 0.8, value))?;
        } else {
            gradient.add_color_stop(0.0, &hsv_to_css(fly.hue, 0.8, 0.4))?;
        }
        gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);

        fill_circle(ctx, loc.x, loc.y, radius)?;
    }
    Ok(())
}

fn draw_score(ctx: &CanvasRenderingContext2d, game: &FireflyGame) -> Result<(), JsValue> {
    ctx.set_text_baseline("middle");
    ctx.set_fill_style_str(&hsv_to_css(0.0, 0.0, 0.6));
    ctx.set_font("22px Helvetica");
    ctx.set_text_align("center");
    ctx.fill_text(
        &game.score.to_string(),
        game.world.width as f64 / 2.0,
        16.0,
    )
}

fn draw_game_over(ctx: &CanvasRenderingContext2d, game: &FireflyGame) -> Result<(), JsValue> {
    let (cx, cy) = (
        game.world.width as f64 / 2.0,
        game.world.height as f64 / 2.0,
    );
    ctx.set_fill_style_str(&hsv_to_css(0.0, 0.0, 0.3));
    ctx.set_font("20px Arial");
    ctx.set_text_align("center");
    ctx.fill_text(
        &format!("Game Over! Final score: {}", game.score),
        cx,
        cy - 20.0,
    )?;
    ctx.fill_text("Press ESC to fly again.", cx, cy + 20.0)
}

fn draw_vector(
    ctx: &CanvasRenderingContext2d,
    from: Vec2,
    vector: Vec2,
    color: &str,
) -> Result<(), JsValue> {
    const SCALE: f32 = 0.25;
    ctx.begin_path();
    ctx.move_to(from.x as f64, from.y as f64);
    ctx.line_to(
        (from.x + vector.x * SCALE) as f64,
        (from.y + vector.y * SCALE) as f64,
    );
    ctx.set_stroke_style_str(color);
    ctx.close_path();
    ctx.stroke();
    Ok(())
}

fn draw_forces(
    ctx: &CanvasRenderingContext2d,
    game: &FireflyGame,
    fly: &Firefly,
) -> Result<(), JsValue> {
    draw_vector(ctx, fly.pos, game.world.gravity(fly.pos), "red")?;
    draw_vector(ctx, fly.pos, fly.thrust, "yellow")?;
    draw_vector(ctx, fly.pos, fly.drag, "blue")?;
    draw_vector(ctx, fly.pos, fly.force, "white")
}

fn draw_debug_info(ctx: &CanvasRenderingContext2d, game: &FireflyGame) -> Result<(), JsValue> {
    let fly = &game.flies[1];
    ctx.set_fill_style_str("white");
    ctx.set_font("20px Arial");
    ctx.set_text_align("left");
    ctx.fill_text(
        &format!("Position: {:.0}, {:.0}", fly.pos.x, fly.pos.y),
        10.0,
        30.0,
    )?;
    ctx.fill_text(
        &format!("Velocity: {:.0}, {:.0}", fly.vel.x, fly.vel.y),
        10.0,
        50.0,
    )?;
    ctx.fill_text(
        &format!("Force: {:.0}, {:.0}", fly.force.x, fly.force.y),
        10.0,
        70.0,
    )?;
    ctx.fill_text(
        &format!(
            "Planet: {:.0}, {:.0}",
            game.world.planet.center.x, game.world.planet.center.y
        ),
        10.0,
        90.0,
    )
}
