//! Rendering: paints a [`Scene`] onto a 2D context.
//!
//! This module is the only place that draws on a [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only scene plus the background image and produces
//! pixels. It does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::config::MarkerShape;
use crate::consts::{CAPTION_FONT, LINE_DASH_PX};
use crate::scene::Scene;

/// Draw the full frame: image, guide lines, markers, captions.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. the image is broken).
pub fn draw(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, scene: &Scene<'_>) -> Result<(), JsValue> {
    // Layer 1: background.
    ctx.clear_rect(0.0, 0.0, scene.width, scene.height);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, scene.width, scene.height)?;

    // Layer 2: guides, markers, captions.
    draw_guides(ctx, scene)?;
    draw_markers(ctx, scene)?;
    draw_captions(ctx, scene)
}

fn draw_guides(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_line_join("round");
    ctx.set_line_cap("round");
    ctx.set_line_dash(&Array::of2(&LINE_DASH_PX.into(), &LINE_DASH_PX.into()))?;
    ctx.set_stroke_style_str(&scene.style.line_color);
    ctx.set_line_width(scene.style.line_width);

    ctx.begin_path();
    for guide in &scene.guides {
        ctx.move_to(guide.from.x, guide.from.y);
        ctx.line_to(guide.to.x, guide.to.y);
    }
    ctx.stroke();

    ctx.restore();
    Ok(())
}

fn draw_markers(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    let size = scene.marker_size;
    ctx.save();
    ctx.set_fill_style_str(&scene.style.marker_color);
    ctx.set_stroke_style_str(&scene.style.marker_color);
    ctx.set_line_width(scene.style.line_width);
    ctx.set_line_cap("round");

    for center in &scene.markers {
        ctx.begin_path();
        match scene.style.marker_shape {
            MarkerShape::Circle => {
                ctx.arc(center.x, center.y, size, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
            MarkerShape::Cross => {
                ctx.move_to(center.x - size, center.y - size);
                ctx.line_to(center.x + size, center.y + size);
                ctx.move_to(center.x - size, center.y + size);
                ctx.line_to(center.x + size, center.y - size);
                ctx.stroke();
            }
        }
    }

    ctx.restore();
    Ok(())
}

fn draw_captions(ctx: &CanvasRenderingContext2d, scene: &Scene<'_>) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(CAPTION_FONT);
    ctx.set_fill_style_str(&scene.style.line_color);
    for caption in &scene.captions {
        ctx.fill_text(caption.text, caption.at.x, caption.at.y)?;
    }
    ctx.restore();
    Ok(())
}
