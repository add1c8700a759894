use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::encoding::Color;
use crate::scene::{DrawCommand, Scene, TextAlign};

/// The 2D context of `canvas`, if the browser hands one out.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

/// Wipes the canvas, filling it with `background` when given.
pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64, background: Option<Color>) {
	match background {
		Some(color) => {
			ctx.set_fill_style_str(&color.to_string());
			ctx.fill_rect(0.0, 0.0, width, height);
		}
		None => ctx.clear_rect(0.0, 0.0, width, height),
	}
}

/// Replays `scene` onto `ctx` in the current transform.
pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let _ = ctx.set_line_dash(&js_sys::Array::new());
	ctx.set_line_cap("butt");

	for command in scene.commands() {
		match command {
			DrawCommand::Circle {
				center,
				radius,
				fill,
			} => {
				ctx.begin_path();
				let _ = ctx.arc(center.x, center.y, *radius, 0.0, 2.0 * PI);
				ctx.set_fill_style_str(&fill.to_string());
				ctx.fill();
			}
			DrawCommand::Line {
				from,
				to,
				width,
				stroke,
			} => {
				if from == to {
					continue;
				}
				ctx.set_stroke_style_str(&stroke.to_string());
				ctx.set_line_width(*width);
				ctx.begin_path();
				ctx.move_to(from.x, from.y);
				ctx.line_to(to.x, to.y);
				ctx.stroke();
			}
			DrawCommand::Text {
				at,
				text,
				style,
				align,
			} => {
				ctx.set_font(&style.css_font());
				ctx.set_fill_style_str(&style.color.to_string());
				match align {
					TextAlign::Center => {
						ctx.set_text_align("center");
						ctx.set_text_baseline("middle");
					}
					TextAlign::Start => {
						ctx.set_text_align("start");
						ctx.set_text_baseline("alphabetic");
					}
				}
				let _ = ctx.fill_text(text, at.x, at.y);
			}
		}
	}
}
