use web_sys::CanvasRenderingContext2d;

use super::state::TrustGraphState;
use crate::components::paint::{clear, paint};

pub fn render(state: &TrustGraphState, ctx: &CanvasRenderingContext2d) {
	let background = state.renderer.registry().config().graph.background;
	clear(ctx, state.width, state.height, Some(background));

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	paint(state.renderer.scene(), ctx);
	ctx.restore();

	// full key of the hovered peer, in screen space
	if let Some(id) = state.hovered_peer() {
		let style = &state.renderer.registry().config().node.public_key_label;
		ctx.set_fill_style_str(&style.color.with_alpha(0.9));
		ctx.set_font(&style.css_font());
		ctx.set_text_align("start");
		ctx.set_text_baseline("top");
		let _ = ctx.fill_text(id, 12.0, 12.0);
	}
}
