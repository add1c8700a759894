use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::components::paint::{clear, context_2d, paint};
use crate::components::window::{DocumentMarker, window_size};
use crate::encoding::EncodingRegistry;
use crate::legend::{HelpOverlay, LegendGroup};
use crate::resize::ResizeSignal;

/// Room for caption text, whose width the scene does not know.
const CAPTION_MARGIN: f64 = 24.0;

#[component]
pub fn HelpOverlayPanel(registry: Rc<EncodingRegistry>, resize: ResizeSignal) -> impl IntoView {
	let visible = RwSignal::new(false);
	let overlay = Rc::new(RefCell::new(HelpOverlay::new(registry.clone(), DocumentMarker { visible })));
	let subscription = HelpOverlay::subscribe(&overlay, &resize);
	if let Some((width, _)) = window_size() {
		overlay.borrow_mut().on_resize(width);
	}

	let rows: Vec<(LegendGroup, NodeRef<leptos::html::Canvas>)> = LegendGroup::ALL
		.into_iter()
		.map(|group| (group, NodeRef::new()))
		.collect();
	let titles: Vec<String> = LegendGroup::ALL.iter().map(|group| group.title(&registry)).collect();

	let (overlay_paint, rows_paint) = (overlay.clone(), rows.clone());
	Effect::new(move |_| {
		// the resize subscription lives as long as this effect
		let _alive = &subscription;
		for (group, canvas_ref) in &rows_paint {
			let Some(canvas) = canvas_ref.get() else {
				continue;
			};
			let canvas: HtmlCanvasElement = canvas.into();
			let scene = overlay_paint.borrow().draw(*group);
			let (w, h) = scene.bounds();
			let (w, h) = (w + CAPTION_MARGIN, h + CAPTION_MARGIN / 2.0);
			canvas.set_width(w.ceil() as u32);
			canvas.set_height(h.ceil() as u32);
			let Some(ctx) = context_2d(&canvas) else {
				warn!("legend canvas `{}` has no 2d context", group.key());
				continue;
			};
			clear(&ctx, w, h, None);
			paint(&scene, &ctx);
		}
	});

	let overlay_toggle = overlay.clone();
	let on_toggle = move |_: MouseEvent| {
		overlay_toggle.borrow_mut().toggle();
	};
	let on_close = move |_: MouseEvent| {
		overlay.borrow_mut().hide();
	};

	view! {
		<button class="help-toggle" title="What am I looking at?" on:click=on_toggle>
			"?"
		</button>
		<div class="help-overlay" class:visible=move || visible.get()>
			<button class="help-close" on:click=on_close>
				"×"
			</button>
			{rows
				.into_iter()
				.zip(titles)
				.map(|((group, canvas_ref), title)| {
					view! {
						<div class=format!("help-row help-row-{}", group.key())>
							<canvas node_ref=canvas_ref />
							<span class="help-caption">{title}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
