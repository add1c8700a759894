use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::legend::MarkerTarget;
use crate::resize::ResizeSignal;

/// Inner size of the browser window.
pub fn window_size() -> Option<(f64, f64)> {
	let window = web_sys::window()?;
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some((width, height))
}

/// Forwards the window `resize` event into a [`ResizeSignal`] until dropped.
pub struct WindowResize {
	callback: Closure<dyn FnMut()>,
}

impl WindowResize {
	/// Starts listening; `None` outside a browser window.
	pub fn attach(signal: ResizeSignal) -> Option<Self> {
		let window = web_sys::window()?;
		let callback: Closure<dyn FnMut()> = Closure::new(move || {
			if let Some((width, _)) = window_size() {
				signal.emit(width);
			}
		});
		if let Err(err) =
			window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
		{
			warn!("could not listen for resize: {:?}", err);
			return None;
		}
		Some(Self { callback })
	}
}

impl Drop for WindowResize {
	fn drop(&mut self) {
		if let Some(window) = web_sys::window() {
			let _ = window
				.remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
		}
	}
}

/// Marks `<body>` and mirrors the state into a reactive flag for the view.
pub struct DocumentMarker {
	/// Set while the marker is present.
	pub visible: RwSignal<bool>,
}

impl MarkerTarget for DocumentMarker {
	fn set_marker(&self, class: &str, present: bool) {
		self.visible.set(present);
		let Some(body) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.body())
		else {
			return;
		};
		let classes = body.class_list();
		let result = if present {
			classes.add_1(class)
		} else {
			classes.remove_1(class)
		};
		if let Err(err) = result {
			warn!("could not update body class `{}`: {:?}", class, err);
		}
	}
}
