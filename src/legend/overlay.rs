use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::debug;

use crate::encoding::EncodingRegistry;
use crate::resize::{ResizeSignal, Subscription};
use crate::scene::Scene;

use super::draw::{self, LegendGroup};
use super::visibility::Visibility;

/// Class put on the document while the overlay is visible.
pub const HELP_MARKER_CLASS: &str = "help-visible";

/// Something the overlay flags while it is visible, typically the document
/// body, so surrounding chrome can dim itself.
pub trait MarkerTarget {
	/// Adds (`present = true`) or removes the marker `class`.
	fn set_marker(&self, class: &str, present: bool);
}

/// No document to mark.
impl MarkerTarget for () {
	fn set_marker(&self, _class: &str, _present: bool) {}
}

/// The legend ("help") overlay: draws the encodings of the shared registry
/// and owns the show/hide state.
pub struct HelpOverlay<M: MarkerTarget> {
	registry: Rc<EncodingRegistry>,
	visibility: Visibility,
	marker: M,
}

impl<M: MarkerTarget> HelpOverlay<M> {
	/// A hidden overlay drawing with `registry`.
	pub fn new(registry: Rc<EncodingRegistry>, marker: M) -> Self {
		Self {
			registry,
			visibility: Visibility::Hidden,
			marker,
		}
	}

	/// Shares `overlay` and wires it to `resize`; every emitted width
	/// re-checks the minimum window width until the subscription goes away.
	pub fn subscribe(overlay: &Rc<RefCell<Self>>, resize: &ResizeSignal) -> Subscription
	where
		M: 'static,
	{
		let weak: Weak<RefCell<Self>> = Rc::downgrade(overlay);
		resize.subscribe(move |width| {
			if let Some(overlay) = weak.upgrade() {
				overlay.borrow_mut().on_resize(width);
			}
		})
	}

	/// The registry the legend draws with.
	pub fn registry(&self) -> &Rc<EncodingRegistry> {
		&self.registry
	}

	/// Current state.
	pub fn visibility(&self) -> Visibility {
		self.visibility
	}

	/// Whether the overlay is shown.
	pub fn is_visible(&self) -> bool {
		self.visibility.is_visible()
	}

	/// Shows the overlay.
	pub fn show(&mut self) -> Visibility {
		self.transition(self.visibility.shown())
	}

	/// Hides the overlay.
	pub fn hide(&mut self) -> Visibility {
		self.transition(self.visibility.hidden())
	}

	/// Flips between shown and hidden.
	pub fn toggle(&mut self) -> Visibility {
		self.transition(self.visibility.toggled())
	}

	/// Forces the overlay hidden when the viewport is narrower than
	/// `help.page.minWindowWidth`.
	pub fn on_resize(&mut self, width: f64) -> Visibility {
		let min_width = self.registry.config().help.page.min_window_width;
		self.transition(self.visibility.after_resize(width, min_width))
	}

	/// Scene for one legend group.
	pub fn draw(&self, group: LegendGroup) -> Scene {
		draw::draw_group(&self.registry, group)
	}

	fn transition(&mut self, next: Visibility) -> Visibility {
		if next != self.visibility {
			debug!("help overlay {:?} -> {:?}", self.visibility, next);
			self.visibility = next;
			self.marker.set_marker(HELP_MARKER_CLASS, next.is_visible());
		}
		self.visibility
	}
}
