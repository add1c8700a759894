/// Whether the help overlay is on screen.
///
/// Transitions are pure so the rules, the forced hide on narrow viewports
/// in particular, can be checked without a document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
	/// Not shown; the initial state.
	#[default]
	Hidden,
	/// Shown over the graph.
	Visible,
}

impl Visibility {
	/// State after `show()`.
	pub fn shown(self) -> Self {
		Visibility::Visible
	}

	/// State after `hide()`.
	pub fn hidden(self) -> Self {
		Visibility::Hidden
	}

	/// State after `toggle()`.
	pub fn toggled(self) -> Self {
		match self {
			Visibility::Hidden => Visibility::Visible,
			Visibility::Visible => Visibility::Hidden,
		}
	}

	/// State after the viewport became `width` wide.
	///
	/// Narrower than `min_width` forces `Hidden`; anything else keeps the
	/// current state, it never shows the overlay.
	pub fn after_resize(self, width: f64, min_width: f64) -> Self {
		if width < min_width { Visibility::Hidden } else { self }
	}

	/// Whether this is [`Visibility::Visible`].
	pub fn is_visible(self) -> bool {
		self == Visibility::Visible
	}
}

#[cfg(test)]
mod tests {
	use super::Visibility::{self, *};

	#[test]
	fn starts_hidden() {
		assert_eq!(Visibility::default(), Hidden);
	}

	#[test]
	fn show_and_hide_are_idempotent() {
		assert_eq!(Hidden.shown().shown(), Visible);
		assert_eq!(Visible.hidden().hidden(), Hidden);
	}

	#[test]
	fn double_toggle_restores() {
		for state in [Hidden, Visible] {
			assert_eq!(state.toggled().toggled(), state);
			assert_ne!(state.toggled(), state);
		}
	}

	#[test]
	fn narrow_resize_forces_hidden() {
		assert_eq!(Visible.after_resize(500.0, 720.0), Hidden);
		assert_eq!(Hidden.after_resize(500.0, 720.0), Hidden);
	}

	#[test]
	fn wide_resize_never_shows() {
		assert_eq!(Hidden.after_resize(720.0, 720.0), Hidden);
		assert_eq!(Visible.after_resize(1920.0, 720.0), Visible);
	}

	#[test]
	fn resize_to_exact_minimum_keeps_visible() {
		assert_eq!(Visible.after_resize(720.0, 720.0), Visible);
		assert_eq!(Visible.after_resize(719.5, 720.0), Hidden);
	}
}
