//! Explicit viewport-resize subscriptions.
//!
//! Each subscriber gets its own handle, so several overlays (or tests) can
//! listen to one source without replacing each other's handler.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Handler = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct Registry {
	next_id: Cell<u64>,
	handlers: RefCell<Vec<(u64, Handler)>>,
}

/// A single-threaded source of viewport widths.
#[derive(Clone, Default)]
pub struct ResizeSignal {
	inner: Rc<Registry>,
}

impl ResizeSignal {
	/// A signal with no subscribers.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `handler`; it runs on every [`emit`](Self::emit) until the
	/// returned [`Subscription`] is unsubscribed or dropped.
	#[must_use = "dropping the subscription unsubscribes immediately"]
	pub fn subscribe(&self, handler: impl Fn(f64) + 'static) -> Subscription {
		let id = self.inner.next_id.get();
		self.inner.next_id.set(id + 1);
		self.inner.handlers.borrow_mut().push((id, Rc::new(handler)));
		Subscription {
			id,
			registry: Rc::downgrade(&self.inner),
		}
	}

	/// Delivers a new viewport width to every current subscriber.
	pub fn emit(&self, width: f64) {
		// Snapshot so handlers may subscribe or unsubscribe while running.
		let handlers: Vec<Handler> = self
			.inner
			.handlers
			.borrow()
			.iter()
			.map(|(_, handler)| handler.clone())
			.collect();
		for handler in handlers {
			handler(width);
		}
	}

	/// Number of live subscriptions.
	pub fn subscriber_count(&self) -> usize {
		self.inner.handlers.borrow().len()
	}
}

/// Handle to one registered resize handler.
pub struct Subscription {
	id: u64,
	registry: Weak<Registry>,
}

impl Subscription {
	/// Removes the handler from its signal.
	pub fn unsubscribe(self) {
		drop(self);
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry.handlers.borrow_mut().retain(|(id, _)| *id != self.id);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_subscriber_sees_every_emit() {
		let signal = ResizeSignal::new();
		let seen_a = Rc::new(RefCell::new(Vec::new()));
		let seen_b = Rc::new(RefCell::new(Vec::new()));
		let (a, b) = (seen_a.clone(), seen_b.clone());
		let _sub_a = signal.subscribe(move |w| a.borrow_mut().push(w));
		let _sub_b = signal.subscribe(move |w| b.borrow_mut().push(w));

		signal.emit(800.0);
		signal.emit(400.0);

		assert_eq!(*seen_a.borrow(), vec![800.0, 400.0]);
		assert_eq!(*seen_b.borrow(), vec![800.0, 400.0]);
	}

	#[test]
	fn unsubscribe_only_removes_own_handler() {
		let signal = ResizeSignal::new();
		let hits = Rc::new(Cell::new(0));
		let (h1, h2) = (hits.clone(), hits.clone());
		let first = signal.subscribe(move |_| h1.set(h1.get() + 1));
		let _second = signal.subscribe(move |_| h2.set(h2.get() + 10));

		first.unsubscribe();
		signal.emit(1.0);

		assert_eq!(hits.get(), 10);
		assert_eq!(signal.subscriber_count(), 1);
	}

	#[test]
	fn handler_may_drop_its_own_subscription() {
		let signal = ResizeSignal::new();
		let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
		let inner = slot.clone();
		let sub = signal.subscribe(move |_| {
			inner.borrow_mut().take();
		});
		*slot.borrow_mut() = Some(sub);

		signal.emit(10.0);
		assert_eq!(signal.subscriber_count(), 0);
		signal.emit(10.0);
	}

	#[test]
	fn subscription_outliving_signal_is_harmless() {
		let signal = ResizeSignal::new();
		let sub = signal.subscribe(|_| {});
		drop(signal);
		drop(sub);
	}
}
