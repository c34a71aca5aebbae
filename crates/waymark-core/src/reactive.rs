//! Signal - observable reactive cell
//!
//! `Signal<T>` holds a value shared between clones and notifies subscribers
//! every time it is written.
//!
//! ## Key Features
//!
//! - **Shared**: clones point at the same value, so a handle can be passed to
//!   every consumer of a piece of state.
//! - **Explicit subscription**: [`Signal::subscribe`] returns a
//!   [`Subscription`] guard; dropping the guard stops notifications.
//! - **Latest value wins**: the new value is stored before any subscriber
//!   runs. A write made from inside a subscriber is delivered to every
//!   subscriber, and the outer notification then stops, so nobody sees the
//!   superseded value after the newer one or receives the newer one twice.
//!   Subscribers that had not been reached yet skip the superseded value.
//!
//! ## Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use waymark_core::Signal;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let sink = Rc::clone(&seen);
//! let _sub = count.subscribe(move |n| sink.set(*n));
//!
//! count.set(42);
//! assert_eq!(seen.get(), 42);
//!
//! count.update(|n| *n += 1);
//! assert_eq!(count.get(), 43);
//! assert_eq!(seen.get(), 43);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Subscriber<T> = Rc<dyn Fn(&T)>;

struct Subscribers<T> {
	next_id: Cell<u64>,
	// Bumped on every write.
	generation: Cell<u64>,
	entries: RefCell<Vec<(u64, Subscriber<T>)>>,
}

impl<T> Subscribers<T> {
	fn new() -> Self {
		Self {
			next_id: Cell::new(0),
			generation: Cell::new(0),
			entries: RefCell::new(Vec::new()),
		}
	}

	fn remove(&self, id: u64) {
		self.entries.borrow_mut().retain(|(entry, _)| *entry != id);
	}
}

/// A reactive cell that holds a value and notifies subscribers on writes.
///
/// ## Cloning
///
/// `Signal<T>` shares its value via `Rc<RefCell<T>>`. All clones read and
/// write the same value and share one subscriber list.
pub struct Signal<T: 'static> {
	value: Rc<RefCell<T>>,
	subscribers: Rc<Subscribers<T>>,
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(Subscribers::new()),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Read the current value by reference
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the value in place and notify subscribers once
	pub fn update<F>(&self, f: F)
	where
		T: Clone,
		F: FnOnce(&mut T),
	{
		f(&mut *self.value.borrow_mut());
		self.notify();
	}

	/// Register a callback invoked after every write
	///
	/// The callback runs until the returned [`Subscription`] is dropped.
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn(&T) + 'static,
	{
		let id = self.subscribers.next_id.get();
		self.subscribers.next_id.set(id + 1);
		self.subscribers
			.entries
			.borrow_mut()
			.push((id, Rc::new(f)));

		let weak: Weak<Subscribers<T>> = Rc::downgrade(&self.subscribers);
		Subscription::new(move || {
			if let Some(subscribers) = weak.upgrade() {
				subscribers.remove(id);
			}
		})
	}

	/// Number of live subscribers
	pub fn subscriber_count(&self) -> usize {
		self.subscribers.entries.borrow().len()
	}

	fn notify(&self)
	where
		T: Clone,
	{
		let generation = self.subscribers.generation.get() + 1;
		self.subscribers.generation.set(generation);

		// Subscribers may write this signal or (un)subscribe while we iterate.
		let snapshot: Vec<Subscriber<T>> = self
			.subscribers
			.entries
			.borrow()
			.iter()
			.map(|(_, f)| Rc::clone(f))
			.collect();

		for subscriber in snapshot {
			// A nested write already delivered a newer value to everyone.
			if self.subscribers.generation.get() != generation {
				break;
			}
			let value = self.value.borrow().clone();
			subscriber(&value);
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscriber_count())
			.finish()
	}
}

/// Guard returned by [`Signal::subscribe`].
///
/// Dropping it unregisters the callback.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
	cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
	/// Creates a guard that runs `cancel` when dropped.
	pub fn new(cancel: impl FnOnce() + 'static) -> Self {
		Self {
			cancel: Some(Box::new(cancel)),
		}
	}

	/// Unsubscribes now instead of on drop.
	pub fn cancel(mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(cancel) = self.cancel.take() {
			cancel();
		}
	}
}

impl fmt::Debug for Subscription {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Subscription")
			.field("active", &self.cancel.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_signal_get_set() {
		let signal = Signal::new(String::from("/"));
		signal.set("/about".to_string());
		assert_eq!(signal.get(), "/about");
	}

	#[rstest]
	fn test_clones_share_value() {
		let a = Signal::new(1);
		let b = a.clone();
		b.set(2);
		assert_eq!(a.get(), 2);
	}

	#[rstest]
	fn test_all_subscribers_see_same_value() {
		// Arrange
		let signal = Signal::new(0);
		let log = Rc::new(RefCell::new(Vec::new()));
		let subs: Vec<Subscription> = (0..3)
			.map(|i| {
				let log = Rc::clone(&log);
				let reader = signal.clone();
				signal.subscribe(move |v| log.borrow_mut().push((i, *v, reader.get())))
			})
			.collect();

		// Act
		signal.set(7);

		// Assert
		assert_eq!(subs.len(), 3);
		assert_eq!(*log.borrow(), vec![(0, 7, 7), (1, 7, 7), (2, 7, 7)]);
	}

	#[rstest]
	fn test_drop_subscription_stops_notifications() {
		let signal = Signal::new(0);
		let hits = Rc::new(Cell::new(0));
		let sink = Rc::clone(&hits);
		let sub = signal.subscribe(move |_| sink.set(sink.get() + 1));

		signal.set(1);
		drop(sub);
		signal.set(2);

		assert_eq!(hits.get(), 1);
		assert_eq!(signal.subscriber_count(), 0);
	}

	#[rstest]
	fn test_cancel_subscription() {
		let signal = Signal::new(0);
		let sub = signal.subscribe(|_| {});
		assert_eq!(signal.subscriber_count(), 1);
		sub.cancel();
		assert_eq!(signal.subscriber_count(), 0);
	}

	#[rstest]
	fn test_subscription_outliving_signal() {
		let signal = Signal::new(0);
		let sub = signal.subscribe(|_| {});
		drop(signal);
		// Cancelling after the signal is gone is a no-op.
		drop(sub);
	}

	#[rstest]
	fn test_nested_write_delivers_latest_value_once() {
		// Arrange
		let signal = Signal::new(String::from("/"));
		let redirect = signal.clone();
		let _redirect = signal.subscribe(move |path| {
			if path == "/old" {
				redirect.set("/new".to_string());
			}
		});
		let log = Rc::new(RefCell::new(Vec::new()));
		let sink = Rc::clone(&log);
		let _logger = signal.subscribe(move |path| sink.borrow_mut().push(path.clone()));

		// Act
		signal.set("/a".to_string());
		signal.set("/old".to_string());
		signal.set("/b".to_string());

		// Assert
		assert_eq!(signal.get(), "/b");
		assert_eq!(*log.borrow(), vec!["/a", "/new", "/b"]);
	}

	#[rstest]
	fn test_update_notifies_once() {
		let signal = Signal::new(vec![1]);
		let hits = Rc::new(Cell::new(0));
		let sink = Rc::clone(&hits);
		let _sub = signal.subscribe(move |_| sink.set(sink.get() + 1));

		signal.update(|v| {
			v.push(2);
			v.push(3);
		});

		assert_eq!(hits.get(), 1);
		assert_eq!(signal.with(|v| v.len()), 3);
	}
}
