//! History backends.
//!
//! The router reads and writes the location only through the [`History`]
//! trait:
//!
//! - [`MemoryHistory`]: an in-process entry stack, used on native targets and
//!   in tests. `back`/`forward` stand in for the browser buttons.
//! - [`BrowserHistory`] (wasm32 only): `window.location` and the History API,
//!   with `popstate` as the external navigation notification.
//!
//! Pushing or replacing an entry never notifies listeners. Only navigation
//! that happens outside the router (back, forward) does.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use waymark_core::RouterError;

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;

/// Callback fired when the location changes outside the router.
pub type HistoryListener = Rc<dyn Fn()>;

/// Identifies a registered [`HistoryListener`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Host location and session history.
pub trait History {
	/// Returns the path of the current location.
	fn current_path(&self) -> Result<String, RouterError>;

	/// Adds a new entry for `path` and makes it current.
	fn push(&self, path: &str) -> Result<(), RouterError>;

	/// Replaces the current entry with `path`.
	fn replace(&self, path: &str) -> Result<(), RouterError>;

	/// Registers a listener for external location changes.
	fn listen(&self, listener: HistoryListener) -> Result<ListenerId, RouterError>;

	/// Removes a listener. Unknown ids are ignored.
	fn unlisten(&self, id: ListenerId);
}

/// A write performed on a [`MemoryHistory`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryAction {
	/// `push(path)`
	Push(String),
	/// `replace(path)`
	Replace(String),
}

/// In-memory session history.
///
/// # Example
///
/// ```
/// use waymark_router::{History, MemoryHistory};
///
/// let history = MemoryHistory::new("/");
/// history.push("/about").unwrap();
/// assert_eq!(history.current_path().unwrap(), "/about");
///
/// assert!(history.back());
/// assert_eq!(history.current_path().unwrap(), "/");
/// ```
pub struct MemoryHistory {
	entries: RefCell<Vec<String>>,
	index: Cell<usize>,
	actions: RefCell<Vec<HistoryAction>>,
	listeners: RefCell<Vec<(ListenerId, HistoryListener)>>,
	next_id: Cell<u64>,
}

impl MemoryHistory {
	/// Creates a history with a single entry.
	pub fn new(initial_path: impl Into<String>) -> Self {
		Self {
			entries: RefCell::new(vec![initial_path.into()]),
			index: Cell::new(0),
			actions: RefCell::new(Vec::new()),
			listeners: RefCell::new(Vec::new()),
			next_id: Cell::new(0),
		}
	}

	/// Moves one entry back and notifies listeners.
	///
	/// Returns `false` without notifying when already at the first entry.
	pub fn back(&self) -> bool {
		let index = self.index.get();
		if index == 0 {
			return false;
		}
		self.index.set(index - 1);
		self.notify_listeners();
		true
	}

	/// Moves one entry forward and notifies listeners.
	///
	/// Returns `false` without notifying when already at the last entry.
	pub fn forward(&self) -> bool {
		let index = self.index.get();
		if index + 1 >= self.entries.borrow().len() {
			return false;
		}
		self.index.set(index + 1);
		self.notify_listeners();
		true
	}

	/// Changes the current location without notifying anyone.
	///
	/// Pair with [`MemoryHistory::notify_listeners`] to simulate a host that
	/// updates the location before dispatching its change event.
	pub fn set_location(&self, path: impl Into<String>) {
		let index = self.index.get();
		self.entries.borrow_mut()[index] = path.into();
	}

	/// Fires every registered listener.
	pub fn notify_listeners(&self) {
		let listeners: Vec<HistoryListener> = self
			.listeners
			.borrow()
			.iter()
			.map(|(_, listener)| Rc::clone(listener))
			.collect();
		for listener in listeners {
			listener();
		}
	}

	/// Returns every push and replace performed so far, oldest first.
	pub fn actions(&self) -> Vec<HistoryAction> {
		self.actions.borrow().clone()
	}

	/// Returns the entry stack, oldest first.
	pub fn entries(&self) -> Vec<String> {
		self.entries.borrow().clone()
	}

	/// Returns the number of registered listeners.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}
}

impl Default for MemoryHistory {
	fn default() -> Self {
		Self::new("/")
	}
}

impl fmt::Debug for MemoryHistory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MemoryHistory")
			.field("entries", &self.entries.borrow())
			.field("index", &self.index.get())
			.field("listeners", &self.listener_count())
			.finish()
	}
}

impl History for MemoryHistory {
	fn current_path(&self) -> Result<String, RouterError> {
		Ok(self.entries.borrow()[self.index.get()].clone())
	}

	fn push(&self, path: &str) -> Result<(), RouterError> {
		let index = self.index.get();
		let mut entries = self.entries.borrow_mut();
		// A push discards the forward stack.
		entries.truncate(index + 1);
		entries.push(path.to_string());
		self.index.set(index + 1);
		self.actions
			.borrow_mut()
			.push(HistoryAction::Push(path.to_string()));
		Ok(())
	}

	fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.entries.borrow_mut()[self.index.get()] = path.to_string();
		self.actions
			.borrow_mut()
			.push(HistoryAction::Replace(path.to_string()));
		Ok(())
	}

	fn listen(&self, listener: HistoryListener) -> Result<ListenerId, RouterError> {
		let id = ListenerId(self.next_id.get());
		self.next_id.set(id.0 + 1);
		self.listeners.borrow_mut().push((id, listener));
		Ok(id)
	}

	fn unlisten(&self, id: ListenerId) {
		self.listeners
			.borrow_mut()
			.retain(|(registered, _)| *registered != id);
	}
}

#[cfg(target_arch = "wasm32")]
mod browser {
	use std::cell::{Cell, RefCell};

	use wasm_bindgen::JsCast;
	use wasm_bindgen::JsValue;
	use wasm_bindgen::closure::Closure;
	use waymark_core::RouterError;

	use super::{History, HistoryListener, ListenerId};

	const POPSTATE: &str = "popstate";

	type PopStateClosure = Closure<dyn FnMut(web_sys::PopStateEvent)>;

	/// Session history of the browser window.
	#[derive(Default)]
	pub struct BrowserHistory {
		listeners: RefCell<Vec<(ListenerId, PopStateClosure)>>,
		next_id: Cell<u64>,
	}

	impl BrowserHistory {
		/// Creates a handle to the window's history.
		pub fn new() -> Self {
			Self::default()
		}
	}

	fn window() -> Result<web_sys::Window, RouterError> {
		web_sys::window()
			.ok_or_else(|| RouterError::NavigationFailed("window is not available".to_string()))
	}

	fn js_error(err: JsValue) -> RouterError {
		RouterError::NavigationFailed(format!("{err:?}"))
	}

	impl History for BrowserHistory {
		fn current_path(&self) -> Result<String, RouterError> {
			window()?.location().pathname().map_err(js_error)
		}

		fn push(&self, path: &str) -> Result<(), RouterError> {
			window()?
				.history()
				.map_err(js_error)?
				.push_state_with_url(&JsValue::NULL, "", Some(path))
				.map_err(js_error)
		}

		fn replace(&self, path: &str) -> Result<(), RouterError> {
			window()?
				.history()
				.map_err(js_error)?
				.replace_state_with_url(&JsValue::NULL, "", Some(path))
				.map_err(js_error)
		}

		fn listen(&self, listener: HistoryListener) -> Result<ListenerId, RouterError> {
			let closure = PopStateClosure::new(move |_event: web_sys::PopStateEvent| listener());
			window()?
				.add_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
				.map_err(js_error)?;

			let id = ListenerId(self.next_id.get());
			self.next_id.set(id.0 + 1);
			self.listeners.borrow_mut().push((id, closure));
			Ok(id)
		}

		fn unlisten(&self, id: ListenerId) {
			let mut listeners = self.listeners.borrow_mut();
			let Some(position) = listeners.iter().position(|(registered, _)| *registered == id)
			else {
				return;
			};
			let (_, closure) = listeners.remove(position);
			let removed = window().and_then(|window| {
				window
					.remove_event_listener_with_callback(POPSTATE, closure.as_ref().unchecked_ref())
					.map_err(js_error)
			});
			if let Err(err) = removed {
				tracing::warn!(error = %err, "failed to remove popstate listener");
			}
		}
	}
}
