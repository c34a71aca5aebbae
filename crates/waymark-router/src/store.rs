//! Routing state store.
//!
//! [`RouterProvider`] owns one routing state for as long as it is alive:
//! mounting seeds the current path and subscribes to external history
//! navigation, dropping it releases the subscription. Components never look
//! the state up implicitly. They receive a [`RouterHandle`] (usually inside a
//! [`RouteScope`]) from the provider, so a router cannot be reached without
//! having mounted one first.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use waymark_router::{MemoryHistory, RouterConfig, RouterProvider};
//!
//! let history = Rc::new(MemoryHistory::new("/"));
//! let provider = RouterProvider::mount(history.clone(), RouterConfig::default()).unwrap();
//! let router = provider.handle();
//!
//! router.navigate("/about").unwrap();
//! assert_eq!(router.current_path(), "/about");
//! assert!(router.is_active("/about", true));
//!
//! history.back();
//! assert_eq!(router.current_path(), "/");
//! ```

use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};

use waymark_core::{
	MatchMode, NoopObserver, PathMatch, RouterError, Signal, Subscription, TracingObserver,
	match_path_with, path_only,
};

use crate::config::RouterConfig;
use crate::history::{History, ListenerId};
use crate::scope::RouteScope;

struct RouterState {
	history: Rc<dyn History>,
	current_path: Signal<String>,
	config: RouterConfig,
	mounted: Cell<bool>,
	listener: Cell<Option<ListenerId>>,
}

impl RouterState {
	/// Re-reads the host location into the current path.
	///
	/// Safe to call any number of times.
	fn sync_from_history(&self) {
		if !self.mounted.get() {
			return;
		}
		match self.history.current_path() {
			Ok(path) => {
				tracing::debug!(path = %path, "external navigation");
				self.current_path.set(path);
			}
			Err(err) => tracing::warn!(error = %err, "failed to read location after external navigation"),
		}
	}
}

/// Mounted routing state.
///
/// Dropping the provider unmounts it: the history subscription is released
/// and every outstanding [`RouterHandle`] starts failing navigation with
/// [`RouterError::ProviderUnmounted`].
pub struct RouterProvider {
	handle: RouterHandle,
}

impl RouterProvider {
	/// Mounts a router on `history`.
	///
	/// The current path is `config.initial_path` when set, otherwise the
	/// history's current location.
	///
	/// # Errors
	///
	/// Propagates failures to read the location or to register the history
	/// listener.
	pub fn mount(history: Rc<dyn History>, config: RouterConfig) -> Result<Self, RouterError> {
		let initial_path = match &config.initial_path {
			Some(path) => path.clone(),
			None => history.current_path()?,
		};

		let state = Rc::new(RouterState {
			history,
			current_path: Signal::new(initial_path),
			config,
			mounted: Cell::new(true),
			listener: Cell::new(None),
		});

		// Weak: the history owns the listener, and the state owns the history.
		let weak: Weak<RouterState> = Rc::downgrade(&state);
		let id = state.history.listen(Rc::new(move || {
			if let Some(state) = weak.upgrade() {
				state.sync_from_history();
			}
		}))?;
		state.listener.set(Some(id));

		tracing::debug!(
			path = %state.current_path.with(|p| p.clone()),
			"router mounted"
		);

		Ok(Self {
			handle: RouterHandle { state },
		})
	}

	/// Mounts a router on the browser window's history.
	#[cfg(target_arch = "wasm32")]
	pub fn mount_browser(config: RouterConfig) -> Result<Self, RouterError> {
		Self::mount(Rc::new(crate::history::BrowserHistory::new()), config)
	}

	/// Returns a handle to this router's state.
	pub fn handle(&self) -> RouterHandle {
		self.handle.clone()
	}

	/// Returns the root scope for rendering routes and links.
	pub fn scope(&self) -> RouteScope {
		RouteScope::root(self.handle())
	}

	/// Unmounts the router. Equivalent to dropping it.
	pub fn unmount(self) {}
}

impl Drop for RouterProvider {
	fn drop(&mut self) {
		let state = &self.handle.state;
		state.mounted.set(false);
		if let Some(id) = state.listener.take() {
			state.history.unlisten(id);
		}
		tracing::debug!("router unmounted");
	}
}

impl fmt::Debug for RouterProvider {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterProvider")
			.field("handle", &self.handle)
			.finish()
	}
}

/// The routing capability set: current path, navigation and activity checks.
///
/// Handles are cheap to clone and all clones share one state.
#[derive(Clone)]
pub struct RouterHandle {
	state: Rc<RouterState>,
}

impl RouterHandle {
	/// Returns the current path.
	pub fn current_path(&self) -> String {
		self.state.current_path.get()
	}

	/// Returns the signal holding the current path.
	pub fn path_signal(&self) -> &Signal<String> {
		&self.state.current_path
	}

	/// Returns the router configuration.
	pub fn config(&self) -> &RouterConfig {
		&self.state.config
	}

	/// Returns whether the owning provider is still mounted.
	pub fn is_mounted(&self) -> bool {
		self.state.mounted.get()
	}

	/// Pushes `path` onto the history and makes it the current path.
	///
	/// Identical consecutive calls each push an entry.
	///
	/// # Errors
	///
	/// Returns [`RouterError::ProviderUnmounted`] once the provider is gone,
	/// or the history's error if the push fails. The current path is left
	/// unchanged on error.
	pub fn navigate(&self, path: &str) -> Result<(), RouterError> {
		self.ensure_mounted(path)?;
		self.state.history.push(path)?;
		tracing::debug!(path, "navigate");
		self.state.current_path.set(path.to_string());
		Ok(())
	}

	/// Replaces the current history entry with `path` and makes it current.
	///
	/// # Errors
	///
	/// Same as [`RouterHandle::navigate`].
	pub fn replace(&self, path: &str) -> Result<(), RouterError> {
		self.ensure_mounted(path)?;
		self.state.history.replace(path)?;
		tracing::debug!(path, "replace");
		self.state.current_path.set(path.to_string());
		Ok(())
	}

	/// Returns whether `pattern` matches the current path.
	pub fn is_active(&self, pattern: &str, exact: bool) -> bool {
		self.match_current(pattern, MatchMode::from(exact)).matched
	}

	/// Matches `pattern` against the current path.
	///
	/// Query strings and fragments are not part of the match.
	pub fn match_current(&self, pattern: &str, mode: MatchMode) -> PathMatch {
		self.state.current_path.with(|current| {
			let path = path_only(current);
			if self.state.config.trace_matching {
				match_path_with(pattern, path, mode, &mut TracingObserver)
			} else {
				match_path_with(pattern, path, mode, &mut NoopObserver)
			}
		})
	}

	/// Calls `f` with the new path after every change.
	pub fn subscribe<F>(&self, f: F) -> Subscription
	where
		F: Fn(&str) + 'static,
	{
		self.state
			.current_path
			.subscribe(move |path: &String| f(path.as_str()))
	}

	fn ensure_mounted(&self, path: &str) -> Result<(), RouterError> {
		if self.is_mounted() {
			return Ok(());
		}
		tracing::warn!(path, "navigation through an unmounted router");
		Err(RouterError::ProviderUnmounted)
	}
}

impl fmt::Debug for RouterHandle {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouterHandle")
			.field("current_path", &self.current_path())
			.field("mounted", &self.is_mounted())
			.finish()
	}
}
