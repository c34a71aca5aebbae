//! Waymark Router - client-side path routing
//!
//! Routing state lives in a [`RouterProvider`]. Everything that needs it
//! receives it explicitly, as a [`RouterHandle`] or a [`RouteScope`], so
//! there is no way to reach a router that was never mounted, and a handle
//! that outlives its provider fails with
//! [`RouterError::ProviderUnmounted`] instead of acting on stale state.
//!
//! ## Modules
//!
//! - [`config`]: [`RouterConfig`], serde-backed settings
//! - [`history`]: the [`History`] host boundary, [`MemoryHistory`] and (on
//!   wasm32) `BrowserHistory`
//! - [`store`]: [`RouterProvider`] and [`RouterHandle`]
//! - [`scope`]: [`RouteScope`], handle plus route parameters
//! - [`resolve`]: [`Route`], [`Switch`], [`RouteGroup`]
//! - [`link`]: [`Link`] and [`NavLink`]
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use waymark_router::{
//!     MemoryHistory, NavLink, Route, RouterConfig, RouterProvider, Switch, View,
//! };
//!
//! let history = Rc::new(MemoryHistory::new("/"));
//! let provider = RouterProvider::mount(history.clone(), RouterConfig::default()).unwrap();
//! let scope = provider.scope();
//!
//! let app = Switch::new()
//!     .route(Route::new("/", "home"))
//!     .route(Route::with_params("/user/:id", |params| {
//!         format!("user {}", params.get("id").unwrap_or_default())
//!     }));
//!
//! assert_eq!(app.render(&scope).render_to_string(), "home");
//!
//! let nav = NavLink::new(&scope, "/user/7", "Profile").render();
//! let View::Element(anchor) = &nav else { unreachable!() };
//! anchor.click();
//!
//! assert_eq!(app.render(&scope).render_to_string(), "user 7");
//! ```

pub mod config;
pub mod history;
pub mod link;
pub mod resolve;
pub mod scope;
pub mod store;

pub use config::{DEFAULT_ACTIVE_CLASS, RouterConfig};
#[cfg(target_arch = "wasm32")]
pub use history::BrowserHistory;
pub use history::{History, HistoryAction, HistoryListener, ListenerId, MemoryHistory};
pub use link::{Link, NavLink};
pub use resolve::{Route, RouteContent, RouteGroup, Switch, join_pattern, prefix_routes};
pub use scope::RouteScope;
pub use store::{RouterHandle, RouterProvider};

// Re-export the primitives routes and links are built from
pub use waymark_core::{
	ClickEvent, ElementView, IntoView, MatchMode, PathError, PathMatch, RouteParams, RouterError,
	Signal, Subscription, View, build_path, match_path,
};
