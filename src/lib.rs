//! # Waymark
//!
//! A small client-side path router.
//!
//! Waymark maps the current location path onto declared routes, renders the
//! first or every matching route's content, and turns link clicks into
//! history navigation without a page reload. Routing state is handed down
//! explicitly through a scope object; nothing is looked up ambiently.
//!
//! ## Feature Flags
//!
//! - `router` (default) - routing state, history backends, routes and links
//!
//! Without `router`, only the host-independent primitives in [`core`] are
//! available.
//!
//! ## Crates
//!
//! - `waymark-core`: path matching, route parameters, signals, views, errors
//! - `waymark-router`: `RouterProvider`, `History`, `Route`, `Switch`,
//!   `RouteGroup`, `Link`, `NavLink`
//!
//! ## Patterns
//!
//! | Pattern        | Matches                                  |
//! |----------------|------------------------------------------|
//! | `/`            | the root                                 |
//! | `/about`       | the literal segment `about`              |
//! | `/user/:id`    | any second segment, bound as `id`        |
//! | `*`            | every path                               |
//!
//! Routes match as a prefix of the path unless marked exact. Inside a
//! `Switch`, routes without a declared mode match exactly.

pub mod core;
#[cfg(feature = "router")]
pub mod router;

pub use waymark_core::{MatchMode, RouteParams, RouterError, View};

#[cfg(feature = "router")]
pub use waymark_router::{
	Link, MemoryHistory, NavLink, Route, RouteGroup, RouteScope, RouterConfig, RouterHandle,
	RouterProvider, Switch,
};
