//! Client-side router module.
//!
//! This module provides access to waymark-router: the routing state store,
//! history backends, route resolution components and navigation links.
//!
//! ## Example
//!
//! ```rust
//! use std::rc::Rc;
//! use waymark::router::{MemoryHistory, Route, RouterConfig, RouterProvider, Switch};
//!
//! let provider = RouterProvider::mount(
//!     Rc::new(MemoryHistory::new("/about")),
//!     RouterConfig::default(),
//! )
//! .unwrap();
//!
//! let app = Switch::new()
//!     .route(Route::new("/", "Home"))
//!     .route(Route::new("/about", "About"));
//!
//! assert_eq!(app.render(&provider.scope()).render_to_string(), "About");
//! ```

// Re-export all waymark-router functionality
pub use waymark_router::*;
