//! Routing primitives module.
//!
//! This module provides access to the path matcher, route parameters,
//! the reactive [`Signal`](waymark_core::Signal), the view tree and the
//! shared error types.
//!
//! # Examples
//!
//! ```rust
//! use waymark::core::match_path;
//!
//! let result = match_path("/user/:id", "/user/123", true);
//! assert!(result.matched);
//! assert_eq!(result.params.get("id"), Some("123"));
//! ```

pub use waymark_core::*;
