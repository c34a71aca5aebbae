//! Waymark Core - routing primitives without host dependencies
//!
//! This crate holds everything the router needs that does not touch the
//! browser:
//!
//! - [`matcher`]: pattern-to-path matching with `:name` parameters and the
//!   `*` catch-all, plus optional structured match tracing
//! - [`params`]: extracted path parameters with typed access
//! - [`reactive`]: [`Signal`], the observable cell that holds routing state
//! - [`view`]: the [`View`] tree produced by routes and links
//! - [`error`]: error types shared by the workspace
//!
//! The stateful router, history backends and components live in
//! `waymark-router`.

pub mod error;
pub mod matcher;
pub mod params;
pub mod reactive;
pub mod view;

pub use error::{PathError, RouterError};
pub use matcher::{
	CATCH_ALL, MatchEvent, MatchMode, MatchObserver, NoopObserver, PARAM_PREFIX, PathMatch,
	TracingObserver, build_path, match_path, match_path_with, path_only, split_segments,
};
pub use params::RouteParams;
pub use reactive::{Signal, Subscription};
pub use view::{ClickEvent, ClickHandler, ElementView, IntoView, View};
