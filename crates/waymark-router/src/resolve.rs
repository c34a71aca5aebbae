//! Route resolution components.
//!
//! - [`Route`]: renders its payload when its pattern matches the current path
//! - [`Switch`]: renders only the first matching route, or a fallback
//! - [`RouteGroup`] / [`prefix_routes`]: rewrites child patterns under a
//!   shared prefix without rendering anything
//!
//! Every component goes through [`RouterHandle::match_current`], so a
//! pattern means the same thing wherever it is used. The only difference is
//! the match mode a route falls back to when it did not declare one: a lone
//! [`Route`] matches as a prefix, a route inside a [`Switch`] matches
//! exactly.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use waymark_router::{MemoryHistory, Route, RouteGroup, RouterConfig, RouterProvider, Switch, View};
//!
//! let history = Rc::new(MemoryHistory::new("/users/42"));
//! let provider = RouterProvider::mount(history, RouterConfig::default()).unwrap();
//!
//! let switch = Switch::new()
//!     .route(Route::new("/", "home"))
//!     .group(
//!         RouteGroup::new("/users")
//!             .route(Route::new("/", "user list"))
//!             .route(Route::with_params("/:id", |params| {
//!                 format!("user {}", params.get("id").unwrap_or_default())
//!             })),
//!     )
//!     .not_found("not found");
//!
//! assert_eq!(switch.render(&provider.scope()).render_to_string(), "user 42");
//! ```
//!
//! [`RouterHandle::match_current`]: crate::RouterHandle::match_current

use std::fmt;
use std::rc::Rc;

use waymark_core::{CATCH_ALL, IntoView, MatchMode, RouteParams, View};

use crate::scope::RouteScope;

/// What a route renders when it matches.
#[derive(Clone)]
pub enum RouteContent {
	/// A fixed view, cloned on every render.
	Static(View),
	/// A function of the route's scope.
	Render(Rc<dyn Fn(&RouteScope) -> View>),
}

impl RouteContent {
	fn render(&self, scope: &RouteScope) -> View {
		match self {
			Self::Static(view) => view.clone(),
			Self::Render(render) => render(scope),
		}
	}
}

impl fmt::Debug for RouteContent {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Static(view) => f.debug_tuple("Static").field(view).finish(),
			Self::Render(_) => f.write_str("Render(..)"),
		}
	}
}

/// A pattern and the content to render when it matches.
#[derive(Debug, Clone)]
pub struct Route {
	pattern: String,
	mode: Option<MatchMode>,
	content: RouteContent,
}

impl Route {
	/// Creates a route with fixed content.
	pub fn new(pattern: impl Into<String>, content: impl IntoView) -> Self {
		Self {
			pattern: pattern.into(),
			mode: None,
			content: RouteContent::Static(content.into_view()),
		}
	}

	/// Creates a route whose content is computed from the extracted
	/// parameters.
	pub fn with_params<F, V>(pattern: impl Into<String>, render: F) -> Self
	where
		F: Fn(&RouteParams) -> V + 'static,
		V: IntoView,
	{
		Self::scoped(pattern, move |scope| render(scope.params()))
	}

	/// Creates a route whose content is computed from its scope.
	///
	/// Use this for content that renders nested routes or links: the scope
	/// carries both the router handle and this route's parameters.
	pub fn scoped<F, V>(pattern: impl Into<String>, render: F) -> Self
	where
		F: Fn(&RouteScope) -> V + 'static,
		V: IntoView,
	{
		Self {
			pattern: pattern.into(),
			mode: None,
			content: RouteContent::Render(Rc::new(move |scope| render(scope).into_view())),
		}
	}

	/// Requires the whole path to match.
	pub fn exact(self) -> Self {
		self.mode(MatchMode::Exact)
	}

	/// Matches when the pattern covers the leading segments of the path.
	pub fn prefix(self) -> Self {
		self.mode(MatchMode::Prefix)
	}

	/// Sets the match mode.
	pub fn mode(mut self, mode: MatchMode) -> Self {
		self.mode = Some(mode);
		self
	}

	/// Returns the pattern.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the mode set with [`Route::exact`], [`Route::prefix`] or
	/// [`Route::mode`], if any.
	pub fn declared_mode(&self) -> Option<MatchMode> {
		self.mode
	}

	/// Returns the content.
	pub fn content(&self) -> &RouteContent {
		&self.content
	}

	/// Returns this route with its pattern replaced.
	pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = pattern.into();
		self
	}

	/// Renders the content if the route matches, using `default_mode` when
	/// no mode was declared.
	pub fn resolve(&self, scope: &RouteScope, default_mode: MatchMode) -> Option<View> {
		let mode = self.mode.unwrap_or(default_mode);
		let params = scope
			.router()
			.match_current(&self.pattern, mode)
			.into_params()?;
		Some(self.content.render(&scope.child(params)))
	}

	/// Renders the content if the route matches, otherwise an empty view.
	///
	/// Routes without a declared mode match as a prefix here.
	pub fn render(&self, scope: &RouteScope) -> View {
		self.resolve(scope, MatchMode::Prefix).unwrap_or_default()
	}
}

/// Renders the first matching route.
///
/// Routes are tried in insertion order. Routes without a declared mode must
/// match the whole path.
#[derive(Debug, Clone, Default)]
pub struct Switch {
	routes: Vec<Route>,
	not_found: Option<RouteContent>,
}

impl Switch {
	/// Creates an empty switch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a route.
	pub fn route(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Appends several routes.
	pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
		self.routes.extend(routes);
		self
	}

	/// Appends the routes of a group, already prefixed.
	pub fn group(self, group: RouteGroup) -> Self {
		self.routes(group)
	}

	/// Sets the content rendered when no route matches.
	pub fn not_found(mut self, content: impl IntoView) -> Self {
		self.not_found = Some(RouteContent::Static(content.into_view()));
		self
	}

	/// Returns the routes in evaluation order.
	pub fn route_list(&self) -> &[Route] {
		&self.routes
	}

	/// Returns the index of the route that would render.
	pub fn matched_index(&self, scope: &RouteScope) -> Option<usize> {
		self.routes.iter().position(|route| {
			scope
				.router()
				.match_current(route.pattern(), route.declared_mode().unwrap_or(MatchMode::Exact))
				.matched
		})
	}

	/// Renders the first matching route, the fallback, or nothing.
	pub fn render(&self, scope: &RouteScope) -> View {
		if let Some(view) = self
			.routes
			.iter()
			.find_map(|route| route.resolve(scope, MatchMode::Exact))
		{
			return view;
		}
		match &self.not_found {
			Some(content) => content.render(scope),
			None => View::Empty,
		}
	}
}

/// Routes sharing a pattern prefix.
///
/// A group only rewrites patterns. Put it in a [`Switch`] or iterate it to
/// render the routes.
///
/// ```
/// use waymark_router::{Route, RouteGroup};
///
/// let routes = RouteGroup::new("/users")
///     .route(Route::new("/", "list"))
///     .route(Route::new("/:id", "detail"))
///     .into_routes();
///
/// let patterns: Vec<_> = routes.iter().map(|r| r.pattern()).collect();
/// assert_eq!(patterns, ["/users", "/users/:id"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteGroup {
	prefix: String,
	routes: Vec<Route>,
}

impl RouteGroup {
	/// Creates an empty group.
	pub fn new(prefix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			routes: Vec::new(),
		}
	}

	/// Appends a route.
	pub fn route(mut self, route: Route) -> Self {
		self.routes.push(route);
		self
	}

	/// Appends several routes.
	pub fn routes(mut self, routes: impl IntoIterator<Item = Route>) -> Self {
		self.routes.extend(routes);
		self
	}

	/// Nests another group. Its routes end up under both prefixes.
	pub fn group(self, group: RouteGroup) -> Self {
		self.routes(group)
	}

	/// Returns the prefix.
	pub fn prefix(&self) -> &str {
		&self.prefix
	}

	/// Returns the routes with the prefix applied.
	pub fn into_routes(self) -> Vec<Route> {
		prefix_routes(&self.prefix, self.routes)
	}
}

impl IntoIterator for RouteGroup {
	type Item = Route;
	type IntoIter = std::vec::IntoIter<Route>;

	fn into_iter(self) -> Self::IntoIter {
		self.into_routes().into_iter()
	}
}

/// Rewrites each route's pattern to sit under `prefix`.
///
/// Modes and content are kept.
pub fn prefix_routes(prefix: &str, routes: impl IntoIterator<Item = Route>) -> Vec<Route> {
	routes
		.into_iter()
		.map(|route| {
			let pattern = join_pattern(prefix, route.pattern());
			route.with_pattern(pattern)
		})
		.collect()
}

/// Joins a prefix and a child pattern with exactly one slash between them.
///
/// A child of `/` or the empty string stands for the prefix itself. The
/// catch-all keeps its meaning only under an empty or root prefix; under any
/// other prefix it becomes a literal `*` segment.
///
/// ```
/// use waymark_router::join_pattern;
///
/// assert_eq!(join_pattern("/users", "/:id"), "/users/:id");
/// assert_eq!(join_pattern("/users/", "id"), "/users/id");
/// assert_eq!(join_pattern("/users", "/"), "/users");
/// assert_eq!(join_pattern("/", "/about"), "/about");
/// ```
pub fn join_pattern(prefix: &str, child: &str) -> String {
	let prefix = prefix.trim_end_matches('/');
	let child = child.trim_start_matches('/');

	if prefix.is_empty() && child == CATCH_ALL {
		return CATCH_ALL.to_string();
	}

	let joined = match (prefix.is_empty(), child.is_empty()) {
		(true, true) => return "/".to_string(),
		(false, true) => prefix.to_string(),
		(true, false) => child.to_string(),
		(false, false) => format!("{prefix}/{child}"),
	};

	if joined.starts_with('/') {
		joined
	} else {
		format!("/{joined}")
	}
}
