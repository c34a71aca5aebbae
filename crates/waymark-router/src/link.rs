//! Navigation elements.
//!
//! [`Link`] renders an anchor whose click is intercepted and turned into
//! router navigation. [`NavLink`] additionally styles itself while its
//! target is active.

use std::borrow::Cow;

use waymark_core::{ElementView, IntoView, RouterError, View};

use crate::scope::RouteScope;
use crate::store::RouterHandle;

/// An anchor that navigates through the router instead of reloading.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use waymark_router::{Link, MemoryHistory, RouterConfig, RouterProvider, View};
///
/// let provider = RouterProvider::mount(Rc::new(MemoryHistory::new("/")), RouterConfig::default()).unwrap();
/// let view = Link::new(&provider.scope(), "/about", "About").class("nav").render();
///
/// let View::Element(anchor) = &view else { unreachable!() };
/// assert!(anchor.click().is_default_prevented());
/// assert_eq!(provider.handle().current_path(), "/about");
/// ```
#[derive(Debug, Clone)]
pub struct Link {
	router: RouterHandle,
	to: String,
	content: View,
	class: Option<String>,
	style: Option<String>,
	replace: bool,
	attrs: Vec<(String, String)>,
}

impl Link {
	/// Creates a link to `to`.
	pub fn new(scope: &RouteScope, to: impl Into<String>, content: impl IntoView) -> Self {
		Self {
			router: scope.router().clone(),
			to: to.into(),
			content: content.into_view(),
			class: None,
			style: None,
			replace: false,
			attrs: Vec::new(),
		}
	}

	/// Sets the CSS class.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.class = Some(class.into());
		self
	}

	/// Sets the inline style.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.style = Some(style.into());
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.replace = replace;
		self
	}

	/// Adds a custom attribute, overriding a generated one of the same name.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.attrs.push((name.into(), value.into()));
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		&self.to
	}

	/// Returns whether activation replaces the current entry.
	pub fn is_replace(&self) -> bool {
		self.replace
	}

	/// Navigates to the destination, as a click would.
	///
	/// # Errors
	///
	/// Propagates the router's navigation error.
	pub fn activate(&self) -> Result<(), RouterError> {
		navigate(&self.router, &self.to, self.replace)
	}

	/// Renders the anchor.
	pub fn render(&self) -> View {
		self.render_with(self.class.clone(), self.style.clone())
	}

	fn render_with(&self, class: Option<String>, style: Option<String>) -> View {
		let mut anchor = ElementView::new("a").attr("href", self.to.clone());

		if let Some(class) = class.filter(|c| !c.is_empty()) {
			anchor = anchor.attr("class", class);
		}
		if let Some(style) = style.filter(|s| !s.is_empty()) {
			anchor = anchor.attr("style", style);
		}
		anchor = anchor.attr("data-link", "true");
		for (name, value) in &self.attrs {
			anchor = anchor.attr(Cow::Owned(name.clone()), Cow::Owned(value.clone()));
		}

		let router = self.router.clone();
		let to = self.to.clone();
		let replace = self.replace;
		anchor
			.on_click(move |event| {
				event.prevent_default();
				if let Err(err) = navigate(&router, &to, replace) {
					tracing::warn!(to = %to, error = %err, "link navigation failed");
				}
			})
			.child(self.content.clone())
			.into_view()
	}
}

fn navigate(router: &RouterHandle, to: &str, replace: bool) -> Result<(), RouterError> {
	if replace {
		router.replace(to)
	} else {
		router.navigate(to)
	}
}

/// A [`Link`] that marks itself while its destination is active.
///
/// The active class defaults to the router's
/// [`active_class`](crate::RouterConfig::active_class). Activity is
/// evaluated at render time, so re-render after navigation.
///
/// ```
/// use std::rc::Rc;
/// use waymark_router::{MemoryHistory, NavLink, RouterConfig, RouterProvider, View};
///
/// let provider = RouterProvider::mount(Rc::new(MemoryHistory::new("/about")), RouterConfig::default()).unwrap();
/// let view = NavLink::new(&provider.scope(), "/about", "About").class("nav").render();
///
/// let View::Element(anchor) = &view else { unreachable!() };
/// assert_eq!(anchor.attr_value("class"), Some("nav active"));
/// ```
#[derive(Debug, Clone)]
pub struct NavLink {
	link: Link,
	exact: bool,
	active_class: String,
	active_style: Option<String>,
}

impl NavLink {
	/// Creates a navigation link to `to`.
	pub fn new(scope: &RouteScope, to: impl Into<String>, content: impl IntoView) -> Self {
		let active_class = scope.router().config().active_class.clone();
		Self {
			link: Link::new(scope, to, content),
			exact: false,
			active_class,
			active_style: None,
		}
	}

	/// Sets the CSS class applied regardless of activity.
	pub fn class(mut self, class: impl Into<String>) -> Self {
		self.link = self.link.class(class);
		self
	}

	/// Sets the inline style applied regardless of activity.
	pub fn style(mut self, style: impl Into<String>) -> Self {
		self.link = self.link.style(style);
		self
	}

	/// Sets whether to replace the current history entry.
	pub fn replace(mut self, replace: bool) -> Self {
		self.link = self.link.replace(replace);
		self
	}

	/// Adds a custom attribute, overriding a generated one of the same name.
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.link = self.link.attr(name, value);
		self
	}

	/// Only counts as active when the whole path matches.
	pub fn exact(mut self, exact: bool) -> Self {
		self.exact = exact;
		self
	}

	/// Overrides the class added while active.
	pub fn active_class(mut self, class: impl Into<String>) -> Self {
		self.active_class = class.into();
		self
	}

	/// Sets a style appended while active.
	pub fn active_style(mut self, style: impl Into<String>) -> Self {
		self.active_style = Some(style.into());
		self
	}

	/// Returns the destination path.
	pub fn to(&self) -> &str {
		self.link.to()
	}

	/// Returns whether the destination matches the current path.
	pub fn is_active(&self) -> bool {
		self.link.router.is_active(&self.link.to, self.exact)
	}

	/// Navigates to the destination, as a click would.
	///
	/// # Errors
	///
	/// Propagates the router's navigation error.
	pub fn activate(&self) -> Result<(), RouterError> {
		self.link.activate()
	}

	/// Renders the anchor with the active class and style applied if active.
	pub fn render(&self) -> View {
		if !self.is_active() {
			return self.link.render();
		}

		let class = join_non_empty(
			self.link.class.as_deref(),
			Some(self.active_class.as_str()),
			" ",
		);
		let style = join_non_empty(
			self.link.style.as_deref(),
			self.active_style.as_deref(),
			"; ",
		);
		self.link.render_with(class, style)
	}
}

fn join_non_empty(base: Option<&str>, extra: Option<&str>, separator: &str) -> Option<String> {
	let parts: Vec<&str> = [base, extra]
		.into_iter()
		.flatten()
		.map(str::trim)
		.filter(|part| !part.is_empty())
		.collect();
	if parts.is_empty() {
		None
	} else {
		Some(parts.join(separator))
	}
}
