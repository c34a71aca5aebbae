//! IntoView trait and View enum for route rendering.
//!
//! Route payloads and navigation elements produce a [`View`] tree. The host
//! framework mounts it; this crate only builds it and can serialize it to
//! HTML for tests and server output.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Handler invoked when an element is activated.
pub type ClickHandler = Rc<dyn Fn(&mut ClickEvent)>;

/// Activation of a clickable element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
	default_prevented: bool,
}

impl ClickEvent {
	/// Creates an event whose default action has not been prevented.
	pub fn new() -> Self {
		Self::default()
	}

	/// Suppresses the host's default action (following the `href`).
	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	/// Returns whether [`ClickEvent::prevent_default`] was called.
	pub fn is_default_prevented(&self) -> bool {
		self.default_prevented
	}
}

/// A unified representation of renderable content.
#[derive(Debug, Clone, Default)]
pub enum View {
	/// An element.
	Element(ElementView),
	/// A text node.
	Text(Cow<'static, str>),
	/// Several views without a wrapper element.
	Fragment(Vec<View>),
	/// Renders nothing.
	#[default]
	Empty,
}

/// An element in the view tree.
#[derive(Clone)]
pub struct ElementView {
	tag: Cow<'static, str>,
	attrs: Vec<(Cow<'static, str>, Cow<'static, str>)>,
	children: Vec<View>,
	is_void: bool,
	on_click: Option<ClickHandler>,
}

impl fmt::Debug for ElementView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ElementView")
			.field("tag", &self.tag)
			.field("attrs", &self.attrs)
			.field("children", &self.children)
			.field("is_void", &self.is_void)
			.field("has_click_handler", &self.on_click.is_some())
			.finish()
	}
}

impl ElementView {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = matches!(
			tag.as_ref(),
			"area"
				| "base" | "br"
				| "col" | "embed"
				| "hr" | "img"
				| "input" | "link"
				| "meta" | "source"
				| "track" | "wbr"
		);
		Self {
			tag,
			attrs: Vec::new(),
			children: Vec::new(),
			is_void,
			on_click: None,
		}
	}

	/// Sets an attribute.
	///
	/// Setting a name twice keeps its original position and the later value.
	pub fn attr(
		mut self,
		name: impl Into<Cow<'static, str>>,
		value: impl Into<Cow<'static, str>>,
	) -> Self {
		let name = name.into();
		let value = value.into();
		match self.attrs.iter().position(|(existing, _)| *existing == name) {
			Some(index) => self.attrs[index].1 = value,
			None => self.attrs.push((name, value)),
		}
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoView) -> Self {
		self.children.push(child.into_view());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoView>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_view()));
		self
	}

	/// Sets the click handler.
	pub fn on_click<F>(mut self, handler: F) -> Self
	where
		F: Fn(&mut ClickEvent) + 'static,
	{
		self.on_click = Some(Rc::new(handler));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attrs(&self) -> &[(Cow<'static, str>, Cow<'static, str>)] {
		&self.attrs
	}

	/// Returns the value of the attribute called `name`.
	pub fn attr_value(&self, name: &str) -> Option<&str> {
		self.attrs
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_ref())
	}

	/// Returns the child views.
	pub fn child_views(&self) -> &[View] {
		&self.children
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Returns whether a click handler is attached.
	pub fn has_click_handler(&self) -> bool {
		self.on_click.is_some()
	}

	/// Dispatches a click to this element and returns the resulting event.
	pub fn click(&self) -> ClickEvent {
		let mut event = ClickEvent::new();
		if let Some(handler) = &self.on_click {
			handler(&mut event);
		}
		event
	}
}

impl View {
	/// Creates an element view.
	pub fn element(tag: impl Into<Cow<'static, str>>) -> ElementView {
		ElementView::new(tag)
	}

	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoView>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_view()).collect())
	}

	/// Creates an empty view.
	pub fn empty() -> Self {
		Self::Empty
	}

	/// Returns whether this view renders nothing.
	pub fn is_empty(&self) -> bool {
		match self {
			View::Empty => true,
			View::Fragment(children) => children.iter().all(View::is_empty),
			_ => false,
		}
	}

	/// Finds the first element, depth first, for which `predicate` holds.
	pub fn find_element<P>(&self, predicate: P) -> Option<&ElementView>
	where
		P: Fn(&ElementView) -> bool + Copy,
	{
		match self {
			View::Element(el) => {
				if predicate(el) {
					return Some(el);
				}
				el.child_views()
					.iter()
					.find_map(|child| child.find_element(predicate))
			}
			View::Fragment(children) => children
				.iter()
				.find_map(|child| child.find_element(predicate)),
			View::Text(_) | View::Empty => None,
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_to_string_inner(&mut output);
		output
	}

	fn render_to_string_inner(&self, output: &mut String) {
		match self {
			View::Element(el) => {
				output.push('<');
				output.push_str(el.tag_name());

				for (name, value) in el.attrs() {
					output.push(' ');
					output.push_str(name);
					output.push_str("=\"");
					escape_into(value, output);
					output.push('"');
				}

				if el.is_void() {
					output.push_str(" />");
					return;
				}

				output.push('>');
				for child in el.child_views() {
					child.render_to_string_inner(output);
				}
				output.push_str("</");
				output.push_str(el.tag_name());
				output.push('>');
			}
			View::Text(text) => escape_into(text, output),
			View::Fragment(children) => {
				for child in children {
					child.render_to_string_inner(output);
				}
			}
			View::Empty => {}
		}
	}
}

fn escape_into(raw: &str, output: &mut String) {
	for c in raw.chars() {
		match c {
			'&' => output.push_str("&amp;"),
			'<' => output.push_str("&lt;"),
			'>' => output.push_str("&gt;"),
			'"' => output.push_str("&quot;"),
			'\'' => output.push_str("&#x27;"),
			_ => output.push(c),
		}
	}
}

/// Conversion into a [`View`].
pub trait IntoView {
	/// Converts self into a view.
	fn into_view(self) -> View;
}

impl IntoView for View {
	fn into_view(self) -> View {
		self
	}
}

impl IntoView for ElementView {
	fn into_view(self) -> View {
		View::Element(self)
	}
}

impl IntoView for &'static str {
	fn into_view(self) -> View {
		View::Text(Cow::Borrowed(self))
	}
}

impl IntoView for String {
	fn into_view(self) -> View {
		View::Text(Cow::Owned(self))
	}
}

impl IntoView for () {
	fn into_view(self) -> View {
		View::Empty
	}
}

impl<T: IntoView> IntoView for Option<T> {
	fn into_view(self) -> View {
		self.map(IntoView::into_view).unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::cell::Cell;

	#[rstest]
	fn test_render_element_with_attrs() {
		let view = View::element("a")
			.attr("href", "/about")
			.attr("class", "nav")
			.child("About")
			.into_view();

		assert_eq!(
			view.render_to_string(),
			"<a href=\"/about\" class=\"nav\">About</a>"
		);
	}

	#[rstest]
	fn test_render_escapes_text_and_attrs() {
		let view = View::element("p")
			.attr("title", "a\"b")
			.child("<script>")
			.into_view();

		assert_eq!(
			view.render_to_string(),
			"<p title=\"a&quot;b\">&lt;script&gt;</p>"
		);
	}

	#[rstest]
	fn test_attr_overrides_same_name() {
		let el = View::element("a")
			.attr("href", "/about")
			.attr("class", "nav")
			.attr("href", "/other");

		assert_eq!(el.attrs().len(), 2);
		assert_eq!(el.attr_value("href"), Some("/other"));
		assert_eq!(
			el.into_view().render_to_string(),
			"<a href=\"/other\" class=\"nav\"></a>"
		);
	}

	#[rstest]
	fn test_void_element() {
		let view = View::element("br").into_view();
		assert_eq!(view.render_to_string(), "<br />");
	}

	#[rstest]
	fn test_fragment_and_empty() {
		let view = View::fragment(vec![View::text("a"), View::empty(), View::text("b")]);
		assert_eq!(view.render_to_string(), "ab");
		assert!(!view.is_empty());
		assert!(View::fragment(vec![View::empty()]).is_empty());
	}

	#[rstest]
	fn test_click_runs_handler() {
		// Arrange
		let clicks = Rc::new(Cell::new(0));
		let sink = Rc::clone(&clicks);
		let el = View::element("button").on_click(move |event| {
			event.prevent_default();
			sink.set(sink.get() + 1);
		});

		// Act
		let event = el.click();

		// Assert
		assert!(event.is_default_prevented());
		assert_eq!(clicks.get(), 1);
	}

	#[rstest]
	fn test_click_without_handler() {
		let el = View::element("a");
		assert!(!el.has_click_handler());
		assert!(!el.click().is_default_prevented());
	}

	#[rstest]
	fn test_find_element_depth_first() {
		let view = View::fragment(vec![
			View::element("nav")
				.child(View::element("a").attr("id", "first"))
				.into_view(),
			View::element("a").attr("id", "second").into_view(),
		]);

		let found = view.find_element(|el| el.tag_name() == "a");
		assert_eq!(found.and_then(|el| el.attr_value("id")), Some("first"));
		assert!(view.find_element(|el| el.tag_name() == "form").is_none());
	}
}
