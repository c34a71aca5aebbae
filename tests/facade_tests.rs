//! Tests for the top-level re-exports

use rstest::rstest;
use waymark::core::match_path;
use waymark::{MatchMode, RouteParams};

#[rstest]
fn test_core_reexports() {
	let m = match_path("/posts/:slug", "/posts/hello", true);
	assert!(m.matched);
	assert_eq!(m.params.get_as::<String>("slug"), Ok("hello".to_string()));
	assert_eq!(MatchMode::default(), MatchMode::Prefix);
	assert!(RouteParams::new().is_empty());
}

#[cfg(feature = "router")]
#[rstest]
fn test_router_reexports() {
	use std::rc::Rc;
	use waymark::{MemoryHistory, Route, RouterConfig, RouterError, RouterProvider, Switch};

	// Arrange
	let provider =
		RouterProvider::mount(Rc::new(MemoryHistory::new("/")), RouterConfig::default()).unwrap();
	let router = provider.handle();
	let app = Switch::new()
		.route(Route::new("/", "Home"))
		.route(Route::new("/about", "About"));

	// Act
	router.navigate("/about").unwrap();
	drop(provider);

	// Assert
	assert_eq!(app.render(&waymark::RouteScope::root(router.clone())).render_to_string(), "About");
	assert_eq!(router.navigate("/"), Err(RouterError::ProviderUnmounted));
}
