//! Integration tests for the client-side router
//!
//! These tests drive the public API end to end:
//! 1. Mounting, navigation and history writes
//! 2. External (back/forward) navigation
//! 3. First-match selection and prefix groups
//! 4. Parameter extraction and reverse building
//! 5. Links and active navigation links
//! 6. Fail-fast behavior once the provider is gone

use std::cell::RefCell;
use std::rc::Rc;

use rstest::{fixture, rstest};
use waymark_router::{
	HistoryAction, Link, MemoryHistory, NavLink, Route, RouteGroup, RouteParams, RouteScope,
	RouterConfig, RouterError, RouterProvider, Switch, View, build_path, match_path,
};

struct App {
	history: Rc<MemoryHistory>,
	provider: RouterProvider,
}

impl App {
	fn scope(&self) -> RouteScope {
		self.provider.scope()
	}

	fn path(&self) -> String {
		self.provider.handle().current_path()
	}
}

fn mount_at(path: &str) -> App {
	let history = Rc::new(MemoryHistory::new(path));
	let provider = RouterProvider::mount(history.clone(), RouterConfig::default()).unwrap();
	App { history, provider }
}

#[fixture]
fn app() -> App {
	mount_at("/")
}

fn html(view: View) -> String {
	view.render_to_string()
}

fn site() -> Switch {
	Switch::new()
		.route(Route::new("/", "Home"))
		.route(Route::new("/about", "About"))
		.route(Route::new("/user/special", "Special user"))
		.route(Route::with_params("/user/:id", |params| {
			format!("User {}", params.get("id").unwrap_or_default())
		}))
		.not_found("404 Not Found")
}

/// Mount at `/`, then navigate to `/about`
#[rstest]
fn test_navigation_swaps_rendered_route(app: App) {
	// Arrange
	let home = Route::new("/", "Home").exact();
	let about = Route::new("/about", "About");

	// Assert initial render
	assert_eq!(html(home.render(&app.scope())), "Home");
	assert!(about.render(&app.scope()).is_empty());
	assert_eq!(html(site().render(&app.scope())), "Home");

	// Act
	app.provider.handle().navigate("/about").unwrap();

	// Assert
	assert!(home.render(&app.scope()).is_empty());
	assert_eq!(html(about.render(&app.scope())), "About");
	assert_eq!(html(site().render(&app.scope())), "About");
	assert_eq!(
		app.history.actions(),
		vec![HistoryAction::Push("/about".to_string())]
	);
}

/// The host changes the location and fires its notification on its own
#[rstest]
fn test_external_navigation_updates_state(app: App) {
	// Act
	app.history.set_location("/about");
	app.history.notify_listeners();

	// Assert
	assert_eq!(app.path(), "/about");
	assert_eq!(html(site().render(&app.scope())), "About");
	assert!(app.history.actions().is_empty());
}

#[rstest]
fn test_back_and_forward_buttons(app: App) {
	let router = app.provider.handle();
	router.navigate("/about").unwrap();
	router.navigate("/user/9").unwrap();

	app.history.back();
	assert_eq!(html(site().render(&app.scope())), "About");

	app.history.back();
	assert_eq!(html(site().render(&app.scope())), "Home");

	app.history.forward();
	assert_eq!(app.path(), "/about");
}

#[rstest]
fn test_navigate_same_path_twice_pushes_twice(app: App) {
	let router = app.provider.handle();

	router.navigate("/about").unwrap();
	let after_first = app.path();
	router.navigate("/about").unwrap();

	assert_eq!(app.path(), after_first);
	assert_eq!(
		app.history.actions(),
		vec![
			HistoryAction::Push("/about".to_string()),
			HistoryAction::Push("/about".to_string()),
		]
	);
}

#[rstest]
#[case("/user/special", "Special user")]
#[case("/user/123", "User 123")]
#[case("/user/123/extra", "404 Not Found")]
#[case("/nowhere", "404 Not Found")]
fn test_switch_first_match(#[case] path: &str, #[case] expected: &str) {
	let app = mount_at(path);
	assert_eq!(html(site().render(&app.scope())), expected);
}

#[rstest]
fn test_parameter_round_trip() {
	let result = match_path("/user/:id", "/user/123", false);

	assert!(result.matched);
	assert_eq!(result.params.get("id"), Some("123"));
	assert_eq!(result.params.len(), 1);
	assert_eq!(build_path("/user/:id", &result.params).unwrap(), "/user/123");
}

#[rstest]
fn test_typed_parameters_from_scope() {
	let app = mount_at("/orders/17");
	let route = Route::scoped("/orders/:id", |scope| match scope.params().get_as::<u32>("id") {
		Ok(id) => format!("order #{id}"),
		Err(err) => err.to_string(),
	});
	assert_eq!(html(route.render(&app.scope())), "order #17");

	app.provider.handle().navigate("/orders/abc").unwrap();
	let rendered = html(route.render(&app.scope()));
	assert!(rendered.contains("abc"), "unexpected error text: {rendered}");
}

#[rstest]
#[case("/users", "/:id", "/users/7", "User 7")]
#[case("/users/", "id", "/users/id", "User id")]
fn test_prefix_group_composition(
	#[case] prefix: &str,
	#[case] child: &str,
	#[case] path: &str,
	#[case] expected: &str,
) {
	// Arrange
	let app = mount_at(path);
	let switch = Switch::new().group(RouteGroup::new(prefix).route(Route::scoped(
		child,
		|scope| {
			let id = scope
				.params()
				.get("id")
				.map(str::to_string)
				.unwrap_or_else(|| "id".to_string());
			format!("User {id}")
		},
	)));

	// Act
	let rendered = html(switch.render(&app.scope()));

	// Assert
	assert_eq!(rendered, expected);
}

#[rstest]
fn test_link_click_navigates_without_reload(app: App) {
	// Arrange
	let link = Link::new(&app.scope(), "/about", "About").render();
	let View::Element(anchor) = &link else {
		panic!("link did not render an element");
	};

	// Act
	let event = anchor.click();

	// Assert
	assert!(event.is_default_prevented());
	assert_eq!(app.path(), "/about");
	assert_eq!(html(site().render(&app.scope())), "About");
}

#[rstest]
fn test_navlink_active_class_follows_navigation(app: App) {
	let scope = app.scope();
	let links = [
		NavLink::new(&scope, "/", "Home").exact(true),
		NavLink::new(&scope, "/about", "About"),
	];
	let classes = |links: &[NavLink]| -> Vec<Option<String>> {
		links
			.iter()
			.map(|link| match link.render() {
				View::Element(el) => el.attr_value("class").map(str::to_string),
				_ => None,
			})
			.collect()
	};

	assert_eq!(classes(&links), vec![Some("active".to_string()), None]);

	app.provider.handle().navigate("/about").unwrap();

	assert_eq!(classes(&links), vec![None, Some("active".to_string())]);
}

#[rstest]
fn test_subscribers_see_every_change(app: App) {
	let seen = Rc::new(RefCell::new(Vec::new()));
	let sink = Rc::clone(&seen);
	let subscription = app
		.provider
		.handle()
		.subscribe(move |path| sink.borrow_mut().push(path.to_string()));

	app.provider.handle().navigate("/about").unwrap();
	app.history.back();
	drop(subscription);
	app.history.forward();

	assert_eq!(*seen.borrow(), vec!["/about".to_string(), "/".to_string()]);
}

#[rstest]
fn test_handles_fail_after_unmount() {
	let App { history, provider } = mount_at("/");
	let scope = provider.scope();
	let link = Link::new(&scope, "/about", "About");

	provider.unmount();

	assert_eq!(
		scope.router().navigate("/about"),
		Err(RouterError::ProviderUnmounted)
	);
	assert_eq!(link.activate(), Err(RouterError::ProviderUnmounted));
	assert!(history.actions().is_empty());
	assert_eq!(history.listener_count(), 0);
	// Reads keep working against the last known path
	assert_eq!(html(site().render(&scope)), "Home");
}

#[rstest]
fn test_config_from_json_drives_router() {
	let config =
		RouterConfig::from_json(r#"{ "initial_path": "/about", "active_class": "here" }"#)
			.unwrap();
	let history = Rc::new(MemoryHistory::new("/"));
	let provider = RouterProvider::mount(history, config).unwrap();

	let view = NavLink::new(&provider.scope(), "/about", "About").render();
	let View::Element(anchor) = &view else {
		panic!("navlink did not render an element");
	};

	assert_eq!(provider.handle().current_path(), "/about");
	assert_eq!(anchor.attr_value("class"), Some("here"));
}

#[rstest]
fn test_route_params_collect() {
	let params: RouteParams = [("a", "1"), ("b", "2")].into_iter().collect();
	assert_eq!(build_path("/:a/x/:b", &params).unwrap(), "/1/x/2");
	assert_eq!(
		build_path("/:a/:missing", &params),
		Err(RouterError::MissingParameter("missing".to_string()))
	);
}
