//! Route scope passed down the component tree.

use waymark_core::RouteParams;

use crate::store::RouterHandle;

/// What a subtree can see of the router: the handle plus the parameters of
/// the innermost matched route.
///
/// The root scope comes from [`RouterProvider::scope`](crate::RouterProvider::scope)
/// and carries no parameters. Each matched [`Route`](crate::Route) renders its
/// payload with a child scope holding that route's parameters, replacing the
/// parent's.
#[derive(Debug, Clone)]
pub struct RouteScope {
	router: RouterHandle,
	params: RouteParams,
}

impl RouteScope {
	/// Creates a scope with no route parameters.
	pub fn root(router: RouterHandle) -> Self {
		Self {
			router,
			params: RouteParams::new(),
		}
	}

	/// Returns the router handle.
	pub fn router(&self) -> &RouterHandle {
		&self.router
	}

	/// Returns the parameters of the innermost matched route.
	pub fn params(&self) -> &RouteParams {
		&self.params
	}

	/// Returns a single parameter.
	pub fn param(&self, name: &str) -> Option<&str> {
		self.params.get(name)
	}

	pub(crate) fn child(&self, params: RouteParams) -> Self {
		Self {
			router: self.router.clone(),
			params,
		}
	}
}
