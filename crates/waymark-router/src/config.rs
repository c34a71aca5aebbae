//! Router configuration.
//!
//! Settings are plain serde data so they can be embedded in an application's
//! own configuration file or loaded from JSON.
//!
//! # Example
//!
//! ```
//! use waymark_router::RouterConfig;
//!
//! let config = RouterConfig::from_json(r#"{ "active_class": "is-current" }"#).unwrap();
//! assert_eq!(config.active_class, "is-current");
//! assert_eq!(config.initial_path, None);
//! assert!(!config.trace_matching);
//! ```

use serde::{Deserialize, Serialize};
use waymark_core::RouterError;

/// Default class applied by [`NavLink`](crate::NavLink) when its target is active.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// Router settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterConfig {
	/// Path to start from instead of the host's current location.
	pub initial_path: Option<String>,
	/// Class added to active navigation links.
	pub active_class: String,
	/// Emit TRACE events for every match performed by the router.
	pub trace_matching: bool,
}

impl Default for RouterConfig {
	fn default() -> Self {
		Self {
			initial_path: None,
			active_class: DEFAULT_ACTIVE_CLASS.to_string(),
			trace_matching: false,
		}
	}
}

impl RouterConfig {
	/// Parses a configuration from JSON. Missing fields take their defaults.
	///
	/// # Errors
	///
	/// Returns [`RouterError::Config`] if the input is not valid JSON for
	/// this structure.
	pub fn from_json(input: &str) -> Result<Self, RouterError> {
		serde_json::from_str(input).map_err(|e| RouterError::Config(e.to_string()))
	}

	/// Starts the router at `path`.
	pub fn with_initial_path(mut self, path: impl Into<String>) -> Self {
		self.initial_path = Some(path.into());
		self
	}

	/// Sets the class applied to active links.
	pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
		self.active_class = class.into();
		self
	}

	/// Enables or disables match tracing.
	pub fn with_trace_matching(mut self, enabled: bool) -> Self {
		self.trace_matching = enabled;
		self
	}
}
