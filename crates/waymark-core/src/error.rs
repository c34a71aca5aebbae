//! Error types for client-side routing.

use thiserror::Error;

/// Error type for typed path parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
	/// The requested parameter was not bound by the matched pattern.
	#[error("Missing path parameter: {name}")]
	Missing {
		/// Name of the parameter.
		name: String,
	},
	/// Failed to parse a parameter value.
	#[error("Failed to parse parameter '{name}' value '{raw_value}' as {param_type}: {reason}")]
	ParseError {
		/// Name of the parameter.
		name: String,
		/// Expected type name.
		param_type: &'static str,
		/// Raw string value that failed to parse.
		raw_value: String,
		/// Error message from parsing.
		reason: String,
	},
}

/// Error type for router operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouterError {
	/// The routing state was used after its provider was unmounted.
	#[error("Router used outside of a mounted RouterProvider")]
	ProviderUnmounted,
	/// The host history rejected the navigation.
	#[error("Navigation failed: {0}")]
	NavigationFailed(String),
	/// Missing parameter while building a path from a pattern.
	#[error("Missing parameter: {0}")]
	MissingParameter(String),
	/// The pattern cannot be used for the requested operation.
	#[error("Invalid pattern: {0}")]
	InvalidPattern(String),
	/// Router configuration could not be loaded.
	#[error("Invalid router configuration: {0}")]
	Config(String),
	/// Path parameter extraction failed.
	#[error("Path extraction error: {0}")]
	PathExtraction(#[from] PathError),
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_path_error_display() {
		let err = PathError::ParseError {
			name: "id".to_string(),
			param_type: "u32",
			raw_value: "abc".to_string(),
			reason: "invalid digit found in string".to_string(),
		};
		let message = err.to_string();
		assert!(message.contains("'id'"));
		assert!(message.contains("abc"));
		assert!(message.contains("u32"));
	}

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::ProviderUnmounted.to_string(),
			"Router used outside of a mounted RouterProvider"
		);
		assert_eq!(
			RouterError::MissingParameter("id".to_string()).to_string(),
			"Missing parameter: id"
		);
	}

	#[rstest]
	fn test_path_error_converts_into_router_error() {
		let err: RouterError = PathError::Missing {
			name: "slug".to_string(),
		}
		.into();
		assert_eq!(
			err.to_string(),
			"Path extraction error: Missing path parameter: slug"
		);
	}
}
