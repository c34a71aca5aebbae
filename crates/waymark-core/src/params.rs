//! Path parameters extracted by a successful match.
//!
//! Values are kept as raw strings. Typed access goes through
//! [`RouteParams::get_as`], which parses on demand and reports a
//! [`PathError`] carrying the offending raw value.
//!
//! # Example
//!
//! ```
//! use waymark_core::{RouteParams, match_path};
//!
//! let params = match_path("/users/:id", "/users/42", true).params;
//! let id: u64 = params.get_as("id").unwrap();
//! assert_eq!(id, 42);
//! ```

use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::PathError;

/// Mapping of parameter names to the path segments they bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
	values: HashMap<String, String>,
}

impl RouteParams {
	/// Creates an empty parameter set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Binds `name` to `value`, overwriting an earlier binding of the same name.
	pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
		self.values.insert(name.into(), value.into());
	}

	/// Returns the raw value bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.values.get(name).map(String::as_str)
	}

	/// Parses the value bound to `name` into `T`.
	///
	/// # Errors
	///
	/// Returns [`PathError::Missing`] if `name` is not bound and
	/// [`PathError::ParseError`] if the value does not parse as `T`.
	pub fn get_as<T>(&self, name: &str) -> Result<T, PathError>
	where
		T: FromStr,
		T::Err: Display,
	{
		let raw = self.get(name).ok_or_else(|| PathError::Missing {
			name: name.to_string(),
		})?;

		raw.parse::<T>().map_err(|e| PathError::ParseError {
			name: name.to_string(),
			param_type: std::any::type_name::<T>(),
			raw_value: raw.to_string(),
			reason: e.to_string(),
		})
	}

	/// Returns whether `name` is bound.
	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	/// Returns the number of bound parameters.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns whether no parameters are bound.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over `(name, value)` pairs in arbitrary order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			values: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

impl From<HashMap<String, String>> for RouteParams {
	fn from(values: HashMap<String, String>) -> Self {
		Self { values }
	}
}

impl From<RouteParams> for HashMap<String, String> {
	fn from(params: RouteParams) -> Self {
		params.values
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_overwrites_duplicate_name() {
		let mut params = RouteParams::new();
		params.insert("id", "1");
		params.insert("id", "2");

		assert_eq!(params.len(), 1);
		assert_eq!(params.get("id"), Some("2"));
	}

	#[rstest]
	#[case("42", 42)]
	#[case("0", 0)]
	fn test_get_as_parses(#[case] raw: &str, #[case] expected: u32) {
		let params: RouteParams = [("id", raw)].into_iter().collect();
		assert_eq!(params.get_as::<u32>("id"), Ok(expected));
	}

	#[rstest]
	fn test_get_as_reports_raw_value() {
		// Arrange
		let params: RouteParams = [("id", "abc")].into_iter().collect();

		// Act
		let err = params.get_as::<i64>("id").unwrap_err();

		// Assert
		match err {
			PathError::ParseError {
				name,
				param_type,
				raw_value,
				..
			} => {
				assert_eq!(name, "id");
				assert_eq!(param_type, "i64");
				assert_eq!(raw_value, "abc");
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[rstest]
	fn test_get_as_missing() {
		let params = RouteParams::new();
		assert_eq!(
			params.get_as::<String>("slug"),
			Err(PathError::Missing {
				name: "slug".to_string()
			})
		);
	}

	#[rstest]
	fn test_empty_value_is_preserved() {
		let params: RouteParams = [("q", "")].into_iter().collect();
		assert!(params.contains("q"));
		assert_eq!(params.get("q"), Some(""));
	}
}
