//! Path pattern matching.
//!
//! Patterns are plain strings made of `/`-separated segments:
//!
//! - `/about` - literal segments, compared verbatim
//! - `/users/:id` - `:name` binds whatever the path has at that position
//! - `*` - catch-all, only meaningful as the whole pattern
//!
//! Matching is either [`MatchMode::Exact`] (segment counts must be equal) or
//! [`MatchMode::Prefix`] (the pattern only has to cover the leading segments
//! of the path). Empty segments produced by leading, trailing or repeated
//! slashes are ignored on both sides.
//!
//! There is no ranking between patterns. Components that choose among several
//! routes take the first declared match, so `/user/special` must be declared
//! before `/user/:id`.
//!
//! # Example
//!
//! ```
//! use waymark_core::match_path;
//!
//! let m = match_path("/user/:id", "/user/123", true);
//! assert!(m.matched);
//! assert_eq!(m.params.get("id"), Some("123"));
//!
//! assert!(match_path("/user", "/user/123", false).matched);
//! assert!(!match_path("/user", "/user/123", true).matched);
//! ```

use crate::error::RouterError;
use crate::params::RouteParams;

/// Pattern that matches every path.
pub const CATCH_ALL: &str = "*";

/// Marker prefix of a parameter segment.
pub const PARAM_PREFIX: char = ':';

/// How many path segments a pattern must account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
	/// Pattern and path must have the same number of segments.
	Exact,
	/// The pattern must match the leading segments of the path.
	#[default]
	Prefix,
}

impl MatchMode {
	/// Returns whether this is [`MatchMode::Exact`].
	pub fn is_exact(self) -> bool {
		matches!(self, Self::Exact)
	}
}

impl From<bool> for MatchMode {
	fn from(exact: bool) -> Self {
		if exact { Self::Exact } else { Self::Prefix }
	}
}

/// Result of matching one pattern against one path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMatch {
	/// Whether the pattern matched.
	pub matched: bool,
	/// Parameters bound by the pattern. Empty unless `matched` is true.
	pub params: RouteParams,
}

impl PathMatch {
	fn miss() -> Self {
		Self::default()
	}

	fn hit(params: RouteParams) -> Self {
		Self {
			matched: true,
			params,
		}
	}

	/// Returns the bound parameters when the pattern matched.
	pub fn into_params(self) -> Option<RouteParams> {
		self.matched.then_some(self.params)
	}
}

/// A step taken while matching, reported to a [`MatchObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent<'a> {
	/// Matching started.
	Start {
		/// Pattern being matched.
		pattern: &'a str,
		/// Path being matched.
		path: &'a str,
		/// Requested mode.
		mode: MatchMode,
	},
	/// The pattern is the catch-all.
	CatchAll,
	/// Both pattern and path are the root.
	Root,
	/// The segment counts rule out a match.
	SegmentCount {
		/// Segments in the pattern.
		pattern_segments: usize,
		/// Segments in the path.
		path_segments: usize,
	},
	/// A parameter segment bound a value.
	ParamBound {
		/// Parameter name.
		name: &'a str,
		/// Bound value.
		value: &'a str,
	},
	/// A literal segment differed from the path.
	SegmentMismatch {
		/// Zero-based segment index.
		index: usize,
		/// Literal from the pattern.
		expected: &'a str,
		/// Segment from the path.
		actual: &'a str,
	},
	/// The pattern matched.
	Matched {
		/// Number of bound parameters.
		param_count: usize,
	},
}

/// Receives [`MatchEvent`]s from [`match_path_with`].
pub trait MatchObserver {
	/// Called once per matching step.
	fn observe(&mut self, event: &MatchEvent<'_>);
}

impl<F> MatchObserver for F
where
	F: FnMut(&MatchEvent<'_>),
{
	fn observe(&mut self, event: &MatchEvent<'_>) {
		self(event)
	}
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MatchObserver for NoopObserver {
	fn observe(&mut self, _event: &MatchEvent<'_>) {}
}

/// Observer that forwards events to `tracing` at TRACE level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MatchObserver for TracingObserver {
	fn observe(&mut self, event: &MatchEvent<'_>) {
		match event {
			MatchEvent::Start {
				pattern,
				path,
				mode,
			} => tracing::trace!(pattern, path, ?mode, "matching route pattern"),
			MatchEvent::CatchAll => tracing::trace!("catch-all pattern matched"),
			MatchEvent::Root => tracing::trace!("root path matched"),
			MatchEvent::SegmentCount {
				pattern_segments,
				path_segments,
			} => tracing::trace!(
				pattern_segments,
				path_segments,
				"segment count rules out match"
			),
			MatchEvent::ParamBound { name, value } => {
				tracing::trace!(name, value, "path parameter bound")
			}
			MatchEvent::SegmentMismatch {
				index,
				expected,
				actual,
			} => tracing::trace!(index, expected, actual, "segment mismatch"),
			MatchEvent::Matched { param_count } => {
				tracing::trace!(param_count, "route pattern matched")
			}
		}
	}
}

/// Splits a path into its non-empty `/`-separated segments.
pub fn split_segments(path: &str) -> Vec<&str> {
	path.split('/').filter(|seg| !seg.is_empty()).collect()
}

/// Strips a query string and fragment, leaving the path component.
///
/// ```
/// use waymark_core::path_only;
///
/// assert_eq!(path_only("/search?q=rust#top"), "/search");
/// assert_eq!(path_only("/about"), "/about");
/// ```
pub fn path_only(location: &str) -> &str {
	let end = location.find(['?', '#']).unwrap_or(location.len());
	&location[..end]
}

/// Matches `path` against `pattern`.
///
/// `exact` selects [`MatchMode::Exact`]; otherwise the pattern is matched as
/// a prefix of the path.
pub fn match_path(pattern: &str, path: &str, exact: bool) -> PathMatch {
	match_path_with(pattern, path, MatchMode::from(exact), &mut NoopObserver)
}

/// Matches `path` against `pattern`, reporting each step to `observer`.
pub fn match_path_with(
	pattern: &str,
	path: &str,
	mode: MatchMode,
	observer: &mut dyn MatchObserver,
) -> PathMatch {
	observer.observe(&MatchEvent::Start {
		pattern,
		path,
		mode,
	});

	if pattern == CATCH_ALL {
		observer.observe(&MatchEvent::CatchAll);
		return PathMatch::hit(RouteParams::new());
	}

	if pattern == "/" && path == "/" {
		observer.observe(&MatchEvent::Root);
		return PathMatch::hit(RouteParams::new());
	}

	let pattern_segments = split_segments(pattern);
	let path_segments = split_segments(path);

	let counts_fit = match mode {
		MatchMode::Exact => pattern_segments.len() == path_segments.len(),
		MatchMode::Prefix => path_segments.len() >= pattern_segments.len(),
	};
	if !counts_fit {
		observer.observe(&MatchEvent::SegmentCount {
			pattern_segments: pattern_segments.len(),
			path_segments: path_segments.len(),
		});
		return PathMatch::miss();
	}

	let mut params = RouteParams::new();
	// Extra trailing path segments in prefix mode are never visited.
	for (index, (&expected, &actual)) in pattern_segments.iter().zip(&path_segments).enumerate() {
		if let Some(name) = expected.strip_prefix(PARAM_PREFIX) {
			observer.observe(&MatchEvent::ParamBound {
				name,
				value: actual,
			});
			params.insert(name, actual);
			continue;
		}

		if expected != actual {
			observer.observe(&MatchEvent::SegmentMismatch {
				index,
				expected,
				actual,
			});
			return PathMatch::miss();
		}
	}

	observer.observe(&MatchEvent::Matched {
		param_count: params.len(),
	});
	PathMatch::hit(params)
}

/// Builds a concrete path from `pattern` by substituting its parameters.
///
/// # Errors
///
/// Returns [`RouterError::MissingParameter`] when a `:name` segment has no
/// value in `params`, and [`RouterError::InvalidPattern`] for the catch-all,
/// which stands for no particular path.
///
/// ```
/// use waymark_core::{RouteParams, build_path};
///
/// let params: RouteParams = [("id", "42")].into_iter().collect();
/// assert_eq!(build_path("/users/:id/posts", &params).unwrap(), "/users/42/posts");
/// ```
pub fn build_path(pattern: &str, params: &RouteParams) -> Result<String, RouterError> {
	if pattern == CATCH_ALL {
		return Err(RouterError::InvalidPattern(
			"the catch-all pattern cannot be turned into a path".to_string(),
		));
	}

	let mut path = String::new();
	for segment in split_segments(pattern) {
		path.push('/');
		match segment.strip_prefix(PARAM_PREFIX) {
			Some(name) => {
				let value = params
					.get(name)
					.ok_or_else(|| RouterError::MissingParameter(name.to_string()))?;
				path.push_str(value);
			}
			None => path.push_str(segment),
		}
	}

	if path.is_empty() {
		path.push('/');
	}
	Ok(path)
}
