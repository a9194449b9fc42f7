//! Shared-subscription group extraction
//!
//! `$share/<group>/<filter>` is a broker-level convention, not trie
//! syntax: the group prefix is stripped here before the remaining filter
//! reaches the tree.

use std::sync::LazyLock;

use regex::bytes::Regex;
use thiserror::Error;

/// Literal prefix marking a shared subscription.
const SHARE_PREFIX: &[u8] = b"$share/";

/// Shape of a shared subscription filter: `$share/` followed by a group
/// name of one or more `[0-9a-zA-Z_-]` and the non-empty remaining filter.
static SHARE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\$share/([0-9a-zA-Z_-]+)/(.+)$")
		.expect("shared subscription pattern is a valid regex")
});

/// Errors produced while parsing a `$share/...` filter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedGroupError {
	/// Filter starts with `$share/` but does not match the required shape
	#[error("malformed shared subscription filter '{filter}'")]
	MalformedShare {
		/// The offending filter
		filter: String,
	},
}

impl SharedGroupError {
	/// Creates a new MalformedShare error for the given filter bytes
	pub fn malformed(filter: &[u8]) -> Self {
		Self::MalformedShare {
			filter: String::from_utf8_lossy(filter).into_owned(),
		}
	}

	/// Returns the error type for categorization
	pub fn error_type(&self) -> &'static str {
		match self {
			| SharedGroupError::MalformedShare { .. } => "malformed_share",
		}
	}
}

/// A parsed shared subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SharedGroup<'a> {
	/// The share group name.
	pub group: &'a [u8],
	/// The filter the group subscribes to, after the group's trailing
	/// separator.
	pub filter: &'a [u8],
}

/// Strips the optional `$share/<group>/` prefix from a filter.
///
/// Returns `Ok(None)` when the filter is not a shared subscription (the
/// input is used unchanged). A filter that starts with `$share/` but does
/// not satisfy the required shape fails with a parse error.
pub fn extract_group(
	filter: &[u8],
) -> Result<Option<SharedGroup<'_>>, SharedGroupError> {
	if !filter.starts_with(SHARE_PREFIX) {
		return Ok(None);
	}

	let captures = SHARE_PATTERN
		.captures(filter)
		.ok_or_else(|| SharedGroupError::malformed(filter))?;

	match (captures.get(1), captures.get(2)) {
		| (Some(group), Some(rest)) => Ok(Some(SharedGroup {
			group: group.as_bytes(),
			filter: rest.as_bytes(),
		})),
		| _ => Err(SharedGroupError::malformed(filter)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_plain_filters_are_not_shared() {
		let filters: &[&[u8]] = &[
			b"sport/tennis/player1/#",
			b"sport/tennis/player1/ranking",
			b"sport/#",
			b"#",
			b"+",
			b"+/tennis/#",
			b"sport/+/player1",
			b"/finance",
			b"$sys/broker/uptime",
		];
		for filter in filters {
			assert_eq!(extract_group(filter).unwrap(), None);
		}
	}

	#[test]
	fn test_share_prefix_extracts_group_and_filter() {
		let filters: &[&[u8]] = &[
			b"$share/sport/tennis/player1/#",
			b"$share/sport/tennis/player1/ranking",
			b"$share/sport/#",
			b"$share/sport/tennis/#",
			b"$share/sport/+/player1",
		];
		for filter in filters {
			let shared = extract_group(filter).unwrap().expect("is shared");
			assert_eq!(shared.group, b"sport");
		}

		let shared = extract_group(b"$share/-/tennis/#")
			.unwrap()
			.expect("is shared");
		assert_eq!(shared.group, b"-");
		assert_eq!(shared.filter, b"tennis/#");
	}

	#[test]
	fn test_malformed_share_filters_fail() {
		let filters: &[&[u8]] = &[
			b"$share/#",
			b"$share/+",
			b"$share/-",
			b"$share/+/tennis/#",
			b"$share/finance",
			b"$share//tennis",
			b"$share/sport/",
		];
		for filter in filters {
			let err = extract_group(filter).unwrap_err();
			assert_eq!(err.error_type(), "malformed_share");
		}
	}
}
