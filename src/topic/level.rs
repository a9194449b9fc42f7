//! Topic level tokenization
//!
//! A topic filter or publish topic is a `/`-separated byte string. The
//! tokenizer peels off one hierarchy level at a time, validating wildcard
//! placement as it goes, and is the single source of level syntax for
//! insert, remove and match traversals.

use thiserror::Error;

/// The multi-level wildcard token (`#`).
pub const MULTI_WILDCARD: &[u8] = b"#";

/// The single-level wildcard token (`+`).
pub const SINGLE_WILDCARD: &[u8] = b"+";

/// The topic level separator (`/`).
pub const SEPARATOR: u8 = b'/';

/// Errors produced while tokenizing a topic filter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicFilterError {
	/// Multi-level wildcard (`#`) used before the last level of the filter
	#[error("multi-level wildcard '#' must be the last level of the filter")]
	HashPosition,

	/// Wildcard character sharing a level with other characters
	#[error("wildcard character '{wildcard}' must occupy an entire level")]
	WildcardUsage {
		/// The offending wildcard character
		wildcard: char,
	},
}

impl TopicFilterError {
	/// Creates a new WildcardUsage error
	pub fn wildcard_usage(wildcard: char) -> Self {
		Self::WildcardUsage { wildcard }
	}

	/// Returns the error type for categorization
	pub fn error_type(&self) -> &'static str {
		match self {
			| TopicFilterError::HashPosition => "hash_position",
			| TopicFilterError::WildcardUsage { .. } => "wildcard_usage",
		}
	}
}

/// Wildcard state of the level currently being scanned.
enum LevelState {
	Literal,
	MultiWildcard,
	SingleWildcard,
}

/// Splits the next hierarchy level off `filter`, returning the level token
/// and the remaining filter after the separator.
///
/// A separator as the very first byte means the level is empty; the emitted
/// token is the single-level wildcard, so an empty level and an explicit
/// `+` level share the same trie key. If no separator is found the whole
/// remaining input is the final level and the remainder is empty.
pub fn next_level(
	filter: &[u8],
) -> Result<(&[u8], &[u8]), TopicFilterError> {
	let mut state = LevelState::Literal;

	for (i, &byte) in filter.iter().enumerate() {
		match byte {
			| SEPARATOR => {
				if matches!(state, LevelState::MultiWildcard) {
					return Err(TopicFilterError::HashPosition);
				}
				if i == 0 {
					return Ok((SINGLE_WILDCARD, &filter[1 ..]));
				}
				return Ok((&filter[.. i], &filter[i + 1 ..]));
			}
			| b'#' => {
				if i != 0 {
					return Err(TopicFilterError::wildcard_usage('#'));
				}
				state = LevelState::MultiWildcard;
			}
			| b'+' => {
				if i != 0 {
					return Err(TopicFilterError::wildcard_usage('+'));
				}
				state = LevelState::SingleWildcard;
			}
			| _ => match state {
				| LevelState::MultiWildcard => {
					return Err(TopicFilterError::wildcard_usage('#'));
				}
				| LevelState::SingleWildcard => {
					return Err(TopicFilterError::wildcard_usage('+'));
				}
				| LevelState::Literal => {}
			},
		}
	}

	// No separator found: the remaining input is one final level.
	Ok((filter, &[]))
}

/// Walks the tokenizer over the whole filter without touching any tree
/// state, so a malformed filter can be rejected before any structural
/// change is made.
pub fn validate_filter(filter: &[u8]) -> Result<(), TopicFilterError> {
	let mut rest = filter;
	while !rest.is_empty() {
		let (_, remainder) = next_level(rest)?;
		rest = remainder;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn levels_of(mut filter: &[u8]) -> Vec<Vec<u8>> {
		let mut levels = Vec::new();
		while !filter.is_empty() {
			let (level, rest) = next_level(filter).unwrap();
			levels.push(level.to_vec());
			filter = rest;
		}
		levels
	}

	#[test]
	fn test_next_level_success() {
		let cases: &[(&[u8], &[&[u8]])] = &[
			(b"sport/tennis/player1/#", &[
				b"sport", b"tennis", b"player1", b"#",
			]),
			(b"sport/tennis/player1/ranking", &[
				b"sport", b"tennis", b"player1", b"ranking",
			]),
			(b"sport/#", &[b"sport", b"#"]),
			(b"#", &[b"#"]),
			(b"sport/tennis/#", &[b"sport", b"tennis", b"#"]),
			(b"+", &[b"+"]),
			(b"+/tennis/#", &[b"+", b"tennis", b"#"]),
			(b"sport/+/player1", &[b"sport", b"+", b"player1"]),
			(b"/finance", &[b"+", b"finance"]),
		];

		for (filter, expected) in cases {
			let levels = levels_of(filter);
			let expected: Vec<Vec<u8>> =
				expected.iter().map(|l| l.to_vec()).collect();
			assert_eq!(levels, expected, "filter {:?}", filter);
		}
	}

	#[test]
	fn test_next_level_hash_not_alone() {
		let (level, rest) = next_level(b"sport/tennis#").unwrap();
		assert_eq!(level, b"sport");
		assert_eq!(
			next_level(rest).unwrap_err(),
			TopicFilterError::wildcard_usage('#')
		);
	}

	#[test]
	fn test_next_level_hash_not_last() {
		let (_, rest) = next_level(b"sport/tennis/#/ranking").unwrap();
		let (_, rest) = next_level(rest).unwrap();
		assert_eq!(
			next_level(rest).unwrap_err(),
			TopicFilterError::HashPosition
		);
	}

	#[test]
	fn test_next_level_plus_not_alone() {
		assert_eq!(
			next_level(b"sport+").unwrap_err(),
			TopicFilterError::wildcard_usage('+')
		);
		assert_eq!(
			next_level(b"+sport").unwrap_err(),
			TopicFilterError::wildcard_usage('+')
		);
	}

	#[test]
	fn test_empty_level_canonicalized_to_single_wildcard() {
		assert_eq!(levels_of(b"/finance"), vec![
			b"+".to_vec(),
			b"finance".to_vec()
		]);
		assert_eq!(levels_of(b"a//b"), vec![
			b"a".to_vec(),
			b"+".to_vec(),
			b"b".to_vec()
		]);
		assert_eq!(levels_of(b"/"), vec![b"+".to_vec()]);
	}

	#[test]
	fn test_trailing_separator_drops_empty_level() {
		assert_eq!(levels_of(b"sport/"), vec![b"sport".to_vec()]);
	}

	#[test]
	fn test_validate_filter() {
		assert!(validate_filter(b"sport/+/player1/#").is_ok());
		assert!(validate_filter(b"/finance").is_ok());
		assert_eq!(
			validate_filter(b"sport/tennis#").unwrap_err(),
			TopicFilterError::wildcard_usage('#')
		);
		assert_eq!(
			validate_filter(b"sport/#/ranking").unwrap_err(),
			TopicFilterError::HashPosition
		);
	}
}
