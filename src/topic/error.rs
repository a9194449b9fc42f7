//! Error types for topic tree operations
//!
//! Each concern keeps its own error enum (tokenizer, group extractor) and
//! the tree aggregates the ones its operations can surface into a single
//! [`TopicTreeError`] for the public API.

use thiserror::Error;

use super::group::SharedGroupError;
use super::level::TopicFilterError;

/// Errors surfaced by topic tree operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TopicTreeError {
	/// Filter or topic failed level-syntax validation
	#[error("malformed topic filter: {0}")]
	MalformedFilter(#[from] TopicFilterError),

	/// Unlink targeted a filter path or entity that is not registered
	#[error("no registration found for filter '{filter}'")]
	NotFound {
		/// The filter the unlink targeted
		filter: String,
	},

	/// Close found residual registrations; nothing was released
	#[error(
		"cleanup incomplete: {entities} entities still registered across \
		 {nodes} nodes"
	)]
	InvalidState {
		/// Entities still registered in the tree
		entities: usize,
		/// Nodes still reachable from the root
		nodes: usize,
	},

	/// Operation on a tree that has already been closed
	#[error("topic tree is closed")]
	TreeClosed,
}

impl TopicTreeError {
	/// Creates a new NotFound error for the given filter bytes
	pub fn not_found(filter: &[u8]) -> Self {
		Self::NotFound {
			filter: String::from_utf8_lossy(filter).into_owned(),
		}
	}

	/// Returns true if this error indicates caller misuse rather than a
	/// corrupted tree
	pub fn is_client_error(&self) -> bool {
		match self {
			| TopicTreeError::MalformedFilter(_) => true,
			| TopicTreeError::NotFound { .. } => true,
			| TopicTreeError::InvalidState { .. } => false,
			| TopicTreeError::TreeClosed => true,
		}
	}

	/// Returns the error type for categorization
	pub fn error_type(&self) -> &'static str {
		match self {
			| TopicTreeError::MalformedFilter(_) => "malformed_filter",
			| TopicTreeError::NotFound { .. } => "not_found",
			| TopicTreeError::InvalidState { .. } => "invalid_state",
			| TopicTreeError::TreeClosed => "tree_closed",
		}
	}
}

/// Convenient Result type for tree operations
pub type TreeResult<T> = Result<T, TopicTreeError>;

/// Convenient Result type for tokenizer operations
pub type FilterResult<T> = Result<T, TopicFilterError>;

/// Convenient Result type for shared-group extraction
pub type GroupResult<T> = Result<T, SharedGroupError>;
