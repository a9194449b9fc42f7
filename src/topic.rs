//! Topic tree module
//!
//! This module provides the subscription-matching core of a broker:
//! level tokenization, the trie node algorithms, the node pool, the
//! concurrency-safe tree facade and the shared-subscription group
//! extractor.

// Submodules
pub mod entity;
pub mod error;
pub mod group;
pub mod level;
pub(crate) mod node;
pub mod pool;
pub mod tree;


// Re-export commonly used types for convenience
pub use entity::Callback;
pub use error::{FilterResult, GroupResult, TopicTreeError, TreeResult};
pub use group::{extract_group, SharedGroup, SharedGroupError};
pub use level::{
	next_level, validate_filter, TopicFilterError, MULTI_WILDCARD,
	SEPARATOR, SINGLE_WILDCARD,
};
pub use pool::NodePool;
pub use tree::TopicTree;
