//! # MQTT Topic Tree
//!
//! The subscription-matching core of a publish/subscribe broker: a
//! concurrent trie mapping hierarchical topic filters (with `+`/`#`
//! wildcards) to subscriber-owned entities, resolving for any published
//! topic the set of entities whose filters match it.
//!
//! ## Features
//!
//! - **Wildcard Matching**: Full MQTT `+` (single level) and `#`
//!   (multi level) filter semantics
//! - **Concurrent Access**: Whole-tree reader/writer lock; unlimited
//!   parallel matches, serialized mutations
//! - **Bounded Memory**: Emptied branches are pruned bottom-up on every
//!   unlink, so the tree never outgrows the set of live filters
//! - **Node Recycling**: An injectable free-list pool amortizes
//!   allocation under subscribe/unsubscribe churn
//! - **Shared Subscriptions**: `$share/<group>/<filter>` prefix
//!   extraction at the boundary
//! - **Opaque Entities**: Generic over any `Clone + PartialEq` handle;
//!   [`Callback`] wraps closures with identity comparison
//!
//! ## Quick Start
//!
//! ```rust
//! use mqtt_topic_tree::TopicTree;
//!
//! let tree = TopicTree::new();
//! tree.link(b"sport/tennis/+/stats", "scoreboard")?;
//! tree.link(b"sport/#", "firehose")?;
//!
//! let mut matches = Vec::new();
//! tree.collect_matches(b"sport/tennis/tom/stats", &mut matches)?;
//! assert_eq!(matches.len(), 2);
//!
//! tree.unlink(b"sport/tennis/+/stats", Some(&"scoreboard"))?;
//! tree.unlink(b"sport/#", Some(&"firehose"))?;
//! tree.close()?;
//! # Ok::<(), mqtt_topic_tree::TopicTreeError>(())
//! ```
//!
//! ## Shared Subscriptions
//!
//! The `$share/<group>/` prefix is a broker convention consumed before a
//! filter reaches the tree:
//!
//! ```rust
//! use mqtt_topic_tree::extract_group;
//!
//! let shared = extract_group(b"$share/workers/jobs/#")?.unwrap();
//! assert_eq!(shared.group, b"workers");
//! assert_eq!(shared.filter, b"jobs/#");
//! # Ok::<(), mqtt_topic_tree::SharedGroupError>(())
//! ```

#![warn(missing_docs)]

// Core module
pub mod topic;

// === Core Public API ===
pub use topic::{
	extract_group, Callback, NodePool, SharedGroup, SharedGroupError,
	TopicFilterError, TopicTree, TopicTreeError,
};

/// Result type alias for operations that may fail with TopicTreeError
pub type Result<T> = std::result::Result<T, TopicTreeError>;

/// Prelude module for convenient imports
///
/// ```rust
/// use mqtt_topic_tree::prelude::*;
/// ```
pub mod prelude {
	//! Essential types for most users of the tree

	pub use crate::{
		extract_group, NodePool, Result, SharedGroup, TopicTree,
		TopicTreeError,
	};
}
