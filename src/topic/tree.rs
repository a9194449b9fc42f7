//! Concurrency-safe topic tree facade
//!
//! A single reader/writer lock guards the whole tree: link/unlink take the
//! exclusive mode, match takes the shared mode. Whole-tree granularity
//! keeps structural changes strictly linearizable; individual operations
//! are sub-microsecond CPU work, never I/O.

use std::sync::{Arc, RwLock};

use tracing::{debug, trace};

use super::error::TopicTreeError;
use super::level::validate_filter;
use super::node::TrieNode;
use super::pool::NodePool;

const LOCK_POISONED: &str = "topic tree lock poisoned";

/// Concurrent subscription-matching trie.
///
/// Maps hierarchical topic filters (with `+`/`#` wildcards) to opaque
/// entities and resolves, for any concrete published topic, the set of
/// entities whose filters match it. Entities are cheap clonable handles;
/// the tree never mutates them.
pub struct TopicTree<T> {
	/// Root node, depth zero. `None` once the tree has been closed.
	root: RwLock<Option<TrieNode<T>>>,
	/// Node recycler, shared with any other trees the caller wires to it.
	pool: Arc<NodePool<T>>,
}

impl<T: Clone + PartialEq> TopicTree<T> {
	/// Creates a tree with its own private node pool.
	pub fn new() -> Self {
		Self::with_pool(Arc::new(NodePool::new()))
	}

	/// Creates a tree drawing nodes from an injected pool.
	pub fn with_pool(pool: Arc<NodePool<T>>) -> Self {
		let root = pool.acquire();
		Self {
			root: RwLock::new(Some(root)),
			pool,
		}
	}

	/// Registers `entity` under `filter`.
	///
	/// Idempotent per entity equality. The filter is validated in full
	/// before any node is touched, so a malformed filter causes no
	/// structural mutation.
	pub fn link(
		&self,
		filter: &[u8],
		entity: T,
	) -> Result<(), TopicTreeError> {
		validate_filter(filter)?;

		let mut root = self.root.write().expect(LOCK_POISONED);
		let root = root.as_mut().ok_or(TopicTreeError::TreeClosed)?;
		root.insert(filter, entity, &self.pool)?;
		trace!(
			filter = %String::from_utf8_lossy(filter),
			"entity linked"
		);
		Ok(())
	}

	/// Removes a registration under `filter`.
	///
	/// `Some(entity)` removes that exact registration; `None` removes
	/// every entity registered at exactly this filter. Emptied branches
	/// are pruned bottom-up and their nodes returned to the pool.
	pub fn unlink(
		&self,
		filter: &[u8],
		entity: Option<&T>,
	) -> Result<(), TopicTreeError> {
		let mut root = self.root.write().expect(LOCK_POISONED);
		let root = root.as_mut().ok_or(TopicTreeError::TreeClosed)?;
		root.remove(filter, entity, &self.pool).map_err(
			|err| match err {
				| TopicTreeError::NotFound { .. } => {
					TopicTreeError::not_found(filter)
				}
				| other => other,
			},
		)?;
		trace!(
			filter = %String::from_utf8_lossy(filter),
			"entity unlinked"
		);
		Ok(())
	}

	/// Collects every entity whose filter matches the concrete `topic`
	/// into `out`.
	///
	/// The buffer is truncated at the start of every call and reused;
	/// contents from a prior call are invalidated. Callers needing
	/// persistence must copy out.
	pub fn collect_matches(
		&self,
		topic: &[u8],
		out: &mut Vec<T>,
	) -> Result<(), TopicTreeError> {
		out.clear();
		let root = self.root.read().expect(LOCK_POISONED);
		let root = root.as_ref().ok_or(TopicTreeError::TreeClosed)?;
		root.collect_matches(topic, out)
	}

	/// Detaches the root and releases every node to the pool.
	///
	/// Fails with `InvalidState`, leaving the tree unchanged, if any
	/// entities are still registered: residual state at close time
	/// signals a removal bug and is never silently discarded. Once
	/// closed the tree is not reusable.
	pub fn close(&self) -> Result<(), TopicTreeError> {
		let mut root = self.root.write().expect(LOCK_POISONED);
		match root.take() {
			| None => Err(TopicTreeError::TreeClosed),
			| Some(node) => {
				let entities = node.subtree_entities();
				if entities > 0 {
					let nodes = node.subtree_nodes();
					*root = Some(node);
					return Err(TopicTreeError::InvalidState {
						entities,
						nodes,
					});
				}
				node.release_subtree(&self.pool);
				debug!("topic tree closed");
				Ok(())
			}
		}
	}

	/// Returns true once the tree has been closed.
	pub fn is_closed(&self) -> bool {
		self.root.read().expect(LOCK_POISONED).is_none()
	}
}

impl<T: Clone + PartialEq> Default for TopicTree<T> {
	fn default() -> Self {
		Self::new()
	}
}
