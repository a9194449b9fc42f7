//! Trie node recycling
//!
//! Subscribe/unsubscribe churn creates and destroys nodes at a high rate;
//! the pool keeps released nodes (with their children map capacity intact)
//! on a free list so the next insert can reuse them. The pool is its own
//! synchronization domain, independent of the tree lock, and is injected
//! into the tree rather than hidden behind a global.

use std::sync::Mutex;

use super::node::TrieNode;

/// Free list of recycled trie nodes.
///
/// Unbounded and eviction-free; it purely amortizes allocation cost. Safe
/// for concurrent acquire/release without external locking.
pub struct NodePool<T> {
	free: Mutex<Vec<TrieNode<T>>>,
}

impl<T> NodePool<T> {
	/// Creates an empty pool.
	pub fn new() -> Self {
		Self {
			free: Mutex::new(Vec::new()),
		}
	}

	/// Returns a node with no entities and an empty children map, either
	/// recycled or freshly allocated.
	pub(crate) fn acquire(&self) -> TrieNode<T> {
		self.free
			.lock()
			.expect("node pool mutex poisoned")
			.pop()
			.unwrap_or_default()
	}

	/// Returns a node to the free list.
	///
	/// The caller must guarantee the node holds no entities and no
	/// children; the owning node logic empties nodes before releasing.
	pub(crate) fn release(&self, node: TrieNode<T>) {
		debug_assert!(
			node.is_empty(),
			"released node must hold no entities or children"
		);
		self.free
			.lock()
			.expect("node pool mutex poisoned")
			.push(node);
	}

	/// Number of nodes currently sitting on the free list.
	pub fn len(&self) -> usize {
		self.free.lock().expect("node pool mutex poisoned").len()
	}

	/// Returns true if no recycled nodes are available.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl<T> Default for NodePool<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_acquire_from_empty_pool_allocates() {
		let pool = NodePool::<u32>::new();
		let node = pool.acquire();
		assert!(node.is_empty());
		assert_eq!(pool.len(), 0);
	}

	#[test]
	fn test_release_then_acquire_recycles() {
		let pool = NodePool::<u32>::new();
		let node = pool.acquire();
		pool.release(node);
		assert_eq!(pool.len(), 1);

		let _node = pool.acquire();
		assert_eq!(pool.len(), 0);
	}

	#[test]
	fn test_concurrent_acquire_release() {
		use std::sync::Arc;

		let pool = Arc::new(NodePool::<u32>::new());
		let handles: Vec<_> = (0 .. 8)
			.map(|_| {
				let pool = Arc::clone(&pool);
				std::thread::spawn(move || {
					for _ in 0 .. 1000 {
						let node = pool.acquire();
						pool.release(node);
					}
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}
	}
}
