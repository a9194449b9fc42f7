//! Trie node and the core insert/remove/match algorithms
//!
//! Each node represents one level of the topic hierarchy: the entities
//! registered at exactly this path, and children keyed by the next level
//! token. The facade drives these operations under the tree lock; nothing
//! here synchronizes on its own.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::error::TopicTreeError;
use super::level::{next_level, MULTI_WILDCARD, SINGLE_WILDCARD};
use super::pool::NodePool;

/// Inline capacity for per-node entity storage. Most nodes carry zero or
/// a handful of registrations.
const INLINE_ENTITIES: usize = 4;

/// One level of the topic hierarchy.
#[derive(Debug)]
pub struct TrieNode<T> {
	/// Entities registered at exactly this depth/path.
	entities: SmallVec<[T; INLINE_ENTITIES]>,

	/// Child nodes keyed by the next level token. Exclusively owned:
	/// no node is reachable under two parents.
	children: HashMap<Vec<u8>, TrieNode<T>>,
}

impl<T> Default for TrieNode<T> {
	fn default() -> Self {
		Self {
			entities: SmallVec::new(),
			children: HashMap::new(),
		}
	}
}

impl<T> TrieNode<T> {
	/// A node with zero entities and zero children is garbage and must be
	/// pruned from its parent.
	pub(crate) fn is_empty(&self) -> bool {
		self.entities.is_empty() && self.children.is_empty()
	}

	/// Entities registered at exactly this node.
	pub(crate) fn entities(&self) -> &[T] {
		&self.entities
	}

	/// The child registered under the given level token, if any.
	pub(crate) fn child(&self, level: &[u8]) -> Option<&TrieNode<T>> {
		self.children.get(level)
	}

	/// Number of direct children.
	pub(crate) fn child_count(&self) -> usize {
		self.children.len()
	}

	/// Total entities registered anywhere in this subtree.
	pub(crate) fn subtree_entities(&self) -> usize {
		self.entities.len()
			+ self
				.children
				.values()
				.map(TrieNode::subtree_entities)
				.sum::<usize>()
	}

	/// Total nodes in this subtree, this node included.
	pub(crate) fn subtree_nodes(&self) -> usize {
		1 + self
			.children
			.values()
			.map(TrieNode::subtree_nodes)
			.sum::<usize>()
	}

	/// Releases every node of this subtree to the pool, bottom-up. The
	/// caller must have verified the subtree holds no entities.
	pub(crate) fn release_subtree(mut self, pool: &NodePool<T>) {
		for (_, child) in self.children.drain() {
			child.release_subtree(pool);
		}
		pool.release(self);
	}
}

impl<T: Clone + PartialEq> TrieNode<T> {
	/// Inserts `entity` under the remaining `filter`, creating nodes from
	/// the pool as needed. Idempotent: an entity already registered at the
	/// target node (per entity equality) is left untouched.
	pub(crate) fn insert(
		&mut self,
		filter: &[u8],
		entity: T,
		pool: &NodePool<T>,
	) -> Result<(), TopicTreeError> {
		if filter.is_empty() {
			if !self.entities.contains(&entity) {
				self.entities.push(entity);
			}
			return Ok(());
		}

		let (level, rest) = next_level(filter)?;
		let child = self
			.children
			.entry(level.to_vec())
			.or_insert_with(|| pool.acquire());
		child.insert(rest, entity, pool)
	}

	/// Removes a registration under the remaining `filter`.
	///
	/// `None` clears every entity at the target node; `Some` removes the
	/// first equal entity or fails with `NotFound`. After a successful
	/// recursive removal an emptied child is detached and released to the
	/// pool, so the tree never retains empty branches.
	pub(crate) fn remove(
		&mut self,
		filter: &[u8],
		entity: Option<&T>,
		pool: &NodePool<T>,
	) -> Result<(), TopicTreeError> {
		if filter.is_empty() {
			return match entity {
				| None => {
					self.entities.clear();
					Ok(())
				}
				| Some(target) => {
					match self.entities.iter().position(|e| e == target) {
						| Some(index) => {
							self.entities.remove(index);
							Ok(())
						}
						| None => Err(TopicTreeError::not_found(filter)),
					}
				}
			};
		}

		let (level, rest) = next_level(filter)?;
		let child = self
			.children
			.get_mut(level)
			.ok_or_else(|| TopicTreeError::not_found(filter))?;
		child.remove(rest, entity, pool)?;

		if child.is_empty() {
			if let Some(node) = self.children.remove(level) {
				pool.release(node);
			}
		}
		Ok(())
	}

	/// Appends every entity whose filter matches the remaining concrete
	/// `topic` to `out`. No ordering guarantee and no duplicate
	/// suppression across distinct filters.
	pub(crate) fn collect_matches(
		&self,
		topic: &[u8],
		out: &mut Vec<T>,
	) -> Result<(), TopicTreeError> {
		if topic.is_empty() {
			self.append_entities(out);
			// A `#` filter also matches its parent path with no
			// trailing levels.
			if let Some(child) = self.children.get(MULTI_WILDCARD) {
				child.append_entities(out);
			}
			return Ok(());
		}

		let (level, rest) = next_level(topic)?;

		for (token, child) in &self.children {
			if token.as_slice() == MULTI_WILDCARD {
				// `#` matches everything beneath, no further descent.
				child.append_entities(out);
			} else if token.as_slice() == SINGLE_WILDCARD
				|| token.as_slice() == level
			{
				child.collect_matches(rest, out)?;
			}
		}
		Ok(())
	}

	fn append_entities(&self, out: &mut Vec<T>) {
		out.extend(self.entities.iter().cloned());
	}
}
