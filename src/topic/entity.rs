//! Entity identity helpers
//!
//! The tree stores opaque, caller-supplied entities and only ever needs to
//! compare them for equality, so it is generic over `T: Clone + PartialEq`
//! instead of inspecting runtime types. Plain identifier kinds (integers,
//! strings, `Arc`-wrapped records) get value equality through their own
//! `PartialEq`. Function-typed entities must compare by identity rather
//! than behavior; [`Callback`] wraps a closure so that two handles are equal
//! exactly when they share the same underlying allocation.

use std::fmt;
use std::sync::Arc;

/// A function-typed entity comparing by identity.
///
/// Cloning a `Callback` produces a handle to the same closure, and all such
/// handles compare equal. Two `Callback`s built from separate closures are
/// never equal, even when the closures are textually identical.
pub struct Callback<M>(Arc<dyn Fn(&M) + Send + Sync>);

impl<M> Callback<M> {
	/// Wraps a closure as a tree entity.
	pub fn new(handler: impl Fn(&M) + Send + Sync + 'static) -> Self {
		Self(Arc::new(handler))
	}

	/// Invokes the wrapped closure.
	pub fn call(&self, message: &M) {
		(self.0)(message)
	}
}

impl<M> Clone for Callback<M> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<M> PartialEq for Callback<M> {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

impl<M> Eq for Callback<M> {}

impl<M> fmt::Debug for Callback<M> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Callback({:p})", Arc::as_ptr(&self.0))
	}
}
