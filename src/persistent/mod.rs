//! Persistent (immutable) data structures.
//!
//! This module provides the persistent ordered set at the heart of the
//! crate, together with its fork-join construction strategy:
//!
//! - [`OrderedSet`]: persistent ordered set (Red-Black Tree)
//! - [`parallel::build`]: two-way fork-join construction
//!
//! # Structural Sharing
//!
//! Every update returns a new version of the structure while unaffected
//! subtrees are shared by reference between the old and the new version.
//! Prior versions remain valid and unchanged for as long as anyone holds
//! them; a version becomes reclaimable once its last reference is dropped.
//!
//! # Examples
//!
//! ```rust
//! use wordset::persistent::OrderedSet;
//!
//! let set = OrderedSet::new().insert(2).insert(1);
//!
//! // Structural sharing: the original set is preserved
//! let extended = set.insert(3);
//! assert_eq!(set.len(), 2);      // Original unchanged
//! assert_eq!(extended.len(), 3); // New version
//! assert_eq!(extended.to_sorted_vec(), vec![1, 2, 3]);
//! ```

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// This is `std::sync::Arc` rather than `std::rc::Rc` because the fork-join
/// builder moves whole trees across worker threads, which requires the
/// shared nodes to be `Send + Sync`.
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

mod ordered_set;
pub mod parallel;

pub use ordered_set::OrderedSet;
pub use ordered_set::OrderedSetIntoIterator;
pub use ordered_set::OrderedSetIterator;
