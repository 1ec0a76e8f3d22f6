//! Fork-join construction of an [`OrderedSet`] from an input sequence.
//!
//! [`build`] splits its input into two contiguous halves at the midpoint,
//! folds each half into an independent [`OrderedSet`] on a rayon worker, and
//! merges the two results on the caller's thread. Because the set is
//! order-based rather than position-based, any partition of the input yields
//! the same final contents; concurrency is an implementation strategy, not
//! an observable effect.
//!
//! Nothing is ever mutated in place: each worker constructs its own tree and
//! shares no mutable state with the other, so no locks are involved at any
//! point.
//!
//! # Examples
//!
//! ```rust
//! use wordset::persistent::parallel;
//!
//! let set = parallel::build(vec!["b", "a", "b", "c"]);
//! assert_eq!(set.to_sorted_vec(), vec!["a", "b", "c"]);
//! ```

use super::OrderedSet;

/// Inputs of at most this many elements are folded on the caller's thread
/// instead of being forked. Splitting a tiny input launches a worker that
/// builds from a near-empty half; skipping the fork below this size never
/// changes the result.
pub const SEQUENTIAL_CUTOFF: usize = 64;

/// Builds an [`OrderedSet`] containing the distinct elements of `elements`.
///
/// The result is equal to sequentially inserting every element, in input
/// order, into an empty set (i.e. `elements.into_iter().collect()`),
/// independently of how many workers actually ran.
///
/// An empty input returns the empty set without launching any task, and
/// inputs of at most [`SEQUENTIAL_CUTOFF`] elements are folded directly on
/// the caller's thread. Larger inputs are split at the midpoint into two
/// contiguous halves; each half is folded concurrently via [`rayon::join`]
/// and the two sets are merged once both workers have finished.
///
/// # Panics
///
/// The set operations themselves cannot fail, but if a worker task panics
/// (for example through a panicking `Ord` implementation), the panic
/// propagates to the caller once the join completes. The sibling worker's
/// result is discarded; no half-built set is ever returned.
///
/// # Examples
///
/// ```rust
/// use wordset::persistent::{parallel, OrderedSet};
///
/// let words = vec!["functional", "programming", "in", "c", "functional"];
/// let parallel_set = parallel::build(words.clone());
/// let sequential_set: OrderedSet<&str> = words.into_iter().collect();
///
/// assert_eq!(parallel_set, sequential_set);
/// assert_eq!(
///     parallel_set.to_sorted_vec(),
///     vec!["c", "functional", "in", "programming"]
/// );
/// ```
#[must_use]
pub fn build<T, I>(elements: I) -> OrderedSet<T>
where
    T: Clone + Ord + Send + Sync,
    I: IntoIterator<Item = T>,
{
    let elements: Vec<T> = elements.into_iter().collect();

    if elements.is_empty() {
        return OrderedSet::new();
    }
    if elements.len() <= SEQUENTIAL_CUTOFF {
        return elements.into_iter().collect();
    }

    let mut first_half = elements;
    let second_half = first_half.split_off(first_half.len() / 2);

    let (first_set, second_set) = rayon::join(
        || first_half.into_iter().collect::<OrderedSet<T>>(),
        || second_half.into_iter().collect::<OrderedSet<T>>(),
    );

    first_set.merge(&second_set)
}
