//! Persistent (immutable) ordered set based on a Red-Black Tree.
//!
//! This module provides [`OrderedSet`], an immutable collection of unique,
//! totally-ordered elements that uses structural sharing for efficient
//! operations.
//!
//! # Overview
//!
//! `OrderedSet` is backed by a persistent Red-Black Tree, a self-balancing
//! binary search tree:
//!
//! - O(log N) insert
//! - O(log N) contains
//! - O(N) ordered extraction
//! - O(1) len and `is_empty`
//!
//! All operations return new sets without modifying the original, and
//! structural sharing ensures that the unaffected parts of the tree are
//! reused by reference rather than copied.
//!
//! # Examples
//!
//! ```rust
//! use wordset::persistent::OrderedSet;
//!
//! let set = OrderedSet::new()
//!     .insert("programming")
//!     .insert("functional")
//!     .insert("functional"); // duplicate, suppressed
//!
//! assert_eq!(set.to_sorted_vec(), vec!["functional", "programming"]);
//! ```
//!
//! # Internal Structure
//!
//! The Red-Black Tree maintains the following invariants:
//! 1. Every node is either red or black
//! 2. The root is black
//! 3. All leaves (NIL) are black
//! 4. Red nodes have only black children
//! 5. Every path from root to leaf has the same number of black nodes
//!
//! These invariants ensure the tree height is O(log N).
//!
//! Element equality is derived entirely from the ordering: a candidate is a
//! duplicate exactly when it is neither less than nor greater than an
//! existing element under `Ord::cmp`. An `Ord` implementation that is not a
//! total order is a logic-error precondition; it is never detected at
//! runtime.

use super::ReferenceCounter;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// Color Definition
// =============================================================================

/// The color of a Red-Black Tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Color {
    Red,
    Black,
}

// =============================================================================
// Node Definition
// =============================================================================

/// Shared handle to a subtree; `None` is an empty (NIL) position.
type Link<T> = Option<ReferenceCounter<Node<T>>>;

/// Internal node structure for the Red-Black Tree.
///
/// Nodes are never mutated after construction; every logical update builds
/// new nodes along the touched path and shares the rest by reference.
#[derive(Clone)]
struct Node<T> {
    color: Color,
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a new red node with no children.
    const fn new_red(value: T) -> Self {
        Self {
            color: Color::Red,
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a copy of this node with a new color.
    fn with_color(&self, color: Color) -> Self
    where
        T: Clone,
    {
        Self {
            color,
            value: self.value.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }

    /// Checks if this node is red.
    fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

/// Helper function to check if an optional node is red.
fn is_red<T>(node: Option<&ReferenceCounter<Node<T>>>) -> bool {
    node.is_some_and(|node| node.is_red())
}

// =============================================================================
// OrderedSet Definition
// =============================================================================

/// A persistent (immutable) set of unique elements based on a Red-Black Tree.
///
/// `OrderedSet` is an immutable data structure that uses structural sharing
/// to efficiently support functional programming patterns. Elements must
/// implement `Ord`; the set keeps them in ascending order, and an element
/// that compares `Equal` to one already present is never inserted twice.
///
/// Two sets may share arbitrary amounts of internal structure. This is safe
/// because nodes are never mutated, which is also why the structure can be
/// built concurrently without any locking (see
/// [`parallel::build`](super::parallel::build)).
///
/// # Time Complexity
///
/// | Operation       | Complexity |
/// |-----------------|------------|
/// | `new`           | O(1)       |
/// | `insert`        | O(log N)   |
/// | `contains`      | O(log N)   |
/// | `merge`         | O(M log(N+M)) |
/// | `iter`          | O(N)       |
/// | `to_sorted_vec` | O(N)       |
/// | `len`           | O(1)       |
/// | `is_empty`      | O(1)       |
///
/// # Examples
///
/// ```rust
/// use wordset::persistent::OrderedSet;
///
/// let set = OrderedSet::new().insert(3).insert(1).insert(2);
///
/// // Elements are always in sorted order
/// assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
///
/// // Structural sharing: the original set is preserved
/// let updated = set.insert(0);
/// assert_eq!(set.len(), 3);     // Original unchanged
/// assert_eq!(updated.len(), 4); // New version
/// ```
#[derive(Clone)]
pub struct OrderedSet<T> {
    /// Root node of the tree
    root: Link<T>,
    /// Number of elements
    length: usize,
}

impl<T> OrderedSet<T> {
    /// Creates a new empty set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set: OrderedSet<i32> = OrderedSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            root: None,
            length: 0,
        }
    }

    /// Returns the number of elements in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the set contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let empty: OrderedSet<i32> = OrderedSet::new();
    /// assert!(empty.is_empty());
    /// assert!(!empty.insert(42).is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns an iterator over references to the elements in ascending
    /// order.
    ///
    /// Repeated calls on the same set always yield the same sequence; the
    /// set is not mutated.
    ///
    /// # Complexity
    ///
    /// O(N) for full traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set = OrderedSet::new().insert(2).insert(1);
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> OrderedSetIterator<'_, T> {
        let mut elements = Vec::with_capacity(self.length);
        Self::collect_in_order(self.root.as_ref(), &mut elements);
        OrderedSetIterator {
            elements,
            current_index: 0,
        }
    }

    /// Recursive in-order traversal: left subtree, node, right subtree.
    fn collect_in_order<'a>(node: Option<&'a ReferenceCounter<Node<T>>>, elements: &mut Vec<&'a T>) {
        if let Some(node_ref) = node {
            Self::collect_in_order(node_ref.left.as_ref(), elements);
            elements.push(&node_ref.value);
            Self::collect_in_order(node_ref.right.as_ref(), elements);
        }
    }
}

impl<T: Clone + Ord> OrderedSet<T> {
    /// Creates a set containing a single element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set = OrderedSet::singleton(42);
    /// assert_eq!(set.to_sorted_vec(), vec![42]);
    /// ```
    #[must_use]
    pub fn singleton(value: T) -> Self {
        Self::new().insert(value)
    }

    /// Returns `true` if the set contains the given element.
    ///
    /// This method supports borrowed forms of the element type through the
    /// `Borrow` trait. For example, with `OrderedSet<String>`, you can search
    /// using `&str` directly without allocating a new `String`.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set = OrderedSet::new()
    ///     .insert("hello".to_string())
    ///     .insert("world".to_string());
    /// assert!(set.contains("hello")); // No allocation needed
    /// assert!(!set.contains("other"));
    /// ```
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root.as_ref();
        while let Some(node_ref) = current {
            match element.cmp(node_ref.value.borrow()) {
                Ordering::Less => current = node_ref.left.as_ref(),
                Ordering::Greater => current = node_ref.right.as_ref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// Inserts an element into the set, returning a new set.
    ///
    /// If an element comparing `Equal` already exists, the returned set is
    /// observably identical to the receiver; in that case the result shares
    /// the entire tree with the receiver by reference and no new nodes are
    /// allocated. The original set is unaffected either way.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set1 = OrderedSet::new().insert(1);
    /// let set2 = set1.insert(2);
    ///
    /// assert_eq!(set1.to_sorted_vec(), vec![1]);    // Original unchanged
    /// assert_eq!(set2.to_sorted_vec(), vec![1, 2]); // New version
    ///
    /// // Duplicate insertion is idempotent
    /// let set3 = set2.insert(2);
    /// assert_eq!(set3.len(), 2);
    /// ```
    #[must_use]
    pub fn insert(&self, value: T) -> Self {
        let (new_root, added) = Self::insert_into(self.root.as_ref(), value);

        // Make root black
        let black_root = if new_root.is_red() {
            ReferenceCounter::new(new_root.with_color(Color::Black))
        } else {
            new_root
        };

        Self {
            root: Some(black_root),
            length: if added { self.length + 1 } else { self.length },
        }
    }

    /// Recursive helper for insert.
    /// Returns (`new_node`, `was_added`) where `was_added` is false if the
    /// value was already present. In that case the incoming subtree is
    /// returned by reference, unchanged, at every level of the recursion.
    fn insert_into(
        node: Option<&ReferenceCounter<Node<T>>>,
        value: T,
    ) -> (ReferenceCounter<Node<T>>, bool) {
        match node {
            None => (ReferenceCounter::new(Node::new_red(value)), true),
            Some(node_ref) => match value.cmp(&node_ref.value) {
                Ordering::Less => {
                    let (new_left, added) = Self::insert_into(node_ref.left.as_ref(), value);
                    if !added {
                        return (ReferenceCounter::clone(node_ref), false);
                    }
                    let balanced = Self::balance(
                        node_ref.color,
                        Some(new_left),
                        node_ref.value.clone(),
                        node_ref.right.clone(),
                    );
                    (ReferenceCounter::new(balanced), true)
                }
                Ordering::Greater => {
                    let (new_right, added) = Self::insert_into(node_ref.right.as_ref(), value);
                    if !added {
                        return (ReferenceCounter::clone(node_ref), false);
                    }
                    let balanced = Self::balance(
                        node_ref.color,
                        node_ref.left.clone(),
                        node_ref.value.clone(),
                        Some(new_right),
                    );
                    (ReferenceCounter::new(balanced), true)
                }
                Ordering::Equal => (ReferenceCounter::clone(node_ref), false),
            },
        }
    }

    /// Rebuilds a subtree from its parts, fixing a red-red violation just
    /// below the top if one exists.
    ///
    /// Handles the four violation shapes: left-left, left-right, right-left
    /// and right-right. Each fix performs a single restructuring that paints
    /// the promoted node red and its new children black, so a violation can
    /// only move one level up per fix, where the caller's own `balance` deals
    /// with it. Only a black parent can absorb a red-red violation below it;
    /// a red parent is left for the level above.
    fn balance(color: Color, left: Link<T>, value: T, right: Link<T>) -> Node<T> {
        if color == Color::Black {
            // Case 1: Left-Left (left child is red, left-left grandchild is red)
            // Case 2: Left-Right (left child is red, left-right grandchild is red)
            if is_red(left.as_ref())
                && let Some(left_node) = &left
            {
                if is_red(left_node.left.as_ref())
                    && let Some(grandchild) = &left_node.left
                {
                    return Node {
                        color: Color::Red,
                        value: left_node.value.clone(),
                        left: Some(ReferenceCounter::new(grandchild.with_color(Color::Black))),
                        right: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value,
                            left: left_node.right.clone(),
                            right,
                        })),
                    };
                }
                if is_red(left_node.right.as_ref())
                    && let Some(grandchild) = &left_node.right
                {
                    return Node {
                        color: Color::Red,
                        value: grandchild.value.clone(),
                        left: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value: left_node.value.clone(),
                            left: left_node.left.clone(),
                            right: grandchild.left.clone(),
                        })),
                        right: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value,
                            left: grandchild.right.clone(),
                            right,
                        })),
                    };
                }
            }

            // Case 3: Right-Left (right child is red, right-left grandchild is red)
            // Case 4: Right-Right (right child is red, right-right grandchild is red)
            if is_red(right.as_ref())
                && let Some(right_node) = &right
            {
                if is_red(right_node.left.as_ref())
                    && let Some(grandchild) = &right_node.left
                {
                    return Node {
                        color: Color::Red,
                        value: grandchild.value.clone(),
                        left: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value,
                            left,
                            right: grandchild.left.clone(),
                        })),
                        right: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value: right_node.value.clone(),
                            left: grandchild.right.clone(),
                            right: right_node.right.clone(),
                        })),
                    };
                }
                if is_red(right_node.right.as_ref())
                    && let Some(grandchild) = &right_node.right
                {
                    return Node {
                        color: Color::Red,
                        value: right_node.value.clone(),
                        left: Some(ReferenceCounter::new(Node {
                            color: Color::Black,
                            value,
                            left,
                            right: right_node.left.clone(),
                        })),
                        right: Some(ReferenceCounter::new(grandchild.with_color(Color::Black))),
                    };
                }
            }
        }

        Node {
            color,
            value,
            left,
            right,
        }
    }

    /// Merges two sets, returning a new set containing the union of their
    /// elements.
    ///
    /// Defined by fold semantics: the result is equivalent to inserting
    /// every element of `other`, in ascending order, into `self`. Elements
    /// of `other` that already exist in `self` are dropped (uniqueness
    /// rule). Neither input is mutated.
    ///
    /// This is deliberately not a structural tree merge. A linear-time merge
    /// by black-height alignment is substantially more intricate; reusing
    /// `insert` keeps the invariant-preservation argument trivial at the
    /// cost of a logarithmic factor, which is acceptable for the bounded
    /// vocabularies this crate targets. A structural merge would be an
    /// extension, not a replacement.
    ///
    /// # Complexity
    ///
    /// O(M log(N+M)) where N = `self.len()`, M = `other.len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set1 = OrderedSet::new().insert(1).insert(3);
    /// let set2 = OrderedSet::new().insert(2).insert(3);
    /// let merged = set1.merge(&set2);
    ///
    /// assert_eq!(merged.to_sorted_vec(), vec![1, 2, 3]);
    /// assert_eq!(set1.len(), 2); // Inputs unchanged
    /// assert_eq!(set2.len(), 2);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }

        other
            .iter()
            .fold(self.clone(), |accumulated, element| {
                accumulated.insert(element.clone())
            })
    }

    /// Returns a sorted `Vec` containing clones of all elements.
    ///
    /// # Complexity
    ///
    /// O(N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordset::persistent::OrderedSet;
    ///
    /// let set = OrderedSet::new().insert(3).insert(1).insert(2);
    /// assert_eq!(set.to_sorted_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to the elements of an [`OrderedSet`] in
/// ascending order.
pub struct OrderedSetIterator<'a, T> {
    elements: Vec<&'a T>,
    current_index: usize,
}

impl<'a, T> Iterator for OrderedSetIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.elements.len() {
            None
        } else {
            let element = self.elements[self.current_index];
            self.current_index += 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for OrderedSetIterator<'_, T> {
    fn len(&self) -> usize {
        self.elements.len().saturating_sub(self.current_index)
    }
}

/// An owning iterator over the elements of an [`OrderedSet`] in ascending
/// order.
pub struct OrderedSetIntoIterator<T> {
    elements: Vec<T>,
    current_index: usize,
}

impl<T: Clone> Iterator for OrderedSetIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_index >= self.elements.len() {
            None
        } else {
            let element = self.elements[self.current_index].clone();
            self.current_index += 1;
            Some(element)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.elements.len().saturating_sub(self.current_index);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for OrderedSetIntoIterator<T> {
    fn len(&self) -> usize {
        self.elements.len().saturating_sub(self.current_index)
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for OrderedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Ord> FromIterator<T> for OrderedSet<T> {
    /// Builds a set by folding `insert` over the elements in input order.
    ///
    /// This is the sequential construction entry point; see
    /// [`parallel::build`](super::parallel::build) for the fork-join
    /// equivalent.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for element in iter {
            set = set.insert(element);
        }
        set
    }
}

impl<T: Clone + Ord> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = OrderedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        OrderedSetIntoIterator {
            elements: self.to_sorted_vec(),
            current_index: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = OrderedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Clone + Ord> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }

        // Iteration is in ascending order on both sides
        self.iter()
            .zip(other.iter())
            .all(|(left, right)| left == right)
    }
}

impl<T: Clone + Ord> Eq for OrderedSet<T> {}

impl<T: Clone + Ord + fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
