//! # wordset
//!
//! Sorted unique word lists built on a persistent red-black ordered set
//! with fork-join construction.
//!
//! ## Overview
//!
//! This crate ingests free-form text, splits it into normalized word
//! tokens, and produces a deduplicated, lexicographically sorted word list.
//! It is organized around three pieces:
//!
//! - **Persistent ordered set**: an immutable Red-Black Tree with
//!   structural sharing ([`persistent::OrderedSet`])
//! - **Fork-join construction**: concurrent divide-and-merge building of a
//!   set from an input sequence ([`persistent::parallel`])
//! - **Text pipeline**: tokenization ([`text`]) and timed file-to-file
//!   orchestration ([`pipeline`])
//!
//! Because every set operation returns a new version and never mutates
//! shared nodes, concurrent construction needs no locks anywhere.
//!
//! ## Example
//!
//! ```rust
//! use wordset::prelude::*;
//!
//! let tokens = tokenize("Functional programming, in C -- functional!");
//! let set: OrderedSet<String> = tokens.into_iter().collect();
//! assert_eq!(
//!     set.to_sorted_vec(),
//!     vec!["c", "functional", "in", "programming"]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use wordset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::OrderedSet;
    pub use crate::persistent::parallel;
    pub use crate::pipeline::{BuildStrategy, process_file, sorted_words};
    pub use crate::text::{tokenize, tokenize_parallel};
}

pub mod persistent;
pub mod pipeline;
pub mod text;
