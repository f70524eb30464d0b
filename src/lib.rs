//! # `stringset` - Prefix-Tree String Membership Set
//!
//! A membership-testing set for text strings built on a trie (prefix tree):
//! given a vocabulary assembled incrementally, answer "is this exact string a
//! member?" in time proportional to the query's length rather than the set's
//! size. Intended as a building block for keyword filters, allow/deny lists,
//! and other fast repeated-lookup vocabularies.
//!
//! ## Key Features
//!
//! - **Length-proportional lookups**: a query of `m` code points costs `m`
//!   edge probes regardless of how many strings are stored.
//! - **Prefix sharing**: strings with a common prefix share the node path
//!   for that prefix, so dense vocabularies stay compact.
//! - **Exact matching**: storing `"cat"` does not make `"ca"` a member, and
//!   storing `"card"` does not make `"cards"` one. Members that are prefixes
//!   of other members (including the empty string) are tracked precisely.
//! - **Unicode-correct**: edges carry Unicode scalar values, not bytes, so
//!   multi-byte characters traverse exactly one level each.
//!
//! ## Architecture
//!
//! The set is a strict ownership tree: the handle owns the root node and
//! every node owns its children outright, so dropping the set recursively
//! releases the whole structure with no reference counting. Each node keeps
//! its child edges in an array sorted by code point and resolves them by
//! binary search, trading a small `log(branching)` factor on lookups for
//! dense storage and cache-friendly probes.
//!
//! The structure is append-only: elements can be inserted for the set's
//! whole lifetime but never removed.
//!
//! ## Thread Safety
//!
//! There is no interior mutability. A set that is not being mutated may be
//! queried from any number of threads; mutation requires exclusive access,
//! which the `&mut self` receiver on [`StringSet::insert`] already enforces.
//! Callers who need concurrent mutation must supply external synchronization
//! (e.g. `Arc<RwLock<StringSet>>`).
//!
//! ## Example
//!
//! ```rust
//! use stringset::StringSet;
//!
//! let mut set: StringSet = ["go", "golang"].into_iter().collect();
//! set.insert("gopher");
//!
//! assert!(set.contains("go"));
//! assert!(set.contains("golang"));
//! assert!(!set.contains("gol"));
//! assert!(!set.contains(""));
//! assert_eq!(set.len(), 3);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod dump;
mod node;
pub mod set;

pub use set::StringSet;
