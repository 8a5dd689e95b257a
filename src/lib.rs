//! A family of ordered associative containers: sorted maps and sorted
//! sets whose elements are always kept in key order, with logarithmic
//! point queries, in-order traversal and, where the engine supports it,
//! prefix queries.
//!
//! Six self-contained engines share one behavioral contract and differ
//! in the shape of the structure behind it:
//!
//! - [`BTreeMap`]: balanced multi-way search tree with a configurable
//!   branching factor; node-local sorted arrays, splits on overflow,
//!   borrows and merges on underflow.
//! - [`SkipListMap`]: probabilistic multi-level linked list; expected
//!   logarithmic operations with no rebalancing at all.
//! - [`TrieMap`]: byte-indexed prefix tree; shared prefixes stored
//!   once, prefix enumeration for autocomplete-style queries.
//! - [`TreapMap`]: cartesian tree, a search tree by key and max-heap by
//!   randomized priority, restructured only through split and merge.
//! - [`RedBlackTreeSet`]: self-balancing binary search tree of values
//!   with worst-case logarithmic operations.
//! - [`ArraySet`]: dense sorted array of values; binary-searched
//!   lookups and constant-time positional access.
//!
//! The maps implement [`SortedMap`], the sets implement [`SortedSet`],
//! and every engine hands out a standard [`Iterator`] walking its
//! entries in ascending key order, which the [`Ordered`] marker trait
//! advertises. Keys and values move into a container on insertion and
//! move back out on removal; references handed out by lookups stay
//! valid until the container's next mutation, which the borrow checker
//! enforces.
//!
//! Containers are single-threaded and synchronous: every operation runs
//! to completion on the calling thread, and effects are observable as
//! soon as it returns. The randomized engines keep their generator
//! state container-local, so no hidden coupling exists between two
//! containers.
//!
//! ## Examples
//!
//! ```
//! use sorted_collections::{SkipListMap, SortedMap};
//!
//! let mut index = SkipListMap::new();
//! index.put(10, "ten");
//! index.put(5, "five");
//! index.put(15, "fifteen");
//!
//! assert_eq!(index.get(&10), Some(&"ten"));
//!
//! // Whatever the insertion order, iteration is sorted.
//! let keys: Vec<i32> = index.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, vec![5, 10, 15]);
//! ```
//!
//! With the `config` feature (enabled by default) containers can also
//! be described in toml and built at run time, concretely or behind a
//! boxed trait object; see the [`config`] module.

/// Point-operation contract of the map engines.
mod sorted_map;
pub use sorted_map::SortedMap;

/// Point-operation contract of the set engines.
mod sorted_set;
pub use sorted_set::SortedSet;

/// Marker trait promising iteration in ascending key order.
mod ordered;
pub use ordered::Ordered;

/// Balanced multi-way search tree.
mod btree;
pub use btree::{BTreeMap, BTreeMapIter};

/// Probabilistic multi-level linked list.
mod skiplist;
pub use skiplist::{SkipListMap, SkipListMapIter};

/// Byte-indexed prefix tree.
mod trie;
pub use trie::{TrieMap, TrieMapIter, TrieMapKeys};

/// Cartesian tree: search tree by key, max-heap by random priority.
mod treap;
pub use treap::{TreapMap, TreapMapIter};

/// Self-balancing binary search tree of values.
mod rbtree;
pub use rbtree::{RedBlackTreeSet, RedBlackTreeSetIter};

/// Dense sorted array of values.
mod array_set;
pub use array_set::{ArraySet, ArraySetIter};

/// Building containers from toml descriptions.
#[cfg(feature = "config")]
pub mod config;

#[cfg(test)]
pub(crate) mod tests;
