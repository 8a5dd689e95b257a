#[allow(clippy::module_inception)]
mod trie;
pub use trie::TrieMap;
mod iter;
pub use iter::{TrieMapIter, TrieMapKeys};
mod ordered;
mod sorted_map;
#[cfg(feature = "config")]
pub(crate) mod config;
