#[allow(clippy::module_inception)]
mod skiplist;
pub use skiplist::SkipListMap;
mod iter;
pub use iter::SkipListMapIter;
mod ordered;
mod sorted_map;
#[cfg(feature = "config")]
pub(crate) mod config;
