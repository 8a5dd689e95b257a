#[allow(clippy::module_inception)]
mod treap;
pub use treap::TreapMap;
mod iter;
pub use iter::TreapMapIter;
mod ordered;
mod sorted_map;
#[cfg(feature = "config")]
pub(crate) mod config;
