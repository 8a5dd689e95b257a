#[allow(clippy::module_inception)]
mod rbtree;
pub use rbtree::RedBlackTreeSet;
mod iter;
pub use iter::RedBlackTreeSetIter;
mod ordered;
mod sorted_set;
#[cfg(feature = "config")]
pub(crate) mod config;
