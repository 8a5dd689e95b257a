use super::TreapMap;
use crate::Ordered;

impl<K: Ord, V> Ordered for TreapMap<K, V> {}
