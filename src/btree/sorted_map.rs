use super::BTreeMap;
use crate::SortedMap;

impl<K: Ord, V> SortedMap<K, V> for BTreeMap<K, V> {
    /// Insert a key/value pair.
    ///
    /// The descent from the root splits every full node it is about to
    /// enter, so when the insertion point is reached the leaf is
    /// guaranteed to have room and no change ever propagates back up.
    /// An equal key found in any node on the way down is updated in
    /// place and the previous value returned.
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.lookup_mut(key)
    }

    /// Take the value matching `key` out of the map.
    ///
    /// The descent rebalances ahead of itself: a child about to be
    /// entered with only the minimum number of keys first borrows
    /// through the parent separator from a sibling with spare keys, or
    /// merges with a sibling when both are minimal. A root emptied by a
    /// merge promotes its only child, the one place the tree loses
    /// height.
    fn remove(&mut self, key: &K) -> Option<V> {
        self.take(key)
    }

    fn contains(&self, key: &K) -> bool {
        self.lookup(key).is_some()
    }

    fn count(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}
