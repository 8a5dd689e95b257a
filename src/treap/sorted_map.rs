use super::TreapMap;
use crate::SortedMap;

impl<K: Ord, V> SortedMap<K, V> for TreapMap<K, V> {
    /// Insert a key/value pair under a random priority drawn from the
    /// container-local generator.
    ///
    /// An equal key is updated in place; a new key descends to the
    /// first lower-priority subtree, which is split around the key and
    /// hung under the new entry.
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        self.lookup(key)
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.lookup_mut(key)
    }

    /// Take the value matching `key` out of the map, replacing the
    /// matching node by the merge of its two subtrees.
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
