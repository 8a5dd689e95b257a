use super::SkipListMap;
use crate::SortedMap;

impl<K: Ord, V> SortedMap<K, V> for SkipListMap<K, V> {
    /// Insert a key/value pair.
    ///
    /// The descent records the last predecessor per lane in an update
    /// vector. An equal key found at level 0 is updated in place;
    /// otherwise a node of freshly drawn level is spliced into every
    /// lane up to its height, opening new lanes off the header when the
    /// draw exceeds the current top level.
    fn put(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn get(&self, key: &K) -> Option<&V> {
        let node = self.find(key);
        if node.is_null() {
            return None;
        }
        // SAFETY: `find` returns either null or a live node of this
        // list; the shared borrow of `self` keeps it alive and frozen
        // for the lifetime of the returned reference.
        unsafe { Some(&(*node).value) }
    }

    fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let node = self.find(key);
        if node.is_null() {
            return None;
        }
        // SAFETY: see `get`; the exclusive borrow of `self` makes the
        // returned reference the only live access into the list.
        unsafe { Some(&mut (*node).value) }
    }

    /// Take the value matching `key` out of the map.
    ///
    /// The matching node is unlinked from every lane its predecessor
    /// points at, then the current top level is trimmed while its
    /// header slot is empty.
    fn remove(&mut self, key: &K) -> Option<V> {
        self.take(key)
    }

    fn contains(&self, key: &K) -> bool {
        !self.find(key).is_null()
    }

    fn count(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.drop_nodes();
    }
}
