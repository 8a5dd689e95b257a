use super::skiplist::Node;
use super::SkipListMap;
use std::marker::PhantomData;

/// Iterator over the entries of a
/// [`SkipListMap`](struct.SkipListMap.html), ascending by key.
///
/// The iterator is a bare cursor along the level-0 lane, which links
/// every entry in order; advancing it never allocates.
pub struct SkipListMapIter<'a, K, V> {
    current: *const Node<K, V>,
    _marker: PhantomData<&'a SkipListMap<K, V>>,
}

impl<K, V> SkipListMap<K, V> {
    /// Iterate over the entries of the map in ascending key order.
    ///
    /// The iterator borrows the map; the map cannot be mutated while it
    /// is alive.
    pub fn iter(&self) -> SkipListMapIter<'_, K, V> {
        SkipListMapIter {
            current: self.head[0],
            _marker: PhantomData,
        }
    }
}

impl<'a, K, V> Iterator for SkipListMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        if self.current.is_null() {
            return None;
        }
        // SAFETY: the cursor only ever holds links of the borrowed list,
        // and the borrow keeps the list from being mutated or dropped
        // while the iterator is alive.
        unsafe {
            let node = &*self.current;
            self.current = node.forward[0];
            Some((&node.key, &node.value))
        }
    }
}

impl<'a, K, V> IntoIterator for &'a SkipListMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = SkipListMapIter<'a, K, V>;

    fn into_iter(self) -> SkipListMapIter<'a, K, V> {
        self.iter()
    }
}
