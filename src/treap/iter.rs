use super::treap::Node;
use super::TreapMap;

/// In-order iterator over the entries of a
/// [`TreapMap`](struct.TreapMap.html), ascending by key.
///
/// The iterator carries an explicit stack of pending nodes, one per
/// level of the leftmost unexplored spine, and therefore allocates
/// proportionally to the height of the tree.
pub struct TreapMapIter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<K, V> TreapMap<K, V> {
    /// Iterate over the entries of the map in ascending key order.
    ///
    /// The iterator borrows the map; the map cannot be mutated while it
    /// is alive.
    pub fn iter(&self) -> TreapMapIter<'_, K, V> {
        let mut iter = TreapMapIter { stack: Vec::new() };
        iter.push_left_spine(self.root.as_deref());
        iter
    }
}

impl<'a, K, V> TreapMapIter<'a, K, V> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<K, V>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for TreapMapIter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some((&node.key, &node.value))
    }
}

impl<'a, K, V> IntoIterator for &'a TreapMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = TreapMapIter<'a, K, V>;

    fn into_iter(self) -> TreapMapIter<'a, K, V> {
        self.iter()
    }
}
