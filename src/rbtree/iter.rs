use super::rbtree::{Link, RedBlackTreeSet};
use std::marker::PhantomData;

/// In-order iterator over the values of a
/// [`RedBlackTreeSet`](struct.RedBlackTreeSet.html), ascending.
///
/// The parent back-links let the iterator walk to each in-order
/// successor directly, so it is a bare cursor: no stack, no allocation
/// on advancement.
pub struct RedBlackTreeSetIter<'a, T> {
    current: Link<T>,
    _marker: PhantomData<&'a RedBlackTreeSet<T>>,
}

impl<T> RedBlackTreeSet<T> {
    /// Iterate over the values of the set in ascending order.
    ///
    /// The iterator borrows the set; the set cannot be mutated while it
    /// is alive.
    pub fn iter(&self) -> RedBlackTreeSetIter<'_, T> {
        let current = match self.root {
            None => None,
            // SAFETY: the root is a live node of this tree and the
            // shared borrow keeps the tree alive and frozen.
            Some(root) => unsafe { Some(Self::min_node(root)) },
        };
        RedBlackTreeSetIter {
            current,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for RedBlackTreeSetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.current?;
        // SAFETY: the cursor only ever holds nodes of the borrowed
        // tree, and the borrow keeps the tree from being mutated or
        // dropped while the iterator is alive.
        unsafe {
            self.current = RedBlackTreeSet::successor(node);
            Some(&node.as_ref().value)
        }
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTreeSet<T> {
    type Item = &'a T;
    type IntoIter = RedBlackTreeSetIter<'a, T>;

    fn into_iter(self) -> RedBlackTreeSetIter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::RedBlackTreeSet;
    use crate::SortedSet;

    #[test]
    fn empty() {
        let set: RedBlackTreeSet<u16> = RedBlackTreeSet::new();
        assert!(set.iter().next().is_none());
    }

    #[test]
    fn yields_every_value_once() {
        let mut set = RedBlackTreeSet::new();
        for v in crate::tests::shuffled(300, 41) {
            set.put(v);
        }
        let values: Vec<u16> = set.iter().copied().collect();
        assert_eq!(values, (0..300).collect::<Vec<u16>>());
    }
}
