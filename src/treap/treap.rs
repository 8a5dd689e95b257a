use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;
use std::mem;

pub(super) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) priority: u32,
    pub(super) left: Link<K, V>,
    pub(super) right: Link<K, V>,
}

/// Ordered map organized as a cartesian tree, commonly called a treap:
/// a binary search tree by key that is simultaneously a max-heap by a
/// priority assigned to each entry at insertion.
///
/// With priorities drawn uniformly at random the tree is shaped as if
/// the keys had been inserted in random order, which keeps its expected
/// height logarithmic without any explicit rebalancing. Two primitives
/// carry all restructuring: *split*, partitioning a tree around a key,
/// and *merge*, joining two trees whose key ranges do not overlap by
/// repeatedly promoting the higher-priority root.
///
/// [`put()`](trait.SortedMap.html#tymethod.put) draws priorities from a
/// container-local [`rand::rngs::StdRng`], a cryptographically strong
/// generator seeded from entropy; seed it with
/// [`with_seed()`](struct.TreapMap.html#method.with_seed) to make the
/// shape reproducible, or place an entry deterministically with
/// [`put_with_priority()`](struct.TreapMap.html#method.put_with_priority).
/// Whatever the priorities, the observable content and ordering of the
/// map are the same.
///
/// Point operations are provided through the
/// [`SortedMap`](trait.SortedMap.html) trait.
///
/// ## Examples
///
/// ```
/// use sorted_collections::{SortedMap, TreapMap};
///
/// let mut map = TreapMap::new();
/// map.put(10, "ten");
/// map.put(5, "five");
/// map.put(15, "fifteen");
///
/// assert_eq!(map.get(&5), Some(&"five"));
/// let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![5, 10, 15]);
/// ```
#[derive(Clone)]
pub struct TreapMap<K, V> {
    pub(super) root: Link<K, V>,
    pub(super) len: usize,
    rng: StdRng,
}

impl<K, V> TreapMap<K, V> {
    /// Create an empty [`TreapMap`].
    pub fn new() -> Self {
        TreapMap {
            root: None,
            len: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the priority generator with one seeded by `seed`, making
    /// the drawn priorities, and therefore the shape of the tree,
    /// reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl<K: Ord, V> TreapMap<K, V> {
    /// Insert a key/value pair with an explicit priority.
    ///
    /// When an equal key is already present its value is replaced in
    /// place, its priority and position are kept, and the previous
    /// value is returned. Otherwise the descent stops at the first
    /// subtree whose root has a lower priority than `priority`, splits
    /// it around `key`, and hangs the two halves under the new entry.
    pub fn put_with_priority(
        &mut self,
        key: K,
        value: V,
        priority: u32,
    ) -> Option<V> {
        // Resolve the equal-key case first: an in-place update must not
        // restructure, and the split below assumes the key is new.
        if let Some(slot) = self.lookup_mut(&key) {
            return Some(mem::replace(slot, value));
        }
        let node = Box::new(Node {
            key,
            value,
            priority,
            left: None,
            right: None,
        });
        Self::insert_rec(&mut self.root, node);
        self.len += 1;
        None
    }

    fn insert_rec(link: &mut Link<K, V>, mut node: Box<Node<K, V>>) {
        let wins = match link.as_deref() {
            None => {
                *link = Some(node);
                return;
            }
            Some(current) => node.priority > current.priority,
        };
        if wins {
            let (left, right) = Self::split(link.take(), &node.key);
            node.left = left;
            node.right = right;
            *link = Some(node);
        } else {
            let current = link.as_deref_mut().unwrap();
            if node.key < current.key {
                Self::insert_rec(&mut current.left, node);
            } else {
                Self::insert_rec(&mut current.right, node);
            }
        }
    }

    // Partition `link` into the subtree of keys strictly below `key`
    // and the subtree of keys at or above it, re-hanging subtrees on
    // the way down.
    pub(super) fn split(
        link: Link<K, V>,
        key: &K,
    ) -> (Link<K, V>, Link<K, V>) {
        match link {
            None => (None, None),
            Some(mut node) => {
                if node.key < *key {
                    let (left, right) = Self::split(node.right.take(), key);
                    node.right = left;
                    (Some(node), right)
                } else {
                    let (left, right) = Self::split(node.left.take(), key);
                    node.left = right;
                    (left, Some(node))
                }
            }
        }
    }

    // Join two trees, every key of `left` strictly below every key of
    // `right`: the higher-priority root wins and recurses on the side
    // facing the other tree.
    pub(super) fn merge(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
        match (left, right) {
            (None, right) => right,
            (left, None) => left,
            (Some(mut l), Some(mut r)) => {
                if l.priority >= r.priority {
                    let merged = Self::merge(l.right.take(), Some(r));
                    l.right = merged;
                    Some(l)
                } else {
                    let merged = Self::merge(Some(l), r.left.take());
                    r.left = merged;
                    Some(r)
                }
            }
        }
    }

    pub(super) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let priority = self.rng.gen::<u32>();
        self.put_with_priority(key, value, priority)
    }

    pub(super) fn take(&mut self, key: &K) -> Option<V> {
        let removed = Self::remove_rec(&mut self.root, key);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    fn remove_rec(link: &mut Link<K, V>, key: &K) -> Option<V> {
        let ordering = key.cmp(&link.as_ref()?.key);
        match ordering {
            Ordering::Less => {
                Self::remove_rec(&mut link.as_mut().unwrap().left, key)
            }
            Ordering::Greater => {
                Self::remove_rec(&mut link.as_mut().unwrap().right, key)
            }
            Ordering::Equal => {
                let mut node = link.take().unwrap();
                *link = Self::merge(node.left.take(), node.right.take());
                Some(node.value)
            }
        }
    }

    pub(super) fn lookup(&self, key: &K) -> Option<&V> {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&node.value),
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
            }
        }
        None
    }

    pub(super) fn lookup_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut link = self.root.as_deref_mut();
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Equal => return Some(&mut node.value),
                Ordering::Less => link = node.left.as_deref_mut(),
                Ordering::Greater => link = node.right.as_deref_mut(),
            }
        }
        None
    }
}

impl<K, V> Default for TreapMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreapMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TreapMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreapMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug
    for TreapMap<K, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<K: Ord, V> TreapMap<K, V> {
    // Whitebox check of the structural invariants: search-tree order on
    // keys, max-heap order on priorities, and a matching entry count.
    pub(crate) fn check_invariants(&self) {
        let mut count = 0;
        Self::check_node(&self.root, None, None, None, &mut count);
        assert_eq!(count, self.len);
    }

    fn check_node<'a>(
        link: &'a Link<K, V>,
        lower: Option<&'a K>,
        upper: Option<&'a K>,
        parent_priority: Option<u32>,
        count: &mut usize,
    ) {
        let node = match link {
            None => return,
            Some(node) => node,
        };
        if let Some(lo) = lower {
            assert!(lo < &node.key);
        }
        if let Some(hi) = upper {
            assert!(&node.key < hi);
        }
        if let Some(p) = parent_priority {
            assert!(node.priority <= p);
        }
        *count += 1;
        Self::check_node(
            &node.left,
            lower,
            Some(&node.key),
            Some(node.priority),
            count,
        );
        Self::check_node(
            &node.right,
            Some(&node.key),
            upper,
            Some(node.priority),
            count,
        );
    }
}
