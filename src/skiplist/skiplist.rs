use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ptr;

/// Highest level count accepted by
/// [`with_max_level()`](struct.SkipListMap.html#method.with_max_level).
pub const MAX_LEVEL_LIMIT: usize = 32;

const DEFAULT_MAX_LEVEL: usize = 16;

pub(super) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    // forward[l] is the next node at level l; the node participates in
    // levels 0 through forward.len() - 1.
    pub(super) forward: Vec<*mut Node<K, V>>,
}

/// Ordered map organized as a probabilistic multi-level linked list.
///
/// Level 0 is a sorted singly linked list of every entry; each node also
/// participates in a random number of higher-level express lanes, each a
/// subsequence of the lane below. A lookup walks from the highest lane
/// in use downwards, which makes every point operation logarithmic in
/// expectation without any rebalancing work.
///
/// The level of a node is drawn once at insertion by a fair coin
/// cascade, capped one below the maximum level set at construction. The
/// level generator is a container-local [`rand::rngs::StdRng`], seeded
/// from entropy by default; seed it explicitly with
/// [`with_seed()`](struct.SkipListMap.html#method.with_seed) to make a
/// structure reproducible. Whatever levels are drawn, the observable
/// content and ordering of the map are the same.
///
/// Point operations are provided through the
/// [`SortedMap`](trait.SortedMap.html) trait.
///
/// ## Examples
///
/// ```
/// use sorted_collections::{SkipListMap, SortedMap};
///
/// let mut map = SkipListMap::with_max_level(16);
/// map.put(10, "ten");
/// map.put(5, "five");
/// map.put(15, "fifteen");
///
/// assert_eq!(map.get(&10), Some(&"ten"));
/// let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![5, 10, 15]);
/// ```
pub struct SkipListMap<K, V> {
    // head[l] anchors level l; a null slot means the lane is empty.
    // The vector plays the header sentinel of the textbook structure.
    pub(super) head: Vec<*mut Node<K, V>>,
    // Highest level currently holding a node.
    pub(super) level: usize,
    pub(super) len: usize,
    rng: StdRng,
}

impl<K, V> SkipListMap<K, V> {
    /// Create an empty [`SkipListMap`] with the default maximum level.
    pub fn new() -> Self {
        Self::with_max_level(DEFAULT_MAX_LEVEL)
    }

    /// Create an empty [`SkipListMap`] whose nodes hold at most
    /// `max_level` forward links.
    ///
    /// A maximum level of `l` serves about `2^l` entries at the expected
    /// logarithmic cost.
    ///
    /// # Panics
    ///
    /// Panics when `max_level` is outside `[1, 32]`; an out-of-range
    /// level cap is a programming error.
    pub fn with_max_level(max_level: usize) -> Self {
        assert!(
            (1..=MAX_LEVEL_LIMIT).contains(&max_level),
            "max level must be in [1, {}], got {}",
            MAX_LEVEL_LIMIT,
            max_level
        );
        SkipListMap {
            head: vec![ptr::null_mut(); max_level],
            level: 0,
            len: 0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the level generator with one seeded by `seed`, making the
    /// drawn levels, and therefore the internal shape of the list,
    /// reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The maximum level this map was built with.
    pub fn max_level(&self) -> usize {
        self.head.len()
    }

    // Draw a level in [0, max_level): start at 0 and climb while a fair
    // coin keeps coming up heads.
    fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level + 1 < self.head.len() && self.rng.gen_bool(0.5) {
            level += 1;
        }
        level
    }

    // The slot a (possibly header) predecessor exposes at `level`.
    // A null `prev` designates the header.
    //
    // SAFETY: a non-null `prev` must point to a node owned by this list
    // holding at least `level + 1` forward slots.
    unsafe fn next_of(&self, prev: *mut Node<K, V>, level: usize) -> *mut Node<K, V> {
        if prev.is_null() {
            self.head[level]
        } else {
            (&(*prev).forward)[level]
        }
    }

    // SAFETY: same contract as `next_of`.
    unsafe fn set_next(
        &mut self,
        prev: *mut Node<K, V>,
        level: usize,
        next: *mut Node<K, V>,
    ) {
        if prev.is_null() {
            self.head[level] = next;
        } else {
            (&mut (*prev).forward)[level] = next;
        }
    }

    pub(super) fn drop_nodes(&mut self) {
        // Level 0 links every node exactly once.
        let mut current = self.head[0];
        while !current.is_null() {
            // SAFETY: `current` was created by `Box::into_raw` in `insert`
            // and is reclaimed exactly once, here or in `take`.
            let node = unsafe { Box::from_raw(current) };
            current = node.forward[0];
        }
        for slot in self.head.iter_mut() {
            *slot = ptr::null_mut();
        }
        self.level = 0;
        self.len = 0;
    }
}

impl<K: Ord, V> SkipListMap<K, V> {
    // Walk down from the current top level, recording at every level the
    // last predecessor strictly below `key`. A null entry stands for the
    // header. Levels above `self.level` keep their null initialization.
    fn find_update(&self, key: &K) -> Vec<*mut Node<K, V>> {
        let mut update = vec![ptr::null_mut(); self.head.len()];
        let mut prev: *mut Node<K, V> = ptr::null_mut();
        let mut level = self.level;
        loop {
            // SAFETY: `prev` is null or a node reached through live
            // links; all nodes are owned by this list.
            unsafe {
                let mut next = self.next_of(prev, level);
                while !next.is_null() && (*next).key < *key {
                    prev = next;
                    next = self.next_of(prev, level);
                }
            }
            update[level] = prev;
            if level == 0 {
                break;
            }
            level -= 1;
        }
        update
    }

    pub(super) fn find(&self, key: &K) -> *mut Node<K, V> {
        let update = self.find_update(key);
        // SAFETY: the update vector only holds the header marker or
        // pointers to live nodes of this list.
        unsafe {
            let candidate = self.next_of(update[0], 0);
            if !candidate.is_null() && (*candidate).key == *key {
                candidate
            } else {
                ptr::null_mut()
            }
        }
    }

    pub(super) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let update = self.find_update(&key);
        // SAFETY: see `find`; the new node is published only after it is
        // fully initialized, and every link write goes through slots the
        // update vector recorded.
        unsafe {
            let candidate = self.next_of(update[0], 0);
            if !candidate.is_null() && (*candidate).key == key {
                return Some(std::mem::replace(&mut (*candidate).value, value));
            }
            let level = self.random_level();
            if level > self.level {
                // The header is the predecessor on the newly opened
                // levels; `find_update` left those entries null, which
                // is exactly the header marker.
                self.level = level;
            }
            let node = Box::into_raw(Box::new(Node {
                key,
                value,
                forward: vec![ptr::null_mut(); level + 1],
            }));
            for l in 0..=level {
                (&mut (*node).forward)[l] = self.next_of(update[l], l);
                self.set_next(update[l], l, node);
            }
            self.len += 1;
            None
        }
    }

    pub(super) fn take(&mut self, key: &K) -> Option<V> {
        let update = self.find_update(key);
        // SAFETY: `target` is unlinked from every lane before its box is
        // reclaimed, so no dangling link survives this call.
        unsafe {
            let target = self.next_of(update[0], 0);
            if target.is_null() || (*target).key != *key {
                return None;
            }
            for l in 0..=self.level {
                if self.next_of(update[l], l) == target {
                    self.set_next(update[l], l, (&(*target).forward)[l]);
                }
            }
            while self.level > 0 && self.head[self.level].is_null() {
                self.level -= 1;
            }
            self.len -= 1;
            let node = Box::from_raw(target);
            Some(node.value)
        }
    }
}

impl<K, V> Default for SkipListMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for SkipListMap<K, V> {
    fn drop(&mut self) {
        self.drop_nodes();
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for SkipListMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SkipListMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for SkipListMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: std::fmt::Debug, V: std::fmt::Debug> std::fmt::Debug
    for SkipListMap<K, V>
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<K: Ord, V> SkipListMap<K, V> {
    // Whitebox check of the structural invariants: sorted level-0 list
    // covering exactly `len` entries, every higher lane a subsequence of
    // the lane below, forward-slot counts matching node levels, and a
    // tight current-level marker.
    pub(crate) fn check_invariants(&self) {
        unsafe {
            let mut count = 0;
            let mut tallest = 0;
            let mut current = self.head[0];
            let mut previous: *mut Node<K, V> = std::ptr::null_mut();
            while !current.is_null() {
                assert!(!(*current).forward.is_empty());
                assert!((*current).forward.len() <= self.head.len());
                if !previous.is_null() {
                    assert!((*previous).key < (*current).key);
                }
                tallest = tallest.max((*current).forward.len() - 1);
                count += 1;
                previous = current;
                current = (&(*current).forward)[0];
            }
            assert_eq!(count, self.len);
            assert_eq!(tallest, self.level);
            for level in 1..self.head.len() {
                if level > self.level {
                    assert!(self.head[level].is_null());
                }
                // Every node in lane `level` must appear in lane
                // `level - 1`.
                let mut upper = self.head[level];
                while !upper.is_null() {
                    let mut lower = self.head[level - 1];
                    while !lower.is_null() && lower != upper {
                        lower = (&(*lower).forward)[level - 1];
                    }
                    assert_eq!(lower, upper);
                    upper = (&(*upper).forward)[level];
                }
            }
        }
    }
}
