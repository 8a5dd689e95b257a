use super::TrieMap;
use crate::SortedMap;

/// The family-trait rendition of the trie, keyed by owned byte strings.
///
/// Inherent [`TrieMap`] operations accept any `impl AsRef<[u8]>`; this
/// impl pins the key type to `Vec<u8>` so the trie can stand behind
/// `dyn SortedMap<Vec<u8>, V>` like any other map engine.
impl<V> SortedMap<Vec<u8>, V> for TrieMap<V> {
    fn put(&mut self, key: Vec<u8>, value: V) -> Option<V> {
        TrieMap::put(self, key, value)
    }

    #[allow(clippy::ptr_arg)]
    fn get(&self, key: &Vec<u8>) -> Option<&V> {
        TrieMap::get(self, key)
    }

    #[allow(clippy::ptr_arg)]
    fn get_mut(&mut self, key: &Vec<u8>) -> Option<&mut V> {
        TrieMap::get_mut(self, key)
    }

    #[allow(clippy::ptr_arg)]
    fn remove(&mut self, key: &Vec<u8>) -> Option<V> {
        TrieMap::remove(self, key)
    }

    #[allow(clippy::ptr_arg)]
    fn contains(&self, key: &Vec<u8>) -> bool {
        TrieMap::contains(self, key)
    }

    fn count(&self) -> usize {
        TrieMap::count(self)
    }

    fn clear(&mut self) {
        TrieMap::clear(self)
    }
}
