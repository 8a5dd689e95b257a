use super::TrieMap;
use crate::Ordered;

// The sorted byte table in every node makes the depth-first walk
// lexicographic, so the trie gives the same ordering guarantee as the
// comparison-based engines.
impl<V> Ordered for TrieMap<V> {}

#[cfg(test)]
mod tests {
    use super::TrieMap;
    use crate::tests::shuffled;

    #[test]
    fn iteration_is_sorted() {
        let mut map = TrieMap::new();
        for k in shuffled(300, 23) {
            map.put(k.to_be_bytes(), u32::from(k));
        }
        // Big-endian keys make byte order agree with numeric order.
        let keys: Vec<Vec<u8>> = map.iter().map(|(k, _)| k).collect();
        let expected: Vec<Vec<u8>> =
            (0u16..300).map(|k| k.to_be_bytes().to_vec()).collect();
        assert_eq!(keys, expected);
    }
}
