use super::SkipListMap;
use crate::Ordered;

impl<K: Ord, V> Ordered for SkipListMap<K, V> {}

#[cfg(test)]
mod tests {
    use super::SkipListMap;
    use crate::tests::shuffled;
    use crate::SortedMap;

    #[test]
    fn iteration_is_sorted() {
        // Different seeds shape the lanes differently; the observable
        // order must not care.
        for seed in 0..4u64 {
            let mut map = SkipListMap::with_max_level(12).with_seed(seed);
            for k in shuffled(300, seed) {
                map.put(k, u32::from(k));
            }
            let keys: Vec<u16> = map.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, (0..300).collect::<Vec<u16>>());
        }
    }
}
