use super::BTreeMap;
use crate::Ordered;

impl<K: Ord, V> Ordered for BTreeMap<K, V> {}

#[cfg(test)]
mod tests {
    use super::BTreeMap;
    use crate::tests::shuffled;
    use crate::SortedMap;

    #[test]
    fn iteration_is_sorted() {
        for &branching in &[3usize, 4, 6, 16] {
            let mut map = BTreeMap::with_branching_factor(branching);
            for k in shuffled(300, 17) {
                map.put(k, u32::from(k));
            }
            let keys: Vec<u16> = map.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, (0..300).collect::<Vec<u16>>());
        }
    }
}
