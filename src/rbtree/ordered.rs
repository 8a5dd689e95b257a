use super::RedBlackTreeSet;
use crate::Ordered;

impl<T: Ord> Ordered for RedBlackTreeSet<T> {}

#[cfg(test)]
mod tests {
    use super::RedBlackTreeSet;
    use crate::tests::shuffled;
    use crate::SortedSet;

    #[test]
    fn iteration_is_sorted() {
        let mut set = RedBlackTreeSet::new();
        for v in shuffled(300, 43) {
            set.put(v);
        }
        let values: Vec<u16> = set.iter().copied().collect();
        assert_eq!(values, (0..300).collect::<Vec<u16>>());
    }
}
