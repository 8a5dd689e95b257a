use super::ArraySet;
use crate::SortedSet;

impl<T: Ord> SortedSet<T> for ArraySet<T> {
    /// Insert `value` at its sorted position.
    ///
    /// The position is found by binary search. When the set already
    /// holds an equal value, `value` is dropped and `false` is returned;
    /// otherwise the tail of the array is shifted right by one slot to
    /// make room and `true` is returned.
    fn put(&mut self, value: T) -> bool {
        match self.values.binary_search(&value) {
            Ok(_) => false,
            Err(index) => {
                self.values.insert(index, value);
                true
            }
        }
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        match self.values.binary_search(value) {
            Ok(index) => Some(self.values.remove(index)),
            Err(_) => None,
        }
    }

    fn contains(&self, value: &T) -> bool {
        self.values.binary_search(value).is_ok()
    }

    fn count(&self) -> usize {
        self.values.len()
    }

    fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::ArraySet;
    use crate::tests::test_sorted_set;

    #[test]
    fn sorted_set() {
        test_sorted_set(ArraySet::new(), 0);
        test_sorted_set(ArraySet::new(), 10);
        test_sorted_set(ArraySet::new(), 100);
        test_sorted_set(ArraySet::with_capacity(64), 500);
    }
}
