use super::ArraySet;
use crate::Ordered;

impl<T: Ord> Ordered for ArraySet<T> {}
