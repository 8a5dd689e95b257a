use super::shuffled;
use crate::SortedMap;

// The universal map contract, runnable against any engine of the
// family. `key_of` spells the test key `k` in the engine's key type.
pub fn test_sorted_map_with<K, C, F>(mut map: C, n: u16, key_of: F)
where
    C: SortedMap<K, u32>,
    F: Fn(u16) -> K,
{
    // Empty behavior.
    assert_eq!(map.count(), 0);
    assert!(map.is_empty());
    assert!(map.get(&key_of(0)).is_none());
    assert!(!map.contains(&key_of(0)));
    assert_eq!(map.remove(&key_of(0)), None);

    // Every insertion is immediately observable and counted.
    let keys = shuffled(n, 0x5eed);
    for (i, &k) in keys.iter().enumerate() {
        assert_eq!(map.put(key_of(k), u32::from(k)), None);
        assert_eq!(map.count(), i + 1);
        assert!(map.contains(&key_of(k)));
        assert_eq!(map.get(&key_of(k)), Some(&u32::from(k)));
    }

    // Inserting an existing key updates in place without growing.
    for &k in keys.iter() {
        assert_eq!(map.put(key_of(k), u32::from(k) + 1), Some(u32::from(k)));
        assert_eq!(map.count(), keys.len());
        assert_eq!(map.get(&key_of(k)), Some(&(u32::from(k) + 1)));
    }

    // Writing through a handle is observable on the next lookup.
    for &k in keys.iter() {
        *map.get_mut(&key_of(k)).unwrap() += 1;
        assert_eq!(map.get(&key_of(k)), Some(&(u32::from(k) + 2)));
    }

    // Removal returns the stored value exactly once and shrinks by one.
    for (i, &k) in keys.iter().rev().enumerate() {
        assert_eq!(map.remove(&key_of(k)), Some(u32::from(k) + 2));
        assert!(!map.contains(&key_of(k)));
        assert_eq!(map.remove(&key_of(k)), None);
        assert_eq!(map.count(), keys.len() - i - 1);
    }
    assert!(map.is_empty());

    // A cleared map is empty and usable again.
    for &k in keys.iter() {
        map.put(key_of(k), 0);
    }
    map.clear();
    assert_eq!(map.count(), 0);
    for &k in keys.iter() {
        assert!(!map.contains(&key_of(k)));
    }
    assert_eq!(map.put(key_of(7), 7), None);
    assert_eq!(map.get(&key_of(7)), Some(&7));
    assert_eq!(map.count(), 1);
}

pub fn test_sorted_map<C: SortedMap<u16, u32>>(map: C, n: u16) {
    test_sorted_map_with(map, n, |k| k);
}
