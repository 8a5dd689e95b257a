use sorted_collections::{SkipListMap, SortedMap};

#[test]
fn skip_list_map_scenario() {
    let mut map: SkipListMap<i32, &[u8]> = SkipListMap::with_max_level(16);
    map.put(10, b"ten");
    map.put(20, b"twenty");
    map.put(5, b"five");
    map.put(15, b"fifteen");

    assert_eq!(map.put(10, b"updated"), Some(b"ten" as &[u8]));
    assert_eq!(map.get(&10), Some(&(b"updated" as &[u8])));
    assert_eq!(map.count(), 4);

    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![5, 10, 15, 20]);

    assert_eq!(map.remove(&20), Some(b"twenty" as &[u8]));
    assert_eq!(map.get(&20), None);
    assert_eq!(map.count(), 3);
}

#[test]
fn level_one_still_orders() {
    let mut map = SkipListMap::with_max_level(1);
    for k in [9, 1, 5, 3, 7] {
        map.put(k, k * 10);
    }
    let keys: Vec<i32> = map.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![1, 3, 5, 7, 9]);
}

#[test]
fn different_seeds_same_content() {
    let mut a = SkipListMap::with_max_level(12).with_seed(1);
    let mut b = SkipListMap::with_max_level(12).with_seed(2);
    for k in 0..200 {
        a.put(k, k);
        b.put(k, k);
    }
    let ka: Vec<i32> = a.iter().map(|(k, _)| *k).collect();
    let kb: Vec<i32> = b.iter().map(|(k, _)| *k).collect();
    assert_eq!(ka, kb);
}
