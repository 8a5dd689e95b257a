use sorted_collections::{BTreeMap, SortedMap};

#[test]
fn btree_map_scenario() {
    let mut map = BTreeMap::with_branching_factor(4);
    for (k, v) in [
        (10, "ten"),
        (20, "twenty"),
        (5, "five"),
        (6, "six"),
        (12, "twelve"),
        (30, "thirty"),
        (7, "seven"),
        (17, "seventeen"),
    ] {
        assert_eq!(map.put(k, v), None);
    }
    assert_eq!(map.count(), 8);
    assert_eq!(map.get(&5), Some(&"five"));
    assert_eq!(map.get(&7), Some(&"seven"));

    assert_eq!(map.remove(&10), Some("ten"));
    assert_eq!(map.count(), 7);
    assert_eq!(map.get(&10), None);

    assert_eq!(map.remove(&6), Some("six"));
    assert_eq!(map.remove(&7), Some("seven"));
    assert_eq!(map.remove(&5), Some("five"));
    assert_eq!(map.count(), 4);
    assert_eq!(map.get(&20), Some(&"twenty"));
}

#[test]
fn update_in_place_keeps_count() {
    let mut map = BTreeMap::new();
    map.put(1, String::from("one"));
    assert_eq!(map.put(1, String::from("uno")), Some(String::from("one")));
    assert_eq!(map.count(), 1);
    assert_eq!(map.get(&1), Some(&String::from("uno")));
}

#[test]
fn handles_are_writable_until_the_next_mutation() {
    let mut map = BTreeMap::with_branching_factor(4);
    for k in 0..32 {
        map.put(k, k);
    }
    *map.get_mut(&20).unwrap() = 200;
    assert_eq!(map.get(&20), Some(&200));
}

#[test]
fn clear_then_reuse() {
    let mut map = BTreeMap::with_branching_factor(5);
    for k in 0..100 {
        map.put(k, k);
    }
    map.clear();
    assert_eq!(map.count(), 0);
    assert!(map.iter().next().is_none());
    map.put(1, 1);
    assert_eq!(map.count(), 1);
}
