use avltree::{comparator, AvlTreeSet, NumericOrder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

#[test]
fn test_matches_btreeset_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut tree = AvlTreeSet::new();
    let mut oracle = BTreeSet::new();

    for step in 0..20_000 {
        let value: i32 = rng.gen_range(0..2_000);
        match rng.gen_range(0..4) {
            0 | 1 => assert_eq!(tree.insert(value), oracle.insert(value), "insert {}", value),
            2 => assert_eq!(tree.remove(&value), oracle.remove(&value), "remove {}", value),
            _ => assert_eq!(tree.contains(&value), oracle.contains(&value)),
        }
        assert_eq!(tree.len(), oracle.len());
        if step % 1_000 == 0 {
            assert!(tree.check_invariants());
            assert!(tree.iter().eq(oracle.iter()));
            assert_eq!(tree.first(), oracle.first());
            assert_eq!(tree.last(), oracle.last());
        }
    }
    assert!(tree.iter().eq(oracle.iter()));
}

#[test]
fn test_range_iterator_matches_btreeset() {
    let tree: AvlTreeSet<i32> = (0..100).map(|i| i * 2).collect();
    let oracle: BTreeSet<i32> = (0..100).map(|i| i * 2).collect();

    for (lo, hi) in [(0, 10), (3, 17), (-5, 3), (190, 250), (11, 12), (50, 50)] {
        assert!(tree.range(lo..hi).eq(oracle.range(lo..hi)), "{}..{}", lo, hi);
        assert!(tree.range(lo..=hi).eq(oracle.range(lo..=hi)), "{}..={}", lo, hi);
        assert!(tree.range(lo..hi).rev().eq(oracle.range(lo..hi).rev()));
    }
    assert!(tree.range(..).eq(oracle.iter()));
}

#[test]
fn test_distinct_inserts_and_duplicates() {
    let mut tree = AvlTreeSet::new();
    for i in 0..500 {
        assert!(tree.insert(i));
    }
    assert_eq!(tree.len(), 500);
    let generation = tree.generation();
    for i in 0..500 {
        assert!(!tree.insert(i));
    }
    assert_eq!(tree.len(), 500);
    assert_eq!(tree.generation(), generation);
}

#[test]
fn test_snapshot_round_trip_preserves_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let tree: AvlTreeSet<u64> = (0..1_000).map(|_| rng.gen::<u64>()).collect();
    let snapshot = tree.to_vec();
    let rebuilt: AvlTreeSet<u64> = snapshot.iter().copied().collect();
    assert_eq!(rebuilt.to_vec(), snapshot);

    let mut buf = vec![0u64; snapshot.len() + 3];
    assert_eq!(tree.copy_to_slice(&mut buf), Ok(snapshot.len()));
    assert_eq!(&buf[..snapshot.len()], &snapshot[..]);
    assert_eq!(&buf[snapshot.len()..], &[0, 0, 0]);
    assert!(tree.copy_to_slice(&mut buf[..10]).is_err());

    let mut appended = Vec::new();
    tree.extend_into(&mut appended);
    assert_eq!(appended, snapshot);
}

#[test]
fn test_custom_order_governs_uniqueness() {
    let mut tree = AvlTreeSet::with_comparator(comparator::from_fn(|a: &String, b: &String| {
        a.to_lowercase().cmp(&b.to_lowercase())
    }));
    assert!(tree.insert("Apple".to_string()));
    assert!(!tree.insert("APPLE".to_string()));
    assert!(tree.insert("banana".to_string()));
    assert!(tree.contains(&"apple".to_string()));
    assert_eq!(tree.get(&"BANANA".to_string()).map(String::as_str), Some("banana"));
    assert_eq!(tree.to_vec(), vec!["Apple".to_string(), "banana".to_string()]);
}

#[test]
fn test_bulk_operations() {
    let mut tree = AvlTreeSet::with_comparator(NumericOrder);
    assert!(tree.insert_all([5u32, 1, 9, 7, 3]));
    assert!(!tree.insert_all([1u32, 9]));
    assert!(tree.contains_all(&[1, 3, 5]));
    assert!(tree.remove_all(&[1, 2]));
    assert!(tree.retain_all(&[3, 7, 100]));
    assert_eq!(tree.to_vec(), vec![3, 7]);
    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
}
