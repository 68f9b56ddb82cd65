use avltree::{AvlTreeError, AvlTreeSet, Bounds};
use std::ops::Bound;

fn tree_of(values: &[i32]) -> AvlTreeSet<i32> {
    values.iter().copied().collect()
}

#[test]
fn test_sub_set_writes_through() {
    let mut tree = tree_of(&[50, 150, 250]);
    {
        let mut view = tree.sub_set_mut(100, 200);
        assert_eq!(view.len(), 1);
        assert!(view.contains(&150));
        assert!(!view.contains(&50));
        assert!(!view.contains(&250));

        assert_eq!(view.insert(180), Ok(true));
        assert_eq!(view.len(), 2);
        assert!(view.contains(&180));

        assert!(matches!(view.insert(300), Err(AvlTreeError::InvalidArgument(_))));
        assert_eq!(view.len(), 2);
    }
    assert!(tree.contains(&180));
    assert!(!tree.contains(&300));
    assert_eq!(tree.len(), 4);
    assert!(tree.check_invariants());
}

#[test]
fn test_head_tail_and_sub_bounds() {
    let tree = tree_of(&[10, 20, 30, 40, 50]);

    assert_eq!(tree.head_set(30).to_vec(), vec![10, 20]);
    assert_eq!(tree.head_set(31).to_vec(), vec![10, 20, 30]);
    assert_eq!(tree.head_set(10).to_vec(), Vec::<i32>::new());

    assert_eq!(tree.tail_set(30).to_vec(), vec![30, 40, 50]);
    assert_eq!(tree.tail_set(29).to_vec(), vec![30, 40, 50]);
    assert_eq!(tree.tail_set(51).to_vec(), Vec::<i32>::new());

    assert_eq!(tree.sub_set(20, 40).to_vec(), vec![20, 30]);
    assert_eq!(tree.sub_set(15, 45).to_vec(), vec![20, 30, 40]);

    let open = tree.range_set(Bound::Excluded(20), Bound::Included(40));
    assert_eq!(open.to_vec(), vec![30, 40]);
    assert_eq!(open.first(), Some(&30));
    assert_eq!(open.last(), Some(&40));
}

#[test]
fn test_first_last_and_emptiness() {
    let tree = tree_of(&[10, 20, 30]);

    let tail = tree.tail_set(15);
    assert_eq!(tail.first(), Some(&20));
    assert_eq!(tail.last(), Some(&30));
    assert!(!tail.is_empty());

    let gap = tree.sub_set(11, 19);
    assert!(gap.is_empty());
    assert_eq!(gap.len(), 0);
    assert_eq!(gap.first(), None);
    assert_eq!(gap.last(), None);

    let crossed = tree.sub_set(30, 10);
    assert!(crossed.is_empty());
    assert_eq!(crossed.iter().count(), 0);
}

#[test]
fn test_view_iteration_in_both_directions() {
    let tree: AvlTreeSet<i32> = (0..20).collect();
    let view = tree.sub_set(5, 10);
    assert_eq!(view.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8, 9]);
    assert_eq!(view.iter().rev().copied().collect::<Vec<_>>(), vec![9, 8, 7, 6, 5]);
    let mut sum = 0;
    for v in &view {
        sum += v;
    }
    assert_eq!(sum, 35);
}

#[test]
fn test_len_follows_backing_changes() {
    let mut tree: AvlTreeSet<i32> = (0..10).collect();
    let mut view = tree.tail_set_mut(5);
    assert_eq!(view.len(), 5);
    assert!(view.remove(&7));
    assert!(!view.remove(&2));
    assert_eq!(view.take(&8), Some(8));
    assert_eq!(view.len(), 3);
    assert_eq!(view.insert_all([20, 21]), Ok(true));
    assert_eq!(view.len(), 5);
    assert!(tree.contains(&2));
    assert_eq!(tree.len(), 10);
}

#[test]
fn test_insert_all_stops_at_first_outsider() {
    let mut tree: AvlTreeSet<i32> = AvlTreeSet::new();
    let mut view = tree.head_set_mut(10);
    assert!(view.insert_all([1, 2, 30, 3]).is_err());
    assert_eq!(tree.to_vec(), vec![1, 2]);
}

#[test]
fn test_clear_through_view_keeps_the_rest() {
    let mut tree: AvlTreeSet<i32> = (0..50).collect();
    tree.sub_set_mut(10, 40).clear();
    assert_eq!(tree.len(), 20);
    assert_eq!(tree.range(..).filter(|v| (10..40).contains(*v)).count(), 0);
    assert!(tree.contains(&9));
    assert!(tree.contains(&40));
    assert!(tree.check_invariants());
}

#[test]
fn test_retain_through_view() {
    let mut tree: AvlTreeSet<i32> = (0..10).collect();
    {
        let mut view = tree.sub_set_mut(2, 8);
        assert!(view.retain_all(&[3, 5, 9]));
        assert_eq!(view.to_vec(), vec![3, 5]);
        assert!(!view.retain_all(&[3, 5]));
        view.retain(|v| *v != 5);
        assert!(view.remove_all(&[3, 0]));
        assert!(view.is_empty());
    }
    assert_eq!(tree.to_vec(), vec![0, 1, 8, 9]);
}

#[test]
fn test_nested_views_intersect_bounds() {
    let mut tree: AvlTreeSet<i32> = (0..100).collect();

    let outer = tree.sub_set(20, 60);
    let inner = outer.sub_set(10, 30);
    assert_eq!(inner.first(), Some(&20));
    assert_eq!(inner.last(), Some(&29));
    assert_eq!(
        inner.bounds(),
        &Bounds::new(Bound::Included(20), Bound::Excluded(30))
    );
    assert_eq!(outer.tail_set(55).to_vec(), vec![55, 56, 57, 58, 59]);
    assert_eq!(outer.head_set(80).len(), 40);

    let mut outer = tree.tail_set_mut(90);
    let mut inner = outer.head_set_mut(95);
    assert!(inner.insert(80).is_err());
    assert!(inner.insert(95).is_err());
    assert!(inner.remove(&92));
    assert_eq!(inner.len(), 4);
    assert_eq!(outer.len(), 9);
}

#[test]
fn test_exclusive_limits_win_on_ties() {
    let tree: AvlTreeSet<i32> = (0..10).collect();
    let outer = tree.range_set(Bound::Included(2), Bound::Included(7));
    let inner = outer.range_set(Bound::Excluded(2), Bound::Unbounded);
    assert_eq!(inner.to_vec(), vec![3, 4, 5, 6, 7]);
    let inner = outer.range_set(Bound::Unbounded, Bound::Excluded(7));
    assert_eq!(inner.to_vec(), vec![2, 3, 4, 5, 6]);
}

#[test]
fn test_view_cursor_stops_at_upper_bound() {
    let mut tree: AvlTreeSet<i32> = (0..10).collect();
    let mut view = tree.range_set_mut(Bound::Excluded(3), Bound::Included(6));
    let mut cursor = view.cursor();
    let mut seen = Vec::new();
    while cursor.has_next(&view).unwrap() {
        let value = *cursor.next(&view).unwrap();
        seen.push(value);
        if value == 5 {
            assert_eq!(cursor.remove(&mut view), Ok(5));
        }
    }
    assert_eq!(seen, vec![4, 5, 6]);
    assert_eq!(cursor.next(&view), Err(AvlTreeError::NoSuchElement));
    assert_eq!(view.to_vec(), vec![4, 6]);
}
