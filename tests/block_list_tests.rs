use std::collections::HashMap;

use barrier_sssp::data_structures::BlockList;
use ordered_float::OrderedFloat;

const INF: OrderedFloat<f64> = OrderedFloat(f64::INFINITY);

#[test]
fn insert_and_pull() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(2, INF);
    list.insert(1, OrderedFloat(10.0));
    list.insert(2, OrderedFloat(5.0));
    // Update with a smaller value.
    list.insert(1, OrderedFloat(8.0));
    assert_eq!(list.get(1), Some(OrderedFloat(8.0)));
    assert_eq!(list.len(), 2);

    let (next_bound, keys) = list.pull();
    // Everything fit into one pull, so the container drained to its bound.
    assert_eq!(next_bound, INF);
    assert_eq!(keys.len(), 2);
    assert!(keys.contains(&1));
    assert!(keys.contains(&2));
    assert!(list.is_empty());
}

#[test]
fn dominated_entries_are_discarded() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(4, INF);
    list.insert(7, OrderedFloat(5.0));
    list.insert(7, OrderedFloat(9.0));
    assert_eq!(list.get(7), Some(OrderedFloat(5.0)));

    list.batch_prepend(vec![(7, OrderedFloat(6.0))]);
    assert_eq!(list.get(7), Some(OrderedFloat(5.0)));

    list.batch_prepend(vec![(7, OrderedFloat(2.0))]);
    assert_eq!(list.get(7), Some(OrderedFloat(2.0)));
    assert_eq!(list.len(), 1);
}

#[test]
fn pull_returns_smallest_block_with_boundary() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(2, INF);
    list.insert(10, OrderedFloat(10.0));
    list.insert(30, OrderedFloat(30.0));
    list.insert(20, OrderedFloat(20.0));
    list.insert(5, OrderedFloat(5.0));
    list.insert(15, OrderedFloat(15.0));

    let (bound, keys) = list.pull();
    assert_eq!(keys, vec![5, 10]);
    assert_eq!(bound, OrderedFloat(15.0));

    let (bound, keys) = list.pull();
    assert_eq!(keys, vec![15, 20]);
    assert_eq!(bound, OrderedFloat(30.0));

    let (bound, keys) = list.pull();
    assert_eq!(keys, vec![30]);
    assert_eq!(bound, INF);
    assert!(list.is_empty());

    // Pulling from an empty container yields nothing at the bound.
    let (bound, keys) = list.pull();
    assert!(keys.is_empty());
    assert_eq!(bound, INF);
}

#[test]
fn batch_prepend_comes_out_first() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(2, INF);
    list.insert(1, OrderedFloat(10.0));
    list.insert(2, OrderedFloat(20.0));

    list.batch_prepend(vec![(3, OrderedFloat(2.0)), (4, OrderedFloat(1.0))]);
    assert_eq!(list.len(), 4);

    let (bound, keys) = list.pull();
    assert_eq!(keys, vec![4, 3]);
    assert_eq!(bound, OrderedFloat(10.0));
}

#[test]
fn batch_prepend_keeps_minimum_per_key() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(4, INF);
    list.batch_prepend(vec![
        (1, OrderedFloat(3.0)),
        (1, OrderedFloat(1.0)),
        (1, OrderedFloat(2.0)),
        (2, OrderedFloat(4.0)),
    ]);
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1), Some(OrderedFloat(1.0)));
    assert_eq!(list.get(2), Some(OrderedFloat(4.0)));
}

#[test]
fn pull_boundary_dominates_remaining_entries() {
    let mut list: BlockList<OrderedFloat<f64>> = BlockList::new(4, INF);
    let mut live: HashMap<usize, OrderedFloat<f64>> = HashMap::new();

    for key in 0..24 {
        let value = OrderedFloat(50.0 + ((key * 13) % 24) as f64);
        list.insert(key, value);
        live.insert(key, value);
    }
    let cheap: Vec<_> = (24..32)
        .map(|key| (key, OrderedFloat(((key - 24) % 5) as f64)))
        .collect();
    for &(key, value) in &cheap {
        live.insert(key, value);
    }
    list.batch_prepend(cheap);

    while !list.is_empty() {
        let (bound, keys) = list.pull();
        assert!(!keys.is_empty());
        assert!(keys.len() <= 4);
        for key in &keys {
            live.remove(key);
        }
        for (&key, &value) in &live {
            assert_eq!(list.get(key), Some(value));
            assert!(value >= bound, "left-behind {value:?} undercuts {bound:?}");
        }
    }
    assert!(live.is_empty());
}
