use dijkstra_sp::{Error, IndexMinPQ};
use ordered_float::OrderedFloat;
use rand::prelude::*;

#[test]
fn test_del_min_returns_indices_in_key_order() {
    let mut pq = IndexMinPQ::new(8);
    pq.insert(3, 30).unwrap();
    pq.insert(0, 50).unwrap();
    pq.insert(7, 10).unwrap();
    pq.insert(5, 40).unwrap();
    pq.insert(1, 20).unwrap();

    assert_eq!(pq.len(), 5);
    assert_eq!(pq.del_min().unwrap(), 7);
    assert_eq!(pq.del_min().unwrap(), 1);
    assert_eq!(pq.del_min().unwrap(), 3);
    assert_eq!(pq.del_min().unwrap(), 5);
    assert_eq!(pq.del_min().unwrap(), 0);
    assert!(pq.is_empty());
}

#[test]
fn test_contains_and_key_of_track_membership() {
    let mut pq = IndexMinPQ::new(4);
    assert!(!pq.contains(2).unwrap());

    pq.insert(2, OrderedFloat(0.5)).unwrap();
    assert!(pq.contains(2).unwrap());
    assert_eq!(pq.key_of(2).unwrap(), OrderedFloat(0.5));

    pq.del_min().unwrap();
    assert!(!pq.contains(2).unwrap());
    assert!(matches!(pq.key_of(2), Err(Error::MissingIndex(2))));
}

#[test]
fn test_decrease_key_reorders_the_queue() {
    let mut pq = IndexMinPQ::new(4);
    pq.insert(0, 10).unwrap();
    pq.insert(1, 20).unwrap();
    pq.insert(2, 30).unwrap();

    pq.decrease_key(2, 5).unwrap();
    assert_eq!(pq.min_key().unwrap(), 5);
    assert_eq!(pq.del_min().unwrap(), 2);
    assert_eq!(pq.del_min().unwrap(), 0);
    assert_eq!(pq.del_min().unwrap(), 1);
}

#[test]
fn test_decrease_key_to_non_smaller_fails_without_mutation() {
    let mut pq = IndexMinPQ::new(4);
    pq.insert(0, 10).unwrap();
    pq.insert(1, 20).unwrap();

    // equal key is rejected, as is a larger one
    assert!(matches!(pq.decrease_key(1, 20), Err(Error::KeyNotDecreased(1))));
    assert!(matches!(pq.decrease_key(1, 25), Err(Error::KeyNotDecreased(1))));

    assert_eq!(pq.key_of(1).unwrap(), 20);
    assert_eq!(pq.len(), 2);
    assert_eq!(pq.del_min().unwrap(), 0);
    assert_eq!(pq.del_min().unwrap(), 1);
}

#[test]
fn test_decrease_key_on_absent_index_fails() {
    let mut pq: IndexMinPQ<i64> = IndexMinPQ::new(4);
    assert!(matches!(pq.decrease_key(1, 5), Err(Error::MissingIndex(1))));
}

#[test]
fn test_duplicate_insert_fails() {
    let mut pq = IndexMinPQ::new(4);
    pq.insert(1, 10).unwrap();
    assert!(matches!(pq.insert(1, 5), Err(Error::DuplicateIndex(1))));
    assert_eq!(pq.key_of(1).unwrap(), 10);
}

#[test]
fn test_out_of_range_indices_fail() {
    let mut pq: IndexMinPQ<i64> = IndexMinPQ::new(4);
    assert!(matches!(pq.insert(4, 1), Err(Error::InvalidIndex(4))));
    assert!(matches!(pq.decrease_key(9, 1), Err(Error::InvalidIndex(9))));
    assert!(matches!(pq.contains(4), Err(Error::InvalidIndex(4))));
    assert!(matches!(pq.key_of(100), Err(Error::InvalidIndex(100))));
}

#[test]
fn test_del_min_on_empty_queue_fails() {
    let mut pq: IndexMinPQ<i64> = IndexMinPQ::new(4);
    assert!(matches!(pq.del_min(), Err(Error::EmptyQueue)));
}

#[test]
fn test_index_can_be_reinserted_after_removal() {
    let mut pq = IndexMinPQ::new(2);
    pq.insert(0, 1).unwrap();
    assert_eq!(pq.del_min().unwrap(), 0);

    pq.insert(0, 7).unwrap();
    assert!(pq.contains(0).unwrap());
    assert_eq!(pq.key_of(0).unwrap(), 7);
    assert_eq!(pq.del_min().unwrap(), 0);
}

#[test]
fn test_size_counts_inserts_minus_removals() {
    let mut pq = IndexMinPQ::new(16);
    assert_eq!(pq.capacity(), 16);
    for i in 0..10 {
        pq.insert(i, 100 - i as i64).unwrap();
    }
    assert_eq!(pq.len(), 10);
    for expected in (0..10).rev() {
        pq.del_min().unwrap();
        assert_eq!(pq.len(), expected);
    }
}

// Cross-check a long interleaved operation sequence against a linear-scan
// model: del_min must always return an index whose key is minimal.
#[test]
fn test_randomized_operations_match_linear_scan_model() {
    let mut rng = StdRng::seed_from_u64(42);
    let capacity = 64;
    let mut pq = IndexMinPQ::new(capacity);
    let mut model: Vec<Option<i64>> = vec![None; capacity];

    for _ in 0..2000 {
        match rng.gen_range(0..3) {
            0 => {
                let i = rng.gen_range(0..capacity);
                let key = rng.gen_range(0..1000);
                if model[i].is_some() {
                    assert!(pq.insert(i, key).is_err());
                } else {
                    pq.insert(i, key).unwrap();
                    model[i] = Some(key);
                }
            }
            1 => {
                let i = rng.gen_range(0..capacity);
                let key = rng.gen_range(0..1000);
                match model[i] {
                    Some(current) if key < current => {
                        pq.decrease_key(i, key).unwrap();
                        model[i] = Some(key);
                    }
                    Some(_) => assert!(pq.decrease_key(i, key).is_err()),
                    None => assert!(pq.decrease_key(i, key).is_err()),
                }
            }
            _ => {
                let expected_min = model.iter().filter_map(|k| *k).min();
                match expected_min {
                    None => assert!(pq.del_min().is_err()),
                    Some(min_key) => {
                        let i = pq.del_min().unwrap();
                        assert_eq!(model[i], Some(min_key));
                        model[i] = None;
                    }
                }
            }
        }

        let present = model.iter().filter(|k| k.is_some()).count();
        assert_eq!(pq.len(), present);
    }
}
