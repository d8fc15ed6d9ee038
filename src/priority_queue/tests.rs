use super::*;
use crate::order::{OrderBy, Reversed};
use crate::test_helpers::test_rng;
use alloc::vec;
use rand::Rng;

const SCENARIO: [i32; 8] = [15, 8, 22, 3, 11, 27, 6, 19];

fn drain<T, O: TotalOrder<T>>(queue: &mut PriorityQueue<T, O>) -> Vec<T> {
    let mut out = Vec::with_capacity(queue.len());
    while let Ok(value) = queue.tip_n_remove() {
        assert!(queue.is_heap());
        out.push(value);
    }
    out
}

#[test]
fn test_insert_one_at_a_time() {
    let mut queue = PriorityQueue::new();
    for (i, &value) in SCENARIO.iter().enumerate() {
        queue.insert(value);
        assert!(queue.is_heap());
        assert_eq!(queue.len(), i + 1);
    }
    assert_eq!(queue.tip(), Ok(&27));
}

#[test]
fn test_empty_queue() {
    let mut queue: PriorityQueue<i32> = PriorityQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.tip(), Err(Error::Empty));
    assert_eq!(queue.remove_tip(), Err(Error::Empty));
    assert_eq!(queue.tip_n_remove(), Err(Error::Empty));
    assert_eq!(queue.front(), Err(Error::Empty));
    assert_eq!(queue.back(), Err(Error::Empty));
    assert!(queue.is_empty());
}

#[test]
fn test_change_raises_priority() {
    let mut queue = PriorityQueue::from(SCENARIO);
    let p = queue.iter().position(|&x| x == 8).unwrap();

    queue.change(p, 100).unwrap();
    assert_eq!(queue.tip(), Ok(&100));
    assert!(queue.is_heap());
    assert!(!queue.contains(&8));
}

#[test]
fn test_change_lowers_priority() {
    let mut queue = PriorityQueue::from(SCENARIO);
    assert_eq!(queue.get(0), Ok(&27));

    queue.change(0, -1).unwrap();
    assert!(queue.is_heap());
    assert_eq!(queue.tip(), Ok(&22));
    assert_eq!(drain(&mut queue), [22, 19, 15, 11, 8, 6, 3, -1]);
}

#[test]
fn test_change_to_same_value() {
    let mut queue = PriorityQueue::from(SCENARIO);
    let before = queue.clone();
    for i in 0..queue.len() {
        let value = *queue.get(i).unwrap();
        queue.change(i, value).unwrap();
        assert_eq!(queue, before);
    }
}

#[test]
fn test_change_out_of_range() {
    let mut queue = PriorityQueue::from(SCENARIO);
    let before = queue.clone();
    assert_eq!(queue.change(8, 0), Err(Error::IndexOutOfRange { index: 8, len: 8 }));
    assert_eq!(queue.change(usize::MAX, 0), Err(Error::IndexOutOfRange { index: usize::MAX, len: 8 }));
    assert_eq!(queue, before);

    let mut empty: PriorityQueue<i32> = PriorityQueue::new();
    assert_eq!(empty.change(0, 1), Err(Error::IndexOutOfRange { index: 0, len: 0 }));
}

#[test]
fn test_round_trip() {
    let mut queue = PriorityQueue::new();
    queue.insert("only");
    assert_eq!(queue.tip_n_remove(), Ok("only"));
    assert!(queue.is_empty());
}

#[test]
fn test_remove_tip() {
    let mut queue = PriorityQueue::from(SCENARIO);
    queue.remove_tip().unwrap();
    queue.remove_tip().unwrap();
    assert_eq!(queue.len(), 6);
    assert_eq!(queue.tip(), Ok(&19));
    assert!(queue.is_heap());
}

#[test]
fn test_drain_is_non_increasing() {
    let mut queue = PriorityQueue::from(SCENARIO);
    assert_eq!(drain(&mut queue), [27, 22, 19, 15, 11, 8, 6, 3]);
    assert_eq!(queue.tip(), Err(Error::Empty));
}

#[test]
fn test_duplicates() {
    let mut queue = PriorityQueue::from([4, 4, 1, 4, 1]);
    assert_eq!(drain(&mut queue), [4, 4, 4, 1, 1]);
}

#[test]
fn test_random_operations_keep_heap_order() {
    let mut rng = test_rng();
    let mut queue = PriorityQueue::new();
    let mut model: Vec<u16> = Vec::new();

    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 | 1 => {
                let value = rng.gen_range(0..500);
                queue.insert(value);
                model.push(value);
            }
            2 => {
                let got = queue.tip_n_remove();
                match model.iter().enumerate().max_by_key(|&(_, v)| *v) {
                    Some((i, &max)) => {
                        assert_eq!(got, Ok(max));
                        model.swap_remove(i);
                    }
                    None => assert_eq!(got, Err(Error::Empty)),
                }
            }
            _ => {
                if queue.is_empty() {
                    continue;
                }
                let index = rng.gen_range(0..queue.len());
                let old = *queue.get(index).unwrap();
                let value = rng.gen_range(0..500);
                queue.change(index, value).unwrap();
                let slot = model.iter().position(|&v| v == old).unwrap();
                model[slot] = value;
            }
        }
        assert!(queue.is_heap());
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.tip().ok(), model.iter().max());
    }
}

#[test]
fn test_min_queue() {
    let mut queue = PriorityQueue::with_order(Reversed(OrdTotalOrder));
    queue.extend(SCENARIO);
    assert_eq!(queue.tip(), Ok(&3));
    assert_eq!(drain(&mut queue), [3, 6, 8, 11, 15, 19, 22, 27]);
}

#[test]
fn test_order_by_key() {
    let by_len = OrderBy(|a: &&str, b: &&str| a.len().cmp(&b.len()));
    let mut queue = PriorityQueue::from_slice_with_order(&["ab", "a", "abcd", "abc"], by_len);
    assert_eq!(queue.tip(), Ok(&"abcd"));
    assert_eq!(queue.tip_n_remove(), Ok("abcd"));
    assert_eq!(queue.tip_n_remove(), Ok("abc"));
}

#[test]
fn test_from_sorted_heap_reheapifies() {
    let mut heap = BinaryHeap::from(SCENARIO);
    heap.sort();
    assert!(!heap.is_heap());

    let mut queue = PriorityQueue::from(heap);
    assert!(queue.is_heap());
    assert_eq!(queue.tip(), Ok(&27));
    assert_eq!(drain(&mut queue).len(), 8);
}

#[test]
fn test_into_heap_and_back() {
    let queue = PriorityQueue::from(SCENARIO);
    let layout = queue.as_slice().to_vec();
    assert_eq!(queue.as_heap().as_slice(), layout);

    let heap = queue.into_heap();
    assert!(heap.is_heap());
    let queue = PriorityQueue::from(heap);
    assert_eq!(queue.into_vec(), layout);
}

#[test]
fn test_positional_access() {
    let queue = PriorityQueue::from(vec![1, 2, 3, 4, 5]);
    assert_eq!(queue.as_slice(), [5, 4, 3, 1, 2]);
    assert_eq!(queue.front(), Ok(&5));
    assert_eq!(queue.back(), Ok(&2));
    assert_eq!(queue.get(3), Ok(&1));
    assert_eq!(queue.get(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
    assert_eq!((&queue).into_iter().count(), 5);
}

#[test]
fn test_clear() {
    let mut queue = PriorityQueue::from(SCENARIO);
    queue.clear();
    assert!(queue.is_empty());
    assert_eq!(queue.remove_tip(), Err(Error::Empty));

    queue.insert(1);
    assert_eq!(queue.tip(), Ok(&1));
}

#[test]
fn test_exact_growth() {
    let mut queue = PriorityQueue::with_growth(Growth::Exact);
    for value in SCENARIO {
        queue.insert(value);
        assert_eq!(queue.as_heap().capacity(), queue.len());
    }
    while queue.remove_tip().is_ok() {
        assert_eq!(queue.as_heap().capacity(), queue.len());
    }
}

#[test]
fn test_queue_trait() {
    fn exercise<Q: Queue<Item = i32> + Linear<Item = i32> + Clearable>(queue: &mut Q) {
        queue.insert(3);
        queue.insert(9);
        queue.insert(5);
        assert_eq!(queue.tip(), Ok(&9));
        queue.change(0, 1).unwrap();
        assert_eq!(queue.tip_n_remove(), Ok(5));
        assert_eq!(queue.len(), 2);
        queue.clear();
        assert_eq!(queue.remove_tip(), Err(Error::Empty));
        assert!(queue.is_empty());
    }

    exercise(&mut PriorityQueue::new());
}

#[test]
fn test_from_iter_and_default() {
    let queue: PriorityQueue<u8> = (1..=6).collect();
    assert_eq!(queue.tip(), Ok(&6));
    assert!(queue.is_heap());

    let queue: PriorityQueue<u8, Reversed> = PriorityQueue::default();
    assert!(queue.is_empty());
}

#[test]
fn test_debug() {
    let queue = PriorityQueue::from([1, 3, 2]);
    assert_eq!(alloc::format!("{queue:?}"), "[3, 1, 2]");
}
