use super::*;

fn ring(cap: usize) -> RingBuffer<u32> {
    RingBuffer::new(NonZeroUsize::new(cap).unwrap())
}

#[test]
fn starts_empty() {
    let buf = ring(3);
    assert!(buf.is_empty());
    assert_eq!(buf.len(), 0);
    assert!(buf.first().is_none());
    assert!(buf.last().is_none());
    assert_eq!(buf.capacity().get(), 3);
}

#[test]
fn push_below_capacity_keeps_everything() {
    let mut buf = ring(3);
    assert_eq!(buf.push(1), None);
    assert_eq!(buf.push(2), None);
    assert_eq!(buf.to_vec(), vec![1, 2]);
    assert_eq!(buf.first(), Some(&1));
    assert_eq!(buf.last(), Some(&2));
}

#[test]
fn push_at_capacity_evicts_oldest() {
    let mut buf = ring(3);
    buf.extend([1, 2, 3]);
    assert_eq!(buf.push(4), Some(1));
    assert_eq!(buf.push(5), Some(2));
    assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    assert_eq!(buf.first(), Some(&3));
    assert_eq!(buf.last(), Some(&5));
    assert_eq!(buf.len(), 3);
}

#[test]
fn wraps_many_times() {
    let mut buf = ring(4);
    buf.extend(0..103);
    assert_eq!(buf.to_vec(), vec![99, 100, 101, 102]);
    assert_eq!(buf.last(), Some(&102));
}

#[test]
fn capacity_one_holds_latest() {
    let mut buf = ring(1);
    buf.extend([7, 8, 9]);
    assert_eq!(buf.to_vec(), vec![9]);
    assert_eq!(buf.first(), buf.last());
}

#[test]
fn iter_is_double_ended() {
    let mut buf = ring(3);
    buf.extend([1, 2, 3, 4]);
    let newest_first: Vec<u32> = buf.iter().rev().copied().collect();
    assert_eq!(newest_first, vec![4, 3, 2]);
}

#[test]
fn clear_resets_head() {
    let mut buf = ring(2);
    buf.extend([1, 2, 3]);
    buf.clear();
    assert!(buf.is_empty());
    buf.extend([4, 5]);
    assert_eq!(buf.to_vec(), vec![4, 5]);
}

#[test]
fn serializes_oldest_first() {
    let mut buf = ring(2);
    buf.extend([1, 2, 3]);
    assert_eq!(serde_json::to_string(&buf).unwrap(), "[2,3]");
}
