//! Fixed-capacity FIFO buffer.
//!
//! Slots fill in order until `capacity` is reached; after that each push
//! overwrites the oldest slot and advances `head`. Logical order is always
//! `slots[head..]` followed by `slots[..head]`.

#[cfg(test)]
#[path = "ring_test.rs"]
mod ring_test;

use std::num::NonZeroUsize;

use serde::{Serialize, Serializer};

#[derive(Clone, Debug)]
pub struct RingBuffer<T> {
    slots: Vec<T>,
    /// Index of the oldest element once the buffer is full; 0 before that.
    head: usize,
    capacity: NonZeroUsize,
}

impl<T> RingBuffer<T> {
    #[must_use]
    pub fn new(capacity: NonZeroUsize) -> Self {
        Self { slots: Vec::new(), head: 0, capacity }
    }

    /// Append `item`, returning the evicted oldest element when full.
    pub fn push(&mut self, item: T) -> Option<T> {
        if self.slots.len() < self.capacity.get() {
            self.slots.push(item);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], item);
        self.head = (self.head + 1) % self.slots.len();
        Some(evicted)
    }

    /// Newest element.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        if self.slots.is_empty() {
            return None;
        }
        let idx = (self.head + self.slots.len() - 1) % self.slots.len();
        self.slots.get(idx)
    }

    /// Oldest element.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.slots.get(self.head)
    }

    /// Elements from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> NonZeroUsize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Copy out the contents, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Extend<T> for RingBuffer<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
