use std::fmt::Debug;

use crate::{Error, Result};

/// An indexed minimum priority queue with a fixed capacity
///
/// Elements are identified by an integer index in `[0, capacity)` rather
/// than by value, with at most one key per index. On top of the usual
/// insert / delete-min operations the queue supports lowering the key of a
/// present index in O(log n), which is what Dijkstra's algorithm needs to
/// re-prioritize a vertex when a shorter path to it is found.
///
/// Internally this is an array-backed binary heap of indices (root at slot
/// 0) ordered by their associated keys, plus an inverse map from index to
/// its current heap slot. Every exchange in the heap updates the inverse
/// map, keeping membership tests O(1) and decrease-key O(log n).
///
/// An index removed by [`del_min`](IndexMinPQ::del_min) may be inserted
/// again later.
#[derive(Debug, Clone)]
pub struct IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug + Ord,
{
    /// heap[slot] = index occupying that heap slot
    heap: Vec<usize>,

    /// pos[i] = heap slot of index i, None while i is absent
    pos: Vec<Option<usize>>,

    /// keys[i] = current key of index i, None while i is absent
    keys: Vec<Option<K>>,
}

impl<K> IndexMinPQ<K>
where
    K: PartialOrd + Copy + Debug + Ord,
{
    /// Creates an empty queue for indices in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        IndexMinPQ {
            heap: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
            keys: vec![None; capacity],
        }
    }

    /// Returns the number of indices currently in the queue
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the queue holds no indices
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the capacity the queue was created with
    pub fn capacity(&self) -> usize {
        self.pos.len()
    }

    fn validate_index(&self, i: usize) -> Result<()> {
        if i >= self.pos.len() {
            return Err(Error::InvalidIndex(i));
        }
        Ok(())
    }

    /// Returns true if index `i` is currently in the queue
    pub fn contains(&self, i: usize) -> Result<bool> {
        self.validate_index(i)?;
        Ok(self.pos[i].is_some())
    }

    /// Returns the current key of index `i`
    pub fn key_of(&self, i: usize) -> Result<K> {
        self.validate_index(i)?;
        self.keys[i].ok_or(Error::MissingIndex(i))
    }

    /// Returns the smallest key in the queue without removing it
    pub fn min_key(&self) -> Result<K> {
        match self.heap.first() {
            Some(&i) => self.key_of(i),
            None => Err(Error::EmptyQueue),
        }
    }

    /// Adds index `i` to the queue with the given key
    pub fn insert(&mut self, i: usize, key: K) -> Result<()> {
        self.validate_index(i)?;
        if self.pos[i].is_some() {
            return Err(Error::DuplicateIndex(i));
        }
        self.keys[i] = Some(key);
        self.pos[i] = Some(self.heap.len());
        self.heap.push(i);
        self.swim(self.heap.len() - 1);
        Ok(())
    }

    /// Lowers the key of index `i` to `key`
    ///
    /// The new key must be strictly smaller than the current one; the queue
    /// is left untouched otherwise.
    pub fn decrease_key(&mut self, i: usize, key: K) -> Result<()> {
        self.validate_index(i)?;
        let slot = self.pos[i].ok_or(Error::MissingIndex(i))?;
        let current = self.keys[i].ok_or(Error::MissingIndex(i))?;
        if key >= current {
            return Err(Error::KeyNotDecreased(i));
        }
        self.keys[i] = Some(key);
        self.swim(slot);
        Ok(())
    }

    /// Removes and returns the index with the smallest key
    ///
    /// Ties among equal keys break arbitrarily: whichever index sits at the
    /// heap root is returned.
    pub fn del_min(&mut self) -> Result<usize> {
        let min = match self.heap.first() {
            Some(&i) => i,
            None => return Err(Error::EmptyQueue),
        };
        let last = self.heap.len() - 1;
        self.exchange(0, last);
        self.heap.pop();
        self.pos[min] = None;
        self.keys[min] = None;
        if !self.heap.is_empty() {
            self.sink(0);
        }
        Ok(min)
    }

    /// Returns the key at heap slot `slot`
    fn key_at(&self, slot: usize) -> K {
        self.keys[self.heap[slot]].expect("every heap slot holds a present index")
    }

    /// True if the key at heap slot `a` orders strictly below the key at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        self.key_at(a) < self.key_at(b)
    }

    /// Swaps two heap slots, keeping the inverse map in sync
    fn exchange(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[self.heap[a]] = Some(a);
        self.pos[self.heap[b]] = Some(b);
    }

    fn swim(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.exchange(slot, parent);
            slot = parent;
        }
    }

    fn sink(&mut self, mut slot: usize) {
        loop {
            let left = 2 * slot + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < self.heap.len() && self.less(right, left) {
                child = right;
            }
            if !self.less(child, slot) {
                break;
            }
            self.exchange(slot, child);
            slot = child;
        }
    }
}
