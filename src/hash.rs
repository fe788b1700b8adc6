use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Probe sequence for open addressing.
/// After a collision at `index` the table retries at `probe(index)`,
/// reduced modulo the table size.
pub trait Probe {
    fn probe(&self, index: usize) -> usize;
}

impl<F: Fn(usize) -> usize> Probe for F {
    fn probe(&self, index: usize) -> usize {
        self(index)
    }
}

/// Linear probing, one slot at a time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearProbe;

impl Probe for LinearProbe {
    fn probe(&self, index: usize) -> usize {
        index + 1
    }
}

/// A hash table resolving collisions by separate chaining.
/// Every bucket holds a list of the items hashing to it.
pub struct ChainingTable<T> {
    buckets: Vec<Vec<T>>,
    len: usize,
}

impl<T: Hash + PartialEq> ChainingTable<T> {
    /// Creates a table with the given fixed number of buckets.
    pub fn new(num_buckets: usize) -> Self {
        assert!(num_buckets > 0, "table needs at least one bucket");
        Self {
            buckets: (0..num_buckets).map(|_| Vec::new()).collect(),
            len: 0,
        }
    }

    /// Returns true if the table contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an item to its bucket's chain.
    pub fn add(&mut self, item: T) {
        let bucket = self.bucket_index(&item);
        self.buckets[bucket].push(item);
        self.len += 1;
    }

    /// Returns true if an equal item exists in the bucket for this item.
    pub fn contains(&self, item: &T) -> bool {
        self.buckets[self.bucket_index(item)]
            .iter()
            .any(|existing| existing == item)
    }

    /// Removes one equal item from its bucket, if present.
    pub fn remove(&mut self, item: &T) -> bool {
        let bucket = self.bucket_index(item);
        if let Some(pos) = self.buckets[bucket]
            .iter()
            .position(|existing| existing == item)
        {
            self.buckets[bucket].remove(pos);
            self.len -= 1;
            return true;
        }
        false
    }

    fn bucket_index(&self, item: &T) -> usize {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        (hasher.finish() % self.buckets.len() as u64) as usize
    }
}

/// A hash table resolving collisions by open addressing with a pluggable
/// probe sequence. The slot array never grows; `add` reports failure once
/// every slot has been probed.
pub struct ProbingTable<T, P> {
    slots: Vec<Option<T>>,
    probe: P,
    len: usize,
}

impl<T: Hash + PartialEq, P: Probe> ProbingTable<T, P> {
    /// Creates a table with the given fixed number of slots.
    pub fn new(num_slots: usize, probe: P) -> Self {
        assert!(num_slots > 0, "table needs at least one slot");
        Self {
            slots: (0..num_slots).map(|_| None).collect(),
            probe,
            len: 0,
        }
    }

    /// Returns true if the table contains no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of items in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Probes for an open slot and stores the item there.
    /// Returns false when every slot has been probed without success.
    pub fn add(&mut self, item: T) -> bool {
        let mut index = self.slot_index(&item);
        for _ in 0..self.slots.len() {
            if self.slots[index].is_none() {
                self.slots[index] = Some(item);
                self.len += 1;
                return true;
            }
            index = self.probe.probe(index) % self.slots.len();
        }
        false
    }

    /// Returns true if an equal item is reachable along the probe sequence.
    pub fn contains(&self, item: &T) -> bool {
        let mut index = self.slot_index(item);
        for _ in 0..self.slots.len() {
            if self.slots[index].as_ref() == Some(item) {
                return true;
            }
            index = self.probe.probe(index) % self.slots.len();
        }
        false
    }

    /// Removes an equal item reachable along the probe sequence, if present.
    pub fn remove(&mut self, item: &T) -> bool {
        let mut index = self.slot_index(item);
        for _ in 0..self.slots.len() {
            if self.slots[index].as_ref() == Some(item) {
                self.slots[index] = None;
                self.len -= 1;
                return true;
            }
            index = self.probe.probe(index) % self.slots.len();
        }
        false
    }

    fn slot_index(&self, item: &T) -> usize {
        let mut hasher = DefaultHasher::new();
        item.hash(&mut hasher);
        (hasher.finish() % self.slots.len() as u64) as usize
    }
}
