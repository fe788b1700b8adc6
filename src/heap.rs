use crate::error::Error;

/// A priority queue backed by an array-based binary min-heap.
/// The smallest element by `Ord` has the highest priority.
pub struct MinHeap<T: Ord> {
    data: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Returns true if the heap contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the highest priority element without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        self.data.first().ok_or(Error::EmptyCollection)
    }

    /// Adds an element and sifts it up to its priority order position.
    pub fn add(&mut self, item: T) {
        self.data.push(item);

        let mut current = self.data.len() - 1;
        while current > 0 {
            let parent = (current - 1) / 2;
            if self.data[current] >= self.data[parent] {
                break;
            }
            self.data.swap(current, parent);
            current = parent;
        }
    }

    /// Removes and returns the highest priority element.
    /// The last element moves to the root and sifts down.
    pub fn remove(&mut self) -> Result<T, Error> {
        if self.data.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let removed = self.data.swap_remove(0);

        let mut current = 0;
        loop {
            let left = current * 2 + 1;
            let right = current * 2 + 2;
            if left >= self.data.len() {
                break;
            }

            let mut priority = left;
            if right < self.data.len() && self.data[right] < self.data[left] {
                priority = right;
            }
            if self.data[current] <= self.data[priority] {
                break;
            }
            self.data.swap(current, priority);
            current = priority;
        }
        Ok(removed)
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
