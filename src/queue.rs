use std::ptr::NonNull;

use crate::error::Error;

/// A FIFO queue over a circular singly-linked ring.
/// A single pointer to the last node reaches both ends: the node after the
/// last one is the front, so add and remove are both O(1).
pub struct CircularQueue<T> {
    end: Option<NodePtr<T>>,
    len: usize,
}

type NodePtr<T> = NonNull<QueueNode<T>>;

struct QueueNode<T> {
    data: T,
    next: NodePtr<T>,
}

impl<T> CircularQueue<T> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self { end: None, len: 0 }
    }

    /// Returns true if the queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.end.is_none()
    }

    /// Returns the number of elements in the queue.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element to the back of the queue.
    pub fn add(&mut self, item: T) {
        let mut node = QueueNode::create(item);
        unsafe {
            if let Some(mut end) = self.end {
                // Splice in behind the old end, keeping the ring closed
                node.as_mut().next = end.as_ref().next;
                end.as_mut().next = node;
            }
        }
        self.end = Some(node);
        self.len += 1;
    }

    /// Returns the front of the queue without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        let end = self.end.ok_or(Error::EmptyCollection)?;
        unsafe { Ok(&(*end.as_ref().next.as_ptr()).data) }
    }

    /// Removes and returns the front of the queue.
    pub fn remove(&mut self) -> Result<T, Error> {
        let mut end = self.end.ok_or(Error::EmptyCollection)?;
        unsafe {
            let front = end.as_ref().next;
            if front == end {
                // Last node in the ring
                self.end = None;
            } else {
                end.as_mut().next = front.as_ref().next;
            }
            self.len -= 1;
            Ok(QueueNode::destroy(front))
        }
    }
}

impl<T> Drop for CircularQueue<T> {
    fn drop(&mut self) {
        while self.remove().is_ok() {}
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueueNode<T> {
    /// Creates a ring of one node pointing at itself.
    fn create(data: T) -> NodePtr<T> {
        let boxed = Box::new(QueueNode {
            data,
            next: NonNull::dangling(),
        });
        let mut node_ptr = unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) };
        unsafe { node_ptr.as_mut().next = node_ptr };
        node_ptr
    }

    unsafe fn destroy(node_ptr: NodePtr<T>) -> T {
        Box::from_raw(node_ptr.as_ptr()).data
    }
}
