use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::Error;

/// A doubly-linked list with forward and backward traversal.
/// Index lookups walk from whichever end is nearer.
pub struct DoublyLinkedList<T> {
    front: Link<T>,
    end: Link<T>,
    len: usize,
}

type NodePtr<T> = NonNull<ListNode<T>>;
type Link<T> = Option<NodePtr<T>>;

struct ListNode<T> {
    data: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            front: None,
            end: None,
            len: 0,
        }
    }

    /// Returns true if the list contains no elements.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Adds an element at the front of the list.
    pub fn push_front(&mut self, item: T) {
        let mut node = ListNode::create(item);
        unsafe {
            node.as_mut().next = self.front;
            match self.front {
                None => self.end = Some(node),
                Some(mut front) => front.as_mut().prev = Some(node),
            }
        }
        self.front = Some(node);
        self.len += 1;
    }

    /// Adds an element at the end of the list.
    pub fn push_back(&mut self, item: T) {
        let mut node = ListNode::create(item);
        unsafe {
            node.as_mut().prev = self.end;
            match self.end {
                None => self.front = Some(node),
                Some(mut end) => end.as_mut().next = Some(node),
            }
        }
        self.end = Some(node);
        self.len += 1;
    }

    /// Inserts an element directly after the node at the given index.
    /// Fails with `NotFound` when the index is out of bounds.
    pub fn insert_after(&mut self, index: usize, item: T) -> Result<(), Error> {
        if index >= self.len {
            return Err(Error::NotFound);
        }
        if index == self.len - 1 {
            self.push_back(item);
            return Ok(());
        }

        let mut current = self.node_at(index);
        let mut node = ListNode::create(item);
        unsafe {
            // unwrap: current is not the last node
            let mut next = current.as_ref().next.unwrap();
            node.as_mut().prev = Some(current);
            node.as_mut().next = Some(next);
            current.as_mut().next = Some(node);
            next.as_mut().prev = Some(node);
        }
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.front?;
        unsafe {
            self.front = front.as_ref().next;
            match self.front {
                None => self.end = None,
                Some(mut next) => next.as_mut().prev = None,
            }
            self.len -= 1;
            Some(ListNode::destroy(front))
        }
    }

    /// Removes and returns the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let end = self.end?;
        unsafe {
            self.end = end.as_ref().prev;
            match self.end {
                None => self.front = None,
                Some(mut prev) => prev.as_mut().next = None,
            }
            self.len -= 1;
            Some(ListNode::destroy(end))
        }
    }

    /// Returns a reference to the element at the given index.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&(*self.node_at(index).as_ptr()).data) }
    }

    /// Returns a mutable reference to the element at the given index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        unsafe { Some(&mut (*self.node_at(index).as_ptr()).data) }
    }

    /// Gets a double-ended iterator over the elements of the list,
    /// front to end.
    pub fn iter(&self) -> ListIter<'_, T> {
        ListIter {
            front: self.front,
            end: self.end,
            len: self.len,
            marker: PhantomData,
        }
    }

    /// Walks to the node at the given index from the nearer end.
    /// Callers must have checked the index against the length.
    fn node_at(&self, index: usize) -> NodePtr<T> {
        debug_assert!(index < self.len);
        unsafe {
            if index > self.len / 2 {
                // unwrap: a node exists at every index below the length
                let mut current = self.end.unwrap();
                for _ in index..self.len - 1 {
                    current = current.as_ref().prev.unwrap();
                }
                current
            } else {
                let mut current = self.front.unwrap();
                for _ in 0..index {
                    current = current.as_ref().next.unwrap();
                }
                current
            }
        }
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Removes the first occurrence of the given element.
    /// Fails with `NotFound` when no element compares equal.
    pub fn remove(&mut self, item: &T) -> Result<(), Error> {
        unsafe {
            let mut current = self.front;
            while let Some(node) = current {
                if node.as_ref().data == *item {
                    self.unlink(node);
                    ListNode::destroy(node);
                    return Ok(());
                }
                current = node.as_ref().next;
            }
        }
        Err(Error::NotFound)
    }
}

impl<T> DoublyLinkedList<T> {
    /// Severs the node's connections in both directions.
    /// Does not free the node.
    unsafe fn unlink(&mut self, node: NodePtr<T>) {
        match node.as_ref().prev {
            None => self.front = node.as_ref().next,
            Some(mut prev) => prev.as_mut().next = node.as_ref().next,
        }
        match node.as_ref().next {
            None => self.end = node.as_ref().prev,
            Some(mut next) => next.as_mut().prev = node.as_ref().prev,
        }
        self.len -= 1;
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while self.pop_front().is_some() {}
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = ListIter<'a, T>;

    fn into_iter(self) -> ListIter<'a, T> {
        self.iter()
    }
}

/// Double-ended iterator over a list.
pub struct ListIter<'a, T> {
    front: Link<T>,
    end: Link<T>,
    len: usize,
    marker: PhantomData<&'a ListNode<T>>,
}

impl<'a, T> Iterator for ListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.front.map(|node| unsafe {
            self.len -= 1;
            self.front = node.as_ref().next;
            &(*node.as_ptr()).data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for ListIter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.end.map(|node| unsafe {
            self.len -= 1;
            self.end = node.as_ref().prev;
            &(*node.as_ptr()).data
        })
    }
}

impl<T> ExactSizeIterator for ListIter<'_, T> {}

impl<T> ListNode<T> {
    fn create(data: T) -> NodePtr<T> {
        let boxed = Box::new(ListNode {
            data,
            prev: None,
            next: None,
        });
        unsafe { NodePtr::new_unchecked(Box::into_raw(boxed)) }
    }

    unsafe fn destroy(node_ptr: NodePtr<T>) -> T {
        Box::from_raw(node_ptr.as_ptr()).data
    }
}
