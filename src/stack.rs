use crate::error::Error;

/// A LIFO stack backed by a growable array.
pub struct ArrayStack<T> {
    items: Vec<T>,
}

impl<T> ArrayStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns true if the stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Pushes an element onto the top of the stack.
    /// The backing array doubles in size when full.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top of the stack.
    pub fn pop(&mut self) -> Result<T, Error> {
        self.items.pop().ok_or(Error::EmptyCollection)
    }

    /// Returns the top of the stack without removing it.
    pub fn peek(&self) -> Result<&T, Error> {
        self.items.last().ok_or(Error::EmptyCollection)
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}
