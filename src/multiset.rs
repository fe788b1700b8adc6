use std::cmp::Ordering;

use crate::error::Error;

/// An ordered multiset backed by a height-balanced (AVL) binary search tree.
///
/// Duplicate insertions of an equal key are collapsed into a single node
/// carrying an occurrence count, so `n` inserts of the same key cost one
/// node and `n - 1` counter increments. Insertion, removal and minimum
/// lookup are O(log n) in the number of distinct keys.
pub struct AvlMultiset<T: Ord> {
    root: Link<T>,
    len: usize,
}

type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    key: T,
    count: usize,
    left: Link<T>,
    right: Link<T>,
    height: usize,
    balance: i32,
}

impl<T: Ord> AvlMultiset<T> {
    /// Creates an empty multiset.
    /// No memory is allocated until the first item is inserted.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns true if the multiset contains no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the number of elements in the multiset, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Clears the multiset, deallocating all nodes.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// Returns true if the multiset contains at least one occurrence of the value.
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Returns the number of occurrences of the value.
    pub fn count(&self, value: &T) -> usize {
        self.find(value).map_or(0, |node| node.count)
    }

    /// Returns the smallest element, the leftmost key of the tree.
    pub fn find_min(&self) -> Result<&T, Error> {
        let mut node = self.root.as_deref().ok_or(Error::EmptyCollection)?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Ok(&node.key)
    }

    /// Inserts a value into the multiset.
    /// A value equal to one already present increments its occurrence count
    /// instead of adding a node.
    pub fn insert(&mut self, value: T) {
        self.root = Some(insert_node(self.root.take(), value));
        self.len += 1;
    }

    /// Removes one occurrence of the value from the multiset.
    /// The node itself is excised only when its last occurrence goes.
    pub fn remove(&mut self, value: &T) -> Result<(), Error> {
        remove_node(&mut self.root, value)?;
        self.len -= 1;
        Ok(())
    }

    /// Gets an iterator over the elements of the multiset in ascending order.
    /// Each element is yielded once per occurrence.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter {
            stack: Vec::new(),
            pending: None,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match value.cmp(&node.key) {
                Ordering::Equal => return Some(node),
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn height(&self) -> usize {
        match &self.root {
            None => 0,
            Some(root) => root.height,
        }
    }

    #[cfg(test)]
    pub(crate) fn root_key(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &node.key)
    }

    #[cfg(any(test, feature = "consistency_check"))]
    pub fn check_consistency(&self) {
        let (_, num_elements) = match &self.root {
            None => (0, 0),
            Some(root) => check_node(root),
        };

        // Check cached element count
        assert_eq!(num_elements, self.len);
    }
}

#[cfg(any(test, feature = "consistency_check"))]
fn check_node<T: Ord>(node: &Node<T>) -> (usize, usize) {
    // Check key order relative to children
    if let Some(left) = node.left.as_deref() {
        assert!(left.key < node.key);
    }
    if let Some(right) = node.right.as_deref() {
        assert!(right.key > node.key);
    }

    let (left_height, left_count) = match node.left.as_deref() {
        None => (0, 0),
        Some(left) => check_node(left),
    };
    let (right_height, right_count) = match node.right.as_deref() {
        None => (0, 0),
        Some(right) => check_node(right),
    };

    // Check height and balance bookkeeping
    assert_eq!(node.height, 1 + std::cmp::max(left_height, right_height));
    assert_eq!(node.balance, right_height as i32 - left_height as i32);

    // Check AVL condition (near balance)
    assert!(left_height <= right_height + 1);
    assert!(right_height <= left_height + 1);

    // Check multiplicity
    assert!(node.count >= 1);

    (node.height, left_count + right_count + node.count)
}

impl<T: Ord> Default for AvlMultiset<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord + Clone> Clone for AvlMultiset<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }
}

impl<T: Ord> FromIterator<T> for AvlMultiset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut multiset = Self::new();
        for value in iter {
            multiset.insert(value);
        }
        multiset
    }
}

impl<'a, T: Ord> IntoIterator for &'a AvlMultiset<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// In-order iterator over a multiset.
/// Holds the not-yet-visited left spine of the tree on an explicit stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    pending: Option<(&'a T, usize)>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        // Replay duplicates of the current key before moving on
        if let Some((key, remaining)) = self.pending.take() {
            if remaining > 1 {
                self.pending = Some((key, remaining - 1));
            }
            return Some(key);
        }

        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        if node.count > 1 {
            self.pending = Some((&node.key, node.count - 1));
        }
        Some(&node.key)
    }
}

impl<T: Ord> Node<T> {
    fn new(key: T) -> Box<Self> {
        Box::new(Node {
            key,
            count: 1,
            left: None,
            right: None,
            height: 1,
            balance: 0,
        })
    }

    /// Recomputes height and balance from the children.
    /// Must run after any change to a child link, before the parent's turn.
    fn update_height(&mut self) {
        let left_height = height(&self.left);
        let right_height = height(&self.right);
        self.height = 1 + std::cmp::max(left_height, right_height);
        self.balance = right_height as i32 - left_height as i32;
    }

    fn is_unbalanced(&self) -> bool {
        self.balance < -1 || self.balance > 1
    }
}

fn height<T>(link: &Link<T>) -> usize {
    match link.as_deref() {
        None => 0,
        Some(node) => node.height,
    }
}

fn balance<T>(link: &Link<T>) -> i32 {
    match link.as_deref() {
        None => 0,
        Some(node) => node.balance,
    }
}

/// Inserts a value into the subtree and returns its possibly-new root.
fn insert_node<T: Ord>(link: Link<T>, value: T) -> Box<Node<T>> {
    let mut node = match link {
        None => return Node::new(value),
        Some(node) => node,
    };

    match value.cmp(&node.key) {
        Ordering::Equal => {
            // Duplicate, no structural change
            node.count += 1;
            return node;
        }
        Ordering::Less => node.left = Some(insert_node(node.left.take(), value)),
        Ordering::Greater => node.right = Some(insert_node(node.right.take(), value)),
    }

    node.update_height();
    if node.is_unbalanced() {
        node = rebalance(node);
    }
    node
}

/// Removes one occurrence of the value from the subtree behind the link.
/// The link is the parent's child slot, replaced in place when the subtree
/// root changes.
fn remove_node<T: Ord>(link: &mut Link<T>, value: &T) -> Result<(), Error> {
    let node = link.as_deref_mut().ok_or(Error::NotFound)?;

    match value.cmp(&node.key) {
        Ordering::Equal => {
            if node.count > 1 {
                // Duplicate, no structural change
                node.count -= 1;
            } else if let Some(removed) = link.take() {
                *link = unlink_node(removed);
            }
            return Ok(());
        }
        Ordering::Less => remove_node(&mut node.left, value)?,
        Ordering::Greater => remove_node(&mut node.right, value)?,
    }

    node.update_height();
    if node.is_unbalanced() {
        if let Some(unbalanced) = link.take() {
            *link = Some(rebalance(unbalanced));
        }
    }
    Ok(())
}

/// Excises a node whose last occurrence has been removed.
/// Returns the subtree that takes its place.
fn unlink_node<T: Ord>(mut node: Box<Node<T>>) -> Link<T> {
    match (node.left.take(), node.right.take()) {
        (None, None) => None,
        (Some(child), None) | (None, Some(child)) => Some(child),
        (Some(left), Some(right)) => {
            // Two children: excise the in-order successor from the right
            // subtree and move its key and count wholesale into this node.
            // Moving the count keeps any duplicates of the successor intact.
            let (right, successor) = take_min(right);
            node.key = successor.key;
            node.count = successor.count;
            node.left = Some(left);
            node.right = right;
            node.update_height();
            if node.is_unbalanced() {
                node = rebalance(node);
            }
            Some(node)
        }
    }
}

/// Excises the leftmost node of the subtree.
/// Returns the rebalanced remainder and the excised node.
fn take_min<T: Ord>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            node.update_height();
            if node.is_unbalanced() {
                node = rebalance(node);
            }
            (Some(node), min)
        }
    }
}

/// Restores the AVL condition at a node whose balance has left [-1, 1].
/// Picks one of the four rotation cases from the balance signs of the node
/// and the taller child, and returns the new subtree root.
fn rebalance<T: Ord>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    debug_assert!(node.balance == -2 || node.balance == 2);
    if node.balance < -1 {
        if balance(&node.left) > 0 {
            // Left-Right: pre-rotate the left child into the Left-Left shape
            // unwrap: balance below -1 implies the left subtree exists
            node.left = Some(rotate_left(node.left.take().unwrap()));
        }
        rotate_right(node)
    } else {
        if balance(&node.right) < 0 {
            // Right-Left: pre-rotate the right child into the Right-Right shape
            // unwrap: balance above +1 implies the right subtree exists
            node.right = Some(rotate_right(node.right.take().unwrap()));
        }
        rotate_left(node)
    }
}

/// Single left rotation. Returns the new subtree root (the old right child).
fn rotate_left<T: Ord>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    // unwrap: callers only rotate left around a node with a right child
    let mut pivot = node.right.take().unwrap();
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Single right rotation. Returns the new subtree root (the old left child).
fn rotate_right<T: Ord>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    // unwrap: callers only rotate right around a node with a left child
    let mut pivot = node.left.take().unwrap();
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}
