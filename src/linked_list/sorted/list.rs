use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::fmt;

use super::iter::Iter;
use super::node::{Link, Node};

/// A singly linked list of integers kept in non-decreasing order.
///
/// The list owns its first node and every node owns its successor. An
/// empty list has no head; there is no sentinel node.
pub struct SortedLinkedList {
    head: Link,
    len: usize,
}

impl SortedLinkedList {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Inserts `value` in sorted position.
    ///
    /// The chain is scanned from the front while the nodes hold values
    /// strictly smaller than `value`; the new node is linked in front of
    /// the first node that stops the scan. A head equal to `value` is
    /// therefore displaced, and so is every interior run of equal values.
    pub fn insert(&mut self, value: i32) {
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut node) = rest.take_if(|node| node.value() < value) {
            rest = node.take_next();
            tail = tail.insert(node).next_mut();
        }
        *tail = Some(Box::new(Node::new(value, rest)));
        self.len += 1;
    }

    /// Removes every value strictly smaller than `threshold`.
    ///
    /// The whole chain is scanned rather than stopping at the first value
    /// that survives.
    pub fn remove_elements_lt(&mut self, threshold: i32) {
        self.retain(|value| value >= threshold);
    }

    /// Removes every occurrence of `value`.
    pub fn remove_element(&mut self, value: i32) {
        self.retain(|current| current != value);
    }

    /// Renders the values as `[v1 v2 ... vn]`, or `[]` when empty.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The smallest value, if any.
    pub fn first(&self) -> Option<i32> {
        self.head.as_deref().map(Node::value)
    }

    /// Returns true if `value` is in the list.
    pub fn contains(&self, value: i32) -> bool {
        self.iter()
            .take_while(|&current| current <= value)
            .any(|current| current == value)
    }

    /// Iterates over the values from smallest to largest.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head.as_deref(), self.len)
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.take_next();
        }
        self.len = 0;
    }

    /// Keeps only the values for which `keep` returns true, relinking the
    /// survivors in their original order.
    fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(i32) -> bool,
    {
        let mut rest = self.head.take();
        let mut tail = &mut self.head;
        while let Some(mut node) = rest {
            rest = node.take_next();
            if keep(node.value()) {
                tail = tail.insert(node).next_mut();
            } else {
                self.len -= 1;
            }
        }
    }
}

impl Default for SortedLinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SortedLinkedList {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Display for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for SortedLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<i32> for SortedLinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl FromIterator<i32> for SortedLinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a SortedLinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
