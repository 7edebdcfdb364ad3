use core::iter::FusedIterator;

use super::node::Node;

/// An iterator over the values of a sorted linked list, smallest first.
#[derive(Clone)]
pub struct Iter<'a> {
    current: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(head: Option<&'a Node>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next();
            self.remaining -= 1;
            node.value()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
