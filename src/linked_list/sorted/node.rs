use alloc::boxed::Box;

/// The owning edge to the rest of a chain. `None` terminates it.
pub(crate) type Link = Option<Box<Node>>;

/// A node in a sorted linked list.
///
/// A node owns its successor, so unlinking a node hands the rest of the
/// chain back to whoever owned the node.
pub(crate) struct Node {
    value: i32,
    next: Link,
}

impl Node {
    /// Creates a node in front of `next`.
    pub(crate) fn new(value: i32, next: Link) -> Self {
        Self { value, next }
    }

    /// The value stored in this node.
    pub(crate) fn value(&self) -> i32 {
        self.value
    }

    /// The next node in the chain, if any.
    pub(crate) fn next(&self) -> Option<&Node> {
        self.next.as_deref()
    }

    pub(crate) fn next_mut(&mut self) -> &mut Link {
        &mut self.next
    }

    /// Detaches and returns the rest of the chain.
    pub(crate) fn take_next(&mut self) -> Link {
        self.next.take()
    }
}
