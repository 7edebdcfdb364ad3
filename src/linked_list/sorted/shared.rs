use alloc::string::String;

use spin::{Mutex, MutexGuard};

use super::list::SortedLinkedList;

/// A [`SortedLinkedList`] that can be shared between threads.
///
/// Every operation takes the spin lock for its whole duration, so each call
/// observes and leaves a sorted list. Use [`SharedSortedList::lock`] to run
/// several operations as one step.
#[derive(Default)]
pub struct SharedSortedList {
    inner: Mutex<SortedLinkedList>,
}

impl SharedSortedList {
    /// Creates a new, empty shared list.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(SortedLinkedList::new()),
        }
    }

    /// Locks the list for exclusive access.
    pub fn lock(&self) -> MutexGuard<'_, SortedLinkedList> {
        self.inner.lock()
    }

    /// Inserts `value` in sorted position.
    pub fn insert(&self, value: i32) {
        self.lock().insert(value);
    }

    /// Removes every value strictly smaller than `threshold`.
    pub fn remove_elements_lt(&self, threshold: i32) {
        self.lock().remove_elements_lt(threshold);
    }

    /// Removes every occurrence of `value`.
    pub fn remove_element(&self, value: i32) {
        self.lock().remove_element(value);
    }

    /// Renders the values as `[v1 v2 ... vn]`, or `[]` when empty.
    pub fn render(&self) -> String {
        self.lock().render()
    }

    /// Number of values in the list.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Consumes the wrapper and returns the list.
    pub fn into_inner(self) -> SortedLinkedList {
        self.inner.into_inner()
    }
}

impl From<SortedLinkedList> for SharedSortedList {
    fn from(list: SortedLinkedList) -> Self {
        Self {
            inner: Mutex::new(list),
        }
    }
}
