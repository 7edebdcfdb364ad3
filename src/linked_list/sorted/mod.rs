//! # Sorted Linked List
//!
//! A singly linked list of `i32` that keeps its values in non-decreasing
//! order after every operation.
//!
//! ## Core Components
//!
//! - [`list::SortedLinkedList`]: the list itself, with sorted insertion,
//!   conditional removal and bracketed rendering.
//! - `node::Node`: one value plus the exclusively owned rest of the chain.
//! - [`iter::Iter`]: a front-to-back iterator over the values.
//! - [`shared::SharedSortedList`]: a spin-locked wrapper for sharing one
//!   list between threads.
//!
//! ## Ordering
//!
//! A new value is linked in front of the first node that is not strictly
//! smaller than it. The list itself performs no concurrent synchronization;
//! wrap it in [`shared::SharedSortedList`] when several threads need it.

pub mod iter;
pub mod list;
pub(crate) mod node;
pub mod shared;

pub use list::SortedLinkedList;
pub use shared::SharedSortedList;
