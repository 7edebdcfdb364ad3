//! Singly linked lists.
//!
//! The [`sorted`] list keeps its integers in non-decreasing order at all
//! times. Every node is owned by its predecessor (the list owns the head),
//! so the chain can never contain a cycle or a shared node.
//!
//! # Examples
//!
//! ```
//! use sorted_collections::linked_list::sorted::SortedLinkedList;
//!
//! let mut list = SortedLinkedList::new();
//! for value in [5, 3, 8, 3] {
//!     list.insert(value);
//! }
//! assert_eq!(list.render(), "[3 3 5 8]");
//!
//! list.remove_element(3);
//! assert_eq!(list.render(), "[5 8]");
//!
//! list.remove_elements_lt(6);
//! assert_eq!(list.render(), "[8]");
//! ```
pub mod sorted;
