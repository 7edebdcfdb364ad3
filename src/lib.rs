//! Small `no_std` collections: an always-sorted singly linked list of
//! integers, stack-based scanning utilities and a pair of complexity
//! answer functions.

#![no_std]

extern crate alloc;

pub mod analysis;
pub mod linked_list;
pub mod stack;
