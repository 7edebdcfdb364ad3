//! # Stack utilities
//!
//! Scans built on the persistent [`rpds::Stack`]. Because the stack is
//! persistent, every function here borrows it and leaves it exactly as it
//! was.
//!
//! Index `0` is the bottom of a stack, the first value pushed.
//!
//! # Examples
//!
//! ```
//! use sorted_collections::stack::{from_bottom_up, is_palindrome, last_index_of};
//!
//! assert!(is_palindrome("RaCe cAr"));
//! assert!(!is_palindrome("hello"));
//!
//! let stack = from_bottom_up([3, 4, 9, 4, 4, 7, 4]);
//! assert_eq!(stack.peek(), Some(&4));
//! assert_eq!(last_index_of(&stack, 4), Some(6));
//! assert_eq!(last_index_of(&stack, 5), None);
//! ```

use alloc::vec::Vec;

use rpds::Stack;

#[cfg(test)]
mod tests;

/// Builds a stack by pushing `values` in order, so the first value ends up
/// at the bottom (index `0`) and the last one on top.
///
/// Collecting into an [`rpds::Stack`] does the opposite: its `FromIterator`
/// leaves the first value on top.
pub fn from_bottom_up<T, I>(values: I) -> Stack<T>
where
    I: IntoIterator<Item = T>,
{
    let mut stack = Stack::new();
    for value in values {
        stack.push_mut(value);
    }
    stack
}

/// Returns true if `input` reads the same in both directions, ignoring case
/// and all whitespace.
///
/// The normalized characters are pushed onto a stack; popping them yields
/// the reverse order, which must match the forward order.
pub fn is_palindrome(input: &str) -> bool {
    let normalized: Vec<char> = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    let stack = from_bottom_up(normalized.iter().copied());
    normalized.iter().eq(stack.iter())
}

/// A step of [`last_index_of_traced`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanEvent {
    /// The scan is about to start over `len` values.
    Started { target: i32, len: usize },
    /// The value at `index` is being compared with the target.
    Checking { index: usize, value: i32 },
    /// The target was found at `index`, the largest match so far.
    Found { index: usize },
    /// The scan is over.
    Finished { result: Option<usize> },
}

/// Returns the largest index holding `target`, or `None` if it is absent.
///
/// Every step of the scan is reported to the `log` facade: `debug` for the
/// start and the result, `trace` for each probe.
pub fn last_index_of(stack: &Stack<i32>, target: i32) -> Option<usize> {
    last_index_of_traced(stack, target, |event| match event {
        ScanEvent::Started { target, len } => {
            log::debug!("searching {len} stack values for {target}");
        }
        ScanEvent::Checking { index, value } => {
            log::trace!("checking value {value} at index {index}");
        }
        ScanEvent::Found { index } => {
            log::trace!("found {target} at index {index}");
        }
        ScanEvent::Finished { result } => {
            log::debug!("largest index for {target}: {result:?}");
        }
    })
}

/// Like [`last_index_of`], reporting each step of the scan to `observe`.
///
/// The scan walks from the bottom of the stack to the top so every probe
/// is reported in index order. The observer cannot change the result.
pub fn last_index_of_traced<F>(stack: &Stack<i32>, target: i32, mut observe: F) -> Option<usize>
where
    F: FnMut(ScanEvent),
{
    let len = stack.size();
    observe(ScanEvent::Started { target, len });

    // rpds iterates from the top, so restore bottom-to-top order first.
    let mut bottom_up: Vec<i32> = stack.iter().copied().collect();
    bottom_up.reverse();

    let mut largest = None;
    for (index, &value) in bottom_up.iter().enumerate() {
        observe(ScanEvent::Checking { index, value });
        if value == target {
            largest = Some(index);
            observe(ScanEvent::Found { index });
        }
    }

    observe(ScanEvent::Finished { result: largest });
    largest
}
