extern crate std;

use alloc::vec::Vec;
use std::vec;

use rpds::Stack;

use super::{ScanEvent, from_bottom_up, is_palindrome, last_index_of, last_index_of_traced};

fn sample_stack() -> Stack<i32> {
    from_bottom_up([3, 4, 9, 4, 4, 7, 4])
}

#[test]
fn test_palindrome_ignores_case_and_spaces() {
    assert!(is_palindrome("RaCe cAr"));
    assert!(is_palindrome("race car"));
    assert!(is_palindrome("racecar"));
    assert!(is_palindrome("Never odd or even"));
    assert!(is_palindrome(" a\tb \n A "));
}

#[test]
fn test_palindrome_rejects() {
    assert!(!is_palindrome("hello"));
    assert!(!is_palindrome("ab"));
    assert!(!is_palindrome("race cars"));
}

#[test]
fn test_palindrome_rejects_short_mismatches() {
    assert!(!is_palindrome("ab"));
    assert!(!is_palindrome("abc"));
    assert!(!is_palindrome("abca"));
    assert!(!is_palindrome("A b"));
    assert!(is_palindrome("abba"));
}

#[test]
fn test_from_bottom_up_puts_last_value_on_top() {
    let mut pushed = Stack::new();
    pushed.push_mut(1);
    pushed.push_mut(2);
    pushed.push_mut(3);
    assert_eq!(pushed.peek(), Some(&3));

    let built = from_bottom_up([1, 2, 3]);
    assert_eq!(built.peek(), Some(&3));
    assert_eq!(built, pushed);
    assert_eq!(built.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);

    assert_eq!(last_index_of(&built, 1), Some(0));
    assert_eq!(last_index_of(&built, 3), Some(2));
}

#[test]
fn test_palindrome_trivial_inputs() {
    assert!(is_palindrome(""));
    assert!(is_palindrome("   "));
    assert!(is_palindrome("x"));
}

#[test]
fn test_last_index_of_finds_top_most_match() {
    let stack = sample_stack();
    assert_eq!(stack.peek(), Some(&4));
    assert_eq!(last_index_of(&stack, 4), Some(6));
    assert_eq!(last_index_of(&stack, 3), Some(0));
    assert_eq!(last_index_of(&stack, 9), Some(2));
    assert_eq!(last_index_of(&stack, 7), Some(5));
}

#[test]
fn test_last_index_of_missing_value() {
    let stack = sample_stack();
    assert_eq!(last_index_of(&stack, 42), None);
    assert_eq!(last_index_of(&Stack::new(), 4), None);
}

#[test]
fn test_last_index_of_leaves_stack_untouched() {
    let stack = sample_stack();
    let before: Vec<i32> = stack.iter().copied().collect();

    last_index_of(&stack, 4);
    last_index_of(&stack, 100);

    let after: Vec<i32> = stack.iter().copied().collect();
    assert_eq!(before, after);
    assert_eq!(stack.size(), 7);
    assert_eq!(stack, sample_stack());
}

#[test]
fn test_traced_scan_reports_every_probe() {
    let stack = sample_stack();
    let mut events = Vec::new();

    let result = last_index_of_traced(&stack, 4, |event| events.push(event));
    assert_eq!(result, Some(6));
    assert_eq!(result, last_index_of(&stack, 4));

    assert_eq!(events.first(), Some(&ScanEvent::Started { target: 4, len: 7 }));
    assert_eq!(events.last(), Some(&ScanEvent::Finished { result: Some(6) }));

    let probed: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            ScanEvent::Checking { index, .. } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(probed, (0..7).collect::<Vec<_>>());

    let found: Vec<usize> = events
        .iter()
        .filter_map(|event| match event {
            ScanEvent::Found { index } => Some(*index),
            _ => None,
        })
        .collect();
    assert_eq!(found, vec![1, 3, 4, 6]);
}

#[test]
fn test_traced_scan_on_empty_stack() {
    let mut events = Vec::new();
    let result = last_index_of_traced(&Stack::new(), 1, |event| events.push(event));
    assert_eq!(result, None);
    assert_eq!(
        events,
        vec![
            ScanEvent::Started { target: 1, len: 0 },
            ScanEvent::Finished { result: None },
        ]
    );
}
