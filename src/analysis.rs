//! Answers to two loop-complexity questions.
//!
//! Each function runs the loop nest it is named after and returns the
//! number of the multiple-choice option that describes its cost.

use core::fmt;
use core::hint::black_box;

/// A multiple-choice complexity answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    /// O(N + M) time, O(1) space.
    LinearSum,
    /// O(N log N) time.
    Linearithmic,
}

impl Complexity {
    /// The option number of this answer.
    pub const fn option(self) -> u32 {
        match self {
            Complexity::LinearSum => 3,
            Complexity::Linearithmic => 2,
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Complexity::LinearSum => f.write_str("O(N + M) time, O(1) space"),
            Complexity::Linearithmic => f.write_str("O(N log N) time"),
        }
    }
}

/// Two independent loops of `n` and `m` steps.
pub fn algorithm_analysis_1(n: usize, m: usize) -> u32 {
    let (mut a, mut b) = (0u64, 0u64);
    for i in 0..n {
        a = a.wrapping_add(black_box(i as u64));
    }
    for j in 0..m {
        b = b.wrapping_add(black_box(j as u64));
    }
    black_box((a, b));

    Complexity::LinearSum.option()
}

/// An outer loop over the upper half of `0..=n` around an inner loop that
/// doubles its counter up to `n`.
pub fn algorithm_analysis_2(n: usize) -> u32 {
    let mut k = 0usize;
    for _ in n / 2..=n {
        let mut j = 2usize;
        while j <= n {
            k = k.wrapping_add(n / 2);
            let Some(next) = j.checked_mul(2) else { break };
            j = next;
        }
    }
    black_box(k);

    Complexity::Linearithmic.option()
}
