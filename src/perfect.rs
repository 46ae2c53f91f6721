// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Perfect numbers: numbers equal to the sum of their proper divisors.

use std::ops::Range;

use crate::divisors::Divisors;
use crate::sieve::PrimeSource;

/// Whether `n` is the sum of its proper divisors. False below 2.
pub fn is_perfect<S: PrimeSource>(engine: &mut Divisors<S>, n: u32) -> bool {
    if n < 2 {
        return false;
    }
    let sum: u64 = engine.divisors(n).iter().map(|&d| d as u64).sum();
    return sum == n as u64;
}

/// Every perfect number in `range`, ascending.
pub fn perfect_numbers<S: PrimeSource>(engine: &mut Divisors<S>, range: Range<u32>) -> Vec<u32> {
    let mut perfect = Vec::new();
    for n in range {
        if is_perfect(engine, n) {
            perfect.push(n);
        }
    }
    return perfect;
}
