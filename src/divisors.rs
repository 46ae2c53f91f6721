// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Factoring and proper divisors.
//!
//! To find the divisors of `n`, trial-divide by every prime up to
//! `ceil(sqrt(n))`, recording each prime once per unit of multiplicity.
//! At most one prime factor of `n` is larger than that; call it `q`.
//! Every divisor is then either the product `d` of some sub-multiset
//! of the recorded primes, or `n / d`, which picks up `q` for free.
//!
//! Sub-multisets are enumerated by multiplicity, so `2^31` only costs
//! 32 combinations rather than `2^31`.

use std::collections::BTreeSet;

use smallvec::SmallVec;

use crate::sieve::PrimeCache;
use crate::sieve::PrimeSource;

/// A prime-factor multiset in ascending order.
/// A `u32` has at most 31 prime factors counted with multiplicity.
pub type Factors = SmallVec<[u32; 32]>;

/// Smallest `s` with `s * s >= n`.
pub fn ceil_sqrt(n: u32) -> u32 {
    let n = n as u64;
    let mut root = (n as f64).sqrt() as u64;
    while root * root > n {
        root -= 1;
    }
    while root * root < n {
        root += 1;
    }
    return root as u32;
}

/// Every distinct sub-multiset of a multiset, the empty one first.
///
/// Equal items are interchangeable: `{2, 2}` yields `{}`, `{2}` and
/// `{2, 2}`, not `{2}` twice.
#[derive(Clone, Debug)]
pub struct SubMultisets {
    /// (value, multiplicity), ascending by value.
    groups: SmallVec<[(u32, u32); 16]>,
    /// How many of each group the current sub-multiset takes.
    counts: SmallVec<[u32; 16]>,
    done: bool,
}

impl SubMultisets {
    pub fn new(items: &[u32]) -> SubMultisets {
        let mut sorted: SmallVec<[u32; 32]> = SmallVec::from_slice(items);
        sorted.sort_unstable();

        let mut groups: SmallVec<[(u32, u32); 16]> = SmallVec::new();
        for item in sorted {
            match groups.last_mut() {
                Some((value, multiplicity)) if *value == item => *multiplicity += 1,
                _ => groups.push((item, 1)),
            }
        }

        let counts = SmallVec::from_elem(0, groups.len());
        return SubMultisets { groups, counts, done: false };
    }

    /// Number of distinct sub-multisets, `∏ (multiplicity + 1)`.
    pub fn count_all(&self) -> u64 {
        return self.groups.iter().map(|&(_, multiplicity)| multiplicity as u64 + 1).product();
    }
}

impl Iterator for SubMultisets {
    type Item = Factors;

    fn next(&mut self) -> Option<Factors> {
        if self.done {
            return None;
        }

        let mut current = Factors::new();
        for (&(value, _), &count) in self.groups.iter().zip(self.counts.iter()) {
            current.extend(std::iter::repeat_n(value, count as usize));
        }

        // Mixed-radix increment, digit `i` running over `0..=multiplicity`.
        let mut bumped = false;
        for i in 0..self.groups.len() {
            if self.counts[i] < self.groups[i].1 {
                self.counts[i] += 1;
                bumped = true;
                break;
            }
            self.counts[i] = 0;
        }
        if !bumped {
            self.done = true;
        }

        return Some(current);
    }
}

/// Every distinct sub-multiset of `items`, including the empty one.
pub fn sub_multisets(items: &[u32]) -> SubMultisets {
    return SubMultisets::new(items);
}

/// The divisor engine. Owns the prime source it factors with, so repeated
/// queries reuse the primes already found.
#[derive(Clone, Debug, Default)]
pub struct Divisors<S: PrimeSource = PrimeCache> {
    source: S,
}

impl Divisors<PrimeCache> {
    /// An engine over a fresh default [`PrimeCache`].
    pub fn new() -> Divisors<PrimeCache> {
        return Divisors { source: PrimeCache::new() };
    }
}

impl<S: PrimeSource> Divisors<S> {
    pub fn with_source(source: S) -> Divisors<S> {
        return Divisors { source };
    }

    pub fn source(&self) -> &S {
        return &self.source;
    }

    pub fn source_mut(&mut self) -> &mut S {
        return &mut self.source;
    }

    pub fn into_source(self) -> S {
        return self.source;
    }

    /// The prime factors of `n` no larger than `ceil(sqrt(n))`, each
    /// repeated by its multiplicity. A single larger factor, if any, is
    /// left out.
    pub fn factorize(&mut self, n: u32) -> Factors {
        let mut factors = Factors::new();
        if n < 2 {
            return factors;
        }

        let root = ceil_sqrt(n);
        // Complete up to and including `root`.
        let primes = self.source.primes(root.saturating_add(1));
        for &prime in primes {
            // The source may hand back far more primes than asked for.
            if prime > root {
                break;
            }
            let mut rest = n;
            while rest % prime == 0 {
                factors.push(prime);
                rest /= prime;
            }
        }
        return factors;
    }

    /// The proper divisors of `n`: every divisor except `n` itself.
    /// Empty for 0, `{1}` for 1 and for every prime.
    pub fn divisors(&mut self, n: u32) -> BTreeSet<u32> {
        if n == 0 {
            return BTreeSet::new();
        }
        if n == 1 {
            return BTreeSet::from([1]);
        }

        let factors = self.factorize(n);
        let mut divisors = BTreeSet::new();
        for subset in sub_multisets(&factors) {
            // Divides n, so cannot overflow.
            let d: u32 = subset.iter().product();
            divisors.insert(d);
            divisors.insert(n / d);
        }
        divisors.remove(&n);
        return divisors;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(items: &[u32]) -> BTreeSet<Vec<u32>> {
        return sub_multisets(items).map(|s| s.to_vec()).collect();
    }

    #[test]
    fn ceil_sqrt_small() {
        let expected = [0, 1, 2, 2, 2, 3, 3, 3, 3, 3, 4];
        for (n, &root) in expected.iter().enumerate() {
            assert_eq!(ceil_sqrt(n as u32), root, "ceil_sqrt({})", n);
        }
    }

    #[test]
    fn ceil_sqrt_extremes() {
        assert_eq!(ceil_sqrt(65536 * 65535), 65536);
        assert_eq!(ceil_sqrt(u32::MAX), 65536);
        assert_eq!(ceil_sqrt(4_294_836_225), 65535);
    }

    #[test]
    fn sub_multisets_of_distinct_values() {
        let expected: BTreeSet<Vec<u32>> = [
            vec![], vec![1], vec![2], vec![3],
            vec![1, 2], vec![1, 3], vec![2, 3], vec![1, 2, 3],
        ].into_iter().collect();
        assert_eq!(collect(&[1, 2, 3]), expected);
        assert_eq!(sub_multisets(&[1, 2, 3]).count(), 8);
    }

    #[test]
    fn sub_multisets_skip_duplicates() {
        let subsets: Vec<Vec<u32>> = sub_multisets(&[2, 2, 3]).map(|s| s.to_vec()).collect();
        assert_eq!(subsets.len(), 6);
        let unique: BTreeSet<Vec<u32>> = subsets.iter().cloned().collect();
        assert_eq!(unique.len(), 6);
        assert!(unique.contains(&vec![2, 2, 3]));
    }

    #[test]
    fn sub_multisets_of_nothing() {
        assert_eq!(collect(&[]), BTreeSet::from([vec![]]));
    }

    #[test]
    fn sub_multisets_of_unsorted_input() {
        assert_eq!(collect(&[3, 2, 3]), collect(&[2, 3, 3]));
    }

    #[test]
    fn sub_multisets_count_matches_formula() {
        let iter = sub_multisets(&[2, 2, 2, 2, 3, 3]);
        assert_eq!(iter.count_all(), 15);
        assert_eq!(iter.count(), 15);
    }

    #[test]
    fn factorize_repeats_by_multiplicity() {
        let mut engine = Divisors::new();
        assert_eq!(engine.factorize(144).as_slice(), &[2, 2, 2, 2, 3, 3]);
        assert_eq!(engine.factorize(10201).as_slice(), &[101, 101]);
        assert!(engine.factorize(1).is_empty());
        assert!(engine.factorize(0).is_empty());
    }

    #[test]
    fn factorize_leaves_out_large_cofactor() {
        let mut engine = Divisors::new();
        assert_eq!(engine.factorize(2 * 65521).as_slice(), &[2]);
        assert!(engine.factorize(65521).is_empty());
    }

    #[test]
    fn zero_and_one() {
        let mut engine = Divisors::new();
        assert_eq!(engine.divisors(0), BTreeSet::new());
        assert_eq!(engine.divisors(1), BTreeSet::from([1]));
    }

    #[test]
    fn small_numbers() {
        let mut engine = Divisors::new();
        assert_eq!(engine.divisors(2), BTreeSet::from([1]));
        assert_eq!(engine.divisors(3), BTreeSet::from([1]));
        assert_eq!(engine.divisors(4), BTreeSet::from([1, 2]));
        assert_eq!(engine.divisors(9), BTreeSet::from([1, 3]));
        assert_eq!(engine.divisors(16), BTreeSet::from([1, 2, 4, 8]));
        assert_eq!(engine.divisors(25), BTreeSet::from([1, 5]));
        assert_eq!(engine.divisors(28), BTreeSet::from([1, 2, 4, 7, 14]));
    }

    #[test]
    fn ceiling_root_prime_is_found() {
        // ceil(sqrt(101 * 100)) is 101 itself.
        let mut engine = Divisors::new();
        let divisors = engine.divisors(101 * 100);
        assert!(divisors.contains(&101));
        assert!(divisors.contains(&100));
        assert_eq!(divisors.len(), 17);
    }

    #[test]
    fn prime_times_large_prime() {
        let mut engine = Divisors::new();
        assert_eq!(engine.divisors(2 * 65521), BTreeSet::from([1, 2, 65521]));
    }

    #[test]
    fn powers_of_two() {
        let mut engine = Divisors::new();
        let divisors = engine.divisors(1 << 31);
        let expected: BTreeSet<u32> = (0..31).map(|k| 1 << k).collect();
        assert_eq!(divisors, expected);
    }

    #[test]
    fn engine_reuses_its_cache() {
        let mut engine = Divisors::new();
        engine.divisors(1_000_000);
        let index = engine.source().wheel().index();
        engine.divisors(999_999);
        assert_eq!(engine.source().wheel().index(), index);
    }
}
