// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The cyclic residue sequence of a wheel.
//!
//! A wheel of length `L` with residues `r_0 < r_1 < ... < r_k` rolls out
//! to the infinite ascending sequence
//!
//! ```text
//! r_0, r_1, ..., r_k, r_0 + L, r_1 + L, ..., r_k + L, r_0 + 2L, ...
//! ```
//!
//! Tiling a wheel to a longer length is a matter of collecting this
//! sequence up to a bound, which is what [`Roll::upto`] does.
//!
//! Complexity:
//! - step: O(1) amortized
//! - value, reached: O(1)

use std::collections::BTreeSet;
use std::collections::btree_set;

/// Where a roll currently is: which residue, and how many times it has
/// gone around the wheel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RollPosition {
    /// Laps completed so far.
    pub lap: u64,
    /// Index of the current residue within the residue set.
    pub offset: usize,
}

/// A restartable, infinite iterator over `residue + lap * length`.
#[derive(Clone, Debug)]
pub struct Roll<'a> {
    residues: &'a BTreeSet<u32>,
    iter: btree_set::Iter<'a, u32>,
    current: Option<u32>,
    position: RollPosition,
    length: u64,
}

impl<'a> Roll<'a> {
    /// Roll `residues` around a wheel of the given length.
    pub fn new(residues: &'a BTreeSet<u32>, length: u32) -> Roll<'a> {
        let mut iter = residues.iter();
        let current = iter.next().copied();
        return Roll {
            residues,
            iter,
            current,
            position: RollPosition::default(),
            length: length as u64,
        };
    }

    /// The value at the current position, or `None` for an empty wheel.
    #[inline]
    pub fn value(&self) -> Option<u64> {
        let residue = self.current? as u64;
        return Some(residue + self.position.lap * self.length);
    }

    /// Move to the next residue, wrapping into the next lap.
    pub fn step(&mut self) {
        if self.current.is_none() {
            return;
        }
        match self.iter.next() {
            Some(&residue) => {
                self.current = Some(residue);
                self.position.offset += 1;
            }
            None => {
                self.iter = self.residues.iter();
                self.current = self.iter.next().copied();
                self.position.offset = 0;
                self.position.lap += 1;
            }
        }
    }

    /// Whether the running value has reached `bound`.
    /// An empty wheel has reached every bound.
    #[inline]
    pub fn reached(&self, bound: u64) -> bool {
        return match self.value() {
            Some(value) => value >= bound,
            None => true,
        };
    }

    #[inline]
    pub fn position(&self) -> RollPosition {
        return self.position;
    }

    /// Go back to the first residue of the first lap.
    pub fn restart(&mut self) {
        self.iter = self.residues.iter();
        self.current = self.iter.next().copied();
        self.position = RollPosition::default();
    }

    /// Cap the roll: the returned iterator stops once the value reaches `bound`.
    pub fn upto(self, bound: u64) -> Upto<'a> {
        return Upto { roll: self, bound };
    }
}

impl PartialEq for Roll<'_> {
    fn eq(&self, other: &Self) -> bool {
        return std::ptr::eq(self.residues, other.residues)
            && self.length == other.length
            && self.position == other.position;
    }
}

impl Eq for Roll<'_> {}

impl Iterator for Roll<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.value()?;
        self.step();
        return Some(value);
    }
}

/// A roll cut off at a bound (exclusive).
#[derive(Clone, Debug)]
pub struct Upto<'a> {
    roll: Roll<'a>,
    bound: u64,
}

impl Upto<'_> {
    pub fn bound(&self) -> u64 {
        return self.bound;
    }
}

impl Iterator for Upto<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.roll.reached(self.bound) {
            return None;
        }
        return self.roll.next();
    }
}
