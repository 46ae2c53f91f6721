// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! The wheel of the Sieve of Pritchard.
//!
//! A wheel `W[i]` of length `L` holds the integers in `[1, L]` that are
//! coprime to the first `i` primes. While `L` is the product of those
//! primes (the primorial), the residues repeat with period `L`, so the
//! wheel describes every integer coprime to its primes, not just the
//! ones below `L`.
//!
//! Let `p` be the smallest residue greater than 1. Every residue below
//! `p²` is prime: a composite below `p²` has a prime factor below `p`,
//! and all of those have been folded in. This is what lets [`Wheel::primes`]
//! answer for numbers well past the primes actually folded.
//!
//! Folding `p` in (advancing to `W[i+1]`) tiles the residues out to
//! `L * p` and strikes out `p * r` for every old residue `r`.
//!
//! Once `L * p` would exceed the configured limit the length is clamped.
//! A clamped ("capped") wheel is only meaningful up to `L`, and further
//! folds strike multiples in place.

use std::collections::BTreeSet;
use std::fmt;

use crate::error::Error;
use crate::error::Result;
use crate::sieve::roll::Roll;

/// Default wheel limit, 2^16 + 1. Certifies every prime up to and
/// including 2^16, which is enough to factor any `u32`.
pub const DEFAULT_LIMIT: u32 = (1 << 16) + 1;

/// Default seed: W[2], with 2 and 3 already folded in.
pub const DEFAULT_SEED: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wheel {
    index: u32,
    length: u32,
    limit: u32,
    capped: bool,
    primes: BTreeSet<u32>,
    residues: BTreeSet<u32>,
}

impl Wheel {
    /// Create the wheel `W[seed]`. Only seeds 0, 1 and 2 are supported.
    pub fn new(seed: u32, limit: u32) -> Result<Wheel> {
        let (length, primes, residues) = match seed {
            0 => (1, BTreeSet::new(), BTreeSet::from([1])),
            1 => (2, BTreeSet::from([2]), BTreeSet::from([1])),
            2 => (6, BTreeSet::from([2, 3]), BTreeSet::from([1, 5])),
            _ => return Err(Error::UnsupportedSeed(seed)),
        };
        return Ok(Wheel {
            index: seed,
            length,
            limit,
            capped: false,
            primes,
            residues,
        });
    }

    /// Number of primes folded in.
    #[inline]
    pub fn index(&self) -> u32 {
        return self.index;
    }

    #[inline]
    pub fn length(&self) -> u32 {
        return self.length;
    }

    #[inline]
    pub fn limit(&self) -> u32 {
        return self.limit;
    }

    /// Whether the length has been clamped to the limit.
    #[inline]
    pub fn is_capped(&self) -> bool {
        return self.capped;
    }

    /// The primes folded into the wheel.
    pub fn folded_primes(&self) -> &BTreeSet<u32> {
        return &self.primes;
    }

    /// The integers in `[1, length]` coprime to every folded prime.
    pub fn residues(&self) -> &BTreeSet<u32> {
        return &self.residues;
    }

    /// The next prime to be folded in: the first value past 1 in the roll.
    pub fn first_prime(&self) -> u32 {
        return match self.residues.iter().nth(1) {
            Some(&prime) => prime,
            // W[0] and W[1] have the single residue 1.
            None => self.length.saturating_add(1),
        };
    }

    /// Everything below this bound is certified by [`Wheel::primes`].
    ///
    /// This is `p²` for the first unfolded prime `p`, except that a capped
    /// wheel knows nothing past its length.
    pub fn prime_limit(&self) -> u64 {
        let prime = self.first_prime() as u64;
        let square = prime * prime;
        if self.capped {
            return square.min(self.length as u64 + 1);
        }
        return square;
    }

    /// A saturated wheel cannot fold in another prime without passing its limit.
    pub fn is_saturated(&self) -> bool {
        let prime = self.first_prime() as u64;
        return prime * prime >= self.limit as u64;
    }

    /// Fold the next prime in, advancing to `W[i+1]`.
    /// Returns false, leaving the wheel untouched, once saturated.
    pub fn advance(&mut self) -> bool {
        if self.is_saturated() {
            return false;
        }

        let prime = self.first_prime();
        let grown = self.length as u64 * prime as u64;
        let new_length = grown.min(self.limit as u64);

        if new_length == self.length as u64 {
            // Already clamped: nothing to tile, strike in place.
            let struck: Vec<u32> = self.residues
                .range(..=self.length / prime)
                .map(|residue| residue * prime)
                .collect();
            for multiple in struck {
                self.residues.remove(&multiple);
            }
        } else {
            let mut rolled: BTreeSet<u32> = self.roll()
                .upto(new_length + 1)
                .map(|value| value as u32)
                .collect();
            for &residue in self.residues.iter().rev() {
                let multiple = residue as u64 * prime as u64;
                if multiple <= new_length {
                    rolled.remove(&(multiple as u32));
                }
            }
            self.residues = rolled;
        }

        if grown > new_length {
            self.capped = true;
        }
        self.primes.insert(prime);
        self.length = new_length as u32;
        self.index += 1;

        tracing::trace!(index = self.index, length = self.length, prime, "folded prime into wheel");
        return true;
    }

    /// Returns `W[i+1]`, leaving `self` as it is.
    pub fn next(&self) -> Wheel {
        let mut next = self.clone();
        next.advance();
        return next;
    }

    /// Every prime this wheel can vouch for: the folded primes, plus every
    /// value of the roll between the first unfolded prime and
    /// [`Wheel::prime_limit`].
    ///
    /// Complete below `prime_limit()`; says nothing about larger numbers.
    pub fn primes(&self) -> BTreeSet<u32> {
        let bound = self.prime_limit().min(u32::MAX as u64 + 1);
        let mut primes = self.primes.clone();
        primes.extend(
            self.roll()
                .upto(bound)
                .filter(|&value| value > 1)
                .map(|value| value as u32),
        );
        return primes;
    }

    /// The infinite cyclic sequence of residues.
    pub fn roll(&self) -> Roll<'_> {
        return Roll::new(&self.residues, self.length);
    }
}

impl Default for Wheel {
    /// `W[2]` with the default limit.
    fn default() -> Self {
        return Wheel {
            index: DEFAULT_SEED,
            length: 6,
            limit: DEFAULT_LIMIT,
            capped: false,
            primes: BTreeSet::from([2, 3]),
            residues: BTreeSet::from([1, 5]),
        };
    }
}

impl fmt::Display for Wheel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "W[{}]: len({})", self.index, self.length)?;
        write!(f, "primes:")?;
        for prime in &self.primes {
            write!(f, " {}", prime)?;
        }
        write!(f, "\nresidues:")?;
        for residue in &self.residues {
            write!(f, " {}", residue)?;
        }
        return writeln!(f);
    }
}
