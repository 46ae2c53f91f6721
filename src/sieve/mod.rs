// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Incremental prime generation with the Sieve of Pritchard.
//!
//! # Wheel
//!
//! [`Wheel`] is the sieve state: the residues coprime to the primes
//! folded in so far. It grows one prime at a time with
//! [`Wheel::advance`].
//!
//! # Roll
//!
//! [`Roll`] walks a wheel's residues cyclically, forever. Growing a
//! wheel tiles its residues with a roll.
//!
//! # Cache
//!
//! [`PrimeCache`] owns a wheel and grows it only as far as callers ask.
//! It is not shared: each owner grows its own.

pub mod cache;
pub mod roll;
pub mod wheel;

use std::collections::BTreeSet;

pub use cache::PrimeCache;
pub use roll::Roll;
pub use roll::RollPosition;
pub use roll::Upto;
pub use wheel::Wheel;

/// Something that can hand out every prime below a bound.
pub trait PrimeSource {
    /// Returns a set containing at least every prime below `n`.
    /// The set may hold larger primes too.
    fn primes(&mut self, n: u32) -> &BTreeSet<u32>;
}
