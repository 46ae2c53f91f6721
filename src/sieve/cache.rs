// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! A wheel that grows on demand, plus its latest prime snapshot.

use std::collections::BTreeSet;

use crate::config::SieveConfig;
use crate::error::Error;
use crate::error::Result;
use crate::sieve::PrimeSource;
use crate::sieve::wheel::Wheel;

/// Owns a [`Wheel`] and the primes it has certified so far.
///
/// The cache only ever grows. A snapshot returned for some `n` may hold
/// primes well past `n`; only completeness below `n` is promised.
#[derive(Clone, Debug)]
pub struct PrimeCache {
    wheel: Wheel,
    snapshot: BTreeSet<u32>,
    certified: u64,
}

impl PrimeCache {
    /// A cache over `W[2]` with the default limit.
    pub fn new() -> PrimeCache {
        return PrimeCache::from_wheel(Wheel::default());
    }

    pub fn from_config(config: &SieveConfig) -> Result<PrimeCache> {
        return Ok(PrimeCache::from_wheel(config.build_wheel()?));
    }

    pub fn from_wheel(wheel: Wheel) -> PrimeCache {
        let snapshot = wheel.primes();
        let certified = wheel.prime_limit();
        return PrimeCache { wheel, snapshot, certified };
    }

    pub fn wheel(&self) -> &Wheel {
        return &self.wheel;
    }

    /// The snapshot is complete below this bound.
    pub fn certified(&self) -> u64 {
        return self.certified;
    }

    /// Grow the wheel until it certifies every prime below `n`, or
    /// until it saturates. Returns whether `n` is covered.
    fn grow(&mut self, n: u64) -> bool {
        if self.certified >= n {
            return true;
        }

        let mut folds = 0;
        while self.wheel.prime_limit() < n {
            if !self.wheel.advance() {
                break;
            }
            folds += 1;
        }

        if folds > 0 {
            self.snapshot = self.wheel.primes();
            self.certified = self.wheel.prime_limit();
            tracing::debug!(
                requested = n,
                certified = self.certified,
                folds,
                primes = self.snapshot.len(),
                "grew prime cache"
            );
        }

        return self.certified >= n;
    }

    /// Every prime below `n`, and possibly more.
    ///
    /// If the wheel saturates first, the snapshot is only complete below
    /// [`PrimeCache::certified`]; use [`PrimeCache::try_primes`] to
    /// detect that.
    pub fn primes(&mut self, n: u32) -> &BTreeSet<u32> {
        if !self.grow(n as u64) {
            tracing::warn!(
                requested = n,
                certified = self.certified,
                limit = self.wheel.limit(),
                "wheel saturated, prime snapshot is incomplete"
            );
        }
        return &self.snapshot;
    }

    /// Like [`PrimeCache::primes`], but fails when the wheel cannot
    /// certify every prime below `n`.
    pub fn try_primes(&mut self, n: u32) -> Result<&BTreeSet<u32>> {
        if !self.grow(n as u64) {
            return Err(Error::Saturated {
                requested: n as u64,
                certified: self.certified,
            });
        }
        return Ok(&self.snapshot);
    }
}

impl Default for PrimeCache {
    fn default() -> Self {
        return Self::new();
    }
}

impl PrimeSource for PrimeCache {
    fn primes(&mut self, n: u32) -> &BTreeSet<u32> {
        return PrimeCache::primes(self, n);
    }
}
