// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Pritchard - incremental primes and divisors.
//!
//! Primes come from a growable wheel (the Sieve of Pritchard), and the
//! divisor engine factors with whatever primes the wheel has certified.
//!
//! # Quick Start
//!
//! ```
//! use pritchard::divisors::Divisors;
//! use pritchard::sieve::PrimeCache;
//!
//! // Primes below 100, and possibly a few more
//! let mut cache = PrimeCache::new();
//! assert!(cache.primes(100).contains(&97));
//!
//! // Proper divisors reuse the cache the engine owns
//! let mut engine = Divisors::new();
//! let divisors: Vec<u32> = engine.divisors(28).into_iter().collect();
//! assert_eq!(divisors, vec![1, 2, 4, 7, 14]);
//! ```

pub mod config;
pub mod divisors;
pub mod error;
pub mod perfect;
pub mod sieve;

pub use error::Error;
pub use error::Result;
