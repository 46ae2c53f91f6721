// model = "claude-opus-4-5"
// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Checks the wheel and the prime cache against a plain linear sieve.

use std::collections::BTreeSet;

use proptest::prelude::*;
use pritchard::config::SieveConfig;
use pritchard::sieve::PrimeCache;
use pritchard::sieve::Wheel;

const SIXTEEN_BITS: u32 = 1 << 16;

fn linear_sieve(n_max: u32) -> Vec<u32> {
    let mut min_prime_factor = vec![0; n_max as usize + 1];
    let mut primes = Vec::new();

    for i in 2..=n_max {
        if min_prime_factor[i as usize] == 0 {
            primes.push(i);
        }
        for &p in primes.iter() {
            if i as u64 * p as u64 > n_max as u64 {
                break;
            }
            min_prime_factor[(i * p) as usize] = p;
            if i % p == 0 {
                break;
            }
        }
    }

    return primes;
}

fn below(primes: &BTreeSet<u32>, n: u32) -> Vec<u32> {
    return primes.range(..n).copied().collect();
}

fn reference_below(reference: &[u32], n: u32) -> Vec<u32> {
    return reference.iter().copied().take_while(|&p| p < n).collect();
}

// =============================================================================
// Cache completeness
// =============================================================================

#[test]
fn every_seed_matches_reference_up_to_sixteen_bits() {
    let reference = linear_sieve(SIXTEEN_BITS);

    for seed in 0..=2 {
        let config = SieveConfig::default().with_seed(seed);
        let mut cache = PrimeCache::from_config(&config).unwrap();

        for n in [2, 3, 10, 25, 100, 1000, 4096, 30031, SIXTEEN_BITS] {
            let primes = cache.try_primes(n).unwrap().clone();
            assert_eq!(below(&primes, n), reference_below(&reference, n), "seed {} n {}", seed, n);
        }
    }
}

#[test]
fn fresh_cache_per_request_matches_reference() {
    let reference = linear_sieve(SIXTEEN_BITS);

    for n in (0..SIXTEEN_BITS).step_by(4099) {
        let mut cache = PrimeCache::new();
        let primes = cache.primes(n).clone();
        assert_eq!(below(&primes, n), reference_below(&reference, n), "n {}", n);
    }
}

#[test]
fn snapshot_holds_only_primes() {
    let reference: BTreeSet<u32> = linear_sieve(SIXTEEN_BITS + 1).into_iter().collect();
    let mut cache = PrimeCache::new();
    let primes = cache.primes(SIXTEEN_BITS).clone();
    assert!(primes.is_subset(&reference));
}

#[test]
fn small_limit_saturates_with_correct_primes() {
    let reference = linear_sieve(2000);
    let config = SieveConfig::default().with_limit(1500);
    let mut cache = PrimeCache::from_config(&config).unwrap();

    let primes = cache.primes(2000).clone();
    let certified = cache.certified() as u32;
    assert!(certified < 2000);
    assert_eq!(below(&primes, certified), reference_below(&reference, certified));
    assert!(cache.try_primes(2000).is_err());
}

// =============================================================================
// Wheel growth
// =============================================================================

#[test]
fn wheel_lengths_follow_primorials_until_capped() {
    let mut wheel = Wheel::default();
    let mut lengths = vec![wheel.length()];
    while wheel.advance() && !wheel.is_capped() {
        lengths.push(wheel.length());
    }
    assert_eq!(lengths, vec![6, 30, 210, 2310, 30030]);
    assert_eq!(wheel.length(), wheel.limit());
}

#[test]
fn every_wheel_state_certifies_correctly() {
    let reference = linear_sieve(SIXTEEN_BITS + 2);

    for seed in 0..=2 {
        let mut wheel = Wheel::new(seed, SIXTEEN_BITS + 1).unwrap();
        loop {
            let bound = wheel.prime_limit().min(SIXTEEN_BITS as u64 + 2) as u32;
            let primes = wheel.primes();
            assert_eq!(below(&primes, bound), reference_below(&reference, bound), "{}", wheel);
            if !wheel.advance() {
                break;
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// primes(n) is complete below n, however the requests are ordered
    #[test]
    fn cache_complete_for_any_request_order(
        requests in prop::collection::vec(0u32..SIXTEEN_BITS, 1..8),
    ) {
        let reference = linear_sieve(SIXTEEN_BITS);
        let mut cache = PrimeCache::new();
        let mut last_certified = cache.certified();

        for &n in &requests {
            let primes = cache.primes(n).clone();
            prop_assert_eq!(below(&primes, n), reference_below(&reference, n));
            prop_assert!(cache.certified() >= last_certified);
            last_certified = cache.certified();
        }
    }

    /// A wheel with any limit only certifies primes
    #[test]
    fn any_limit_certifies_only_primes(limit in 0u32..20_000, seed in 0u32..=2) {
        let reference = linear_sieve(20_000 * 2);
        let mut wheel = Wheel::new(seed, limit).unwrap();
        while wheel.advance() {}

        prop_assert!(wheel.is_saturated());
        let bound = wheel.prime_limit().min(40_000) as u32;
        prop_assert_eq!(below(&wheel.primes(), bound), reference_below(&reference, bound));
    }
}
