//! Seed and cursor state shared by every generator call.

use crate::rng::{self, Rand};
use once_cell::sync::Lazy;
use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Sequence starts keep the top two bits clear so a run of reservations has
/// plenty of room before the cursor could wrap.
const SEQUENCE_START_MASK: u64 = u64::MAX >> 2;

static GLOBAL: Lazy<SeedState> = Lazy::new(SeedState::from_time);

/// Seed state for fixture generation.
///
/// Each generator call reserves the next value of an atomic seed cursor and
/// builds a private random stream from it. Calls never share a stream, so
/// concurrent callers need no lock, and the cursor values handed out are
/// fully determined by the seed and the order of calls.
///
/// # Example
/// ```
/// use fixture_random::SeedState;
///
/// let state = SeedState::new(7);
/// let addrs = state.addrs(2);
/// let next = state.sequence_next();
///
/// state.set_seed(state.seed());
/// assert_eq!(addrs, state.addrs(2));
/// assert_eq!(next, state.sequence_next());
/// ```
#[derive(Debug)]
pub struct SeedState {
    initial_seed: AtomicU64,
    seed_cursor: AtomicU64,
    pub(crate) sequence_cursor: AtomicU64,
}

impl SeedState {
    /// Create a state seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        let state = Self {
            initial_seed: AtomicU64::new(0),
            seed_cursor: AtomicU64::new(0),
            sequence_cursor: AtomicU64::new(0),
        };
        state.set_seed(seed);
        state
    }

    /// Create a state seeded from the current time.
    pub fn from_time() -> Self {
        Self::new(rng::time_seed())
    }

    /// The process-wide state, seeded from the clock on first use.
    pub fn global() -> &'static SeedState {
        &GLOBAL
    }

    /// The seed last passed to [`set_seed`](Self::set_seed).
    pub fn seed(&self) -> u64 {
        self.initial_seed.load(Ordering::SeqCst)
    }

    /// Reset both cursors from `seed`.
    ///
    /// The sequence cursor restarts at one draw from a stream seeded with
    /// `seed`, so the same seed always restarts sequences at the same value.
    pub fn set_seed(&self, seed: u64) {
        let sequence_start = rng::seeded(seed).next_u64() & SEQUENCE_START_MASK;
        self.initial_seed.store(seed, Ordering::SeqCst);
        self.seed_cursor.store(seed, Ordering::SeqCst);
        self.sequence_cursor.store(sequence_start, Ordering::SeqCst);
        debug!(seed, sequence_start, "fixture seed set");
    }

    /// Reserve the next seed cursor value and return a stream seeded with it.
    pub fn rng(&self) -> Rand {
        let seed = self.seed_cursor.fetch_add(1, Ordering::SeqCst).wrapping_add(1);
        rng::seeded(seed)
    }
}

impl Default for SeedState {
    fn default() -> Self {
        Self::from_time()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_seed_returns_last_set_value() {
        let state = SeedState::new(11);
        assert_eq!(state.seed(), 11);

        state.set_seed(99);
        assert_eq!(state.seed(), 99);
    }

    #[test]
    fn test_rng_streams_advance_per_call() {
        let state = SeedState::new(5);
        let a: u64 = state.rng().gen();
        let b: u64 = state.rng().gen();
        assert_ne!(a, b);

        // The first call after seeding uses cursor value seed + 1.
        let expected: u64 = rng::seeded(6).gen();
        state.set_seed(5);
        assert_eq!(state.rng().gen::<u64>(), expected);
    }

    #[test]
    fn test_reseed_replays_streams() {
        let state = SeedState::new(1234);
        let first: Vec<u64> = (0..5).map(|_| state.rng().gen()).collect();

        state.set_seed(1234);
        let second: Vec<u64> = (0..5).map(|_| state.rng().gen()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_independent_states_do_not_interfere() {
        let a = SeedState::new(77);
        let b = SeedState::new(77);

        // Advancing one state leaves the other untouched.
        let _ = a.rng();
        let _ = a.rng();
        let from_b: u64 = b.rng().gen();

        let fresh = SeedState::new(77);
        assert_eq!(from_b, fresh.rng().gen::<u64>());
    }

    #[test]
    fn test_concurrent_calls_get_distinct_streams() {
        let state = Arc::new(SeedState::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    (0..100).map(|_| state.rng().gen::<u64>()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "two calls shared a stream");
            }
        }
        assert_eq!(seen.len(), 800);
    }

    #[test]
    fn test_sequence_start_is_masked() {
        for seed in 0..50 {
            let state = SeedState::new(seed);
            assert!(state.sequence_cursor.load(Ordering::SeqCst) <= SEQUENCE_START_MASK);
        }
    }
}
