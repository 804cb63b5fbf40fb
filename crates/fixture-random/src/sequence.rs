//! Monotonic sequence numbers.
//!
//! Only the starting point of a sequence is random. Every reservation is a
//! single `fetch_add`, so concurrent callers always receive disjoint runs.

use crate::seed::SeedState;
use std::sync::atomic::Ordering;

impl SeedState {
    /// Return the next sequence number.
    pub fn sequence_next(&self) -> u64 {
        self.sequence_cursor
            .fetch_add(1, Ordering::SeqCst)
            .wrapping_add(1)
    }

    /// Reserve `n` consecutive sequence numbers and return them in ascending
    /// order.
    pub fn sequence(&self, n: usize) -> Vec<u64> {
        if n == 0 {
            return Vec::new();
        }
        let start = self.sequence_cursor.fetch_add(n as u64, Ordering::SeqCst);
        (1..=n as u64).map(|i| start.wrapping_add(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::SeedState;
    use rayon::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_sequence_of_one_follows_next() {
        let state = SeedState::new(3);
        let first = state.sequence_next();
        let second = state.sequence(1)[0];
        assert_eq!(first + 1, second);
    }

    #[test]
    fn test_sequence_is_ascending_run() {
        let state = SeedState::new(3);
        let run = state.sequence(10);
        assert_eq!(run.len(), 10);
        for pair in run.windows(2) {
            assert_eq!(pair[0] + 1, pair[1]);
        }
        assert_eq!(state.sequence_next(), run[9] + 1);
    }

    #[test]
    fn test_sequence_zero_leaves_cursor() {
        let state = SeedState::new(3);
        let before = state.sequence_next();
        assert!(state.sequence(0).is_empty());
        assert_eq!(state.sequence_next(), before + 1);
    }

    #[test]
    fn test_reseed_restarts_sequence() {
        let state = SeedState::new(2024);
        let first = state.sequence(5);
        state.set_seed(2024);
        assert_eq!(first, state.sequence(5));
    }

    #[test]
    fn test_concurrent_sequences_are_disjoint() {
        const SEQ_COUNT: usize = 8;
        const SEQ_SIZE: usize = 10;

        let state = SeedState::new(17);
        let first = state.sequence_next();

        let runs: Vec<Vec<u64>> = (0..SEQ_COUNT)
            .into_par_iter()
            .map(|_| state.sequence(SEQ_SIZE))
            .collect();

        let mut seen = HashSet::from([first]);
        for run in &runs {
            for pair in run.windows(2) {
                assert!(pair[0] < pair[1]);
            }
            for num in run {
                assert!(seen.insert(*num), "sequence number {} is not unique", num);
            }
        }

        let last = state.sequence_next();
        assert_eq!(last, first + (SEQ_COUNT * SEQ_SIZE) as u64 + 1);
    }
}
