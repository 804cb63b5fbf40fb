//! Reproducible random fixtures for tests.
//!
//! This crate generates pseudo-random test data that can be replayed exactly
//! by fixing a seed, while staying safe when many tests generate fixtures
//! concurrently without coordinating with each other.
//!
//! # Key Features
//!
//! - **Deterministic**: Resetting the seed and repeating the same calls
//!   produces identical output
//! - **Concurrency safe**: Every call derives its own random stream from an
//!   atomic cursor, so no two calls ever share a stream
//! - **Unique batches**: Addresses, CIDs and multihashes are unique within
//!   one call
//! - **Sequences**: Monotonic sequence numbers from a random starting point
//! - **File trees**: Randomized directory hierarchies for filesystem tests
//!
//! # Quick Start
//!
//! ```rust
//! use fixture_random::SeedState;
//!
//! let state = SeedState::new(42);
//! let first = state.bytes(32);
//!
//! // Replaying the seed replays the data.
//! state.set_seed(42);
//! assert_eq!(first, state.bytes(32));
//! ```
//!
//! # Process-wide State
//!
//! The free functions use a process-wide [`SeedState`] seeded from the clock.
//! Log [`seed()`] on failure and call [`set_seed`] with it to reproduce a run.
//!
//! ```rust
//! let addrs = fixture_random::addrs(3);
//! assert_eq!(addrs.len(), 3);
//! println!("reproduce with seed {}", fixture_random::seed());
//! ```
//!
//! # File Trees
//!
//! ```no_run
//! use fixture_random::files::{self, HierarchyConfig};
//!
//! let config = HierarchyConfig::builder().depth(3).dirs(2).files(4).seed(7).build();
//! files::create(&config, &["fixtures"])?;
//! # Ok::<(), fixture_random::FixtureError>(())
//! ```

pub mod block;
mod encode;
pub mod error;
pub mod files;
pub mod gen;
pub mod generators;
pub mod identity;
pub mod rng;
pub mod seed;
mod sequence;
mod values;

pub use block::Block;
pub use cid::Cid;
pub use error::{ConfigError, EncodeError, FixtureError};
pub use gen::{unique_batch, Gen, MAX_REJECTIONS_PER_ITEM};
pub use identity::{Identity, PeerId};
pub use multiaddr::Multiaddr;
pub use rng::Rand;
pub use seed::SeedState;

/// A multihash with room for digests up to 64 bytes.
pub type Multihash = cid::multihash::Multihash<64>;

/// Returns the seed of the process-wide state.
///
/// Calling [`set_seed`] with this value before generating fixtures makes the
/// same fixtures come out again.
pub fn seed() -> u64 {
    SeedState::global().seed()
}

/// Reseeds the process-wide state.
pub fn set_seed(seed: u64) {
    SeedState::global().set_seed(seed)
}

/// Returns `n` random bytes.
pub fn bytes(n: usize) -> Vec<u8> {
    SeedState::global().bytes(n)
}

/// Returns `n` unique `/ip4/../tcp/..` address strings.
pub fn addrs(n: usize) -> Vec<String> {
    SeedState::global().addrs(n)
}

/// Returns `n` unique multiaddrs.
pub fn multiaddrs(n: usize) -> Vec<Multiaddr> {
    SeedState::global().multiaddrs(n)
}

/// Returns `n` unique multiaddrs ending in `/http`.
pub fn http_multiaddrs(n: usize) -> Vec<Multiaddr> {
    SeedState::global().http_multiaddrs(n)
}

/// Returns `n` unique dag-json CIDs.
pub fn cids(n: usize) -> Vec<Cid> {
    SeedState::global().cids(n)
}

/// Returns `n` unique sha2-256 multihashes.
pub fn multihashes(n: usize) -> Vec<Multihash> {
    SeedState::global().multihashes(n)
}

/// Returns a random ed25519 identity.
pub fn identity() -> Identity {
    SeedState::global().identity()
}

/// Returns `n` random peer IDs.
pub fn peers(n: usize) -> Vec<PeerId> {
    SeedState::global().peers(n)
}

/// Returns `n` blocks of `size` random bytes each.
pub fn blocks_of_size(n: usize, size: usize) -> Vec<Block> {
    SeedState::global().blocks_of_size(n, size)
}

/// Returns the next process-wide sequence number.
pub fn sequence_next() -> u64 {
    SeedState::global().sequence_next()
}

/// Reserves `n` consecutive process-wide sequence numbers.
pub fn sequence(n: usize) -> Vec<u64> {
    SeedState::global().sequence(n)
}
