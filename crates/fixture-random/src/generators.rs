//! Built-in generators for fixture values.

use crate::gen::Gen;
use ed25519_dalek::SigningKey;
use rand::distributions::{Distribution, Uniform as UniformDist};
use rand::{Rng, RngCore};
use std::ops::RangeInclusive;

/// Generate a value uniformly distributed in the given inclusive range.
pub struct Uniform<T> {
    range: RangeInclusive<T>,
}

impl<T> Uniform<T> {
    pub fn new(range: RangeInclusive<T>) -> Self {
        Self { range }
    }
}

impl Gen<i32> for Uniform<i32> {
    fn generate(&self, rng: &mut dyn RngCore) -> i32 {
        UniformDist::new_inclusive(*self.range.start(), *self.range.end()).sample(rng)
    }
}

impl Gen<i64> for Uniform<i64> {
    fn generate(&self, rng: &mut dyn RngCore) -> i64 {
        UniformDist::new_inclusive(*self.range.start(), *self.range.end()).sample(rng)
    }
}

impl Gen<usize> for Uniform<usize> {
    fn generate(&self, rng: &mut dyn RngCore) -> usize {
        UniformDist::new_inclusive(*self.range.start(), *self.range.end()).sample(rng)
    }
}

/// Convenience function to create a uniform generator.
pub fn uniform<T>(range: RangeInclusive<T>) -> Uniform<T> {
    Uniform::new(range)
}

/// Generate a fixed number of random bytes.
pub struct Payload {
    len: usize,
}

impl Gen<Vec<u8>> for Payload {
    fn generate(&self, rng: &mut dyn RngCore) -> Vec<u8> {
        let mut bytes = vec![0u8; self.len];
        rng.fill_bytes(&mut bytes);
        bytes
    }
}

/// Convenience function to create a payload generator.
pub fn payload(len: usize) -> Payload {
    Payload { len }
}

/// Generate `/ip4/A.B.C.D/tcp/PORT` address strings.
///
/// The first octet is in `0..=254`, the others in `1..=254`, and the port
/// stays clear of the reserved range below 1024.
pub struct Ip4TcpAddr;

impl Ip4TcpAddr {
    pub const MIN_PORT: u16 = 1024;
    pub const MAX_PORT: u16 = 49180;
}

impl Gen<String> for Ip4TcpAddr {
    fn generate(&self, rng: &mut dyn RngCore) -> String {
        let a = rng.gen_range(0..=254u8);
        let b = rng.gen_range(1..=254u8);
        let c = rng.gen_range(1..=254u8);
        let d = rng.gen_range(1..=254u8);
        let port = rng.gen_range(Self::MIN_PORT..=Self::MAX_PORT);
        format!("/ip4/{}.{}.{}.{}/tcp/{}", a, b, c, d, port)
    }
}

/// Generate ed25519 signing keys from 32 bytes of the random source.
pub struct SigningKeyGen;

impl Gen<SigningKey> for SigningKeyGen {
    fn generate(&self, rng: &mut dyn RngCore) -> SigningKey {
        let mut secret = [0u8; 32];
        rng.fill_bytes(&mut secret);
        SigningKey::from_bytes(&secret)
    }
}
