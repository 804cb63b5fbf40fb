//! Core generator trait and batch helpers.

use rand::RngCore;
use std::collections::HashSet;
use std::hash::Hash;
use tracing::trace;

/// Discarded draws allowed per requested item before a unique batch gives up.
pub const MAX_REJECTIONS_PER_ITEM: usize = 1024;

/// Draws fixture values of type `T` from a caller-supplied random stream.
///
/// A generator holds no randomness of its own; the same stream state always
/// yields the same value.
pub trait Gen<T> {
    /// Draw one value from `rng`.
    fn generate(&self, rng: &mut dyn RngCore) -> T;

    /// Post-process every drawn value with `f`.
    fn map<U, F>(self, f: F) -> Mapped<Self, F, T>
    where
        Self: Sized,
        F: Fn(T) -> U,
    {
        Mapped {
            gen: self,
            f,
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Generator returned by [`Gen::map`].
pub struct Mapped<G, F, T> {
    gen: G,
    f: F,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, U, G, F> Gen<U> for Mapped<G, F, T>
where
    G: Gen<T>,
    F: Fn(T) -> U,
{
    fn generate(&self, rng: &mut dyn RngCore) -> U {
        (self.f)(self.gen.generate(rng))
    }
}

/// Generate `n` distinct values, redrawing any value already in the batch.
///
/// A redraw does not use up an output slot, so the batch always has exactly
/// `n` values.
///
/// # Panics
///
/// Panics after `MAX_REJECTIONS_PER_ITEM * n` discarded draws. The generators
/// in this crate draw from spaces far larger than any realistic batch, so
/// reaching the cap means the generator is broken.
pub fn unique_batch<T, G>(gen: &G, rng: &mut dyn RngCore, n: usize) -> Vec<T>
where
    T: Eq + Hash + Clone,
    G: Gen<T> + ?Sized,
{
    let max_rejections = MAX_REJECTIONS_PER_ITEM.saturating_mul(n);
    let mut seen = HashSet::with_capacity(n);
    let mut values = Vec::with_capacity(n);
    let mut rejections = 0;

    while values.len() < n {
        let value = gen.generate(rng);
        if seen.contains(&value) {
            rejections += 1;
            trace!(rejections, "redrawing duplicate batch value");
            if rejections > max_rejections {
                panic!(
                    "unique batch of {} gave up after {} duplicate draws",
                    n, rejections
                );
            }
            continue;
        }
        seen.insert(value.clone());
        values.push(value);
    }

    values
}
