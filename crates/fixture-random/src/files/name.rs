//! Random file and directory names.

use crate::error::ConfigError;
use crate::gen::Gen;
use crate::generators::uniform;
use crate::rng;
use rand::{Rng, RngCore};

/// Shortest name length accepted anywhere.
pub const MINIMUM_NAME_SIZE: usize = 1;
pub const DEFAULT_NAME_MIN_SIZE: usize = 4;
pub const DEFAULT_NAME_MAX_SIZE: usize = 16;

const NAME_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz01234567890-_";

/// Length of a name passed to [`random_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NameSize {
    /// Between the default minimum and maximum lengths.
    #[default]
    Default,
    /// Exactly this many characters.
    Fixed(usize),
    /// Between the two lengths, inclusive, in either order.
    Between(usize, usize),
}

impl NameSize {
    /// Resolve into a name generator, checking the length bounds.
    pub fn resolve(self) -> Result<NameGen, ConfigError> {
        let (min, max) = match self {
            NameSize::Default => (DEFAULT_NAME_MIN_SIZE, DEFAULT_NAME_MAX_SIZE),
            NameSize::Fixed(size) => (size, size),
            NameSize::Between(a, b) => (a.min(b), a.max(b)),
        };
        NameGen::new(min, max)
    }
}

/// Generate a random file or directory name.
///
/// # Panics
///
/// Panics if the size is below [`MINIMUM_NAME_SIZE`]. A bad size here is a
/// mistake at the call site; use [`NameSize::resolve`] to check it instead.
///
/// # Example
/// ```
/// use fixture_random::files::{random_name, NameSize};
///
/// assert_eq!(random_name(NameSize::Fixed(3)).len(), 3);
///
/// let name = random_name(NameSize::Between(16, 4));
/// assert!((4..=16).contains(&name.len()));
/// ```
pub fn random_name(size: NameSize) -> String {
    let names = size
        .resolve()
        .unwrap_or_else(|err| panic!("invalid name size {:?}: {}", size, err));
    names.generate(&mut rng::from_time())
}

/// Number of distinct names with a length in `[min, max]`, saturating at
/// `u64::MAX`.
pub(crate) fn name_capacity(min: usize, max: usize) -> u64 {
    let mut seen = [false; 256];
    let mut distinct = 0u64;
    for &c in NAME_ALPHABET {
        if !seen[c as usize] {
            seen[c as usize] = true;
            distinct += 1;
        }
    }

    let mut total = 0u64;
    for len in min..=max {
        let names = u32::try_from(len)
            .ok()
            .and_then(|len| distinct.checked_pow(len))
            .unwrap_or(u64::MAX);
        total = total.saturating_add(names);
        if total == u64::MAX {
            break;
        }
    }
    total
}

pub(crate) fn validate_name_size(min: usize, max: usize) -> Result<(), ConfigError> {
    if min < MINIMUM_NAME_SIZE {
        return Err(ConfigError::NameTooShort {
            minimum: MINIMUM_NAME_SIZE,
            size: min,
        });
    }
    if max < min {
        return Err(ConfigError::NameBoundsInverted { min, max });
    }
    Ok(())
}

/// Generates names with a length uniformly chosen in `[min, max]`.
#[derive(Debug, Clone, Copy)]
pub struct NameGen {
    min: usize,
    max: usize,
}

impl NameGen {
    pub fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        validate_name_size(min, max)?;
        Ok(Self { min, max })
    }
}

impl Gen<String> for NameGen {
    fn generate(&self, rng: &mut dyn RngCore) -> String {
        let len = if self.min == self.max {
            self.min
        } else {
            uniform(self.min..=self.max).generate(rng)
        };
        (0..len)
            .map(|_| NAME_ALPHABET[rng.gen_range(0..NAME_ALPHABET.len())] as char)
            .collect()
    }
}
