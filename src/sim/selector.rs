//! Uniform door selection backed by a cryptographic entropy source.
//!
//! Every draw goes through [`RngCore::try_fill_bytes`], so an unavailable
//! entropy device comes back as an [`EntropyError`] rather than a panic deep
//! inside the generator.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};

use crate::sim::error::EntropyError;

/// Source of uniformly distributed door indices.
pub trait DoorSelector {
    /// Return an integer uniformly distributed over `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is zero.
    fn select(&mut self, bound: u32) -> Result<u32, EntropyError>;
}

/// A selector that can hand out independent selectors for parallel workers.
pub trait SplitSelector: DoorSelector + Sized + Send {
    /// Create a child selector whose draws are independent of `self`.
    fn split(&mut self) -> Result<Self, EntropyError>;
}

/// Door selector over any [`RngCore`] source.
///
/// Sampling rejects the top sliver of the 32-bit range that would otherwise
/// skew `value % bound` towards low doors.
#[derive(Debug, Clone)]
pub struct EntropySelector<R> {
    rng: R,
}

/// Production selector reading from the operating system CSPRNG.
pub type SecureSelector = EntropySelector<OsRng>;

/// Reproducible selector for tests and benchmarks.
pub type SeededSelector = EntropySelector<StdRng>;

impl<R: RngCore> EntropySelector<R> {
    /// Wrap an existing generator.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Consume the selector and return the underlying generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl SecureSelector {
    /// Selector backed by the operating system entropy source.
    pub fn secure() -> Self {
        Self::from_rng(OsRng)
    }
}

impl Default for SecureSelector {
    fn default() -> Self {
        Self::secure()
    }
}

impl SeededSelector {
    /// Deterministic selector. Not for reported results.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> DoorSelector for EntropySelector<R> {
    fn select(&mut self, bound: u32) -> Result<u32, EntropyError> {
        assert!(bound > 0, "selector bound must be positive");

        // Largest multiple of `bound` representable in u32.
        let zone = u32::MAX - u32::MAX % bound;
        let mut buf = [0u8; 4];
        loop {
            self.rng.try_fill_bytes(&mut buf)?;
            let value = u32::from_le_bytes(buf);
            if value < zone {
                return Ok(value % bound);
            }
        }
    }
}

impl SplitSelector for SecureSelector {
    fn split(&mut self) -> Result<Self, EntropyError> {
        Ok(Self::secure())
    }
}

impl SplitSelector for SeededSelector {
    fn split(&mut self) -> Result<Self, EntropyError> {
        let child = StdRng::from_rng(&mut self.rng)?;
        Ok(Self::from_rng(child))
    }
}
