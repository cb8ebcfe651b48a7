//! Random number generation over an inclusive range.
//!
//! Generators are plain values: create one where it is needed (or seed one for
//! reproducible tests) and pass it along instead of sharing a global.
//!
//! ```
//! use xrn_util::util::Rng;
//!
//! let mut rng = Rng::with_range(5, 10).unwrap();
//! let n = rng.generate();
//! assert!((5..=10).contains(&n));
//!
//! let m = rng.generate_in(0, 3).unwrap();
//! assert!((0..=3).contains(&m));
//! ```

use std::fmt;

use rand::distr::uniform::SampleUniform;
use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng};

use super::constraint::Scalar;
use crate::core::{UtilError, UtilResult};

/// Lower bound of the default range.
pub const DEFAULT_RANGE_MIN: f64 = 0.0;
/// Upper bound of the default range.
pub const DEFAULT_RANGE_MAX: f64 = 100.0;

/// Uniform generator of `T` values within an inclusive default range.
pub struct BasicRandomNumberGenerator<T> {
    rng: StdRng,
    min: T,
    max: T,
}

/// Default generator type.
pub type Rng = BasicRandomNumberGenerator<i32>;

impl<T: Scalar + SampleUniform> BasicRandomNumberGenerator<T> {
    /// Generator seeded from the OS, with the default range `[0, 100]`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// Generator seeded from the OS, with the default range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `UtilError::InvalidRange` if `min > max`, if either bound is NaN or
    /// infinite, or if `max - min` overflows.
    pub fn with_range(min: T, max: T) -> UtilResult<Self> {
        check_range(min, max)?;
        Ok(Self {
            rng: StdRng::from_os_rng(),
            min,
            max,
        })
    }

    /// Deterministic generator with the default range `[0, 100]`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Deterministic generator with the default range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns `UtilError::InvalidRange` if `min > max`, if either bound is NaN or
    /// infinite, or if `max - min` overflows.
    pub fn with_seeded_range(seed: u64, min: T, max: T) -> UtilResult<Self> {
        check_range(min, max)?;
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            min,
            max,
        })
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            min: T::from_f64(DEFAULT_RANGE_MIN),
            max: T::from_f64(DEFAULT_RANGE_MAX),
        }
    }

    /// A value in the default range (inclusive).
    pub fn generate(&mut self) -> T {
        self.rng.random_range(self.min..=self.max)
    }

    /// A value in `[min, max]` (inclusive).
    ///
    /// # Errors
    ///
    /// Returns `UtilError::InvalidRange` if `min > max`, if either bound is NaN or
    /// infinite, or if `max - min` overflows.
    pub fn generate_in(&mut self, min: T, max: T) -> UtilResult<T> {
        check_range(min, max)?;
        Ok(self.rng.random_range(min..=max))
    }

    /// The default range as `(min, max)`.
    #[must_use]
    pub const fn range(&self) -> (T, T) {
        (self.min, self.max)
    }
}

impl<T: Scalar + SampleUniform> Default for BasicRandomNumberGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for BasicRandomNumberGenerator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicRandomNumberGenerator")
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

/// Reject every range `random_range` would panic on.
fn check_range<T: Scalar>(min: T, max: T) -> UtilResult<()> {
    // `<=` is false for NaN bounds.
    if min <= max && T::has_finite_span(min, max) {
        Ok(())
    } else {
        Err(UtilError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        })
    }
}
