//! Typed identifiers that only move forward.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constraint::{IdValue, Identifier};
use crate::core::{UtilError, UtilResult};

/// Identifier wrapping an unsigned integer.
///
/// ```
/// use xrn_util::util::Id;
///
/// let mut id = Id::default();
/// assert_eq!(id.increment().unwrap(), Id::new(0));
/// assert_eq!(id.get(), 1);
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasicForwardId<T>(T);

/// Default identifier type.
pub type Id = BasicForwardId<u64>;

impl<T: IdValue> BasicForwardId<T> {
    /// Wrap a raw value.
    #[must_use]
    pub const fn new(value: T) -> Self {
        Self(value)
    }

    /// The raw value.
    #[must_use]
    pub const fn get(self) -> T {
        self.0
    }

    /// The following identifier, or `None` if the raw type is exhausted.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.successor().map(Self)
    }

    /// Move to the following identifier, returning the current one.
    ///
    /// # Errors
    ///
    /// Returns `UtilError::IdExhausted` (leaving `self` unchanged) when the raw
    /// type has no following value.
    pub fn increment(&mut self) -> UtilResult<Self> {
        let current = *self;
        *self = current
            .next()
            .ok_or_else(|| UtilError::IdExhausted(current.0.to_string()))?;
        Ok(current)
    }
}

impl<T: IdValue> From<T> for BasicForwardId<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: IdValue> Identifier for BasicForwardId<T> {
    type Value = T;

    fn id_value(&self) -> T {
        self.0
    }
}

impl<T: fmt::Display> fmt::Display for BasicForwardId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
