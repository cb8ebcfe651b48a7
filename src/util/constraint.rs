//! Capability traits tagging the utility wrapper family for generic code.
//!
//! The wrappers and the raw values they hold are interchangeable wherever one
//! of these traits is the bound: a raw `u64` is an [`Identifier`] like
//! [`Id`](crate::util::Id) is, and a raw `f32` is a [`TimeValue`] counted in
//! milliseconds like [`Time`](crate::util::Time) is.

use std::fmt;
use std::hash::Hash;
use std::ops::{Add, Div, Mul, Rem, Sub};

use super::time::BasicTime;

/// Numeric type usable inside [`BasicTime`] and the random generator.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Convert from `f64`. Integer types truncate toward zero and saturate.
    fn from_f64(value: f64) -> Self;

    /// Convert to `f64`.
    fn to_f64(self) -> f64;

    /// Whether `low`, `high` and the width `high - low` are all finite.
    /// Always true for integers.
    fn has_finite_span(low: Self, high: Self) -> bool;
}

macro_rules! impl_scalar {
    (@convert) => {
        #[inline]
        fn from_f64(value: f64) -> Self {
            value as Self
        }

        #[inline]
        fn to_f64(self) -> f64 {
            self as f64
        }
    };
    (float: $($f:ty),*; int: $($i:ty),* $(,)?) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
            impl Scalar for $f {
                impl_scalar!(@convert);

                #[inline]
                fn has_finite_span(low: Self, high: Self) -> bool {
                    low.is_finite() && high.is_finite() && (high - low).is_finite()
                }
            }
        )*
        $(
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss,
                clippy::cast_lossless
            )]
            impl Scalar for $i {
                impl_scalar!(@convert);

                #[inline]
                fn has_finite_span(_low: Self, _high: Self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_scalar!(float: f32, f64; int: i32, i64, u32, u64);

/// Integer type usable inside [`BasicForwardId`](crate::util::BasicForwardId).
pub trait IdValue:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// The next value, or `None` on overflow.
    fn successor(self) -> Option<Self>;
}

/// Something that behaves as an identifier.
pub trait Identifier {
    /// Raw value type.
    type Value: IdValue;

    /// The raw identifier value.
    fn id_value(&self) -> Self::Value;
}

macro_rules! impl_id_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl IdValue for $t {
                #[inline]
                fn successor(self) -> Option<Self> {
                    self.checked_add(1)
                }
            }

            impl Identifier for $t {
                type Value = $t;

                #[inline]
                fn id_value(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_id_value!(u8, u16, u32, u64, usize);

/// Something that behaves as a time amount.
pub trait TimeValue {
    /// Numeric type of the millisecond amount.
    type Scalar: Scalar;

    /// The amount in milliseconds.
    fn as_millis(&self) -> Self::Scalar;

    /// The amount as a [`BasicTime`].
    fn to_time(&self) -> BasicTime<Self::Scalar> {
        BasicTime::new(self.as_millis())
    }
}

macro_rules! impl_raw_time_value {
    ($($t:ty),* $(,)?) => {
        $(
            impl TimeValue for $t {
                type Scalar = $t;

                #[inline]
                fn as_millis(&self) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_raw_time_value!(f32, f64, i32, i64, u32, u64);

/// Something that measures elapsed time.
pub trait ClockSource {
    /// Numeric type of the measured times.
    type Scalar: Scalar;

    /// Time elapsed since the last (re)start.
    fn elapsed(&self) -> BasicTime<Self::Scalar>;

    /// Restart the measurement, returning the time elapsed until now.
    fn restart(&mut self) -> BasicTime<Self::Scalar>;

    /// Restart the measurement, discarding the elapsed time.
    fn reset(&mut self);
}
