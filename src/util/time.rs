//! Millisecond-based time values.
//!
//! [`BasicTime`] holds an amount of milliseconds in a numeric type of your
//! choice and converts from and to seconds, microseconds, nanoseconds and
//! [`Duration`]. Arithmetic works against another `BasicTime` or against a raw
//! value, which is read as milliseconds.
//!
//! ```
//! use xrn_util::util::{IntoTime, Time};
//!
//! let t1 = Time::from_secs(0.1);
//! assert_eq!(t1.as_millis(), 100.0);
//!
//! let t2 = Time::from_nanos(-800_000.0);
//! assert_eq!(t1 + t2, 99.2);
//! assert_eq!(t1 + (-800_000.0_f32).nanos(), 99.2);
//! assert_eq!(t1 + 55.0, 155.0);
//! assert_eq!(55.0_f32 + t1, 155.0);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constraint::{Scalar, TimeValue};

const MILLIS_PER_SEC: f64 = 1_000.0;
const MICROS_PER_MILLI: f64 = 1_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// An amount of time, stored as milliseconds of type `T`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BasicTime<T> {
    millis: T,
}

/// Default time type.
pub type Time = BasicTime<f32>;

impl<T: Scalar> BasicTime<T> {
    /// Time of `millis` milliseconds.
    #[must_use]
    pub const fn new(millis: T) -> Self {
        Self { millis }
    }

    /// Time of `amount` seconds.
    #[must_use]
    pub fn from_secs(amount: T) -> Self {
        Self::new(T::from_f64(amount.to_f64() * MILLIS_PER_SEC))
    }

    /// Time of `amount` milliseconds.
    #[must_use]
    pub const fn from_millis(amount: T) -> Self {
        Self::new(amount)
    }

    /// Time of `amount` microseconds.
    #[must_use]
    pub fn from_micros(amount: T) -> Self {
        Self::new(T::from_f64(amount.to_f64() / MICROS_PER_MILLI))
    }

    /// Time of `amount` nanoseconds.
    #[must_use]
    pub fn from_nanos(amount: T) -> Self {
        Self::new(T::from_f64(amount.to_f64() / NANOS_PER_MILLI))
    }

    /// The stored amount, in milliseconds.
    #[must_use]
    pub const fn get(&self) -> T {
        self.millis
    }

    /// Replace the stored amount.
    pub fn set(&mut self, amount: impl Into<Self>) {
        *self = amount.into();
    }

    /// The amount in seconds.
    #[must_use]
    pub fn as_secs(&self) -> T {
        T::from_f64(self.millis.to_f64() / MILLIS_PER_SEC)
    }

    /// The amount in milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> T {
        self.millis
    }

    /// The amount in microseconds.
    #[must_use]
    pub fn as_micros(&self) -> T {
        T::from_f64(self.millis.to_f64() * MICROS_PER_MILLI)
    }

    /// The amount in nanoseconds.
    #[must_use]
    pub fn as_nanos(&self) -> T {
        T::from_f64(self.millis.to_f64() * NANOS_PER_MILLI)
    }

    /// Convert to a [`Duration`]. Negative and NaN amounts become
    /// `Duration::ZERO`; amounts too large for a `Duration` become `Duration::MAX`.
    #[must_use]
    pub fn to_duration(&self) -> Duration {
        let secs = self.millis.to_f64() / MILLIS_PER_SEC;
        if secs.is_nan() || secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }
}

impl<T: Scalar> From<Duration> for BasicTime<T> {
    fn from(duration: Duration) -> Self {
        Self::new(T::from_f64(duration.as_secs_f64() * MILLIS_PER_SEC))
    }
}

impl<T: Scalar> TimeValue for BasicTime<T> {
    type Scalar = T;

    fn as_millis(&self) -> T {
        self.millis
    }
}

impl<T: fmt::Display> fmt::Display for BasicTime<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

macro_rules! impl_time_ops {
    ($($op:ident :: $method:ident, $assign:ident :: $assign_method:ident);* $(;)?) => {
        $(
            impl<T: Scalar> $op for BasicTime<T> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self::new(self.millis.$method(rhs.millis))
                }
            }

            impl<T: Scalar> $assign for BasicTime<T> {
                #[inline]
                fn $assign_method(&mut self, rhs: Self) {
                    self.millis = self.millis.$method(rhs.millis);
                }
            }
        )*
    };
}

impl_time_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
    Rem::rem, RemAssign::rem_assign;
}

impl<T: Scalar + Neg<Output = T>> Neg for BasicTime<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.millis)
    }
}

// Raw values on either side of an operator are read as milliseconds.
macro_rules! impl_raw_ops {
    (@arith $t:ty; $($op:ident :: $method:ident, $assign:ident :: $assign_method:ident);*) => {
        $(
            impl $op<$t> for BasicTime<$t> {
                type Output = Self;

                #[inline]
                fn $method(self, rhs: $t) -> Self {
                    Self::new(self.millis.$method(rhs))
                }
            }

            impl $assign<$t> for BasicTime<$t> {
                #[inline]
                fn $assign_method(&mut self, rhs: $t) {
                    self.millis = self.millis.$method(rhs);
                }
            }
        )*
    };
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for BasicTime<$t> {
                #[inline]
                fn from(millis: $t) -> Self {
                    Self::new(millis)
                }
            }

            impl PartialEq<$t> for BasicTime<$t> {
                #[inline]
                fn eq(&self, other: &$t) -> bool {
                    self.millis == *other
                }
            }

            impl PartialOrd<$t> for BasicTime<$t> {
                #[inline]
                fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                    self.millis.partial_cmp(other)
                }
            }

            impl PartialEq<BasicTime<$t>> for $t {
                #[inline]
                fn eq(&self, other: &BasicTime<$t>) -> bool {
                    *self == other.millis
                }
            }

            impl_raw_ops!(@arith $t;
                Add::add, AddAssign::add_assign;
                Sub::sub, SubAssign::sub_assign;
                Mul::mul, MulAssign::mul_assign;
                Div::div, DivAssign::div_assign;
                Rem::rem, RemAssign::rem_assign);

            impl Add<BasicTime<$t>> for $t {
                type Output = BasicTime<$t>;

                #[inline]
                fn add(self, rhs: BasicTime<$t>) -> BasicTime<$t> {
                    BasicTime::new(self + rhs.millis)
                }
            }

            impl Sub<BasicTime<$t>> for $t {
                type Output = BasicTime<$t>;

                #[inline]
                fn sub(self, rhs: BasicTime<$t>) -> BasicTime<$t> {
                    BasicTime::new(self - rhs.millis)
                }
            }

            impl Mul<BasicTime<$t>> for $t {
                type Output = BasicTime<$t>;

                #[inline]
                fn mul(self, rhs: BasicTime<$t>) -> BasicTime<$t> {
                    BasicTime::new(self * rhs.millis)
                }
            }
        )*
    };
}

impl_raw_ops!(f32, f64, i32, i64, u32, u64);

/// Build a [`Time`] from a raw number, in the unit the method names.
///
/// ```
/// use xrn_util::util::{IntoTime, Time};
///
/// assert_eq!(1_i32.secs(), Time::from_secs(1.0));
/// assert_eq!(1_000_000_000_u64.nanos(), 1_000_u32.ms());
/// ```
pub trait IntoTime {
    /// Seconds.
    fn secs(self) -> Time;
    /// Milliseconds.
    fn ms(self) -> Time;
    /// Microseconds.
    fn micros(self) -> Time;
    /// Nanoseconds.
    fn nanos(self) -> Time;
}

macro_rules! impl_into_time {
    ($($t:ty),* $(,)?) => {
        $(
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_lossless)]
            impl IntoTime for $t {
                #[inline]
                fn secs(self) -> Time {
                    Time::new((self as f64 * MILLIS_PER_SEC) as f32)
                }

                #[inline]
                fn ms(self) -> Time {
                    Time::new(self as f32)
                }

                #[inline]
                fn micros(self) -> Time {
                    Time::new((self as f64 / MICROS_PER_MILLI) as f32)
                }

                #[inline]
                fn nanos(self) -> Time {
                    Time::new((self as f64 / NANOS_PER_MILLI) as f32)
                }
            }
        )*
    };
}

impl_into_time!(f32, f64, i32, i64, u32, u64);
