//! Numeric types that can hold penalty values.

use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, Mul};

/// A primitive integer type used for penalties and penalty totals.
///
/// The total penalty of an alignment is accumulated in the same type as the
/// individual penalties. Arithmetic here is unchecked, so callers should pick
/// a width that can hold `(m + n)` times the largest single penalty, where
/// `m` and `n` are the sequence lengths.
///
/// Signed types are supported so that a caller-supplied negative gap penalty
/// can be rejected as an input error rather than wrapping. For unsigned types
/// that check is vacuously true.
pub trait Cost:
    Add<Output = Self> + Mul<Output = Self> + Eq + Ord + Hash + Copy + Send + Sync + Debug + Display
{
    /// The additive identity.
    const ZERO: Self;

    /// The maximum representable value.
    const MAX: Self;

    /// Whether this value is below zero. Always `false` for unsigned types.
    fn is_negative(self) -> bool;

    /// Casts a `usize` to `Self`. This may be a lossy conversion.
    fn from_usize(n: usize) -> Self;
}

/// Macro to implement `Cost` for all unsigned integer types.
macro_rules! impl_cost_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                fn is_negative(self) -> bool {
                    false
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }
            }
        )*
    }
}

impl_cost_unsigned!(u8, u16, u32, u64, u128, usize);

/// Macro to implement `Cost` for all signed integer types.
macro_rules! impl_cost_signed {
    ($($ty:ty),*) => {
        $(
            impl Cost for $ty {
                const ZERO: Self = 0;
                const MAX: Self = <$ty>::MAX;

                fn is_negative(self) -> bool {
                    self < 0
                }

                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_lossless
                )]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }
            }
        )*
    }
}

impl_cost_signed!(i8, i16, i32, i64, i128, isize);
