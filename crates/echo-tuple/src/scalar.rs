// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Scalar arithmetic abstraction for Echo tuple and bound types.
//!
//! Bounds only need ordering, the four arithmetic operators, negation, `abs`
//! and one half. Keeping the surface this small lets the same bound
//! code run over `f32` (the runtime default) and `f64` (tooling/offline use).
//!
//! NaN contract:
//! - [`Scalar::min_of`] and [`Scalar::max_of`] are plain `<`/`>` selections.
//!   When either operand is NaN the receiver is returned; callers that care
//!   must filter NaN before it reaches a bound.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Numeric type usable as a per-axis coordinate.
pub trait Scalar:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Returns one half; used for midpoints.
    fn half() -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Returns the smaller of `self` and `other`.
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of `self` and `other`.
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                fn half() -> Self {
                    0.5
                }

                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn min_max_select_by_order() {
        assert_eq!(3.0_f32.min_of(-1.0), -1.0);
        assert_eq!(3.0_f32.max_of(-1.0), 3.0);
        assert_eq!((-2.5_f64).min_of(-2.5), -2.5);
    }

    #[test]
    fn nan_operand_keeps_receiver() {
        assert_eq!(1.0_f32.min_of(f32::NAN), 1.0);
        assert_eq!(1.0_f32.max_of(f32::NAN), 1.0);
        assert!(f32::NAN.min_of(1.0).is_nan());
    }

    #[test]
    fn half_and_abs() {
        assert_eq!(<f32 as Scalar>::half(), 0.5);
        assert_eq!(Scalar::abs(-4.0_f32), 4.0);
    }
}
