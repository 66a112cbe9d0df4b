// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction used for pixel and design-unit lengths.
//!
//! Only implemented for `f32` and `f64`. Rounding helpers avoid `libm` by going
//! through saturating float-to-int casts, which is exact for the non-negative
//! values the windowing math feeds them.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Sub};

/// Scalar type used for lengths, offsets, and scroll positions.
///
/// The trait is deliberately minimal and geared toward floating-point
/// coordinates in a 1D pixel space.
pub trait Scalar:
    Copy
    + PartialOrd
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity (typically `0.0`).
    fn zero() -> Self;

    /// Returns the maximum of `self` and `other`.
    fn max(self, other: Self) -> Self;

    /// Returns the minimum of `self` and `other`.
    fn min(self, other: Self) -> Self;

    /// Returns `true` if the value is finite (not NaN or infinite).
    fn is_finite(self) -> bool;

    /// Returns `true` if the value is negative, including `-0.0`.
    fn is_sign_negative(self) -> bool;

    /// Constructs from a `usize` lossily.
    fn from_usize(value: usize) -> Self;

    /// Returns the absolute value.
    fn abs(self) -> Self {
        if self.is_sign_negative() {
            Self::zero() - self
        } else {
            self
        }
    }

    /// Clamps negative values to zero.
    fn clamp_non_negative(self) -> Self {
        if self.is_sign_negative() {
            Self::zero()
        } else {
            self
        }
    }

    /// Maps NaN, infinities, and negative values to zero.
    fn sanitize_length(self) -> Self {
        if self.is_finite() {
            self.clamp_non_negative()
        } else {
            Self::zero()
        }
    }

    /// Returns `true` for finite values strictly greater than zero.
    fn is_positive_length(self) -> bool {
        self.is_finite() && self > Self::zero()
    }

    /// Floors the value and converts it to `isize`.
    ///
    /// Only exact for non-negative inputs; callers are expected to clamp the
    /// result to a valid index range afterwards.
    fn floor_to_isize(self) -> isize;

    /// Ceils the value and converts it to `isize`, saturating at the bounds.
    ///
    /// Only exact for non-negative inputs.
    fn ceil_to_isize(self) -> isize {
        let truncated = self.floor_to_isize();
        if truncated == isize::MAX {
            return truncated;
        }
        let back = Self::from_usize(usize::try_from(truncated).unwrap_or(0));
        if truncated >= 0 && back < self {
            truncated + 1
        } else {
            truncated
        }
    }
}

impl Scalar for f32 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}

impl Scalar for f64 {
    fn zero() -> Self {
        0.0
    }

    fn max(self, other: Self) -> Self {
        Self::max(self, other)
    }

    fn min(self, other: Self) -> Self {
        Self::min(self, other)
    }

    fn is_finite(self) -> bool {
        Self::is_finite(self)
    }

    fn is_sign_negative(self) -> bool {
        Self::is_sign_negative(self)
    }

    fn from_usize(value: usize) -> Self {
        value as Self
    }

    fn floor_to_isize(self) -> isize {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Used only for index approximation; result is clamped immediately after"
        )]
        {
            self as isize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Scalar;

    #[test]
    fn floor_and_ceil_agree_on_whole_numbers() {
        assert_eq!(20.0_f64.floor_to_isize(), 20);
        assert_eq!(20.0_f64.ceil_to_isize(), 20);
        assert_eq!(0.0_f32.ceil_to_isize(), 0);
    }

    #[test]
    fn ceil_rounds_fractions_up() {
        assert_eq!(20.25_f64.floor_to_isize(), 20);
        assert_eq!(20.25_f64.ceil_to_isize(), 21);
        assert_eq!(0.5_f32.ceil_to_isize(), 1);
    }

    #[test]
    fn huge_values_saturate() {
        assert_eq!(f64::MAX.floor_to_isize(), isize::MAX);
        assert_eq!(f64::MAX.ceil_to_isize(), isize::MAX);
    }

    #[test]
    fn sanitize_length_drops_nan_and_negatives() {
        assert_eq!(f64::NAN.sanitize_length(), 0.0);
        assert_eq!(f64::INFINITY.sanitize_length(), 0.0);
        assert_eq!((-3.0_f64).sanitize_length(), 0.0);
        assert_eq!(4.5_f64.sanitize_length(), 4.5);
        assert_eq!((-4.5_f32).abs(), 4.5);
    }
}
