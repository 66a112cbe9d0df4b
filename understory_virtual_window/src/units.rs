// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Design-unit to device-pixel conversion.
//!
//! Lengths in list options are authored against a fixed nominal screen width of
//! [`REFERENCE_WIDTH`] design units. A device that is `w` pixels wide maps one
//! design unit to `w / REFERENCE_WIDTH` pixels.
//!
//! ```rust
//! use understory_virtual_window::{UnitConverter, to_pixels};
//!
//! // A 375px-wide device renders a 150-unit row at 75px.
//! assert_eq!(to_pixels(150.0_f64, 375.0), 75.0);
//!
//! let converter = UnitConverter::new(375.0_f64).unwrap();
//! assert_eq!(converter.to_pixels(150.0), 75.0);
//! assert_eq!(converter.to_design_units(75.0), 150.0);
//!
//! // No valid device width, no converter.
//! assert!(UnitConverter::new(0.0_f64).is_none());
//! ```

use crate::Scalar;

/// Nominal screen width, in design units, that option lengths are authored against.
pub const REFERENCE_WIDTH: usize = 750;

/// Converts `length` design units into pixels for a device `device_width` pixels wide.
///
/// Callers must only pass a real device width measurement; see [`UnitConverter::new`]
/// for a checked variant.
#[must_use]
pub fn to_pixels<S: Scalar>(length: S, device_width: S) -> S {
    length * (device_width / S::from_usize(REFERENCE_WIDTH))
}

/// Unit conversion bound to one device width measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitConverter<S: Scalar> {
    device_width: S,
}

impl<S: Scalar> UnitConverter<S> {
    /// Creates a converter for the given device width in pixels.
    ///
    /// Returns `None` when `device_width` is not a finite, strictly positive number.
    #[must_use]
    pub fn new(device_width: S) -> Option<Self> {
        device_width
            .is_positive_length()
            .then_some(Self { device_width })
    }

    /// The device width this converter was built from.
    #[must_use]
    pub fn device_width(&self) -> S {
        self.device_width
    }

    /// Converts design units to pixels.
    #[must_use]
    pub fn to_pixels(&self, length: S) -> S {
        to_pixels(length, self.device_width)
    }

    /// Converts pixels back to design units.
    #[must_use]
    pub fn to_design_units(&self, pixels: S) -> S {
        pixels * (S::from_usize(REFERENCE_WIDTH) / self.device_width)
    }
}
