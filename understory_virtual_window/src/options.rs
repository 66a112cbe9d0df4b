// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List configuration.

use alloc::string::String;
use core::fmt;
use core::time::Duration;

/// Default row height, in design units.
pub const DEFAULT_ITEM_HEIGHT: f64 = 150.0;

/// Default number of rows realized beyond each visible edge.
pub const DEFAULT_BUFFER_SIZE: usize = 5;

/// Default row key field name.
pub const DEFAULT_UNIQUE_KEY: &str = "id";

/// Default distance from the trailing edge, in pixels, that counts as reaching the end.
pub const DEFAULT_LOWER_THRESHOLD: f64 = 50.0;

/// Default bounded wait for the container measurement before falling back.
pub const DEFAULT_MEASURE_TIMEOUT_MS: u64 = 300;

/// Recognized list options.
///
/// With the `serde` feature the fields use camelCase keys (`itemHeight`,
/// `bufferSize`, `uniqueKey`, `lowerThreshold`, `measureTimeoutMs`) and any
/// missing key takes its default.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct VirtualListOptions {
    /// Height of every row, in design units.
    pub item_height: f64,
    /// Rows realized beyond each visible edge.
    pub buffer_size: usize,
    /// Name of the row field renderers use to key realized rows.
    pub unique_key: String,
    /// Distance from the trailing edge, in pixels, within which a scroll reports
    /// [`ListEvent::ScrollToLower`](crate::ListEvent::ScrollToLower).
    pub lower_threshold: f64,
    /// How long to wait for the container measurement before substituting the
    /// display height, in milliseconds.
    pub measure_timeout_ms: u64,
}

impl Default for VirtualListOptions {
    fn default() -> Self {
        Self {
            item_height: DEFAULT_ITEM_HEIGHT,
            buffer_size: DEFAULT_BUFFER_SIZE,
            unique_key: String::from(DEFAULT_UNIQUE_KEY),
            lower_threshold: DEFAULT_LOWER_THRESHOLD,
            measure_timeout_ms: DEFAULT_MEASURE_TIMEOUT_MS,
        }
    }
}

impl VirtualListOptions {
    /// Returns a copy with a different row height (design units).
    #[must_use]
    pub fn with_item_height(mut self, item_height: f64) -> Self {
        self.item_height = item_height;
        self
    }

    /// Returns a copy with a different buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Returns a copy with a different row key field name.
    #[must_use]
    pub fn with_unique_key(mut self, unique_key: impl Into<String>) -> Self {
        self.unique_key = unique_key.into();
        self
    }

    /// Returns a copy with a different lower-edge threshold (pixels).
    #[must_use]
    pub fn with_lower_threshold(mut self, lower_threshold: f64) -> Self {
        self.lower_threshold = lower_threshold;
        self
    }

    /// Returns a copy with a different measurement timeout.
    #[must_use]
    pub fn with_measure_timeout_ms(mut self, measure_timeout_ms: u64) -> Self {
        self.measure_timeout_ms = measure_timeout_ms;
        self
    }

    /// The measurement timeout as a [`Duration`].
    #[must_use]
    pub fn measure_timeout(&self) -> Duration {
        Duration::from_millis(self.measure_timeout_ms)
    }

    /// Checks that every length is usable.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if !(self.item_height.is_finite() && self.item_height > 0.0) {
            return Err(OptionsError::InvalidItemHeight(self.item_height));
        }
        if !(self.lower_threshold.is_finite() && self.lower_threshold >= 0.0) {
            return Err(OptionsError::InvalidLowerThreshold(self.lower_threshold));
        }
        if self.unique_key.is_empty() {
            return Err(OptionsError::EmptyUniqueKey);
        }
        Ok(())
    }
}

/// Error returned when [`VirtualListOptions`] cannot drive a list.
#[derive(Clone, Debug, PartialEq)]
pub enum OptionsError {
    /// `item_height` must be finite and greater than zero.
    InvalidItemHeight(f64),
    /// `lower_threshold` must be finite and not negative.
    InvalidLowerThreshold(f64),
    /// `unique_key` must name a field.
    EmptyUniqueKey,
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidItemHeight(value) => {
                write!(f, "item height must be a positive length, got {value}")
            }
            Self::InvalidLowerThreshold(value) => {
                write!(f, "lower threshold must be a non-negative length, got {value}")
            }
            Self::EmptyUniqueKey => f.write_str("unique key field name is empty"),
        }
    }
}

impl core::error::Error for OptionsError {}
