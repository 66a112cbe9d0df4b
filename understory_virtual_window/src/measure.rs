// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container measurement handshake.
//!
//! The scroll container's height is only known after it has been laid out, so
//! the host asks its platform for the geometry asynchronously. While that query
//! is in flight a bounded wait runs against it: if the real height has not
//! arrived by [`MeasureRequest::deadline`], the full display height is used
//! instead so the list never stays blank.
//!
//! ## Usage
//!
//! 1) Call [`Windower::attach`](crate::Windower::attach) when the list enters the
//!    display tree; it returns a [`MeasureRequest`].
//! 2) Start the platform geometry query, remembering [`MeasureRequest::attach_id`],
//!    and schedule a timer for [`MeasureRequest::deadline`].
//! 3) Report the outcome with [`Windower::on_container_measured`](crate::Windower::on_container_measured)
//!    or [`Windower::on_measure_failed`](crate::Windower::on_measure_failed).
//! 4) When the timer fires, call [`Windower::poll_measure_timeout`](crate::Windower::poll_measure_timeout).
//!    It is a no-op if the real measurement already won.

use alloc::string::String;
use core::fmt;
use core::time::Duration;

/// Whether the container height is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MeasureState {
    /// No usable container height yet; recompute requests do nothing.
    #[default]
    Unmeasured,
    /// The container height is known and windows are being computed.
    Measured,
}

/// Device display metrics, in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayMetrics {
    /// Display width; drives design-unit conversion.
    pub width: f64,
    /// Full display height; substituted when the container cannot be measured.
    pub height: f64,
}

impl DisplayMetrics {
    /// Creates display metrics from a width and height.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A pending container measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeasureRequest {
    /// Identifies the attach cycle; results for older cycles are discarded.
    pub attach_id: u64,
    /// Host time after which the fallback height applies.
    pub deadline: Duration,
}

/// Why a platform geometry query produced no height.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MeasureError {
    /// The container node was not found in the display tree.
    NodeNotFound,
    /// The platform query raised an error.
    Platform(String),
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NodeNotFound => f.write_str("list container node not found"),
            Self::Platform(message) => write!(f, "container query failed: {message}"),
        }
    }
}

impl core::error::Error for MeasureError {}

/// Measurement bookkeeping for one windower.
#[derive(Clone, Debug, Default)]
pub(crate) struct Measurement {
    attach_id: u64,
    attached: bool,
    state: MeasureState,
    container_height: f64,
    display: Option<DisplayMetrics>,
    deadline: Option<Duration>,
}

/// What a reported height did to the measurement.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum HeightChange {
    /// First usable height of this attach cycle.
    Measured,
    /// A remeasure changed the height.
    Resized,
    /// Nothing changed.
    Unchanged,
}

impl Measurement {
    pub(crate) fn attach(
        &mut self,
        display: DisplayMetrics,
        now: Duration,
        timeout: Duration,
    ) -> MeasureRequest {
        self.attach_id = self.attach_id.wrapping_add(1);
        self.attached = true;
        self.state = MeasureState::Unmeasured;
        self.container_height = 0.0;
        self.display = Some(display);
        let deadline = now.saturating_add(timeout);
        self.deadline = Some(deadline);
        MeasureRequest {
            attach_id: self.attach_id,
            deadline,
        }
    }

    pub(crate) fn detach(&mut self) {
        self.attached = false;
        self.state = MeasureState::Unmeasured;
        self.container_height = 0.0;
        self.deadline = None;
    }

    pub(crate) fn is_current(&self, attach_id: u64) -> bool {
        self.attached && self.attach_id == attach_id
    }

    pub(crate) fn state(&self) -> MeasureState {
        self.state
    }

    pub(crate) fn container_height(&self) -> f64 {
        self.container_height
    }

    pub(crate) fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Applies a reported height; zero and non-finite heights are ignored.
    pub(crate) fn apply_height(&mut self, height: f64) -> HeightChange {
        if !(height.is_finite() && height > 0.0) {
            return HeightChange::Unchanged;
        }
        match self.state {
            MeasureState::Unmeasured => {
                self.state = MeasureState::Measured;
                self.container_height = height;
                self.deadline = None;
                HeightChange::Measured
            }
            MeasureState::Measured if self.container_height != height => {
                self.container_height = height;
                HeightChange::Resized
            }
            MeasureState::Measured => HeightChange::Unchanged,
        }
    }

    /// Returns the fallback height if the bounded wait has elapsed while unmeasured.
    pub(crate) fn expired_fallback(&mut self, now: Duration) -> Option<f64> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        if self.state == MeasureState::Measured {
            return None;
        }
        self.display.map(|display| display.height)
    }
}
