// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trailing-edge detection for "load more" style lists.
//!
//! [`LowerEdge`] decides when a scroll position is close enough to the end of
//! the content to tell the owner that more rows would be welcome:
//!
//! - The lower scroll offset is where the last pixel of content meets the
//!   bottom of the viewport (`content - viewport`, or `0` when everything fits).
//! - An offset counts as "near the lower edge" if it is within `threshold`
//!   *above* that position.
//! - The detector is edge-triggered: it reports once when a scroll enters the
//!   zone and stays quiet until the offset leaves it again or the row set is
//!   replaced ([`LowerEdge::rearm`]).
//!
//! The detector only notifies. Fetching, de-duplicating requests, and deciding
//! when there is nothing left to load belong to the owner.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_virtual_window::LowerEdge;
//!
//! // 1000px of content in a 300px viewport; report within 50px of the end.
//! let mut edge = LowerEdge::new(50.0);
//! assert!(!edge.observe(400.0, 300.0, 1000.0));
//! assert!(edge.observe(660.0, 300.0, 1000.0));
//! // Still in the zone: no repeat.
//! assert!(!edge.observe(700.0, 300.0, 1000.0));
//!
//! // New rows arrived.
//! edge.rearm();
//! assert!(!edge.observe(700.0, 300.0, 2000.0));
//! assert!(edge.observe(1690.0, 300.0, 2000.0));
//! ```

/// Edge-triggered trailing-edge detector.
#[derive(Debug, Clone)]
pub struct LowerEdge {
    threshold: f64,
    armed: bool,
}

impl LowerEdge {
    /// Creates a detector that reports within `threshold` pixels of the end.
    ///
    /// Negative or non-finite thresholds are treated as `0`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: sanitize(threshold),
            armed: true,
        }
    }

    /// Returns the reporting distance.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Sets the reporting distance.
    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = sanitize(threshold);
    }

    /// Returns `true` if the next entry into the zone will be reported.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Re-enables reporting, typically after the row set was replaced.
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    /// Scroll offset at which the content's end meets the viewport's end.
    ///
    /// The returned offset is clamped to `>= 0` and is `0` when the content
    /// fits entirely inside the viewport.
    #[must_use]
    pub fn lower_scroll_offset(viewport_height: f64, content_height: f64) -> f64 {
        let total = sanitize(content_height);
        let viewport = sanitize(viewport_height);
        if total <= viewport {
            0.0
        } else {
            total - viewport
        }
    }

    /// Returns `true` if `scroll_offset` lies within the threshold of the end.
    #[must_use]
    pub fn is_near_lower(
        &self,
        scroll_offset: f64,
        viewport_height: f64,
        content_height: f64,
    ) -> bool {
        let lower = Self::lower_scroll_offset(viewport_height, content_height);
        sanitize(scroll_offset) + self.threshold >= lower
    }

    /// Feeds one scroll position; returns `true` when the owner should be told
    /// that the end was reached.
    ///
    /// Empty content never reports.
    pub fn observe(
        &mut self,
        scroll_offset: f64,
        viewport_height: f64,
        content_height: f64,
    ) -> bool {
        if sanitize(content_height) <= 0.0 {
            return false;
        }
        if !self.is_near_lower(scroll_offset, viewport_height, content_height) {
            self.armed = true;
            return false;
        }
        core::mem::replace(&mut self.armed, false)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
