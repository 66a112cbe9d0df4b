// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_virtual_window --heading-base-level=0

//! Understory Virtual Window: windowing for long fixed-row-height lists.
//!
//! This crate decides which rows of a long list should actually be realized for
//! the current scroll position, and how tall the spacers around them must be so
//! the scrollbar still reflects the whole list. It is renderer-agnostic: it never
//! creates widgets, reads the clock, or talks to a platform.
//!
//! The core pieces are:
//!
//! - [`Scalar`]: a small abstraction over `f32`/`f64` lengths.
//! - [`to_pixels`] / [`UnitConverter`]: design-unit lengths (authored against a
//!   [`REFERENCE_WIDTH`]-unit-wide screen) to device pixels.
//! - [`compute_window`]: the pure geometry. Given row count, scroll offset,
//!   viewport height, row height, and a buffer size it returns a
//!   [`WindowGeometry`] with the realized `[start, end)` range and the padding
//!   before and after it.
//! - [`Windower`]: a controller that owns the row set and viewport state, gates
//!   scroll events behind a half-row hysteresis threshold, handles the
//!   asynchronous container measurement with a bounded-wait fallback (see
//!   [`measure`]), and queues [`ListEvent`]s for its owner.
//! - [`LowerEdge`]: edge-triggered "scrolled to the end" detection, surfaced as
//!   [`ListEvent::ScrollToLower`] so owners can page in more rows.
//!
//! Host frameworks are responsible for:
//!
//! - Calling [`Windower::attach`] and running the platform geometry query.
//! - Forwarding scroll offsets to [`Windower::on_scroll`].
//! - Rendering [`Windower::window`]: a top spacer, the realized rows keyed by
//!   [`VirtualListOptions::unique_key`], and a bottom spacer.
//! - Reacting to [`ListEvent`]s, e.g. fetching the next page on
//!   [`ListEvent::ScrollToLower`] and handing the grown row set back through
//!   [`Windower::set_rows`].
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_virtual_window::{DisplayMetrics, ListEvent, VirtualListOptions, Windower};
//!
//! #[derive(Debug)]
//! struct Order {
//!     id: u32,
//! }
//!
//! let mut list = Windower::new(VirtualListOptions::default()).unwrap();
//! list.set_rows((0..200).map(|id| Order { id }).collect());
//!
//! // A 375px-wide phone: 150-unit rows are 75px tall.
//! let request = list.attach(DisplayMetrics::new(375.0, 667.0), Duration::ZERO);
//! list.on_container_measured(request.attach_id, 600.0);
//!
//! list.scroll_to_index(120);
//! let window = list.window();
//! assert!(window.start_index() <= 120 && 120 < window.end_index());
//! for (key, _order) in window.keyed(|order| order.id) {
//!     // Host frameworks would now realize a view keyed by `key`.
//!     let _ = key;
//! }
//!
//! assert!(list
//!     .drain_events()
//!     .any(|event| event == ListEvent::ScrollTo { offset: 9000.0 }));
//! ```
//!
//! All lengths handed to [`Windower`] are device pixels except
//! [`VirtualListOptions::item_height`], which is in design units. Lengths are
//! expected to be finite and non-negative; anything else is clamped, never
//! reported as an error.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`VirtualListOptions`],
//!   [`DisplayMetrics`], and [`VisibleRange`].
//! - `hashbrown`: [`Windower::set_rows_checked`], which rejects row sets with
//!   duplicate keys.
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through `tracing`.

#![no_std]

extern crate alloc;

mod geometry;
mod keys;
mod lower;
pub mod measure;
mod options;
mod scalar;
mod units;
mod windower;

pub use geometry::{WindowGeometry, compute_window};
#[cfg(feature = "hashbrown")]
pub use keys::find_duplicate_key;
pub use keys::DuplicateKeyError;
pub use lower::LowerEdge;
pub use measure::{DisplayMetrics, MeasureError, MeasureRequest, MeasureState};
pub use options::{
    DEFAULT_BUFFER_SIZE, DEFAULT_ITEM_HEIGHT, DEFAULT_LOWER_THRESHOLD, DEFAULT_MEASURE_TIMEOUT_MS,
    DEFAULT_UNIQUE_KEY, OptionsError, VirtualListOptions,
};
pub use scalar::Scalar;
pub use units::{REFERENCE_WIDTH, UnitConverter, to_pixels};
pub use windower::{ListEvent, VisibleRange, VisibleWindow, Windower};
