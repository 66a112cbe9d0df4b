// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless paged feed driven through a `Windower`.
//!
//! Simulates what a host does for a long "load more" list: attach, lose the
//! container measurement and fall back to the display height, stream scroll
//! offsets, page in rows whenever the trailing edge is reached, then jump to a
//! row programmatically.
//!
//! Run with an optional JSON options file (camelCase keys, see `data/feed.json`):
//!
//! ```text
//! RUST_LOG=debug cargo run -p understory_virtual_window_demos --bin paged_feed -- demos/data/feed.json
//! ```

use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use tracing::info;
use tracing_subscriber::EnvFilter;
use understory_virtual_window::{
    DisplayMetrics, ListEvent, MeasureError, VirtualListOptions, Windower,
};

const PAGE_SIZE: u64 = 30;
const MAX_PAGES: u64 = 4;
const SCROLL_STEP: f64 = 37.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = load_options(std::env::args().nth(1))?;
    let key = options.unique_key.clone();
    let mut list = Windower::new(options).context("invalid list options")?;

    let mut feed = Feed::default();
    list.set_rows_checked(feed.next_page(&key), |row| row_key(row, &key))?;

    // An iPhone-sized display; the container query fails, so the fallback wins.
    let request = list.attach(DisplayMetrics::new(390.0, 844.0), Duration::ZERO);
    list.on_measure_failed(request.attach_id, MeasureError::NodeNotFound);
    if !list.poll_measure_timeout(request.deadline) {
        bail!("list never measured");
    }
    render(&list, &key);

    let mut offset = 0.0;
    while offset < list.content_height() {
        offset += SCROLL_STEP;
        list.on_scroll(offset);
        let events: Vec<_> = list.drain_events().collect();
        for event in events {
            match event {
                ListEvent::WindowChanged(range) => {
                    info!(
                        start = range.start,
                        end = range.end,
                        total = range.total_count,
                        "window changed"
                    );
                }
                ListEvent::ScrollToLower if feed.pages < MAX_PAGES => {
                    let mut rows = list.rows().to_vec();
                    rows.extend(feed.next_page(&key));
                    list.set_rows_checked(rows, |row| row_key(row, &key))?;
                    info!(pages = feed.pages, rows = list.rows().len(), "loaded next page");
                }
                ListEvent::ScrollToLower => info!("end of feed"),
                ListEvent::ScrollTo { offset } => info!(offset, "programmatic scroll"),
            }
        }
    }

    list.scroll_to_index(42);
    for event in list.drain_events() {
        if let ListEvent::ScrollTo { offset } = event {
            info!(offset, "apply scroll offset to container");
        }
    }
    render(&list, &key);
    Ok(())
}

fn load_options(path: Option<String>) -> Result<VirtualListOptions> {
    let Some(path) = path else {
        return Ok(VirtualListOptions::default().with_unique_key("orderId"));
    };
    let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn row_key(row: &Value, key: &str) -> Option<String> {
    row.get(key).map(ToString::to_string)
}

fn render(list: &Windower<Value>, key: &str) {
    let window = list.window();
    info!(
        top = window.top_padding(),
        bottom = window.bottom_padding(),
        rows = window.len(),
        "render"
    );
    for (id, row) in window.keyed(|row| row_key(row, key)) {
        let title = row.get("title").and_then(Value::as_str).unwrap_or_default();
        info!(key = id.as_deref().unwrap_or("?"), title, "  row");
    }
}

/// Stand-in for the paginated order endpoint.
#[derive(Debug, Default)]
struct Feed {
    pages: u64,
}

impl Feed {
    fn next_page(&mut self, key: &str) -> Vec<Value> {
        let first = self.pages * PAGE_SIZE;
        self.pages += 1;
        (first..first + PAGE_SIZE)
            .map(|id| {
                let mut row = json!({
                    "title": format!("Order {id:05}"),
                    "status": if id % 3 == 0 { "delivered" } else { "pending" },
                });
                row[key] = json!(id);
                row
            })
            .collect()
    }
}
