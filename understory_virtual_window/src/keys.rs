// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row key uniqueness.

use core::fmt;

/// Two rows in one row set share a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DuplicateKeyError {
    /// Index of the first row carrying the key.
    pub first: usize,
    /// Index of the later row repeating it.
    pub duplicate: usize,
}

impl fmt::Display for DuplicateKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {} repeats the key of row {}",
            self.duplicate, self.first
        )
    }
}

impl core::error::Error for DuplicateKeyError {}

/// Returns the first pair of rows whose keys collide, scanning in display order.
#[cfg(feature = "hashbrown")]
pub fn find_duplicate_key<T, K, F>(rows: &[T], mut key_of: F) -> Option<DuplicateKeyError>
where
    K: core::hash::Hash + Eq,
    F: FnMut(&T) -> K,
{
    use hashbrown::hash_map::Entry;

    let mut seen = hashbrown::HashMap::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match seen.entry(key_of(row)) {
            Entry::Occupied(entry) => {
                return Some(DuplicateKeyError {
                    first: *entry.get(),
                    duplicate: index,
                });
            }
            Entry::Vacant(entry) => {
                entry.insert(index);
            }
        }
    }
    None
}
