// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Source locations — globally unique byte-position identifiers.

use std::num::NonZeroU32;

/// A non-zero 32-bit integer uniquely identifying one byte position within
/// one logical file, for the lifetime of a translation session.
///
/// Source locations are allocated contiguously per physical file: a file of
/// `size` bytes reserves `size + 1` consecutive values (one per byte, plus
/// one for the position just past the last byte, used as an exclusive end
/// bound and to host the `EOF` lexeme). `0` is reserved for "null".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation(NonZeroU32);

impl SourceLocation {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(NonZeroU32::new(value).expect("source location 0 is reserved for null"))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

/// Allocates contiguous, ever-increasing [`SourceLocation`]s for a
/// translation session. Starts at `1` — matches `tgroup->srcloc` in
/// `tgroup.h`, which is initialized to `1` and only ever incremented.
#[derive(Debug)]
pub struct SourceLocationAllocator {
    next: u32,
}

impl Default for SourceLocationAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLocationAllocator {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    #[must_use]
    pub fn current(&self) -> SourceLocation {
        SourceLocation::new(self.next)
    }

    /// Reserves `count` consecutive source locations (e.g. `size + 1` for a
    /// newly read physical file) and returns the first one.
    pub fn reserve(&mut self, count: u32) -> SourceLocation {
        let first = self.next;
        self.next = self
            .next
            .checked_add(count)
            .unwrap_or_else(|| joc_utils::exit_impl_limit_exceeded());
        SourceLocation::new(first)
    }
}

/// An inclusive-start, exclusive-end range of source locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocationRange {
    pub start: SourceLocation,
    pub end: SourceLocation,
}
