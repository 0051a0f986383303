// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Byte-hashing helpers shared by the front-end core.
//!
//! `joc-intern` needs a fast, stable, non-cryptographic 64-bit hash over
//! arbitrary byte slices to key its probe table. [`rapidhash`] stands in for
//! the `XXH3_64bits` call the original C `hash.h` used.
//!
//! It isn't a cryptographic hash, but that's not a concern here: interner
//! entries are never attacker-influenced in a way that matters for a
//! single-threaded, single-session compiler front end.

/// Computes a hash for a byte slice using `rapidhash`.
#[inline(always)]
#[must_use]
pub const fn hash_bytes(bytes: &[u8]) -> u64 {
    rapidhash::v3::rapidhash_v3(bytes)
}
