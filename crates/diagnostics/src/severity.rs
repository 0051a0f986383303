// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Diagnostic severity.

/// How serious a [`crate::record::Diagnostic`] is. Mirrors the two-level
/// split in `diagnostic.h` — there is no "note" or "remark" level in this
/// core; those belong to a later phase that can attach them to one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    Error,
    Warning,
}
