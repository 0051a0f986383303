// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! The diagnostic record itself.

use joc_source::SourceLocationRange;

use crate::code::DiagnosticCode;
use crate::severity::Severity;

/// One reported diagnostic: a source range, its severity and code, and a
/// pre-rendered, bounded, escaped excerpt of the offending line. Mirrors
/// `diag_arr`'s element layout in `diagnostic.h`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub range: SourceLocationRange,
    pub severity: Severity,
    pub code: DiagnosticCode,
    /// A `<= 80`-column, escaped excerpt of the line containing
    /// `range.start`, ending in the literal `<EOF>` if the excerpt runs off
    /// the end of the file.
    pub line_text: String,
    /// The byte offset within `line_text` at which `range.start` appears.
    pub line_text_offset: usize,
}
