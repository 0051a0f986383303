// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Diagnostic codes — a closed enum, grown as later phases need more.

/// A diagnostic's code, starting from a placeholder and growing with the
/// only codes the lexer shell in `joc-lex` can actually produce on its own
/// (the `INCOMPLETE_*`/`ILLEGAL_BYTES` lexeme categories), since those are
/// the one source of diagnostics this crate cluster reports without a
/// parser or preprocessor above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticCode {
    /// Placeholder for a diagnostic code not yet assigned a dedicated variant.
    Todo,
    IncompleteCharConst,
    IncompleteStringLit,
    IncompleteBlockComment,
    IllegalBytes,
}
