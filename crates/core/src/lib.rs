// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! The JoC front-end core: a translation group session wiring together the
//! scratch stack, string interner, source manager, AST arena, lexer, and
//! diagnostic store.
//!
//! Everything this crate does is re-exported from its dependencies too —
//! [`Session`] just owns them and provides the one entry point (`lex_file`)
//! a driver needs to turn raw bytes into a token stream plus whatever
//! lexical diagnostics fell out of it.

mod error;
mod session;

pub use error::{CoreError, Result};
pub use session::Session;

pub use joc_arena::{AstArena, AstId, SyntacticCategory};
pub use joc_diagnostics::{Diagnostic, DiagnosticCode, DiagnosticStore, Severity};
pub use joc_intern::{StringId, StringInterner};
pub use joc_lex::LexedFile;
pub use joc_source::{PhysFileId, SourceLocation, SourceLocationRange, SourceManager};
