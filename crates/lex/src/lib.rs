// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! UTF-8 codec, streaming lexer, and per-file preprocessor shell.
//!
//! Mirrors `decode_utf8.h`, `lexer.h`, and the per-file driving loop in
//! `preprocessor.h`.

mod lexer;
mod preprocessor;
pub mod utf8;

pub use lexer::{Lexeme, Lexer};
pub use preprocessor::{lex_file, LexedFile};
