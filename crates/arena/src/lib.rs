// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Packed 32-bit-word AST arena, its ID-list builder, and the scratch stack
//! that backs transient builder state.
//!
//! This crate has no notion of what a lexeme is — that's `joc-lex` — only
//! how nodes are packed and addressed.

mod arena;
mod category;
mod idlist;
mod scratch;

pub use arena::{AstArena, AstId};
pub use category::SyntacticCategory;
pub use idlist::AstIdListBuilder;
pub use scratch::ScratchStack;
