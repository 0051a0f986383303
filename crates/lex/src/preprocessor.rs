// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Per-file driving loop that turns raw lexemes into AST token nodes.
//!
//! Mirrors the per-file loop in `preprocessor.h`: reserve one source
//! location per byte (plus one for the end-of-file position), register the
//! file with the source manager, then repeatedly call [`Lexer::begin_line`]
//! and drain [`Lexer::next`] until EOF, building one child-ID list per
//! logical line. Full macro expansion and directive handling are out of
//! scope here — this shell only establishes the token stream a later
//! preprocessing stage would consume.

use joc_arena::{AstArena, AstId, AstIdListBuilder, ScratchStack, SyntacticCategory as Cat};
use joc_intern::StringInterner;
use joc_source::{PhysFileId, SourceLocation, SourceLocationAllocator, SourceManager};

use crate::lexer::Lexer;

/// The token-node IDs produced from one physical file, grouped by logical
/// line (EOL and EOF lexemes themselves never get a node and so never
/// appear in these lists).
#[derive(Debug, Default)]
pub struct LexedFile {
    pub lines: Vec<Vec<AstId>>,
}

/// Allocates an AST node for one lexeme: category in the header, then
/// `(start, end, spelling)` as three extra words. `spelling` is `0`
/// (`StringId::EMPTY`'s raw value) for categories that never carry one.
fn emit_token_node(
    arena: &mut AstArena,
    category: Cat,
    start: SourceLocation,
    end: SourceLocation,
    spelling: u32,
) -> AstId {
    let id = arena.alloc_node(category, 0, 3);
    arena.set_slot(id, 0, start.get());
    arena.set_slot(id, 1, end.get());
    arena.set_slot(id, 2, spelling);
    id
}

/// Lexes one physical file in full, returning its per-line token-node IDs.
///
/// Reserves `text.len() + 1` source locations from `srcloc_alloc` (one per
/// byte plus one for the position just past the last byte), registers a
/// logical and presumed file for it with no `#line` override in effect, then
/// drives the lexer to completion.
pub fn lex_file(
    name: joc_intern::StringId,
    text: std::sync::Arc<[u8]>,
    phys_file_id: PhysFileId,
    srcloc_alloc: &mut SourceLocationAllocator,
    srcman: &mut SourceManager,
    interner: &mut StringInterner,
    arena: &mut AstArena,
    scratch: &mut ScratchStack,
) -> LexedFile {
    // `text` already carries the session's trailing NUL sentinel one byte
    // past the logical end, so its length is exactly "size + 1".
    let base =
        srcloc_alloc.reserve(u32::try_from(text.len()).unwrap_or_else(|_| joc_utils::exit_impl_limit_exceeded()));

    let logi = srcman.add_logi_file(phys_file_id, None, base);
    let pres = srcman.add_pres_file(logi, 1, name, 1);

    let mut lexer = Lexer::new(&text, base, pres);
    lexer.begin_line(srcman);

    let mut file = LexedFile::default();
    let mut line_builder = AstIdListBuilder::new();
    let mut line_mark = scratch.mark();
    let mut line_has_tokens = false;

    /// Finalizes the in-progress per-line ID list (chunking into `Sublist`
    /// nodes if the line's token count overflowed `u16`) and drains the
    /// resulting child IDs off the scratch stack into a plain `Vec`.
    fn finish_line(
        arena: &mut AstArena,
        scratch: &mut ScratchStack,
        builder: AstIdListBuilder,
        mark: usize,
    ) -> Vec<AstId> {
        let count = builder.finalize(arena, scratch);
        let ids: Vec<AstId> = scratch
            .slice_from(mark)
            .chunks_exact(4)
            .map(|c| AstId::from_raw(u32::from_ne_bytes([c[0], c[1], c[2], c[3]])))
            .collect();
        debug_assert_eq!(ids.len(), count as usize);
        scratch.pop_to(mark);
        ids
    }

    loop {
        let start = lexer.current_srcloc();
        let mark = scratch.mark();
        let lexeme = lexer.next(srcman, interner, scratch);
        scratch.pop_to(mark);
        let end = lexer.current_srcloc();

        match lexeme.category {
            Cat::Eof => {
                if line_has_tokens {
                    let builder = std::mem::take(&mut line_builder);
                    file.lines.push(finish_line(arena, scratch, builder, line_mark));
                }
                break;
            }
            Cat::Eol => {
                if line_has_tokens {
                    let builder = std::mem::take(&mut line_builder);
                    file.lines.push(finish_line(arena, scratch, builder, line_mark));
                    line_has_tokens = false;
                    line_mark = scratch.mark();
                }
            }
            other => {
                let spelling = if other.carries_spelling() { lexeme.spelling.get() } else { 0 };
                let id = emit_token_node(arena, other, start, end, spelling);
                line_builder.push(arena, scratch, id);
                line_has_tokens = true;
                if other == Cat::IllegalBytes {
                    let builder = std::mem::take(&mut line_builder);
                    file.lines.push(finish_line(arena, scratch, builder, line_mark));
                    break;
                }
            }
        }
    }

    tracing::trace!(lines = file.lines.len(), "file lexed");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &[u8]) -> (AstArena, LexedFile) {
        let mut srcman = SourceManager::new();
        let mut interner = StringInterner::new();
        let mut arena = AstArena::new();
        let mut scratch = ScratchStack::new();
        let mut srcloc_alloc = SourceLocationAllocator::new();

        let name = interner.intern(b"test.c");
        let text: std::sync::Arc<[u8]> = std::sync::Arc::from(text);
        let phys = srcman.add_phys_file(name, text.clone());

        let file = lex_file(name, text, phys, &mut srcloc_alloc, &mut srcman, &mut interner, &mut arena, &mut scratch);
        (arena, file)
    }

    #[test]
    fn groups_tokens_by_line() {
        let (arena, file) = run(b"int x;\nint y;\n\0");
        assert_eq!(file.lines.len(), 2);
        // "int", " ", "x", ";" — whitespace gets a node too, only EOF/EOL
        // are excluded.
        assert_eq!(file.lines[0].len(), 4);
        assert_eq!(arena.category(file.lines[0][0]), Cat::Ident);
    }

    #[test]
    fn blank_line_contributes_nothing() {
        let (_, file) = run(b"x;\n\n\0");
        assert_eq!(file.lines.len(), 1);
        assert_eq!(file.lines[0].len(), 2);
    }

    #[test]
    fn comments_produce_nodes_with_empty_spelling() {
        let (arena, file) = run(b"x /* c */ y\n\0");
        assert_eq!(file.lines.len(), 1);
        let cats: Vec<_> = file.lines[0].iter().map(|&id| arena.category(id)).collect();
        assert_eq!(cats, vec![Cat::Ident, Cat::Whitespace, Cat::BlockComment, Cat::Whitespace, Cat::Ident]);
    }

    #[test]
    fn oversized_line_chunks_into_sublist_nodes() {
        // 32_800 repeats of "a " yield 65_600 per-lexeme nodes on one
        // logical line (Ident, Whitespace alternating) — one more than the
        // builder's 65_535-direct-child limit, so the line's finalized ID
        // list must contain a `Sublist` node chunking the first 65_535.
        let mut text = "a ".repeat(32_800).into_bytes();
        text.push(b'\n');
        text.push(0);
        let (arena, file) = run(&text);

        assert_eq!(file.lines.len(), 1);
        let line = &file.lines[0];

        let sublists: Vec<_> =
            line.iter().copied().filter(|&id| arena.category(id) == Cat::Sublist).collect();
        assert_eq!(sublists.len(), 1, "exactly one sublist should have been promoted");
        assert_eq!(arena.child_count(sublists[0]), 65_535);

        let direct_leaves = line.len() - sublists.len();
        let total = u32::from(arena.child_count(sublists[0])) + direct_leaves as u32;
        assert_eq!(total, 65_600);
    }
}
