// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! The translation group: the owning aggregate that wires the scratch
//! stack, interner, source manager, AST arena, and diagnostic store
//! together for one compilation session. Mirrors `tgroup.h`.

use std::sync::Arc;

use joc_arena::{AstArena, ScratchStack, SyntacticCategory};
use joc_diagnostics::{DiagnosticCode, DiagnosticStore, Severity};
use joc_intern::StringInterner;
use joc_lex::LexedFile;
use joc_source::{PhysFileId, SourceLocation, SourceLocationAllocator, SourceLocationRange, SourceManager};

/// Owns every per-session arena and manager. Nothing in the core is shared
/// across threads — a multi-threaded driver gives each worker its own
/// `Session`.
#[derive(Debug, Default)]
pub struct Session {
    srcloc_alloc: SourceLocationAllocator,
    srcman: SourceManager,
    interner: StringInterner,
    arena: AstArena,
    scratch: ScratchStack,
    diagnostics: DiagnosticStore,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn source_manager(&self) -> &SourceManager {
        &self.srcman
    }

    #[must_use]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    #[must_use]
    pub fn arena(&self) -> &AstArena {
        &self.arena
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticStore {
        &self.diagnostics
    }

    /// Lexes one physical file in full.
    ///
    /// `source_text` is the file's raw bytes *without* the trailing `NUL`
    /// sentinel the core's internals require — this is the one place that
    /// sentinel is the session's responsibility rather than the external
    /// driver's, since file I/O itself stays out of scope here.
    /// Reserves `source_text.len() + 1` source locations, registers a
    /// logical and presumed file with no `#line` override in effect, lexes
    /// to completion, and reports a diagnostic for every
    /// `INCOMPLETE_*`/`ILLEGAL_BYTES` lexeme the file produced.
    pub fn lex_file(&mut self, name: &str, source_text: &[u8]) -> (PhysFileId, LexedFile) {
        let mut padded = Vec::with_capacity(source_text.len() + 1);
        padded.extend_from_slice(source_text);
        padded.push(0);
        let text: Arc<[u8]> = Arc::from(padded);

        let name_id = self.interner.intern(name.as_bytes());
        let phys_file_id = self.srcman.add_phys_file(name_id, Arc::clone(&text));

        tracing::debug!(name, bytes = source_text.len(), "lexing file");

        let lexed = joc_lex::lex_file(
            name_id,
            text,
            phys_file_id,
            &mut self.srcloc_alloc,
            &mut self.srcman,
            &mut self.interner,
            &mut self.arena,
            &mut self.scratch,
        );

        self.report_lexical_diagnostics(&lexed);

        (phys_file_id, lexed)
    }

    /// Walks the token nodes this file just produced and reports a
    /// diagnostic for every `INCOMPLETE_*`/`ILLEGAL_BYTES` category — the
    /// only diagnostics this core can surface on its own, since lexical
    /// malformation surfaces as diagnostics rather than as an `Err`.
    fn report_lexical_diagnostics(&mut self, lexed: &LexedFile) {
        for line in &lexed.lines {
            for &id in line {
                let category = self.arena.category(id);
                if !category.is_incomplete_or_illegal() {
                    continue;
                }
                let start = SourceLocation::new(self.arena.slot(id, 0));
                let end = SourceLocation::new(self.arena.slot(id, 1));
                let code = diagnostic_code_for(category);
                self.diagnostics.report(
                    &self.srcman,
                    SourceLocationRange { start, end },
                    Severity::Error,
                    code,
                );
            }
        }
    }
}

fn diagnostic_code_for(category: SyntacticCategory) -> DiagnosticCode {
    match category {
        SyntacticCategory::IncompleteCharConst => DiagnosticCode::IncompleteCharConst,
        SyntacticCategory::IncompleteStringLit => DiagnosticCode::IncompleteStringLit,
        SyntacticCategory::IncompleteBlockComment => DiagnosticCode::IncompleteBlockComment,
        SyntacticCategory::IllegalBytes => DiagnosticCode::IllegalBytes,
        _ => unreachable!("only called for is_incomplete_or_illegal categories"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexing_a_clean_file_reports_nothing() {
        let mut session = Session::new();
        let (_phys, lexed) = session.lex_file("test.c", b"int x;\n");
        assert!(session.diagnostics().is_empty());
        assert_eq!(lexed.lines.len(), 1);
    }

    #[test]
    fn illegal_bytes_halt_the_file_and_report() {
        let mut session = Session::new();
        let (_phys, lexed) = session.lex_file("test.c", b"int x = \x01;\n");
        assert!(!session.diagnostics().is_empty());
        assert!(session.diagnostics().has_errors());
        // lexing stopped at the illegal byte, so the trailing `;` and EOL
        // never got a chance to register a second line.
        assert_eq!(lexed.lines.len(), 1);
    }

    #[test]
    fn incomplete_string_literal_reports_without_halting_the_file() {
        let mut session = Session::new();
        let (_phys, lexed) = session.lex_file("test.c", b"\"abc\nint y;\n");
        assert!(!session.diagnostics().is_empty());
        // lexing continues past the unterminated string into the next line.
        assert_eq!(lexed.lines.len(), 2);
    }

    #[test]
    fn source_locations_are_reserved_per_file() {
        let mut session = Session::new();
        let (phys_a, _) = session.lex_file("a.c", b"x;\n");
        let (phys_b, _) = session.lex_file("b.c", b"y;\n");
        // two distinct files get two distinct physical-file records, each
        // reachable by its own contiguous run of source locations.
        assert_ne!(phys_a, phys_b);
    }
}
