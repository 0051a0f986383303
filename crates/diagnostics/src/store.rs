// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Append-only diagnostic store. Mirrors `diag_arr` in `diagnostic.h`.

use joc_source::{SourceLocationRange, SourceManager};

use crate::code::DiagnosticCode;
use crate::record::Diagnostic;
use crate::render::render_excerpt;
use crate::severity::Severity;

/// Owns the session's diagnostics, in report order. Nothing is ever removed.
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders `range`'s line excerpt and appends a new diagnostic.
    pub fn report(
        &mut self,
        srcman: &SourceManager,
        range: SourceLocationRange,
        severity: Severity,
        code: DiagnosticCode,
    ) {
        let (line_text, line_text_offset) = render_excerpt(srcman, range);
        tracing::debug!(?severity, ?code, "diagnostic reported");
        self.diagnostics.push(Diagnostic { range, severity, code, line_text, line_text_offset });
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Diagnostics in insertion order, the only order external consumers see.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use joc_intern::StringId;
    use joc_source::SourceLocation;

    #[test]
    fn report_appends_in_order() {
        let mut srcman = SourceManager::new();
        let name = StringId::EMPTY;
        let phys = srcman.add_phys_file(name, std::sync::Arc::from(&b"x;\0"[..]));
        let logi = srcman.add_logi_file(phys, None, SourceLocation::new(1));
        let pres = srcman.add_pres_file(logi, 1, name, 1);
        srcman.add_line(SourceLocation::new(1), pres, 0);

        let mut store = DiagnosticStore::new();
        assert!(store.is_empty());
        store.report(
            &srcman,
            SourceLocationRange { start: SourceLocation::new(1), end: SourceLocation::new(2) },
            Severity::Error,
            DiagnosticCode::IllegalBytes,
        );
        assert_eq!(store.len(), 1);
        assert!(store.has_errors());
        let first = store.iter().next().unwrap();
        assert_eq!(first.code, DiagnosticCode::IllegalBytes);
    }
}
