// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Source manager: append-only physical/logical/presumed file tables plus a
//! sorted line index, mirroring `srcman.h`.

use joc_arena::AstId;
use joc_intern::StringId;

use crate::files::{LogicalFile, PhysFileId, PhysicalFile, PresFileId, PresumedFile};
pub use crate::files::LogiFileId;
use crate::srcloc::SourceLocation;

/// The raw bytes of the line containing some source location, plus where
/// within them that location and the line start fall. Returned by
/// [`SourceManager::line_context`] for the diagnostic renderer.
pub struct LineContext<'a> {
    pub text: &'a [u8],
    pub line_start_offset: usize,
    pub pres_file_id: PresFileId,
    pub line_num_offset: u32,
}

/// One line's worth of `(start, presumed-file, offset)`, sorted by `start`.
#[derive(Debug, Clone, Copy)]
pub struct LineRecord {
    pub pres_file_id: PresFileId,
    /// Offset from the presumed file's line-number base.
    pub line_num_offset: u32,
}

/// Owns the physical/logical/presumed file tables and the sorted line
/// index. Append-only: nothing here is ever removed or mutated in place.
#[derive(Debug, Default)]
pub struct SourceManager {
    phys_files: Vec<PhysicalFile>,
    logi_files: Vec<LogicalFile>,
    pres_files: Vec<PresumedFile>,
    line_starts: Vec<SourceLocation>,
    lines: Vec<LineRecord>,
}

impl SourceManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_phys_file(
        &mut self,
        name: StringId,
        text: std::sync::Arc<[u8]>,
    ) -> PhysFileId {
        let id = PhysFileId(u32::try_from(self.phys_files.len()).unwrap_or_else(|_| {
            joc_utils::exit_impl_limit_exceeded();
        }));
        tracing::trace!(phys_file_id = id.0, bytes = text.len(), "physical file registered");
        self.phys_files.push(PhysicalFile {
            name,
            text,
            pragma_once: false,
            skip_ifdef: None,
        });
        id
    }

    pub fn add_logi_file(
        &mut self,
        phys_file_id: PhysFileId,
        included_at: Option<AstId>,
        base_srcloc: SourceLocation,
    ) -> LogiFileId {
        let id = LogiFileId(u32::try_from(self.logi_files.len()).unwrap_or_else(|_| {
            joc_utils::exit_impl_limit_exceeded();
        }));
        self.logi_files.push(LogicalFile {
            phys_file_id,
            included_at,
            base_srcloc,
        });
        id
    }

    pub fn add_pres_file(
        &mut self,
        logi_file_id: LogiFileId,
        phys_line_num_base: u32,
        pres_name: StringId,
        pres_line_num_base: u32,
    ) -> PresFileId {
        let id = PresFileId(u32::try_from(self.pres_files.len()).unwrap_or_else(|_| {
            joc_utils::exit_impl_limit_exceeded();
        }));
        self.pres_files.push(PresumedFile {
            logi_file_id,
            phys_line_num_base,
            pres_name,
            pres_line_num_base,
        });
        id
    }

    /// Registers a new line starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if `start` does not strictly exceed the previous record's
    /// start — line records must be added in increasing source-location
    /// order, exactly as `srcman_add_line`'s assertion requires.
    pub fn add_line(&mut self, start: SourceLocation, pres_file_id: PresFileId, line_num_offset: u32) {
        if let Some(&last) = self.line_starts.last() {
            assert!(
                start > last,
                "line records must be added in strictly increasing source-location order"
            );
        }
        self.line_starts.push(start);
        self.lines.push(LineRecord {
            pres_file_id,
            line_num_offset,
        });
    }

    #[must_use]
    pub fn phys_file(&self, id: PhysFileId) -> &PhysicalFile {
        &self.phys_files[id.0 as usize]
    }

    #[must_use]
    pub fn logi_file(&self, id: LogiFileId) -> &LogicalFile {
        &self.logi_files[id.0 as usize]
    }

    #[must_use]
    pub fn pres_file(&self, id: PresFileId) -> &PresumedFile {
        &self.pres_files[id.0 as usize]
    }

    /// Finds the line containing `srcloc` by binary search over
    /// `line_starts`, returning the record and that line's start location.
    ///
    /// # Panics
    ///
    /// Panics if no line has been registered yet, or if `srcloc` is before
    /// the first registered line's start — callers (the diagnostic
    /// renderer) must never call this with a source location of `0` or one
    /// that precedes lexing's first `begin_line` call.
    #[must_use]
    pub fn get_line(&self, srcloc: SourceLocation) -> (&LineRecord, SourceLocation) {
        assert!(!self.lines.is_empty(), "no line records registered");
        assert!(
            srcloc >= self.line_starts[0],
            "source location precedes the first registered line"
        );

        let mut lo = 0usize;
        let mut hi = self.lines.len();
        loop {
            let diff = hi - lo;
            if diff == 1 {
                return (&self.lines[lo], self.line_starts[lo]);
            }
            let mid = lo + diff / 2;
            if srcloc < self.line_starts[mid] {
                hi = mid;
            } else {
                lo = mid;
            }
        }
    }

    /// Recovers `srcloc`'s byte offset within the physical file reached via
    /// `pres_file_id`'s logical file.
    #[must_use]
    pub fn byte_offset(&self, srcloc: SourceLocation, pres_file_id: PresFileId) -> usize {
        let pres_file = self.pres_file(pres_file_id);
        let logi_file = self.logi_file(pres_file.logi_file_id);
        (srcloc.get() - logi_file.base_srcloc.get()) as usize
    }

    /// Chains presumed → logical → physical file to fetch the raw bytes of
    /// the line containing `srcloc`, for the diagnostic renderer.
    #[must_use]
    pub fn line_context(&self, srcloc: SourceLocation) -> LineContext<'_> {
        let (line, line_start) = self.get_line(srcloc);
        let pres_file = self.pres_file(line.pres_file_id);
        let logi_file = self.logi_file(pres_file.logi_file_id);
        let phys_file = self.phys_file(logi_file.phys_file_id);
        let line_start_offset = (line_start.get() - logi_file.base_srcloc.get()) as usize;
        LineContext {
            text: &phys_file.text,
            line_start_offset,
            pres_file_id: line.pres_file_id,
            line_num_offset: line.line_num_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(n: u32) -> SourceLocation {
        SourceLocation::new(n)
    }

    #[test]
    fn get_line_finds_exact_and_between_starts() {
        let mut mgr = SourceManager::new();
        let name = StringId::EMPTY;
        let phys = mgr.add_phys_file(name, std::sync::Arc::from(&b""[..]));
        let logi = mgr.add_logi_file(phys, None, loc(1));
        let pres = mgr.add_pres_file(logi, 1, name, 1);

        mgr.add_line(loc(1), pres, 0);
        mgr.add_line(loc(10), pres, 1);
        mgr.add_line(loc(25), pres, 2);

        let (_, start) = mgr.get_line(loc(1));
        assert_eq!(start, loc(1));

        let (_, start) = mgr.get_line(loc(9));
        assert_eq!(start, loc(1));

        let (_, start) = mgr.get_line(loc(10));
        assert_eq!(start, loc(10));

        let (rec, start) = mgr.get_line(loc(1000));
        assert_eq!(start, loc(25));
        assert_eq!(rec.line_num_offset, 2);
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn add_line_rejects_non_increasing_start() {
        let mut mgr = SourceManager::new();
        let name = StringId::EMPTY;
        let phys = mgr.add_phys_file(name, std::sync::Arc::from(&b""[..]));
        let logi = mgr.add_logi_file(phys, None, loc(1));
        let pres = mgr.add_pres_file(logi, 1, name, 1);

        mgr.add_line(loc(5), pres, 0);
        mgr.add_line(loc(5), pres, 1);
    }
}
