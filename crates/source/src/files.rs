// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! The three-level physical / logical / presumed file model.

use joc_arena::AstId;
use joc_intern::StringId;

use crate::srcloc::SourceLocation;

/// Index into the source manager's physical-file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysFileId(pub(crate) u32);

/// Index into the source manager's logical-file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogiFileId(pub(crate) u32);

/// Index into the source manager's presumed-file table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresFileId(pub(crate) u32);

/// A named byte buffer on disk. One per actual file the driver reads.
#[derive(Debug, Clone)]
pub struct PhysicalFile {
    pub name: StringId,
    pub text: std::sync::Arc<[u8]>,
    /// Populated by the external preprocessor stage (`#pragma once`); not
    /// interpreted here.
    pub pragma_once: bool,
    /// Populated by the external preprocessor stage (include-guard `#ifdef`
    /// skip optimization); not interpreted here.
    pub skip_ifdef: Option<StringId>,
}

/// One inclusion instance of a [`PhysicalFile`]. Re-including the same
/// physical file (e.g. without an include guard) produces a distinct
/// logical file each time.
#[derive(Debug, Clone, Copy)]
pub struct LogicalFile {
    pub phys_file_id: PhysFileId,
    /// The AST node of the `#include` directive that pulled this file in,
    /// or `None` for a top-level translation unit. An external collaborator
    /// (out of this core's scope); stored here purely as a back-reference.
    pub included_at: Option<AstId>,
    /// The source location of this logical file's first byte. Source
    /// locations within the file are contiguous from here, so
    /// `srcloc.get() - base_srcloc.get()` recovers a byte offset into
    /// [`PhysicalFile::text`] — used by the diagnostic renderer to fetch the
    /// raw bytes of an offending line.
    pub base_srcloc: SourceLocation,
}

/// A `#line`-style override of a [`LogicalFile`]'s presumed name/line
/// numbering, generally just a proxy with `phys_line_num_base ==
/// pres_line_num_base == 1` when no override is in effect.
#[derive(Debug, Clone, Copy)]
pub struct PresumedFile {
    pub logi_file_id: LogiFileId,
    pub phys_line_num_base: u32,
    pub pres_name: StringId,
    pub pres_line_num_base: u32,
}
