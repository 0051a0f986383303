// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Three-level physical/logical/presumed file model and the sorted
//! source-location line index.
//!
//! Mirrors `srcman.h`.

mod files;
mod manager;
mod srcloc;

pub use files::{LogicalFile, PhysFileId, PhysicalFile, PresFileId, PresumedFile};
pub use manager::{LineContext, LineRecord, LogiFileId, SourceManager};
pub use srcloc::{SourceLocation, SourceLocationAllocator, SourceLocationRange};
