// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Builds an AST node's child-ID list on the scratch stack, promoting runs
//! of children past the 16-bit header field into `Sublist` nodes.
//!
//! Mirrors `astlst.h`. A node's header only has 16 bits for `child_count`,
//! but a parser may need to attach many more children than that (e.g. a
//! struct with more than 65535 fields, or — more realistically here — a
//! translation unit with more than 65535 top-level tokens). When a single
//! caller's run of direct children would overflow `u16`, the existing
//! 65535 direct IDs are copied into a `Sublist` node and replaced on the
//! scratch stack by that one sublist's ID.

use crate::arena::{AstArena, AstId};
use crate::category::SyntacticCategory;
use crate::scratch::ScratchStack;

/// Tracks an in-progress child-ID list being built on the [`ScratchStack`].
#[derive(Debug, Default)]
pub struct AstIdListBuilder {
    direct_count: u16,
    sublist_count: u16,
}

impl AstIdListBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts the `child_count` most-recently-pushed direct IDs at the top
    /// of the scratch stack into one `Sublist` node, then pushes that node's
    /// ID back onto the scratch stack in their place.
    fn promote_to_sublist(arena: &mut AstArena, scratch: &mut ScratchStack, child_count: u16) {
        let children_size = usize::from(child_count) * 4;
        let mark = scratch.len() - children_size;
        let children: Vec<u32> = scratch
            .slice_from(mark)
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        scratch.pop_to(mark);

        let sublist = arena.alloc_node(SyntacticCategory::Sublist, child_count, 0);
        arena.set_children(sublist, &children);
        tracing::trace!(child_count, "child list promoted to sublist node");

        scratch.push(&sublist.get().to_ne_bytes());
    }

    /// Pushes `astid` as the next child, promoting the prior run of direct
    /// IDs to a sublist first if the 65536th push would overflow `u16`.
    pub fn push(&mut self, arena: &mut AstArena, scratch: &mut ScratchStack, astid: AstId) {
        self.direct_count = match self.direct_count.checked_add(1) {
            Some(n) => n,
            None => {
                Self::promote_to_sublist(arena, scratch, u16::MAX);
                self.sublist_count += 1;
                1
            }
        };

        scratch.push(&astid.get().to_ne_bytes());
    }

    /// Finalizes the list: if the total (direct + sublists) already fits in
    /// `u16`, returns that count directly. Otherwise promotes the remaining
    /// direct IDs to one last sublist and returns `sublist_count + 1`.
    ///
    /// After this call the scratch stack holds exactly the returned number
    /// of `u32` child IDs at its top, ready to be copied into the enclosing
    /// node's child slots with [`AstArena::set_children`].
    #[must_use]
    pub fn finalize(self, arena: &mut AstArena, scratch: &mut ScratchStack) -> u16 {
        let total = u32::from(self.direct_count) + u32::from(self.sublist_count);
        if total <= u32::from(u16::MAX) {
            total as u16
        } else {
            Self::promote_to_sublist(arena, scratch, self.direct_count);
            self.sublist_count + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push_n(n: u32) -> (AstArena, ScratchStack, u16) {
        let mut arena = AstArena::new();
        let mut scratch = ScratchStack::new();
        let mut builder = AstIdListBuilder::new();
        for _ in 0..n {
            let leaf = arena.alloc_node(SyntacticCategory::Ident, 0, 0);
            builder.push(&mut arena, &mut scratch, leaf);
        }
        let count = builder.finalize(&mut arena, &mut scratch);
        (arena, scratch, count)
    }

    #[test]
    fn small_list_stays_direct() {
        let (_, scratch, count) = push_n(10);
        assert_eq!(count, 10);
        assert_eq!(scratch.len(), 10 * 4);
    }

    #[test]
    fn exactly_65535_stays_direct() {
        let (_, _, count) = push_n(65_535);
        assert_eq!(count, 65_535);
    }

    #[test]
    fn overflow_promotes_to_sublist() {
        // 65536 direct pushes: the 65536th triggers a promotion of the
        // first 65535 into a sublist, then finalize promotes the final 1.
        let (arena, scratch, count) = push_n(65_536);
        assert_eq!(count, 2);
        assert_eq!(scratch.len(), 2 * 4);
        let ids: Vec<u32> = scratch
            .slice_from(0)
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        // First child is the big sublist, second is the one-element sublist.
        let first = AstId::from_raw(ids[0]);
        let second = AstId::from_raw(ids[1]);
        assert_eq!(arena.category(first), SyntacticCategory::Sublist);
        assert_eq!(arena.child_count(first), 65_535);
        assert_eq!(arena.category(second), SyntacticCategory::Sublist);
        assert_eq!(arena.child_count(second), 1);
    }
}
