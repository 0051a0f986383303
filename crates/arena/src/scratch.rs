// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Append-only byte stack for transient, variable-sized builder state.
//!
//! Mirrors `tmp_stack.h`: lexeme spellings and in-progress AST ID lists are
//! accumulated here and copied out to permanent storage (the interner's byte
//! heap, or an arena node's child slots) at finalization. Callers must pop
//! back to the depth they pushed from; nothing here enforces that beyond a
//! debug assertion, the same discipline the original places on its callers.

/// A byte-addressable bump stack. Pushes append, pops truncate.
#[derive(Debug, Default)]
pub struct ScratchStack {
    data: Vec<u8>,
}

impl ScratchStack {
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Current top-of-stack offset. Save this before a builder starts
    /// pushing, then use it again at [`Self::pop_to`] or for a byte range.
    #[must_use]
    pub fn mark(&self) -> usize {
        self.data.len()
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    pub fn push_byte(&mut self, byte: u8) {
        self.data.push(byte);
    }

    /// Pops back to a previously saved [`Self::mark`].
    ///
    /// # Panics
    ///
    /// Panics if `mark` is past the current top — this would mean a caller
    /// popped more than it pushed, an internal bug rather than reportable
    /// input error.
    pub fn pop_to(&mut self, mark: usize) {
        assert!(mark <= self.data.len(), "scratch stack popped past its mark");
        self.data.truncate(mark);
    }

    /// The bytes between `mark` and the current top.
    #[must_use]
    pub fn slice_from(&self, mark: usize) -> &[u8] {
        &self.data[mark..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_restore_depth() {
        let mut stack = ScratchStack::new();
        let mark = stack.mark();
        stack.push(b"hello");
        assert_eq!(stack.slice_from(mark), b"hello");
        stack.pop_to(mark);
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn nested_marks() {
        let mut stack = ScratchStack::new();
        stack.push(b"outer");
        let inner_mark = stack.mark();
        stack.push(b"inner");
        assert_eq!(stack.slice_from(inner_mark), b"inner");
        stack.pop_to(inner_mark);
        assert_eq!(stack.slice_from(0), b"outer");
    }

    #[test]
    #[should_panic(expected = "popped past its mark")]
    fn pop_past_mark_panics() {
        let mut stack = ScratchStack::new();
        stack.push(b"x");
        stack.pop_to(5);
    }
}
