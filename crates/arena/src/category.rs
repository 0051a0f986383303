// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! Syntactic category — the closed enum of lexeme/AST-node kinds.

/// The syntactic category of a lexeme or AST node.
///
/// Packed into the low 16 bits of an [`crate::arena::AstArena`] node header,
/// so this must never exceed `u16::MAX` variants. Mirrors `enum syncat` in
/// the original `syncat.h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntacticCategory {
    /// End-of-file.
    Eof = 1,
    /// End-of-line (LF, CR, or CRLF).
    Eol,
    /// A run of spaces and/or tabs.
    Whitespace,

    CharConst,
    StringLit,
    Ident,
    PpNumber,

    BlockComment,
    LineComment,

    IncompleteCharConst,
    IncompleteStringLit,
    IncompleteBlockComment,

    Exclaim,
    Ne,
    Hash,
    HashHash,
    Percent,
    ModAssign,
    Ampersand,
    AndAnd,
    AndAssign,
    LParen,
    RParen,
    Asterisk,
    MulAssign,
    Plus,
    Inc,
    AddAssign,
    Comma,
    Minus,
    Dec,
    SubAssign,
    Arrow,
    Dot,
    Ellipsis,
    Slash,
    DivAssign,
    Colon,
    ColonColon,
    Semicolon,
    Lt,
    Le,
    Shl,
    ShlAssign,
    Assign,
    EqEq,
    Gt,
    Ge,
    Shr,
    ShrAssign,
    QMark,
    LBrack,
    RBrack,
    Caret,
    XorAssign,
    LBrace,
    VBar,
    OrOr,
    OrAssign,
    RBrace,
    Tilde,

    LineSplice,
    OtherChar,
    IllegalBytes,

    /// Sub-list node used to chunk an oversized child list. See
    /// [`crate::idlist::AstIdListBuilder`].
    Sublist,
}

impl SyntacticCategory {
    /// Decodes a raw `u16` header field into a category.
    ///
    /// # Panics
    ///
    /// Panics if `raw` does not correspond to a known category. Arena data is
    /// never untrusted input — it is only ever written by this crate's own
    /// `alloc_node`, so an unrecognized value means on-disk corruption, not a
    /// reportable condition.
    #[must_use]
    pub fn from_u16(raw: u16) -> Self {
        use SyntacticCategory as C;
        const TABLE: &[C] = &[
            C::Eof,
            C::Eol,
            C::Whitespace,
            C::CharConst,
            C::StringLit,
            C::Ident,
            C::PpNumber,
            C::BlockComment,
            C::LineComment,
            C::IncompleteCharConst,
            C::IncompleteStringLit,
            C::IncompleteBlockComment,
            C::Exclaim,
            C::Ne,
            C::Hash,
            C::HashHash,
            C::Percent,
            C::ModAssign,
            C::Ampersand,
            C::AndAnd,
            C::AndAssign,
            C::LParen,
            C::RParen,
            C::Asterisk,
            C::MulAssign,
            C::Plus,
            C::Inc,
            C::AddAssign,
            C::Comma,
            C::Minus,
            C::Dec,
            C::SubAssign,
            C::Arrow,
            C::Dot,
            C::Ellipsis,
            C::Slash,
            C::DivAssign,
            C::Colon,
            C::ColonColon,
            C::Semicolon,
            C::Lt,
            C::Le,
            C::Shl,
            C::ShlAssign,
            C::Assign,
            C::EqEq,
            C::Gt,
            C::Ge,
            C::Shr,
            C::ShrAssign,
            C::QMark,
            C::LBrack,
            C::RBrack,
            C::Caret,
            C::XorAssign,
            C::LBrace,
            C::VBar,
            C::OrOr,
            C::OrAssign,
            C::RBrace,
            C::Tilde,
            C::LineSplice,
            C::OtherChar,
            C::IllegalBytes,
            C::Sublist,
        ];
        let idx = raw.checked_sub(1).expect("category 0 is never allocated");
        TABLE[idx as usize]
    }

    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether this category carries a non-empty interned spelling.
    ///
    /// Matches the original lexer: EOF, EOL, whitespace, comments, and
    /// line-splices never carry a spelling ID, everything else does (even
    /// if the spelling happens to intern to the empty string, which cannot
    /// actually occur for these categories since they always consume at
    /// least one byte).
    #[must_use]
    pub const fn carries_spelling(self) -> bool {
        !matches!(
            self,
            Self::Eof
                | Self::Eol
                | Self::Whitespace
                | Self::LineSplice
                | Self::BlockComment
                | Self::LineComment
                | Self::IncompleteBlockComment
        )
    }

    /// Whether this category signals a lexical error to be surfaced as a
    /// diagnostic; `IllegalBytes` additionally halts lexing of the file.
    #[must_use]
    pub const fn is_incomplete_or_illegal(self) -> bool {
        matches!(
            self,
            Self::IncompleteCharConst
                | Self::IncompleteStringLit
                | Self::IncompleteBlockComment
                | Self::IllegalBytes
        )
    }
}
