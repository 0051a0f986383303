// SPDX-FileCopyrightText: 2025 Knitli Inc. <knitli@knit.li>
// SPDX-FileContributor: Adam Poulemanos <adam@knit.li>
// SPDX-License-Identifier: MIT OR Apache-2.0
//! The excerpt renderer: given a source-location range, extracts, escapes,
//! trims, and centers a `<= 80`-column line excerpt. `jocc.c` never calls a
//! renderer of its own, so there's no reference behavior to match here
//! beyond the escaping, trimming, and `<EOF>`-marker rules themselves.

use std::collections::VecDeque;

use joc_source::{SourceLocationRange, SourceManager};

use crate::escape::{escape_forward, EscapedUnit};

const MAX_COLUMNS: usize = 80;
/// Columns reserved for the literal `<EOF>` marker when the excerpt's right
/// edge runs off the end of the file.
const EOF_MARKER: &str = "<EOF>";
const EOF_RESERVED: usize = 5;

/// Renders the `<= 80`-column excerpt for `range`, returning the escaped
/// line text and the byte offset within it at which `range.start` falls.
#[must_use]
pub fn render_excerpt(srcman: &SourceManager, range: SourceLocationRange) -> (String, usize) {
    let ctx = srcman.line_context(range.start);
    let start_offset = srcman.byte_offset(range.start, ctx.pres_file_id);

    #[cfg(debug_assertions)]
    {
        let end_ctx = srcman.line_context(range.end);
        let start_logi = srcman.pres_file(ctx.pres_file_id).logi_file_id;
        let end_logi = srcman.pres_file(end_ctx.pres_file_id).logi_file_id;
        debug_assert!(start_logi == end_logi, "diagnostic range spans more than one logical file");
    }

    // Left: every unit from the line's start up to (not including) `start`.
    let mut left: VecDeque<EscapedUnit> = VecDeque::new();
    let mut pos = ctx.line_start_offset;
    while pos < start_offset {
        let unit = escape_forward(&ctx.text[pos..]);
        pos += unit.byte_len.max(1);
        left.push_back(unit);
    }

    // Right: from `start` forward to EOL/EOF, capped heuristically at 80
    // columns, stopping right after a single invalid sequence.
    let mut right: VecDeque<EscapedUnit> = VecDeque::new();
    let mut right_width = 0usize;
    let mut pos = start_offset;
    let mut hit_eof = false;
    loop {
        let byte = ctx.text[pos];
        if byte == 0 {
            hit_eof = true;
            break;
        }
        if byte == b'\n' || byte == b'\r' {
            break;
        }
        let unit = escape_forward(&ctx.text[pos..]);
        pos += unit.byte_len.max(1);
        right_width += unit.width();
        let was_invalid = !unit.valid;
        right.push_back(unit);
        if was_invalid || right_width >= MAX_COLUMNS {
            break;
        }
    }

    let mut left_width: usize = left.iter().map(EscapedUnit::width).sum();

    // Strip leading blank padding from the left side and trailing blank
    // padding from the right side.
    while left.front().is_some_and(EscapedUnit::is_space_or_tab) {
        left_width -= left.pop_front().unwrap().width();
    }
    while right.back().is_some_and(EscapedUnit::is_space_or_tab) {
        right_width -= right.pop_back().unwrap().width();
    }

    let reserved = if hit_eof { EOF_RESERVED } else { 0 };
    let min_right = if hit_eof { 0 } else { usize::from(!right.is_empty()) };

    // If still too wide, trim one unit at a time from whichever side is
    // larger. Both sides were built unit-by-unit (forward decode for the
    // left, forward decode walked out to the cap for the right), so
    // dropping the front of `left` or the back of `right` already trims
    // exactly one code point (or one invalid sequence) per step.
    while left_width + right_width + reserved > MAX_COLUMNS {
        let can_trim_right = right_width > min_right && !right.is_empty();
        let trim_right = if left.is_empty() {
            true
        } else if !can_trim_right {
            false
        } else {
            right_width >= left_width
        };

        if trim_right {
            let dropped = right.pop_back().unwrap();
            right_width -= dropped.width();
        } else if !left.is_empty() {
            let dropped = left.pop_front().unwrap();
            left_width -= dropped.width();
        } else {
            break;
        }
    }
    let mut text = String::with_capacity(MAX_COLUMNS + EOF_MARKER.len());
    for unit in &left {
        text.push_str(&unit.text);
    }
    let line_text_offset = text.len();
    for unit in &right {
        text.push_str(&unit.text);
    }
    if hit_eof {
        text.push_str(EOF_MARKER);
    }

    (text, line_text_offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use joc_intern::StringId;
    use joc_source::SourceLocation;

    fn loc(n: u32) -> SourceLocation {
        SourceLocation::new(n)
    }

    fn setup(text: &[u8]) -> SourceManager {
        let mut srcman = SourceManager::new();
        let name = StringId::EMPTY;
        let phys = srcman.add_phys_file(name, std::sync::Arc::from(text));
        let logi = srcman.add_logi_file(phys, None, loc(1));
        let pres = srcman.add_pres_file(logi, 1, name, 1);
        srcman.add_line(loc(1), pres, 0);
        srcman
    }

    #[test]
    fn simple_line_renders_whole_and_offsets_correctly() {
        let srcman = setup(b"int x = 1;\0");
        let range = SourceLocationRange { start: loc(5), end: loc(6) };
        let (text, offset) = render_excerpt(&srcman, range);
        assert_eq!(text, "int x = 1;<EOF>");
        assert_eq!(&text[offset..offset + 1], "x");
    }

    #[test]
    fn tab_escapes_and_offset_accounts_for_width() {
        // Tab sits between two non-blank characters so the leading/trailing
        // strip doesn't eat it; its escaped width (2) must still show up in
        // the offset of the caret that follows it.
        let srcman = setup(b"a\tx;\0");
        let range = SourceLocationRange { start: loc(3), end: loc(4) };
        let (text, offset) = render_excerpt(&srcman, range);
        assert_eq!(text, "a\\tx;<EOF>");
        assert_eq!(offset, 3);
    }

    #[test]
    fn leading_indentation_is_stripped() {
        let srcman = setup(b"\tx;\0");
        let range = SourceLocationRange { start: loc(2), end: loc(3) };
        let (text, offset) = render_excerpt(&srcman, range);
        assert_eq!(text, "x;<EOF>");
        assert_eq!(offset, 0);
    }

    #[test]
    fn long_line_trims_to_eighty_columns() {
        let mut line = vec![b'a'; 200];
        line[4] = b'\t';
        line.push(0);
        let srcman = setup(&line);
        // start near column 120 (0-indexed byte 119)
        let range = SourceLocationRange { start: loc(120), end: loc(121) };
        let (text, offset) = render_excerpt(&srcman, range);
        assert!(text.len() <= MAX_COLUMNS + EOF_MARKER.len());
        assert!(offset <= text.len());
    }

    #[test]
    fn excerpt_at_true_eof_reserves_marker_room() {
        let srcman = setup(b"x\0");
        let range = SourceLocationRange { start: loc(2), end: loc(2) };
        let (text, offset) = render_excerpt(&srcman, range);
        assert!(text.ends_with("<EOF>"));
        assert_eq!(offset, text.len() - "<EOF>".len());
    }
}
