//! Width-bounded text wrapping with indent-aware continuation lines.

/// Columns a line may run past the nominal width if that fits one more
/// whole word instead of leaving it orphaned on a near-empty final line.
const SLOP: usize = 5;

/// Minimum usable columns between indent and terminal edge. Below this,
/// wrapping produces unreadable confetti and is not attempted.
const MIN_WRAP: usize = 24;

/// Indent used when the caller's indent leaves too little room and the
/// text restarts as a block on its own line.
const FALLBACK_INDENT: usize = 16;

/// Wraps `text` into lines no wider than `width` columns, with every line
/// after the first prefixed by `indent` spaces. Embedded newlines are
/// preserved and re-indented. The first line carries no prefix; the caller
/// supplies it (a bullet glyph, a padded flag column, plain spaces).
///
/// A `width` of `0` means the terminal size is unknown: no column wrapping
/// happens, only re-indentation after explicit newlines. If `width -
/// indent` leaves fewer than 24 columns, the text restarts on its own line
/// at indent 16; if even that is too cramped, wrapping is skipped the same
/// way as for unknown width.
///
/// Widths are measured in bytes. Break points are only ever at ASCII
/// whitespace, so multi-byte UTF-8 content never splits mid-character.
///
/// # Example
///
/// ```rust
/// use usagen::wrap;
///
/// assert_eq!(
///     wrap(2, 40, "the quick brown fox jumps over the lazy dog"),
///     "the quick brown fox jumps over\n  the lazy dog",
/// );
///
/// // Unknown width: explicit breaks survive, nothing else is inserted.
/// assert_eq!(wrap(4, 0, "one\ntwo"), "one\n    two");
/// ```
pub fn wrap(indent: usize, width: usize, text: &str) -> String {
    if width == 0 {
        return reindent(text, indent);
    }

    let mut indent = indent;
    let mut available = width.saturating_sub(indent);
    let mut out = String::new();

    // Not enough room at the requested indent. Restart the text as a
    // block on the next line at a fixed indent.
    if available < MIN_WRAP {
        indent = FALLBACK_INDENT;
        available = width.saturating_sub(indent);
        out.push('\n');
        out.push_str(&" ".repeat(indent));
    }
    // Still too cramped: skip column wrapping at the fallback indent.
    if available < MIN_WRAP {
        return reindent(text, indent);
    }

    let effective = available - SLOP;
    let pad = " ".repeat(indent);

    let (first, mut rest) = split_chunk(effective, SLOP, text);
    out.push_str(&reindent(first, indent));

    while !rest.is_empty() {
        let (chunk, tail) = split_chunk(effective, SLOP, rest);
        out.push('\n');
        out.push_str(&pad);
        out.push_str(&reindent(chunk, indent));
        rest = tail;
    }

    out
}

/// Re-inserts `indent` spaces after every newline already present in `text`.
fn reindent(text: &str, indent: usize) -> String {
    if !text.contains('\n') {
        return text.to_string();
    }
    let mut replacement = String::with_capacity(indent + 1);
    replacement.push('\n');
    for _ in 0..indent {
        replacement.push(' ');
    }
    text.replace('\n', &replacement)
}

/// Takes the next line-sized chunk off the front of `s`.
///
/// The break point is the last whitespace within the first `limit` bytes,
/// except that an embedded newline earlier in the window wins (explicit
/// breaks take priority over computed ones). A remainder that fits in
/// `limit + slop` bytes, or that has no usable break point, is returned
/// whole.
fn split_chunk(limit: usize, slop: usize, s: &str) -> (&str, &str) {
    if limit + slop > s.len() {
        return (s, "");
    }

    let mut last_ws = None;
    let mut last_nl = None;
    for (idx, ch) in s.char_indices() {
        if idx >= limit {
            break;
        }
        match ch {
            '\n' => {
                last_ws = Some(idx);
                last_nl = Some(idx);
            }
            ' ' | '\t' => last_ws = Some(idx),
            _ => {}
        }
    }

    let ws = match last_ws {
        // No break point, or one flush against the start: emit the rest
        // unbroken rather than producing an empty line.
        None | Some(0) => return (s, ""),
        Some(idx) => idx,
    };

    if let Some(nl) = last_nl {
        if nl > 0 && nl < ws {
            return (&s[..nl], &s[nl + 1..]);
        }
    }

    (&s[..ws], &s[ws + 1..])
}
