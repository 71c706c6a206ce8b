/// A 1-based line/column position within a [`Source`](crate::Source),
/// already adjusted for the source's `location_offset`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePosition {
    pub line: usize,
    pub column: usize,
}

impl SourcePosition {
    pub fn new(line: usize, column: usize) -> Self {
        SourcePosition { line, column }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Computes the `(line, column)` of a byte offset within `body`, honoring
/// `location_offset` the way embedded-document offsets do: the offset only
/// shifts the *first* line's column and the starting line number.
pub fn position_for_offset(
    body: &str,
    byte_offset: usize,
    location_offset: crate::source::LocationOffset,
) -> SourcePosition {
    let mut line = 1usize;
    let mut line_start = 0usize;
    for (idx, ch) in body.char_indices() {
        if idx >= byte_offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            line_start = idx + 1;
        }
    }
    let column = body[line_start..byte_offset].chars().count() + 1;

    if line == 1 {
        SourcePosition {
            line: location_offset.line,
            column: location_offset.column + column - 1,
        }
    } else {
        SourcePosition {
            line: location_offset.line + line - 1,
            column,
        }
    }
}
