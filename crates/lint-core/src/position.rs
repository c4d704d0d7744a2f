use smol_str::SmolStr;

/// Identifies the file a [`Position`] belongs to. Kept as interned text rather
/// than a path buffer since the engine never touches the filesystem.
pub type FileId = SmolStr;

/// A single point in a source file, already resolved from whatever internal
/// representation the upstream parser used (byte offset, token index, ...).
///
/// Positions are value types: copied, never referenced, and compared
/// structurally. Only [`Position::line`] is semantically consumed by the
/// engine; `column` is carried through for driver-side diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub file: FileId,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: impl Into<FileId>, line: u32, column: u32) -> Self {
        Self { file: file.into(), line, column }
    }

    /// A position on the same line immediately following this one. Used when
    /// synthesizing fix ranges that start "just after" a given point.
    #[must_use]
    pub fn same_line(self, column: u32) -> Self {
        Self { column, ..self }
    }

    /// The first column of the line right after this one. Used to point a
    /// diagnostic at a blank line itself rather than at either of its
    /// non-blank neighbors.
    #[must_use]
    pub fn next_line(self) -> Self {
        Self { line: self.line + 1, column: 1, ..self }
    }
}

/// Do `a` and `b` sit on consecutive lines with nothing in between?
///
/// `b` is understood to be the start of whatever follows `a`'s end.
#[must_use]
pub fn consecutive(a_end: Position, b_start: Position) -> bool {
    b_start.line.checked_sub(a_end.line) == Some(1)
}

/// How many lines does `[start, end]` span, inclusive.
#[must_use]
pub fn line_span(start: Position, end: Position) -> u32 {
    end.line.saturating_sub(start.line) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32) -> Position {
        Position::new("f.go", line, 1)
    }

    #[test]
    fn consecutive_lines_detected() {
        assert!(consecutive(pos(1), pos(2)));
        assert!(!consecutive(pos(1), pos(3)));
        assert!(!consecutive(pos(2), pos(1)));
    }

    #[test]
    fn span_is_inclusive() {
        assert_eq!(line_span(pos(3), pos(3)), 1);
        assert_eq!(line_span(pos(3), pos(5)), 3);
    }
}
