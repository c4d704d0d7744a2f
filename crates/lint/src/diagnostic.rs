use blankline_lint_core::position::Position;

pub const MESSAGE_ADD: &str = "missing blank line decreases readability";
pub const MESSAGE_REMOVE: &str = "unnecessary blank line decreases readability";

/// The fixed diagnostic category the driver contract names in §6. Kept as a
/// unit marker rather than an inline string literal so the shape documents
/// room for more categories without changing call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Whitespace;

/// One atomic edit: replace everything between `start` and `end` with a
/// single newline. `start <= end` always holds (§8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixRange {
    pub start: Position,
    pub end: Position,
}

impl FixRange {
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "fix range must not go backwards");
        Self { start, end }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub report_at: Position,
    pub category: Whitespace,
    pub message: &'static str,
    pub fixes: Vec<FixRange>,
}

impl Diagnostic {
    /// The single synthetic diagnostic for an upstream parse failure (§4.12,
    /// §7 category 2). Carries no fix — there is nothing sound to suggest.
    #[must_use]
    pub fn invalid_syntax(at: Position) -> Self {
        Self { report_at: at, category: Whitespace, message: "invalid syntax, file cannot be linted", fixes: Vec::new() }
    }
}

/// Per-position accumulator: a second edit reported at an existing position
/// appends another fix range rather than creating a second diagnostic, and
/// the message is fixed at first insertion (§4.5).
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSink {
    order: Vec<Position>,
    by_position: ahash::AHashMap<Position, Diagnostic>,
}

impl DiagnosticSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, report_at: Position, start: Position, end: Position, message: &'static str) {
        self.by_position
            .entry(report_at)
            .and_modify(|d| d.fixes.push(FixRange::new(start, end)))
            .or_insert_with(|| {
                self.order.push(report_at);
                Diagnostic { report_at, category: Whitespace, message, fixes: vec![FixRange::new(start, end)] }
            });
    }

    /// Consume the sink, returning diagnostics in the order their report
    /// position was first touched — which, since the walk is depth-first and
    /// top-to-bottom, is also traversal order (§5).
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        let Self { order, mut by_position } = self;

        order.into_iter().filter_map(|pos| by_position.remove(&pos)).collect()
    }
}
