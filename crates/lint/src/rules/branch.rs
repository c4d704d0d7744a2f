//! `break`/`continue`/`goto`/`fallthrough` (§4.10): a cuddled branch is
//! flagged once the preceding run of statements it sits under grows past
//! `branch-max-lines`, unless it is the last statement of a short (≤2) block.

use blankline_lint_core::position::line_span;

use crate::config::Check;
use crate::cursor::Cursor;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD};
use crate::dispatch::Ctx;
use crate::spacing::statements_above;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Branch) {
        return;
    }
    let Some(stmt) = cursor.current() else { return };

    let n = statements_above(cursor);
    if n == 0 {
        return;
    }

    let is_last = cursor.index() == cursor.len() as isize - 1;
    if cursor.len() <= 2 && is_last {
        return;
    }

    let Some(run_start) = cursor.stmt_at(cursor.index() - n as isize) else { return };
    if line_span(run_start.start(), stmt.end()) <= ctx.cfg.branch_max_lines {
        return;
    }

    let Some(prev) = cursor.previous_node() else { return };
    sink.add(stmt.start(), prev.end(), prev.end(), MESSAGE_ADD);
}
