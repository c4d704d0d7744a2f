//! `defer` and `go` (§4.10). A run of consecutive defers (or gos) is exempt
//! from the cuddling check entirely; otherwise the ordinary rules apply,
//! using the call expression's own identifiers for the intersection test.

use blankline_lint_core::node::Stmt;

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::Ctx;

pub fn check_defer(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    run(ctx, sink, cursor, Check::Defer, |s| matches!(s, Stmt::Defer(_)));
}

pub fn check_go(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    run(ctx, sink, cursor, Check::Go, |s| matches!(s, Stmt::Go(_)));
}

fn run(
    ctx: &Ctx<'_>,
    sink: &mut DiagnosticSink,
    cursor: &mut Cursor<'_>,
    check: Check,
    is_same_kind: fn(&Stmt) -> bool,
) {
    if !ctx.cfg.checks.contains(check) {
        return;
    }
    if cursor.previous_node().is_some_and(is_same_kind) {
        return;
    }
    let empty = Cursor::empty();
    check_cuddling(ctx.cfg, sink, cursor, &empty, Some(1), true, ctx.oracle);
}
