//! Expression statements (§4.10): a run of expression statements cuddles
//! freely with itself; cuddling against anything else is checked with no
//! cap on how many statements may stack above.

use blankline_lint_core::node::Stmt;

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::Ctx;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Expr) {
        return;
    }
    if matches!(cursor.previous_node(), Some(Stmt::Expr(_))) {
        return;
    }
    let empty = Cursor::empty();
    check_cuddling(ctx.cfg, sink, cursor, &empty, None, true, ctx.oracle);
}
