//! `switch` and `type-switch` (§4.10). Case clauses inside the body are
//! dispatched like any other statement, so their own leading-newline and
//! case-max-lines checks run automatically as part of walking the body.

use blankline_lint_core::node::Stmt;

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::{dispatch_block_of, Ctx};

pub fn check_switch<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::Switch(s)) = cursor.current() else { return None };
    let block_cursor = dispatch_block_of(ctx, sink, &s.body);
    if ctx.cfg.checks.contains(Check::Switch) {
        check_cuddling(ctx.cfg, sink, cursor, &block_cursor, Some(1), true, ctx.oracle);
    }
    Some(block_cursor)
}

pub fn check_type_switch<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::TypeSwitch(s)) = cursor.current() else { return None };
    let block_cursor = dispatch_block_of(ctx, sink, &s.body);
    if ctx.cfg.checks.contains(Check::TypeSwitch) {
        check_cuddling(ctx.cfg, sink, cursor, &block_cursor, Some(1), true, ctx.oracle);
    }
    Some(block_cursor)
}
