//! `for` and `range` loops (§4.10): body is checked, cuddling capped at one.

use blankline_lint_core::node::Stmt;

use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::{dispatch_block_of, Ctx};

pub fn check_for<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::For(s)) = cursor.current() else { return None };
    let block_cursor = dispatch_block_of(ctx, sink, &s.body);
    if ctx.cfg.checks.contains(crate::config::Check::For) {
        check_cuddling(ctx.cfg, sink, cursor, &block_cursor, Some(1), true, ctx.oracle);
    }
    Some(block_cursor)
}

pub fn check_range<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::Range(s)) = cursor.current() else { return None };
    let block_cursor = dispatch_block_of(ctx, sink, &s.body);
    if ctx.cfg.checks.contains(crate::config::Check::Range) {
        check_cuddling(ctx.cfg, sink, cursor, &block_cursor, Some(1), true, ctx.oracle);
    }
    Some(block_cursor)
}
