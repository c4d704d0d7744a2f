//! `if`/else-if/else (§4.10, §4.11). The else chain is recursed and folded
//! into the main conditional's block cursor before the cuddling decision is
//! made, so identifier visibility spans every branch.

use blankline_lint_core::ident::collect_stmt;
use blankline_lint_core::node::Stmt;

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::{dispatch_block_of, Ctx};

pub fn check<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::If(s)) = cursor.current() else { return None };

    let mut block_cursor = dispatch_block_of(ctx, sink, &s.body);
    if let Some(else_branch) = s.else_branch.as_deref() {
        merge_branch(ctx, sink, &mut block_cursor, else_branch);
    }

    if ctx.cfg.checks.contains(Check::If) {
        check_cuddling(ctx.cfg, sink, cursor, &block_cursor, Some(1), true, ctx.oracle);
    }
    Some(block_cursor)
}

/// MAIN-IF -> ELSE-IF / ELSE / END (§4.11).
fn merge_branch<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, main_cursor: &mut Cursor<'a>, branch: &'a Stmt) {
    match branch {
        Stmt::If(s) => {
            let head_idents: Vec<_> = collect_stmt(branch).into_iter().map(|i| i.name).collect();
            main_cursor.add_idents(head_idents, false);

            let mut nested = dispatch_block_of(ctx, sink, &s.body);
            nested.retain();
            main_cursor.merge(nested);
            if let Some(else_branch) = s.else_branch.as_deref() {
                merge_branch(ctx, sink, main_cursor, else_branch);
            }
        }
        Stmt::Block(b) => {
            let nested = dispatch_block_of(ctx, sink, &b.block);
            main_cursor.merge(nested);
        }
        _ => {}
    }
}
