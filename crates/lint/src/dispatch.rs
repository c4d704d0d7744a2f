//! The statement dispatcher (§4.7): walks a block's statements in order,
//! maintaining the block's [`Cursor`], and routes each statement kind to its
//! rule routine.

use blankline_lint_core::comment::CommentMap;
use blankline_lint_core::ident::collect_stmt;
use blankline_lint_core::node::{Block, Expr, Stmt};
use blankline_lint_core::position::Position;
use tracing::warn;

use crate::block_edge::{check_leading_newline, check_trailing_newline};
use crate::config::Config;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::oracle::ErrorTypeOracle;
use crate::rules;

/// Everything a rule routine needs besides the mutable sink and cursor —
/// bundled so call sites don't carry four separate reference parameters.
pub struct Ctx<'c> {
    pub cfg: &'c Config,
    pub comments: &'c CommentMap,
    pub oracle: &'c dyn ErrorTypeOracle,
}

/// Walk one brace-delimited block: run the leading/trailing edge checks,
/// dispatch every statement, and hand back the finished cursor so the caller
/// can fold it into whatever cursor it itself belongs to.
pub fn dispatch_block<'a>(
    ctx: &Ctx<'_>,
    sink: &mut DiagnosticSink,
    stmts: &'a [Stmt],
    lbrace: Position,
    rbrace: Position,
) -> Cursor<'a> {
    check_leading_newline(ctx.cfg, sink, lbrace, stmts, ctx.comments);
    check_trailing_newline(ctx.cfg, sink, stmts, rbrace, ctx.comments);
    dispatch_stmts(ctx, sink, stmts)
}

/// Walk a statement list with no brace pair of its own (a case- or
/// comm-clause body) — no leading/trailing edge check runs here; the
/// clause's own colon-based leading check is the caller's responsibility.
pub fn dispatch_stmts<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, stmts: &'a [Stmt]) -> Cursor<'a> {
    let mut cursor = Cursor::new(stmts);
    for _ in 0..stmts.len() {
        cursor.next();
        dispatch_stmt(ctx, sink, &mut cursor);
    }
    cursor
}

/// Convenience wrapper for a block owned through the `Block` type.
pub fn dispatch_block_of<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, block: &'a Block) -> Cursor<'a> {
    dispatch_block(ctx, sink, &block.stmts, block.lbrace, block.rbrace)
}

fn dispatch_stmt<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) {
    let Some(stmt) = cursor.current() else { return };
    let is_first = cursor.index() == 0;

    let head_idents: Vec<_> = collect_stmt(stmt).into_iter().map(|i| i.name).collect();
    cursor.add_idents(head_idents, is_first);

    for body in funclit_bodies_in_stmt(stmt) {
        let body_cursor = dispatch_block_of(ctx, sink, body);
        cursor.absorb(&body_cursor);
    }

    let child = match stmt {
        Stmt::If(_) => rules::if_stmt::check(ctx, sink, cursor),
        Stmt::For(_) => rules::loop_stmt::check_for(ctx, sink, cursor),
        Stmt::Range(_) => rules::loop_stmt::check_range(ctx, sink, cursor),
        Stmt::Switch(_) => rules::switch_stmt::check_switch(ctx, sink, cursor),
        Stmt::TypeSwitch(_) => rules::switch_stmt::check_type_switch(ctx, sink, cursor),
        Stmt::Select(_) => rules::select_stmt::check(ctx, sink, cursor),
        Stmt::Defer(_) => {
            rules::defer_go::check_defer(ctx, sink, cursor);
            None
        }
        Stmt::Go(_) => {
            rules::defer_go::check_go(ctx, sink, cursor);
            None
        }
        Stmt::Return(_) => {
            rules::return_stmt::check(ctx, sink, cursor);
            None
        }
        Stmt::Assign(_) => {
            rules::assign::check(ctx, sink, cursor);
            None
        }
        Stmt::IncDec(_) => {
            rules::inc_dec::check(ctx, sink, cursor);
            None
        }
        Stmt::Decl(_) => {
            rules::decl::check(ctx, sink, cursor);
            None
        }
        Stmt::Branch(_) => {
            rules::branch::check(ctx, sink, cursor);
            None
        }
        Stmt::Label(_) => {
            rules::label::check(ctx, sink, cursor);
            None
        }
        Stmt::Expr(_) => {
            rules::expr_stmt::check(ctx, sink, cursor);
            None
        }
        Stmt::Send(_) => {
            rules::send::check(ctx, sink, cursor);
            None
        }
        Stmt::Case(_) | Stmt::Comm(_) => {
            rules::case_clause::check(ctx, sink, cursor);
            None
        }
        Stmt::Block(b) => Some(dispatch_block_of(ctx, sink, &b.block)),
        Stmt::Unknown(u) => {
            warn!(kind = %u.kind_name, "unhandled syntax node kind");
            None
        }
    };

    if let Some(child_cursor) = child {
        if is_first {
            cursor.extend(child_cursor);
        } else {
            cursor.absorb(&child_cursor);
        }
    }
}

/// Function literal bodies are walked as their own block (their own leading/
/// trailing checks, their own cuddling decisions), but the identifiers found
/// inside are still absorbed into the enclosing cursor — unioned into its
/// whole-block visibility, never marked as a first-identifier group of their
/// own (§4.7).
fn funclit_bodies_in_stmt(stmt: &Stmt) -> Vec<&Block> {
    let mut out = Vec::new();
    match stmt {
        Stmt::For(s) => {
            if let Some(cond) = &s.cond {
                funclit_bodies_in_expr(cond, &mut out);
            }
        }
        Stmt::Range(s) => funclit_bodies_in_expr(&s.range_expr, &mut out),
        Stmt::Switch(s) => {
            if let Some(tag) = &s.tag {
                funclit_bodies_in_expr(tag, &mut out);
            }
        }
        Stmt::Defer(s) | Stmt::Go(s) => funclit_bodies_in_expr(&s.call, &mut out),
        Stmt::Return(s) => {
            for r in &s.results {
                funclit_bodies_in_expr(r, &mut out);
            }
        }
        Stmt::Assign(s) => {
            for e in s.lhs.iter().chain(&s.rhs) {
                funclit_bodies_in_expr(e, &mut out);
            }
        }
        Stmt::IncDec(s) => funclit_bodies_in_expr(&s.operand, &mut out),
        Stmt::Expr(s) => funclit_bodies_in_expr(&s.expr, &mut out),
        Stmt::Send(s) => {
            funclit_bodies_in_expr(&s.chan, &mut out);
            funclit_bodies_in_expr(&s.value, &mut out);
        }
        Stmt::Case(s) => {
            for e in &s.exprs {
                funclit_bodies_in_expr(e, &mut out);
            }
        }
        _ => {}
    }
    out
}

fn funclit_bodies_in_expr<'a>(expr: &'a Expr, out: &mut Vec<&'a Block>) {
    match expr {
        Expr::FuncLit { body, .. } => out.push(body),
        Expr::Binary { x, y, .. } => {
            funclit_bodies_in_expr(x, out);
            funclit_bodies_in_expr(y, out);
        }
        Expr::Unary { x, .. } | Expr::Star { x, .. } | Expr::Paren { x, .. } => funclit_bodies_in_expr(x, out),
        Expr::Index { x, index, .. } => {
            funclit_bodies_in_expr(x, out);
            funclit_bodies_in_expr(index, out);
        }
        Expr::Slice { x, low, high, max, .. } => {
            funclit_bodies_in_expr(x, out);
            if let Some(e) = low {
                funclit_bodies_in_expr(e, out);
            }
            if let Some(e) = high {
                funclit_bodies_in_expr(e, out);
            }
            if let Some(e) = max {
                funclit_bodies_in_expr(e, out);
            }
        }
        Expr::Selector { x, .. } => funclit_bodies_in_expr(x, out),
        Expr::Call { func, args, .. } => {
            funclit_bodies_in_expr(func, out);
            for a in args {
                funclit_bodies_in_expr(a, out);
            }
        }
        Expr::Composite { elts, .. } => {
            for e in elts {
                funclit_bodies_in_expr(e, out);
            }
        }
        Expr::KeyValue { key, value, .. } => {
            funclit_bodies_in_expr(key, out);
            funclit_bodies_in_expr(value, out);
        }
        Expr::TypeAssert { x, .. } => funclit_bodies_in_expr(x, out),
        Expr::MapType { key, value, .. } => {
            funclit_bodies_in_expr(key, out);
            funclit_bodies_in_expr(value, out);
        }
        Expr::ChanType { value, .. } => funclit_bodies_in_expr(value, out),
        Expr::Ident(_) | Expr::BasicLit { .. } | Expr::ArrayType { .. } | Expr::Other { .. } => {}
    }
}
