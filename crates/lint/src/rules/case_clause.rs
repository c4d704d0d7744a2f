//! `case`/`default` and `comm` clauses (§4.10): the clause's own leading
//! blank is checked against its colon, its body is walked as its own
//! statement list, and an overlong clause requires a blank line before the
//! next one.

use blankline_lint_core::node::Stmt;
use blankline_lint_core::position::line_span;

use crate::block_edge::check_leading_newline;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD};
use crate::dispatch::{dispatch_stmts, Ctx};
use crate::cursor::Cursor;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    let Some(stmt) = cursor.current() else { return };

    match stmt {
        Stmt::Case(c) => {
            check_leading_newline(ctx.cfg, sink, c.colon, &c.body, ctx.comments);
            dispatch_stmts(ctx, sink, &c.body);
            flag_next_if_overlong(ctx, sink, cursor, c.start, c.end);
        }
        Stmt::Comm(c) => {
            check_leading_newline(ctx.cfg, sink, c.colon, &c.body, ctx.comments);
            dispatch_stmts(ctx, sink, &c.body);
        }
        _ => {}
    }
}

fn flag_next_if_overlong(
    ctx: &Ctx<'_>,
    sink: &mut DiagnosticSink,
    cursor: &Cursor<'_>,
    start: blankline_lint_core::position::Position,
    end: blankline_lint_core::position::Position,
) {
    if ctx.cfg.case_max_lines == 0 {
        return;
    }
    if line_span(start, end) <= ctx.cfg.case_max_lines {
        return;
    }
    let Some(next) = cursor.stmt_at(cursor.index() + 1) else { return };
    sink.add(next.start(), end, end, MESSAGE_ADD);
}

#[cfg(test)]
mod tests {
    use blankline_lint_core::node::{builder::*, CaseClause};

    use super::*;
    use crate::config::Config;
    use crate::oracle::NoTypeInfo;

    fn case(start: u32, end: u32) -> Stmt {
        Stmt::Case(CaseClause {
            start: pos(start),
            colon: pos(start),
            end: pos(end),
            exprs: vec![ident("x", start)],
            body: vec![expr_stmt(start + 1, call("f", vec![], start + 1))],
        })
    }

    #[test]
    fn overlong_case_requires_a_blank_before_the_next_one() {
        let stmts = vec![case(1, 5), case(6, 7)];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();

        let mut cfg = Config::default();
        cfg.case_max_lines = 3;
        let ctx = Ctx { cfg: &cfg, comments: &Default::default(), oracle: &NoTypeInfo };
        let mut sink = DiagnosticSink::new();
        check(&ctx, &mut sink, &mut cursor);
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn disabled_by_default() {
        let stmts = vec![case(1, 10), case(11, 12)];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();

        let ctx = Ctx { cfg: &Config::default(), comments: &Default::default(), oracle: &NoTypeInfo };
        let mut sink = DiagnosticSink::new();
        check(&ctx, &mut sink, &mut cursor);
        assert!(sink.into_diagnostics().is_empty());
    }
}
