//! `return` (§4.10): flags a return that is itself cuddled when the whole
//! enclosing block is long enough that the reader benefits from a breather
//! before the exit point.

use blankline_lint_core::position::line_span;

use crate::config::Check;
use crate::cursor::Cursor;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD};
use crate::dispatch::Ctx;
use crate::spacing::statements_above;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Return) {
        return;
    }
    let Some(stmt) = cursor.current() else { return };
    if cursor.len() <= 1 {
        return;
    }
    if statements_above(cursor) == 0 {
        return;
    }
    let Some(first) = cursor.stmt_at(0) else { return };
    if line_span(first.start(), stmt.end()) < ctx.cfg.return_max_lines {
        return;
    }

    let Some(prev) = cursor.previous_node() else { return };
    sink.add(stmt.start(), prev.end(), prev.end(), MESSAGE_ADD);
}

#[cfg(test)]
mod tests {
    use blankline_lint_core::node::builder::*;

    use super::*;
    use crate::config::Config;
    use crate::oracle::NoTypeInfo;

    #[test]
    fn long_block_requires_a_blank_before_return() {
        let stmts = vec![
            define(1, &["x"], vec![]),
            define(2, &["y"], vec![]),
            return_stmt(3, vec![ident("y", 3)]),
        ];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();
        cursor.next();
        cursor.next();

        let mut cfg = Config::default();
        cfg.return_max_lines = 2;
        let ctx = Ctx { cfg: &cfg, comments: &Default::default(), oracle: &NoTypeInfo };
        let mut sink = DiagnosticSink::new();
        check(&ctx, &mut sink, &mut cursor);
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn short_block_is_exempt() {
        let stmts = vec![define(1, &["x"], vec![]), return_stmt(2, vec![ident("x", 2)])];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();
        cursor.next();

        let mut cfg = Config::default();
        cfg.return_max_lines = 5;
        let ctx = Ctx { cfg: &cfg, comments: &Default::default(), oracle: &NoTypeInfo };
        let mut sink = DiagnosticSink::new();
        check(&ctx, &mut sink, &mut cursor);
        assert!(sink.into_diagnostics().is_empty());
    }
}
