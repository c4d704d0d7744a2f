//! `assign` (§4.10). The ordinary identifier-intersection cuddling check
//! applies (Scenario D requires a diagnostic purely from a missing
//! identifier overlap, which the kind-only "without intersection" variant
//! would never raise — see DESIGN.md for this resolution), plus an optional
//! extra requirement when the right-hand side calls the language's `append`.

use ahash::AHashSet;
use blankline_lint_core::ident::{collect_expr, collect_stmt};
use blankline_lint_core::node::{Expr, Stmt};
use smol_str::SmolStr;

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD};
use crate::dispatch::Ctx;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Assign) {
        return;
    }
    let empty = Cursor::empty();
    check_cuddling(ctx.cfg, sink, cursor, &empty, Some(1), false, ctx.oracle);

    if ctx.cfg.checks.contains(Check::Append) {
        check_append(sink, cursor);
    }
}

fn check_append(sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    let Some(Stmt::Assign(a)) = cursor.current() else { return };
    let Some(prev) = cursor.previous_node() else { return };
    let prev_idents: AHashSet<SmolStr> = collect_stmt(prev).into_iter().map(|i| i.name).collect();

    for rhs in &a.rhs {
        if rhs.call_ident_name() != Some("append") {
            continue;
        }
        let Expr::Call { args, .. } = rhs else { continue };
        let arg_idents: AHashSet<SmolStr> = args.iter().flat_map(collect_expr).map(|i| i.name).collect();
        if arg_idents.is_disjoint(&prev_idents) {
            sink.add(a.start, prev.end(), prev.end(), MESSAGE_ADD);
        }
    }
}

#[cfg(test)]
mod tests {
    use blankline_lint_core::node::builder::*;

    use super::*;
    use crate::config::Config;
    use crate::oracle::NoTypeInfo;

    #[test]
    fn append_args_disjoint_from_previous_is_flagged() {
        let stmts = vec![
            define(2, &["y"], vec![ident("3", 2)]),
            assign(3, blankline_lint_core::node::AssignOp::Reassign, vec![ident("x", 3)], vec![call("append", vec![ident("x", 3), ident("four", 3)], 3)]),
        ];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();
        cursor.next();

        let mut cfg = Config::default();
        cfg.checks.enable(Check::Append);
        let ctx = Ctx { cfg: &cfg, comments: &Default::default(), oracle: &NoTypeInfo };
        let mut sink = DiagnosticSink::new();
        check(&ctx, &mut sink, &mut cursor);
        let diags = sink.into_diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, MESSAGE_ADD);
    }
}
