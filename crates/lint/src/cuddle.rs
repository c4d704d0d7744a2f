//! The cuddling core (§4.8, §4.9): the central decision for whether a
//! statement is allowed to sit directly below its neighbor with no blank
//! line between them.

use ahash::AHashSet;
use blankline_lint_core::ident::{collect_expr, collect_stmt};
use blankline_lint_core::node::{DeclSpec, Stmt};
use smol_str::SmolStr;

use crate::config::{Check, Config};
use crate::cursor::Cursor;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD, MESSAGE_REMOVE};
use crate::oracle::ErrorTypeOracle;
use crate::spacing::statements_above;

/// Names a statement *binds*, as opposed to merely uses — the relevant set
/// for whole-block and first-in-block visibility (§4.8 steps 5-6).
fn bound_names(stmt: &Stmt) -> AHashSet<SmolStr> {
    match stmt {
        Stmt::Assign(a) => a.lhs.iter().flat_map(collect_expr).map(|i| i.name).collect(),
        Stmt::Decl(d) => d
            .specs
            .iter()
            .flat_map(|spec| match spec {
                DeclSpec::Value { names, .. } => names.iter().flat_map(collect_expr).map(|i| i.name).collect::<Vec<_>>(),
                DeclSpec::Type { name, .. } => collect_expr(name).into_iter().map(|i| i.name).collect(),
            })
            .collect(),
        _ => AHashSet::default(),
    }
}

fn ident_set(stmt: &Stmt) -> AHashSet<SmolStr> {
    collect_stmt(stmt).into_iter().map(|i| i.name).collect()
}

/// `cursor` is positioned at the statement under consideration. `block_cursor`
/// describes the body this statement itself controls (empty for statements
/// without one). `max_allowed` is `None` for "no cap".
pub fn check_cuddling(
    cfg: &Config,
    sink: &mut DiagnosticSink,
    cursor: &mut Cursor<'_>,
    block_cursor: &Cursor<'_>,
    max_allowed: Option<u32>,
    decl_is_valid: bool,
    oracle: &dyn ErrorTypeOracle,
) {
    let Some(stmt) = cursor.current() else { return };

    let n = statements_above(cursor);
    if n == 0 {
        check_error(cfg, sink, cursor, oracle);
        return;
    }

    let Some(prev) = cursor.previous_node() else { return };

    let prev_is_assign = matches!(prev, Stmt::Assign(_));
    let prev_is_decl = decl_is_valid && matches!(prev, Stmt::Decl(_));
    let prev_is_inc_dec = matches!(prev, Stmt::IncDec(_));
    let curr_is_defer = matches!(stmt, Stmt::Defer(_));

    if !(prev_is_assign || prev_is_decl || prev_is_inc_dec || curr_is_defer) {
        emit_missing_at_current(sink, stmt, prev);
        return;
    }

    if cfg.allow_whole_block {
        let bound = bound_names(prev);
        if bound.iter().any(|name| block_cursor.all_idents().contains(name)) {
            maybe_break_stack_above_previous(cfg, sink, cursor, stmt, prev, n, max_allowed);
            return;
        }
    }

    if cfg.allow_first_in_block {
        let prev_idents = ident_set(prev);
        let groups = block_cursor.first_ident_groups(cfg.first_in_block_max_depth);
        if groups.iter().flatten().any(|name| prev_idents.contains(name)) {
            maybe_break_stack_above_previous(cfg, sink, cursor, stmt, prev, n, max_allowed);
            return;
        }
    }

    let stmt_idents = ident_set(stmt);
    let prev_idents = ident_set(prev);
    if stmt_idents.is_disjoint(&prev_idents) {
        emit_missing_at_current(sink, stmt, prev);
        return;
    }

    if let Some(max) = max_allowed {
        if n > max {
            emit_missing_at_previous(cursor, sink, stmt, prev);
        }
    }
}

/// Statements whose cuddling predecessor must match kind (no identifier
/// intersection required): assignments and increment/decrement (§4.8, second
/// variant).
pub fn check_cuddling_without_intersection(cfg: &Config, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    let Some(stmt) = cursor.current() else { return };

    let n = statements_above(cursor);
    if n == 0 {
        return;
    }

    let Some(prev) = cursor.previous_node() else { return };

    let prev_is_assign = matches!(prev, Stmt::Assign(_));
    let prev_is_decl = matches!(prev, Stmt::Decl(_)) && !cfg.checks.contains(Check::Decl);
    let prev_is_inc_dec = matches!(prev, Stmt::IncDec(_));

    if !(prev_is_assign || prev_is_decl || prev_is_inc_dec) {
        emit_missing_at_current(sink, stmt, prev);
        return;
    }

    if cfg.checks.contains(Check::AssignExclusive) {
        if let (Stmt::Assign(cur_assign), Stmt::Assign(prev_assign)) = (stmt, prev) {
            if cur_assign.op != prev_assign.op {
                emit_missing_at_current(sink, stmt, prev);
            }
        }
    }
}

/// The error-cuddling special case (§4.9): a bare conditional with nothing
/// immediately above it may still be flagged, in the opposite direction, when
/// the statement above it produced an error value.
fn check_error(cfg: &Config, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>, oracle: &dyn ErrorTypeOracle) {
    if !cfg.checks.contains(Check::Err) {
        return;
    }
    let Some(if_stmt) = cursor.current() else { return };
    if !matches!(if_stmt, Stmt::If(_)) {
        return;
    }
    let Some(prev) = cursor.stmt_at(cursor.index() - 1) else { return };

    let prev_idents = collect_stmt(prev);
    if prev_idents.is_empty() {
        return;
    }
    if !prev_idents.iter().any(|ident| oracle.implements_error(&ident.name)) {
        return;
    }

    sink.add(if_stmt.start(), prev.end(), if_stmt.start(), MESSAGE_REMOVE);

    // Whether the prior statement is itself already cuddled with its own
    // predecessor — if so, pulling the if up would stack three in a row.
    let prev_prev = cursor.stmt_at(cursor.index() - 2);
    let prev_above = prev_prev.is_some_and(|pp| blankline_lint_core::position::consecutive(pp.end(), prev.start()));

    if prev_above {
        let at = prev_prev.map_or(prev.start(), Stmt::start);
        sink.add(if_stmt.start(), at, prev.start(), MESSAGE_ADD);
    }
}

fn maybe_break_stack_above_previous(
    _cfg: &Config,
    sink: &mut DiagnosticSink,
    cursor: &Cursor<'_>,
    stmt: &Stmt,
    prev: &Stmt,
    n: u32,
    max_allowed: Option<u32>,
) {
    let Some(max) = max_allowed else { return };
    if n <= max {
        return;
    }
    emit_missing_at_previous(cursor, sink, stmt, prev);
}

fn emit_missing_at_current(sink: &mut DiagnosticSink, stmt: &Stmt, prev: &Stmt) {
    sink.add(stmt.start(), prev.end(), prev.end(), MESSAGE_ADD);
}

/// Breaks the stack one boundary further up: the immediate cuddle with `prev`
/// is left intact, but `prev`'s own predecessor must be separated from it.
fn emit_missing_at_previous(cursor: &Cursor<'_>, sink: &mut DiagnosticSink, stmt: &Stmt, prev: &Stmt) {
    let prev_prev = cursor.stmt_at(cursor.index() - 2);
    let at = prev_prev.map_or(prev.start(), Stmt::start);
    sink.add(stmt.start(), at, at, MESSAGE_ADD);
}
