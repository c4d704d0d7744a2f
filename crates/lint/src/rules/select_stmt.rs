//! `select` (§4.10): its body is walked (each comm-clause dispatched like any
//! other statement), but the `select` statement itself has no cuddling check.

use blankline_lint_core::node::Stmt;

use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::{dispatch_block_of, Ctx};

pub fn check<'a>(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'a>) -> Option<Cursor<'a>> {
    let Some(Stmt::Select(s)) = cursor.current() else { return None };
    Some(dispatch_block_of(ctx, sink, &s.body))
}
