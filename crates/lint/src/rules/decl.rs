//! `var`/`const`/`type` declarations (§4.10): declarations never cuddle with
//! another declaration, hence `decl_is_valid = false`.

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::Ctx;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Decl) {
        return;
    }
    let empty = Cursor::empty();
    check_cuddling(ctx.cfg, sink, cursor, &empty, Some(1), false, ctx.oracle);
}
