//! Channel sends (§4.10): ordinary cuddling, checked against both the
//! channel and the value identifiers (both are already part of the
//! statement's collected identifiers).

use crate::config::Check;
use crate::cuddle::check_cuddling;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::Ctx;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Send) {
        return;
    }
    let empty = Cursor::empty();
    check_cuddling(ctx.cfg, sink, cursor, &empty, Some(1), true, ctx.oracle);
}
