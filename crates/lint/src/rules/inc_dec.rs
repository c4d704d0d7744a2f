//! `x++` / `x--` (§4.10): kind-only cuddling, no identifier intersection
//! required.

use crate::config::Check;
use crate::cuddle::check_cuddling_without_intersection;
use crate::cursor::Cursor;
use crate::diagnostic::DiagnosticSink;
use crate::dispatch::Ctx;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::IncDec) {
        return;
    }
    check_cuddling_without_intersection(ctx.cfg, sink, cursor);
}
