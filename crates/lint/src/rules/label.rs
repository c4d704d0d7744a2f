//! Labels (§4.10): never allowed to cuddle with anything above them.

use crate::config::Check;
use crate::cursor::Cursor;
use crate::diagnostic::{DiagnosticSink, MESSAGE_ADD};
use crate::dispatch::Ctx;
use crate::spacing::statements_above;

pub fn check(ctx: &Ctx<'_>, sink: &mut DiagnosticSink, cursor: &mut Cursor<'_>) {
    if !ctx.cfg.checks.contains(Check::Label) {
        return;
    }
    let Some(stmt) = cursor.current() else { return };
    if statements_above(cursor) == 0 {
        return;
    }
    let Some(prev) = cursor.previous_node() else { return };
    sink.add(stmt.start(), prev.end(), prev.end(), MESSAGE_ADD);
}
