//! Line-distance helper built on top of [`crate::cursor::Cursor`] (§4.1).

use blankline_lint_core::position::consecutive;

use crate::cursor::Cursor;

/// How many statements immediately above the cursor's current one are packed
/// with no blank line between them. Leaves the cursor's index unchanged.
#[must_use]
pub fn statements_above(cursor: &mut Cursor<'_>) -> u32 {
    cursor.save();
    let mut count = 0u32;

    while let Some(cur) = cursor.current() {
        let cur_start = cur.start();
        if !cursor.previous() {
            break;
        }
        match cursor.current() {
            Some(prev) if consecutive(prev.end(), cur_start) => count += 1,
            _ => break,
        }
    }

    cursor.restore();
    count
}
