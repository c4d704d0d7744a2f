//! A stateful pointer into a single block's statement list (§3, §4.3).
//!
//! The index is a plain `isize` with an internal save stack mirroring the
//! original tool's `Cursor` (`saves []int` + `Reset` popping the last one) —
//! nested `save`/`restore` composes LIFO without needing to thread a saved
//! value back to every call site.

use ahash::AHashSet;
use blankline_lint_core::node::Stmt;
use smol_str::SmolStr;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    stmts: &'a [Stmt],
    index: isize,
    saves: Vec<isize>,
    all_idents: AHashSet<SmolStr>,
    first_ident_groups: Vec<Vec<SmolStr>>,
}

impl<'a> Cursor<'a> {
    #[must_use]
    pub fn new(stmts: &'a [Stmt]) -> Self {
        Self { stmts, index: -1, saves: Vec::new(), all_idents: AHashSet::default(), first_ident_groups: Vec::new() }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::new(&[])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stmts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> isize {
        self.index
    }

    pub fn next(&mut self) -> bool {
        if self.index >= self.len() as isize - 1 {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn previous(&mut self) -> bool {
        if self.index <= 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn save(&mut self) {
        self.saves.push(self.index);
    }

    pub fn restore(&mut self) {
        if let Some(i) = self.saves.pop() {
            self.index = i;
        }
    }

    pub fn peek_next(&mut self) -> bool {
        self.save();
        let moved = self.next();
        self.restore();
        moved
    }

    pub fn peek_previous(&mut self) -> bool {
        self.save();
        let moved = self.previous();
        self.restore();
        moved
    }

    #[must_use]
    pub fn current(&self) -> Option<&'a Stmt> {
        (self.index >= 0).then(|| self.stmts.get(self.index as usize)).flatten()
    }

    /// The statement immediately before the current one, without moving.
    #[must_use]
    pub fn previous_node(&self) -> Option<&'a Stmt> {
        let prev_idx = self.index - 1;
        (prev_idx >= 0).then(|| self.stmts.get(prev_idx as usize)).flatten()
    }

    #[must_use]
    pub fn stmt_at(&self, idx: isize) -> Option<&'a Stmt> {
        (idx >= 0).then(|| self.stmts.get(idx as usize)).flatten()
    }

    /// Record `idents` into the block-wide set. When `is_first` is true
    /// (the statement owning these idents is the block's first), they also
    /// become a new first-identifier group at the next depth.
    pub fn add_idents(&mut self, idents: impl IntoIterator<Item = SmolStr>, is_first: bool) {
        let names: Vec<SmolStr> = idents.into_iter().collect();
        self.all_idents.extend(names.iter().cloned());
        if is_first {
            self.first_ident_groups.push(names);
        }
    }

    /// Union `other`'s identifiers into this set, without touching the
    /// first-identifier depth chain. Used when a *non-first* statement's own
    /// controlled block finishes walking — its content still counts for
    /// whole-block visibility, but it isn't reachable through a chain of
    /// "first statements", so it must not become a first-identifier group.
    pub fn absorb(&mut self, other: &Cursor<'_>) {
        self.all_idents.extend(other.all_idents.iter().cloned());
    }

    /// Fold a child block's cursor into this one after returning from that
    /// child (§4.3). Only call this when the child was reached through the
    /// current statement being this cursor's *first* statement — otherwise
    /// use [`Cursor::absorb`].
    pub fn extend(&mut self, other: Cursor<'_>) {
        self.all_idents.extend(other.all_idents);
        self.first_ident_groups.extend(other.first_ident_groups);
    }

    /// Unify a sibling branch's top-level first-idents into this cursor's own
    /// first group — used for if/else-if/else propagation (§4.11), where the
    /// sibling sits at the *same* depth rather than one deeper.
    pub fn merge(&mut self, other: Cursor<'_>) {
        self.all_idents.extend(other.all_idents);
        if let Some(top) = other.first_ident_groups.into_iter().next() {
            match self.first_ident_groups.first_mut() {
                Some(first) => first.extend(top),
                None => self.first_ident_groups.push(top),
            }
        }
    }

    /// Flatten every depth down into a single group, in preparation for this
    /// cursor being merged as one group one level up (used when an else-if
    /// chain's nested conditional returns control to its parent).
    pub fn retain(&mut self) {
        if self.first_ident_groups.len() <= 1 {
            return;
        }
        let flattened: Vec<SmolStr> = self.first_ident_groups.drain(..).flatten().collect();
        self.first_ident_groups.push(flattened);
    }

    #[must_use]
    pub fn all_idents(&self) -> &AHashSet<SmolStr> {
        &self.all_idents
    }

    /// The first `depth` first-identifier groups, innermost included.
    #[must_use]
    pub fn first_ident_groups(&self, depth: usize) -> &[Vec<SmolStr>] {
        let take = depth.min(self.first_ident_groups.len());
        &self.first_ident_groups[..take]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blankline_lint_core::node::builder::*;

    #[test]
    fn nested_save_restore_is_lifo() {
        let stmts = vec![expr_stmt(1, ident("a", 1)), expr_stmt(2, ident("b", 2)), expr_stmt(3, ident("c", 3))];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();
        cursor.next();
        assert_eq!(cursor.index(), 1);

        cursor.save();
        cursor.next();
        cursor.save();
        cursor.next();
        assert_eq!(cursor.index(), 3);
        cursor.restore();
        assert_eq!(cursor.index(), 2);
        cursor.restore();
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn peek_does_not_mutate_visible_state() {
        let stmts = vec![expr_stmt(1, ident("a", 1)), expr_stmt(2, ident("b", 2))];
        let mut cursor = Cursor::new(&stmts);
        cursor.next();
        assert!(cursor.peek_next());
        assert_eq!(cursor.index(), 0);
        assert!(cursor.peek_previous());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn extend_concatenates_groups_merge_unifies_top() {
        let stmts: Vec<Stmt> = Vec::new();
        let mut parent = Cursor::new(&stmts);
        parent.add_idents(["a".into()], true);

        let mut child = Cursor::new(&stmts);
        child.add_idents(["b".into()], true);
        parent.extend(child);

        assert_eq!(parent.first_ident_groups(2).len(), 2);
        assert!(parent.all_idents().contains("b"));

        let mut sibling = Cursor::new(&stmts);
        sibling.add_idents(["c".into()], true);
        parent.merge(sibling);
        assert!(parent.first_ident_groups(1)[0].iter().any(|n| n == "c"));
    }

    #[test]
    fn retain_flattens_depths() {
        let stmts: Vec<Stmt> = Vec::new();
        let mut cursor = Cursor::new(&stmts);
        cursor.add_idents(["a".into()], true);
        let mut child = Cursor::new(&stmts);
        child.add_idents(["b".into()], true);
        cursor.extend(child);
        assert_eq!(cursor.first_ident_groups(2).len(), 2);

        cursor.retain();
        assert_eq!(cursor.first_ident_groups(2).len(), 1);
        assert!(cursor.first_ident_groups(1)[0].iter().any(|n| n == "a"));
        assert!(cursor.first_ident_groups(1)[0].iter().any(|n| n == "b"));
    }
}
