//! Leading/trailing blank-line detection for a block or case-clause body,
//! with comment-aware boundary adjustment (§4.6).

use blankline_lint_core::comment::CommentMap;
use blankline_lint_core::node::Stmt;
use blankline_lint_core::position::Position;

use crate::config::{Check, Config};
use crate::diagnostic::{DiagnosticSink, MESSAGE_REMOVE};

/// `open_pos` is the block's opening brace (or a case-clause's colon).
pub fn check_leading_newline(
    cfg: &Config,
    sink: &mut DiagnosticSink,
    open_pos: Position,
    body: &[Stmt],
    comments: &CommentMap,
) {
    if !cfg.checks.contains(Check::LeadingWhitespace) {
        return;
    }
    let Some(first) = body.first() else { return };

    let mut opening = open_pos;
    let mut first_stmt_pos = first.start();

    for comment in comments.strictly_between(open_pos, first_stmt_pos) {
        if comment.start.line == open_pos.line {
            // Case 1: trailing comment on the brace's own line.
            opening = comment.end;
        } else if opening.line == open_pos.line && comment.start.line == open_pos.line + 1 {
            // Case 2: first comment right below the brace.
            opening = comment.end;
        } else if opening.line > open_pos.line {
            // Case 3: continuing a chain of comments already under way.
            opening = comment.end;
        } else {
            // Case 4: a blank line separates the brace from this comment —
            // the offending gap sits in front of it.
            first_stmt_pos = comment.start;
        }
    }

    if opening.line + 1 != first_stmt_pos.line {
        sink.add(opening.next_line(), opening, first_stmt_pos, MESSAGE_REMOVE);
    }
}

/// `close_pos` is the block's closing brace.
pub fn check_trailing_newline(
    cfg: &Config,
    sink: &mut DiagnosticSink,
    body: &[Stmt],
    close_pos: Position,
    comments: &CommentMap,
) {
    if !cfg.checks.contains(Check::TrailingWhitespace) {
        return;
    }
    let Some(last) = body.last() else { return };
    if matches!(last, Stmt::Case(_)) {
        return;
    }

    let mut last_pos = match last {
        Stmt::Label(l) if l.stmt.is_none() => l.start,
        other => other.end(),
    };

    if let Some(comment) = comments.last_ending_before(close_pos) {
        if comment.end > last_pos {
            last_pos = comment.end;
        }
    }

    if last_pos.line + 1 != close_pos.line {
        sink.add(last_pos.next_line(), last_pos, close_pos, MESSAGE_REMOVE);
    }
}

#[cfg(test)]
mod tests {
    use blankline_lint_core::comment::Comment;
    use blankline_lint_core::node::builder::*;

    use super::*;

    fn pos(line: u32) -> Position {
        Position::new("fixture.go", line, 1)
    }

    #[test]
    fn flags_leading_blank_with_no_comments() {
        let body = vec![expr_stmt(3, call("f", vec![], 3))];
        let mut sink = DiagnosticSink::new();
        check_leading_newline(&Config::default(), &mut sink, pos(1), &body, &CommentMap::default());
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn accepts_tight_leading_block() {
        let body = vec![expr_stmt(2, call("f", vec![], 2))];
        let mut sink = DiagnosticSink::new();
        check_leading_newline(&Config::default(), &mut sink, pos(1), &body, &CommentMap::default());
        assert!(sink.into_diagnostics().is_empty());
    }

    #[test]
    fn comment_directly_below_brace_is_accepted() {
        let body = vec![expr_stmt(3, call("f", vec![], 3))];
        let comments = CommentMap::new(vec![Comment::new(pos(2), pos(2))]);
        let mut sink = DiagnosticSink::new();
        check_leading_newline(&Config::default(), &mut sink, pos(1), &body, &comments);
        assert!(sink.into_diagnostics().is_empty());
    }

    #[test]
    fn comment_separated_by_blank_moves_the_boundary_back() {
        let body = vec![expr_stmt(5, call("f", vec![], 5))];
        let comments = CommentMap::new(vec![Comment::new(pos(3), pos(3))]);
        let mut sink = DiagnosticSink::new();
        check_leading_newline(&Config::default(), &mut sink, pos(1), &body, &comments);
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn trailing_blank_is_flagged() {
        let body = vec![expr_stmt(2, call("f", vec![], 2))];
        let mut sink = DiagnosticSink::new();
        check_trailing_newline(&Config::default(), &mut sink, &body, pos(5), &CommentMap::default());
        assert_eq!(sink.into_diagnostics().len(), 1);
    }

    #[test]
    fn case_clause_is_exempt_from_trailing_check() {
        let body = vec![Stmt::Case(blankline_lint_core::node::CaseClause {
            start: pos(2),
            colon: pos(2),
            end: pos(2),
            exprs: vec![],
            body: vec![],
        })];
        let mut sink = DiagnosticSink::new();
        check_trailing_newline(&Config::default(), &mut sink, &body, pos(6), &CommentMap::default());
        assert!(sink.into_diagnostics().is_empty());
    }

    #[test]
    fn empty_labeled_statement_uses_its_start() {
        let body = vec![label_stmt(2, "done", None)];
        let mut sink = DiagnosticSink::new();
        check_trailing_newline(&Config::default(), &mut sink, &body, pos(4), &CommentMap::default());
        assert_eq!(sink.into_diagnostics().len(), 1);
    }
}
