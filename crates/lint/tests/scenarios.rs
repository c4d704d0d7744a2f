//! The named scenarios from §8, plus the universal properties that must
//! hold regardless of configuration.

use blankline_lint::analyzer::Analyzer;
use blankline_lint::config::{Check, Config};
use blankline_lint::diagnostic::{MESSAGE_ADD, MESSAGE_REMOVE};
use blankline_lint::oracle::NoTypeInfo;
use blankline_lint_core::comment::CommentMap;
use blankline_lint_core::node::builder::*;
use blankline_lint_core::node::{File, FuncDecl};
use pretty_assertions::assert_eq;

fn single_func(body: blankline_lint_core::node::Block) -> File {
    File { funcs: vec![FuncDecl { name: "f".into(), body: Some(body) }] }
}

/// Scenario A: two cuddled assignments before an `if` that only shares one
/// identifier, with two statements stacked above (max 1).
#[test]
fn scenario_a_assignment_cuddling() {
    let body = block(
        1,
        vec![
            define(2, &["a"], vec![]),
            define(3, &["b"], vec![]),
            if_stmt(4, ident("b", 4), block(4, vec![expr_stmt(4, call("panic", vec![ident("1", 4)], 4))], 4), None),
        ],
        5,
    );
    let diags = Analyzer::new(Config::default()).analyze_file(&single_func(body), &CommentMap::default(), &NoTypeInfo);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].report_at.line, 4);
    assert_eq!(diags[0].message, MESSAGE_ADD);
}

/// Scenario B: an `err`-cuddle under the `err` check.
#[test]
fn scenario_b_error_cuddle() {
    let body = block(
        1,
        vec![
            define(2, &["err"], vec![call("New", vec![ident("x", 2)], 2)]),
            if_stmt(4, ident("err", 4), block(4, vec![expr_stmt(4, call("panic", vec![ident("err", 4)], 4))], 4), None),
        ],
        5,
    );
    let mut cfg = Config::default();
    cfg.checks.enable(Check::Err);

    let diags = Analyzer::new(cfg).analyze_file(&single_func(body), &CommentMap::default(), &(|n: &str| n == "err"));

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].report_at.line, 4);
    assert_eq!(diags[0].message, MESSAGE_REMOVE);
}

/// Scenario C: a leading blank inside a block.
#[test]
fn scenario_c_leading_blank() {
    let body = block(1, vec![expr_stmt(3, call("Println", vec![], 3))], 4);
    let diags = Analyzer::new(Config::default()).analyze_file(&single_func(body), &CommentMap::default(), &NoTypeInfo);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].report_at.line, 2);
    assert_eq!(diags[0].message, MESSAGE_REMOVE);
}

/// Scenario D: the append-specific rule is inert, but the baseline
/// assignment-cuddling rule still fires because `x` was never bound above.
#[test]
fn scenario_d_append_intersection() {
    let body = block(
        1,
        vec![
            define(1, &["x"], vec![]),
            define(2, &["y"], vec![ident("3", 2)]),
            assign(
                3,
                blankline_lint_core::node::AssignOp::Reassign,
                vec![ident("x", 3)],
                vec![call("append", vec![ident("x", 3), ident("four", 3)], 3)],
            ),
        ],
        4,
    );
    let mut cfg = Config::default();
    cfg.checks.enable(Check::Append);

    let diags = Analyzer::new(cfg).analyze_file(&single_func(body), &CommentMap::default(), &NoTypeInfo);

    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].report_at.line, 3);
}

/// Scenario E: a defer sharing a variable with the statement above cuddles
/// cleanly.
#[test]
fn scenario_e_defer_with_shared_variable() {
    let body = block(1, vec![define(1, &["f"], vec![]), defer_stmt(2, selector_call("f", "Close", vec![], 2))], 3);
    let diags = Analyzer::new(Config::default()).analyze_file(&single_func(body), &CommentMap::default(), &NoTypeInfo);

    assert!(diags.is_empty());
}

/// Scenario F: else-branch visibility under whole-block mode.
#[test]
fn scenario_f_else_branch_visibility() {
    let make_body = |allow_whole_block: bool| {
        let else_body = block(4, vec![expr_stmt(5, call("use", vec![ident("x", 5)], 5))], 6);
        let main_body = block(2, vec![expr_stmt(3, call("use", vec![ident("x", 3)], 3))], 4);
        let stmt = if_stmt(
            2,
            ident("cond", 2),
            main_body,
            Some(blankline_lint_core::node::Stmt::Block(blankline_lint_core::node::BareBlockStmt { block: else_body })),
        );
        block(1, vec![define(1, &["x"], vec![]), stmt], 7)
    };

    let mut cfg = Config::default();
    cfg.allow_whole_block = true;
    let diags = Analyzer::new(cfg).analyze_file(&single_func(make_body(true)), &CommentMap::default(), &NoTypeInfo);
    assert!(diags.is_empty());

    let diags = Analyzer::new(Config::default()).analyze_file(&single_func(make_body(false)), &CommentMap::default(), &NoTypeInfo);
    assert_eq!(diags.len(), 1);
}

#[test]
fn clean_file_is_silent_under_any_configuration() {
    let body = block(1, vec![define(2, &["x"], vec![ident("y", 2)])], 3);
    let file = single_func(body);

    for cfg in [Config::default(), Config::enable_all(), Config::disable_all()] {
        let diags = Analyzer::new(cfg).analyze_file(&file, &CommentMap::default(), &NoTypeInfo);
        assert!(diags.is_empty());
    }
}

#[test]
fn disabling_every_check_is_always_silent() {
    let body = block(1, vec![expr_stmt(4, call("f", vec![], 4))], 6);
    let diags = Analyzer::new(Config::disable_all()).analyze_file(&single_func(body), &CommentMap::default(), &NoTypeInfo);
    assert!(diags.is_empty());
}

#[test]
fn enabling_every_check_is_a_superset_of_the_default_set() {
    let body = block(
        1,
        vec![
            define(2, &["x"], vec![]),
            define(3, &["y"], vec![]),
            if_stmt(4, ident("y", 4), block(4, vec![], 4), None),
        ],
        5,
    );
    let file = single_func(body);

    let default_positions: Vec<_> = Analyzer::new(Config::default())
        .analyze_file(&file, &CommentMap::default(), &NoTypeInfo)
        .into_iter()
        .map(|d| d.report_at)
        .collect();
    let all_positions: Vec<_> = Analyzer::new(Config::enable_all())
        .analyze_file(&file, &CommentMap::default(), &NoTypeInfo)
        .into_iter()
        .map(|d| d.report_at)
        .collect();

    for pos in default_positions {
        assert!(all_positions.contains(&pos));
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let body = block(1, vec![define(2, &["a"], vec![]), define(3, &["b"], vec![]), expr_stmt(4, call("f", vec![ident("b", 4)], 4))], 5);
    let file = single_func(body);

    let first = Analyzer::new(Config::default()).analyze_file(&file, &CommentMap::default(), &NoTypeInfo);
    let second = Analyzer::new(Config::default()).analyze_file(&file, &CommentMap::default(), &NoTypeInfo);

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.report_at, b.report_at);
        assert_eq!(a.message, b.message);
    }
}
