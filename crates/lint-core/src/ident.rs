//! Identifier collection (§4.2): given a syntax node, return every simple
//! name referenced or bound anywhere within it.
//!
//! Collection is pure with respect to the tree and never descends into a
//! controlled block (an `if`'s body, a `for`'s body, a function literal's
//! body, ...) — those are analyzed through their own cursor instead. This is
//! what lets the cuddling core tell "what this statement's head touches"
//! apart from "what its body touches".

use smol_str::SmolStr;

use crate::node::{DeclSpec, Expr, Stmt};
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: SmolStr,
    pub pos: Position,
}

/// Collect every identifier reachable from `stmt` without crossing into a
/// block it controls.
pub fn collect_stmt(stmt: &Stmt) -> Vec<Identifier> {
    let mut out = Vec::new();
    push_stmt(stmt, &mut out);
    out
}

pub fn collect_expr(expr: &Expr) -> Vec<Identifier> {
    let mut out = Vec::new();
    push_expr(expr, &mut out);
    out
}

fn push_opt_stmt(stmt: &Option<Box<Stmt>>, out: &mut Vec<Identifier>) {
    if let Some(s) = stmt {
        push_stmt(s, out);
    }
}

fn push_opt_expr(expr: &Option<Expr>, out: &mut Vec<Identifier>) {
    if let Some(e) = expr {
        push_expr(e, out);
    }
}

fn push_stmt(stmt: &Stmt, out: &mut Vec<Identifier>) {
    match stmt {
        Stmt::If(s) => {
            push_opt_stmt(&s.init, out);
            push_expr(&s.cond, out);
            // Deliberately excludes body and else_branch — see module docs.
        }
        Stmt::For(s) => {
            push_opt_stmt(&s.init, out);
            push_opt_expr(&s.cond, out);
            push_opt_stmt(&s.post, out);
        }
        Stmt::Range(s) => {
            if let Some(k) = &s.key {
                push_expr(k, out);
            }
            if let Some(v) = &s.value {
                push_expr(v, out);
            }
            push_expr(&s.range_expr, out);
        }
        Stmt::Switch(s) => {
            push_opt_stmt(&s.init, out);
            push_opt_expr(&s.tag, out);
        }
        Stmt::TypeSwitch(s) => {
            push_opt_stmt(&s.init, out);
            push_stmt(&s.assign, out);
        }
        Stmt::Select(_) => {}
        Stmt::Defer(s) | Stmt::Go(s) => push_expr(&s.call, out),
        Stmt::Return(s) => {
            for r in &s.results {
                push_expr(r, out);
            }
        }
        Stmt::Assign(s) => {
            for l in &s.lhs {
                push_expr(l, out);
            }
            for r in &s.rhs {
                push_expr(r, out);
            }
        }
        Stmt::IncDec(s) => push_expr(&s.operand, out),
        Stmt::Decl(s) => {
            for spec in &s.specs {
                match spec {
                    DeclSpec::Value { names, values } => {
                        for n in names {
                            push_expr(n, out);
                        }
                        for v in values {
                            push_expr(v, out);
                        }
                    }
                    DeclSpec::Type { name, type_expr } => {
                        push_expr(name, out);
                        push_expr(type_expr, out);
                    }
                }
            }
        }
        Stmt::Branch(_) | Stmt::Label(_) => {}
        Stmt::Expr(s) => push_expr(&s.expr, out),
        Stmt::Send(s) => {
            push_expr(&s.chan, out);
            push_expr(&s.value, out);
        }
        Stmt::Case(s) => {
            for e in &s.exprs {
                push_expr(e, out);
            }
        }
        Stmt::Comm(s) => push_opt_stmt(&s.comm, out),
        Stmt::Block(_) => {}
        Stmt::Unknown(_) => {}
    }
}

fn push_expr(expr: &Expr, out: &mut Vec<Identifier>) {
    match expr {
        Expr::Ident(i) => out.push(Identifier { name: i.name.clone(), pos: i.pos }),
        Expr::Binary { x, y, .. } => {
            push_expr(x, out);
            push_expr(y, out);
        }
        Expr::Unary { x, .. } | Expr::Star { x, .. } | Expr::Paren { x, .. } => push_expr(x, out),
        // Base only, per §4.2.
        Expr::Index { x, .. } | Expr::Slice { x, .. } | Expr::Selector { x, .. } => push_expr(x, out),
        Expr::Call { func, args, .. } => {
            push_expr(func, out);
            for a in args {
                push_expr(a, out);
            }
        }
        Expr::Composite { elts, .. } => {
            for e in elts {
                push_expr(e, out);
            }
        }
        Expr::KeyValue { key, value, .. } => {
            push_expr(key, out);
            push_expr(value, out);
        }
        Expr::TypeAssert { x, .. } => push_expr(x, out),
        Expr::MapType { key, value, .. } => {
            push_expr(key, out);
            push_expr(value, out);
        }
        Expr::ChanType { value, .. } => push_expr(value, out),
        // Function literal bodies are analyzed as their own block, not folded
        // into the enclosing statement's identifier set.
        Expr::FuncLit { .. } => {}
        Expr::BasicLit { .. } | Expr::ArrayType { .. } | Expr::Other { .. } => {}
    }
}
