//! The external syntax tree.
//!
//! A real driver hands the engine an already-parsed tree; this module defines
//! the shape of that tree as a closed set of enums rather than an opaque
//! trait object, since no parser lives in this crate. Tests and callers build
//! trees directly with [`builder`].

use smol_str::SmolStr;

use crate::position::Position;

/// A brace-delimited list of statements.
#[derive(Debug, Clone)]
pub struct Block {
    pub lbrace: Position,
    pub rbrace: Position,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(lbrace: Position, rbrace: Position, stmts: Vec<Stmt>) -> Self {
        Self { lbrace, rbrace, stmts }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stmts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Break,
    Continue,
    Goto,
    Fallthrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `:=`
    Define,
    /// `=`, `+=`, `-=`, ...
    Reassign,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub start: Position,
    pub end: Position,
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: Block,
    pub else_branch: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct ForStmt {
    pub start: Position,
    pub end: Position,
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct RangeStmt {
    pub start: Position,
    pub end: Position,
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub is_define: bool,
    pub range_expr: Expr,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct SwitchStmt {
    pub start: Position,
    pub end: Position,
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    /// Body statements are always [`Stmt::Case`].
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct TypeSwitchStmt {
    pub start: Position,
    pub end: Position,
    pub init: Option<Box<Stmt>>,
    /// Either a bare `x.(type)` expression statement or `v := x.(type)`.
    pub assign: Box<Stmt>,
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct SelectStmt {
    pub start: Position,
    pub end: Position,
    /// Body statements are always [`Stmt::Comm`].
    pub body: Block,
}

#[derive(Debug, Clone)]
pub struct CallStmt {
    pub start: Position,
    pub end: Position,
    pub call: Expr,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub start: Position,
    pub end: Position,
    pub results: Vec<Expr>,
}

#[derive(Debug, Clone)]
pub struct AssignStmt {
    pub start: Position,
    pub end: Position,
    pub lhs: Vec<Expr>,
    pub rhs: Vec<Expr>,
    pub op: AssignOp,
}

#[derive(Debug, Clone)]
pub struct IncDecStmt {
    pub start: Position,
    pub end: Position,
    pub operand: Expr,
    pub increment: bool,
}

#[derive(Debug, Clone)]
pub enum DeclSpec {
    Value { names: Vec<Expr>, values: Vec<Expr> },
    Type { name: Expr, type_expr: Expr },
}

#[derive(Debug, Clone)]
pub struct DeclStmt {
    pub start: Position,
    pub end: Position,
    pub specs: Vec<DeclSpec>,
}

#[derive(Debug, Clone)]
pub struct BranchStmt {
    pub start: Position,
    pub end: Position,
    pub kind: BranchKind,
    pub label: Option<SmolStr>,
}

#[derive(Debug, Clone)]
pub struct LabelStmt {
    pub start: Position,
    pub end: Position,
    pub name: SmolStr,
    /// `None` models an empty labeled statement (a label on its own line).
    pub stmt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub start: Position,
    pub end: Position,
    pub expr: Expr,
}

#[derive(Debug, Clone)]
pub struct SendStmt {
    pub start: Position,
    pub end: Position,
    pub chan: Expr,
    pub value: Expr,
}

#[derive(Debug, Clone)]
pub struct CaseClause {
    pub start: Position,
    /// Position of the clause's trailing colon.
    pub colon: Position,
    pub end: Position,
    /// Empty means `default:`.
    pub exprs: Vec<Expr>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct CommClause {
    pub start: Position,
    pub colon: Position,
    pub end: Position,
    /// `None` means `default:`.
    pub comm: Option<Box<Stmt>>,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone)]
pub struct BareBlockStmt {
    pub block: Block,
}

#[derive(Debug, Clone)]
pub struct UnknownStmt {
    pub start: Position,
    pub end: Position,
    pub kind_name: SmolStr,
}

/// A statement. The core never constructs these itself — they arrive already
/// built from the driver's tree.
#[derive(Debug, Clone)]
pub enum Stmt {
    If(IfStmt),
    For(ForStmt),
    Range(RangeStmt),
    Switch(SwitchStmt),
    TypeSwitch(TypeSwitchStmt),
    Select(SelectStmt),
    Defer(CallStmt),
    Go(CallStmt),
    Return(ReturnStmt),
    Assign(AssignStmt),
    IncDec(IncDecStmt),
    Decl(DeclStmt),
    Branch(BranchStmt),
    Label(LabelStmt),
    Expr(ExprStmt),
    Send(SendStmt),
    Case(CaseClause),
    Comm(CommClause),
    Block(BareBlockStmt),
    /// A syntax-node kind this crate doesn't model. Tolerated, never crashes.
    Unknown(UnknownStmt),
}

impl Stmt {
    #[must_use]
    pub fn start(&self) -> Position {
        match self {
            Stmt::If(s) => s.start,
            Stmt::For(s) => s.start,
            Stmt::Range(s) => s.start,
            Stmt::Switch(s) => s.start,
            Stmt::TypeSwitch(s) => s.start,
            Stmt::Select(s) => s.start,
            Stmt::Defer(s) | Stmt::Go(s) => s.start,
            Stmt::Return(s) => s.start,
            Stmt::Assign(s) => s.start,
            Stmt::IncDec(s) => s.start,
            Stmt::Decl(s) => s.start,
            Stmt::Branch(s) => s.start,
            Stmt::Label(s) => s.start,
            Stmt::Expr(s) => s.start,
            Stmt::Send(s) => s.start,
            Stmt::Case(s) => s.start,
            Stmt::Comm(s) => s.start,
            Stmt::Block(s) => s.block.lbrace,
            Stmt::Unknown(s) => s.start,
        }
    }

    #[must_use]
    pub fn end(&self) -> Position {
        match self {
            Stmt::If(s) => s.end,
            Stmt::For(s) => s.end,
            Stmt::Range(s) => s.end,
            Stmt::Switch(s) => s.end,
            Stmt::TypeSwitch(s) => s.end,
            Stmt::Select(s) => s.end,
            Stmt::Defer(s) | Stmt::Go(s) => s.end,
            Stmt::Return(s) => s.end,
            Stmt::Assign(s) => s.end,
            Stmt::IncDec(s) => s.end,
            Stmt::Decl(s) => s.end,
            Stmt::Branch(s) => s.end,
            Stmt::Label(s) => s.end,
            Stmt::Expr(s) => s.end,
            Stmt::Send(s) => s.end,
            Stmt::Case(s) => s.end,
            Stmt::Comm(s) => s.end,
            Stmt::Block(s) => s.block.rbrace,
            Stmt::Unknown(s) => s.end,
        }
    }

    /// The label on this statement for the purposes of the dispatcher's
    /// diagnostic logging, independent of position.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::If(_) => "if",
            Stmt::For(_) => "for",
            Stmt::Range(_) => "range",
            Stmt::Switch(_) => "switch",
            Stmt::TypeSwitch(_) => "type-switch",
            Stmt::Select(_) => "select",
            Stmt::Defer(_) => "defer",
            Stmt::Go(_) => "go",
            Stmt::Return(_) => "return",
            Stmt::Assign(_) => "assign",
            Stmt::IncDec(_) => "inc-dec",
            Stmt::Decl(_) => "decl",
            Stmt::Branch(_) => "branch",
            Stmt::Label(_) => "label",
            Stmt::Expr(_) => "expr",
            Stmt::Send(_) => "send",
            Stmt::Case(_) => "case",
            Stmt::Comm(_) => "comm",
            Stmt::Block(_) => "block",
            Stmt::Unknown(_) => "unknown",
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentExpr {
    pub pos: Position,
    pub name: SmolStr,
}

#[derive(Debug, Clone)]
pub enum Expr {
    Ident(IdentExpr),
    Binary { start: Position, end: Position, x: Box<Expr>, y: Box<Expr> },
    Unary { start: Position, end: Position, x: Box<Expr> },
    Star { start: Position, end: Position, x: Box<Expr> },
    Paren { start: Position, end: Position, x: Box<Expr> },
    Index { start: Position, end: Position, x: Box<Expr>, index: Box<Expr> },
    Slice {
        start: Position,
        end: Position,
        x: Box<Expr>,
        low: Option<Box<Expr>>,
        high: Option<Box<Expr>>,
        max: Option<Box<Expr>>,
    },
    Selector { start: Position, end: Position, x: Box<Expr>, sel: SmolStr },
    Call { start: Position, end: Position, func: Box<Expr>, args: Vec<Expr> },
    Composite { start: Position, end: Position, elts: Vec<Expr> },
    KeyValue { start: Position, end: Position, key: Box<Expr>, value: Box<Expr> },
    TypeAssert { start: Position, end: Position, x: Box<Expr>, type_expr: Option<Box<Expr>> },
    MapType { start: Position, end: Position, key: Box<Expr>, value: Box<Expr> },
    ChanType { start: Position, end: Position, value: Box<Expr> },
    FuncLit { start: Position, end: Position, body: Block },
    BasicLit { start: Position, end: Position },
    /// A bare array/slice type, e.g. `[]int`. Contributes no identifiers.
    ArrayType { start: Position, end: Position, elt: Box<Expr> },
    /// A syntax-node kind this crate doesn't model.
    Other { start: Position, end: Position },
}

impl Expr {
    #[must_use]
    pub fn start(&self) -> Position {
        match self {
            Expr::Ident(i) => i.pos,
            Expr::Binary { start, .. }
            | Expr::Unary { start, .. }
            | Expr::Star { start, .. }
            | Expr::Paren { start, .. }
            | Expr::Index { start, .. }
            | Expr::Slice { start, .. }
            | Expr::Selector { start, .. }
            | Expr::Call { start, .. }
            | Expr::Composite { start, .. }
            | Expr::KeyValue { start, .. }
            | Expr::TypeAssert { start, .. }
            | Expr::MapType { start, .. }
            | Expr::ChanType { start, .. }
            | Expr::FuncLit { start, .. }
            | Expr::BasicLit { start, .. }
            | Expr::ArrayType { start, .. }
            | Expr::Other { start, .. } => *start,
        }
    }

    #[must_use]
    pub fn end(&self) -> Position {
        match self {
            Expr::Ident(i) => i.pos,
            Expr::Binary { end, .. }
            | Expr::Unary { end, .. }
            | Expr::Star { end, .. }
            | Expr::Paren { end, .. }
            | Expr::Index { end, .. }
            | Expr::Slice { end, .. }
            | Expr::Selector { end, .. }
            | Expr::Call { end, .. }
            | Expr::Composite { end, .. }
            | Expr::KeyValue { end, .. }
            | Expr::TypeAssert { end, .. }
            | Expr::MapType { end, .. }
            | Expr::ChanType { end, .. }
            | Expr::FuncLit { end, .. }
            | Expr::BasicLit { end, .. }
            | Expr::ArrayType { end, .. }
            | Expr::Other { end, .. } => *end,
        }
    }

    /// The name of the call's target, if the call is directly on a bare
    /// identifier (e.g. `append(...)`, not `pkg.Append(...)`).
    #[must_use]
    pub fn call_ident_name(&self) -> Option<&str> {
        match self {
            Expr::Call { func, .. } => match func.as_ref() {
                Expr::Ident(i) => Some(i.name.as_str()),
                _ => None,
            },
            _ => None,
        }
    }
}

/// A top-level function declaration, the only entry point the engine walks
/// from. Methods and closures are reached through function literals nested
/// inside a body.
#[derive(Debug, Clone)]
pub struct FuncDecl {
    pub name: SmolStr,
    pub body: Option<Block>,
}

/// A source file's declarations, in order.
#[derive(Debug, Clone, Default)]
pub struct File {
    pub funcs: Vec<FuncDecl>,
}

pub mod builder {
    //! Small constructors used by tests to build fixture trees without a
    //! parser. Every helper takes a `line: u32` for the statement's start,
    //! which is all the engine consumes.

    use super::*;

    pub fn pos(line: u32) -> Position {
        Position::new("fixture.go", line, 1)
    }

    pub fn ident(name: &str, line: u32) -> Expr {
        Expr::Ident(IdentExpr { pos: pos(line), name: name.into() })
    }

    pub fn call(name: &str, args: Vec<Expr>, line: u32) -> Expr {
        Expr::Call {
            start: pos(line),
            end: pos(line),
            func: Box::new(ident(name, line)),
            args,
        }
    }

    pub fn selector_call(recv: &str, method: &str, args: Vec<Expr>, line: u32) -> Expr {
        Expr::Call {
            start: pos(line),
            end: pos(line),
            func: Box::new(Expr::Selector {
                start: pos(line),
                end: pos(line),
                x: Box::new(ident(recv, line)),
                sel: method.into(),
            }),
            args,
        }
    }

    pub fn block(lbrace_line: u32, stmts: Vec<Stmt>, rbrace_line: u32) -> Block {
        Block::new(pos(lbrace_line), pos(rbrace_line), stmts)
    }

    pub fn assign(line: u32, op: AssignOp, lhs: Vec<Expr>, rhs: Vec<Expr>) -> Stmt {
        Stmt::Assign(AssignStmt { start: pos(line), end: pos(line), lhs, rhs, op })
    }

    pub fn define(line: u32, names: &[&str], rhs: Vec<Expr>) -> Stmt {
        assign(
            line,
            AssignOp::Define,
            names.iter().map(|n| ident(n, line)).collect(),
            rhs,
        )
    }

    pub fn expr_stmt(line: u32, expr: Expr) -> Stmt {
        Stmt::Expr(ExprStmt { start: pos(line), end: pos(line), expr })
    }

    pub fn if_stmt(line: u32, cond: Expr, body: Block, else_branch: Option<Stmt>) -> Stmt {
        Stmt::If(IfStmt {
            start: pos(line),
            end: body.rbrace,
            init: None,
            cond,
            body,
            else_branch: else_branch.map(Box::new),
        })
    }

    pub fn defer_stmt(line: u32, call: Expr) -> Stmt {
        Stmt::Defer(CallStmt { start: pos(line), end: pos(line), call })
    }

    pub fn go_stmt(line: u32, call: Expr) -> Stmt {
        Stmt::Go(CallStmt { start: pos(line), end: pos(line), call })
    }

    pub fn return_stmt(line: u32, results: Vec<Expr>) -> Stmt {
        Stmt::Return(ReturnStmt { start: pos(line), end: pos(line), results })
    }

    pub fn label_stmt(line: u32, name: &str, stmt: Option<Stmt>) -> Stmt {
        Stmt::Label(LabelStmt {
            start: pos(line),
            end: stmt.as_ref().map_or(pos(line), Stmt::end),
            name: name.into(),
            stmt: stmt.map(Box::new),
        })
    }

    pub fn branch_stmt(line: u32, kind: BranchKind) -> Stmt {
        Stmt::Branch(BranchStmt { start: pos(line), end: pos(line), kind, label: None })
    }
}
