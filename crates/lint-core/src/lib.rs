//! Syntax-tree and position primitives that the whitespace engine
//! (`blankline-lint`) is built on. Nothing in this crate decides whether a
//! blank line belongs anywhere — it only describes the shapes the engine
//! consumes: positions, an already-parsed statement tree, comments, and
//! identifier collection over that tree.

pub mod comment;
pub mod ident;
pub mod node;
pub mod position;
