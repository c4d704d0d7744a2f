//! A configurable blank-line layout checker (§1): given an already-parsed
//! file, decides whether the whitespace between statements and at block
//! edges follows the configured conventions, and returns suggested edits.
//!
//! Source parsing, comment attachment, and applying the suggested edits to
//! disk are all a driver's responsibility — this crate only decides.

pub mod analyzer;
pub mod block_edge;
pub mod config;
pub mod cuddle;
pub mod cursor;
pub mod diagnostic;
pub mod dispatch;
pub mod error;
pub mod oracle;
pub mod rules;
pub mod spacing;

pub use analyzer::Analyzer;
pub use config::{Check, CheckSet, Config, ConfigRequest};
pub use diagnostic::{Diagnostic, FixRange};
pub use error::AnalyzerError;
pub use oracle::ErrorTypeOracle;
