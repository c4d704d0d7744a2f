//! The top-level entry point (§SUPPLEMENT item 1): bundles a configuration
//! with the driver-supplied collaborators and walks a whole file.

use blankline_lint_core::comment::CommentMap;
use blankline_lint_core::node::File;
use blankline_lint_core::position::Position;

use crate::config::Config;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::dispatch::{dispatch_block_of, Ctx};
use crate::oracle::ErrorTypeOracle;

/// A single-file whitespace analysis pass.
///
/// Holds nothing but the configuration — one instance can be reused across
/// every file in a package, matching the "configuration is plain data,
/// nothing is global" requirement (§4.4).
pub struct Analyzer {
    config: Config,
}

impl Analyzer {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Analyze one already-parsed file. `implements_error` is the driver's
    /// type-query predicate (§6); pass [`crate::oracle::NoTypeInfo`] when no
    /// type information is available.
    pub fn analyze_file(&self, file: &File, comments: &CommentMap, oracle: &dyn ErrorTypeOracle) -> Vec<Diagnostic> {
        let ctx = Ctx { cfg: &self.config, comments, oracle };
        let mut sink = DiagnosticSink::new();

        for func in &file.funcs {
            if let Some(body) = &func.body {
                dispatch_block_of(&ctx, &mut sink, body);
            }
        }

        sink.into_diagnostics()
    }

    /// The synthetic single diagnostic for a file the upstream parser could
    /// not produce a tree for (§4.12, §7 category 2).
    #[must_use]
    pub fn invalid_syntax(at: Position) -> Vec<Diagnostic> {
        vec![Diagnostic::invalid_syntax(at)]
    }
}

#[cfg(test)]
mod tests {
    use blankline_lint_core::node::builder::*;
    use blankline_lint_core::node::{File, FuncDecl};

    use super::*;
    use crate::oracle::NoTypeInfo;

    #[test]
    fn clean_function_produces_no_diagnostics() {
        let body = block(1, vec![define(2, &["x"], vec![ident("y", 2)])], 3);
        let file = File { funcs: vec![FuncDecl { name: "f".into(), body: Some(body) }] };

        let analyzer = Analyzer::new(Config::default());
        let diags = analyzer.analyze_file(&file, &CommentMap::default(), &NoTypeInfo);
        assert!(diags.is_empty());
    }

    #[test]
    fn disabling_every_check_yields_nothing_even_on_bad_layout() {
        let body = block(1, vec![define(3, &["x"], vec![])], 4);
        let file = File { funcs: vec![FuncDecl { name: "f".into(), body: Some(body) }] };

        let analyzer = Analyzer::new(Config::disable_all());
        let diags = analyzer.analyze_file(&file, &CommentMap::default(), &NoTypeInfo);
        assert!(diags.is_empty());
    }

    #[test]
    fn leading_blank_is_caught_end_to_end() {
        let body = block(1, vec![expr_stmt(3, call("f", vec![], 3))], 4);
        let file = File { funcs: vec![FuncDecl { name: "f".into(), body: Some(body) }] };

        let analyzer = Analyzer::new(Config::default());
        let diags = analyzer.analyze_file(&file, &CommentMap::default(), &NoTypeInfo);
        assert_eq!(diags.len(), 1);
    }
}
