use thiserror::Error;

/// Hard failures: the analyzer does not run at all when one of these occurs
/// (§7, category 1). Rule violations are never represented here — they
/// accumulate in the [`crate::diagnostic::DiagnosticSink`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalyzerError {
    #[error("unknown check name: {0:?}")]
    UnknownCheck(String),

    #[error("enable-all and disable-all cannot both be requested")]
    ConflictingPresets,
}
