use std::str::FromStr;

use ahash::AHashSet;
use strum_macros::{Display, EnumIter, EnumString};

use crate::error::AnalyzerError;

/// One of the rule identifiers a configuration can enable or disable.
///
/// Names are resolved case-insensitively (`FromStr`) and rendered in
/// kebab-case (`Display`), matching the stable configuration surface in §6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Check {
    Assign,
    AssignExclusive,
    Append,
    Branch,
    Decl,
    Defer,
    Expr,
    For,
    Go,
    If,
    IncDec,
    Label,
    LeadingWhitespace,
    TrailingWhitespace,
    Range,
    Return,
    Select,
    Send,
    Switch,
    TypeSwitch,
    Err,
    CaseTrailingNewline,
}

/// Checks present in the default set, excluding the three opt-in-only checks
/// (`assign-exclusive`, `err`, `send`) per §4.4.
const DEFAULT_CHECKS: &[Check] = &[
    Check::Assign,
    Check::Append,
    Check::Branch,
    Check::Decl,
    Check::Defer,
    Check::Expr,
    Check::For,
    Check::Go,
    Check::If,
    Check::IncDec,
    Check::Label,
    Check::LeadingWhitespace,
    Check::TrailingWhitespace,
    Check::Range,
    Check::Return,
    Check::Select,
    Check::Switch,
    Check::TypeSwitch,
    Check::CaseTrailingNewline,
];

const OPT_IN_CHECKS: &[Check] = &[Check::AssignExclusive, Check::Err, Check::Send];

/// A mutable subset of [`Check`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckSet(AHashSet<Check>);

impl CheckSet {
    #[must_use]
    pub fn empty() -> Self {
        Self(AHashSet::default())
    }

    #[must_use]
    pub fn default_set() -> Self {
        Self(DEFAULT_CHECKS.iter().copied().collect())
    }

    #[must_use]
    pub fn all() -> Self {
        let mut set = Self::default_set();
        set.0.extend(OPT_IN_CHECKS.iter().copied());
        set
    }

    #[must_use]
    pub fn contains(&self, check: Check) -> bool {
        self.0.contains(&check)
    }

    pub fn enable(&mut self, check: Check) {
        self.0.insert(check);
    }

    pub fn disable(&mut self, check: Check) {
        self.0.remove(&check);
    }
}

/// Tunable thresholds and the active check-set.
///
/// Plain data — nothing here is global, and a driver may hold any number of
/// configurations (one per package, say) at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub include_generated: bool,
    pub allow_first_in_block: bool,
    pub first_in_block_max_depth: usize,
    pub allow_whole_block: bool,
    pub branch_max_lines: u32,
    pub case_max_lines: u32,
    pub return_max_lines: u32,
    pub checks: CheckSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            include_generated: false,
            allow_first_in_block: false,
            first_in_block_max_depth: 1,
            allow_whole_block: false,
            branch_max_lines: 2,
            case_max_lines: 0,
            return_max_lines: 2,
            checks: CheckSet::default_set(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn enable_all() -> Self {
        Self { checks: CheckSet::all(), ..Self::default() }
    }

    #[must_use]
    pub fn disable_all() -> Self {
        Self { checks: CheckSet::empty(), ..Self::default() }
    }

    /// Apply `enable`/`disable` check-name lists in that order: enable first,
    /// then disable, so a name present in both ends up disabled. Unknown
    /// names fail the whole update.
    pub fn with_enable_disable(
        mut self,
        enable: &[&str],
        disable: &[&str],
    ) -> Result<Self, AnalyzerError> {
        for name in enable {
            self.checks.enable(parse_check(name)?);
        }
        for name in disable {
            self.checks.disable(parse_check(name)?);
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_enabled(&self, check: Check) -> bool {
        self.checks.contains(check)
    }
}

fn parse_check(name: &str) -> Result<Check, AnalyzerError> {
    Check::from_str(name).map_err(|_| AnalyzerError::UnknownCheck(name.to_string()))
}

/// The raw shape a driver's own config file deserializes into before it is
/// resolved into a [`Config`]. Kept separate from `Config` so the "both
/// presets requested" error (§4.4/§4.12) has somewhere to be checked exactly
/// once, at the boundary.
#[derive(Debug, Clone, Default)]
pub struct ConfigRequest {
    pub enable_all: bool,
    pub disable_all: bool,
    pub enable: Vec<String>,
    pub disable: Vec<String>,
    pub base: Config,
}

impl ConfigRequest {
    pub fn resolve(self) -> Result<Config, AnalyzerError> {
        if self.enable_all && self.disable_all {
            return Err(AnalyzerError::ConflictingPresets);
        }

        let checks = if self.enable_all {
            CheckSet::all()
        } else if self.disable_all {
            CheckSet::empty()
        } else {
            self.base.checks.clone()
        };

        let enable: Vec<&str> = self.enable.iter().map(String::as_str).collect();
        let disable: Vec<&str> = self.disable.iter().map(String::as_str).collect();

        Config { checks, ..self.base }.with_enable_disable(&enable, &disable)
    }
}
