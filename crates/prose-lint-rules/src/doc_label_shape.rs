//! Rule requiring field and variant docs to be short labels.
//!
//! Struct fields and enum variants read best with a one-line label that
//! carries no trailing period, mirroring how they render in item listings.
//!
//! # Good Patterns
//!
//! ```ignore
//! pub struct Config {
//!     /// Root directory to analyze
//!     pub root: PathBuf,
//! }
//! ```

use prose_lint_core::allowance::check_allow_with_reason;
use prose_lint_core::{
    CommentKind, DocComment, FileContext, Location, Rule, Severity, Suggestion, Violation,
};
use prose_lint_patterns::{block_pattern, lead_only_pattern};

/// Rule code for doc-label-shape.
pub const CODE: &str = "PL002";

/// Rule name for doc-label-shape.
pub const NAME: &str = "doc-label-shape";

/// Requires field and variant docs to match the lead-only pattern.
#[derive(Debug)]
pub struct DocLabelShape {
    severity: Severity,
    skip_tests: bool,
    allow_prose: bool,
}

impl Default for DocLabelShape {
    fn default() -> Self {
        Self::new()
    }
}

impl DocLabelShape {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            skip_tests: true,
            allow_prose: false,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets whether to skip doc comments in test files.
    #[must_use]
    pub fn skip_tests(mut self, skip: bool) -> Self {
        self.skip_tests = skip;
        self
    }

    /// Also accepts full paragraph bodies on fields and variants.
    #[must_use]
    pub fn allow_prose(mut self, allow: bool) -> Self {
        self.allow_prose = allow;
        self
    }

    /// Applies the `[rules.doc-label-shape]` options from configuration.
    #[must_use]
    pub fn from_config(config: &prose_lint_core::Config) -> Self {
        let rule = Self::new();
        let Some(options) = config.rule_config(NAME) else {
            return rule;
        };
        rule.skip_tests(options.get_bool("skip_tests", true))
            .allow_prose(options.get_bool("allow_prose", false))
    }
}

impl Rule for DocLabelShape {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires field and variant docs to be short labels without a trailing period"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
        if comment.kind != CommentKind::Label || comment.is_empty() {
            return vec![];
        }
        if self.skip_tests && ctx.is_test {
            return vec![];
        }
        if lead_only_pattern().is_match(&comment.text) {
            return vec![];
        }
        if self.allow_prose && block_pattern().is_match(&comment.text) {
            return vec![];
        }

        let allow_check = check_allow_with_reason(ctx.content, comment.line, NAME);
        if allow_check.is_allowed() {
            if self.requires_allow_reason() && allow_check.reason().is_none() {
                return vec![Violation::new(
                    CODE,
                    NAME,
                    Severity::Warning,
                    Location::new(ctx.relative_path.clone(), comment.line, comment.column),
                    format!("Allow directive for '{NAME}' is missing required reason"),
                )
                .with_suggestion(Suggestion::new(
                    "Add reason=\"...\" to explain why this exception is necessary",
                ))];
            }
            return vec![];
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::new(ctx.relative_path.clone(), comment.line, comment.column),
            format!(
                "Doc comment on {} `{}` should be a short label",
                comment.item_kind, comment.target
            ),
        )
        .with_suggestion(Suggestion::new(
            "Use a single capitalized line without a trailing period",
        ))]
    }
}
