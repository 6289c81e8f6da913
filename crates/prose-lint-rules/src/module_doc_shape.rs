//! Rule requiring module docs to be a titled body.
//!
//! Inner `//!` docs may open with a one-line title (no trailing period)
//! followed directly by the body, or consist of the body alone. The body
//! follows the same paragraph shapes as item docs.
//!
//! # Good Patterns
//!
//! ```ignore
//! //! Streaming decoder internals
//! //! Splits frames and feeds them to the state machine.
//! ```

use prose_lint_core::allowance::check_allow_with_reason;
use prose_lint_core::{
    CommentKind, DocComment, FileContext, Location, Rule, Severity, Suggestion, Violation,
};
use prose_lint_patterns::{CharClasses, PatternKind, ProsePattern};

/// Rule code for module-doc-shape.
pub const CODE: &str = "PL003";

/// Rule name for module-doc-shape.
pub const NAME: &str = "module-doc-shape";

/// Requires inner module docs to match the block-with-optional-lead pattern.
#[derive(Debug)]
pub struct ModuleDocShape {
    severity: Severity,
    skip_tests: bool,
    pattern: ProsePattern,
}

impl Default for ModuleDocShape {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDocShape {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            skip_tests: true,
            pattern: ProsePattern::block_with_lead(),
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

    /// Adds extra permitted mid-sentence characters.
    #[must_use]
    pub fn extra_middle_chars(mut self, chars: &str) -> Self {
        let classes = CharClasses::new().with_extra_middle(chars);
        self.pattern = ProsePattern::with_classes(PatternKind::BlockWithLead, &classes);
        self
    }

    /// Applies the `[rules.module-doc-shape]` options from configuration.
    #[must_use]
    pub fn from_config(config: &prose_lint_core::Config) -> Self {
        let rule = Self::new();
        let Some(options) = config.rule_config(NAME) else {
            return rule;
        };
        let rule = rule.skip_tests(options.get_bool("skip_tests", true));
        let extra = options.get_str("extra_middle_chars", "");
        if extra.is_empty() {
            rule
        } else {
            rule.extra_middle_chars(extra)
        }
    }
}

impl Rule for ModuleDocShape {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires module docs to be a titled, well-formed body"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
        if comment.kind != CommentKind::ModuleInner || comment.is_empty() {
            return vec![];
        }
        if self.skip_tests && ctx.is_test {
            return vec![];
        }
        if self.pattern.is_match(&comment.text) {
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
            format!("Module docs of `{}` are not well-formed", comment.target),
        )
        .with_suggestion(Suggestion::new(
            "Open with a short title line or a sentence, then paragraphs separated by blank lines",
        ))]
    }
}
