//! Rule requiring item docs to be well-formed paragraph text.
//!
//! # Detected Patterns
//!
//! - Sentences that start with a lowercase letter or miss their final period
//! - Paragraphs glued together without a separating blank line
//! - Fenced code blocks with a missing closing fence
//!
//! # Good Patterns
//!
//! ```ignore
//! /// Parses the header. Returns its length in bytes.
//! ///
//! /// ```text
//! /// header := magic length payload
//! /// ```
//! pub fn parse_header(input: &[u8]) -> usize {
//!     // ...
//! }
//! ```

use prose_lint_core::allowance::check_allow_with_reason;
use prose_lint_core::{
    CommentKind, DocComment, FileContext, Location, Rule, Severity, Suggestion, Violation,
};
use prose_lint_patterns::{CharClasses, PatternKind, ProsePattern};

/// Rule code for doc-paragraph-shape.
pub const CODE: &str = "PL001";

/// Rule name for doc-paragraph-shape.
pub const NAME: &str = "doc-paragraph-shape";

/// Requires outer item docs to match the block paragraph pattern.
#[derive(Debug)]
pub struct DocParagraphShape {
    severity: Severity,
    skip_tests: bool,
    pattern: ProsePattern,
}

impl Default for DocParagraphShape {
    fn default() -> Self {
        Self::new()
    }
}

impl DocParagraphShape {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            skip_tests: true,
            pattern: ProsePattern::block(),
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
        self.pattern = ProsePattern::with_classes(PatternKind::Block, &classes);
        self
    }

    /// Applies the `[rules.doc-paragraph-shape]` options from configuration.
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

impl Rule for DocParagraphShape {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires item docs to be well-formed paragraph text"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
        if comment.kind != CommentKind::ItemOuter || comment.is_empty() {
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
                return vec![missing_reason_violation(ctx, comment)];
            }
            return vec![];
        }

        vec![Violation::new(
            CODE,
            NAME,
            self.severity,
            Location::new(ctx.relative_path.clone(), comment.line, comment.column),
            format!(
                "Doc comment on {} `{}` is not well-formed paragraph text",
                comment.item_kind, comment.target
            ),
        )
        .with_suggestion(Suggestion::new(
            "Write sentences that start with a capital letter and end with a period, \
             separate paragraphs with one blank line, and close code fences",
        ))]
    }
}

/// Violation for an allow directive that lacks its required reason.
fn missing_reason_violation(ctx: &FileContext, comment: &DocComment) -> Violation {
    Violation::new(
        CODE,
        NAME,
        Severity::Warning,
        Location::new(ctx.relative_path.clone(), comment.line, comment.column),
        format!("Allow directive for '{NAME}' is missing required reason"),
    )
    .with_suggestion(Suggestion::new(
        "Add reason=\"...\" to explain why this exception is necessary",
    ))
}
