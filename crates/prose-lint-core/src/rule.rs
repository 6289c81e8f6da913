//! Rule trait for defining doc-comment lint rules.

use crate::comment::DocComment;
use crate::context::FileContext;
use crate::types::{Severity, Violation};

/// A lint rule applied to individual doc comments.
///
/// The analyzer extracts every doc comment from a file and calls `check`
/// once per comment. Rules decide from [`DocComment::kind`] whether a
/// comment concerns them.
///
/// # Example
///
/// ```ignore
/// use prose_lint_core::{DocComment, FileContext, Rule, Severity, Violation};
///
/// pub struct NoEmptyDocs;
///
/// impl Rule for NoEmptyDocs {
///     fn name(&self) -> &'static str { "no-empty-docs" }
///     fn code(&self) -> &'static str { "PL900" }
///
///     fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
///         if comment.is_empty() { /* report */ }
///         vec![]
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "doc-paragraph-shape").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "PL001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule requires a reason when using allow directives.
    ///
    /// By default, rules with `Severity::Error` require a reason.
    /// Override this to customize the requirement.
    fn requires_allow_reason(&self) -> bool {
        self.default_severity() == Severity::Error
    }

    /// Checks a single doc comment and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `comment` - The extracted doc comment
    fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentKind;
    use crate::types::Location;
    use std::path::Path;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }

        fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
            vec![Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                Location::new(ctx.relative_path.clone(), comment.line, comment.column),
                "Test violation",
            )]
        }
    }

    #[test]
    fn rule_defaults() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Error);
        assert!(rule.requires_allow_reason());
    }

    #[test]
    fn rule_reports_at_comment_location() {
        let content = "/// Hi.\nfn f() {}\n";
        let ctx = FileContext::new(Path::new("src/lib.rs"), content, Path::new("."));
        let comment = DocComment {
            text: "Hi.".to_string(),
            kind: CommentKind::ItemOuter,
            target: "f".to_string(),
            item_kind: "function",
            line: 1,
            column: 1,
        };
        let violations = TestRule.check(&ctx, &comment);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 1);
    }
}
