//! End-to-end analyzer tests over a temporary project tree.

use prose_lint_core::{
    Analyzer, CommentKind, Config, DocComment, FileContext, Location, Rule, Severity, Violation,
};
use std::fs;
use tempfile::TempDir;

/// Flags every outer doc comment whose text does not end with a period.
struct RequirePeriod;

impl Rule for RequirePeriod {
    fn name(&self) -> &'static str {
        "require-period"
    }

    fn code(&self) -> &'static str {
        "T001"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, ctx: &FileContext, comment: &DocComment) -> Vec<Violation> {
        if comment.kind != CommentKind::ItemOuter || comment.text.trim_end().ends_with('.') {
            return vec![];
        }
        vec![Violation::new(
            self.code(),
            self.name(),
            self.default_severity(),
            Location::new(ctx.relative_path.clone(), comment.line, comment.column),
            format!("Doc comment on `{}` does not end with a period", comment.target),
        )]
    }
}

fn write_project(tmp: &TempDir) {
    let src = tmp.path().join("src");
    fs::create_dir_all(&src).expect("create src dir");
    fs::write(
        src.join("lib.rs"),
        r"//! Crate docs.

/// Parses the header.
pub fn good() {}

/// Parses the header
pub fn bad() {}
",
    )
    .expect("write lib.rs");

    // Excluded directory with a violation that must not surface.
    let target = tmp.path().join("target");
    fs::create_dir_all(&target).expect("create target dir");
    fs::write(target.join("gen.rs"), "/// nope\npub fn gen() {}\n").expect("write gen.rs");
}

#[test]
fn analyzer_runs_rules_over_discovered_files() {
    let tmp = TempDir::new().expect("create temp dir");
    write_project(&tmp);

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .exclude("**/target/**")
        .rule(RequirePeriod)
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze().expect("analysis succeeds");
    assert_eq!(result.files_checked, 1);
    assert_eq!(result.comments_checked, 3);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].code, "T001");
    assert!(result.violations[0].message.contains("bad"));
}

#[test]
fn disabled_rules_are_skipped() {
    let tmp = TempDir::new().expect("create temp dir");
    write_project(&tmp);

    let config = Config::parse("[rules.require-period]\nenabled = false").expect("config parses");
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .exclude("**/target/**")
        .config(config)
        .rule(RequirePeriod)
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze().expect("analysis succeeds");
    assert!(result.violations.is_empty());
}

#[test]
fn severity_overrides_apply() {
    let tmp = TempDir::new().expect("create temp dir");
    write_project(&tmp);

    let config =
        Config::parse("[rules.require-period]\nseverity = \"error\"").expect("config parses");
    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .exclude("**/target/**")
        .config(config)
        .rule(RequirePeriod)
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze().expect("analysis succeeds");
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].severity, Severity::Error);
    assert!(result.has_errors());
}

#[test]
fn unparseable_files_are_skipped_by_default() {
    let tmp = TempDir::new().expect("create temp dir");
    let src = tmp.path().join("src");
    fs::create_dir_all(&src).expect("create src dir");
    fs::write(src.join("broken.rs"), "fn {{{").expect("write broken.rs");

    let analyzer = Analyzer::builder()
        .root(tmp.path())
        .rule(RequirePeriod)
        .build()
        .expect("build analyzer");

    let result = analyzer.analyze().expect("analysis succeeds");
    assert_eq!(result.files_checked, 0);
    assert!(result.violations.is_empty());
}
