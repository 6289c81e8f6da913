//! # prose-lint
//!
//! Lints the prose of Rust documentation comments.
//!
//! This is the main facade crate that re-exports the core framework and the
//! built-in rules.
//!
//! ## Quick Start — `cargo test` Integration
//!
//! ```toml
//! [dev-dependencies]
//! prose-lint = "0.2"
//! ```
//!
//! ```rust,ignore
//! // tests/doc_prose.rs
//! #[test]
//! fn doc_prose() {
//!     prose_lint::run_as_test(None, None, None);
//! }
//! ```
//!
//! This runs prose-lint as part of `cargo test`. Configure via
//! `prose-lint.toml`.
//!
//! ## Suppression Directives
//!
//! Use a comment directive to suppress rules:
//!
//! ```rust,ignore
//! // prose-lint: allow(doc-paragraph-shape) reason="rendered table"
//! /// | a | b |
//! pub fn table_of_things() {}
//! ```
//!
//! ## Programmatic Usage
//!
//! ```rust,ignore
//! use prose_lint::Analyzer;
//! use prose_lint::rules::Preset;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]

// Re-export core types and traits
pub use prose_lint_core::*;

/// Built-in rules and presets.
pub mod rules {
    pub use prose_lint_rules::*;
}

mod runner;

/// Runs prose-lint as part of `cargo test`.
///
/// Analyzes the enclosing project (workspace root when one exists) with the
/// resolved preset and configuration, and panics with a formatted report if
/// violations at or above the `fail_on` severity are found.
///
/// All three arguments override their `prose-lint.toml` counterparts when
/// given: the preset name, the config file path, and the failure threshold.
///
/// # Panics
///
/// Panics if violations are found, or if the configuration is invalid.
pub fn run_as_test(preset: Option<&str>, config_path: Option<&str>, fail_on: Option<&str>) {
    runner::run_check(preset, config_path, fail_on);
}

#[doc(hidden)]
pub mod __internal {
    pub use crate::runner::check_at;
}
