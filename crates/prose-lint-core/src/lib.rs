//! # prose-lint-core
//!
//! Core framework for linting the prose of Rust documentation comments.
//!
//! This crate provides the foundational traits and types for building
//! doc-comment linters. It includes:
//!
//! - [`Rule`] trait for per-comment rules
//! - [`extract_comments`] for harvesting doc comments from `syn` ASTs
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use prose_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Comment-based allowance directives.
pub mod allowance;

mod analyzer;
mod comment;
mod config;
mod context;
mod rule;
mod types;

pub use allowance::{check_allow_with_reason, AllowCheck};
pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use comment::{extract_comments, CommentKind, DocComment};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use types::{LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic};
