//! # prose-lint-patterns
//!
//! Shape classification patterns for documentation-comment prose.
//!
//! A comment body is modeled as one or more paragraphs separated by single
//! blank lines. Each paragraph must take one of four shapes, tried in order:
//!
//! 1. `code`: a fenced code block
//! 2. `english`: sentences that start with a sentence-start character and
//!    end with a period
//! 3. `special-beginning`: a paragraph opening with a character outside the
//!    sentence-start set (markdown structure)
//! 4. `special-rest`: a paragraph containing a character outside the
//!    mid-sentence set after its first position (inline markdown)
//!
//! Three derived patterns cover the comment contexts a linter cares about:
//! a full body ([`block_pattern`]), a body with an optional one-line title
//! ([`block_with_lead_pattern`]), and a standalone short label
//! ([`lead_only_pattern`]). All three classify the full input and report
//! only match or no-match.
//!
//! ## Example
//!
//! ```
//! use prose_lint_patterns::block_pattern;
//!
//! assert!(block_pattern().is_match("Parses the header. Returns its length."));
//! assert!(!block_pattern().is_match("no capital, no luck."));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classes;
mod pattern;
mod shape;

pub use classes::CharClasses;
pub use pattern::{
    block_pattern, block_with_lead_pattern, lead_only_pattern, PatternKind, ProsePattern,
};
pub use shape::ParagraphShape;
