//! # prose-lint-rules
//!
//! Built-in lint rules for prose-lint.
//!
//! Each rule binds one of the shape classification patterns to a
//! doc-comment context.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | PL001 | `doc-paragraph-shape` | Item docs must be well-formed paragraph text |
//! | PL002 | `doc-label-shape` | Field and variant docs must be short labels |
//! | PL003 | `module-doc-shape` | Module docs must be a titled, well-formed body |
//!
//! ## Usage
//!
//! ```ignore
//! use prose_lint_core::Analyzer;
//! use prose_lint_rules::{DocParagraphShape, ModuleDocShape};
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(DocParagraphShape::new())
//!     .rule(ModuleDocShape::new())
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod doc_label_shape;
mod doc_paragraph_shape;
mod module_doc_shape;
mod presets;

pub use doc_label_shape::DocLabelShape;
pub use doc_paragraph_shape::DocParagraphShape;
pub use module_doc_shape::ModuleDocShape;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use prose_lint_core::{Rule, Severity, Violation};
