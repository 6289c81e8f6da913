//! Rule presets for common configurations.

use crate::{DocLabelShape, DocParagraphShape, ModuleDocShape};
use prose_lint_core::{Config, RuleBox, Severity};

/// Preset configurations for prose-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Recommended rules with sensible defaults.
    Recommended,
    /// Strict rules for maximum prose hygiene.
    Strict,
    /// Minimal rules for gradual adoption.
    Minimal,
}

impl Preset {
    /// Resolves a preset from its configuration name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        self.rules_with_config(&Config::default())
    }

    /// Returns the rules for this preset with per-rule options applied.
    #[must_use]
    pub fn rules_with_config(self, config: &Config) -> Vec<RuleBox> {
        match self {
            Self::Recommended => vec![
                Box::new(DocParagraphShape::from_config(config)),
                Box::new(ModuleDocShape::from_config(config)),
            ],
            Self::Strict => vec![
                Box::new(
                    DocParagraphShape::from_config(config)
                        .severity(Severity::Error)
                        .skip_tests(false),
                ),
                Box::new(DocLabelShape::from_config(config)),
                Box::new(
                    ModuleDocShape::from_config(config)
                        .severity(Severity::Error)
                        .skip_tests(false),
                ),
            ],
            Self::Minimal => vec![Box::new(DocParagraphShape::from_config(config))],
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `doc-paragraph-shape` (PL001) - Item docs form valid paragraphs
/// - `module-doc-shape` (PL003) - Module docs form a titled body
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    Preset::Recommended.rules()
}

/// Returns the strict set of rules.
///
/// Includes all rules, with the paragraph and module rules promoted to
/// error severity and applied to test files as well.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    Preset::Strict.rules()
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes `doc-paragraph-shape`.
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    Preset::Minimal.rules()
}

/// Returns all available rules at their default settings.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(DocParagraphShape::new()),
        Box::new(DocLabelShape::new()),
        Box::new(ModuleDocShape::new()),
    ]
}
