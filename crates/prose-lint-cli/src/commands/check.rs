//! Check command implementation.

use anyhow::{Context, Result};
use prose_lint_core::{Analyzer, Config};
use prose_lint_rules::{DocLabelShape, DocParagraphShape, ModuleDocShape, Preset};
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = match source {
        ConfigSource::Default => Config::default(),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p)
                .with_context(|| format!("Failed to load config: {}", p.display()))?
        }
    };

    let preset = config
        .preset
        .as_deref()
        .and_then(Preset::from_name)
        .unwrap_or(Preset::Recommended);

    // Add rules based on filter, or the configured preset
    let rules_to_add = if let Some(filter) = rules_filter {
        let rule_names: Vec<&str> = filter.split(',').map(str::trim).collect();
        filter_rules(&rule_names, &config)
    } else {
        preset.rules_with_config(&config)
    };

    let mut builder = Analyzer::builder().root(path).config(config);

    for pattern in exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules_to_add {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format)?;

    // Exit with error code if there are errors
    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn filter_rules(names: &[&str], config: &Config) -> Vec<prose_lint_core::RuleBox> {
    let mut rules: Vec<prose_lint_core::RuleBox> = Vec::new();

    for name in names {
        match *name {
            "doc-paragraph-shape" | "PL001" => {
                rules.push(Box::new(DocParagraphShape::from_config(config)));
            }
            "doc-label-shape" | "PL002" => {
                rules.push(Box::new(DocLabelShape::from_config(config)));
            }
            "module-doc-shape" | "PL003" => {
                rules.push(Box::new(ModuleDocShape::from_config(config)));
            }
            _ => tracing::warn!("Unknown rule: {}", name),
        }
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_resolves_names_and_codes() {
        let config = Config::default();
        let rules = filter_rules(&["doc-paragraph-shape", "PL003"], &config);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].code(), "PL001");
        assert_eq!(rules[1].name(), "module-doc-shape");
    }

    #[test]
    fn filter_skips_unknown_names() {
        let config = Config::default();
        let rules = filter_rules(&["no-such-rule"], &config);
        assert!(rules.is_empty());
    }
}
