//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# prose-lint configuration

# Preset to start from: "recommended", "strict", or "minimal"
preset = "recommended"

# Severity threshold for the cargo-test gate
# fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/target/**",
    "**/vendor/**",
    "**/generated/**",
]

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.doc-paragraph-shape]
enabled = true
# severity = "error"        # Override default severity
# skip_tests = false        # Also lint docs in test files
# extra_middle_chars = "()" # Admit extra characters into sentences

[rules.module-doc-shape]
enabled = true

# [rules.doc-label-shape]
# enabled = true
# allow_prose = true        # Accept full sentences on fields and variants
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("prose-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created prose-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit prose-lint.toml to configure rules");
    println!("  2. Run: prose-lint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_lint_core::Config;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).expect("template parses");
        assert_eq!(config.preset.as_deref(), Some("recommended"));
        assert!(config.is_rule_enabled("doc-paragraph-shape"));
    }
}
