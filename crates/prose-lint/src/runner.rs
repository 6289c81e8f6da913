//! Internal runner for `cargo test` integration.
//!
//! This module is not part of the public API. It is called by
//! [`crate::run_as_test`] from a user-written test function.

use prose_lint_core::{Analyzer, Config, Severity};
use prose_lint_rules::Preset;
use std::path::{Path, PathBuf};

/// Config file names to search for, in priority order.
const CONFIG_CANDIDATES: &[&str] = &["prose-lint.toml", ".prose-lint.toml"];

/// Runs prose-lint analysis as part of `cargo test`.
///
/// Panics with a formatted report if violations are found.
pub(crate) fn run_check(preset: Option<&str>, config_path: Option<&str>, fail_on: Option<&str>) {
    let root = find_project_root();
    if let Err(report) = check_at(&root, preset, config_path, fail_on) {
        panic!("{report}");
    }
}

/// Testable core: runs the gate at an explicit root.
///
/// Returns the failure report instead of panicking when violations at or
/// above the effective `fail_on` severity are found.
///
/// # Panics
///
/// Panics if the configuration cannot be read or parsed, if the preset or
/// severity name is unknown, or if the analyzer cannot be built.
pub fn check_at(
    root: &Path,
    preset: Option<&str>,
    config_path: Option<&str>,
    fail_on: Option<&str>,
) -> Result<(), String> {
    let content = read_config_content(root, config_path);
    let config = parse_config(&content);

    let effective_preset = resolve_preset(preset, &config);
    let effective_fail_on = resolve_fail_on(fail_on, &config);
    let rules = effective_preset.rules_with_config(&config);

    let mut builder = Analyzer::builder().root(root).config(config);
    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().unwrap_or_else(|e| {
        panic!("prose-lint: failed to build analyzer: {e}");
    });

    let result = analyzer.analyze().unwrap_or_else(|e| {
        panic!("prose-lint: analysis failed: {e}");
    });

    if result.has_violations_at(effective_fail_on) {
        return Err(result.format_test_report(effective_fail_on));
    }
    Ok(())
}

/// Reads the raw TOML content from the config file.
///
/// Returns an empty string if no config file is found.
fn read_config_content(root: &Path, explicit_path: Option<&str>) -> String {
    if let Some(path) = explicit_path {
        let full_path = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            root.join(path)
        };
        return std::fs::read_to_string(&full_path).unwrap_or_else(|e| {
            panic!(
                "prose-lint: failed to read config from {}: {e}",
                full_path.display()
            );
        });
    }

    for candidate in CONFIG_CANDIDATES {
        let path = root.join(candidate);
        if path.exists() {
            return std::fs::read_to_string(&path).unwrap_or_else(|e| {
                panic!(
                    "prose-lint: failed to read config from {}: {e}",
                    path.display()
                );
            });
        }
    }

    String::new()
}

/// Parses a `Config` from TOML content.
fn parse_config(content: &str) -> Config {
    if content.is_empty() {
        return Config::default();
    }
    Config::parse(content).unwrap_or_else(|e| {
        panic!("prose-lint: failed to parse config: {e}");
    })
}

/// Checks whether a `Cargo.toml` file defines a `[workspace]` section
/// by parsing as TOML, avoiding false positives from comments or strings.
fn has_workspace_section(cargo_toml: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(cargo_toml) else {
        return false;
    };
    let Ok(table) = content.parse::<toml::Table>() else {
        return false;
    };
    table.contains_key("workspace")
}

/// Finds the project root by looking for `Cargo.toml` from `CARGO_MANIFEST_DIR`.
fn find_project_root() -> PathBuf {
    // CARGO_MANIFEST_DIR points to the crate containing the test,
    // which may be a workspace member. Walk up to find workspace root.
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let manifest_path = PathBuf::from(&manifest_dir);

        // Check if there's a workspace Cargo.toml above
        let mut candidate = manifest_path.as_path();
        loop {
            let cargo_toml = candidate.join("Cargo.toml");
            if cargo_toml.exists() && has_workspace_section(&cargo_toml) {
                return candidate.to_path_buf();
            }
            match candidate.parent() {
                Some(parent) => candidate = parent,
                None => break,
            }
        }

        // No workspace root found — use manifest dir itself
        return manifest_path;
    }

    // Fallback: current directory
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Resolves the effective preset from explicit arg > config > default.
fn resolve_preset(explicit: Option<&str>, config: &Config) -> Preset {
    let name = explicit
        .or(config.preset.as_deref())
        .unwrap_or("recommended");

    Preset::from_name(name).unwrap_or_else(|| {
        panic!("prose-lint: unknown preset `{name}`. Valid presets: recommended, strict, minimal")
    })
}

/// Resolves the effective `fail_on` severity from explicit arg > config > default.
fn resolve_fail_on(explicit: Option<&str>, config: &Config) -> Severity {
    let name = explicit.or(config.fail_on.as_deref()).unwrap_or("error");

    name.parse().unwrap_or_else(|_| {
        panic!("prose-lint: unknown severity `{name}`. Valid values: error, warning, info")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_preset_defaults_to_recommended() {
        let config = Config::default();
        assert_eq!(resolve_preset(None, &config), Preset::Recommended);
    }

    #[test]
    fn resolve_preset_explicit_takes_precedence() {
        let mut config = Config::default();
        config.preset = Some("minimal".to_string());
        assert_eq!(resolve_preset(Some("strict"), &config), Preset::Strict);
    }

    #[test]
    fn resolve_preset_from_config() {
        let mut config = Config::default();
        config.preset = Some("strict".to_string());
        assert_eq!(resolve_preset(None, &config), Preset::Strict);
    }

    #[test]
    #[should_panic(expected = "unknown preset")]
    fn resolve_preset_invalid_panics() {
        let config = Config::default();
        resolve_preset(Some("nonexistent"), &config);
    }

    #[test]
    fn resolve_fail_on_defaults_to_error() {
        let config = Config::default();
        assert_eq!(resolve_fail_on(None, &config), Severity::Error);
    }

    #[test]
    fn resolve_fail_on_from_config() {
        let mut config = Config::default();
        config.fail_on = Some("warning".to_string());
        assert_eq!(resolve_fail_on(None, &config), Severity::Warning);
    }

    #[test]
    fn resolve_fail_on_explicit_overrides_config() {
        let mut config = Config::default();
        config.fail_on = Some("info".to_string());
        assert_eq!(resolve_fail_on(Some("warning"), &config), Severity::Warning);
    }

    #[test]
    #[should_panic(expected = "unknown severity")]
    fn resolve_fail_on_invalid_panics() {
        let config = Config::default();
        resolve_fail_on(Some("critical"), &config);
    }

    #[test]
    fn parse_config_empty_content_is_default() {
        let config = parse_config("");
        assert!(config.preset.is_none());
    }
}
