//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file path using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `{project}/prose-lint.toml` or `.prose-lint.toml`
//! 3. `~/.prose-lint/config.toml` (global fallback)
//! 4. No config found → defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the project directory.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.prose-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["prose-lint.toml", ".prose-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(project_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    // 1. Explicit path from --config flag
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    // 2. Project-level config
    for name in PROJECT_CONFIG_NAMES {
        let candidate = project_dir.join(name);
        if candidate.exists() {
            tracing::debug!("Found project config: {}", candidate.display());
            return ConfigSource::Project(candidate);
        }
    }

    // 3. Global fallback
    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.exists() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

/// Returns the global config directory path.
///
/// Resolution: `$PROSE_LINT_CONFIG_DIR` > `~/.prose-lint/`
///
/// The env var override enables testing and custom CI setups.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("PROSE_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".prose-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().expect("create temp dir");
        let explicit = tmp.path().join("custom.toml");
        fs::write(&explicit, "").expect("write explicit config");

        let project = tmp.path().join("project");
        fs::create_dir(&project).expect("create project dir");
        fs::write(project.join("prose-lint.toml"), "").expect("write project config");

        let result = resolve_inner(&project, Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn project_config_beats_global() {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("project");
        fs::create_dir(&project).expect("create project dir");
        fs::write(project.join(".prose-lint.toml"), "").expect("write project config");

        let global = tmp.path().join("global");
        fs::create_dir(&global).expect("create global dir");
        fs::write(global.join("config.toml"), "").expect("write global config");

        let result = resolve_inner(&project, None, Some(global));
        assert_eq!(
            result,
            ConfigSource::Project(project.join(".prose-lint.toml"))
        );
    }

    #[test]
    fn global_fallback_when_project_missing() {
        let tmp = TempDir::new().expect("create temp dir");
        let project = tmp.path().join("project");
        fs::create_dir(&project).expect("create project dir");

        let global = tmp.path().join("global");
        fs::create_dir(&global).expect("create global dir");
        fs::write(global.join("config.toml"), "").expect("write global config");

        let result = resolve_inner(&project, None, Some(global.clone()));
        assert_eq!(result, ConfigSource::Global(global.join("config.toml")));
        assert!(result.is_global());
    }

    #[test]
    fn defaults_when_nothing_found() {
        let tmp = TempDir::new().expect("create temp dir");
        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
