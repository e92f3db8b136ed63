//! Locating and loading the `agentlint.yaml` configuration file.

use agentlint_linter::LintConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names probed, in order, when `--config` is not given
const CONFIG_FILE_NAMES: &[&str] = &[
    "agentlint.yaml",
    "agentlint.yml",
    ".agentlintrc.yaml",
    ".agentlintrc.yml",
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid lint configuration in {}: {message}", path.display())]
    Invalid { path: PathBuf, message: String },
}

/// Top-level config file shape: a `lint:` section holding the rule config.
///
/// ```yaml
/// lint:
///   extends: recommended
///   rules:
///     require_stable_selector: [warn, { additional_attributes: ["data-qa"] }]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    lint: LintConfig,
}

/// Find a config file in `dir` or any of its ancestors.
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    dir.ancestors().find_map(|ancestor| {
        CONFIG_FILE_NAMES
            .iter()
            .map(|name| ancestor.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Load and validate the lint configuration from `path`.
pub fn load_config(path: &Path) -> Result<LintConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    file.lint
        .validate()
        .map_err(|message| ConfigError::Invalid {
            path: path.to_path_buf(),
            message,
        })?;
    Ok(file.lint)
}

/// Resolve the effective configuration: explicit `--config`, else the
/// nearest config file above the working directory, else the recommended
/// preset.
pub fn resolve_config(
    explicit: Option<&Path>,
) -> Result<(LintConfig, Option<PathBuf>), ConfigError> {
    if let Some(path) = explicit {
        return Ok((load_config(path)?, Some(path.to_path_buf())));
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    if let Some(path) = find_config(&cwd) {
        let config = load_config(&path)?;
        return Ok((config, Some(path)));
    }
    Ok((LintConfig::recommended(), None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_preset_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agentlint.yaml");
        std::fs::write(&path, "lint: strict\n").unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.is_enabled("require_stable_selector"));
    }

    #[test]
    fn loads_rules_with_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agentlint.yaml");
        std::fs::write(
            &path,
            "lint:\n  rules:\n    require_stable_selector: [warn, { additional_attributes: [\"data-qa\"] }]\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert!(config.is_enabled("require_stable_selector"));
        assert!(config.get_options("require_stable_selector").is_some());
    }

    #[test]
    fn rejects_unknown_rule_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agentlint.yaml");
        std::fs::write(&path, "lint:\n  rules:\n    not_a_rule: warn\n").unwrap();

        let error = load_config(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Invalid { .. }));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agentlint.yaml");
        std::fs::write(&path, "lint: [unbalanced\n").unwrap();

        let error = load_config(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn finds_config_in_ancestor_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".agentlintrc.yaml"), "lint: recommended\n").unwrap();
        let nested = dir.path().join("src").join("components");
        std::fs::create_dir_all(&nested).unwrap();

        let found = find_config(&nested).unwrap();
        assert_eq!(found, dir.path().join(".agentlintrc.yaml"));
    }
}
