//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReadmeError, ReadmeResult};

use super::types::{Config, OutputFormat, Verbosity};

/// Project config file, looked up in the component root
pub const PROJECT_CONFIG_FILE: &str = ".images-readme.toml";
/// Overrides the directory holding the user config (used by tests)
pub const CONFIG_DIR_VAR: &str = "IMAGES_README_CONFIG_DIR";

pub const ENV_ROOT: &str = "IMAGES_README_ROOT";
pub const ENV_SCRATCH_DIR: &str = "IMAGES_README_SCRATCH_DIR";
pub const ENV_REGISTRY: &str = "IMAGES_README_REGISTRY";
pub const ENV_FORMAT: &str = "IMAGES_README_FORMAT";
pub const ENV_VERBOSITY: &str = "IMAGES_README_VERBOSITY";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReadmeResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReadmeError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Outcome of walking the config hierarchy
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Merged configuration, env overrides applied
    pub config: Config,
    /// File the configuration came from, if any
    pub source: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
    /// Config files that exist but failed to decode
    pub skipped: Vec<ReadmeError>,
}

impl LoadedConfig {
    /// Log warnings and skipped files
    pub fn report(&self) {
        for warning in &self.warnings {
            tracing::warn!(
                key = %warning.key,
                file = %warning.file.display(),
                line = ?warning.line,
                suggestion = ?warning.suggestion,
                "unknown configuration key"
            );
        }
        for err in &self.skipped {
            tracing::warn!(error = %err, "ignoring configuration file");
        }
        if let Some(source) = &self.source {
            tracing::debug!(path = %source.display(), "loaded configuration");
        }
    }
}

/// Walk project config, then user config, then defaults.
///
/// The first file that decodes wins; files that fail to decode are recorded
/// in `skipped` and the search continues.
pub fn load_layered(project_root: Option<&Path>) -> LoadedConfig {
    let candidates = [
        project_root.map(|root| root.join(PROJECT_CONFIG_FILE)),
        user_config_path(),
    ];

    let mut skipped = Vec::new();
    for path in candidates.into_iter().flatten() {
        if !path.exists() {
            continue;
        }
        match load_with_warnings(&path) {
            Ok((config, warnings)) => {
                return LoadedConfig {
                    config: with_env_overrides(config),
                    source: Some(path),
                    warnings,
                    skipped,
                };
            }
            Err(err) => skipped.push(err),
        }
    }

    LoadedConfig {
        config: with_env_overrides(Config::default()),
        skipped,
        ..LoadedConfig::default()
    }
}

/// Apply environment variable overrides (IMAGES_README_* prefix)
fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary lookup; empty values are ignored.
pub fn apply_overrides(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(dir) = get(ENV_SCRATCH_DIR) {
        config.paths.scratch_dir = PathBuf::from(dir);
    }

    if let Some(registry) = get(ENV_REGISTRY) {
        config.template.registry = registry;
    }

    if let Some(format) = get(ENV_FORMAT) {
        config.output.format = match format.to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        };
    }

    if let Some(verbosity) = get(ENV_VERBOSITY) {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

/// Component root from the environment, if set
pub fn env_root() -> Option<PathBuf> {
    std::env::var(ENV_ROOT)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

/// `<config dir>/images-readme/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var(CONFIG_DIR_VAR)
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join("images-readme").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "paths",
        "scratch_dir",
        "template",
        "registry",
        "output",
        "format",
        "verbosity",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
