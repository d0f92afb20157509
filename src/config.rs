//! Configuration discovery and effective settings resolution.
//!
//! stylecheck reads `stylecheck.toml|yaml|yml` from the scan root (or the
//! closest ancestor, stopping at a `.git` boundary) and merges it with CLI
//! flags to produce an `Effective` config. Defaults:
//! - `output`: `human`
//! - `scan.ignore`: empty (built-in ignore rules always apply)
//! - `scan.source_extensions`: the built-in source extension set
//! - `rules.common` / `rules.source`: empty (built-in tiers always apply)
//!
//! Overrides precedence: CLI > config file > defaults. A config file that
//! exists but cannot be read or parsed is a fatal configuration error; there
//! is no degraded mode.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: &[&str] = &["stylecheck.toml", "stylecheck.yaml", "stylecheck.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Scan-related configuration section under `[scan]`.
pub struct ScanCfg {
    /// Glob patterns appended to the built-in ignore list.
    #[serde(default)]
    pub ignore: Vec<String>,
    /// Replaces the built-in source extension set when present.
    pub source_extensions: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Clone)]
/// A user-authored pattern rule from `[[rules.common]]` or `[[rules.source]]`.
pub struct RuleCfg {
    pub pattern: String,
    pub label: String,
    /// Designated capture group for the reported position.
    #[serde(default)]
    pub group: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// User rule tiers, appended after the built-in tables.
pub struct RuleTiersCfg {
    #[serde(default)]
    pub common: Vec<RuleCfg>,
    #[serde(default)]
    pub source: Vec<RuleCfg>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `stylecheck.toml|yaml`.
pub struct StyleConfig {
    pub output: Option<String>,
    #[serde(default)]
    pub scan: Option<ScanCfg>,
    #[serde(default)]
    pub rules: Option<RuleTiersCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub output: String,
    pub extra_ignore: Vec<String>,
    pub source_extensions: Option<Vec<String>>,
    pub extra_common: Vec<RuleCfg>,
    pub extra_source: Vec<RuleCfg>,
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding one, or at a `.git` directory (the
/// repository boundary), or at the filesystem root. The scan root itself is
/// never changed by discovery; only the config file location is.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let candidate = cur.join(name);
            if candidate.exists() {
                return Some(candidate);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        match cur.parent() {
            Some(parent) => cur = parent,
            None => return None,
        }
    }
}

/// Load a config file, picking the parser by extension.
pub fn load_config(path: &Path) -> Result<StyleConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            format: "TOML",
            message: e.to_string(),
        })
    } else {
        serde_yaml::from_str(&text).map_err(|e| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            format: "YAML",
            message: e.to_string(),
        })
    }
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(
    cli_root: Option<&str>,
    cli_output: Option<&str>,
) -> Result<Effective, ConfigError> {
    let root = PathBuf::from(cli_root.unwrap_or("."));
    if !root.is_dir() {
        return Err(ConfigError::Root {
            path: root.to_string_lossy().to_string(),
        });
    }
    // Canonicalize only for discovery, so relative roots still walk upward;
    // the scan keeps the root as given and reports paths relative to it.
    let search_start = fs::canonicalize(&root).unwrap_or_else(|_| root.clone());
    let cfg = match find_config(&search_start) {
        Some(path) => load_config(&path)?,
        None => StyleConfig::default(),
    };

    let output = cli_output
        .map(str::to_string)
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let scan = cfg.scan.unwrap_or_default();
    let rules = cfg.rules.unwrap_or_default();

    Ok(Effective {
        root,
        output,
        extra_ignore: scan.ignore,
        source_extensions: scan.source_extensions,
        extra_common: rules.common,
        extra_source: rules.source,
    })
}
