use crate::core::error::{ConfigError, MaintError, MaintResult, ResultExt};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Repository pruned when neither `--repo` nor the config file names one
pub const DEFAULT_REPO: &str = "jihuayu/xor";

/// Release kept when neither `--keep` nor the config file names one
pub const DEFAULT_KEEP: &str = "v0.2.2";

/// npm package tree, relative to the working directory
pub const DEFAULT_PACKAGE_ROOT: &str = "package/npm";

/// Configuration for release-maint
/// Searched in order: release-maint.toml, .release-maint.toml, .config/release-maint.toml
///
/// Every field is optional; CLI flags take precedence over anything set here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintConfig {
  #[serde(default)]
  pub prune: PruneConfig,
  #[serde(default)]
  pub packages: PackagesConfig,
}

/// `[prune]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PruneConfig {
  /// Repository in owner/name form
  #[serde(default)]
  pub repo: Option<String>,

  /// Release tag to keep
  #[serde(default)]
  pub keep: Option<String>,
}

/// `[packages]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackagesConfig {
  /// Directory holding package.json and platform-packages/
  #[serde(default)]
  pub root: Option<PathBuf>,
}

impl MaintConfig {
  /// Find config file in search order
  pub fn find_config_path(path: &Path) -> Option<PathBuf> {
    let candidates = vec![
      path.join("release-maint.toml"),
      path.join(".release-maint.toml"),
      path.join(".config").join("release-maint.toml"),
    ];

    candidates.into_iter().find(|p| p.exists())
  }

  /// Load config from `path`, falling back to defaults when no file exists
  pub fn load(path: &Path) -> MaintResult<Self> {
    let Some(config_path) = Self::find_config_path(path) else {
      return Ok(Self::default());
    };

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read config from {}", config_path.display()))?;
    let config: MaintConfig = toml_edit::de::from_str(&content).map_err(|e| {
      MaintError::Config(ConfigError::Invalid {
        path: config_path.clone(),
        reason: e.to_string(),
      })
    })?;

    config.validate()?;
    Ok(config)
  }

  /// Reject fields that are present but blank
  pub fn validate(&self) -> MaintResult<()> {
    let fields = [("prune.repo", &self.prune.repo), ("prune.keep", &self.prune.keep)];
    for (field, value) in fields {
      if let Some(value) = value
        && value.trim().is_empty()
      {
        return Err(MaintError::Config(ConfigError::EmptyField {
          field: field.to_string(),
        }));
      }
    }

    if let Some(root) = &self.packages.root
      && root.as_os_str().is_empty()
    {
      return Err(MaintError::Config(ConfigError::EmptyField {
        field: "packages.root".to_string(),
      }));
    }

    Ok(())
  }

  /// Repository to prune: flag, then config, then built-in default
  pub fn resolve_repo(&self, flag: Option<String>) -> String {
    flag
      .or_else(|| self.prune.repo.clone())
      .unwrap_or_else(|| DEFAULT_REPO.to_string())
  }

  /// Tag to keep: flag, then config, then built-in default
  pub fn resolve_keep(&self, flag: Option<String>) -> String {
    flag
      .or_else(|| self.prune.keep.clone())
      .unwrap_or_else(|| DEFAULT_KEEP.to_string())
  }

  /// Package root: flag, then config, then `package/npm`
  pub fn resolve_package_root(&self, flag: Option<PathBuf>) -> PathBuf {
    flag
      .or_else(|| self.packages.root.clone())
      .unwrap_or_else(|| PathBuf::from(DEFAULT_PACKAGE_ROOT))
  }
}
