//! Version propagation across the main and platform packages
//!
//! Computes the new `version` (and `optionalDependencies`) for every
//! manifest and reports the transitions. Nothing is written unless the
//! caller asks for it, and then only after all seven manifests loaded.

use crate::core::error::{MaintError, MaintResult, ManifestError, ResultExt, ValidationError};
use crate::npm::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};

/// Platform package identifiers, in reporting order
pub const PLATFORMS: [&str; 6] = [
  "win32-x64",
  "win32-arm64",
  "linux-x64",
  "linux-arm64",
  "darwin-x64",
  "darwin-arm64",
];

/// Directory under the package root holding one folder per platform
pub const PLATFORM_DIR: &str = "platform-packages";

/// One manifest's computed transition
#[derive(Debug, Clone, PartialEq)]
pub struct VersionChange {
  /// `main` or the platform identifier
  pub label: String,
  /// Version before the change (`unknown` when the field is absent)
  pub from: String,
  /// Optional dependencies pinned to the new version (main manifest only)
  pub pinned: usize,
  /// In-memory manifest with the new values applied
  pub manifest: Manifest,
}

/// Inputs for a propagation run
#[derive(Debug, Clone)]
pub struct PropagateOptions {
  /// Directory holding package.json and platform-packages/
  pub root: PathBuf,
  /// Target version, bare semver
  pub version: String,
  /// Persist the computed manifests
  pub write: bool,
}

/// Result of a successful propagation run
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationReport {
  pub version: String,
  /// Main manifest first, then platforms in [`PLATFORMS`] order
  pub changes: Vec<VersionChange>,
  pub written: bool,
}

/// Reject empty, `v`-prefixed, or non-semver version strings
pub fn validate_version(version: &str) -> MaintResult<semver::Version> {
  if version.is_empty() || version.starts_with('v') {
    return Err(MaintError::Validation(ValidationError::VersionPrefix {
      version: version.to_string(),
    }));
  }

  semver::Version::parse(version).map_err(|e| {
    MaintError::Validation(ValidationError::InvalidVersion {
      version: version.to_string(),
      reason: e.to_string(),
    })
  })
}

pub fn main_manifest_path(root: &Path) -> PathBuf {
  root.join("package.json")
}

pub fn platform_manifest_path(root: &Path, platform: &str) -> PathBuf {
  root.join(PLATFORM_DIR).join(platform).join("package.json")
}

/// Compute the main manifest's new `version` and `optionalDependencies`
pub fn update_main(path: &Path, version: &str) -> MaintResult<VersionChange> {
  let mut manifest = Manifest::load(path).map_err(MaintError::Manifest)?;
  let from = manifest.version_label();

  manifest.set_version(version);
  let pinned = manifest.pin_optional_dependencies(version).map_err(MaintError::Manifest)?;

  Ok(VersionChange {
    label: "main".to_string(),
    from,
    pinned,
    manifest,
  })
}

/// Compute one platform manifest's new `version`
pub fn update_platform(root: &Path, platform: &str, version: &str) -> MaintResult<VersionChange> {
  let path = platform_manifest_path(root, platform);
  if !path.exists() {
    return Err(MaintError::Manifest(ManifestError::PlatformNotFound {
      platform: platform.to_string(),
      path,
    }));
  }

  let mut manifest = Manifest::load(&path).map_err(MaintError::Manifest)?;
  let from = manifest.version_label();
  manifest.set_version(version);

  Ok(VersionChange {
    label: platform.to_string(),
    from,
    pinned: 0,
    manifest,
  })
}

/// Validate (and optionally apply) a version bump across all packages
///
/// Stops at the first manifest that is missing or unreadable.
pub fn run(opts: &PropagateOptions) -> MaintResult<PropagationReport> {
  validate_version(&opts.version)?;

  println!("Testing version update to: {}", opts.version);

  if !opts.root.is_dir() {
    return Err(MaintError::Manifest(ManifestError::RootNotFound {
      path: opts.root.clone(),
    }));
  }

  let mut changes = Vec::with_capacity(PLATFORMS.len() + 1);

  match update_main(&main_manifest_path(&opts.root), &opts.version) {
    Ok(change) => {
      println!("✓ Main package: {} -> {}", change.from, opts.version);
      println!("✓ Optional dependencies updated to: {}", opts.version);
      changes.push(change);
    }
    Err(e) => {
      println!("✗ Error updating main package: {}", e);
      return Err(e);
    }
  }

  for platform in PLATFORMS {
    match update_platform(&opts.root, platform, &opts.version) {
      Ok(change) => {
        println!("✓ Platform {}: {} -> {}", change.label, change.from, opts.version);
        changes.push(change);
      }
      Err(e @ MaintError::Manifest(ManifestError::PlatformNotFound { .. })) => {
        println!("✗ Platform package not found: {}", platform);
        return Err(e);
      }
      Err(e) => {
        println!("✗ Error updating platform {}: {}", platform, e);
        return Err(e);
      }
    }
  }

  if opts.write {
    write_all(&changes)?;
  }

  println!("\n✓ All version updates validated for version {}", opts.version);

  Ok(PropagationReport {
    version: opts.version.clone(),
    changes,
    written: opts.write,
  })
}

/// Render every manifest before writing the first one
fn write_all(changes: &[VersionChange]) -> MaintResult<()> {
  let rendered = changes
    .iter()
    .map(|change| -> MaintResult<(PathBuf, String)> {
      Ok((change.manifest.path().to_path_buf(), change.manifest.to_json_string()?))
    })
    .collect::<MaintResult<Vec<_>>>()?;

  for (path, content) in rendered {
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("✓ Wrote {}", path.display());
  }
  Ok(())
}
