//! `release-maint versions`

use crate::core::config::MaintConfig;
use crate::core::error::MaintResult;
use crate::npm::PropagateOptions;
use crate::npm::propagate;
use std::env;
use std::path::PathBuf;

/// Run the version propagation check (or update, with `--write`)
pub fn run_versions(version: String, root: Option<PathBuf>, write: bool) -> MaintResult<()> {
  let workspace_root = env::current_dir()?;
  let config = MaintConfig::load(&workspace_root)?;

  let opts = PropagateOptions {
    root: config.resolve_package_root(root),
    version,
    write,
  };

  let report = propagate::run(&opts)?;

  let pinned: usize = report.changes.iter().map(|change| change.pinned).sum();
  println!("   {} optional dependencies pinned to {}", pinned, report.version);
  if !report.written {
    println!(
      "   {} manifests checked, none written (pass --write to apply {})",
      report.changes.len(),
      report.version
    );
  }
  println!("\n✓ All tests passed");

  Ok(())
}
