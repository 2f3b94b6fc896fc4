//! package.json handling
//!
//! Manifests are kept as raw JSON objects so that fields we never touch
//! survive a write unchanged and in their original order.

use crate::core::error::{ManifestError, MaintResult};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key holding the platform package versions in the main manifest
pub const OPTIONAL_DEPENDENCIES: &str = "optionalDependencies";

/// A loaded package.json
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
  path: PathBuf,
  doc: Map<String, Value>,
}

impl Manifest {
  /// Read and parse a manifest; it must be a JSON object
  pub fn load(path: &Path) -> Result<Self, ManifestError> {
    let content = fs::read_to_string(path).map_err(|e| ManifestError::Read {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })?;
    Self::parse(path, &content)
  }

  /// Parse manifest text that came from `path`
  pub fn parse(path: &Path, content: &str) -> Result<Self, ManifestError> {
    let value: Value = serde_json::from_str(content).map_err(|e| ManifestError::Parse {
      path: path.to_path_buf(),
      reason: e.to_string(),
    })?;

    match value {
      Value::Object(doc) => Ok(Self {
        path: path.to_path_buf(),
        doc,
      }),
      other => Err(ManifestError::Parse {
        path: path.to_path_buf(),
        reason: format!("expected a JSON object, found {}", json_kind(&other)),
      }),
    }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// The `version` field as displayed to users, `unknown` when absent
  pub fn version_label(&self) -> String {
    match self.doc.get("version") {
      Some(Value::String(v)) => v.clone(),
      Some(other) => other.to_string(),
      None => "unknown".to_string(),
    }
  }

  #[cfg(test)]
  pub fn version(&self) -> Option<&str> {
    self.doc.get("version").and_then(Value::as_str)
  }

  pub fn set_version(&mut self, version: &str) {
    self.doc.insert("version".to_string(), Value::String(version.to_string()));
  }

  /// `optionalDependencies` when it is an object
  #[cfg(test)]
  pub fn optional_dependencies(&self) -> Option<&Map<String, Value>> {
    self.doc.get(OPTIONAL_DEPENDENCIES).and_then(Value::as_object)
  }

  /// Point every optional dependency at `version`; returns how many were pinned
  ///
  /// A manifest without `optionalDependencies` pins nothing. One whose
  /// `optionalDependencies` is not an object cannot be updated and is an error.
  pub fn pin_optional_dependencies(&mut self, version: &str) -> Result<usize, ManifestError> {
    let deps = match self.doc.get_mut(OPTIONAL_DEPENDENCIES) {
      None => return Ok(0),
      Some(Value::Object(deps)) => deps,
      Some(other) => {
        return Err(ManifestError::Parse {
          path: self.path.clone(),
          reason: format!("{} must be an object, found {}", OPTIONAL_DEPENDENCIES, json_kind(other)),
        });
      }
    };

    for value in deps.values_mut() {
      *value = Value::String(version.to_string());
    }
    Ok(deps.len())
  }

  /// Pretty JSON with npm's two-space indent and a trailing newline
  pub fn to_json_string(&self) -> MaintResult<String> {
    let mut out = serde_json::to_string_pretty(&self.doc)?;
    out.push('\n');
    Ok(out)
  }
}

fn json_kind(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "a boolean",
    Value::Number(_) => "a number",
    Value::String(_) => "a string",
    Value::Array(_) => "an array",
    Value::Object(_) => "an object",
  }
}
