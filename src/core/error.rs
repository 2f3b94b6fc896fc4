//! Error types for release-maint with contextual messages and exit codes
//!
//! Fatal failures (listing releases, reading manifests, bad arguments) surface
//! here. Per-release deletion failures never become errors; they are counted
//! in the prune summary instead.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Exit codes for release-maint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
  /// User error (config, invalid args)
  User = 1,
  /// System error (gh, git, I/O)
  System = 2,
  /// Validation failure (bad version, missing or broken manifest)
  Validation = 3,
}

impl ExitCode {
  /// Convert to i32 for process exit
  pub fn as_i32(self) -> i32 {
    self as i32
  }
}

/// Main error type for release-maint
#[derive(Debug)]
pub enum MaintError {
  /// Configuration errors
  Config(ConfigError),

  /// Release listing failed or returned garbage
  Fetch { repo: String, reason: String },

  /// Manifest could not be located or parsed
  Manifest(ManifestError),

  /// Pre-flight validation errors
  Validation(ValidationError),

  /// I/O errors
  Io(io::Error),

  /// Generic error with message and optional context
  Message {
    message: String,
    context: Option<String>,
    help: Option<String>,
  },
}

impl MaintError {
  /// Create a simple error message
  pub fn message(msg: impl Into<String>) -> Self {
    MaintError::Message {
      message: msg.into(),
      context: None,
      help: None,
    }
  }

  /// Add context to an existing error
  pub fn context(self, ctx: impl Into<String>) -> Self {
    let ctx_str = ctx.into();
    match self {
      MaintError::Message { message, context, help } => MaintError::Message {
        message,
        context: Some(context.map(|c| format!("{}\n{}", ctx_str, c)).unwrap_or(ctx_str)),
        help,
      },
      MaintError::Io(e) => MaintError::Message {
        message: format!("I/O error: {}", e),
        context: Some(ctx_str),
        help: None,
      },
      _ => self,
    }
  }

  /// Get the appropriate exit code for this error
  pub fn exit_code(&self) -> ExitCode {
    match self {
      MaintError::Config(_) => ExitCode::User,
      MaintError::Fetch { .. } => ExitCode::System,
      MaintError::Manifest(_) => ExitCode::Validation,
      MaintError::Validation(_) => ExitCode::Validation,
      MaintError::Io(_) => ExitCode::System,
      MaintError::Message { .. } => ExitCode::User,
    }
  }

  /// Get contextual help message for this error
  pub fn help_message(&self) -> Option<String> {
    match self {
      MaintError::Config(e) => e.help_message(),
      MaintError::Fetch { reason, .. } => {
        if reason.contains("auth login") || reason.contains("authentication") {
          Some("Authenticate the GitHub CLI first: gh auth login".to_string())
        } else if reason.contains("No such file") || reason.contains("not found") {
          Some("Install the GitHub CLI: https://cli.github.com/".to_string())
        } else {
          None
        }
      }
      MaintError::Manifest(e) => e.help_message(),
      MaintError::Validation(e) => e.help_message(),
      MaintError::Message { help, .. } => help.clone(),
      MaintError::Io(_) => None,
    }
  }
}

impl fmt::Display for MaintError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      MaintError::Config(e) => write!(f, "{}", e),
      MaintError::Fetch { repo, reason } => write!(f, "Failed to list releases for {}: {}", repo, reason),
      MaintError::Manifest(e) => write!(f, "{}", e),
      MaintError::Validation(e) => write!(f, "{}", e),
      MaintError::Io(e) => write!(f, "I/O error: {}", e),
      MaintError::Message { message, context, .. } => {
        write!(f, "{}", message)?;
        if let Some(ctx) = context {
          write!(f, "\n{}", ctx)?;
        }
        Ok(())
      }
    }
  }
}

impl std::error::Error for MaintError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      MaintError::Io(e) => Some(e),
      _ => None,
    }
  }
}

impl From<io::Error> for MaintError {
  fn from(err: io::Error) -> Self {
    MaintError::Io(err)
  }
}

impl From<serde_json::Error> for MaintError {
  fn from(err: serde_json::Error) -> Self {
    MaintError::message(format!("JSON error: {}", err))
  }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
  /// Config file exists but could not be parsed
  Invalid { path: PathBuf, reason: String },

  /// A field is present but empty
  EmptyField { field: String },
}

impl ConfigError {
  fn help_message(&self) -> Option<String> {
    match self {
      ConfigError::Invalid { .. } => {
        Some("Expected `[prune]` with `repo`/`keep` and `[packages]` with `root`.".to_string())
      }
      ConfigError::EmptyField { field } => Some(format!("Remove `{}` to use the built-in default.", field)),
    }
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Invalid { path, reason } => {
        write!(f, "Invalid configuration in {}:\n{}", path.display(), reason)
      }
      ConfigError::EmptyField { field } => {
        write!(f, "Config field '{}' must not be empty", field)
      }
    }
  }
}

/// Manifest (package.json) errors
#[derive(Debug)]
pub enum ManifestError {
  /// Package root directory missing
  RootNotFound { path: PathBuf },

  /// Platform package manifest missing
  PlatformNotFound { platform: String, path: PathBuf },

  /// Manifest could not be read
  Read { path: PathBuf, reason: String },

  /// Manifest is not a JSON object
  Parse { path: PathBuf, reason: String },
}

impl ManifestError {
  fn help_message(&self) -> Option<String> {
    match self {
      ManifestError::RootNotFound { .. } => {
        Some("Run from the repository root or pass --root <dir>.".to_string())
      }
      ManifestError::PlatformNotFound { platform, .. } => Some(format!(
        "Every platform package needs a manifest: platform-packages/{}/package.json",
        platform
      )),
      _ => None,
    }
  }
}

impl fmt::Display for ManifestError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ManifestError::RootNotFound { path } => write!(f, "Directory not found: {}", path.display()),
      ManifestError::PlatformNotFound { platform, path } => {
        write!(f, "Platform package not found: {} ({})", platform, path.display())
      }
      ManifestError::Read { path, reason } => write!(f, "Failed to read {}: {}", path.display(), reason),
      ManifestError::Parse { path, reason } => write!(f, "Failed to parse {}: {}", path.display(), reason),
    }
  }
}

/// Validation errors
#[derive(Debug)]
pub enum ValidationError {
  /// Version argument is empty or carries a `v` prefix
  VersionPrefix { version: String },

  /// Version argument is not a bare semantic version
  InvalidVersion { version: String, reason: String },
}

impl ValidationError {
  fn help_message(&self) -> Option<String> {
    match self {
      ValidationError::VersionPrefix { version } => {
        let bare = version.trim_start_matches('v');
        if bare.is_empty() {
          Some("Example: release-maint versions 0.2.3".to_string())
        } else {
          Some(format!("Use the bare version: {}", bare))
        }
      }
      ValidationError::InvalidVersion { .. } => Some("Example: release-maint versions 0.2.3".to_string()),
    }
  }
}

impl fmt::Display for ValidationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ValidationError::VersionPrefix { version } => {
        write!(f, "Version should not start with \"v\"\nGot: {}", version)
      }
      ValidationError::InvalidVersion { version, reason } => {
        write!(f, "Invalid version '{}': {}", version, reason)
      }
    }
  }
}

/// Result type alias for release-maint
pub type MaintResult<T> = Result<T, MaintError>;

/// Helper trait to add context to Results
pub trait ResultExt<T> {
  /// Add context using a closure (lazy evaluation)
  fn with_context<F>(self, f: F) -> MaintResult<T>
  where
    F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
  E: Into<MaintError>,
{
  fn with_context<F>(self, f: F) -> MaintResult<T>
  where
    F: FnOnce() -> String,
  {
    self.map_err(|e| e.into().context(f()))
  }
}

/// Pretty-print an error to stderr with help text
pub fn print_error(error: &MaintError) {
  eprintln!("\n❌ {}\n", error);

  if let Some(help) = error.help_message() {
    eprintln!("💡 Help: {}\n", help);
  }
}
