use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating loader files
#[derive(Error, Debug)]
pub enum CodeGenError {
  #[error("Could not find the OpenGL API header file: {path}")]
  MissingDeclarationFile { path: PathBuf },

  #[error("Unsupported platform: '{0}' (expected 'linux' or 'windows')")]
  UnsupportedPlatform(String),

  #[error("Template '{template}' references unknown placeholder '{placeholder}'")]
  UnknownPlaceholder {
    template: String,
    placeholder: String,
  },

  #[error("Malformed template '{template}' at byte {offset}: {reason}")]
  MalformedTemplate {
    template: String,
    offset: usize,
    reason: String,
  },

  #[error("Regex error: {0}")]
  Regex(#[from] regex::Error),

  #[error("Other error: {0}")]
  Other(#[from] anyhow::Error),
}

/// Result type for loader generation
pub type Result<T> = std::result::Result<T, CodeGenError>;
