use std::fmt;
use std::str::FromStr;

use crate::error::CodeGenError;

pub const HEADER_FILE_NAME: &str = "OpenGL.h";
pub const SOURCE_FILE_NAME: &str = "OpenGL.c";
pub const API_HEADER_FILE_NAME: &str = "OpenGLAPI.h";

/// Export macros shared by every platform
pub const API_HEADER: &str = include_str!("../templates/OpenGLAPI.h");

/// Operating system the generated loader targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
  Linux,
  Windows,
}

impl Platform {
  /// Platform of the machine running the generator, if supported
  pub fn host() -> Option<Self> {
    std::env::consts::OS.parse().ok()
  }

  /// Lowercase name used as the template file suffix
  pub fn name(self) -> &'static str {
    match self {
      Platform::Linux => "linux",
      Platform::Windows => "windows",
    }
  }

  /// `OpenGL.h.<platform>`
  pub fn header_template_name(self) -> String {
    format!("{}.{}", HEADER_FILE_NAME, self.name())
  }

  /// `OpenGL.c.<platform>`
  pub fn source_template_name(self) -> String {
    format!("{}.{}", SOURCE_FILE_NAME, self.name())
  }

  pub fn builtin_header_template(self) -> &'static str {
    match self {
      Platform::Linux => include_str!("../templates/OpenGL.h.linux"),
      Platform::Windows => include_str!("../templates/OpenGL.h.windows"),
    }
  }

  pub fn builtin_source_template(self) -> &'static str {
    match self {
      Platform::Linux => include_str!("../templates/OpenGL.c.linux"),
      Platform::Windows => include_str!("../templates/OpenGL.c.windows"),
    }
  }
}

impl FromStr for Platform {
  type Err = CodeGenError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_ascii_lowercase().as_str() {
      "linux" => Ok(Platform::Linux),
      "windows" => Ok(Platform::Windows),
      _ => Err(CodeGenError::UnsupportedPlatform(s.to_string())),
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
