use std::path::{Path, PathBuf};

use crate::emitter::EmitOptions;
use crate::platform::Platform;

pub const DEFAULT_DESTINATION: &str = "Generated";
pub const DEFAULT_DECLARATION_PATH: &str = "/usr/include/GL/glcorearb.h";
pub const DECLARATION_FILE_NAME: &str = "glcorearb.h";

/// Settings for one generator run. Built once, then only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
  /// Directory receiving the generated files
  pub destination: PathBuf,
  /// Path to `glcorearb.h`, or a directory containing it
  pub source: PathBuf,
  pub platform: Platform,
  /// Directory with `OpenGL.h.<platform>` / `OpenGL.c.<platform>` overriding the built-in templates
  pub template_dir: Option<PathBuf>,
  pub emit: EmitOptions,
}

impl LoaderConfig {
  pub fn new(destination: PathBuf, source: PathBuf, platform: Platform) -> Self {
    Self {
      destination,
      source,
      platform,
      template_dir: None,
      emit: EmitOptions::default(),
    }
  }

  pub fn with_template_dir(mut self, template_dir: PathBuf) -> Self {
    self.template_dir = Some(template_dir);
    self
  }

  /// The declaration file to read. A directory source resolves to the `glcorearb.h` inside it.
  pub fn declaration_file(&self) -> PathBuf {
    if self.source.is_dir() {
      self.source.join(DECLARATION_FILE_NAME)
    } else {
      self.source.clone()
    }
  }

  pub fn header_path(&self) -> PathBuf {
    self.destination.join(crate::platform::HEADER_FILE_NAME)
  }

  pub fn source_path(&self) -> PathBuf {
    self.destination.join(crate::platform::SOURCE_FILE_NAME)
  }

  pub fn api_header_path(&self) -> PathBuf {
    self.destination.join(crate::platform::API_HEADER_FILE_NAME)
  }

  pub fn template_dir(&self) -> Option<&Path> {
    self.template_dir.as_deref()
  }
}
