use std::fs;
use std::path::Path;

use anyhow::Context as AnyhowContext;

use crate::config::LoaderConfig;
use crate::emitter::{emit_code_blocks, EmitOptions};
use crate::error::{CodeGenError, Result};
use crate::platform::{Platform, API_HEADER};
use crate::signature::extract_signatures;
use crate::template::{render_header, render_source};

/// Header and source template text for one platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderTemplates {
  pub header_name: String,
  pub header: String,
  pub source_name: String,
  pub source: String,
}

impl LoaderTemplates {
  pub fn builtin(platform: Platform) -> Self {
    Self {
      header_name: platform.header_template_name(),
      header: platform.builtin_header_template().to_string(),
      source_name: platform.source_template_name(),
      source: platform.builtin_source_template().to_string(),
    }
  }

  /// Reads `OpenGL.h.<platform>` and `OpenGL.c.<platform>` from `dir`
  pub fn from_dir(dir: &Path, platform: Platform) -> Result<Self> {
    let header_name = platform.header_template_name();
    let source_name = platform.source_template_name();
    Ok(Self {
      header: read_text(&dir.join(&header_name))?,
      source: read_text(&dir.join(&source_name))?,
      header_name,
      source_name,
    })
  }
}

/// Rendered loader files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLoader {
  pub header: String,
  pub source: String,
  /// Number of entry points emitted, duplicates included
  pub function_count: usize,
}

/// Runs the whole pipeline on text that is already loaded
pub fn generate_loader(
  declarations: &str,
  templates: &LoaderTemplates,
  options: &EmitOptions,
) -> Result<GeneratedLoader> {
  let signatures = extract_signatures(declarations)?;

  if signatures.is_empty() {
    log::warn!("No function declarations found; the declaration file may be malformed");
  }
  for (name, count) in signatures.duplicate_names() {
    log::warn!("Function '{}' is declared {} times; every copy is emitted", name, count);
  }

  let blocks = emit_code_blocks(&signatures, options);
  let header = render_header(&templates.header_name, &templates.header, &blocks)?;
  let source = render_source(&templates.source_name, &templates.source, &blocks)?;

  Ok(GeneratedLoader {
    header,
    source,
    function_count: signatures.len(),
  })
}

/// Reads inputs from disk, generates the loader, and writes the results
pub struct LoaderGenerator<'a> {
  config: &'a LoaderConfig,
}

impl<'a> LoaderGenerator<'a> {
  pub fn new(config: &'a LoaderConfig) -> Self {
    Self { config }
  }

  /// Loads the declaration file and templates and renders both files without writing them
  pub fn generate(&self) -> Result<GeneratedLoader> {
    let declaration_file = self.config.declaration_file();
    if !declaration_file.is_file() {
      return Err(CodeGenError::MissingDeclarationFile {
        path: declaration_file,
      });
    }
    log::info!("Found glcorearb.h at: {}", declaration_file.display());
    let declarations = read_text(&declaration_file)?;

    let templates = match self.config.template_dir() {
      Some(dir) => {
        log::debug!("Loading {} templates from {}", self.config.platform, dir.display());
        LoaderTemplates::from_dir(dir, self.config.platform)?
      }
      None => LoaderTemplates::builtin(self.config.platform),
    };

    generate_loader(&declarations, &templates, &self.config.emit)
  }

  /// Generates the loader and writes `OpenGL.h`, `OpenGL.c` and `OpenGLAPI.h` to the destination
  pub fn run(&self) -> Result<GeneratedLoader> {
    let loader = self.generate()?;

    let destination = &self.config.destination;
    fs::create_dir_all(destination)
      .with_context(|| format!("Failed to create directory: {}", destination.display()))?;

    write_text(&self.config.header_path(), &loader.header)?;
    write_text(&self.config.source_path(), &loader.source)?;
    write_text(&self.config.api_header_path(), API_HEADER)?;

    log::info!(
      "The OpenGL library loading files ({} functions) were written to: {}",
      loader.function_count,
      destination.display()
    );
    Ok(loader)
  }
}

fn read_text(path: &Path) -> Result<String> {
  let text = fs::read_to_string(path)
    .with_context(|| format!("Failed to read file: {}", path.display()))?;
  Ok(text)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
  fs::write(path, text).with_context(|| format!("Failed to write to file: {}", path.display()))?;
  log::debug!("Wrote {}", path.display());
  Ok(())
}
