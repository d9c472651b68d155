use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use coregl::config::{DEFAULT_DECLARATION_PATH, DEFAULT_DESTINATION};
use coregl::{LoaderConfig, LoaderGenerator, Platform};

/// Generates 'OpenGL.c' and 'OpenGL.h', which load the OpenGL core profile in C or C++
/// programs without hand-written glXGetProcAddress / wglGetProcAddress calls.
#[derive(Parser, Debug)]
#[command(name = "coregl", version, about)]
struct Cli {
  /// Directory the generated files are written to
  #[arg(long, value_name = "DIR", default_value = DEFAULT_DESTINATION)]
  destination: PathBuf,

  /// Target platform (linux or windows). Defaults to the host platform
  #[arg(long, value_name = "NAME")]
  platform: Option<String>,

  /// Path to an OpenGL core profile header, or a directory containing glcorearb.h
  #[arg(long, value_name = "PATH", default_value = DEFAULT_DECLARATION_PATH)]
  source: PathBuf,

  /// Directory holding OpenGL.h.<platform> and OpenGL.c.<platform> templates
  #[arg(long, value_name = "DIR")]
  templates: Option<PathBuf>,

  /// Enable debug logging
  #[arg(short, long)]
  verbose: bool,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  let level = if cli.verbose { "debug" } else { "info" };
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

  let platform = match cli.platform {
    Some(name) => name.parse::<Platform>()?,
    None => Platform::host().context("Cannot detect a supported host platform; pass --platform")?,
  };

  let mut config = LoaderConfig::new(cli.destination, cli.source, platform);
  if let Some(dir) = cli.templates {
    config = config.with_template_dir(dir);
  }

  LoaderGenerator::new(&config).run()?;
  Ok(())
}
