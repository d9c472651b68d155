// OpenGL core profile loader generator: scans glcorearb.h and emits C loader files

mod block_writer;
pub mod config;
pub mod emitter;
mod error;
pub mod generator;
pub mod layout;
pub mod platform;
pub mod signature;
pub mod template;

pub use block_writer::BlockWriter;
pub use config::LoaderConfig;
pub use emitter::{emit_code_blocks, CodeBlocks, EmitOptions, LoaderEntry};
pub use error::{CodeGenError, Result};
pub use generator::{generate_loader, GeneratedLoader, LoaderGenerator, LoaderTemplates};
pub use layout::{plan_alignment, AlignmentWidth};
pub use platform::Platform;
pub use signature::{extract_signatures, FunctionSignature, SignatureSet};
pub use template::{render_header, render_source, render_template};
