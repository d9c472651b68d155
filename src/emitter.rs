use crate::block_writer::BlockWriter;
use crate::layout::{plan_alignment, AlignmentWidth, DEFAULT_PADDING};
use crate::signature::{FunctionSignature, SignatureSet};

/// Prefix of the generated pointer variables. Keeps them apart from pointers other
/// libraries define under the plain API names.
pub const DEFAULT_POINTER_PREFIX: &str = "_cglptr_";

/// Name of the resolver the source templates must define
pub const RESOLVER_FUNCTION: &str = "glGetFunctionPointer";

/// Extra spaces in macro lines so their targets line up with the declared pointer names
pub const MACRO_OFFSET: usize = 6;

const HEADER_INDENT: usize = 3;
const SOURCE_VALUE_INDENT: usize = 1;

/// Tunables for code block emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
  pub pointer_prefix: String,
  pub padding: usize,
}

impl Default for EmitOptions {
  fn default() -> Self {
    Self {
      pointer_prefix: DEFAULT_POINTER_PREFIX.to_string(),
      padding: DEFAULT_PADDING,
    }
  }
}

/// The four generated blocks, one line per signature, in the same order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeBlocks {
  pub header_declarations: String,
  pub header_macros: String,
  pub source_declarations: String,
  pub source_values: String,
}

/// A signature placed on the aligned grid. Renders all four fragments, so every
/// block sees the entries in one order.
pub struct LoaderEntry<'a> {
  name: &'a str,
  pad: usize,
  prefix: &'a str,
}

impl<'a> LoaderEntry<'a> {
  pub fn new(signature: &'a FunctionSignature, width: AlignmentWidth, prefix: &'a str) -> Self {
    Self {
      name: &signature.name,
      pad: width.pad_for(&signature.name),
      prefix,
    }
  }

  /// `PFN<UPPERNAME>PROC`
  pub fn pointer_type(&self) -> String {
    format!("PFN{}PROC", self.name.to_uppercase())
  }

  pub fn pointer_name(&self) -> String {
    format!("{}{}", self.prefix, self.name)
  }

  fn spaces(&self, extra: usize) -> String {
    " ".repeat(self.pad + extra)
  }

  pub fn header_declaration(&self) -> String {
    format!(
      "extern {}{}{};",
      self.pointer_type(),
      self.spaces(0),
      self.pointer_name()
    )
  }

  pub fn header_macro(&self) -> String {
    format!(
      "#define {}{}{}",
      self.name,
      self.spaces(MACRO_OFFSET),
      self.pointer_name()
    )
  }

  pub fn source_declaration(&self) -> String {
    format!(
      "{}{}{} = NULL;",
      self.pointer_type(),
      self.spaces(0),
      self.pointer_name()
    )
  }

  pub fn source_value(&self) -> String {
    format!(
      "{}{}= ({}){}(\"{}\");",
      self.pointer_name(),
      self.spaces(0),
      self.pointer_type(),
      RESOLVER_FUNCTION,
      self.name
    )
  }
}

/// Renders the four blocks for an already planned width
pub fn emit_with_width(
  signatures: &SignatureSet,
  width: AlignmentWidth,
  prefix: &str,
) -> CodeBlocks {
  let mut header_declarations = BlockWriter::indented(HEADER_INDENT);
  let mut header_macros = BlockWriter::indented(HEADER_INDENT);
  let mut source_declarations = BlockWriter::new();
  let mut source_values = BlockWriter::indented(SOURCE_VALUE_INDENT);

  for signature in signatures {
    let entry = LoaderEntry::new(signature, width, prefix);
    header_declarations.writeln(&entry.header_declaration());
    header_macros.writeln(&entry.header_macro());
    source_declarations.writeln(&entry.source_declaration());
    source_values.writeln(&entry.source_value());
  }

  CodeBlocks {
    header_declarations: header_declarations.finish(),
    header_macros: header_macros.finish(),
    source_declarations: source_declarations.finish(),
    source_values: source_values.finish(),
  }
}

/// Plans the alignment and renders the four blocks
pub fn emit_code_blocks(signatures: &SignatureSet, options: &EmitOptions) -> CodeBlocks {
  let width = plan_alignment(signatures, options.padding);
  log::debug!(
    "Emitting {} entries aligned to column {}",
    signatures.len(),
    width.get()
  );
  emit_with_width(signatures, width, &options.pointer_prefix)
}
