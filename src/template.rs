use crate::emitter::CodeBlocks;
use crate::error::{CodeGenError, Result};

pub const HEADER_DECLARATIONS: &str = "HeaderFunctionDeclarations";
pub const HEADER_MACROS: &str = "HeaderMacroDefinitions";
pub const SOURCE_DECLARATIONS: &str = "SourceFunctionDeclarations";
pub const SOURCE_VALUES: &str = "SourceFunctionValues";

/// Replaces every `{Name}` in `template` with its value from `values`.
///
/// `{{` and `}}` produce literal braces. A placeholder missing from `values` or an
/// unbalanced brace fails the whole render.
pub fn render_template(template_name: &str, template: &str, values: &[(&str, &str)]) -> Result<String> {
  let malformed = |offset: usize, reason: &str| CodeGenError::MalformedTemplate {
    template: template_name.to_string(),
    offset,
    reason: reason.to_string(),
  };

  let mut output = String::with_capacity(template.len());
  let mut rest = template;
  let mut offset = 0;

  while let Some(pos) = rest.find(|c: char| c == '{' || c == '}') {
    output.push_str(&rest[..pos]);
    let tail = &rest[pos..];

    let consumed = if tail.starts_with("{{") {
      output.push('{');
      2
    } else if tail.starts_with("}}") {
      output.push('}');
      2
    } else if tail.starts_with('}') {
      return Err(malformed(offset + pos, "unmatched '}'"));
    } else {
      let close = tail
        .find('}')
        .ok_or_else(|| malformed(offset + pos, "unterminated placeholder"))?;
      let name = &tail[1..close];
      let value = values
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, value)| *value)
        .ok_or_else(|| CodeGenError::UnknownPlaceholder {
          template: template_name.to_string(),
          placeholder: name.to_string(),
        })?;
      output.push_str(value);
      close + 1
    };

    rest = &tail[consumed..];
    offset += pos + consumed;
  }

  output.push_str(rest);
  Ok(output)
}

/// Fills a header template with the declaration and macro blocks
pub fn render_header(template_name: &str, template: &str, blocks: &CodeBlocks) -> Result<String> {
  render_template(
    template_name,
    template,
    &[
      (HEADER_DECLARATIONS, blocks.header_declarations.as_str()),
      (HEADER_MACROS, blocks.header_macros.as_str()),
    ],
  )
}

/// Fills a source template with the definition and assignment blocks
pub fn render_source(template_name: &str, template: &str, blocks: &CodeBlocks) -> Result<String> {
  render_template(
    template_name,
    template,
    &[
      (SOURCE_DECLARATIONS, blocks.source_declarations.as_str()),
      (SOURCE_VALUES, blocks.source_values.as_str()),
    ],
  )
}
