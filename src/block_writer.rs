/// Accumulates the lines of one generated code block.
///
/// Lines are joined with `\n` and the block carries no trailing newline, since the
/// surrounding template decides what follows it.
pub struct BlockWriter {
  /// Text written so far
  buffer: String,
  /// Tabs written before each non-empty line
  indent: String,
  /// Whether any line has been written
  started: bool,
}

impl BlockWriter {
  /// Create a BlockWriter with no indentation
  pub fn new() -> Self {
    Self::indented(0)
  }

  /// Create a BlockWriter that indents every line by `level` tabs
  pub fn indented(level: usize) -> Self {
    Self {
      buffer: String::new(),
      indent: "\t".repeat(level),
      started: false,
    }
  }

  /// Append one line at the writer's indentation
  pub fn writeln(&mut self, line: &str) {
    if self.started {
      self.buffer.push('\n');
    }
    if !line.is_empty() {
      self.buffer.push_str(&self.indent);
      self.buffer.push_str(line);
    }
    self.started = true;
  }

  /// Consume the writer and return the block text
  pub fn finish(self) -> String {
    self.buffer
  }
}

impl Default for BlockWriter {
  fn default() -> Self {
    Self::new()
  }
}
