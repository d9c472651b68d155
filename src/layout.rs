use crate::signature::SignatureSet;

/// Spaces added after the longest name
pub const DEFAULT_PADDING: usize = 4;

/// Column at which pointer names start in every generated block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentWidth(usize);

impl AlignmentWidth {
  pub fn get(self) -> usize {
    self.0
  }

  /// Spaces needed after `name` to reach the column. Never negative for names in the planned set.
  pub fn pad_for(self, name: &str) -> usize {
    self.0.saturating_sub(name.chars().count())
  }
}

/// Longest name in the set plus `padding`; just `padding` for an empty set.
pub fn plan_alignment(signatures: &SignatureSet, padding: usize) -> AlignmentWidth {
  let longest = signatures
    .iter()
    .map(|sig| sig.name_len())
    .max()
    .unwrap_or(0);
  AlignmentWidth(longest + padding)
}
