use regex::Regex;
use std::collections::BTreeMap;

use crate::error::{CodeGenError, Result};

/// Shape of a single-line entry point declaration in `glcorearb.h`
const DECLARATION_PATTERN: &str = r"^GLAPI(.*)APIENTRY\s+(\w+)\s*(\(.*\));$";

/// One API entry point found in a declaration file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
  /// Text between the `GLAPI` and `APIENTRY` markers, kept verbatim
  pub return_qualifier: String,
  /// Function name, case-preserved
  pub name: String,
  /// Argument list including its parentheses, unparsed
  pub argument_list: String,
}

impl FunctionSignature {
  pub fn new(return_qualifier: &str, name: &str, argument_list: &str) -> Self {
    Self {
      return_qualifier: return_qualifier.to_string(),
      name: name.to_string(),
      argument_list: argument_list.to_string(),
    }
  }

  /// Length of the name in characters
  pub fn name_len(&self) -> usize {
    self.name.chars().count()
  }
}

/// The signatures of one declaration file, sorted by name.
///
/// Sorting is stable, so entries sharing a name keep their scan order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureSet {
  signatures: Vec<FunctionSignature>,
}

impl SignatureSet {
  pub fn new(mut signatures: Vec<FunctionSignature>) -> Self {
    signatures.sort_by(|a, b| a.name.cmp(&b.name));
    Self { signatures }
  }

  pub fn len(&self) -> usize {
    self.signatures.len()
  }

  pub fn is_empty(&self) -> bool {
    self.signatures.is_empty()
  }

  pub fn iter(&self) -> std::slice::Iter<'_, FunctionSignature> {
    self.signatures.iter()
  }

  pub fn as_slice(&self) -> &[FunctionSignature] {
    &self.signatures
  }

  /// Names declared more than once, with their counts, in name order.
  ///
  /// Duplicates are not removed from the set; every occurrence is emitted.
  pub fn duplicate_names(&self) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for sig in &self.signatures {
      *counts.entry(sig.name.as_str()).or_insert(0) += 1;
    }
    counts
      .into_iter()
      .filter(|(_, count)| *count > 1)
      .map(|(name, count)| (name.to_string(), count))
      .collect()
  }
}

impl<'a> IntoIterator for &'a SignatureSet {
  type Item = &'a FunctionSignature;
  type IntoIter = std::slice::Iter<'a, FunctionSignature>;

  fn into_iter(self) -> Self::IntoIter {
    self.signatures.iter()
  }
}

/// Scans declaration text line by line and keeps every line shaped like
/// `GLAPI <ret> APIENTRY <name> (<args>);`. Anything else is skipped.
pub fn scan_signatures(content: &str) -> Result<Vec<FunctionSignature>> {
  let pattern = Regex::new(DECLARATION_PATTERN).map_err(CodeGenError::Regex)?;

  let mut found = Vec::new();
  for line in content.lines() {
    if let Some(caps) = pattern.captures(line) {
      let (_, [return_qualifier, name, argument_list]) = caps.extract();
      found.push(FunctionSignature::new(return_qualifier, name, argument_list));
    }
  }

  Ok(found)
}

/// Extracts and sorts every signature in `content`. An empty result is not an error.
pub fn extract_signatures(content: &str) -> Result<SignatureSet> {
  let signatures = scan_signatures(content)?;
  log::debug!("Matched {} declaration lines", signatures.len());
  Ok(SignatureSet::new(signatures))
}
