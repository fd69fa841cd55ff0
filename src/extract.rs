//! Pulls a code payload out of surrounding prose.
//!
//! Collaborator text usually wraps code in fenced blocks; when it does not,
//! a liberal keyword/symbol heuristic decides whether the whole text is code.

use once_cell::sync::Lazy;
use regex::Regex;

static DART_FENCE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?s)```dart\s*(.*?)\s*```").expect("dart fence pattern"));

static ANY_FENCE_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?s)```\s*(.*?)\s*```").expect("fence pattern"));

const INDICATORS: &[&str] = &[
  "{", "}", "(", ")", ";", "=", "class", "void", "int", "String", "List",
  "Map", "var", "final", "const", "if", "for", "while", "return", "import",
  "extends", "implements",
];

/// Extracts a code payload from `text`, or `None` when it does not look
/// like code. Fenced ```dart blocks win, then any fenced block, then the
/// heuristic over the whole text.
pub fn extract_code(text: &str) -> Option<String> {
  if let Some(caps) = DART_FENCE_RE.captures(text) {
    return Some(caps[1].trim().to_string());
  }
  if let Some(caps) = ANY_FENCE_RE.captures(text) {
    return Some(caps[1].trim().to_string());
  }

  let hits = INDICATORS.iter().filter(|i| text.contains(*i)).count();
  let lines = text.trim().lines().count();

  if (lines > 2 && hits >= 3)
    || hits >= 5
    || (text.contains("class") && text.contains('{'))
    || (text.contains("void") && text.contains('('))
  {
    return Some(text.trim().to_string());
  }

  None
}
