//! Maps raw literal expressions to literal block kinds.

use crate::types::{BlockKind, FieldValue};

/// A classified literal: the block kind to instantiate and the normalized
/// field value to put in it.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedValue {
  pub kind: BlockKind,
  pub value: FieldValue,
}

/// Classifies a raw value expression. Ordered rules, first match wins; the
/// numeric and boolean checks run before the quote and bracket checks so a
/// quoted number stays a string.
///
/// 1. all decimal digits -> number
/// 2. `true` / `false` -> boolean
/// 3. contains a quote -> string, quote characters stripped
/// 4. contains `[` -> list, raw text kept (elements are not decomposed)
/// 5. anything else -> string with the raw text
pub fn classify_value(raw: &str) -> ClassifiedValue {
  let trimmed = raw.trim();

  if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
    // Digit runs too long for i64 fall through to the string default.
    if let Ok(n) = trimmed.parse::<i64>() {
      return ClassifiedValue {
        kind: BlockKind::NumberLit,
        value: FieldValue::Number(n),
      };
    }
  }

  if trimmed == "true" || trimmed == "false" {
    return ClassifiedValue {
      kind: BlockKind::BoolLit,
      value: FieldValue::Token(trimmed.to_string()),
    };
  }

  if raw.contains('"') || raw.contains('\'') {
    return ClassifiedValue {
      kind: BlockKind::StringLit,
      value: FieldValue::Text(raw.chars().filter(|c| *c != '"' && *c != '\'').collect()),
    };
  }

  if raw.contains('[') {
    return ClassifiedValue {
      kind: BlockKind::List,
      value: FieldValue::Text(raw.to_string()),
    };
  }

  ClassifiedValue {
    kind: BlockKind::StringLit,
    value: FieldValue::Text(raw.to_string()),
  }
}
