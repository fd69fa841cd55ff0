//! Typed block field identifiers and values.

/// Identifies a field on a block. Each block kind declares which of these it
/// carries (see the registry); the serialized name is what the renderer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
  ClassName,
  ReturnType,
  MethodName,
  Parameters,
  VarType,
  VarName,
  Iterator,
  Iterable,
  Text,
  Number,
  Bool,
  ElementType,
}

impl FieldId {
  /// Field name as it appears in the serialized XML and the renderer.
  pub fn name(self) -> &'static str {
    match self {
      FieldId::ClassName => "CLASS_NAME",
      FieldId::ReturnType => "RETURN_TYPE",
      FieldId::MethodName => "METHOD_NAME",
      FieldId::Parameters => "PARAMETERS",
      FieldId::VarType => "VAR_TYPE",
      FieldId::VarName => "VAR_NAME",
      FieldId::Iterator => "ITERATOR",
      FieldId::Iterable => "ITERABLE",
      FieldId::Text => "TEXT",
      FieldId::Number => "NUMBER",
      FieldId::Bool => "BOOL",
      FieldId::ElementType => "TYPE",
    }
  }
}

/// A value held by a block field: free text, a number, or one token out of a
/// dropdown's option set.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
  Text(String),
  Number(i64),
  Token(String),
}

impl FieldValue {
  /// Textual form used for serialization.
  pub fn to_text(&self) -> String {
    match self {
      FieldValue::Text(s) | FieldValue::Token(s) => s.clone(),
      FieldValue::Number(n) => n.to_string(),
    }
  }
}
