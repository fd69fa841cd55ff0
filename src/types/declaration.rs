//! Structural records produced by the parser.
//!
//! Records live only between a parse pass and the graph build; the graph
//! never holds on to them.

/// A declaration discovered in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
  Class(ClassDecl),
  Method(MethodDecl),
  Variable(VariableDecl),
}

/// A class with its members in the order they were encountered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
  pub name: String,
  pub members: Vec<Declaration>,
}

impl ClassDecl {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      members: Vec::new(),
    }
  }

  /// Variable members in source order.
  pub fn variables(&self) -> impl Iterator<Item = &VariableDecl> {
    self.members.iter().filter_map(|m| match m {
      Declaration::Variable(v) => Some(v),
      _ => None,
    })
  }

  /// Method members in source order.
  pub fn methods(&self) -> impl Iterator<Item = &MethodDecl> {
    self.members.iter().filter_map(|m| match m {
      Declaration::Method(m) => Some(m),
      _ => None,
    })
  }
}

/// A method signature. The body is not recorded; parsing is line-oriented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
  pub return_type: String,
  pub name: String,
  /// Raw parameter list text, without the surrounding parentheses.
  pub parameters: String,
}

/// A variable declaration with its raw value expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDecl {
  /// Declared type or qualifier keyword (`var`, `final`, `int`, ...).
  pub var_type: String,
  pub name: String,
  /// Raw value expression text, trailing `;` stripped.
  pub value: String,
}
