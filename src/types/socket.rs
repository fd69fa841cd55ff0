//! Connection points on blocks.

/// Type constraint carried by value sockets. `Any` accepts every produced tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
  Boolean,
  Str,
  Number,
  List,
  Any,
}

impl TypeTag {
  /// Whether an input constrained to `self` accepts a `produced` output tag.
  pub fn accepts(self, produced: TypeTag) -> bool {
    self == TypeTag::Any || self == produced
  }
}

/// A socket slot on a block. Statement sockets (`Previous`, `Next`, `Body`)
/// chain blocks sequentially; value sockets (`Input`, `Output`) carry typed
/// results. `Body` and `Input` are named because a block may have several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Socket {
  Previous,
  Next,
  Body(&'static str),
  Input(&'static str),
  Output,
}

impl Socket {
  /// Statement sockets chain blocks; value sockets carry expression results.
  pub fn is_statement(self) -> bool {
    matches!(self, Socket::Previous | Socket::Next | Socket::Body(_))
  }
}
