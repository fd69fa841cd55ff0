//! An instantiated block in the workspace graph.

use std::collections::HashMap;

use super::{FieldId, FieldValue};

/// Kinds of blocks the workspace can instantiate. The registry declares each
/// kind's fields and sockets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
  Class,
  Method,
  Variable,
  If,
  For,
  Return,
  Constructor,
  StringLit,
  NumberLit,
  BoolLit,
  List,
}

/// Identifier of a block, unique within one graph. Ids are assigned in
/// creation order and never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

/// Canvas position in workspace units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
  pub x: i32,
  pub y: i32,
}

/// An instantiated block: kind tag, field values, and a canvas position.
/// Sockets are not stored here; which sockets a block has follows from its
/// kind via the registry, and which are occupied follows from the graph's
/// connection set.
#[derive(Debug, Clone)]
pub struct Block {
  pub id: BlockId,
  pub kind: BlockKind,
  pub fields: HashMap<FieldId, FieldValue>,
  pub position: Position,
}

impl Block {
  pub fn new(id: BlockId, kind: BlockKind) -> Self {
    Self {
      id,
      kind,
      fields: HashMap::new(),
      position: Position::default(),
    }
  }

  pub fn field(&self, id: FieldId) -> Option<&FieldValue> {
    self.fields.get(&id)
  }

  pub fn move_by(&mut self, dx: i32, dy: i32) {
    self.position.x += dx;
    self.position.y += dy;
  }
}
