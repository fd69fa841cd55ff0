//! Workspace error types.

use thiserror::Error;

use crate::types::{BlockId, BlockKind, FieldId, FieldValue};

/// Failures surfaced by workspace operations. Parsing and connecting never
/// produce these; they degrade instead (skipped lines, rejected edges).
#[derive(Debug, Error)]
pub enum WorkspaceError {
  #[error("block {0:?} not found")]
  BlockNotFound(BlockId),

  #[error("field {field:?} is not defined for {kind:?}")]
  UnknownField { kind: BlockKind, field: FieldId },

  #[error("value {value:?} is not assignable to field {field:?}")]
  InvalidFieldValue { field: FieldId, value: FieldValue },

  #[error("xml write failed: {0}")]
  XmlWrite(String),
}
