//! Projects declaration records onto the workspace as connected blocks.
//!
//! Per class, all variable members are emitted before all method members,
//! whatever order they held in the source. That normalization is intended
//! behavior; the reordering tests document it.

use tracing::{instrument, warn};

use crate::classifier::classify_value;
use crate::registry;
use crate::types::{
  BlockId, BlockKind, Declaration, FieldId, FieldValue, Socket, SocketRef,
};
use crate::workspace::Workspace;

/// Builds the block graph for a declaration sequence. Steps are strictly
/// sequential; each connection awaits so a rendering pass can settle.
/// Failures along the way degrade (logged, skipped) rather than abort.
#[instrument(level = "trace", skip(workspace, declarations))]
pub async fn build_graph(workspace: &mut Workspace, declarations: &[Declaration]) {
  let mut y_offset: i32 = 50;

  for declaration in declarations {
    let Declaration::Class(class) = declaration else {
      continue;
    };

    let class_block = workspace.create_block(BlockKind::Class);
    move_block(workspace, class_block, 50, y_offset);
    set_field(
      workspace,
      class_block,
      FieldId::ClassName,
      FieldValue::Text(class.name.clone()),
    );

    // Statement-chain cursor into the class body; advances past each member.
    let mut body_cursor = SocketRef::new(class_block, Socket::Body("BODY"));

    for variable in class.variables() {
      let var_block = workspace.create_block(BlockKind::Variable);
      move_block(workspace, var_block, 100, y_offset + 100);
      set_field(
        workspace,
        var_block,
        FieldId::VarType,
        FieldValue::Token(variable.var_type.clone()),
      );
      set_field(
        workspace,
        var_block,
        FieldId::VarName,
        FieldValue::Text(variable.name.clone()),
      );

      if !variable.value.is_empty() {
        let classified = classify_value(&variable.value);
        let value_block = workspace.create_block(classified.kind);
        move_block(workspace, value_block, 300, y_offset + 100);
        if let Some(field) = registry::value_field(classified.kind) {
          set_field(workspace, value_block, field, classified.value);
        }
        workspace
          .connect(
            SocketRef::new(value_block, Socket::Output),
            SocketRef::new(var_block, Socket::Input("VALUE")),
          )
          .await;
      }

      chain_member(workspace, &mut body_cursor, var_block).await;
      y_offset += 80;
    }

    for method in class.methods() {
      let method_block = workspace.create_block(BlockKind::Method);
      move_block(workspace, method_block, 100, y_offset + 100);
      set_field(
        workspace,
        method_block,
        FieldId::ReturnType,
        FieldValue::Token(method.return_type.clone()),
      );
      set_field(
        workspace,
        method_block,
        FieldId::MethodName,
        FieldValue::Text(method.name.clone()),
      );
      if !method.parameters.is_empty() {
        set_field(
          workspace,
          method_block,
          FieldId::Parameters,
          FieldValue::Text(method.parameters.clone()),
        );
      }

      chain_member(workspace, &mut body_cursor, method_block).await;
      y_offset += 120;
    }

    // Space between classes.
    y_offset += 200;
  }

  workspace.mark_needs_render();
}

/// Connects `block` behind the chain cursor, then advances the cursor past
/// the new block. The cursor advances even when the connect is rejected, so
/// one bad member cannot re-attach every later member to the same socket.
async fn chain_member(
  workspace: &mut Workspace,
  body_cursor: &mut SocketRef,
  block: BlockId,
) {
  workspace
    .connect(*body_cursor, SocketRef::new(block, Socket::Previous))
    .await;
  *body_cursor = SocketRef::new(block, Socket::Next);
}

fn move_block(workspace: &mut Workspace, block: BlockId, dx: i32, dy: i32) {
  if let Err(err) = workspace.move_by(block, dx, dy) {
    warn!(%err, "move failed");
  }
}

fn set_field(workspace: &mut Workspace, block: BlockId, field: FieldId, value: FieldValue) {
  if let Err(err) = workspace.set_field(block, field, value) {
    warn!(%err, "field assignment failed");
  }
}
