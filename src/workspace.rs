//! The owning workspace: live graph, change notifier, render flag.
//!
//! Created by the hosting view on mount and disposed explicitly on teardown.
//! Exactly one logical writer mutates it; every mutation feeds the debounced
//! change notifier.

use tokio::time::Duration;
use tracing::{info, instrument};

use crate::builder;
use crate::connector::{self, ConnectOutcome};
use crate::error::WorkspaceError;
use crate::notifier::{ChangeCallback, ChangeNotifier, DEFAULT_DEBOUNCE};
use crate::parser;
use crate::serializer;
use crate::types::{BlockGraph, BlockId, BlockKind, FieldId, FieldValue, SocketRef};

/// Process-scoped workspace state. Owns every block and connection; nothing
/// outside may hold graph references across a rebuild or past disposal.
pub struct Workspace {
  graph: BlockGraph,
  notifier: ChangeNotifier,
  needs_render: bool,
  last_loaded: String,
}

impl Workspace {
  pub fn new() -> Self {
    Self::with_window(DEFAULT_DEBOUNCE)
  }

  pub fn with_window(window: Duration) -> Self {
    Self {
      graph: BlockGraph::new(),
      notifier: ChangeNotifier::new(window),
      needs_render: false,
      last_loaded: String::new(),
    }
  }

  /// Registers the callback that receives the serialized graph after each
  /// settled change. Requires a tokio runtime once mutations start.
  pub fn on_change(&mut self, callback: ChangeCallback) {
    self.notifier.set_callback(callback);
  }

  pub fn graph(&self) -> &BlockGraph {
    &self.graph
  }

  /// Instantiates a block of `kind` with its registry default field values.
  pub fn create_block(&mut self, kind: BlockKind) -> BlockId {
    let id = self.graph.create_block(kind);
    let def = crate::registry::block_def(kind);
    if let Some(block) = self.graph.block_mut(id) {
      for field_def in def.fields {
        block.fields.insert(field_def.id, field_def.default_value());
      }
    }
    self.changed();
    id
  }

  /// Sets a field, validated against the block kind's field descriptors.
  pub fn set_field(
    &mut self,
    id: BlockId,
    field: FieldId,
    value: FieldValue,
  ) -> Result<(), WorkspaceError> {
    let block = self
      .graph
      .block_mut(id)
      .ok_or(WorkspaceError::BlockNotFound(id))?;
    let field_def = crate::registry::field_def(block.kind, field)
      .ok_or(WorkspaceError::UnknownField {
        kind: block.kind,
        field,
      })?;
    if !field_def.accepts(&value) {
      return Err(WorkspaceError::InvalidFieldValue { field, value });
    }
    block.fields.insert(field, value);
    self.changed();
    Ok(())
  }

  pub fn move_by(&mut self, id: BlockId, dx: i32, dy: i32) -> Result<(), WorkspaceError> {
    let block = self
      .graph
      .block_mut(id)
      .ok_or(WorkspaceError::BlockNotFound(id))?;
    block.move_by(dx, dy);
    self.changed();
    Ok(())
  }

  /// Attempts a connection. Rejections are reported, never raised.
  pub async fn connect(&mut self, from: SocketRef, to: SocketRef) -> ConnectOutcome {
    let outcome = connector::connect(&mut self.graph, from, to).await;
    if outcome.is_connected() {
      self.changed();
    }
    outcome
  }

  /// Drops every block and connection and forgets the last loaded source.
  pub fn clear(&mut self) {
    self.graph.clear();
    self.last_loaded.clear();
    self.needs_render = true;
    self.changed();
  }

  /// Rebuilds the graph from source text: clears synchronously, then parses
  /// and builds. Reloading the exact text already on the canvas is a no-op.
  #[instrument(level = "trace", skip(self, code))]
  pub async fn load_source(&mut self, code: &str) {
    if code == self.last_loaded {
      return;
    }
    self.clear();
    self.last_loaded = code.to_string();

    let declarations = parser::parse_source(code);
    if declarations.is_empty() {
      info!("no structure found in source");
      return;
    }
    builder::build_graph(self, &declarations).await;
    info!(blocks = self.graph.len(), "graph rebuilt from source");
  }

  /// Serializes the current graph on demand (e.g. for export/download).
  pub fn to_xml(&self) -> Result<String, WorkspaceError> {
    serializer::graph_to_xml(&self.graph)
  }

  pub(crate) fn mark_needs_render(&mut self) {
    self.needs_render = true;
  }

  /// Consumes the re-render flag; the hosting view polls this after builds.
  pub fn take_needs_render(&mut self) -> bool {
    std::mem::take(&mut self.needs_render)
  }

  /// Tears the workspace down: cancels the pending notification and drops
  /// all blocks and connections.
  pub fn dispose(mut self) {
    self.notifier.cancel();
    self.graph.clear();
  }

  fn changed(&mut self) {
    self.notifier.graph_changed(&self.graph);
  }
}

impl Default for Workspace {
  fn default() -> Self {
    Self::new()
  }
}
