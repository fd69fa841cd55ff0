//! The live block graph: blocks plus the explicit connection set.

use std::collections::HashMap;

use super::{Block, BlockId, BlockKind, Connection, Socket, SocketRef};

/// Blocks and connections owned by a workspace. Connections are kept as an
/// explicit edge set keyed by socket identity, so occupancy checks are pure
/// lookups rather than per-socket flags.
#[derive(Debug, Clone, Default)]
pub struct BlockGraph {
  pub blocks: HashMap<BlockId, Block>,
  pub connections: Vec<Connection>,
  next_id: u64,
}

impl BlockGraph {
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates an empty block of `kind` and returns its id.
  pub fn create_block(&mut self, kind: BlockKind) -> BlockId {
    let id = BlockId(self.next_id);
    self.next_id += 1;
    self.blocks.insert(id, Block::new(id, kind));
    id
  }

  pub fn block(&self, id: BlockId) -> Option<&Block> {
    self.blocks.get(&id)
  }

  pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
    self.blocks.get_mut(&id)
  }

  /// Whether `socket` participates in any connection.
  pub fn is_connected(&self, socket: SocketRef) -> bool {
    self.connections.iter().any(|c| c.touches(socket))
  }

  /// The connection whose producing side is `socket`, if any.
  pub fn connection_from(&self, socket: SocketRef) -> Option<&Connection> {
    self.connections.iter().find(|c| c.from == socket)
  }

  /// The connection whose accepting side is `socket`, if any.
  pub fn connection_to(&self, socket: SocketRef) -> Option<&Connection> {
    self.connections.iter().find(|c| c.to == socket)
  }

  /// Blocks that are not a child of any other block, in creation order.
  /// A block is a child when its `Previous` socket or its `Output` socket
  /// participates in a connection.
  pub fn top_level_blocks(&self) -> Vec<&Block> {
    let mut roots: Vec<&Block> = self
      .blocks
      .values()
      .filter(|b| {
        !self.is_connected(SocketRef::new(b.id, Socket::Previous))
          && !self.is_connected(SocketRef::new(b.id, Socket::Output))
      })
      .collect();
    roots.sort_by_key(|b| b.id);
    roots
  }

  /// Drops every block and connection. Ids keep counting up so stale ids
  /// from before the clear can never alias a new block.
  pub fn clear(&mut self) {
    self.blocks.clear();
    self.connections.clear();
  }

  pub fn len(&self) -> usize {
    self.blocks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.blocks.is_empty()
  }
}
