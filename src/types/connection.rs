//! Directed edges between block sockets.

use super::{BlockId, Socket};

/// A socket on a specific block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SocketRef {
  pub block: BlockId,
  pub socket: Socket,
}

impl SocketRef {
  pub fn new(block: BlockId, socket: Socket) -> Self {
    Self { block, socket }
  }
}

/// A validated edge. `from` is always the producing side (`Next`, `Body`, or
/// `Output`); `to` is always the accepting side (`Previous` or `Input`).
/// A socket participates in at most one connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
  pub from: SocketRef,
  pub to: SocketRef,
}

impl Connection {
  /// Whether either end of this edge is `socket`.
  pub fn touches(&self, socket: SocketRef) -> bool {
    self.from == socket || self.to == socket
  }

  /// Whether this edge chains statements (as opposed to carrying a value).
  pub fn is_statement(&self) -> bool {
    self.to.socket == Socket::Previous
  }
}
