//! Socket-to-socket connection manager.
//!
//! Validation is a pure function over the graph's edge set; the mutating
//! `connect` never fails the surrounding build. A rejected attempt leaves
//! both sockets exactly as they were and reports why.

use thiserror::Error;
use tracing::{debug, warn};

use crate::registry::{self, SocketDef};
use crate::types::{BlockGraph, BlockId, Connection, Socket, SocketRef};

/// Why a connection attempt was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConnectRejection {
  #[error("socket does not exist on that block")]
  UnknownSocket,
  #[error("socket is already connected")]
  AlreadyConnected,
  #[error("sockets cannot face each other")]
  IncompatibleSockets,
  #[error("output type is not accepted by the input")]
  TypeMismatch,
  #[error("connection would close a statement cycle")]
  WouldCycle,
}

/// Result of a connection attempt. Never an error: rejections are ordinary
/// outcomes so a build pass can keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
  Connected,
  Rejected(ConnectRejection),
}

impl ConnectOutcome {
  pub fn is_connected(self) -> bool {
    matches!(self, ConnectOutcome::Connected)
  }
}

/// Pure validation: whether `from -> to` could be connected right now.
pub fn can_connect(graph: &BlockGraph, from: SocketRef, to: SocketRef) -> bool {
  validate(graph, from, to).is_ok()
}

pub(crate) fn validate(
  graph: &BlockGraph,
  from: SocketRef,
  to: SocketRef,
) -> Result<(), ConnectRejection> {
  let from_def = lookup(graph, from).ok_or(ConnectRejection::UnknownSocket)?;
  let to_def = lookup(graph, to).ok_or(ConnectRejection::UnknownSocket)?;

  if graph.is_connected(from) || graph.is_connected(to) {
    return Err(ConnectRejection::AlreadyConnected);
  }

  match (from.socket, to.socket) {
    (Socket::Next | Socket::Body(_), Socket::Previous) => {
      if closes_statement_cycle(graph, from.block, to.block) {
        return Err(ConnectRejection::WouldCycle);
      }
      Ok(())
    }
    (Socket::Output, Socket::Input(_)) => {
      let produced = match from_def {
        SocketDef::Output { produces } => *produces,
        _ => return Err(ConnectRejection::IncompatibleSockets),
      };
      let accepted = match to_def {
        SocketDef::Input { accepts, .. } => *accepts,
        _ => return Err(ConnectRejection::IncompatibleSockets),
      };
      if accepted.accepts(produced) {
        Ok(())
      } else {
        Err(ConnectRejection::TypeMismatch)
      }
    }
    _ => Err(ConnectRejection::IncompatibleSockets),
  }
}

/// Connects `from -> to` if the attempt validates. Always settles: failures
/// are logged and returned as a [ConnectOutcome], never raised. Async so a
/// rendering pass can settle between build steps.
pub async fn connect(
  graph: &mut BlockGraph,
  from: SocketRef,
  to: SocketRef,
) -> ConnectOutcome {
  match validate(graph, from, to) {
    Ok(()) => {
      graph.connections.push(Connection { from, to });
      debug!(?from, ?to, "sockets connected");
      ConnectOutcome::Connected
    }
    Err(rejection) => {
      warn!(?from, ?to, %rejection, "connection rejected");
      ConnectOutcome::Rejected(rejection)
    }
  }
}

fn lookup(graph: &BlockGraph, socket: SocketRef) -> Option<&'static SocketDef> {
  let block = graph.block(socket.block)?;
  registry::socket_def(block.kind, socket.socket)
}

/// Whether attaching `child` under `parent`'s statement side would make the
/// chain reach back to `parent`. Keeps per-class statement structure a forest.
fn closes_statement_cycle(graph: &BlockGraph, parent: BlockId, child: BlockId) -> bool {
  if parent == child {
    return true;
  }
  let mut stack = vec![child];
  let mut seen = vec![child];
  while let Some(current) = stack.pop() {
    for conn in graph.connections.iter().filter(|c| c.is_statement()) {
      if conn.from.block == current {
        let next = conn.to.block;
        if next == parent {
          return true;
        }
        if !seen.contains(&next) {
          seen.push(next);
          stack.push(next);
        }
      }
    }
  }
  false
}
