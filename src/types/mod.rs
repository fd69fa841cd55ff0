//! Core data model: blocks, sockets, connections, and parsed declarations.

mod block;
mod block_graph;
mod connection;
mod declaration;
mod field;
mod socket;

pub use block::{Block, BlockId, BlockKind, Position};
pub use block_graph::BlockGraph;
pub use connection::{Connection, SocketRef};
pub use declaration::{ClassDecl, Declaration, MethodDecl, VariableDecl};
pub use field::{FieldId, FieldValue};
pub use socket::{Socket, TypeTag};
