//! # blockweave
//!
//! Converts loosely structured source text into a connected graph of typed
//! blocks and keeps that graph synchronized with an XML serialization.
//!
//! ## Architecture
//!
//! Text flows through the structure parser into declaration records, the
//! builder projects those onto the workspace graph (consulting the block
//! registry, value classifier, and connection manager), and the change
//! notifier debounces mutations into serialized snapshots for the hosting
//! view. Parsing is deliberately best-effort: malformed input yields the
//! best partial graph available, never an error.

pub mod builder;
pub mod classifier;
pub mod connector;
pub mod error;
pub mod extract;
pub mod notifier;
#[cfg(test)]
mod notifier_test;
pub mod parser;
pub mod registry;
pub mod serializer;
#[cfg(test)]
mod serializer_test;
pub mod types;
pub mod workspace;
#[cfg(test)]
mod workspace_test;

pub use builder::build_graph;
pub use classifier::{ClassifiedValue, classify_value};
pub use connector::{ConnectOutcome, ConnectRejection, can_connect};
pub use error::WorkspaceError;
pub use extract::extract_code;
pub use notifier::{ChangeCallback, ChangeNotifier, DEFAULT_DEBOUNCE, DebounceTimer};
pub use parser::parse_source;
pub use serializer::graph_to_xml;
pub use types::{
  Block, BlockGraph, BlockId, BlockKind, Connection, Declaration, FieldId,
  FieldValue, Socket, SocketRef, TypeTag,
};
pub use workspace::Workspace;
