//! Serializes the block graph to the XML document the renderer understands.
//!
//! Top-level blocks carry their canvas position; children are nested inside
//! `<statement>`, `<value>`, and `<next>` elements.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::instrument;

use crate::error::WorkspaceError;
use crate::registry::{self, SocketDef};
use crate::types::{Block, BlockGraph, Socket, SocketRef};

const XMLNS: &str = "https://developers.google.com/blockly/xml";

fn xml_err(err: impl std::fmt::Display) -> WorkspaceError {
  WorkspaceError::XmlWrite(err.to_string())
}

/// Serializes the whole graph. Deterministic: top-level blocks in creation
/// order, fields in registry order.
#[instrument(level = "trace", skip(graph))]
pub fn graph_to_xml(graph: &BlockGraph) -> Result<String, WorkspaceError> {
  let mut writer = Writer::new(Vec::new());

  let mut root = BytesStart::new("xml");
  root.push_attribute(("xmlns", XMLNS));
  writer.write_event(Event::Start(root)).map_err(xml_err)?;

  for block in graph.top_level_blocks() {
    write_block(&mut writer, graph, block, true)?;
  }

  writer
    .write_event(Event::End(BytesEnd::new("xml")))
    .map_err(xml_err)?;

  String::from_utf8(writer.into_inner()).map_err(xml_err)
}

fn write_block(
  writer: &mut Writer<Vec<u8>>,
  graph: &BlockGraph,
  block: &Block,
  top_level: bool,
) -> Result<(), WorkspaceError> {
  let def = registry::block_def(block.kind);

  let mut start = BytesStart::new("block");
  start.push_attribute(("type", def.type_name));
  let id = block.id.0.to_string();
  start.push_attribute(("id", id.as_str()));
  if top_level {
    let x = block.position.x.to_string();
    let y = block.position.y.to_string();
    start.push_attribute(("x", x.as_str()));
    start.push_attribute(("y", y.as_str()));
  }
  writer.write_event(Event::Start(start)).map_err(xml_err)?;

  for field_def in def.fields {
    if let Some(value) = block.field(field_def.id) {
      let mut field = BytesStart::new("field");
      field.push_attribute(("name", field_def.id.name()));
      writer.write_event(Event::Start(field)).map_err(xml_err)?;
      writer
        .write_event(Event::Text(BytesText::new(&value.to_text())))
        .map_err(xml_err)?;
      writer
        .write_event(Event::End(BytesEnd::new("field")))
        .map_err(xml_err)?;
    }
  }

  for socket_def in def.sockets.iter().copied() {
    match socket_def {
      SocketDef::Input { name, .. } => {
        let socket = SocketRef::new(block.id, Socket::Input(name));
        if let Some(conn) = graph.connection_to(socket) {
          if let Some(child) = graph.block(conn.from.block) {
            write_child(writer, graph, "value", name, child)?;
          }
        }
      }
      SocketDef::Body { name } => {
        let socket = SocketRef::new(block.id, Socket::Body(name));
        if let Some(conn) = graph.connection_from(socket) {
          if let Some(child) = graph.block(conn.to.block) {
            write_child(writer, graph, "statement", name, child)?;
          }
        }
      }
      _ => {}
    }
  }

  let next = SocketRef::new(block.id, Socket::Next);
  if let Some(conn) = graph.connection_from(next) {
    if let Some(child) = graph.block(conn.to.block) {
      writer
        .write_event(Event::Start(BytesStart::new("next")))
        .map_err(xml_err)?;
      write_block(writer, graph, child, false)?;
      writer
        .write_event(Event::End(BytesEnd::new("next")))
        .map_err(xml_err)?;
    }
  }

  writer
    .write_event(Event::End(BytesEnd::new("block")))
    .map_err(xml_err)
}

fn write_child(
  writer: &mut Writer<Vec<u8>>,
  graph: &BlockGraph,
  element: &str,
  name: &str,
  child: &Block,
) -> Result<(), WorkspaceError> {
  let mut start = BytesStart::new(element);
  start.push_attribute(("name", name));
  writer.write_event(Event::Start(start)).map_err(xml_err)?;
  write_block(writer, graph, child, false)?;
  writer
    .write_event(Event::End(BytesEnd::new(element)))
    .map_err(xml_err)
}
