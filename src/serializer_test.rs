//! Tests for `serializer`.

use crate::serializer::graph_to_xml;
use crate::types::{
  BlockGraph, BlockKind, Connection, FieldId, FieldValue, Socket, SocketRef,
};

fn sample_graph() -> BlockGraph {
  let mut g = BlockGraph::new();
  let class = g.create_block(BlockKind::Class);
  g.block_mut(class)
    .unwrap()
    .fields
    .insert(FieldId::ClassName, FieldValue::Text("Counter".into()));
  g.block_mut(class).unwrap().move_by(50, 50);

  let var = g.create_block(BlockKind::Variable);
  let fields = &mut g.block_mut(var).unwrap().fields;
  fields.insert(FieldId::VarType, FieldValue::Token("int".into()));
  fields.insert(FieldId::VarName, FieldValue::Text("count".into()));

  let lit = g.create_block(BlockKind::NumberLit);
  g.block_mut(lit)
    .unwrap()
    .fields
    .insert(FieldId::Number, FieldValue::Number(42));

  let method = g.create_block(BlockKind::Method);
  let fields = &mut g.block_mut(method).unwrap().fields;
  fields.insert(FieldId::ReturnType, FieldValue::Token("void".into()));
  fields.insert(FieldId::MethodName, FieldValue::Text("increment".into()));

  g.connections.push(Connection {
    from: SocketRef::new(class, Socket::Body("BODY")),
    to: SocketRef::new(var, Socket::Previous),
  });
  g.connections.push(Connection {
    from: SocketRef::new(lit, Socket::Output),
    to: SocketRef::new(var, Socket::Input("VALUE")),
  });
  g.connections.push(Connection {
    from: SocketRef::new(var, Socket::Next),
    to: SocketRef::new(method, Socket::Previous),
  });
  g
}

#[test]
fn empty_graph_serializes_to_a_bare_document() {
  let xml = graph_to_xml(&BlockGraph::new()).unwrap();
  assert_eq!(
    xml,
    "<xml xmlns=\"https://developers.google.com/blockly/xml\"></xml>"
  );
}

#[test]
fn top_level_blocks_carry_positions() {
  let xml = graph_to_xml(&sample_graph()).unwrap();
  assert!(xml.contains("<block type=\"dart_class\" id=\"0\" x=\"50\" y=\"50\">"));
  // Children do not repeat coordinates.
  assert!(xml.contains("<block type=\"dart_variable\" id=\"1\">"));
}

#[test]
fn fields_serialize_with_renderer_names() {
  let xml = graph_to_xml(&sample_graph()).unwrap();
  assert!(xml.contains("<field name=\"CLASS_NAME\">Counter</field>"));
  assert!(xml.contains("<field name=\"VAR_TYPE\">int</field>"));
  assert!(xml.contains("<field name=\"VAR_NAME\">count</field>"));
  assert!(xml.contains("<field name=\"NUMBER\">42</field>"));
  assert!(xml.contains("<field name=\"METHOD_NAME\">increment</field>"));
}

#[test]
fn children_nest_in_statement_value_and_next_elements() {
  let xml = graph_to_xml(&sample_graph()).unwrap();
  assert!(xml.contains("<statement name=\"BODY\">"));
  assert!(xml.contains("<value name=\"VALUE\">"));
  assert!(xml.contains("<next>"));

  // Nesting order: the variable sits inside the statement, the literal
  // inside the variable's value, the method inside the variable's next.
  let class_at = xml.find("dart_class").unwrap();
  let statement_at = xml.find("<statement").unwrap();
  let var_at = xml.find("dart_variable").unwrap();
  let value_at = xml.find("<value").unwrap();
  let number_at = xml.find("dart_number").unwrap();
  let next_at = xml.find("<next>").unwrap();
  let method_at = xml.find("dart_method").unwrap();
  assert!(class_at < statement_at);
  assert!(statement_at < var_at);
  assert!(var_at < value_at);
  assert!(value_at < number_at);
  assert!(number_at < next_at);
  assert!(next_at < method_at);

  // Only the class is a root.
  assert_eq!(xml.matches("<block").count(), 4);
  assert_eq!(xml.matches("x=\"").count(), 1);
}

#[test]
fn text_content_is_escaped() {
  let mut g = BlockGraph::new();
  let class = g.create_block(BlockKind::Class);
  g.block_mut(class)
    .unwrap()
    .fields
    .insert(FieldId::ClassName, FieldValue::Text("A<B>&C".into()));
  let xml = graph_to_xml(&g).unwrap();
  assert!(xml.contains("A&lt;B&gt;&amp;C"));
}

#[test]
fn detached_blocks_serialize_as_separate_roots() {
  let mut g = BlockGraph::new();
  g.create_block(BlockKind::StringLit);
  g.create_block(BlockKind::BoolLit);
  let xml = graph_to_xml(&g).unwrap();
  let string_at = xml.find("dart_string").unwrap();
  let bool_at = xml.find("dart_boolean").unwrap();
  assert!(string_at < bool_at);
}
