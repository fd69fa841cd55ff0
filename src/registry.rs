//! Static block-kind registry: fields, sockets, and display metadata.
//!
//! Pure data. The builder and connection manager consult it for socket
//! typing; the hosting renderer consumes the category toolbox.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::types::{BlockKind, FieldId, FieldValue, Socket, TypeTag};

/// How a field is edited and what values it accepts.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
  Text { default: &'static str },
  Number { default: i64 },
  /// Dropdown; the first option is the default.
  Dropdown { options: &'static [&'static str] },
}

/// Declaration of one field on a block kind.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
  pub id: FieldId,
  pub kind: FieldKind,
}

impl FieldDef {
  pub fn default_value(&self) -> FieldValue {
    match self.kind {
      FieldKind::Text { default } => FieldValue::Text(default.to_string()),
      FieldKind::Number { default } => FieldValue::Number(default),
      FieldKind::Dropdown { options } => {
        FieldValue::Token(options.first().copied().unwrap_or_default().to_string())
      }
    }
  }

  /// Whether `value` is assignable to this field.
  pub fn accepts(&self, value: &FieldValue) -> bool {
    match (self.kind, value) {
      (FieldKind::Text { .. }, FieldValue::Text(_)) => true,
      (FieldKind::Number { .. }, FieldValue::Number(_)) => true,
      (FieldKind::Dropdown { options }, FieldValue::Token(t)) => {
        options.iter().any(|o| o == t)
      }
      _ => false,
    }
  }
}

/// Declaration of one socket on a block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocketDef {
  Previous,
  Next,
  Body { name: &'static str },
  Input { name: &'static str, accepts: TypeTag },
  Output { produces: TypeTag },
}

impl SocketDef {
  /// Whether this declaration describes the given socket slot.
  pub fn matches(&self, socket: Socket) -> bool {
    match (*self, socket) {
      (SocketDef::Previous, Socket::Previous) => true,
      (SocketDef::Next, Socket::Next) => true,
      (SocketDef::Body { name }, Socket::Body(n)) => name == n,
      (SocketDef::Input { name, .. }, Socket::Input(n)) => name == n,
      (SocketDef::Output { .. }, Socket::Output) => true,
      _ => false,
    }
  }
}

/// Declaration of a block kind.
#[derive(Debug, Clone, Copy)]
pub struct BlockDef {
  pub kind: BlockKind,
  /// Type name the renderer and the XML serialization use.
  pub type_name: &'static str,
  pub colour: u16,
  pub tooltip: &'static str,
  pub fields: &'static [FieldDef],
  pub sockets: &'static [SocketDef],
}

const RETURN_TYPES: &[&str] = &["void", "String", "int", "bool", "double"];
const VAR_TYPES: &[&str] = &[
  "var", "final", "const", "String", "int", "bool", "List", "Map",
];
const BOOL_TOKENS: &[&str] = &["true", "false"];

/// Every block kind the workspace can instantiate.
pub const BLOCK_DEFS: &[BlockDef] = &[
  BlockDef {
    kind: BlockKind::Class,
    type_name: "dart_class",
    colour: 230,
    tooltip: "Dart class definition",
    fields: &[FieldDef {
      id: FieldId::ClassName,
      kind: FieldKind::Text { default: "MyClass" },
    }],
    sockets: &[SocketDef::Body { name: "BODY" }],
  },
  BlockDef {
    kind: BlockKind::Method,
    type_name: "dart_method",
    colour: 160,
    tooltip: "Dart method definition",
    fields: &[
      FieldDef {
        id: FieldId::ReturnType,
        kind: FieldKind::Dropdown { options: RETURN_TYPES },
      },
      FieldDef {
        id: FieldId::MethodName,
        kind: FieldKind::Text { default: "methodName" },
      },
      FieldDef {
        id: FieldId::Parameters,
        kind: FieldKind::Text { default: "" },
      },
    ],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Next,
      SocketDef::Body { name: "BODY" },
    ],
  },
  BlockDef {
    kind: BlockKind::Variable,
    type_name: "dart_variable",
    colour: 290,
    tooltip: "Dart variable declaration",
    fields: &[
      FieldDef {
        id: FieldId::VarType,
        kind: FieldKind::Dropdown { options: VAR_TYPES },
      },
      FieldDef {
        id: FieldId::VarName,
        kind: FieldKind::Text { default: "variableName" },
      },
    ],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Next,
      SocketDef::Input { name: "VALUE", accepts: TypeTag::Any },
    ],
  },
  BlockDef {
    kind: BlockKind::If,
    type_name: "dart_if",
    colour: 210,
    tooltip: "Dart if statement",
    fields: &[],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Next,
      SocketDef::Input { name: "CONDITION", accepts: TypeTag::Boolean },
      SocketDef::Body { name: "THEN_BODY" },
      SocketDef::Body { name: "ELSE_BODY" },
    ],
  },
  BlockDef {
    kind: BlockKind::For,
    type_name: "dart_for",
    colour: 120,
    tooltip: "Dart for loop",
    fields: &[
      FieldDef {
        id: FieldId::Iterator,
        kind: FieldKind::Text { default: "item" },
      },
      FieldDef {
        id: FieldId::Iterable,
        kind: FieldKind::Text { default: "list" },
      },
    ],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Next,
      SocketDef::Body { name: "BODY" },
    ],
  },
  BlockDef {
    kind: BlockKind::Return,
    type_name: "dart_return",
    colour: 330,
    tooltip: "Dart return statement",
    fields: &[],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Input { name: "VALUE", accepts: TypeTag::Any },
    ],
  },
  BlockDef {
    kind: BlockKind::Constructor,
    type_name: "dart_constructor",
    colour: 290,
    tooltip: "Dart constructor",
    fields: &[
      FieldDef {
        id: FieldId::ClassName,
        kind: FieldKind::Text { default: "ClassName" },
      },
      FieldDef {
        id: FieldId::Parameters,
        kind: FieldKind::Text { default: "parameters" },
      },
    ],
    sockets: &[
      SocketDef::Previous,
      SocketDef::Next,
      SocketDef::Body { name: "BODY" },
    ],
  },
  BlockDef {
    kind: BlockKind::StringLit,
    type_name: "dart_string",
    colour: 160,
    tooltip: "String literal",
    fields: &[FieldDef {
      id: FieldId::Text,
      kind: FieldKind::Text { default: "text" },
    }],
    sockets: &[SocketDef::Output { produces: TypeTag::Str }],
  },
  BlockDef {
    kind: BlockKind::NumberLit,
    type_name: "dart_number",
    colour: 230,
    tooltip: "Number literal",
    fields: &[FieldDef {
      id: FieldId::Number,
      kind: FieldKind::Number { default: 0 },
    }],
    sockets: &[SocketDef::Output { produces: TypeTag::Number }],
  },
  BlockDef {
    kind: BlockKind::BoolLit,
    type_name: "dart_boolean",
    colour: 210,
    tooltip: "Boolean literal",
    fields: &[FieldDef {
      id: FieldId::Bool,
      kind: FieldKind::Dropdown { options: BOOL_TOKENS },
    }],
    sockets: &[SocketDef::Output { produces: TypeTag::Boolean }],
  },
  BlockDef {
    kind: BlockKind::List,
    type_name: "dart_list",
    colour: 160,
    tooltip: "Dart List declaration",
    fields: &[FieldDef {
      id: FieldId::ElementType,
      kind: FieldKind::Text { default: "String" },
    }],
    sockets: &[
      SocketDef::Input { name: "ELEMENTS", accepts: TypeTag::Any },
      SocketDef::Output { produces: TypeTag::List },
    ],
  },
];

static KIND_INDEX: Lazy<HashMap<BlockKind, &'static BlockDef>> =
  Lazy::new(|| BLOCK_DEFS.iter().map(|d| (d.kind, d)).collect());

/// Definition for `kind`. Every `BlockKind` variant has an entry.
pub fn block_def(kind: BlockKind) -> &'static BlockDef {
  KIND_INDEX
    .get(&kind)
    .copied()
    .expect("every block kind is registered")
}

/// Field declaration for `field` on `kind`, if the kind carries it.
pub fn field_def(kind: BlockKind, field: FieldId) -> Option<&'static FieldDef> {
  block_def(kind).fields.iter().find(|f| f.id == field)
}

/// Socket declaration matching `socket` on `kind`, if the kind has it.
pub fn socket_def(kind: BlockKind, socket: Socket) -> Option<&'static SocketDef> {
  block_def(kind).sockets.iter().find(|s| s.matches(socket))
}

/// The field a classified literal value lands in, per literal kind.
pub fn value_field(kind: BlockKind) -> Option<FieldId> {
  match kind {
    BlockKind::StringLit => Some(FieldId::Text),
    BlockKind::NumberLit => Some(FieldId::Number),
    BlockKind::BoolLit => Some(FieldId::Bool),
    // List blocks keep their elements unparsed; nothing to set.
    _ => None,
  }
}

/// Category toolbox document the hosting renderer consumes.
#[derive(Debug, Serialize)]
pub struct Toolbox {
  pub kind: &'static str,
  pub contents: Vec<ToolboxCategory>,
}

#[derive(Debug, Serialize)]
pub struct ToolboxCategory {
  pub kind: &'static str,
  pub name: &'static str,
  pub colour: u16,
  pub contents: Vec<ToolboxBlock>,
}

#[derive(Debug, Serialize)]
pub struct ToolboxBlock {
  pub kind: &'static str,
  #[serde(rename = "type")]
  pub type_name: &'static str,
}

fn category(
  name: &'static str,
  colour: u16,
  kinds: &[BlockKind],
) -> ToolboxCategory {
  ToolboxCategory {
    kind: "category",
    name,
    colour,
    contents: kinds
      .iter()
      .map(|k| ToolboxBlock {
        kind: "block",
        type_name: block_def(*k).type_name,
      })
      .collect(),
  }
}

/// Builds the category toolbox (structure, variables, control flow, values).
pub fn toolbox() -> Toolbox {
  Toolbox {
    kind: "categoryToolbox",
    contents: vec![
      category(
        "Structure",
        230,
        &[BlockKind::Class, BlockKind::Method, BlockKind::Constructor],
      ),
      category("Variables", 290, &[BlockKind::Variable, BlockKind::List]),
      category(
        "Control Flow",
        210,
        &[BlockKind::If, BlockKind::For, BlockKind::Return],
      ),
      category(
        "Values",
        160,
        &[BlockKind::StringLit, BlockKind::NumberLit, BlockKind::BoolLit],
      ),
    ],
  }
}

/// The toolbox as a JSON document.
pub fn toolbox_json() -> Result<String, serde_json::Error> {
  serde_json::to_string_pretty(&toolbox())
}
