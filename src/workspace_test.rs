//! Tests for `workspace`.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::time::{Duration, sleep};

use crate::error::WorkspaceError;
use crate::types::{BlockId, BlockKind, FieldId, FieldValue};
use crate::workspace::Workspace;

const SOURCE: &str = r#"
  class Counter {
    int count = 0;
    void increment() {
    }
  }
"#;

#[tokio::test]
async fn load_source_builds_the_graph() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  // Class, variable, number literal, method.
  assert_eq!(ws.graph().len(), 4);
  assert!(ws.take_needs_render());
}

#[tokio::test]
async fn reloading_identical_source_is_a_no_op() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  let ids: Vec<BlockId> = ws.graph().top_level_blocks().iter().map(|b| b.id).collect();
  ws.take_needs_render();

  ws.load_source(SOURCE).await;
  let again: Vec<BlockId> = ws.graph().top_level_blocks().iter().map(|b| b.id).collect();
  // Ids are never reused, so unchanged ids prove the graph was not rebuilt.
  assert_eq!(ids, again);
  assert!(!ws.take_needs_render());
}

#[tokio::test]
async fn changed_source_replaces_the_graph() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  ws.load_source("class Fresh {\n}").await;
  assert_eq!(ws.graph().len(), 1);
  let class = ws.graph().top_level_blocks()[0];
  assert_eq!(
    class.field(FieldId::ClassName),
    Some(&FieldValue::Text("Fresh".into()))
  );
}

#[tokio::test]
async fn unparseable_source_leaves_an_empty_graph() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  ws.load_source("just some prose, nothing structural").await;
  assert!(ws.graph().is_empty());
}

#[tokio::test]
async fn create_block_seeds_registry_defaults() {
  let mut ws = Workspace::new();
  let id = ws.create_block(BlockKind::NumberLit);
  let block = ws.graph().block(id).unwrap();
  assert_eq!(block.field(FieldId::Number), Some(&FieldValue::Number(0)));
}

#[tokio::test]
async fn set_field_validates_block_and_field() {
  let mut ws = Workspace::new();
  let class = ws.create_block(BlockKind::Class);

  assert!(
    ws.set_field(class, FieldId::ClassName, FieldValue::Text("A".into()))
      .is_ok()
  );
  assert!(matches!(
    ws.set_field(BlockId(999), FieldId::ClassName, FieldValue::Text("A".into())),
    Err(WorkspaceError::BlockNotFound(BlockId(999)))
  ));
  // A class has no NUMBER field.
  assert!(matches!(
    ws.set_field(class, FieldId::Number, FieldValue::Number(1)),
    Err(WorkspaceError::UnknownField { .. })
  ));
  // A text field refuses a numeric value.
  assert!(matches!(
    ws.set_field(class, FieldId::ClassName, FieldValue::Number(1)),
    Err(WorkspaceError::InvalidFieldValue { .. })
  ));
}

#[tokio::test]
async fn clear_drops_everything_but_keeps_ids_monotonic() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  let highest = ws.graph().top_level_blocks().last().unwrap().id;
  ws.clear();
  assert!(ws.graph().is_empty());
  assert!(ws.take_needs_render());

  let next = ws.create_block(BlockKind::Class);
  assert!(next > highest);
}

#[tokio::test]
async fn to_xml_serializes_the_live_graph() {
  let mut ws = Workspace::new();
  ws.load_source(SOURCE).await;
  let xml = ws.to_xml().unwrap();
  assert!(xml.starts_with("<xml xmlns=\"https://developers.google.com/blockly/xml\">"));
  assert!(xml.contains("dart_class"));
  assert!(xml.contains("<field name=\"VAR_NAME\">count</field>"));
}

#[tokio::test(start_paused = true)]
async fn load_settles_into_a_single_notification() {
  let window = Duration::from_millis(300);
  let fired = Arc::new(AtomicUsize::new(0));
  let mut ws = Workspace::with_window(window);
  let count = Arc::clone(&fired);
  ws.on_change(Arc::new(move |_xml: &str| {
    count.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }));

  // A load is many mutations (clear, creates, moves, field sets, connects);
  // the observer sees one settled notification.
  ws.load_source(SOURCE).await;
  sleep(window * 2).await;
  assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn dispose_cancels_the_pending_notification() {
  let window = Duration::from_millis(300);
  let fired = Arc::new(AtomicUsize::new(0));
  let mut ws = Workspace::with_window(window);
  let count = Arc::clone(&fired);
  ws.on_change(Arc::new(move |_xml: &str| {
    count.fetch_add(1, Ordering::SeqCst);
    Ok(())
  }));

  ws.load_source(SOURCE).await;
  ws.dispose();
  sleep(window * 2).await;
  assert_eq!(fired.load(Ordering::SeqCst), 0);
}
