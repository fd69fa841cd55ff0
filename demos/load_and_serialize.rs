//! Load Dart-like source into a workspace and print the serialized graph.

use std::sync::Arc;

use blockweave::Workspace;
use tokio::time::{Duration, sleep};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
  tracing_subscriber::fmt().init();

  let source = r#"
    class Counter {
      int count = 0;
      String label = "total";

      void increment() {
      }

      int value() {
      }
    }
  "#;

  let mut workspace = Workspace::new();
  workspace.on_change(Arc::new(|xml: &str| {
    println!("settled snapshot ({} bytes)", xml.len());
    Ok(())
  }));

  workspace.load_source(source).await;

  println!("blocks: {}", workspace.graph().len());
  println!("{}", workspace.to_xml()?);

  // Let the debounced notification fire before exiting.
  sleep(Duration::from_millis(400)).await;
  Ok(())
}
