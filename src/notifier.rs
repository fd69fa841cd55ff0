//! Debounced change notification.
//!
//! Every graph mutation cancels the pending timer and starts a fresh one
//! (cancel-then-restart). When a window passes with no further mutation, the
//! snapshot taken at the last mutation is serialized and handed to the
//! registered callback. Failures on that path are logged and swallowed; the
//! graph itself is never affected.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tokio::time::{Duration, Instant, sleep_until};
use tracing::warn;

use crate::serializer;
use crate::types::BlockGraph;

/// Delay after the last mutation before a notification fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Receives the serialized graph after each settled change. A returned error
/// is logged, nothing more.
pub type ChangeCallback = Arc<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

/// One-shot timer with cancel-then-restart scheduling. Requires a tokio
/// runtime; independent of any UI event loop.
#[derive(Debug)]
pub struct DebounceTimer {
  window: Duration,
  pending: Option<JoinHandle<()>>,
}

impl DebounceTimer {
  pub fn new(window: Duration) -> Self {
    Self {
      window,
      pending: None,
    }
  }

  /// Cancels any pending fire and schedules `f` to run once after the window.
  pub fn schedule<F>(&mut self, f: F)
  where
    F: FnOnce() + Send + 'static,
  {
    self.cancel();
    let deadline = Instant::now() + self.window;
    self.pending = Some(tokio::spawn(async move {
      sleep_until(deadline).await;
      f();
    }));
  }

  /// Cancels the pending fire, if any.
  pub fn cancel(&mut self) {
    if let Some(handle) = self.pending.take() {
      handle.abort();
    }
  }

  pub fn is_pending(&self) -> bool {
    self.pending.as_ref().is_some_and(|h| !h.is_finished())
  }

  pub fn window(&self) -> Duration {
    self.window
  }
}

impl Drop for DebounceTimer {
  fn drop(&mut self) {
    self.cancel();
  }
}

/// Observes graph mutations and delivers debounced serialized snapshots.
pub struct ChangeNotifier {
  timer: DebounceTimer,
  callback: Option<ChangeCallback>,
}

impl ChangeNotifier {
  pub fn new(window: Duration) -> Self {
    Self {
      timer: DebounceTimer::new(window),
      callback: None,
    }
  }

  pub fn set_callback(&mut self, callback: ChangeCallback) {
    self.callback = Some(callback);
  }

  /// Records a mutation. Snapshots the graph now so the eventual fire
  /// carries the state after the last mutation in the burst.
  pub fn graph_changed(&mut self, graph: &BlockGraph) {
    let Some(callback) = self.callback.clone() else {
      return;
    };
    let snapshot = graph.clone();
    self.timer.schedule(move || deliver(&snapshot, callback));
  }

  /// Cancels any pending notification.
  pub fn cancel(&mut self) {
    self.timer.cancel();
  }

  pub fn is_pending(&self) -> bool {
    self.timer.is_pending()
  }
}

fn deliver(snapshot: &BlockGraph, callback: ChangeCallback) {
  match serializer::graph_to_xml(snapshot) {
    Ok(xml) => {
      if let Err(err) = callback.as_ref()(&xml) {
        warn!(%err, "change callback failed");
      }
    }
    Err(err) => warn!(%err, "snapshot serialization failed"),
  }
}
