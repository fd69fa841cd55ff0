//! Tests for `notifier`.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::time::{Duration, advance, sleep};

use crate::notifier::{ChangeNotifier, DEFAULT_DEBOUNCE, DebounceTimer};
use crate::types::{BlockGraph, BlockKind};

const WINDOW: Duration = Duration::from_millis(300);

#[tokio::test(start_paused = true)]
async fn timer_fires_once_after_the_window() {
  let fired = Arc::new(AtomicUsize::new(0));
  let mut timer = DebounceTimer::new(WINDOW);
  let count = Arc::clone(&fired);
  timer.schedule(move || {
    count.fetch_add(1, Ordering::SeqCst);
  });
  assert!(timer.is_pending());

  sleep(WINDOW + Duration::from_millis(10)).await;
  assert_eq!(fired.load(Ordering::SeqCst), 1);
  assert!(!timer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn reschedule_cancels_the_previous_fire() {
  let fired = Arc::new(AtomicUsize::new(0));
  let mut timer = DebounceTimer::new(WINDOW);
  for _ in 0..5 {
    let count = Arc::clone(&fired);
    timer.schedule(move || {
      count.fetch_add(1, Ordering::SeqCst);
    });
    advance(Duration::from_millis(100)).await;
  }
  sleep(WINDOW).await;
  assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_suppresses_the_fire() {
  let fired = Arc::new(AtomicUsize::new(0));
  let mut timer = DebounceTimer::new(WINDOW);
  let count = Arc::clone(&fired);
  timer.schedule(move || {
    count.fetch_add(1, Ordering::SeqCst);
  });
  timer.cancel();
  sleep(WINDOW * 2).await;
  assert_eq!(fired.load(Ordering::SeqCst), 0);
  assert!(!timer.is_pending());
}

#[tokio::test(start_paused = true)]
async fn burst_of_mutations_yields_one_notification_with_final_state() {
  let seen: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
  let mut notifier = ChangeNotifier::new(WINDOW);
  let sink = Arc::clone(&seen);
  notifier.set_callback(Arc::new(move |xml: &str| {
    sink.lock().map_err(|e| e.to_string())?.push(xml.to_string());
    Ok(())
  }));

  let mut graph = BlockGraph::new();
  for _ in 0..10 {
    graph.create_block(BlockKind::Variable);
    notifier.graph_changed(&graph);
  }

  sleep(WINDOW + Duration::from_millis(10)).await;
  let seen = seen.lock().unwrap();
  assert_eq!(seen.len(), 1, "burst should collapse to one notification");
  // The snapshot carries the state after the tenth mutation.
  assert_eq!(seen[0].matches("dart_variable").count(), 10);
}

#[tokio::test(start_paused = true)]
async fn no_callback_means_no_pending_timer() {
  let mut notifier = ChangeNotifier::new(DEFAULT_DEBOUNCE);
  let graph = BlockGraph::new();
  notifier.graph_changed(&graph);
  assert!(!notifier.is_pending());
}

#[tokio::test(start_paused = true)]
async fn callback_error_is_swallowed() {
  let calls = Arc::new(AtomicUsize::new(0));
  let mut notifier = ChangeNotifier::new(WINDOW);
  let count = Arc::clone(&calls);
  notifier.set_callback(Arc::new(move |_xml: &str| {
    count.fetch_add(1, Ordering::SeqCst);
    Err("sink unavailable".to_string())
  }));

  let mut graph = BlockGraph::new();
  graph.create_block(BlockKind::Class);
  notifier.graph_changed(&graph);
  sleep(WINDOW * 2).await;
  assert_eq!(calls.load(Ordering::SeqCst), 1);

  // The notifier keeps working after a failed delivery.
  graph.create_block(BlockKind::Class);
  notifier.graph_changed(&graph);
  sleep(WINDOW * 2).await;
  assert_eq!(calls.load(Ordering::SeqCst), 2);
}
