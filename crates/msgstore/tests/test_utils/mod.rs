//! Shared test utilities
//!
//! [`SpyLayer`] captures tracing events so tests can assert on log output
//! by structured field instead of string matching.

use std::fmt;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// A single captured log record
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Record severity
    pub level: Level,
    /// Record message text
    pub message: String,
    /// The `id` field, when the record carries one
    pub id: Option<u64>,
}

/// Capturing layer: every event is recorded with its `id` field
#[derive(Clone, Default)]
pub struct SpyLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl SpyLayer {
    /// Create an empty spy
    pub fn new() -> Self {
        Self::default()
    }

    /// Install this spy as the thread-default subscriber
    ///
    /// Capture stops when the returned guard is dropped.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::set_default(subscriber)
    }

    /// Snapshot of every captured record
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().expect("spy lock should not be poisoned").clone()
    }

    /// Captured records matching a message and a structured `id` field
    pub fn events_with_id(&self, message: &str, id: u64) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|event| event.message == message && event.id == Some(id))
            .collect()
    }
}

#[derive(Default)]
struct EventVisitor {
    message: Option<String>,
    id: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "id" {
            self.id = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "id" {
            self.id = u64::try_from(value).ok();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }
}

impl<S: Subscriber> Layer<S> for SpyLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.events
            .lock()
            .expect("spy lock should not be poisoned")
            .push(CapturedEvent {
                level: *event.metadata().level(),
                message: visitor.message.unwrap_or_default(),
                id: visitor.id,
            });
    }
}
