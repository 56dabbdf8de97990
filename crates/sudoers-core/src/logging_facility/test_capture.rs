//! Test capture mode for deterministic logging assertions
//!
//! A subscriber layer that records events in memory so tests can assert on
//! lifecycle logging without parsing output.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::field::{Field, Visit};
use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use sudoers_core_types::schema::{FIELD_COMPONENT, FIELD_EVENT, FIELD_OP, FIELD_TARGET_PATH};

/// A captured log event with all its fields
#[derive(Clone, Debug)]
pub struct CapturedEvent {
    pub level: Level,
    pub component: Option<String>,
    pub op: Option<String>,
    pub event: Option<String>,
    pub target_path: Option<String>,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    /// Check whether this is the given lifecycle event of `op`
    pub fn is(&self, op: &str, event: &str) -> bool {
        self.op.as_deref() == Some(op) && self.event.as_deref() == Some(event)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: HashMap<String, String>,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), value.to_string());
    }
}

/// Layer collecting every event into a shared buffer
pub struct TestCaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCaptureLayer {
    pub fn new() -> (Self, TestCapture) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let layer = Self {
            events: events.clone(),
        };
        (layer, TestCapture { events })
    }
}

impl<S> Layer<S> for TestCaptureLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let fields = visitor.fields;
        let captured = CapturedEvent {
            level: *event.metadata().level(),
            component: fields.get(FIELD_COMPONENT).cloned(),
            op: fields.get(FIELD_OP).cloned(),
            event: fields.get(FIELD_EVENT).cloned(),
            target_path: fields.get(FIELD_TARGET_PATH).cloned(),
            fields,
        };

        self.events
            .lock()
            .map(|mut events| events.push(captured))
            .ok();
    }
}

/// Handle for accessing captured events in tests
#[derive(Clone)]
pub struct TestCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl TestCapture {
    /// Get all captured events
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    /// Captured events of one operation, in emission order
    pub fn events_for(&self, op: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.op.as_deref() == Some(op))
            .collect()
    }

    /// Assert that an event exists with the given operation and event type
    ///
    /// # Panics
    ///
    /// Panics if the event is not found
    pub fn assert_event_exists(&self, op: &str, event: &str) {
        let events = self.events();
        assert!(
            events.iter().any(|e| e.is(op, event)),
            "Expected event op={} event={} not found in {} captured events",
            op,
            event,
            events.len()
        );
    }

    /// Clear all captured events
    pub fn clear(&self) {
        self.events.lock().map(|mut e| e.clear()).ok();
    }

    /// Count events matching a predicate
    pub fn count_events<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CapturedEvent) -> bool,
    {
        self.events().iter().filter(|e| predicate(e)).count()
    }
}

static GLOBAL_CAPTURE: OnceLock<TestCapture> = OnceLock::new();

/// Initialize test capture mode
///
/// Installs the capture layer as the global subscriber on first call and
/// returns the shared handle. Tests share the buffer, so filter by a unique
/// op or target rather than asserting on totals.
///
/// # Example
///
/// ```
/// use sudoers_core::logging_facility::test_capture::init_test_capture;
/// use sudoers_core::log_op_start;
///
/// let capture = init_test_capture();
/// log_op_start!("doc_example_op");
/// capture.assert_event_exists("doc_example_op", "start");
/// ```
pub fn init_test_capture() -> TestCapture {
    GLOBAL_CAPTURE
        .get_or_init(|| {
            let (layer, capture) = TestCaptureLayer::new();
            tracing_subscriber::registry().with(layer).init();
            capture
        })
        .clone()
}
