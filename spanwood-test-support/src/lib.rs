//! Shared test utilities used across spanwood crates.

pub mod tracing {
    //! Recording layer utilities for capturing spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::registry::LookupSpan;

    const MESSAGE_FIELD: &str = "message";

    /// Layer that keeps every closed span and emitted event so tests can
    /// assert on instrumentation after the fact.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        log: Arc<Mutex<Recorded>>,
    }

    #[derive(Default)]
    struct Recorded {
        spans: Vec<SpanRecord>,
        events: Vec<EventRecord>,
    }

    impl RecordingLayer {
        /// Runs `body` with a fresh layer installed as the thread's default
        /// subscriber and returns the layer alongside the body's result.
        ///
        /// # Examples
        /// ```
        /// use spanwood_test_support::tracing::RecordingLayer;
        ///
        /// let (layer, value) = RecordingLayer::capture(|| {
        ///     tracing::info!(answer = 42, "computed");
        ///     7
        /// });
        /// assert_eq!(value, 7);
        /// assert_eq!(layer.events()[0].message(), Some("computed"));
        /// ```
        pub fn capture<T>(body: impl FnOnce() -> T) -> (Self, T) {
            let layer = Self::default();
            let subscriber = tracing_subscriber::registry().with(layer.clone());
            let value = tracing::subscriber::with_default(subscriber, body);
            (layer, value)
        }

        /// Returns the closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.lock().spans.clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.lock().events.clone()
        }

        /// Returns the first closed span named `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            self.lock().spans.iter().find(|s| s.name == name).cloned()
        }

        /// Returns every event whose message equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            self.lock()
                .events
                .iter()
                .filter(|e| e.message() == Some(message))
                .cloned()
                .collect()
        }

        fn lock(&self) -> MutexGuard<'_, Recorded> {
            self.log.lock().expect("recording lock poisoned")
        }
    }

    /// Snapshot of a closed span and the fields recorded against it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation and through `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the recorded value of `field`.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Structured fields, including `message` when present.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the event's message.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field(MESSAGE_FIELD)
        }

        /// Returns the recorded value of `field`.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    struct OpenSpan {
        name: String,
        fields: HashMap<String, String>,
    }

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(
            &self,
            attrs: &tracing::span::Attributes<'_>,
            id: &tracing::span::Id,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut fields = HashMap::new();
            attrs.record(&mut FieldRecorder(&mut fields));
            span.extensions_mut().insert(OpenSpan {
                name: attrs.metadata().name().to_owned(),
                fields,
            });
        }

        fn on_record(
            &self,
            id: &tracing::span::Id,
            values: &tracing::span::Record<'_>,
            ctx: Context<'_, S>,
        ) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(open) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut FieldRecorder(&mut open.fields));
            }
        }

        fn on_close(&self, id: tracing::span::Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(open) = span.extensions_mut().remove::<OpenSpan>() else {
                return;
            };
            self.lock().spans.push(SpanRecord {
                name: open.name,
                fields: open.fields,
            });
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.lock().events.push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                fields,
            });
        }
    }

    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn put(&mut self, field: &Field, value: impl ToString) {
            self.0.insert(field.name().to_owned(), value.to_string());
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value);
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value);
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value);
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value);
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value);
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value);
        }
    }

}

pub mod ci;
