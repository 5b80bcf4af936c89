//! Console Logger
//!
//! A `tracing` subscriber for the browser: each event becomes one line,
//! `[HH:MM:SS.mmm LEVEL target] message key=value ...`, written to the
//! matching `console.*` method. On native targets lines go to stderr.

use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

type Sink = Box<dyn Fn(Level, &str) + Send + Sync>;

/// Layer that renders events as single console lines
pub struct ConsoleLayer {
    max_level: Level,
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self::with_sink(max_level, write_console)
    }

    /// Send formatted lines somewhere other than the console
    pub fn with_sink(max_level: Level, sink: impl Fn(Level, &str) + Send + Sync + 'static) -> Self {
        Self {
            max_level,
            sink: Box::new(sink),
        }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        // interest is cached per callsite, so enabled() alone is not enough
        if *metadata.level() > self.max_level {
            return;
        }
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
        let line = format_line(timestamp, *metadata.level(), metadata.target(), &visitor);
        (self.sink)(*metadata.level(), &line);
    }
}

/// Install the console layer as the global subscriber
pub fn init(max_level: Level) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init()
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

fn format_line(timestamp: impl fmt::Display, level: Level, target: &str, visitor: &LineVisitor) -> String {
    format!("[{} {} {}] {}{}", timestamp, level, target, visitor.message, visitor.fields)
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, line: &str) {
    eprintln!("{}", line);
}
