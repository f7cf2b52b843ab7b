/*!

The two pieces of `tracing` plumbing behind the logging macros: a layer that drops events whose threshold exceeds
the global threshold, and a field formatter that hides the bookkeeping fields from the printed output.

*/

use std::fmt::Debug;

use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  field::RecordFields,
  fmt::{format::Writer, FormatFields},
  layer::Context,
  registry::LookupSpan,
  Layer
};

use super::{get_global_logging_threshold, THRESHOLD_FIELD};

// region Filtering

pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor::default();
    event.record(&mut visitor);
    // An event without a threshold is logged at threshold 0.
    visitor.threshold.unwrap_or(0) <= get_global_logging_threshold()
  }
}

#[derive(Default)]
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl ThresholdVisitor {
  fn set(&mut self, value: i128) {
    match u8::try_from(value) {
      Ok(threshold) => self.threshold = Some(threshold),
      Err(_) => panic!("logging threshold {} is outside 0..=255. This is a bug.", value),
    }
  }
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == THRESHOLD_FIELD {
      self.set(value as i128);
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == THRESHOLD_FIELD {
      self.set(value as i128);
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    if field.name() == THRESHOLD_FIELD {
      panic!("logging threshold {:?} is not an integer. This is a bug.", value);
    }
  }
}

// endregion Filtering

// region Formatting

pub(crate) struct ThresholdFieldFormatter;

impl<'writer> FormatFields<'writer> for ThresholdFieldFormatter {
  fn format_fields<R: RecordFields>(&self, writer: Writer<'writer>, fields: R) -> std::fmt::Result {
    let mut visitor = PrintingVisitor { writer };
    fields.record(&mut visitor);
    Ok(())
  }
}

struct PrintingVisitor<'writer> {
  writer: Writer<'writer>,
}

impl<'writer> Visit for PrintingVisitor<'writer> {
  fn record_bool(&mut self, field: &Field, value: bool) {
    match field.name() {
      "critical" if value => { let _ = write!(self.writer, "[CRITICAL] "); }
      "critical" => {}
      name => { let _ = write!(self.writer, "{}={} ", name, value); }
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    match field.name() {
      "message" => { let _ = write!(self.writer, "{:?}", value); }
      name if name == THRESHOLD_FIELD => {}
      name => { let _ = write!(self.writer, "{}={:?} ", name, value); }
    }
  }
}

// endregion Formatting
