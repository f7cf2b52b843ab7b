/*!

# Overview

Leveled, threshold-filtered logging on top of `tracing`. The *level* (critical, error, warning, info, debug,
trace) says what kind of message it is. The numeric *threshold* says how verbose the logger has to be for the
message to be emitted: a message logged at threshold `t` is emitted only if `t` is at most the global logging
threshold. A message logged without a threshold is logged at threshold 0 and is always emitted.

```
use dataspec::log::*;

set_global_logging_threshold(2);

info!(1, "closing specification");        // Emitted
debug!(4, "merging equation {}", 17);     // Not emitted
warning!(0, "empty enumeration dropped"); // Emitted
```

The pipeline logs stage summaries at threshold 2, per-sort closure steps at 3, and per-equation detail at 4 and 5.

## Initialization

The subscriber is installed lazily the first time any of the macros fires. If the embedding program has already
installed a global subscriber, that one is kept and the threshold filter is simply not in effect.

## Threshold

The global threshold is an atomic, so it may be changed at any time from any thread. `ImplementOptions` sets it
when a logging threshold is configured there.

*/

mod layers;
mod macros;

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};

use layers::{ThresholdFieldFormatter, ThresholdFilterLayer};
pub use macros::*;

#[doc(hidden)]
pub use tracing as __tracing;

/// The field name the macros use to carry the threshold of an event.
pub(crate) const THRESHOLD_FIELD: &str = "threshold";

static INIT_LOGGER: Lazy<()> = Lazy::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(ThresholdFieldFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  // Another subscriber may already be installed by the host program.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// Installs the subscriber. Called by the logging macros, so it never needs to be called directly.
pub fn init_logger() {
  Lazy::force(&INIT_LOGGER);
}

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(3);

pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_round_trip() {
    let previous = get_global_logging_threshold();

    set_global_logging_threshold(5);
    assert_eq!(get_global_logging_threshold(), 5);
    info!(5, "emitted at the configured threshold");
    debug!(6, "filtered out");

    set_global_logging_threshold(previous);
    warning!("always emitted");
    critical!(0, "critical message with value {}", 42);
  }
}
