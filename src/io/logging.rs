//! Console logging through `tracing`, kept clear of the progress display

use crate::io::configuration::{DEFAULT_LOG_FILTER, QUIET_LOG_FILTER};
use indicatif::MultiProgress;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

/// Stderr writer that hides progress bars while a log line is written
pub struct SuspendingWriter {
    multi_progress: MultiProgress,
}

impl SuspendingWriter {
    /// Wrap stderr around the given progress display
    pub const fn new(multi_progress: MultiProgress) -> Self {
        Self { multi_progress }
    }
}

impl Write for SuspendingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.multi_progress.suspend(|| io::stderr().write(buf))
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.multi_progress.suspend(|| io::stderr().write_all(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

/// Filter applied when `RUST_LOG` is not set
pub const fn default_filter(quiet: bool) -> &'static str {
    if quiet {
        QUIET_LOG_FILTER
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the quiet flag. Calling this more than
/// once keeps the first subscriber.
pub fn init(quiet: bool, multi_progress: &MultiProgress) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet)));
    let multi_progress = multi_progress.clone();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(move || SuspendingWriter::new(multi_progress.clone()))
        .try_init();
}
