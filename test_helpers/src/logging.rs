//! Capture harness for asserting on emitted `tracing` events.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

/// Shared in-memory sink for subscriber output.
#[derive(Clone, Default)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    /// Returns everything written so far, lossily decoded as UTF-8.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.inner.lock()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` under a subscriber that records warnings, returning the
/// closure's value together with the captured output.
///
/// The subscriber is installed only for the current thread and only for the
/// duration of the call, so concurrently running tests do not interleave.
///
/// # Examples
///
/// ```
/// use test_helpers::logging;
///
/// let ((), logs) = logging::capture_warnings(|| tracing::warn!("boom"));
/// assert!(logs.contains("boom"));
/// ```
#[must_use]
pub fn capture_warnings<F, R>(f: F) -> (R, String)
where
    F: FnOnce() -> R,
{
    let buffer = LogBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = buffer.contents();
    (value, logs)
}
