//! Line-oriented console sink
//!
//! Every user-visible line (banner, notifications, liveness) goes through a
//! [`Console`]. Writes are serialized and flushed per line.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

type Sink = Box<dyn Write + Send>;

/// Cloneable handle to a shared line writer
#[derive(Clone)]
pub struct Console {
    sink: Arc<Mutex<Sink>>,
}

impl Console {
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Console bound to the process standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Console bound to an in-memory buffer, returned alongside it
    #[must_use]
    pub fn memory() -> (Self, MemorySink) {
        let sink = MemorySink::default();
        (Self::new(sink.clone()), sink)
    }

    /// Write `text` followed by a newline and flush
    pub fn line(&self, text: &str) -> io::Result<()> {
        // A panic mid-write leaves at worst a partial line; keep going.
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "{text}")?;
        sink.flush()
    }
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console").finish_non_exhaustive()
    }
}

/// Shared in-memory buffer usable as a [`Console`] target
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    /// Everything written so far, lossily decoded as UTF-8
    #[must_use]
    pub fn contents(&self) -> String {
        let buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Completed lines written so far
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_owned).collect()
    }
}

impl Write for MemorySink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_appends_newline() {
        let (console, sink) = Console::memory();

        console.line("first").unwrap();
        console.line("second").unwrap();

        assert_eq!(sink.contents(), "first\nsecond\n");
        assert_eq!(sink.lines(), vec!["first", "second"]);
    }

    #[test]
    fn test_clones_share_sink() {
        let (console, sink) = Console::memory();
        let other = console.clone();

        console.line("a").unwrap();
        other.line("b").unwrap();

        assert_eq!(sink.lines(), vec!["a", "b"]);
    }

    #[test]
    fn test_write_error_is_returned() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::from(io::ErrorKind::BrokenPipe))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let console = Console::new(Closed);
        let err = console.line("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
