//! Console output channel shared by handlers and the dispatcher.
//!
//! Supports both direct writes to the terminal and capturing into a
//! buffer, so embedders and tests can inspect what a command printed.

use parking_lot::Mutex;
use std::io::Write;

/// Which terminal stream a line was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Out,
    Err,
}

/// One captured line of console output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub stream: Stream,
    pub text: String,
}

/// Output channel for command results and failures.
/// Stdout writes through to the terminal; Capturing buffers lines.
#[derive(Debug, Default)]
pub enum Console {
    #[default]
    Stdout,
    Capturing(Mutex<Vec<ConsoleLine>>),
}

impl Console {
    /// A console that records every line instead of printing it.
    pub fn capturing() -> Self {
        Self::Capturing(Mutex::new(Vec::new()))
    }

    /// Write a line of regular output.
    pub fn print(&self, text: impl AsRef<str>) {
        self.write(Stream::Out, text.as_ref());
    }

    /// Write a line of error output.
    pub fn error(&self, text: impl AsRef<str>) {
        self.write(Stream::Err, text.as_ref());
    }

    fn write(&self, stream: Stream, text: &str) {
        match self {
            Self::Stdout => {
                // A closed terminal is not worth failing a command over.
                let _ = match stream {
                    Stream::Out => writeln!(std::io::stdout().lock(), "{text}"),
                    Stream::Err => writeln!(std::io::stderr().lock(), "{text}"),
                };
            }
            Self::Capturing(buf) => buf.lock().push(ConsoleLine {
                stream,
                text: text.to_string(),
            }),
        }
    }

    /// Snapshot of the captured lines. Empty for `Stdout`.
    pub fn captured(&self) -> Vec<ConsoleLine> {
        match self {
            Self::Stdout => Vec::new(),
            Self::Capturing(buf) => buf.lock().clone(),
        }
    }

    /// Drain the captured lines. Empty for `Stdout`.
    pub fn take_captured(&self) -> Vec<ConsoleLine> {
        match self {
            Self::Stdout => Vec::new(),
            Self::Capturing(buf) => std::mem::take(&mut *buf.lock()),
        }
    }

    /// Captured text of one stream, joined with newlines.
    pub fn captured_text(&self, stream: Stream) -> String {
        self.captured()
            .into_iter()
            .filter(|line| line.stream == stream)
            .map(|line| line.text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capturing_records_both_streams_in_order() {
        let console = Console::capturing();
        console.print("listing");
        console.error("failed");
        console.print("done");

        let lines = console.captured();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1].stream, Stream::Err);
        assert_eq!(console.captured_text(Stream::Out), "listing\ndone");
        assert_eq!(console.captured_text(Stream::Err), "failed");
    }

    #[test]
    fn take_captured_drains() {
        let console = Console::capturing();
        console.print("one");
        assert_eq!(console.take_captured().len(), 1);
        assert!(console.captured().is_empty());
    }

    #[test]
    fn stdout_captures_nothing() {
        let console = Console::Stdout;
        assert!(console.captured().is_empty());
    }
}
