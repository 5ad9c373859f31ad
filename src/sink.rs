//! Output sink abstraction for `puts`.
//!
//! Lets callers supply any destination for `puts` output, so tests can
//! capture it instead of writing to real stdout.

use std::io::Write;

/// Destination for text written by the `puts` builtin.
pub trait OutputSink {
    fn write_line(&mut self, text: &str);
}

/// Writes to the process's real standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn write_line(&mut self, text: &str) {
        let mut stdout = std::io::stdout();
        let _ = writeln!(stdout, "{text}");
    }
}

/// Captures lines in memory, for tests and embedders that want the
/// interpreter's output without it touching the real console.
#[derive(Debug, Default)]
pub struct VecSink {
    pub lines: Vec<String>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputSink for VecSink {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
