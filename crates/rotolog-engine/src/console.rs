//! Console flood suppression

use std::io::Write;

/// Collapses consecutive identical console lines into a counted notice.
///
/// The first occurrence of a line always prints immediately; repeats
/// only bump a counter, and the `...repeated N times` summary appears
/// once the next distinct line arrives. A trailing run of repeats at
/// process exit is therefore never reported.
#[derive(Debug, Default)]
pub struct ConsoleDeduper {
    last_line: Option<String>,
    repeat_count: u64,
}

impl ConsoleDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print `line` to `out` unless it repeats the previous line.
    ///
    /// Console writes are best-effort; a failed write never propagates.
    pub fn emit(&mut self, line: &str, out: &mut impl Write) {
        if self.last_line.as_deref() == Some(line) {
            self.repeat_count += 1;
            return;
        }
        if self.repeat_count > 1 {
            let _ = writeln!(out, "...repeated {} times", self.repeat_count);
        }
        let _ = writeln!(out, "{}", line);
        self.last_line = Some(line.to_string());
        self.repeat_count = 1;
    }
}
