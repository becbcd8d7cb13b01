//! Leveled log writer with rotation and console echo

use std::fs::{self, OpenOptions};
use std::io::{self, Write};

use chrono::Local;
use rotolog_core::constants::{BREAK_LINE_WIDTH, TIMESTAMP_FORMAT};
use rotolog_core::{Error, Level, LogConfig, Result};
use tracing::warn;

use crate::console::ConsoleDeduper;
use crate::rotation;

/// Appends leveled records to the configured file and echoes
/// console-eligible messages through the deduper.
///
/// No file handle is held across calls: every call checks rotation,
/// opens the file, appends one record, and closes it again, so each
/// record is durable once the call returns. Single-writer only; there
/// is no cross-process locking around rotation.
pub struct LogWriter {
    config: LogConfig,
    console: ConsoleDeduper,
}

impl LogWriter {
    pub fn new(config: LogConfig) -> Self {
        Self {
            config,
            console: ConsoleDeduper::new(),
        }
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Reconfiguration takes effect on the next write.
    pub fn config_mut(&mut self) -> &mut LogConfig {
        &mut self.config
    }

    /// Log `message` at the DEFAULT level.
    pub fn log(&mut self, message: &str) -> Result<()> {
        self.log_at(Level::Default, message)
    }

    /// Log `message` at `level`.
    ///
    /// The record always goes to the file; the bare message (no tag or
    /// timestamp) reaches the console iff the configured verbosity
    /// admits `level`. Only a failure to create the log file's parent
    /// directory is a hard error: file open/write failures degrade to a
    /// warning on the diagnostic channel and the console path still
    /// runs, so a full disk does not silence operator-visible output.
    pub fn log_at(&mut self, level: Level, message: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        let record = format!("<{} {}> {}\n", level.tag(), timestamp, message);
        self.append(&record);

        if self.config.verbosity().allows(level) {
            let stdout = io::stdout();
            self.console.emit(message, &mut stdout.lock());
        }
        Ok(())
    }

    /// Write the fixed section separator (two blank lines and a dashed
    /// rule) through the same rotation-and-append path. Never echoed to
    /// the console.
    pub fn write_break(&mut self) -> Result<()> {
        self.ensure_parent_dir()?;
        let block = format!("\n\n{}\n", "-".repeat(BREAK_LINE_WIDTH));
        self.append(&block);
        Ok(())
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.config.path().parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }
        Ok(())
    }

    /// Rotate if needed, then append `data` to the active file.
    /// Filesystem failures are reported on the diagnostic channel
    /// instead of aborting the call.
    fn append(&mut self, data: &str) {
        let outcome = rotation::maybe_rotate(&self.config);
        for issue in &outcome.issues {
            warn!("log rotation: {}", issue);
        }

        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.config.path())
            .and_then(|mut file| file.write_all(data.as_bytes()));
        if let Err(e) = result {
            warn!(
                "failed to append to {}: {}",
                self.config.path().display(),
                e
            );
        }
    }
}
