//! Constants and default values for Rotolog

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "Logging.log";

/// Default rotation threshold in bytes (1MB)
pub const DEFAULT_MAX_SIZE: u64 = 1024 * 1024;

/// Default number of rotated backups to keep
pub const DEFAULT_MAX_BACKUPS: usize = 3;

/// Highest numbered suffix ever probed when enumerating backups
pub const BACKUP_PROBE_LIMIT: usize = 9;

/// Width of the dashed rule written by break markers
pub const BREAK_LINE_WIDTH: usize = 80;

/// Timestamp format for log records (local time)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Config file names searched in the working directory (in priority order)
pub const CONFIG_FILES: &[&str] = &["rotolog.toml", "rotolog.json"];
