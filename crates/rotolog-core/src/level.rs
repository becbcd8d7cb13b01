//! Message levels and the console verbosity gate

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Per-message priority. Lower numeric value means higher urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(i8)]
pub enum Level {
    Error = 0,
    Warning = 1,
    Default = 2,
    Info = 3,
    Debug = 4,
}

impl Level {
    /// 3-character tag written in front of each file record
    pub fn tag(self) -> &'static str {
        match self {
            Level::Error => "ERR",
            Level::Warning => "WAR",
            Level::Default => "DEF",
            Level::Info => "INF",
            Level::Debug => "DEB",
        }
    }

    /// Numeric form as used by the verbosity comparison
    pub fn as_i8(self) -> i8 {
        self as i8
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Level {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0" | "error" | "err" => Ok(Level::Error),
            "1" | "warning" | "warn" | "war" => Ok(Level::Warning),
            "2" | "default" | "def" => Ok(Level::Default),
            "3" | "info" | "inf" => Ok(Level::Info),
            "4" | "debug" | "deb" => Ok(Level::Debug),
            other => Err(Error::config(format!("Invalid level: {}", other))),
        }
    }
}

/// Console verbosity threshold.
///
/// Valid domain is `-1..=4`; `NONE` (-1) blocks all console output and
/// `DEBUG` (4) admits everything. Construction through [`Verbosity::from_raw`]
/// coerces out-of-domain values to `DEFAULT` instead of rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Verbosity(i8);

impl Verbosity {
    pub const NONE: Verbosity = Verbosity(-1);
    pub const ERROR: Verbosity = Verbosity(0);
    pub const WARNING: Verbosity = Verbosity(1);
    pub const DEFAULT: Verbosity = Verbosity(2);
    pub const INFO: Verbosity = Verbosity(3);
    pub const DEBUG: Verbosity = Verbosity(4);

    /// Coerce an arbitrary integer into the valid domain.
    pub fn from_raw(n: i64) -> Self {
        match n {
            -1..=4 => Verbosity(n as i8),
            _ => Verbosity::DEFAULT,
        }
    }

    /// Whether a message at `level` is eligible for the console.
    pub fn allows(self, level: Level) -> bool {
        self.0 >= level.as_i8()
    }

    pub fn as_i8(self) -> i8 {
        self.0
    }
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::DEFAULT
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
