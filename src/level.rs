//! Leveled severity, decodable from names such as `DEBUG` or `WARN+1`.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Severity of a log record, higher is more severe.
///
/// Named levels are spaced apart so custom levels can sit between them, `WARN+1` is
/// more severe than [`Level::WARN`] but less than [`Level::ERROR`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(i32);

impl Level {
    pub const DEBUG: Level = Level(-4);
    pub const INFO: Level = Level(0);
    pub const WARN: Level = Level(4);
    pub const ERROR: Level = Level(8);

    pub const fn new(severity: i32) -> Self {
        Self(severity)
    }

    pub const fn severity(self) -> i32 {
        self.0
    }

    /// Closest `log` filter that lets records of this severity through.
    pub fn to_level_filter(self) -> log::LevelFilter {
        if self < Level::DEBUG {
            log::LevelFilter::Trace
        } else if self < Level::INFO {
            log::LevelFilter::Debug
        } else if self < Level::WARN {
            log::LevelFilter::Info
        } else if self < Level::ERROR {
            log::LevelFilter::Warn
        } else {
            log::LevelFilter::Error
        }
    }
}

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::ERROR,
            log::Level::Warn => Level::WARN,
            log::Level::Info => Level::INFO,
            log::Level::Debug => Level::DEBUG,
            log::Level::Trace => Level(Level::DEBUG.0 - 4),
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (name, base) = if *self < Level::INFO {
            ("DEBUG", Level::DEBUG)
        } else if *self < Level::WARN {
            ("INFO", Level::INFO)
        } else if *self < Level::ERROR {
            ("WARN", Level::WARN)
        } else {
            ("ERROR", Level::ERROR)
        };
        let offset = i64::from(self.0) - i64::from(base.0);
        if offset == 0 {
            write!(f, "{}", name)
        } else {
            write!(f, "{}{:+}", name, offset)
        }
    }
}

/// Contains errors produced while parsing a level.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseLevelError {
    UnknownName(String),
    InvalidOffset(String),
}

impl Display for ParseLevelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseLevelError::UnknownName(name) => write!(f, "unknown level name {:?}", name),
            ParseLevelError::InvalidOffset(text) => write!(f, "invalid level offset in {:?}", text),
        }
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, offset) = match s.find(|c: char| c == '+' || c == '-') {
            Some(pos) => {
                let offset = s[pos..].parse::<i32>()
                    .map_err(|_| ParseLevelError::InvalidOffset(s.to_string()))?;
                (&s[..pos], offset)
            }
            None => (s, 0),
        };
        let base = match name.to_ascii_uppercase().as_str() {
            "DEBUG" => Level::DEBUG,
            "INFO" => Level::INFO,
            "WARN" => Level::WARN,
            "ERROR" => Level::ERROR,
            _ => return Err(ParseLevelError::UnknownName(name.to_string())),
        };
        base.0.checked_add(offset)
            .map(Level)
            .ok_or_else(|| ParseLevelError::InvalidOffset(s.to_string()))
    }
}

impl_text_decode_from_str!(Level);

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}
