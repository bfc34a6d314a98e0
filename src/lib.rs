//! Typed lookups of environment variables with default fallback.
//!
//! Every lookup follows the same path: read the variable, return the default if it's unset,
//! otherwise parse it and return the default if parsing fails. Failures are never surfaced
//! to the caller, they are only logged at debug level through the `log` facade.
//!
//! ```
//! use std::time::Duration;
//!
//! let workers = envconv::get_int("SERVER_WORKERS", 4);
//! let keep_alive = envconv::get_duration("SERVER_KEEP_ALIVE", Duration::from_secs(30));
//! let level = envconv::get_text_decodable("SERVER_LOG_LEVEL", envconv::Level::INFO);
//! # let _ = (workers, keep_alive, level);
//! ```
//!
//! Lookups against anything other than the process environment, such as a `.env` file
//! layered below it, go through an [`EnvConverter`]:
//!
//! ```no_run
//! use envconv::{DotenvFile, EnvConverter, ProcessEnv, Source};
//!
//! let source = ProcessEnv.or(DotenvFile::from_path(".env")?);
//! let conv = EnvConverter::new(source);
//! let bind = conv.get_string("SERVER_HTTP_BIND_ADDRESS", "0.0.0.0:8888");
//! # let _ = bind;
//! # Ok::<(), dotenvy::Error>(())
//! ```

#[macro_use]
mod macros;
mod converter;
mod decode;
mod duration;
mod level;
mod source;

use std::str::FromStr;
use std::time::Duration;

pub use converter::EnvConverter;
pub use decode::{parse_bool, ParseBoolError, TextDecode};
pub use duration::{format_duration, parse_duration, DurationError};
pub use level::{Level, ParseLevelError};
pub use source::{Chain, DotenvFile, Lookup, ProcessEnv, Source};

/// Boolean value of the variable `name`, or `default` if unset or not one of
/// `1`, `t`, `true`, `0`, `f`, `false` (any case).
pub fn get_bool(name: &str, default: bool) -> bool {
    EnvConverter::process().get_bool(name, default)
}

/// Integer value of the variable `name`, or `default` if unset or not a whole decimal integer.
pub fn get_int(name: &str, default: i64) -> i64 {
    EnvConverter::process().get_int(name, default)
}

/// Duration value of the variable `name`, or `default` if unset or malformed.
///
/// See [`parse_duration`] for the accepted format.
pub fn get_duration(name: &str, default: Duration) -> Duration {
    EnvConverter::process().get_duration(name, default)
}

/// Raw value of the variable `name`, or `default` if unset.
pub fn get_string(name: &str, default: &str) -> String {
    EnvConverter::process().get_string(name, default)
}

/// Value of the variable `name` decoded through [`TextDecode`] into `T::default()`,
/// or `default` if unset or rejected by the decoder.
///
/// ```
/// # std::env::remove_var("MY_LOG_LEVEL");
/// let level = envconv::get_text_decodable("MY_LOG_LEVEL", envconv::Level::INFO);
/// assert_eq!(level, envconv::Level::INFO);
/// ```
pub fn get_text_decodable<T: TextDecode + Default>(name: &str, default: T) -> T {
    EnvConverter::process().get_text_decodable(name, default)
}

/// Value of the variable `name` parsed through `FromStr`, or `default` if unset or unparsable.
pub fn get_from_str<T: FromStr>(name: &str, default: T) -> T {
    EnvConverter::process().get_from_str(name, default)
}

/// Severity level of the variable `name`, or `default` if unset or not a level name.
#[deprecated(note = "use get_text_decodable instead")]
pub fn get_level(name: &str, default: Level) -> Level {
    get_text_decodable(name, default)
}
