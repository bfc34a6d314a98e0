use std::fmt;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::Duration;
use crate::duration::{parse_duration, DurationError};

/// Capability of a value to decode itself in place from its textual form.
///
/// On error the value must be left usable, callers discard it and fall back to their default.
pub trait TextDecode {
    type Err: Display;

    fn decode_text(&mut self, text: &str) -> Result<(), Self::Err>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseBoolError {
    text: String,
}

impl Display for ParseBoolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "invalid boolean {:?}", self.text)
    }
}

impl std::error::Error for ParseBoolError {}

const TRUE_TOKENS: [&str; 3] = ["1", "t", "true"];
const FALSE_TOKENS: [&str; 3] = ["0", "f", "false"];

/// Parses `1`, `t`, `true` as true and `0`, `f`, `false` as false, ignoring ASCII case.
pub fn parse_bool(text: &str) -> Result<bool, ParseBoolError> {
    if TRUE_TOKENS.iter().any(|token| text.eq_ignore_ascii_case(token)) {
        Ok(true)
    } else if FALSE_TOKENS.iter().any(|token| text.eq_ignore_ascii_case(token)) {
        Ok(false)
    } else {
        Err(ParseBoolError { text: text.to_string() })
    }
}

impl TextDecode for bool {
    type Err = ParseBoolError;

    fn decode_text(&mut self, text: &str) -> Result<(), Self::Err> {
        *self = parse_bool(text)?;
        Ok(())
    }
}

impl TextDecode for Duration {
    type Err = DurationError;

    fn decode_text(&mut self, text: &str) -> Result<(), Self::Err> {
        *self = parse_duration(text)?;
        Ok(())
    }
}

impl_text_decode_from_str!(
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64, char,
    String, PathBuf,
);
