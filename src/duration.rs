//! Textual duration grammar, e.g. `300ms`, `1.5h` or `2h45m`.

use std::fmt;
use std::fmt::{Display, Formatter};
use std::time::Duration;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Contains errors produced while parsing a duration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    Empty,
    InvalidNumber(String),
    MissingUnit(String),
    UnknownUnit(String),
    Overflow(String),
    Negative(String),
}

impl Display for DurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DurationError::Empty => write!(f, "empty duration"),
            DurationError::InvalidNumber(s) => write!(f, "invalid number in duration {:?}", s),
            DurationError::MissingUnit(s) => write!(f, "missing unit in duration {:?}", s),
            DurationError::UnknownUnit(unit) => write!(f, "unknown unit {:?} in duration", unit),
            DurationError::Overflow(s) => write!(f, "duration {:?} out of range", s),
            DurationError::Negative(s) => write!(f, "negative duration {:?}", s),
        }
    }
}

impl std::error::Error for DurationError {}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        // U+00B5 micro sign and U+03BC greek small letter mu
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn digits_len(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Consumes leading digits, returning the value and the rest of the input.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let len = digits_len(s);
    let mut value: u64 = 0;
    for c in s[..len].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(c - b'0'))?;
    }
    Some((value, &s[len..]))
}

/// Consumes leading fraction digits, returning the value, its scale and the rest of the input.
/// Digits past the representable precision are consumed but ignored.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let len = digits_len(s);
    let mut value: u64 = 0;
    let mut scale = 1f64;
    for c in s[..len].bytes() {
        let next = value.checked_mul(10).and_then(|v| v.checked_add(u64::from(c - b'0')));
        match next {
            Some(next) => {
                value = next;
                scale *= 10.0;
            }
            None => break,
        }
    }
    (value, scale, &s[len..])
}

/// Parses a duration string: an optional sign followed by a sequence of decimal numbers,
/// each with an optional fraction and a unit suffix, such as `300ms`, `1.5h` or `2h45m`.
///
/// Valid units are `ns`, `us` (or `µs`), `ms`, `s`, `m` and `h`. The lone string `0` needs no
/// unit. Since [`Duration`] is unsigned, a leading `-` is only accepted for a zero total.
pub fn parse_duration(text: &str) -> Result<Duration, DurationError> {
    let mut s = text;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        //Number part
        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(|| DurationError::Overflow(text.to_string()))?;
        let had_whole = rest.len() != before;
        s = rest;

        let mut fraction: u64 = 0;
        let mut scale = 1f64;
        let mut had_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (value, value_scale, rest_after) = leading_fraction(rest);
            had_fraction = rest_after.len() != rest.len();
            fraction = value;
            scale = value_scale;
            s = rest_after;
        }
        if !had_whole && !had_fraction {
            return Err(DurationError::InvalidNumber(text.to_string()));
        }

        //Unit part, runs until the next number
        let unit_len = s.find(|c: char| c == '.' || c.is_ascii_digit()).unwrap_or(s.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(text.to_string()));
        }
        let unit = &s[..unit_len];
        let unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;
        s = &s[unit_len..];

        let overflow = || DurationError::Overflow(text.to_string());
        let mut value = whole.checked_mul(unit).ok_or_else(overflow)?;
        if 0 < fraction {
            let extra = (fraction as f64 * (unit as f64 / scale)) as u64;
            value = value.checked_add(extra).ok_or_else(overflow)?;
        }
        total = total.checked_add(value).ok_or_else(overflow)?;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(text.to_string()));
    }
    Ok(Duration::from_nanos(total))
}

/// Formats `value / 10^precision` omitting trailing zeros in the fraction.
fn format_fraction(out: &mut String, value: u128, precision: u32) {
    let divisor = 10u128.pow(precision);
    out.push_str(&(value / divisor).to_string());
    let fraction = value % divisor;
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = precision as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

/// Renders a duration in the canonical form read by [`parse_duration`], such as `2h45m0s`,
/// `1.5s` or `100ms`. Durations under one second use the largest fitting sub-second unit.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    let mut out = String::new();
    if nanos == 0 {
        out.push_str("0s");
    } else if nanos < u128::from(MICROSECOND) {
        out.push_str(&nanos.to_string());
        out.push_str("ns");
    } else if nanos < u128::from(MILLISECOND) {
        format_fraction(&mut out, nanos, 3);
        out.push_str("µs");
    } else if nanos < u128::from(SECOND) {
        format_fraction(&mut out, nanos, 6);
        out.push_str("ms");
    } else {
        let seconds = nanos % u128::from(MINUTE);
        let minutes = (nanos / u128::from(MINUTE)) % 60;
        let hours = nanos / u128::from(HOUR);
        if 0 < hours {
            out.push_str(&format!("{}h", hours));
        }
        if 0 < hours || 0 < minutes {
            out.push_str(&format!("{}m", minutes));
        }
        format_fraction(&mut out, seconds, 9);
        out.push('s');
    }
    out
}
