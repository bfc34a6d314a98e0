use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;
use crate::decode::{parse_bool, TextDecode};
use crate::duration::parse_duration;
use crate::source::{Lookup, ProcessEnv, Source};

/// Typed lookups over a [`Source`], each returning the caller's default when the variable
/// is unset or its value doesn't parse.
#[derive(Debug, Clone, Default)]
pub struct EnvConverter<S = ProcessEnv> {
    source: S,
}

impl EnvConverter<ProcessEnv> {
    pub const fn process() -> Self {
        Self {
            source: ProcessEnv,
        }
    }
}

impl<S: Source> EnvConverter<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
        }
    }

    /// Source the lookups read from.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Gives the source back, e.g. to layer it under another one.
    pub fn into_source(self) -> S {
        self.source
    }

    fn convert<T, E: Display>(&self, name: &str, default: T, parse: impl FnOnce(&str) -> Result<T, E>) -> T {
        let val = match self.source.lookup(name) {
            Lookup::Set(val) => val,
            Lookup::Unset => {
                log::trace!("{} not set, using default", name);
                return default;
            }
            Lookup::NotUnicode(_) => {
                log::debug!("Ignoring non unicode value of {}", name);
                return default;
            }
        };
        match parse(val.as_str()) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("Ignoring invalid value of {}: {}", name, err);
                default
            }
        }
    }

    /// Reads `1`, `t`, `true`, `0`, `f` or `false` in any case.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.convert(name, default, parse_bool)
    }

    /// Reads an optionally signed decimal integer spanning the whole value.
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.convert(name, default, i64::from_str)
    }

    /// Reads a duration such as `2h45m`, see [`parse_duration`].
    pub fn get_duration(&self, name: &str, default: Duration) -> Duration {
        self.convert(name, default, parse_duration)
    }

    /// Returns the raw value, an empty value is returned as is.
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.convert(name, default.to_string(), |val| Ok::<_, Infallible>(val.to_string()))
    }

    /// Decodes the value into a defaulted `T` through its [`TextDecode`] impl.
    pub fn get_text_decodable<T: TextDecode + Default>(&self, name: &str, default: T) -> T {
        self.convert(name, default, |val| {
            let mut result = T::default();
            result.decode_text(val).map(|()| result)
        })
    }

    /// Parses the value through the `FromStr` impl of `T`.
    pub fn get_from_str<T: FromStr>(&self, name: &str, default: T) -> T {
        self.convert(name, default, |val| {
            T::from_str(val).map_err(|_| "rejected by FromStr")
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};
    use crate::level::Level;

    fn converter(entries: &[(&str, &str)]) -> EnvConverter<HashMap<String, String>> {
        EnvConverter::new(entries.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect())
    }

    #[derive(Debug, Default, PartialEq)]
    struct Greeting {
        val: String,
    }

    impl TextDecode for Greeting {
        type Err = &'static str;

        fn decode_text(&mut self, text: &str) -> Result<(), Self::Err> {
            if text.is_empty() {
                return Err("empty greeting");
            }
            self.val = text.to_string();
            Ok(())
        }
    }

    #[test]
    fn unset_returns_default() {
        let conv = converter(&[]);
        assert_eq!(conv.get_int("NUM", 42), 42);
        assert!(conv.get_bool("FLAG", true));
        assert!(!conv.get_bool("FLAG", false));
        assert_eq!(conv.get_duration("WAIT", Duration::from_secs(5)), Duration::from_secs(5));
        assert_eq!(conv.get_string("NAME", "HELLO"), "HELLO");
        assert_eq!(conv.get_text_decodable("LEVEL", Level::WARN), Level::WARN);
        assert_eq!(conv.get_from_str("PORT", 8888u16), 8888);
    }

    #[test]
    fn malformed_returns_default() {
        let conv = converter(&[
            ("NUM", "aabbcc"),
            ("FLAG", "aabbcc"),
            ("WAIT", "abc"),
            ("LEVEL", "INVALID"),
            ("PORT", "99999"),
            ("EMPTY", ""),
        ]);
        assert_eq!(conv.get_int("NUM", 42), 42);
        assert!(conv.get_bool("FLAG", true));
        assert_eq!(conv.get_duration("WAIT", Duration::from_secs(5)), Duration::from_secs(5));
        assert_eq!(conv.get_text_decodable("LEVEL", Level::INFO), Level::INFO);
        assert_eq!(conv.get_from_str("PORT", 8888u16), 8888);
        assert_eq!(conv.get_int("EMPTY", 42), 42);
        assert!(!conv.get_bool("EMPTY", false));
    }

    #[test]
    fn valid_values_override_default() {
        let conv = converter(&[
            ("NUM", "123"),
            ("FLAG", "TRUE"),
            ("WAIT", "2h45m"),
            ("NAME", "HI"),
            ("LEVEL", "DEBUG"),
            ("ADDR", "192.168.0.10"),
        ]);
        assert_eq!(conv.get_int("NUM", 42), 123);
        assert!(conv.get_bool("FLAG", false));
        assert_eq!(conv.get_duration("WAIT", Duration::from_secs(5)), Duration::from_secs(9900));
        assert_eq!(conv.get_string("NAME", "HELLO"), "HI");
        assert_eq!(conv.get_text_decodable("LEVEL", Level::INFO), Level::DEBUG);
        assert_eq!(
            conv.get_from_str("ADDR", IpAddr::V4(Ipv4Addr::new(192, 168, 0, 100))),
            IpAddr::V4(Ipv4Addr::new(192, 168, 0, 10))
        );
    }

    #[test]
    fn empty_string_is_returned_raw() {
        let conv = converter(&[("NAME", "")]);
        assert_eq!(conv.get_string("NAME", "HELLO"), "");
    }

    #[test]
    fn names_are_not_folded() {
        let conv = converter(&[("num", "7")]);
        assert_eq!(conv.get_int("NUM", 42), 42);
        assert_eq!(conv.get_int("num", 42), 7);
    }

    #[test]
    fn source_can_be_taken_back() {
        let conv = converter(&[("NUM", "7")]);
        assert_eq!(conv.source().len(), 1);
        let layered = EnvConverter::new(conv.into_source().or(converter(&[("NUM", "8"), ("OTHER", "9")]).into_source()));
        assert_eq!(layered.get_int("NUM", 42), 7);
        assert_eq!(layered.get_int("OTHER", 42), 9);
    }

    #[test]
    fn custom_decoder() {
        let conv = converter(&[("GREETING", "hello world"), ("BLANK", "")]);
        let fallback = || Greeting { val: "default".to_string() };
        assert_eq!(conv.get_text_decodable("GREETING", fallback()).val, "hello world");
        assert_eq!(conv.get_text_decodable("BLANK", fallback()), fallback());
        assert_eq!(conv.get_text_decodable("MISSING", fallback()), fallback());
    }
}
