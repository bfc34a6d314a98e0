/// Implements [`TextDecode`](crate::TextDecode) for types that already parse through
/// [`FromStr`](std::str::FromStr), replacing the value in place on success.
///
/// ```
/// use std::str::FromStr;
///
/// #[derive(Default)]
/// struct Region(String);
///
/// impl FromStr for Region {
///     type Err = String;
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         if s.len() == 2 { Ok(Region(s.to_uppercase())) } else { Err(format!("bad region {}", s)) }
///     }
/// }
///
/// envconv::impl_text_decode_from_str!(Region);
/// ```
#[macro_export]
macro_rules! impl_text_decode_from_str {
    ($($impl_type:ty),* $(,)?) => {
        $(
            impl $crate::TextDecode for $impl_type {
                type Err = <$impl_type as ::std::str::FromStr>::Err;

                fn decode_text(&mut self, text: &str) -> ::std::result::Result<(), Self::Err> {
                    *self = <$impl_type as ::std::str::FromStr>::from_str(text)?;
                    Ok(())
                }
            }
        )*
    };
}
