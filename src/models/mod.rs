//! Data models for the popular shows feed.
//!
//! Raw wire-side types (consumed from the TMDB-shaped API) live next to the
//! view-side projection created by the mapper. Decoding owns field fallback:
//! nullable or missing wire fields become documented defaults here so the
//! mapper downstream stays total.

mod show;

pub use show::{PopularShowsResponse, ShowItem, ShowResponseItem};

use serde::{Deserialize, Deserializer};

/// Deserialize a nullable string field, mapping `null` to an empty string.
pub(crate) fn deserialize_nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Deserialize a rating as either a string or a number.
///
/// TMDB sends `vote_average` as a number (e.g. `8.3`); numbers are rendered
/// with one decimal so `8` displays as `"8.0"`. `null` becomes an empty
/// string.
pub(crate) fn deserialize_rating<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct RatingVisitor;

    impl<'de> Visitor<'de> for RatingVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string, number, or null")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_f64<E>(self, value: f64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(format!("{:.1}", value))
        }

        fn visit_u64<E>(self, value: u64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(format!("{:.1}", value as f64))
        }

        fn visit_i64<E>(self, value: i64) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(format!("{:.1}", value as f64))
        }

        fn visit_unit<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }

        fn visit_none<E>(self) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(RatingVisitor)
}
