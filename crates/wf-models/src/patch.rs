//! Helpers for inbound payloads: partial updates and hour amounts.

use serde::{de, Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null`.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>` field: absent => `None`, `null` => `Some(None)`,
/// value => `Some(Some(v))`.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An hour amount as clients send it: a JSON number, or a decimal string
/// such as `"2.50"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Hours {
    Number(f64),
    Text(String),
}

impl Hours {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Hours::Number(value) => Ok(value),
            Hours::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid number of hours '{}'", text))),
        }
    }
}

/// `Option<f64>` hours, accepting numbers or decimal strings
pub fn hours<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Hours>::deserialize(deserializer)?
        .map(Hours::into_f64)
        .transpose()
}

/// [`hours`] for a PATCH field, with [`double_option`] semantics
pub fn patch_hours<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    hours(deserializer).map(Some)
}
