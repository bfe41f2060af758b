//! Deserializers for numeric fields the backend sends either as JSON numbers
//! or as numeric strings (`"25"` vs `25`).

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Integer(u64),
    Float(f64),
    Text(String),
}

pub(crate) fn u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Integer(n) => Ok(n),
        NumberOrString::Float(f) if f >= 0.0 => Ok(f as u64),
        NumberOrString::Float(f) => Err(de::Error::custom(format!("negative number: {f}"))),
        NumberOrString::Text(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| de::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}

pub(crate) fn opt_u64_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Integer(n)) => Ok(Some(n)),
        Some(NumberOrString::Float(f)) if f >= 0.0 => Ok(Some(f as u64)),
        Some(NumberOrString::Float(_)) => Ok(None),
        Some(NumberOrString::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| de::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}
