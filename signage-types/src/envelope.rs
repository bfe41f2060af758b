//! Backend response envelope.

use serde::{Deserialize, Serialize};

/// Every backend response wraps its payload as `{ "data": <payload>, ... }`.
///
/// Auth endpoints add `success` (login) or `status` (password reset) flags
/// and a human-readable `message`. Mutations may omit `data` entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default)]
    pub data: T,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> T {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_ignores_unknown_fields() {
        let env: Envelope<Vec<u32>> =
            serde_json::from_str(r#"{"data":[1,2],"message":"ok","requestId":"x"}"#).unwrap();
        assert_eq!(env.message.as_deref(), Some("ok"));
        assert_eq!(env.into_data(), vec![1, 2]);
    }

    #[test]
    fn test_envelope_without_data() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"message":"Sequence updated","success":true}"#).unwrap();
        assert_eq!(env.data, serde_json::Value::Null);
        assert_eq!(env.message.as_deref(), Some("Sequence updated"));
    }
}
