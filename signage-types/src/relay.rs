//! Messages pushed to the device relay over WebSocket.

use serde::{Deserialize, Serialize};

/// Event name the relay routes to a physical device.
pub const SEND_TO_DEVICE_EVENT: &str = "send-to-device";

/// Relay envelope: `{ "event": "send-to-device", "deviceId": ..., "data": ... }`.
///
/// `data` is the backend's computed campaign payload, forwarded verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RelayMessage {
    pub event: String,

    pub device_id: String,

    pub data: serde_json::Value,
}

impl RelayMessage {
    pub fn send_to_device(device_id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event: SEND_TO_DEVICE_EVENT.to_string(),
            device_id: device_id.into(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_to_device_wire_format() {
        let msg = RelayMessage::send_to_device("dev-1", serde_json::json!({"list": [1]}));
        let value = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "event": "send-to-device",
                "deviceId": "dev-1",
                "data": {"list": [1]}
            })
        );
    }
}
