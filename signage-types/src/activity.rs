//! Device playback logs.

use serde::{Deserialize, Serialize};

/// A timestamped playback record reported by a device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLog {
    /// Local play time, `YYYY-MM-DD HH:MM:SS`
    pub play_at: String,

    #[serde(default)]
    pub upload_name: String,

    #[serde(default)]
    pub account_ref: Option<String>,
}

/// One page of device logs (`GET /activity/device-log/{screen_id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLogPage {
    #[serde(default)]
    pub list: Vec<DeviceLog>,

    #[serde(default, deserialize_with = "crate::lenient::u64_from_any")]
    pub total_rows: u64,

    #[serde(default, deserialize_with = "crate::lenient::u64_from_any")]
    pub rows_per_page: u64,

    #[serde(default, deserialize_with = "crate::lenient::u64_from_any")]
    pub current_page: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_counters_as_strings() {
        let page: DeviceLogPage = serde_json::from_str(
            r#"{"list":[{"playAt":"2024-03-01 10:00:00","uploadName":"Promo"}],
                "totalRows":51,"rowsPerPage":"25","currentPage":"2"}"#,
        )
        .unwrap();
        assert_eq!(page.list.len(), 1);
        assert_eq!(page.total_rows, 51);
        assert_eq!(page.rows_per_page, 25);
        assert_eq!(page.current_page, 2);
    }
}
