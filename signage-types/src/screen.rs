//! Organizations, screens and the screen configuration lookups.

use serde::{Deserialize, Serialize};

/// A customer organization owning screens and ad accounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub reference: String,

    pub name: String,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

/// A registered physical display device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    /// Backend identifier used in URLs (`/campaign/campaign-schedule/{reference}`)
    pub reference: String,

    pub screen_name: String,

    /// Optional longer label shown above the sequence result list
    #[serde(default)]
    pub display_name: Option<String>,

    /// Selects a predefined split/orientation configuration
    #[serde(default)]
    pub layout_reference: String,

    #[serde(default)]
    pub is_online: bool,

    /// Identifier the relay uses to address the physical device
    #[serde(default)]
    pub device_id: Option<String>,

    #[serde(default)]
    pub city: Option<String>,
}

/// Paged screen listing (`GET /screen`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScreenList {
    #[serde(default)]
    pub screen: Vec<Screen>,

    #[serde(default, deserialize_with = "crate::lenient::opt_u64_from_any")]
    pub total_rows: Option<u64>,

    #[serde(default, deserialize_with = "crate::lenient::opt_u64_from_any")]
    pub current_page: Option<u64>,
}

/// A predefined screen layout (`GET /screen/layout/all`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ScreenLayout {
    pub reference: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,
}

/// A city with registered screens (`GET /screen/city/all`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScreenCity {
    #[serde(alias = "name")]
    pub city: String,
}
