//! Wire types shared between the signage admin dashboard, the backend REST
//! API and the device relay.
//!
//! The backend owns every entity; these are passthrough DTOs that hold fetched
//! JSON for a single render pass. Field names follow the backend's camelCase.
//!
//! # Modules
//! - [`envelope`] - The `{ "data": ... }` response envelope
//! - [`screen`] - Organizations, screens, layouts and cities
//! - [`campaign`] - Ad accounts, ads, campaigns and campaign sequences
//! - [`activity`] - Device playback logs
//! - [`relay`] - Messages pushed to the device relay

pub mod activity;
pub mod campaign;
pub mod envelope;
pub mod relay;
pub mod screen;

mod lenient;

// Re-export commonly used types at crate root
pub use activity::{DeviceLog, DeviceLogPage};
pub use campaign::{
    AccountAds, AdAccount, AdAccountList, AdFile, Campaign, CampaignList, CampaignSequence,
    PlayUpload, SequenceEntry, UploadType,
};
pub use envelope::Envelope;
pub use relay::RelayMessage;
pub use screen::{Organization, Screen, ScreenCity, ScreenLayout, ScreenList};
