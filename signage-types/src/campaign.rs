//! Ad accounts, uploaded ads, campaigns and the per-screen campaign sequence.

use serde::{Deserialize, Serialize};

/// Kind of an uploaded ad asset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UploadType {
    Image,
    Video,
    /// HTML snippet rendered inside an iframe
    Html,
    #[default]
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for UploadType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Video => write!(f, "video"),
            Self::Html => write!(f, "html"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A logical grouping of uploaded ad assets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdAccount {
    pub reference: String,

    #[serde(default)]
    pub name: String,
}

/// Ad account listing (`GET /ads-account`, `GET /ads-account/screen/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdAccountList {
    #[serde(default)]
    pub list: Vec<AdAccount>,
}

/// An uploaded ad file as listed on the ad account page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdFile {
    pub reference: String,

    #[serde(default)]
    pub name: String,

    #[serde(default, rename = "type")]
    pub kind: UploadType,

    #[serde(default)]
    pub url: String,
}

/// Ads of one account (`GET /ads/account/{id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AccountAds {
    #[serde(default)]
    pub ads_upload: Vec<AdFile>,
}

/// One ad account slot in a screen's campaign sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SequenceEntry {
    #[serde(default, deserialize_with = "crate::lenient::opt_u64_from_any")]
    pub id: Option<u64>,

    /// Ad account reference; the saved order is a comma-joined list of these
    pub reference: String,

    #[serde(default)]
    pub name: String,
}

/// Campaign sequence of a screen (`GET /ads-account/sequence/{screen_id}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CampaignSequence {
    #[serde(default)]
    pub list: Vec<SequenceEntry>,
}

/// A file played by a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlayUpload {
    pub reference: String,

    #[serde(default)]
    pub upload_type: UploadType,

    /// Asset URL (image/video) or HTML content
    #[serde(default)]
    pub upload_file: String,

    #[serde(default)]
    pub upload_name: String,

    /// Seconds on screen; copied from the parent campaign's `playDuration`
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::lenient::opt_u64_from_any"
    )]
    pub duration: Option<u64>,
}

/// A campaign attached to an ad account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default)]
    pub reference: Option<String>,

    #[serde(default)]
    pub name: Option<String>,

    /// `1` selects the primary region of a split layout; anything else the secondary
    #[serde(default, deserialize_with = "crate::lenient::u64_from_any")]
    pub layout_view: u64,

    /// Seconds each upload stays on screen
    #[serde(default, deserialize_with = "crate::lenient::u64_from_any")]
    pub play_duration: u64,

    #[serde(default)]
    pub play_uploads: Vec<PlayUpload>,
}

/// Campaigns of an ad account (`GET /campaign/ads-account/{reference}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CampaignList {
    #[serde(default)]
    pub list: Vec<Campaign>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_type_unknown_fallback() {
        let kinds: Vec<UploadType> =
            serde_json::from_str(r#"["image","video","html","gif"]"#).unwrap();
        assert_eq!(
            kinds,
            vec![
                UploadType::Image,
                UploadType::Video,
                UploadType::Html,
                UploadType::Unknown
            ]
        );
        assert_eq!(UploadType::Html.to_string(), "html");
    }

    #[test]
    fn test_campaign_deserialization() {
        let json = r#"{
            "layoutView": "1",
            "playDuration": 15,
            "playUploads": [
                {"reference": "u1", "uploadType": "video", "uploadFile": "https://cdn/x.mp4", "uploadName": "x"}
            ]
        }"#;

        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.layout_view, 1);
        assert_eq!(campaign.play_duration, 15);
        assert_eq!(campaign.play_uploads.len(), 1);
        assert_eq!(campaign.play_uploads[0].upload_type, UploadType::Video);
        assert_eq!(campaign.play_uploads[0].duration, None);
    }

    #[test]
    fn test_campaign_without_uploads() {
        let campaign: Campaign = serde_json::from_str(r#"{"layoutView": 2}"#).unwrap();
        assert!(campaign.play_uploads.is_empty());
        assert_eq!(campaign.play_duration, 0);
    }

    #[test]
    fn test_ad_file_type_field() {
        let ads: AccountAds = serde_json::from_str(
            r#"{"adsUpload":[{"reference":"a","name":"Promo","type":"html","url":"<p>hi</p>"}]}"#,
        )
        .unwrap();
        assert_eq!(ads.ads_upload[0].kind, UploadType::Html);
    }
}
