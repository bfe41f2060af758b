//! Typed calls for each backend resource the dashboard reads or mutates.

use serde_json::{json, Value};
use signage_types::{
    AccountAds, AdAccount, AdAccountList, CampaignList, CampaignSequence, DeviceLogPage, Envelope,
    Organization, Screen, ScreenCity, ScreenLayout, ScreenList,
};

use super::{BackendClient, BackendError};

/// Filters for one page of device logs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeviceLogQuery {
    pub page: u32,
    pub size: u32,
    /// Ad account reference filter
    pub account: Option<String>,
    /// Day filter, `YYYY-MM-DD`
    pub date: Option<String>,
}

impl DeviceLogQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("size", self.size.to_string()),
        ];
        if let Some(account) = self.account.as_ref().filter(|a| !a.is_empty()) {
            params.push(("accountRef", account.clone()));
        }
        if let Some(date) = self.date.as_ref().filter(|d| !d.is_empty()) {
            params.push(("dateSelected", date.clone()));
        }
        params
    }
}

impl BackendClient {
    pub async fn organizations(&self, token: &str) -> Result<Vec<Organization>, BackendError> {
        self.get(token, "/organization", &[]).await
    }

    pub async fn screens(
        &self,
        token: &str,
        params: &[(&str, String)],
    ) -> Result<ScreenList, BackendError> {
        self.get(token, "/screen", params).await
    }

    pub async fn screen(&self, token: &str, screen_id: &str) -> Result<Screen, BackendError> {
        self.get(token, &format!("/screen/{}", urlencoding::encode(screen_id)), &[])
            .await
    }

    pub async fn screen_cities(&self, token: &str) -> Result<Vec<ScreenCity>, BackendError> {
        self.get(token, "/screen/city/all", &[]).await
    }

    pub async fn screen_layouts(&self, token: &str) -> Result<Vec<ScreenLayout>, BackendError> {
        self.get(token, "/screen/layout/all", &[]).await
    }

    pub async fn ad_accounts(&self, token: &str) -> Result<AdAccountList, BackendError> {
        self.get(token, "/ads-account", &[]).await
    }

    pub async fn ad_account(&self, token: &str, account_id: &str) -> Result<AdAccount, BackendError> {
        self.get(
            token,
            &format!("/ads-account/{}", urlencoding::encode(account_id)),
            &[],
        )
        .await
    }

    pub async fn screen_ad_accounts(
        &self,
        token: &str,
        screen_id: &str,
    ) -> Result<AdAccountList, BackendError> {
        self.get(
            token,
            &format!("/ads-account/screen/{}", urlencoding::encode(screen_id)),
            &[],
        )
        .await
    }

    pub async fn account_ads(&self, token: &str, account_id: &str) -> Result<AccountAds, BackendError> {
        self.get(
            token,
            &format!("/ads/account/{}", urlencoding::encode(account_id)),
            &[],
        )
        .await
    }

    pub async fn campaign_sequence(
        &self,
        token: &str,
        screen_id: &str,
    ) -> Result<CampaignSequence, BackendError> {
        self.get(
            token,
            &format!("/ads-account/sequence/{}", urlencoding::encode(screen_id)),
            &[],
        )
        .await
    }

    /// Save a screen's sequence; `reorder` is the comma-joined list of account references.
    pub async fn set_campaign_sequence(
        &self,
        token: &str,
        screen_id: &str,
        reorder: &str,
    ) -> Result<Envelope<Value>, BackendError> {
        self.post_envelope(
            token,
            &format!("/ads-account/sequence/{}", urlencoding::encode(screen_id)),
            &json!({ "reorder": reorder }),
        )
        .await
    }

    pub async fn account_campaigns(
        &self,
        token: &str,
        account_ref: &str,
    ) -> Result<CampaignList, BackendError> {
        self.get(
            token,
            &format!("/campaign/ads-account/{}", urlencoding::encode(account_ref)),
            &[],
        )
        .await
    }

    /// Computed playlist for a device, forwarded verbatim to the relay.
    pub async fn device_campaign_payload(
        &self,
        token: &str,
        device_id: &str,
    ) -> Result<Value, BackendError> {
        self.post(token, "/campaign/device-data", &json!({ "reference": device_id }))
            .await
    }

    pub async fn device_logs(
        &self,
        token: &str,
        screen_id: &str,
        query: &DeviceLogQuery,
    ) -> Result<DeviceLogPage, BackendError> {
        self.get(
            token,
            &format!("/activity/device-log/{}", urlencoding::encode(screen_id)),
            &query.to_params(),
        )
        .await
    }
}
