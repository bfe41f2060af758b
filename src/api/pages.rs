//! Server-rendered page handlers.
//!
//! Each page fetches everything it shows from the backend concurrently,
//! then renders once. A rejected token redirects to the login page, any
//! other failure renders the not-found page.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use serde::Deserialize;
use tracing::warn;

use crate::activity::{group_logs_by_date, Pagination};
use crate::api::AppState;
use crate::backend::DeviceLogQuery;
use crate::error::PageError;
use crate::session::Session;
use crate::ui::{self, pages::*};

/// Screens shown per page of the screen listing.
const SCREENS_PAGE_SIZE: u64 = 25;

pub async fn organizations(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, PageError> {
    let organizations = state
        .backend
        .organizations(&session.token)
        .await
        .inspect_err(|e| warn!(error = %e, "Failed to load organizations"))?;

    Ok(Html(ui::render_document(
        OrganizationsPage,
        OrganizationsPageProps { organizations },
    )))
}

#[derive(Debug, Deserialize)]
pub struct ScreensParams {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    page: Option<u64>,
}

pub async fn screens(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<ScreensParams>,
) -> Result<Html<String>, PageError> {
    let city = params.city.unwrap_or_default();
    let page = params.page.unwrap_or(1).max(1);

    let mut query = vec![
        ("page", page.to_string()),
        ("size", SCREENS_PAGE_SIZE.to_string()),
    ];
    if !city.is_empty() {
        query.push(("city", city.clone()));
    }

    let (list, cities) = tokio::try_join!(
        state.backend.screens(&session.token, &query),
        state.backend.screen_cities(&session.token),
    )
    .inspect_err(|e| warn!(error = %e, "Failed to load screens"))?;

    let pagination = Pagination::new(
        list.current_page.unwrap_or(page),
        list.total_rows
            .map(|rows| rows.div_ceil(SCREENS_PAGE_SIZE))
            .unwrap_or(0),
    );

    Ok(Html(ui::render_document(
        ScreensPage,
        ScreensPageProps {
            screens: list.screen,
            cities,
            city,
            pagination,
        },
    )))
}

pub async fn campaign_schedule(
    State(state): State<AppState>,
    session: Session,
    Path(screen_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let token = session.token.as_str();
    let (screens, screen, layouts, sequence) = tokio::try_join!(
        state.backend.screens(token, &[]),
        state.backend.screen(token, &screen_id),
        state.backend.screen_layouts(token),
        state.backend.campaign_sequence(token, &screen_id),
    )
    .inspect_err(|e| warn!(%screen_id, error = %e, "Failed to load campaign schedule"))?;

    let layout_name = layouts
        .into_iter()
        .find(|l| l.reference == screen.layout_reference)
        .map(|l| l.name)
        .filter(|n| !n.is_empty());

    Ok(Html(ui::render_document(
        CampaignSchedulePage,
        CampaignSchedulePageProps {
            screens: screens.screen,
            screen,
            layout_name,
            sequence: sequence.list,
        },
    )))
}

#[derive(Debug, Deserialize)]
pub struct DeviceLogParams {
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    page: Option<u32>,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    account: Option<String>,
}

pub async fn device_log(
    State(state): State<AppState>,
    session: Session,
    Path(screen_id): Path<String>,
    Query(params): Query<DeviceLogParams>,
) -> Result<Html<String>, PageError> {
    let query = DeviceLogQuery {
        page: params.page.unwrap_or(1),
        size: params
            .size
            .filter(|s| *s > 0)
            .unwrap_or(state.config.device_log.page_size),
        account: params.account.clone(),
        date: params.date.clone(),
    };

    let token = session.token.as_str();
    let (screens, ad_accounts, logs) = tokio::try_join!(
        state.backend.screens(token, &[]),
        state.backend.screen_ad_accounts(token, &screen_id),
        state.backend.device_logs(token, &screen_id, &query),
    )
    .inspect_err(|e| warn!(%screen_id, error = %e, "Failed to load device logs"))?;

    Ok(Html(ui::render_document(
        DeviceLogPage,
        DeviceLogPageProps {
            screens: screens.screen,
            ad_accounts: ad_accounts.list,
            screen_id,
            account: params.account.unwrap_or_default(),
            date: params.date.unwrap_or_default(),
            size: query.size,
            groups: group_logs_by_date(&logs.list),
            pagination: Pagination::from_page(&logs),
            now: chrono::Local::now().naive_local(),
        },
    )))
}

pub async fn ad_account(
    State(state): State<AppState>,
    session: Session,
    Path(ad_account_id): Path<String>,
) -> Result<Html<String>, PageError> {
    let token = session.token.as_str();
    let (ad_accounts, account, ads) = tokio::try_join!(
        state.backend.ad_accounts(token),
        state.backend.ad_account(token, &ad_account_id),
        state.backend.account_ads(token, &ad_account_id),
    )
    .inspect_err(|e| warn!(%ad_account_id, error = %e, "Failed to load ad account"))?;

    Ok(Html(ui::render_document(
        AdAccountPage,
        AdAccountPageProps {
            ad_accounts: ad_accounts.list,
            account,
            ads: ads.ads_upload,
        },
    )))
}

pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(ui::render_static(NotFoundPage)),
    )
}
