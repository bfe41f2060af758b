//! Campaign schedule routes: saving the order, the playback preview and
//! pushing the playlist to the physical screen.

use axum::extract::{Path, Query, State};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::Redirect;
use axum::{Form, Json};
use futures::future::try_join_all;
use futures::{Stream, StreamExt};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::api::AppState;
use crate::error::{ApiError, PageError};
use crate::schedule::{
    cursor_ticks, dwell_plan, group_by_layout_view, join_references, parse_dwell_plan,
    parse_references, reorder, LayoutConfig, PreviewView,
};
use crate::session::{ApiSession, Session};

#[derive(Debug, Deserialize)]
pub struct ScreenParam {
    screen_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderBody {
    #[serde(default)]
    reorder: String,
}

/// POST /api/admin/ad-account/set-ads-sequence?screen_id=
pub async fn set_sequence(
    State(state): State<AppState>,
    session: ApiSession,
    Query(params): Query<ScreenParam>,
    Json(body): Json<ReorderBody>,
) -> Result<Json<Value>, ApiError> {
    let references =
        parse_references(&body.reorder).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let envelope = state
        .backend
        .set_campaign_sequence(session.token(), &params.screen_id, &references.join(","))
        .await?;

    info!(screen_id = %params.screen_id, accounts = references.len(), "Campaign sequence saved");
    Ok(Json(json!({
        "message": envelope.message.unwrap_or_else(|| "Sequence saved".to_string()),
        "data": envelope.data,
    })))
}

#[derive(Debug, Deserialize)]
pub struct MoveForm {
    from: usize,
    to: usize,
}

/// POST /campaign/campaign-schedule/{screen_id}/move
///
/// Form fallback for reordering: moves one entry and saves immediately.
pub async fn move_entry(
    State(state): State<AppState>,
    session: Session,
    Path(screen_id): Path<String>,
    Form(form): Form<MoveForm>,
) -> Result<Redirect, PageError> {
    let back = format!(
        "/campaign/campaign-schedule/{}",
        urlencoding::encode(&screen_id)
    );
    let sequence = state
        .backend
        .campaign_sequence(&session.token, &screen_id)
        .await?;

    match reorder(&sequence.list, form.from, form.to) {
        Ok(reordered) => {
            state
                .backend
                .set_campaign_sequence(&session.token, &screen_id, &join_references(&reordered))
                .await?;
            info!(%screen_id, from = form.from, to = form.to, "Campaign sequence entry moved");
        }
        // Stale page; show the current order again
        Err(e) => debug!(%screen_id, error = %e, "Ignoring move"),
    }

    Ok(Redirect::to(&back))
}

#[derive(Debug, Deserialize)]
pub struct ReferenceParam {
    reference: String,
}

/// GET /api/admin/campaigns/get-campaign-by-ad-account?reference=
pub async fn campaigns_by_account(
    State(state): State<AppState>,
    session: ApiSession,
    Query(params): Query<ReferenceParam>,
) -> Result<Json<Value>, ApiError> {
    let campaigns = state
        .backend
        .account_campaigns(session.token(), &params.reference)
        .await?;
    Ok(Json(json!({ "data": campaigns })))
}

#[derive(Debug, Deserialize)]
pub struct PreviewParams {
    /// Unsaved order from the page, `a,b,c`; the saved sequence when absent
    #[serde(default)]
    order: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewResponse {
    pub layout: LayoutConfig,
    pub screen_style: String,
    pub views: [PreviewView; 2],
    /// Dwell seconds per view, passed back to the tick stream
    pub plan: String,
}

/// Campaigns of every ad account in order, grouped into the two preview views.
async fn load_views(
    state: &AppState,
    token: &str,
    screen_id: &str,
    order: Option<&str>,
) -> Result<[PreviewView; 2], ApiError> {
    let references = match order.filter(|o| !o.trim().is_empty()) {
        Some(order) => parse_references(order).map_err(|e| ApiError::BadRequest(e.to_string()))?,
        None => state
            .backend
            .campaign_sequence(token, screen_id)
            .await?
            .list
            .into_iter()
            .map(|entry| entry.reference)
            .collect(),
    };

    let lists = try_join_all(
        references
            .iter()
            .map(|reference| state.backend.account_campaigns(token, reference)),
    )
    .await
    .inspect_err(|e| warn!(screen_id, error = %e, "Failed to load campaigns for preview"))?;

    let campaigns = lists.into_iter().flat_map(|l| l.list).collect();
    Ok(group_by_layout_view(campaigns))
}

/// GET /api/admin/campaign-schedule/{screen_id}/preview
pub async fn preview(
    State(state): State<AppState>,
    session: ApiSession,
    Path(screen_id): Path<String>,
    Query(params): Query<PreviewParams>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let token = session.token();
    let (screen, views) = tokio::try_join!(
        async { Ok::<_, ApiError>(state.backend.screen(token, &screen_id).await?) },
        load_views(&state, token, &screen_id, params.order.as_deref()),
    )?;

    let layout = LayoutConfig::for_reference(&screen.layout_reference);
    if !LayoutConfig::is_known(&screen.layout_reference) {
        debug!(%screen_id, layout = %screen.layout_reference, "Unknown layout, previewing full screen");
    }

    Ok(Json(PreviewResponse {
        screen_style: layout.screen_style(),
        layout,
        plan: dwell_plan(&views),
        views,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PreviewEventsParams {
    /// `plan` from the preview response
    #[serde(default)]
    plan: String,
}

/// GET /api/admin/campaign-schedule/{screen_id}/preview/events?plan=
///
/// Emits `{view, index}` whenever a view moves to its next file, timed by the
/// plan the dialog rendered. The timers stop when the client disconnects or
/// the server shuts down.
pub async fn preview_events(
    State(state): State<AppState>,
    _session: ApiSession,
    Path(screen_id): Path<String>,
    Query(params): Query<PreviewEventsParams>,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>>>, ApiError> {
    let cursors =
        parse_dwell_plan(&params.plan).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    debug!(%screen_id, plan = %params.plan, "Preview started");

    let stream = cursor_ticks(cursors)
        .take_until(state.shutdown.clone().cancelled_owned())
        .map(|tick| Event::default().json_data(tick));
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}

#[derive(Debug, Deserialize)]
pub struct SendToDeviceBody {
    /// Device id of the screen
    #[serde(default)]
    reference: String,
}

/// POST /api/admin/campaigns/send-to-device
pub async fn send_to_device(
    State(state): State<AppState>,
    session: ApiSession,
    Json(body): Json<SendToDeviceBody>,
) -> Result<Json<Value>, ApiError> {
    let device_id = body.reference.trim();
    if device_id.is_empty() {
        return Err(ApiError::BadRequest(
            "Screen has no device attached".to_string(),
        ));
    }

    // Held until the send finishes; dropped early on any error below
    let permit = state.relay.reserve(device_id)?;
    let payload = state
        .backend
        .device_campaign_payload(session.token(), device_id)
        .await?;
    permit
        .send(payload)
        .await
        .inspect_err(|e| warn!(device_id, error = %e, "Failed to push campaign to device"))?;

    Ok(Json(json!({ "message": "Campaign's data sent successfully" })))
}
