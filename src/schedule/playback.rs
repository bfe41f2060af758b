//! Playback preview
//!
//! Campaigns of every ad account in a screen's sequence are split into two
//! views by their `layoutView` flag. Each view loops over its files, holding
//! each one for its campaign's `playDuration`.

use std::time::Duration;

use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;
use signage_types::{Campaign, PlayUpload};
use thiserror::Error;

/// Shortest time a file stays on screen; zero-length durations use this.
pub const MIN_DWELL: Duration = Duration::from_secs(1);

/// Flattened playlist of one screen region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreviewView {
    pub uploads: Vec<PlayUpload>,
}

/// Split campaigns into `[layoutView == 1, everything else]`, copying each
/// campaign's `playDuration` onto its files, then flatten each bucket in order.
pub fn group_by_layout_view(campaigns: Vec<Campaign>) -> [PreviewView; 2] {
    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    for campaign in campaigns {
        let duration = campaign.play_duration;
        let bucket = if campaign.layout_view == 1 {
            &mut primary
        } else {
            &mut secondary
        };
        bucket.extend(campaign.play_uploads.into_iter().map(|mut upload| {
            upload.duration = Some(duration);
            upload
        }));
    }

    [
        PreviewView { uploads: primary },
        PreviewView { uploads: secondary },
    ]
}

/// Current position in one view's loop.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackCursor {
    dwell: Vec<Duration>,
    index: usize,
}

impl PlaybackCursor {
    pub fn new(uploads: &[PlayUpload]) -> Self {
        Self::from_secs(uploads.iter().map(|u| u.duration.unwrap_or(0)))
    }

    /// Cursor over files shown for the given number of seconds each.
    pub fn from_secs(secs: impl IntoIterator<Item = u64>) -> Self {
        let dwell = secs
            .into_iter()
            .map(|s| Duration::from_secs(s).max(MIN_DWELL))
            .collect();
        Self { dwell, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.dwell.is_empty()
    }

    /// How long the current file stays on screen; `None` for an empty view.
    pub fn dwell(&self) -> Option<Duration> {
        self.dwell.get(self.index).copied()
    }

    /// Step to the next file, wrapping to 0 after the last one.
    pub fn advance(&mut self) -> usize {
        if !self.dwell.is_empty() {
            self.index = (self.index + 1) % self.dwell.len();
        }
        self.index
    }
}

/// Emitted when a view moves on to another file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlaybackTick {
    pub view: usize,
    pub index: usize,
}

/// Endless ticks for one view; ends immediately when the view has no files.
pub fn view_ticks(view: usize, cursor: PlaybackCursor) -> BoxStream<'static, PlaybackTick> {
    stream::unfold(cursor, move |mut cursor| async move {
        let dwell = cursor.dwell()?;
        tokio::time::sleep(dwell).await;
        let index = cursor.advance();
        Some((PlaybackTick { view, index }, cursor))
    })
    .boxed()
}

/// Ticks of every view merged into one stream.
pub fn preview_ticks(views: &[PreviewView]) -> BoxStream<'static, PlaybackTick> {
    cursor_ticks(views.iter().map(|v| PlaybackCursor::new(&v.uploads)).collect())
}

/// Ticks of one cursor per view, merged into one stream.
pub fn cursor_ticks(cursors: Vec<PlaybackCursor>) -> BoxStream<'static, PlaybackTick> {
    stream::select_all(
        cursors
            .into_iter()
            .enumerate()
            .map(|(view, cursor)| view_ticks(view, cursor)),
    )
    .boxed()
}

/// Most views a dwell plan may describe.
const MAX_PLAN_VIEWS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Preview plan has more than two views")]
    TooManyViews,

    #[error("Invalid duration {0:?} in preview plan")]
    InvalidDuration(String),
}

/// Seconds each file stays on screen, views separated by `;`: `5,5,3;2`.
///
/// The preview dialog sends this back when it opens the tick stream, so the
/// ticks follow exactly the playlist it rendered.
pub fn dwell_plan(views: &[PreviewView]) -> String {
    views
        .iter()
        .map(|v| {
            v.uploads
                .iter()
                .map(|u| u.duration.unwrap_or(0).to_string())
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Parse a [`dwell_plan`] string into one cursor per view.
pub fn parse_dwell_plan(raw: &str) -> Result<Vec<PlaybackCursor>, PlanError> {
    let views: Vec<&str> = raw.split(';').collect();
    if views.len() > MAX_PLAN_VIEWS {
        return Err(PlanError::TooManyViews);
    }

    views
        .into_iter()
        .map(|view| {
            let view = view.trim();
            if view.is_empty() {
                return Ok(PlaybackCursor::from_secs(Vec::new()));
            }
            let secs = view
                .split(',')
                .map(|s| {
                    s.trim()
                        .parse::<u64>()
                        .map_err(|_| PlanError::InvalidDuration(s.to_string()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(PlaybackCursor::from_secs(secs))
        })
        .collect()
}
