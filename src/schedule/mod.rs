//! Campaign scheduling helpers: sequence ordering, screen layouts and the
//! playback preview.

pub mod layout;
pub mod playback;
pub mod sequence;

pub use layout::LayoutConfig;
pub use playback::{
    cursor_ticks, dwell_plan, group_by_layout_view, parse_dwell_plan, preview_ticks, PlanError,
    PlaybackCursor, PlaybackTick, PreviewView,
};
pub use sequence::{join_references, parse_references, reorder, SequenceError};
