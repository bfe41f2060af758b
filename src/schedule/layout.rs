//! Screen layout references and their split/orientation configuration.

use serde::Serialize;

/// Split and orientation of a predefined screen layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutConfig {
    /// 16:9 when true, 9:16 otherwise
    pub landscape: bool,
    /// Regions side by side (columns) when true, stacked (rows) otherwise
    pub horizontal: bool,
    /// Percentage share of each region; empty means a single full region
    pub split: Vec<u32>,
}

/// Known layout references. Anything else falls back to a single landscape region.
const LAYOUTS: &[(&str, bool, bool, &[u32])] = &[
    ("VBSGTREW43", true, false, &[]),
    ("JHSFER2763", true, true, &[80, 20]),
    ("HDGTW5763", false, false, &[]),
    ("SGDRWT5247", true, true, &[50, 50]),
    ("KJUYTE4352", false, false, &[80, 20]),
    ("SGHY5438JH", false, false, &[50, 50]),
];

impl LayoutConfig {
    pub fn for_reference(reference: &str) -> Self {
        LAYOUTS
            .iter()
            .find(|(r, ..)| *r == reference)
            .map(|(_, landscape, horizontal, split)| LayoutConfig {
                landscape: *landscape,
                horizontal: *horizontal,
                split: split.to_vec(),
            })
            .unwrap_or_else(Self::full_landscape)
    }

    fn full_landscape() -> Self {
        LayoutConfig {
            landscape: true,
            horizontal: false,
            split: Vec::new(),
        }
    }

    pub fn is_known(reference: &str) -> bool {
        LAYOUTS.iter().any(|(r, ..)| *r == reference)
    }

    /// Number of playback regions on the screen.
    pub fn region_count(&self) -> usize {
        self.split.len().max(1)
    }

    /// CSS grid track list, e.g. `0.8fr 0.2fr`.
    pub fn grid_tracks(&self) -> String {
        if self.split.is_empty() {
            return "1fr".to_string();
        }
        self.split
            .iter()
            .map(|share| format!("{}fr", f64::from(*share) / 100.0))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn grid_axis(&self) -> &'static str {
        if self.horizontal {
            "grid-template-columns"
        } else {
            "grid-template-rows"
        }
    }

    fn aspect_ratio(&self) -> &'static str {
        if self.landscape {
            "16/9"
        } else {
            "9/16"
        }
    }

    /// Inline style of the full-size preview screen.
    pub fn screen_style(&self) -> String {
        let size = if self.landscape {
            "width:80vw;height:auto;"
        } else {
            "width:auto;height:70vh;"
        };
        format!(
            "display:grid;overflow:hidden;{}:{};aspect-ratio:{};{}background:#000;",
            self.grid_axis(),
            self.grid_tracks(),
            self.aspect_ratio(),
            size
        )
    }

    /// Inline style of the small layout diagram on the schedule page.
    pub fn thumbnail_style(&self) -> String {
        format!(
            "display:grid;gap:4px;{}:{};aspect-ratio:{};{}",
            self.grid_axis(),
            self.grid_tracks(),
            self.aspect_ratio(),
            if self.landscape {
                "width:200px;"
            } else {
                "height:200px;"
            }
        )
    }
}
