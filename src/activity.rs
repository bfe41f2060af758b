//! Device activity history: grouping, relative timestamps and pagination.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDateTime};
use signage_types::{DeviceLog, DeviceLogPage};

/// Logs sharing the same calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct LogGroup {
    pub date: String,
    pub logs: Vec<DeviceLog>,
}

/// Day part of a `YYYY-MM-DD HH:MM:SS` timestamp (everything before the first space).
pub fn date_key(play_at: &str) -> &str {
    play_at.split(' ').next().unwrap_or(play_at)
}

/// Partition logs into day buckets, in order of each day's first appearance.
pub fn group_logs_by_date(logs: &[DeviceLog]) -> Vec<LogGroup> {
    let mut groups: Vec<LogGroup> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for log in logs {
        let date = date_key(&log.play_at);
        match positions.get(date) {
            Some(&i) => groups[i].logs.push(log.clone()),
            None => {
                positions.insert(date, groups.len());
                groups.push(LogGroup {
                    date: date.to_string(),
                    logs: vec![log.clone()],
                });
            }
        }
    }

    groups
}

/// Parse a backend timestamp (`YYYY-MM-DD HH:MM:SS`, with RFC 3339 as a fallback).
pub fn parse_play_at(play_at: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(play_at.trim(), "%Y-%m-%d %H:%M:%S")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(play_at.trim())
                .ok()
                .map(|dt| dt.naive_local())
        })
}

const UNITS: &[(&str, i64)] = &[
    ("year", 60 * 60 * 24 * 365),
    ("month", 60 * 60 * 24 * 30),
    ("week", 60 * 60 * 24 * 7),
    ("day", 60 * 60 * 24),
    ("hour", 60 * 60),
    ("minute", 60),
    ("second", 1),
];

/// Human label for `at` relative to `now`: "3 hours ago", "yesterday",
/// "in 2 days", "now".
///
/// The amount is floored in the largest unit that fits, so 90 minutes ago
/// reads "2 hours ago".
pub fn relative_time(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let diff = (at - now).num_seconds();

    UNITS
        .iter()
        .find(|(_, secs)| diff.abs() >= *secs)
        .map(|(unit, secs)| unit_label(diff.div_euclid(*secs), unit))
        .unwrap_or_else(|| "now".to_string())
}

fn unit_label(amount: i64, unit: &str) -> String {
    match (amount, unit) {
        (-1, "day") => "yesterday".to_string(),
        (1, "day") => "tomorrow".to_string(),
        (-1, "week" | "month" | "year") => format!("last {unit}"),
        (1, "week" | "month" | "year") => format!("next {unit}"),
        _ => {
            let count = amount.unsigned_abs();
            let plural = if count == 1 { "" } else { "s" };
            if amount < 0 {
                format!("{count} {unit}{plural} ago")
            } else {
                format!("in {count} {unit}{plural}")
            }
        }
    }
}

/// Page count and current page of a device log listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current: u64,
    pub total_pages: u64,
}

impl Pagination {
    /// `current` is clamped into `1..=total_pages`, so a page number past the
    /// end still shows links back.
    pub fn new(current: u64, total_pages: u64) -> Self {
        Self {
            current: current.clamp(1, total_pages.max(1)),
            total_pages,
        }
    }

    pub fn from_page(page: &DeviceLogPage) -> Self {
        let total_pages = if page.rows_per_page == 0 {
            0
        } else {
            page.total_rows.div_ceil(page.rows_per_page)
        };
        Self::new(page.current_page, total_pages)
    }

    /// Page numbers to link, at most `siblings` on each side of the current page.
    pub fn window(&self, siblings: u64) -> Vec<u64> {
        if self.total_pages == 0 {
            return Vec::new();
        }
        let current = self.current.clamp(1, self.total_pages);
        let start = current.saturating_sub(siblings).max(1);
        let end = current.saturating_add(siblings).min(self.total_pages);
        (start..=end).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(play_at: &str, name: &str) -> DeviceLog {
        DeviceLog {
            play_at: play_at.to_string(),
            upload_name: name.to_string(),
            account_ref: None,
        }
    }

    fn at(s: &str) -> NaiveDateTime {
        parse_play_at(s).unwrap()
    }

    #[test]
    fn test_group_logs_by_date_partitions_without_loss() {
        let logs = vec![
            log("2024-03-02 09:00:00", "a"),
            log("2024-03-01 23:59:59", "b"),
            log("2024-03-02 08:00:00", "c"),
            log("2024-03-01 00:00:01", "d"),
            log("2024-02-28 12:00:00", "e"),
        ];

        let groups = group_logs_by_date(&logs);
        let dates: Vec<&str> = groups.iter().map(|g| g.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-02", "2024-03-01", "2024-02-28"]);

        let total: usize = groups.iter().map(|g| g.logs.len()).sum();
        assert_eq!(total, logs.len());

        for group in &groups {
            assert!(group.logs.iter().all(|l| date_key(&l.play_at) == group.date));
        }

        let mut names: Vec<&str> = groups
            .iter()
            .flat_map(|g| g.logs.iter().map(|l| l.upload_name.as_str()))
            .collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        // Within a day, logs keep their original order
        assert_eq!(groups[0].logs[0].upload_name, "a");
        assert_eq!(groups[0].logs[1].upload_name, "c");
    }

    #[test]
    fn test_group_logs_empty() {
        assert!(group_logs_by_date(&[]).is_empty());
    }

    #[test]
    fn test_date_key_without_time() {
        assert_eq!(date_key("2024-03-02"), "2024-03-02");
        assert_eq!(date_key(""), "");
    }

    #[test]
    fn test_relative_time_labels() {
        let now = at("2024-03-02 12:00:00");
        assert_eq!(relative_time(at("2024-03-02 12:00:00"), now), "now");
        assert_eq!(relative_time(at("2024-03-02 11:59:30"), now), "30 seconds ago");
        assert_eq!(relative_time(at("2024-03-02 11:00:00"), now), "1 hour ago");
        assert_eq!(relative_time(at("2024-02-29 12:00:00"), now), "2 days ago");
        assert_eq!(relative_time(at("2024-03-02 12:05:00"), now), "in 5 minutes");
    }

    #[test]
    fn test_relative_time_floors_and_names_adjacent_units() {
        let now = at("2024-03-02 12:00:00");
        // 90 minutes ago floors to -2 hours
        assert_eq!(relative_time(at("2024-03-02 10:30:00"), now), "2 hours ago");
        assert_eq!(relative_time(at("2024-03-02 11:58:59"), now), "2 minutes ago");
        // Future amounts floor toward zero
        assert_eq!(relative_time(at("2024-03-02 13:30:00"), now), "in 1 hour");
        assert_eq!(relative_time(at("2024-03-01 12:00:00"), now), "yesterday");
        assert_eq!(relative_time(at("2024-03-03 12:00:00"), now), "tomorrow");
        assert_eq!(relative_time(at("2024-02-24 12:00:00"), now), "last week");
        assert_eq!(relative_time(at("2024-03-16 12:00:00"), now), "in 2 weeks");
    }

    #[test]
    fn test_parse_play_at_rfc3339_fallback() {
        assert!(parse_play_at("2024-03-02T10:00:00Z").is_some());
        assert!(parse_play_at("yesterday").is_none());
    }

    #[test]
    fn test_pagination() {
        let page = DeviceLogPage {
            list: vec![],
            total_rows: 51,
            rows_per_page: 25,
            current_page: 2,
        };
        let pagination = Pagination::from_page(&page);
        assert_eq!(pagination.total_pages, 3);
        assert_eq!(pagination.window(4), vec![1, 2, 3]);

        let empty = Pagination::from_page(&DeviceLogPage::default());
        assert_eq!(empty.total_pages, 0);
        assert!(empty.window(4).is_empty());
    }

    #[test]
    fn test_pagination_past_the_end_clamps() {
        let huge = Pagination::new(u64::MAX, 3);
        assert_eq!(huge.current, 3);
        assert_eq!(huge.window(4), vec![1, 2, 3]);

        let zero = Pagination::new(0, 3);
        assert_eq!(zero.current, 1);

        // Built directly, the window still neither overflows nor empties
        let raw = Pagination {
            current: u64::MAX,
            total_pages: 2,
        };
        assert_eq!(raw.window(4), vec![1, 2]);
    }
}
