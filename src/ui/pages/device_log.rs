//! Device activity log page.

use chrono::NaiveDateTime;
use dioxus::prelude::*;
use signage_types::{AdAccount, Screen};

use crate::activity::{parse_play_at, relative_time, LogGroup, Pagination};
use crate::ui::components::{Layout, NavSelect, Pager, SelectOption};

const DEVICE_LOG_SCRIPT: &str = r#"
document.getElementById('export-csv').addEventListener('click', (event) => {
    if (!event.currentTarget.dataset.screen) {
        toast('Please select a screen!', 'error');
    }
});
"#;

#[derive(Props, Clone, PartialEq)]
pub struct DeviceLogPageProps {
    pub screens: Vec<Screen>,
    /// Ad accounts scheduled on the selected screen
    pub ad_accounts: Vec<AdAccount>,
    pub screen_id: String,
    /// Selected ad account filter, empty for all
    pub account: String,
    /// Selected day, `YYYY-MM-DD`
    pub date: String,
    /// Page size carried over to pagination links
    pub size: u32,
    pub groups: Vec<LogGroup>,
    pub pagination: Pagination,
    /// Reference point for "N minutes ago" labels
    pub now: NaiveDateTime,
}

#[component]
pub fn DeviceLogPage(props: DeviceLogPageProps) -> Element {
    let screens: Vec<SelectOption> = props
        .screens
        .iter()
        .map(|s| SelectOption::new(s.reference.clone(), s.screen_name.clone()))
        .collect();
    let accounts: Vec<SelectOption> = props
        .ad_accounts
        .iter()
        .map(|a| SelectOption::new(a.reference.clone(), a.name.clone()))
        .collect();
    let query: Vec<(String, String)> = [
        ("account", props.account.clone()),
        ("date", props.date.clone()),
        ("size", props.size.to_string()),
    ]
    .into_iter()
    .filter(|(_, v)| !v.is_empty())
    .map(|(k, v)| (k.to_string(), v))
    .collect();
    let heading = if props.groups.is_empty() {
        "No activity history"
    } else {
        "Activities"
    };

    rsx! {
        Layout {
            title: "Device Activity".to_string(),
            nav_active: "screens".to_string(),
            scripts: Some(DEVICE_LOG_SCRIPT.to_string()),

            h2 { "Device activity" }
            div { class: "grid",
                NavSelect {
                    id: "screen-select".to_string(),
                    label: "Select Screen".to_string(),
                    options: screens,
                    selected: props.screen_id.clone(),
                    navigate: Some("/device-log/".to_string()),
                }
                NavSelect {
                    id: "ad-account-select".to_string(),
                    label: "Select Ad Account".to_string(),
                    options: accounts,
                    selected: props.account.clone(),
                    param: Some("account".to_string()),
                }
                label { r#for: "day-select",
                    "Select Day"
                    input {
                        id: "day-select",
                        r#type: "date",
                        value: "{props.date}",
                        "data-param": "date",
                    }
                }
            }
            button {
                id: "export-csv",
                "data-screen": "{props.screen_id}",
                "Export as CSV"
            }
            article {
                header { strong { "{heading}" } }
                div { class: "activity",
                    for group in props.groups.iter() {
                        section { key: "{group.date}",
                            h6 { "{group.date}" }
                            ul {
                                for (index, log) in group.logs.iter().enumerate() {
                                    li { key: "{index}",
                                        strong { "{log.upload_name}" }
                                        br {}
                                        small { {play_label(&log.play_at, props.now)} }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Pager {
                pagination: props.pagination,
                path: format!("/device-log/{}", urlencoding::encode(&props.screen_id)),
                query,
            }
        }
    }
}

/// `2024-03-02 10:00:00 (3 hours ago)`; unparseable timestamps are shown as-is.
fn play_label(play_at: &str, now: NaiveDateTime) -> String {
    match parse_play_at(play_at) {
        Some(at) => format!("{} ({})", play_at, relative_time(at, now)),
        None => play_at.to_string(),
    }
}
