use dioxus::prelude::*;
use signage_types::{Screen, ScreenCity};

use crate::activity::Pagination;
use crate::ui::components::{Layout, NavSelect, Pager, SelectOption};

#[derive(Props, Clone, PartialEq)]
pub struct ScreensPageProps {
    pub screens: Vec<Screen>,
    pub cities: Vec<ScreenCity>,
    /// Active city filter, empty for all
    pub city: String,
    pub pagination: Pagination,
}

#[component]
pub fn ScreensPage(props: ScreensPageProps) -> Element {
    let mut cities = vec![SelectOption::new("", "All cities")];
    cities.extend(
        props
            .cities
            .iter()
            .map(|c| SelectOption::new(c.city.clone(), c.city.clone())),
    );
    let query = if props.city.is_empty() {
        Vec::new()
    } else {
        vec![("city".to_string(), props.city.clone())]
    };

    rsx! {
        Layout {
            title: "Screens".to_string(),
            nav_active: "screens".to_string(),

            div { class: "toolbar",
                h2 { "Screens" }
                NavSelect {
                    id: "city-select".to_string(),
                    label: "City".to_string(),
                    options: cities,
                    selected: props.city.clone(),
                    param: Some("city".to_string()),
                }
            }
            if props.screens.is_empty() {
                p { "No screens" }
            } else {
                figure {
                    table { class: "striped",
                        thead {
                            tr {
                                th { "Screen" }
                                th { "City" }
                                th { "Status" }
                                th {}
                            }
                        }
                        tbody {
                            for screen in props.screens.iter() {
                                ScreenRow { key: "{screen.reference}", screen: screen.clone() }
                            }
                        }
                    }
                }
            }
            Pager { pagination: props.pagination, path: "/screens".to_string(), query }
        }
    }
}

#[component]
fn ScreenRow(screen: Screen) -> Element {
    let name = screen
        .display_name
        .clone()
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| screen.screen_name.clone());
    let segment = urlencoding::encode(&screen.reference);

    rsx! {
        tr {
            td {
                strong { "{name}" }
                br {}
                small { "{screen.screen_name}" }
            }
            td { {screen.city.clone().unwrap_or_default()} }
            td {
                if screen.is_online {
                    span { class: "status-ok", "Online" }
                } else {
                    span { class: "status-err", "Offline" }
                }
            }
            td {
                a { href: "/campaign/campaign-schedule/{segment}", "Schedule" }
                " · "
                a { href: "/device-log/{segment}", "Activity" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_document;

    #[test]
    fn test_rows_link_with_encoded_reference() {
        let html = render_document(
            ScreensPage,
            ScreensPageProps {
                screens: vec![Screen {
                    reference: "Mall A/1".to_string(),
                    screen_name: "Atrium".to_string(),
                    is_online: true,
                    ..Default::default()
                }],
                cities: vec![],
                city: String::new(),
                pagination: Pagination::new(1, 1),
            },
        );

        assert!(html.contains("/campaign/campaign-schedule/Mall%20A%2F1"));
        assert!(html.contains("/device-log/Mall%20A%2F1"));
        assert!(html.contains("Online"));
    }

    #[test]
    fn test_empty_listing() {
        let html = render_document(
            ScreensPage,
            ScreensPageProps {
                screens: vec![],
                cities: vec![],
                city: String::new(),
                pagination: Pagination::new(1, 0),
            },
        );
        assert!(html.contains("No screens"));
    }
}
