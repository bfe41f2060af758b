//! Page-number links for paginated listings.

use dioxus::prelude::*;

use crate::activity::Pagination;
use crate::ui::href_with_query;

#[derive(Props, Clone, PartialEq)]
pub struct PagerProps {
    pub pagination: Pagination,
    /// Path the links point at
    pub path: String,
    /// Query parameters carried over to every link, besides `page`
    #[props(default)]
    pub query: Vec<(String, String)>,
    #[props(default = 4)]
    pub siblings: u64,
}

#[component]
pub fn Pager(props: PagerProps) -> Element {
    let pages = props.pagination.window(props.siblings);
    if pages.len() < 2 {
        return rsx! {};
    }

    let link = |page: u64| {
        let page = page.to_string();
        let mut params: Vec<(&str, &str)> = props
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        params.push(("page", page.as_str()));
        href_with_query(&props.path, &params)
    };

    let current = props.pagination.current;
    let last = props.pagination.total_pages;

    rsx! {
        nav { class: "pagination",
            if current > 1 {
                a { href: link(current - 1), "« Previous" }
            }
            for page in pages {
                a {
                    key: "{page}",
                    href: link(page),
                    "aria-current": if page == current { Some("page") } else { None },
                    "{page}"
                }
            }
            if current < last {
                a { href: link(current + 1), "Next »" }
            }
        }
    }
}
