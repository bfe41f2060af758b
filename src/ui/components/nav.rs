//! Navigation bar.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "screens", "organizations")
    pub active: String,
}

const LINKS: &[(&str, &str, &str)] = &[
    ("screens", "/screens", "Screens"),
    ("organizations", "/organizations", "Organizations"),
];

/// Top navigation with a sign-out button.
#[component]
pub fn Nav(props: NavProps) -> Element {
    rsx! {
        nav {
            ul {
                li { a { href: "/", strong { "Dalukwa Admin" } } }
            }
            ul {
                for (id, href, label) in LINKS.iter().copied() {
                    li {
                        a {
                            href,
                            "aria-current": if props.active == id { Some("page") } else { None },
                            "{label}"
                        }
                    }
                }
                li {
                    form { method: "post", action: "/api/auth/logout", style: "margin:0;",
                        button { r#type: "submit", class: "secondary outline", "Sign out" }
                    }
                }
            }
        }
    }
}
