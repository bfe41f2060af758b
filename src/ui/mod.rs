//! Server-rendered HTML pages.
//!
//! Every page is a Dioxus component rendered once per request. Interactions
//! that need a browser (drag and drop, toasts, the preview dialog) are small
//! inline scripts attached through the [`components::Layout`] `scripts` prop.

pub mod components;
pub mod pages;

use dioxus::prelude::*;

/// Render a page component with its props into a complete HTML document.
pub fn render_document<P: Clone + 'static>(root: fn(P) -> Element, props: P) -> String {
    let mut dom = VirtualDom::new_with_props(root, props);
    dom.rebuild_in_place();
    to_html(&dom)
}

/// Render a page component that takes no props.
pub fn render_static(root: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(root);
    dom.rebuild_in_place();
    to_html(&dom)
}

fn to_html(dom: &VirtualDom) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"en\">{}</html>",
        dioxus::ssr::render(dom)
    )
}

/// Link to `path` with the given query pairs, skipping empty values.
pub fn href_with_query(path: &str, params: &[(&str, &str)]) -> String {
    let query = params
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::pages::NotFoundPage;

    #[test]
    fn test_render_static_wraps_document() {
        let html = render_static(NotFoundPage);
        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\">"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn test_href_with_query_skips_empty() {
        assert_eq!(
            href_with_query("/device-log/S1", &[("account", "A 1"), ("date", ""), ("page", "2")]),
            "/device-log/S1?account=A%201&page=2"
        );
        assert_eq!(href_with_query("/screens", &[("city", "")]), "/screens");
    }
}
