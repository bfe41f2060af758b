//! Layout component wrapping all pages with Pico CSS and common elements.

use dioxus::prelude::*;

use super::nav::Nav;

/// CSS styles for the application (extends Pico CSS).
const CUSTOM_STYLES: &str = r#"
:root { --pico-font-size: 15px; }
small { color: var(--pico-muted-color); }
.status-ok { color: var(--pico-ins-color); }
.status-err { color: var(--pico-del-color); }
.toolbar { display: flex; flex-wrap: wrap; gap: 1rem; align-items: center; justify-content: space-between; }
.grid-cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
.sequence { list-style: none; padding: 0; }
.sequence li { list-style: none; display: flex; gap: 0.5rem; align-items: center; padding: 0.75rem 1rem; margin-bottom: 0.5rem; border: 1px solid var(--pico-muted-border-color); border-radius: var(--pico-border-radius); background: var(--pico-card-background-color); user-select: none; cursor: grab; }
.sequence li.dragging { opacity: 0.5; }
.sequence li span { flex: 1; }
.sequence li form { margin: 0; }
.sequence li button { margin: 0; padding: 0.2rem 0.6rem; }
.layout-thumb > div { background: var(--pico-primary-background); border-radius: 4px; min-height: 24px; }
.ad-media { width: 100%; height: 140px; object-fit: cover; border: 0; }
.activity { max-height: 50vh; overflow: auto; }
.activity h6 { position: sticky; top: 0; background: var(--pico-card-background-color); margin: 0; padding: 0.5rem 0; }
.pagination { display: flex; flex-wrap: wrap; gap: 0.25rem; justify-content: space-between; }
.pagination a[aria-current] { font-weight: bold; text-decoration: none; }
dialog.preview article { max-width: none; width: auto; padding: 0; }
dialog.preview header { display: flex; justify-content: space-between; align-items: center; margin: 0; padding: 0.75rem 1rem; }
.preview-view { position: relative; overflow: hidden; }
.preview-track { position: relative; width: 100%; height: 100%; }
.preview-slide { position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; }
.preview-slide img, .preview-slide video, .preview-slide iframe { width: 100%; height: 100%; object-fit: contain; border: 0; }
#toasts { position: fixed; top: 1rem; right: 1rem; z-index: 1000; display: flex; flex-direction: column; gap: 0.5rem; }
#toasts div { padding: 0.75rem 1rem; border-radius: var(--pico-border-radius); background: var(--pico-card-background-color); box-shadow: var(--pico-card-box-shadow); border-left: 4px solid var(--pico-primary); }
#toasts div.error { border-left-color: var(--pico-del-color); }
#toasts div.success { border-left-color: var(--pico-ins-color); }
"#;

/// Toasts and select-driven navigation, shared by every page.
const COMMON_SCRIPT: &str = r#"
function toast(message, kind) {
    const box = document.getElementById('toasts');
    const el = document.createElement('div');
    el.className = kind || '';
    el.textContent = message;
    box.appendChild(el);
    setTimeout(() => el.remove(), kind === 'loading' ? 30000 : 4000);
    return el;
}

async function apiMessage(res) {
    try {
        const body = await res.json();
        return body.message || res.statusText;
    } catch (e) {
        return res.statusText;
    }
}

// <select data-navigate="/prefix/"> jumps to /prefix/<value>;
// <select data-param="name"> sets ?name=<value> on the current page.
document.querySelectorAll('select[data-navigate], select[data-param], input[data-param]').forEach(el => {
    el.addEventListener('change', () => {
        if (el.dataset.navigate !== undefined) {
            window.location.href = el.dataset.navigate + encodeURIComponent(el.value);
            return;
        }
        const url = new URL(window.location.href);
        url.searchParams.set(el.dataset.param, el.value);
        url.searchParams.delete('page');
        window.location.href = url.toString();
    });
});
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
    /// Page-specific script, appended after the shared one
    #[props(default)]
    pub scripts: Option<String>,
    /// Hide the navigation bar (sign-in pages)
    #[props(default = false)]
    pub hide_nav: bool,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("CARGO_PKG_VERSION");
    let full_title = format!("{} | Dalukwa Admin", props.title);

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{full_title}" }
            link { rel: "stylesheet", href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css" }
            style { dangerous_inner_html: CUSTOM_STYLES }
        }
        body {
            if !props.hide_nav {
                header { class: "container",
                    Nav { active: props.nav_active.clone() }
                }
            }
            main { class: "container",
                {props.children}
            }
            footer { class: "container",
                small { "Dalukwa Admin v{version}" }
            }
            div { id: "toasts" }
            script { dangerous_inner_html: COMMON_SCRIPT }
            if let Some(page_script) = props.scripts.as_ref() {
                script { dangerous_inner_html: "{page_script}" }
            }
        }
    }
}
