use dioxus::prelude::*;

use crate::ui::components::Layout;

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        Layout {
            title: "404".to_string(),
            nav_active: String::new(),

            article {
                h2 { "Page not found" }
                p { "The page you are looking for doesn't exist or could not be loaded." }
                a { href: "/screens", role: "button", "Back to screens" }
            }
        }
    }
}
