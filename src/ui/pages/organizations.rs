use dioxus::prelude::*;
use signage_types::Organization;

use crate::ui::components::Layout;

#[derive(Props, Clone, PartialEq)]
pub struct OrganizationsPageProps {
    pub organizations: Vec<Organization>,
}

#[component]
pub fn OrganizationsPage(props: OrganizationsPageProps) -> Element {
    rsx! {
        Layout {
            title: "Organizations".to_string(),
            nav_active: "organizations".to_string(),

            h2 { "Organizations" }
            if props.organizations.is_empty() {
                p { "No organizations" }
            } else {
                figure {
                    table { class: "striped",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Phone" }
                                th { "Address" }
                            }
                        }
                        tbody {
                            for org in props.organizations.iter() {
                                tr { key: "{org.reference}",
                                    td { "{org.name}" }
                                    td { {org.email.clone().unwrap_or_default()} }
                                    td { {org.phone.clone().unwrap_or_default()} }
                                    td { {org.address.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
