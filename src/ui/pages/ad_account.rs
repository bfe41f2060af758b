use dioxus::prelude::*;
use signage_types::{AdAccount, AdFile, UploadType};

use crate::ui::components::{Layout, NavSelect, SelectOption};

#[derive(Props, Clone, PartialEq)]
pub struct AdAccountPageProps {
    /// All ad accounts, for the account selector
    pub ad_accounts: Vec<AdAccount>,
    pub account: AdAccount,
    pub ads: Vec<AdFile>,
}

#[component]
pub fn AdAccountPage(props: AdAccountPageProps) -> Element {
    let options: Vec<SelectOption> = props
        .ad_accounts
        .iter()
        .map(|a| SelectOption::new(a.reference.clone(), a.name.clone()))
        .collect();

    rsx! {
        Layout {
            title: format!("Ad Account - {}", props.account.name),
            nav_active: "screens".to_string(),

            h2 { "Ad Account - {props.account.name}" }
            div { class: "grid",
                NavSelect {
                    id: "ad-account-select".to_string(),
                    label: "Select Ad Account".to_string(),
                    options,
                    selected: props.account.reference.clone(),
                    navigate: Some("/ad-account/".to_string()),
                }
                div {}
            }
            article {
                header { class: "toolbar",
                    strong { "Ads" }
                    a { href: "/campaign/edit-campaign", "Edit Campaign" }
                }
                if props.ads.is_empty() {
                    p { "No ads" }
                }
                div { class: "grid-cards",
                    for ad in props.ads.iter() {
                        AdCard { key: "{ad.reference}", ad: ad.clone(), account_ref: props.account.reference.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn AdCard(ad: AdFile, account_ref: String) -> Element {
    let edit_href = format!("/campaign/edit-ad/{}", urlencoding::encode(&account_ref));

    rsx! {
        article {
            {match ad.kind {
                UploadType::Html => rsx! {
                    iframe { class: "ad-media", srcdoc: "{ad.url}", title: "{ad.name}" }
                },
                UploadType::Video => rsx! {
                    video { class: "ad-media", src: "{ad.url}", controls: true, title: "{ad.name}" }
                },
                UploadType::Image | UploadType::Unknown => rsx! {
                    img { class: "ad-media", src: "{ad.url}", alt: "{ad.name}" }
                },
            }}
            footer {
                strong { "{ad.name}" }
                br {}
                a { href: edit_href, "Edit" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_document;

    fn account(reference: &str, name: &str) -> AdAccount {
        AdAccount {
            reference: reference.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_renders_each_ad_kind() {
        let ads = vec![
            AdFile {
                reference: "1".to_string(),
                name: "Poster".to_string(),
                kind: UploadType::Image,
                url: "https://cdn.example/poster.png".to_string(),
            },
            AdFile {
                reference: "2".to_string(),
                name: "Clip".to_string(),
                kind: UploadType::Video,
                url: "https://cdn.example/clip.mp4".to_string(),
            },
            AdFile {
                reference: "3".to_string(),
                name: "Banner".to_string(),
                kind: UploadType::Html,
                url: "hello".to_string(),
            },
        ];
        let html = render_document(
            AdAccountPage,
            AdAccountPageProps {
                ad_accounts: vec![account("A1", "Acme"), account("A2", "Globex")],
                account: account("A1", "Acme"),
                ads,
            },
        );

        assert!(html.contains("Ad Account - Acme | Dalukwa Admin"));
        assert!(html.contains("<img"));
        assert!(html.contains("<video"));
        assert!(html.contains("<iframe"));
        assert!(!html.contains("No ads"));
    }

    #[test]
    fn test_no_ads() {
        let html = render_document(
            AdAccountPage,
            AdAccountPageProps {
                ad_accounts: vec![],
                account: account("A1", "Acme"),
                ads: vec![],
            },
        );
        assert!(html.contains("No ads"));
    }
}
