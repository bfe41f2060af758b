//! Campaign schedule page.
//!
//! - Drag and drop the screen's ad accounts, then save the new order
//! - Up/down buttons post the same change without scripting
//! - Play opens a preview of the screen; the server drives slide changes over SSE
//! - Send to Device pushes the computed playlist through the relay

use dioxus::prelude::*;
use signage_types::{Screen, SequenceEntry};

use crate::schedule::LayoutConfig;
use crate::ui::components::{Layout, NavSelect, SelectOption};

const SCHEDULE_SCRIPT: &str = r#"
const root = document.getElementById('schedule');
const screenId = root.dataset.screen;
const list = document.getElementById('sequence');

function currentOrder() {
    return Array.from(list.querySelectorAll('li')).map(li => li.dataset.reference).join(',');
}

// Drag and drop reordering
let dragged = null;
list.querySelectorAll('li').forEach(li => {
    li.addEventListener('dragstart', () => { dragged = li; li.classList.add('dragging'); });
    li.addEventListener('dragend', () => { li.classList.remove('dragging'); dragged = null; });
    li.addEventListener('dragover', (event) => {
        event.preventDefault();
        if (!dragged || dragged === li) return;
        const rect = li.getBoundingClientRect();
        const after = event.clientY > rect.top + rect.height / 2;
        li.parentNode.insertBefore(dragged, after ? li.nextSibling : li);
    });
});

document.getElementById('save-order').addEventListener('click', async (event) => {
    const button = event.currentTarget;
    button.disabled = true;
    const pending = toast('Saving Order, hold on a moment...', 'loading');
    try {
        const res = await fetch('/api/admin/ad-account/set-ads-sequence?screen_id=' + encodeURIComponent(screenId), {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ reorder: currentOrder() })
        });
        toast(await apiMessage(res), res.ok ? 'success' : 'error');
    } catch (e) {
        toast(e.message, 'error');
    }
    pending.remove();
    button.disabled = false;
});

// Preview
const dialog = document.getElementById('preview');
const stage = document.getElementById('preview-screen');
let ticks = null;

function slide(file, index) {
    const box = document.createElement('div');
    box.className = 'preview-slide';
    box.style.transform = 'translateX(' + (index * 100) + '%)';
    let media = null;
    if (file.uploadType === 'image') {
        media = document.createElement('img');
        media.src = file.uploadFile;
        media.alt = file.uploadName;
    } else if (file.uploadType === 'video') {
        media = document.createElement('video');
        media.src = file.uploadFile;
        media.muted = true;
        media.loop = true;
    } else if (file.uploadType === 'html') {
        media = document.createElement('iframe');
        media.srcdoc = file.uploadFile;
    }
    if (media) box.appendChild(media);
    return box;
}

function show(view, index) {
    const track = stage.querySelector('[data-view="' + view + '"] .preview-track');
    if (!track) return;
    track.style.transition = index === 0 ? 'none' : 'transform 1s ease-out';
    track.style.transform = 'translateX(-' + (index * 100) + '%)';
    track.querySelectorAll('video').forEach((video, i) => {
        if (i === index) video.play().catch(() => {}); else video.pause();
    });
}

function closePreview() {
    if (ticks) { ticks.close(); ticks = null; }
    dialog.close();
    stage.innerHTML = '';
}

document.getElementById('play').addEventListener('click', async (event) => {
    const button = event.currentTarget;
    button.setAttribute('aria-busy', 'true');
    const order = encodeURIComponent(currentOrder());
    const base = '/api/admin/campaign-schedule/' + encodeURIComponent(screenId) + '/preview';
    try {
        const res = await fetch(base + '?order=' + order);
        if (!res.ok) throw new Error(await apiMessage(res));
        const preview = await res.json();
        stage.setAttribute('style', preview.screenStyle);
        const regions = Math.max(preview.layout.split.length, 1);
        preview.views.slice(0, regions).forEach((view, v) => {
            const region = document.createElement('div');
            region.className = 'preview-view';
            region.dataset.view = v;
            const track = document.createElement('div');
            track.className = 'preview-track';
            view.uploads.forEach((file, i) => track.appendChild(slide(file, i)));
            region.appendChild(track);
            stage.appendChild(region);
            show(v, 0);
        });
        dialog.showModal();
        ticks = new EventSource(base + '/events?plan=' + encodeURIComponent(preview.plan));
        ticks.onmessage = (e) => {
            const tick = JSON.parse(e.data);
            show(tick.view, tick.index);
        };
        ticks.onerror = () => { if (ticks) ticks.close(); };
    } catch (e) {
        toast(e.message, 'error');
    }
    button.removeAttribute('aria-busy');
});

document.getElementById('close-preview').addEventListener('click', closePreview);
dialog.addEventListener('cancel', closePreview);

// Push to the physical screen
const sendButton = document.getElementById('send-device');
sendButton.addEventListener('click', async () => {
    sendButton.disabled = true;
    const pending = toast('Getting Campaign data, hold on a moment...', 'loading');
    try {
        const res = await fetch('/api/admin/campaigns/send-to-device', {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ reference: root.dataset.device })
        });
        toast(await apiMessage(res), res.ok ? 'success' : 'error');
    } catch (e) {
        toast(e.message, 'error');
    }
    pending.remove();
    sendButton.disabled = !root.dataset.device;
});
"#;

#[derive(Props, Clone, PartialEq)]
pub struct CampaignSchedulePageProps {
    /// All screens, for the screen selector
    pub screens: Vec<Screen>,
    pub screen: Screen,
    /// Human name of the screen's layout, when the backend knows it
    pub layout_name: Option<String>,
    pub sequence: Vec<SequenceEntry>,
}

#[component]
pub fn CampaignSchedulePage(props: CampaignSchedulePageProps) -> Element {
    let screen = &props.screen;
    let layout = LayoutConfig::for_reference(&screen.layout_reference);
    let device_id = screen.device_id.clone().unwrap_or_default();
    let options: Vec<SelectOption> = props
        .screens
        .iter()
        .map(|s| SelectOption::new(s.reference.clone(), s.screen_name.clone()))
        .collect();
    let move_action = format!(
        "/campaign/campaign-schedule/{}/move",
        urlencoding::encode(&screen.reference)
    );
    let last = props.sequence.len().saturating_sub(1);

    rsx! {
        Layout {
            title: "Campaign Schedule".to_string(),
            nav_active: "screens".to_string(),
            scripts: Some(SCHEDULE_SCRIPT.to_string()),

            div {
                id: "schedule",
                "data-screen": "{screen.reference}",
                "data-device": "{device_id}",

                div { class: "toolbar",
                    h2 { "Campaign schedule" }
                    button {
                        id: "send-device",
                        class: "outline",
                        disabled: device_id.is_empty(),
                        title: if screen.is_online { "Screen is online" } else { "Screen is offline" },
                        "Send to Device"
                    }
                }

                div { class: "grid",
                    NavSelect {
                        id: "screen-select".to_string(),
                        label: "Select Screen".to_string(),
                        options,
                        selected: screen.reference.clone(),
                        navigate: Some("/campaign/campaign-schedule/".to_string()),
                    }
                    div {}
                }

                section {
                    h6 { "Screen Layout" }
                    div { class: "layout-thumb", style: layout.thumbnail_style(),
                        for region in 0..layout.region_count() {
                            div { key: "{region}" }
                        }
                    }
                    if let Some(name) = props.layout_name.as_ref() {
                        small { "{name}" }
                    }
                }

                div { class: "grid",
                    article {
                        header { class: "toolbar",
                            strong { "Sequence Ad Accounts in screen" }
                            button { id: "save-order", class: "outline", "Save" }
                        }
                        div { class: "toolbar",
                            small { "Drag and drop to arrange ad accounts" }
                            a { href: "/campaign/create-campaign", "New Campaign" }
                        }
                        ul { id: "sequence", class: "sequence",
                            for (index, entry) in props.sequence.iter().enumerate() {
                                li {
                                    key: "{entry.reference}",
                                    draggable: "true",
                                    "data-reference": "{entry.reference}",
                                    span { "{entry.name}" }
                                    if index > 0 {
                                        MoveButton { action: move_action.clone(), from: index, to: index - 1, label: "↑".to_string() }
                                    }
                                    if index < last {
                                        MoveButton { action: move_action.clone(), from: index, to: index + 1, label: "↓".to_string() }
                                    }
                                }
                            }
                        }
                    }
                    article {
                        header { class: "toolbar",
                            strong { "Sequence Ad Accounts" }
                            button { id: "play", class: "outline", "Play" }
                        }
                        if let Some(display) = screen.display_name.as_ref() {
                            small { "{display}" }
                        }
                        ul { class: "sequence",
                            for entry in props.sequence.iter() {
                                li { key: "{entry.reference}",
                                    a {
                                        href: format!("/ad-account/{}", urlencoding::encode(&entry.reference)),
                                        "{entry.name}"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            dialog { id: "preview", class: "preview",
                article {
                    header {
                        strong { "{screen.screen_name}" }
                        button { id: "close-preview", class: "secondary outline", "aria-label": "Close", "✕" }
                    }
                    div { id: "preview-screen", style: layout.screen_style() }
                }
            }
        }
    }
}

#[component]
fn MoveButton(action: String, from: usize, to: usize, label: String) -> Element {
    rsx! {
        form { method: "post", action: "{action}",
            input { r#type: "hidden", name: "from", value: "{from}" }
            input { r#type: "hidden", name: "to", value: "{to}" }
            button { r#type: "submit", class: "secondary outline", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_document;

    fn entry(reference: &str, name: &str) -> SequenceEntry {
        SequenceEntry {
            id: None,
            reference: reference.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_renders_sequence_in_order_with_move_forms() {
        let screen = Screen {
            reference: "SCR1".to_string(),
            screen_name: "Lobby".to_string(),
            layout_reference: "JHSFER2763".to_string(),
            device_id: Some("dev-1".to_string()),
            ..Default::default()
        };
        let html = render_document(
            CampaignSchedulePage,
            CampaignSchedulePageProps {
                screens: vec![screen.clone()],
                screen,
                layout_name: Some("Split 80/20".to_string()),
                sequence: vec![entry("A", "Alpha"), entry("B", "Beta")],
            },
        );

        assert!(html.contains("Campaign Schedule | Dalukwa Admin"));
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        assert!(alpha < beta);
        assert!(html.contains("/campaign/campaign-schedule/SCR1/move"));
        assert!(html.contains("grid-template-columns:0.8fr 0.2fr"));
        assert!(html.contains("data-device=\"dev-1\""));
    }

    #[test]
    fn test_links_encode_references() {
        let screen = Screen {
            reference: "Lobby 2".to_string(),
            screen_name: "Lobby".to_string(),
            ..Default::default()
        };
        let html = render_document(
            CampaignSchedulePage,
            CampaignSchedulePageProps {
                screens: vec![],
                screen,
                layout_name: None,
                sequence: vec![entry("Acme/West", "Acme"), entry("B", "Beta")],
            },
        );

        assert!(html.contains("/campaign/campaign-schedule/Lobby%202/move"));
        assert!(html.contains("/ad-account/Acme%2FWest"));
        assert!(!html.contains("/ad-account/Acme/West"));
    }
}
