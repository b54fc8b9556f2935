use crate::state::AppState;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdLock;

#[component]
pub fn PrivateDnsPreference(state: Signal<AppState>, on_click: EventHandler<()>) -> Element {
    let summary = state.read().settings.summary();
    let restricted = state.read().disabled_by_admin();

    // A restricted row stays clickable so the admin notice can be shown.
    rsx! {
        div { class: "section",
            div {
                class: if restricted { "preference restricted" } else { "preference" },
                onclick: move |_| on_click.call(()),
                div { class: "preference-text",
                    div { class: "preference-title", "Private DNS" }
                    div { class: "preference-summary", "{summary}" }
                }
                if restricted {
                    Icon {
                        width: 18,
                        height: 18,
                        icon: MdLock
                    }
                }
            }
        }
    }
}
