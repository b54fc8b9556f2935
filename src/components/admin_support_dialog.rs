use crate::dns::EnforcedAdmin;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdLock;

#[component]
pub fn AdminSupportDialog(admin: EnforcedAdmin, on_dismiss: EventHandler<()>) -> Element {
    let admin_name = admin
        .admin
        .clone()
        .unwrap_or_else(|| "your IT admin".to_string());

    rsx! {
        div { class: "dialog-overlay",
            div { class: "admin-support-dialog",
                div { class: "dialog-title",
                    Icon {
                        width: 20,
                        height: 20,
                        icon: MdLock
                    }
                    h3 { "Action not allowed" }
                }
                p { "This setting is managed by {admin_name}. Contact them to change private DNS." }
                div { class: "dialog-buttons",
                    button {
                        class: "primary",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
