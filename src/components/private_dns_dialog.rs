use crate::dns::{PrivateDnsDialog, PrivateDnsMode};
use dioxus::prelude::*;

#[component]
pub fn PrivateDnsDialogView(
    dialog: PrivateDnsDialog,
    help_uri: Option<String>,
    on_select: EventHandler<PrivateDnsMode>,
    on_hostname_change: EventHandler<String>,
    on_save: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let current_mode = dialog.mode();
    let hostname = dialog.hostname().to_string();
    let hostname_enabled = dialog.hostname_input_enabled();
    let hostname_error = dialog.hostname_error().map(|e| e.to_string());

    rsx! {
        div { class: "dialog-overlay",
            div { class: "private-dns-dialog",
                h3 { "Private DNS" }
                div { class: "radio-group",
                    for mode in PrivateDnsMode::ALL {
                        div { key: "{mode.code()}", class: "radio-option",
                            input {
                                r#type: "radio",
                                id: "{mode.element_id()}",
                                name: "private-dns-mode",
                                checked: current_mode == mode,
                                onchange: move |_| on_select.call(mode)
                            }
                            label { r#for: "{mode.element_id()}", "{mode.label()}" }
                        }
                        if mode == PrivateDnsMode::ProviderHostname {
                            div {
                                class: if hostname_error.is_some() { "form-group hostname-group invalid" } else { "form-group hostname-group" },
                                input {
                                    r#type: "text",
                                    id: "private-dns-hostname",
                                    placeholder: "Enter hostname of DNS provider",
                                    value: "{hostname}",
                                    disabled: !hostname_enabled,
                                    oninput: move |evt| on_hostname_change.call(evt.value())
                                }
                                if let Some(error) = hostname_error.clone() {
                                    div { class: "input-error", "{error}" }
                                }
                            }
                        }
                    }
                }
                if let Some(uri) = help_uri {
                    div { class: "input-hint",
                        "Private DNS encrypts your DNS queries. "
                        a { href: "{uri}", "Learn more" }
                    }
                }
                div { class: "dialog-buttons",
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "primary",
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
            }
        }
    }
}
