use crate::components::*;
use crate::dns::FileSettingsStore;
use crate::state::AppState;
use dioxus::prelude::*;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let store = use_context::<FileSettingsStore>();
    let mut state = use_signal(move || AppState::new(store));

    let on_preference_click = move |_| {
        state.write().open_dialog();
    };

    let dialog = state.read().dialog.clone();
    let help_uri = state.read().help_uri.clone();
    let admin_notice = state.read().admin_notice.clone();

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            div { class: "content",
                Header {}
                PrivateDnsPreference {
                    state: state,
                    on_click: on_preference_click
                }
            }
            StatusBar { state: state }
            if let Some(dialog) = dialog {
                PrivateDnsDialogView {
                    dialog: dialog,
                    help_uri: help_uri,
                    on_select: move |mode| state.write().select_mode(mode),
                    on_hostname_change: move |text| state.write().edit_hostname(text),
                    on_save: move |_| state.write().save_dialog(),
                    on_cancel: move |_| state.write().cancel_dialog()
                }
            }
            if let Some(admin) = admin_notice {
                AdminSupportDialog {
                    admin: admin,
                    on_dismiss: move |_| state.write().dismiss_admin_notice()
                }
            }
        }
    }
}
