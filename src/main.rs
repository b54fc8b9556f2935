mod app;
mod components;
mod dns;
mod state;

use dioxus::desktop::tao::dpi::LogicalSize;
use dioxus::desktop::{Config, WindowBuilder};
use dns::FileSettingsStore;
use tracing_subscriber::EnvFilter;

const WINDOW_WIDTH: f64 = 480.0;
const WINDOW_HEIGHT: f64 = 640.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = match FileSettingsStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            tracing::warn!("No config directory, using ./settings.jsonc: {}", e);
            FileSettingsStore::new("settings.jsonc")
        }
    };
    tracing::info!(path = %store.path().display(), "Using settings file");

    let window_builder = WindowBuilder::new()
        .with_title("Private DNS")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT));

    dioxus::LaunchBuilder::new()
        .with_cfg(
            Config::new()
                .with_menu(None)
                .with_window(window_builder),
        )
        .with_context(store)
        .launch(app::App);
}
