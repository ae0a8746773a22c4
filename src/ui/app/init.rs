use std::sync::Arc;

use tokio::sync::mpsc;

use super::DiffApp;
use super::state::UiState;
use crate::domain::{THEME_STORAGE_KEY, Theme};
use crate::infra::clipboard::ClipboardSink;
use crate::infra::diff_service::DiffService;
use crate::infra::platform::ColorSchemeProbe;
use crate::infra::preferences::ThemeStore;
use crate::ui::components::Surface;

/// External collaborators the controller talks to.
pub struct Collaborators {
    pub diff_service: Arc<dyn DiffService>,
    pub theme_store: Box<dyn ThemeStore>,
    pub clipboard: Box<dyn ClipboardSink>,
    pub color_scheme: Box<dyn ColorSchemeProbe>,
}

/// Binds the collaborators to a surface, resolves the initial theme and
/// performs the first mount.
pub fn initialize<S: Surface>(surface: S, collaborators: Collaborators) -> DiffApp<S> {
    let Collaborators {
        diff_service,
        theme_store,
        clipboard,
        color_scheme,
    } = collaborators;

    let theme = resolve_initial_theme(theme_store.as_ref(), color_scheme.as_ref());
    log::debug!("Initial theme: {theme}");

    let (action_tx, action_rx) = mpsc::channel(32);

    let mut app = DiffApp {
        state: UiState {
            theme,
            ..Default::default()
        },
        surface,
        diff_service,
        theme_store,
        clipboard,
        action_tx,
        action_rx,
    };
    app.mount();
    app
}

/// A persisted dark marker first, then the platform preference, then light.
/// The stored light literal is empty and counts as nothing persisted.
pub fn resolve_initial_theme(store: &dyn ThemeStore, probe: &dyn ColorSchemeProbe) -> Theme {
    match store.load(THEME_STORAGE_KEY) {
        Ok(Some(value)) if !value.trim().is_empty() => {
            return Theme::from_storage_value(&value);
        }
        Ok(_) => {}
        Err(err) => log::warn!("Could not read persisted theme: {err}"),
    }

    if probe.prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}
