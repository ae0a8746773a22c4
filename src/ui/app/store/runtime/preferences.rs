use super::super::super::DiffApp;
use super::super::super::state::Pane;
use super::super::action::{Action, AsyncAction};
use crate::domain::{THEME_STORAGE_KEY, Theme};
use crate::ui::components::Surface;

pub fn persist_theme<S: Surface>(app: &mut DiffApp<S>, theme: Theme) {
    if let Err(err) = app
        .theme_store
        .save(THEME_STORAGE_KEY, theme.storage_value())
    {
        log::warn!("Failed to persist theme {theme}: {err}");
    }
}

pub fn copy_to_clipboard<S: Surface>(app: &mut DiffApp<S>, pane: Pane, text: String) {
    let result = app.clipboard.set_text(text);
    app.dispatch(Action::Async(AsyncAction::CopyFinished { pane, result }));
}
