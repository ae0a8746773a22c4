use std::sync::Arc;

use tokio::sync::mpsc;

use super::state::{Pane, Phase, UiState};
use super::store::{Action, ClipboardAction, CompareAction, InputAction, ThemeAction};
use crate::domain::DARK_MARKER;
use crate::infra::clipboard::ClipboardSink;
use crate::infra::diff_service::DiffService;
use crate::infra::preferences::ThemeStore;
use crate::ui::components::diff::{mount, project};
use crate::ui::components::{HtmlDocument, Surface};

/// The interaction controller: owns the UI state, the surface it mounts into
/// and the collaborators commands run against.
pub struct DiffApp<S: Surface = HtmlDocument> {
    pub(crate) state: UiState,
    pub(crate) surface: S,
    pub(crate) diff_service: Arc<dyn DiffService>,
    pub(crate) theme_store: Box<dyn ThemeStore>,
    pub(crate) clipboard: Box<dyn ClipboardSink>,
    pub(crate) action_tx: mpsc::Sender<Action>,
    pub(crate) action_rx: mpsc::Receiver<Action>,
}

impl<S: Surface> DiffApp<S> {
    /// Read-only view; changes go through [`DiffApp::dispatch`].
    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn on_compare(&mut self) {
        self.dispatch(Action::Compare(CompareAction::Requested));
    }

    pub fn on_toggle_theme(&mut self) {
        self.dispatch(Action::Theme(ThemeAction::Toggle));
    }

    pub fn on_copy(&mut self, pane: Pane) {
        self.dispatch(Action::Clipboard(ClipboardAction::Copy(pane)));
    }

    pub fn set_original(&mut self, text: impl Into<String>) {
        self.dispatch(Action::Input(InputAction::SetOriginal(text.into())));
    }

    pub fn set_altered(&mut self, text: impl Into<String>) {
        self.dispatch(Action::Input(InputAction::SetAltered(text.into())));
    }

    pub fn set_structured_mode(&mut self, enabled: bool) {
        self.dispatch(Action::Input(InputAction::SetStructuredMode(enabled)));
    }

    /// Re-mounts from current state, e.g. after a resize.
    pub fn rerender(&mut self) {
        self.dispatch(Action::Compare(CompareAction::Rerender));
    }

    pub(super) fn mount(&mut self) {
        let surface = &mut self.surface;
        surface.set_root_marker(DARK_MARKER, self.state.theme.is_dark());
        surface.set_compare_enabled(self.state.compare_enabled());

        match &self.state.phase {
            Phase::Idle => mount::mount_empty(surface),
            Phase::Pending => mount::mount_placeholder(surface),
            Phase::Rendered(result) => mount::mount_plan(surface, project(result)),
            Phase::Failed(error) => mount::mount_failure(surface, error),
        }

        if let Some(notice) = self.state.notice.take() {
            surface.notify(&notice);
        }
    }
}
