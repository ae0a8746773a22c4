use crate::domain::{ClipboardError, DiffResult, DiffServiceError};
use crate::ui::app::state::Pane;

#[derive(Debug)]
pub enum Action {
    Compare(CompareAction),
    Input(InputAction),
    Theme(ThemeAction),
    Clipboard(ClipboardAction),
    Async(AsyncAction),
}

#[derive(Debug)]
pub enum CompareAction {
    /// The compare trigger was activated.
    Requested,
    /// Re-mount the current state without contacting the diff service.
    Rerender,
}

#[derive(Debug)]
pub enum InputAction {
    SetOriginal(String),
    SetAltered(String),
    SetStructuredMode(bool),
}

#[derive(Debug)]
pub enum ThemeAction {
    Toggle,
}

#[derive(Debug)]
pub enum ClipboardAction {
    Copy(Pane),
}

#[derive(Debug)]
pub enum AsyncAction {
    DiffLoaded(Result<DiffResult, DiffServiceError>),
    CopyFinished {
        pane: Pane,
        result: Result<(), ClipboardError>,
    },
}
