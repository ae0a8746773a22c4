//! The interaction controller.
//!
//! State lives in [`UiState`]; every change goes through
//! [`DiffApp::dispatch`], which reduces an action, runs the resulting
//! commands and re-mounts the surface.

mod init;
mod polling;
mod root;
mod state;
mod store;

#[cfg(test)]
mod tests;

pub use init::{Collaborators, initialize, resolve_initial_theme};
pub use root::DiffApp;
pub use state::{Inputs, Pane, Phase, UiState};
pub use store::{
    Action, AsyncAction, ClipboardAction, Command, CompareAction, InputAction, ThemeAction,
};
