pub mod async_handler;
pub mod compare;
pub mod preferences;

use super::super::state::UiState;
use super::action::Action;
use super::command::Command;

/// The single transition function for [`UiState`].
pub fn reduce(state: &mut UiState, action: Action) -> Vec<Command> {
    match action {
        Action::Compare(action) => compare::reduce(state, action),
        Action::Input(action) => compare::reduce_input(&mut state.inputs, action),
        Action::Theme(action) => preferences::reduce_theme(state, action),
        Action::Clipboard(action) => preferences::reduce_clipboard(state, action),
        Action::Async(action) => async_handler::reduce(state, action),
    }
}
