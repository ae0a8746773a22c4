use super::super::super::state::UiState;
use super::super::action::{ClipboardAction, ThemeAction};
use super::super::command::Command;

pub fn reduce_theme(state: &mut UiState, action: ThemeAction) -> Vec<Command> {
    match action {
        ThemeAction::Toggle => {
            state.theme = state.theme.toggled();
            vec![Command::PersistTheme { theme: state.theme }]
        }
    }
}

pub fn reduce_clipboard(state: &mut UiState, action: ClipboardAction) -> Vec<Command> {
    match action {
        ClipboardAction::Copy(pane) => vec![Command::CopyToClipboard {
            pane,
            text: state.inputs.text(pane).to_string(),
        }],
    }
}
