pub mod compare;
pub mod preferences;


use super::super::DiffApp;
use super::command::Command;
use crate::ui::components::Surface;

pub fn run<S: Surface>(app: &mut DiffApp<S>, command: Command) {
    match command {
        Command::RequestDiff { request } => compare::request_diff(app, request),
        Command::PersistTheme { theme } => preferences::persist_theme(app, theme),
        Command::CopyToClipboard { pane, text } => {
            preferences::copy_to_clipboard(app, pane, text)
        }
    }
}
