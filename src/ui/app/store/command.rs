use crate::domain::{DiffRequest, Theme};
use crate::ui::app::state::Pane;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    RequestDiff { request: DiffRequest },
    PersistTheme { theme: Theme },
    CopyToClipboard { pane: Pane, text: String },
}
