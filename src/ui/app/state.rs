use std::sync::Arc;

use crate::domain::{DiffRequest, DiffResult, Theme};
use crate::ui::components::Notice;

/// Where the comparison lifecycle stands.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    #[default]
    Idle,
    /// A request is in flight; the trigger is disabled.
    Pending,
    Rendered(Arc<DiffResult>),
    Failed(String),
}

impl Phase {
    pub fn is_pending(&self) -> bool {
        matches!(self, Phase::Pending)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Pending => "pending",
            Phase::Rendered(_) => "rendered",
            Phase::Failed(_) => "failed",
        }
    }
}

/// Which input area a copy action reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pane {
    Original,
    Altered,
}

impl Pane {
    pub fn label(self) -> &'static str {
        match self {
            Pane::Original => "Texto original",
            Pane::Altered => "Texto alterado",
        }
    }
}

/// Current contents of the two input areas and the structured-mode switch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    pub original: String,
    pub altered: String,
    pub structured_mode: bool,
}

impl Inputs {
    pub fn text(&self, pane: Pane) -> &str {
        match pane {
            Pane::Original => &self.original,
            Pane::Altered => &self.altered,
        }
    }

    pub fn to_request(&self) -> DiffRequest {
        DiffRequest {
            original: self.original.clone(),
            altered: self.altered.clone(),
            structured_mode: self.structured_mode,
        }
    }
}

/// All controller state in one struct. Only `theme` outlives the process.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub phase: Phase,
    pub theme: Theme,
    pub inputs: Inputs,
    /// Shown once on the next mount, then cleared.
    pub notice: Option<Notice>,
}

impl UiState {
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&DiffResult> {
        match &self.phase {
            Phase::Rendered(result) => Some(result),
            _ => None,
        }
    }

    pub fn compare_enabled(&self) -> bool {
        !self.phase.is_pending()
    }
}
