use std::sync::Arc;

use super::super::super::state::{Phase, UiState};
use super::super::action::AsyncAction;
use super::super::command::Command;
use crate::ui::components::Notice;

pub fn reduce(state: &mut UiState, action: AsyncAction) -> Vec<Command> {
    match action {
        AsyncAction::DiffLoaded(result) => {
            if !state.phase.is_pending() {
                log::debug!(
                    "Dropping diff response received while {}",
                    state.phase.name()
                );
                return Vec::new();
            }

            state.phase = match result {
                Ok(result) => {
                    log::info!(
                        "Comparison rendered ({}): {} removals, {} additions",
                        result.diff_type,
                        result.summary.removals,
                        result.summary.additions
                    );
                    Phase::Rendered(Arc::new(result))
                }
                Err(err) => {
                    if err.is_malformed() {
                        log::error!("Diff service sent a malformed response: {err}");
                    } else {
                        log::warn!("Comparison failed: {err}");
                    }
                    Phase::Failed(err.to_string())
                }
            };
            Vec::new()
        }
        AsyncAction::CopyFinished { pane, result } => {
            state.notice = Some(match result {
                Ok(()) => Notice::success(format!(
                    "{} copiado para a área de transferência.",
                    pane.label()
                )),
                Err(err) => {
                    log::warn!("Copy of {pane:?} failed: {err}");
                    Notice::failure(format!(
                        "Não foi possível copiar o {}: {err}",
                        pane.label().to_lowercase()
                    ))
                }
            });
            Vec::new()
        }
    }
}
