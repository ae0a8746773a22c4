use super::super::super::state::{Inputs, Phase, UiState};
use super::super::action::{CompareAction, InputAction};
use super::super::command::Command;

pub fn reduce(state: &mut UiState, action: CompareAction) -> Vec<Command> {
    match action {
        CompareAction::Requested => {
            if state.phase.is_pending() {
                log::debug!("Compare ignored: a request is already in flight");
                return Vec::new();
            }

            // Whatever was rendered or failed before is dropped here, before
            // the request goes out.
            state.phase = Phase::Pending;
            vec![Command::RequestDiff {
                request: state.inputs.to_request(),
            }]
        }
        CompareAction::Rerender => Vec::new(),
    }
}

pub fn reduce_input(inputs: &mut Inputs, action: InputAction) -> Vec<Command> {
    match action {
        InputAction::SetOriginal(text) => inputs.original = text,
        InputAction::SetAltered(text) => inputs.altered = text,
        InputAction::SetStructuredMode(enabled) => inputs.structured_mode = enabled,
    }
    Vec::new()
}
