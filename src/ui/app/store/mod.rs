//! Reducer-style state updates + side-effect commands.

mod action;
mod command;
mod reducer;
mod runtime;

pub use action::{
    Action, AsyncAction, ClipboardAction, CompareAction, InputAction, ThemeAction,
};
pub use command::Command;

use super::DiffApp;
use crate::ui::components::Surface;

impl<S: Surface> DiffApp<S> {
    pub fn dispatch(&mut self, action: Action) {
        let commands = reducer::reduce(&mut self.state, action);
        for command in commands {
            runtime::run(self, command);
        }
        self.mount();
    }
}
