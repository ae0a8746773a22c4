use super::DiffApp;
use crate::ui::components::Surface;

impl<S: Surface> DiffApp<S> {
    /// Dispatches every action that has already arrived. Returns whether any
    /// did.
    pub fn poll_action_messages(&mut self) -> bool {
        let mut any = false;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            any = true;
        }
        any
    }

    /// Waits for the in-flight comparison, if any, to settle.
    pub async fn wait_until_settled(&mut self) {
        while self.state.phase.is_pending() {
            let Some(action) = self.action_rx.recv().await else {
                break;
            };
            self.dispatch(action);
        }
    }
}
