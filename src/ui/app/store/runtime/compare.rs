use super::super::super::DiffApp;
use super::super::action::{Action, AsyncAction};
use crate::domain::DiffRequest;
use crate::ui::components::Surface;

/// Sends the request on the runtime; the outcome comes back through the
/// action channel as [`AsyncAction::DiffLoaded`].
pub fn request_diff<S: Surface>(app: &mut DiffApp<S>, request: DiffRequest) {
    let service = app.diff_service.clone();
    let action_tx = app.action_tx.clone();

    tokio::spawn(async move {
        let result = service.compare(&request).await;
        if let Err(err) = action_tx
            .send(Action::Async(AsyncAction::DiffLoaded(result)))
            .await
        {
            log::error!("Failed to deliver diff response: {err}");
        }
    });
}
