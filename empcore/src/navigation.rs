use async_trait::async_trait;
use crate::entity::Entity;

/// How a modal dialog was closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    Deleted,
    Dismissed,
}

pub trait Navigator: Send + Sync {
    /// Navigates to the route formed by joining `commands`.
    fn navigate(&self, commands: Vec<String>);
    /// Returns to whatever was displayed before the current route.
    fn previous_state(&self);
}

/// Opens the confirmation dialog for deleting an entity, resolving once
/// the dialog is closed.
#[async_trait]
pub trait ModalService<E: Entity>: Send + Sync {
    async fn open_delete_dialog(&self, entity: E) -> CloseReason;
}

/// The handle a dialog uses to close itself.
pub trait ActiveModal: Send + Sync {
    fn close(&self, reason: CloseReason);
    fn dismiss(&self);
}
