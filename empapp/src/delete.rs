use async_trait::async_trait;
use empcore::{
    entity::Entity,
    navigation::{
        ActiveModal,
        CloseReason,
        ModalService,
    },
    service::EntityService,
};
use parking_lot::Mutex;
use std::sync::Arc;

/// The confirmation dialog shown before an entity is deleted.
pub struct DeleteDialog<E, S, M> {
    pub entity: Option<E>,
    service: Arc<S>,
    active_modal: Arc<M>,
}

impl<E, S, M> DeleteDialog<E, S, M>
where
    E: Entity,
    S: EntityService<E>,
    M: ActiveModal,
{
    pub fn new(service: Arc<S>, active_modal: Arc<M>) -> Self {
        Self {
            entity: None,
            service,
            active_modal,
        }
    }

    pub fn cancel(&self) {
        self.active_modal.dismiss();
    }

    /// The dialog is closed only once the server has confirmed the
    /// deletion; on failure it stays open.
    pub async fn confirm_delete(&self, id: i64) {
        match self.service.delete(id).await {
            Ok(_) => self.active_modal.close(CloseReason::Deleted),
            Err(e) => log::warn!("failed to delete {} {id}: {e}", E::RESOURCE),
        }
    }
}

/// Records how the dialog it was handed to got closed.
#[derive(Debug, Default)]
pub struct ModalHandle {
    reason: Mutex<Option<CloseReason>>,
}

impl ModalHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reason(&self) -> Option<CloseReason> {
        *self.reason.lock()
    }
}

impl ActiveModal for ModalHandle {
    fn close(&self, reason: CloseReason) {
        *self.reason.lock() = Some(reason);
    }

    fn dismiss(&self) {
        *self.reason.lock() = Some(CloseReason::Dismissed);
    }
}

/// A `ModalService` that runs the delete dialog to completion, using
/// `confirm` in place of the user's decision.
pub struct PromptModal<S, C> {
    service: Arc<S>,
    confirm: C,
}

impl<S, C> PromptModal<S, C> {
    pub fn new(service: Arc<S>, confirm: C) -> Self {
        Self { service, confirm }
    }
}

#[async_trait]
impl<E, S, C> ModalService<E> for PromptModal<S, C>
where
    E: Entity,
    S: EntityService<E> + 'static,
    C: Fn(&E) -> bool + Send + Sync + 'static,
{
    async fn open_delete_dialog(&self, entity: E) -> CloseReason {
        let handle = Arc::new(ModalHandle::new());
        let mut dialog = DeleteDialog::new(self.service.clone(), handle.clone());
        let confirmed = entity.id()
            .filter(|_| (self.confirm)(&entity));
        dialog.entity = Some(entity);
        match confirmed {
            Some(id) => dialog.confirm_delete(id).await,
            None => dialog.cancel(),
        }
        // a failed deletion leaves the dialog open; nothing is left to
        // act on it so treat it as dismissed.
        handle.reason().unwrap_or(CloseReason::Dismissed)
    }
}

#[cfg(test)]
mod test {
    use empcore::{
        country::Country,
        error::ServiceError,
        response::EntityResponse,
        vacation::Vacation,
    };
    use http::StatusCode;
    use test_emp::core::{
        MockActiveModal,
        MockCountryService,
        MockVacationService,
    };
    use crate::{
        list::ListComponent,
        route::RouteParams,
        vacation::VacationDeleteDialog,
    };
    use super::*;

    #[async_std::test]
    async fn confirm_delete() {
        let mut service = MockVacationService::new();
        service.expect_delete()
            .times(1)
            .withf(|id| *id == 123)
            .returning(|_| Ok(EntityResponse::new(
                StatusCode::NO_CONTENT, Default::default(), None)));
        let mut modal = MockActiveModal::new();
        modal.expect_close()
            .times(1)
            .withf(|reason| *reason == CloseReason::Deleted)
            .return_const(());
        modal.expect_dismiss().never();

        let dialog: VacationDeleteDialog<_, _> =
            DeleteDialog::new(Arc::new(service), Arc::new(modal));
        dialog.confirm_delete(123).await;
    }

    #[async_std::test]
    async fn confirm_delete_failure() {
        let mut service = MockVacationService::new();
        service.expect_delete()
            .times(1)
            .returning(|_| Err(ServiceError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
        let mut modal = MockActiveModal::new();
        modal.expect_close().never();
        modal.expect_dismiss().never();

        let dialog: VacationDeleteDialog<_, _> =
            DeleteDialog::new(Arc::new(service), Arc::new(modal));
        dialog.confirm_delete(123).await;
    }

    #[test]
    fn cancel() {
        let mut service = MockVacationService::new();
        service.expect_delete().never();
        let mut modal = MockActiveModal::new();
        modal.expect_dismiss()
            .times(1)
            .return_const(());

        let dialog: VacationDeleteDialog<_, _> =
            DeleteDialog::new(Arc::new(service), Arc::new(modal));
        dialog.cancel();
    }

    #[async_std::test]
    async fn prompt_modal_confirmed() {
        let mut service = MockCountryService::new();
        service.expect_delete()
            .times(1)
            .withf(|id| *id == 7)
            .returning(|_| Ok(EntityResponse::ok(None)));
        let modal = PromptModal::new(Arc::new(service), |_: &Country| true);
        let reason = modal.open_delete_dialog(Country::new(Some(7), None)).await;
        assert_eq!(reason, CloseReason::Deleted);
    }

    #[async_std::test]
    async fn prompt_modal_declined() {
        let mut service = MockCountryService::new();
        service.expect_delete().never();
        let modal = PromptModal::new(Arc::new(service), |_: &Country| false);
        let reason = modal.open_delete_dialog(Country::new(Some(7), None)).await;
        assert_eq!(reason, CloseReason::Dismissed);

        // nothing to delete without an identifier
        let modal = PromptModal::new(Arc::new(MockCountryService::new()), |_: &Country| true);
        let reason = modal.open_delete_dialog(Country::default()).await;
        assert_eq!(reason, CloseReason::Dismissed);
    }

    #[async_std::test]
    async fn list_reloads_after_prompted_delete() {
        let mut service = MockVacationService::new();
        service.expect_delete()
            .times(1)
            .withf(|id| *id == 2)
            .returning(|_| Ok(EntityResponse::ok(None)));
        service.expect_query()
            .times(1)
            .returning(|_| Ok(EntityResponse::ok(Some(vec![
                Vacation { id: Some(1), ..Default::default() },
            ]))));
        let service = Arc::new(service);
        let modal = PromptModal::new(service.clone(), |vacation: &Vacation| vacation.id == Some(2));

        let mut comp = ListComponent::new(service, Arc::new(modal), &RouteParams::new());
        comp.delete(Vacation { id: Some(2), ..Default::default() }).await;
        assert_eq!(comp.entities.as_ref().map(Vec::len), Some(1));
    }
}
