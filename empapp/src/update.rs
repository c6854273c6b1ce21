use chrono::{DateTime, Utc};
use empcore::{
    entity::Entity,
    error::ServiceError,
    navigation::Navigator,
    service::EntityService,
};
use std::{
    marker::PhantomData,
    sync::Arc,
};

use crate::form::EntityForm;

/// Edits an entity, creating it on save if it has not been persisted.
///
/// Nothing prevents `save` from being issued again while a previous
/// save is still outstanding.
pub struct UpdateComponent<E, F, S, N> {
    pub is_saving: bool,
    pub edit_form: F,
    service: Arc<S>,
    navigator: Arc<N>,
    phantom: PhantomData<fn() -> E>,
}

/// The start of the current day.
pub fn today() -> DateTime<Utc> {
    let now = crate::chrono::Utc::now();
    DateTime::from_naive_utc_and_offset(
        now.date_naive().and_time(crate::chrono::NaiveTime::MIN),
        Utc,
    )
}

impl<E, F, S, N> UpdateComponent<E, F, S, N>
where
    E: Entity,
    F: EntityForm<E>,
    S: EntityService<E>,
    N: Navigator,
{
    pub fn new(service: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            is_saving: false,
            edit_form: F::default(),
            service,
            navigator,
            phantom: PhantomData,
        }
    }

    /// Populates the form with the resolved entity, filling in the
    /// defaults first if it is a new one.
    pub fn init(&mut self, mut entity: E) {
        if entity.id().is_none() {
            entity.apply_defaults(today());
        }
        self.edit_form.update_form(&entity);
    }

    pub fn previous_state(&self) {
        self.navigator.previous_state();
    }

    pub async fn save(&mut self) {
        self.is_saving = true;
        let entity = self.edit_form.create_from_form();
        let result = if entity.id().is_some() {
            self.service.update(entity).await
        } else {
            self.service.create(entity).await
        };
        match result {
            Ok(_) => self.on_save_success(),
            Err(e) => self.on_save_error(e),
        }
        self.on_save_finalize();
    }

    fn on_save_success(&self) {
        self.previous_state();
    }

    fn on_save_error(&self, e: ServiceError) {
        log::warn!("failed to save {}: {e}", E::RESOURCE);
    }

    fn on_save_finalize(&mut self) {
        self.is_saving = false;
    }
}
