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

use crate::route::RouteParams;

pub const NOT_FOUND_ROUTE: &str = "404";

/// Supplies the entity a route works on before the route activates.
pub struct EntityResolver<E, S, N> {
    service: Arc<S>,
    navigator: Arc<N>,
    phantom: PhantomData<fn() -> E>,
}

impl<E, S, N> EntityResolver<E, S, N>
where
    E: Entity,
    S: EntityService<E>,
    N: Navigator,
{
    pub fn new(service: Arc<S>, navigator: Arc<N>) -> Self {
        Self {
            service,
            navigator,
            phantom: PhantomData,
        }
    }

    /// Without an `id` parameter a new transient entity is produced
    /// immediately.  Otherwise the entity is fetched; should the server
    /// have nothing to return, navigation is redirected to the not found
    /// route and `None` is returned to block the original navigation.
    ///
    /// Failures from the service are returned as is.
    pub async fn resolve(&self, params: &RouteParams) -> Result<Option<E>, ServiceError> {
        let id = match params.get("id").filter(|id| !id.is_empty()) {
            Some(id) => id,
            None => return Ok(Some(E::default())),
        };
        let id = match id.parse::<i64>() {
            Ok(id) => id,
            Err(_) => {
                log::debug!("{} route given invalid id {id:?}", E::RESOURCE);
                self.not_found();
                return Ok(None);
            }
        };
        match self.service.find(id).await?.into_body() {
            Some(entity) => Ok(Some(entity)),
            None => {
                log::debug!("{} {id} not found", E::RESOURCE);
                self.not_found();
                Ok(None)
            }
        }
    }

    fn not_found(&self) {
        self.navigator.navigate(vec![NOT_FOUND_ROUTE.to_string()]);
    }
}
