use async_trait::async_trait;
use crate::{
    collection,
    entity::Entity,
    error::ServiceError,
    request::{
        RequestOptions,
        Search,
    },
    response::EntityResponse,
};

pub type EntityResult<E> = Result<EntityResponse<E>, ServiceError>;
pub type EntityArrayResult<E> = Result<EntityResponse<Vec<E>>, ServiceError>;

/// Access to the REST resource of an entity.
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// Persists a new entity; the response carries the entity with the
    /// identifier assigned by the server.
    async fn create(&self, entity: E) -> EntityResult<E>;
    /// Replaces the entity addressed by its identifier.
    async fn update(&self, entity: E) -> EntityResult<E>;
    /// Merges the fields present on `entity` into the stored entity
    /// addressed by its identifier.
    async fn partial_update(&self, entity: E) -> EntityResult<E>;
    async fn find(&self, id: i64) -> EntityResult<E>;
    async fn query(&self, options: RequestOptions) -> EntityArrayResult<E>;
    async fn delete(&self, id: i64) -> Result<EntityResponse<()>, ServiceError>;
    async fn search(&self, search: Search) -> EntityArrayResult<E>;

    fn add_to_collection_if_missing(
        &self,
        entities: Vec<E>,
        candidates: Vec<Option<E>>,
    ) -> Vec<E> {
        collection::add_to_collection_if_missing(entities, candidates)
    }
}
