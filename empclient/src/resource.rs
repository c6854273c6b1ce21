use async_trait::async_trait;
use empcore::{
    entity::RestEntity,
    error::ServiceError,
    request::{
        RequestOptions,
        Search,
    },
    response::EntityResponse,
    service::{
        EntityArrayResult,
        EntityResult,
        EntityService,
    },
};
use reqwest::{
    header::CONTENT_TYPE,
    Client,
    RequestBuilder,
    Response,
};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

use crate::config::ApplicationConfig;

pub const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// The HTTP client for the REST resource of `E`.
pub struct EntityResource<E> {
    client: Client,
    resource_url: String,
    resource_search_url: String,
    phantom: PhantomData<fn() -> E>,
}

impl<E: RestEntity> EntityResource<E> {
    pub fn new(client: Client, config: &ApplicationConfig) -> Self {
        Self {
            client,
            resource_url: config.endpoint_for(&format!("api/{}", E::RESOURCE)),
            resource_search_url: config.endpoint_for(&format!("api/_search/{}", E::RESOURCE)),
            phantom: PhantomData,
        }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    pub fn resource_search_url(&self) -> &str {
        &self.resource_search_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{id}", self.resource_url)
    }

    fn item_url_for(&self, entity: &E) -> Result<String, ServiceError> {
        Ok(self.item_url(entity.id().ok_or(ServiceError::MissingIdentifier)?))
    }

    fn with_query(url: &str, options: &RequestOptions) -> Result<String, ServiceError> {
        Ok(if options.is_empty() {
            url.to_string()
        } else {
            format!("{url}?{}", options.to_query_string()?)
        })
    }

    async fn send_entity(&self, request: RequestBuilder) -> EntityResult<E> {
        Ok(receive::<E::Wire>(request).await?.map(E::from_wire))
    }

    async fn send_array(&self, request: RequestBuilder) -> EntityArrayResult<E> {
        Ok(receive::<Vec<E::Wire>>(request).await?
            .map(|wires| wires.into_iter().map(E::from_wire).collect()))
    }
}

impl<E> Clone for EntityResource<E> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            resource_url: self.resource_url.clone(),
            resource_search_url: self.resource_search_url.clone(),
            phantom: PhantomData,
        }
    }
}

async fn receive<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<EntityResponse<T>, ServiceError> {
    let response = request.send().await?;
    let (status, headers, bytes) = read(response).await?;
    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        None
    } else {
        // a literal `null` body is equivalent to having no body.
        serde_json::from_slice::<Option<T>>(&bytes)?
    };
    Ok(EntityResponse::new(status, headers, body))
}

async fn read(
    response: Response,
) -> Result<(reqwest::StatusCode, reqwest::header::HeaderMap, Vec<u8>), ServiceError> {
    let status = response.status();
    log::trace!("{} {}", status, response.url());
    if !status.is_success() {
        return Err(ServiceError::Status(status));
    }
    let headers = response.headers().clone();
    let bytes = response.bytes().await?;
    Ok((status, headers, bytes.to_vec()))
}

#[async_trait]
impl<E: RestEntity> EntityService<E> for EntityResource<E> {
    async fn create(&self, entity: E) -> EntityResult<E> {
        log::debug!("POST {}", self.resource_url);
        self.send_entity(
            self.client.post(&self.resource_url)
                .json(&entity.to_wire())
        ).await
    }

    async fn update(&self, entity: E) -> EntityResult<E> {
        let url = self.item_url_for(&entity)?;
        log::debug!("PUT {url}");
        self.send_entity(
            self.client.put(url)
                .json(&entity.to_wire())
        ).await
    }

    async fn partial_update(&self, entity: E) -> EntityResult<E> {
        let url = self.item_url_for(&entity)?;
        log::debug!("PATCH {url}");
        let body = serde_json::to_vec(&entity.to_wire())?;
        self.send_entity(
            self.client.patch(url)
                .header(CONTENT_TYPE, MERGE_PATCH_JSON)
                .body(body)
        ).await
    }

    async fn find(&self, id: i64) -> EntityResult<E> {
        let url = self.item_url(id);
        log::debug!("GET {url}");
        self.send_entity(self.client.get(url)).await
    }

    async fn query(&self, options: RequestOptions) -> EntityArrayResult<E> {
        let url = Self::with_query(&self.resource_url, &options)?;
        log::debug!("GET {url}");
        self.send_array(self.client.get(url)).await
    }

    async fn delete(&self, id: i64) -> Result<EntityResponse<()>, ServiceError> {
        let url = self.item_url(id);
        log::debug!("DELETE {url}");
        let response = self.client.delete(url).send().await?;
        let (status, headers, _) = read(response).await?;
        Ok(EntityResponse::new(status, headers, None))
    }

    async fn search(&self, search: Search) -> EntityArrayResult<E> {
        let url = Self::with_query(&self.resource_search_url, &RequestOptions::from(search))?;
        log::debug!("GET {url}");
        self.send_array(self.client.get(url)).await
    }
}
