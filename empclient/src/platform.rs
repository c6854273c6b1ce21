use empcore::{
    country::Country,
    entity::RestEntity,
    vacation::Vacation,
};
use reqwest::Client;

use crate::{
    config::ApplicationConfig,
    resource::EntityResource,
};

/// The configured client shared by every entity resource.
#[derive(Clone, Debug)]
pub struct Platform {
    client: Client,
    config: ApplicationConfig,
}

impl Platform {
    pub fn new(client: Client, config: ApplicationConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    pub fn resource<E: RestEntity>(&self) -> EntityResource<E> {
        EntityResource::new(self.client.clone(), &self.config)
    }

    pub fn countries(&self) -> EntityResource<Country> {
        self.resource()
    }

    pub fn vacations(&self) -> EntityResource<Vacation> {
        self.resource()
    }
}
