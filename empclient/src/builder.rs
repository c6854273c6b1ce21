use clap::Parser;
use reqwest::{
    header::{
        HeaderMap,
        HeaderValue,
        AUTHORIZATION,
    },
    Client,
};

use crate::{
    config::ApplicationConfig,
    error::ClientError,
    platform::Platform,
};

#[derive(Clone, Debug, Default, Parser)]
pub struct Builder {
    #[clap(long, value_name = "EMP_API_ENDPOINT", env = "EMP_API_ENDPOINT")]
    pub api_endpoint: String,
    #[clap(long, value_name = "EMP_API_TOKEN", env = "EMP_API_TOKEN")]
    pub api_token: Option<String>,
    #[clap(long, value_name = "EMP_USER_AGENT", env = "EMP_USER_AGENT")]
    pub user_agent: Option<String>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn api_endpoint(mut self, value: String) -> Self {
        self.api_endpoint = value;
        self
    }

    pub fn api_token(mut self, value: String) -> Self {
        self.api_token = Some(value);
        self
    }

    pub fn user_agent(mut self, value: String) -> Self {
        self.user_agent = Some(value);
        self
    }

    pub fn build(self) -> Result<Platform, ClientError> {
        let config = ApplicationConfig::new(&self.api_endpoint)?;
        let mut headers = HeaderMap::new();
        if let Some(token) = self.api_token.as_deref() {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let mut client = Client::builder()
            .default_headers(headers);
        if let Some(user_agent) = self.user_agent {
            client = client.user_agent(user_agent);
        }
        log::debug!("api endpoint: {}", config.endpoint_prefix());
        Ok(Platform::new(client.build()?, config))
    }
}
