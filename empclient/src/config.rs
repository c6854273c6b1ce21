use url::Url;
use crate::error::ClientError;

/// Resolves API paths against the endpoint the application talks to.
#[derive(Clone, Debug, PartialEq)]
pub struct ApplicationConfig {
    endpoint_prefix: String,
}

impl ApplicationConfig {
    /// The endpoint must be an absolute URL; a trailing `/` is added if
    /// missing so that paths are resolved underneath it.
    pub fn new(endpoint: &str) -> Result<Self, ClientError> {
        let url = Url::parse(endpoint)?;
        if url.cannot_be_a_base() {
            return Err(ClientError::UnsupportedEndpoint(endpoint.to_string()));
        }
        let mut endpoint_prefix = url.to_string();
        if !endpoint_prefix.ends_with('/') {
            endpoint_prefix.push('/');
        }
        Ok(Self { endpoint_prefix })
    }

    pub fn endpoint_prefix(&self) -> &str {
        &self.endpoint_prefix
    }

    pub fn endpoint_for(&self, api: &str) -> String {
        format!("{}{}", self.endpoint_prefix, api.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn endpoint_for() -> anyhow::Result<()> {
        let config = ApplicationConfig::new("http://localhost:8080")?;
        assert_eq!(config.endpoint_prefix(), "http://localhost:8080/");
        assert_eq!(
            config.endpoint_for("api/vacations"),
            "http://localhost:8080/api/vacations",
        );

        let config = ApplicationConfig::new("https://example.com/services/employee/")?;
        assert_eq!(
            config.endpoint_for("/api/_search/countries"),
            "https://example.com/services/employee/api/_search/countries",
        );
        Ok(())
    }

    #[test]
    fn invalid_endpoint() {
        assert!(matches!(
            ApplicationConfig::new("localhost"),
            Err(ClientError::InvalidEndpoint(_)),
        ));
        assert!(matches!(
            ApplicationConfig::new("mailto:admin@example.com"),
            Err(ClientError::UnsupportedEndpoint(_)),
        ));
    }
}
