use crate::config::ClientConfig;
use crate::core::http_client::HttpClient;
use crate::resources::{Auth, Calendars, Events, Grants};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Entry point of the SDK.
///
/// ```no_run
/// # async fn example() -> nylas::Result<()> {
/// let nylas = nylas::Client::new("nyk_...")?;
/// let calendars = nylas.calendars().list("grant-id", None).await?;
/// println!("{} calendars", calendars.data.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Client against the default US region with the default timeout.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::from_config(ClientConfig::new(api_key))
    }

    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http_client = HttpClient::new(&config.api_uri, &config.api_key, config.timeout())?;
        tracing::debug!("Nylas client ready for {}", http_client.api_uri());

        Ok(Self {
            config,
            http_client: Arc::new(http_client),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    pub fn auth(&self) -> Auth {
        Auth::new(Arc::clone(&self.http_client))
    }

    pub fn grants(&self) -> Grants {
        Grants::new(Arc::clone(&self.http_client))
    }

    pub fn calendars(&self) -> Calendars {
        Calendars::new(Arc::clone(&self.http_client))
    }

    pub fn events(&self) -> Events {
        Events::new(Arc::clone(&self.http_client))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::NylasError;

    #[test]
    fn test_new_uses_defaults() {
        let client = Client::new("nyk_test").unwrap();
        assert_eq!(client.http_client().api_uri(), crate::config::DEFAULT_API_URI);
        assert_eq!(
            client.http_client().timeout().as_secs(),
            crate::config::DEFAULT_TIMEOUT_SECONDS
        );
    }

    #[test]
    fn test_from_config_rejects_empty_key() {
        let err = Client::new("  ").unwrap_err();
        assert!(matches!(err, NylasError::InvalidConfigValueError { ref field, .. } if field == "api_key"));
    }
}
