use async_trait::async_trait;
use log::info;
use url::Url;

use super::RegistrationClient;
use crate::form::{FormValues, ServerResponse};
use crate::http::requests::post_json;
use crate::{EnvironmentConfig, RegformError};

/// Posts registrations to a remote endpoint over http.
#[derive(Debug, Clone)]
pub struct RegistrationHandler {
    endpoint: Url,
    config: EnvironmentConfig,
}

impl RegistrationHandler {
    pub fn new(config: EnvironmentConfig) -> Result<Self, RegformError> {
        let endpoint = config.endpoint()?;
        // fail early on an unparsable timeout instead of at submit
        config.timeout()?;
        Ok(Self { endpoint, config })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl RegistrationClient for RegistrationHandler {
    async fn register(
        &self,
        values: &FormValues,
    ) -> Result<ServerResponse, RegformError> {
        info!("POST {}", self.endpoint);
        let body = serde_json::to_vec(values)?;
        let (body, status) =
            post_json(self.endpoint.as_str(), body, &self.config).await?;
        Ok(ServerResponse::new(status, body))
    }
}
