use async_trait::async_trait;

use crate::form::{FormValues, ServerResponse};
use crate::RegformError;

/// Anything that can deliver a registration and hand back the raw answer.
#[async_trait(?Send)]
pub trait RegistrationClient {
    async fn register(
        &self,
        values: &FormValues,
    ) -> Result<ServerResponse, RegformError>;
}
