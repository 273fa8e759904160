pub(crate) mod base;
pub(crate) mod error;
pub(crate) mod form;
pub(crate) mod handlers;
pub(crate) mod http;

pub use base::config::{
    EnvironmentConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, ENDPOINT_KEY,
    TIMEOUT_KEY,
};
pub use error::RegformError;
pub use form::messages;
pub use form::{
    FavFood, FavLanguage, FieldErrors, FieldName, FieldSchema, FieldValue,
    FormController, FormSchema, FormValues, InputKind, RawInput, Rule,
    ServerResponse, SubmissionResult, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH,
};
pub use handlers::RegistrationClient;
#[cfg(any(target_arch = "wasm32", feature = "http_client"))]
pub use handlers::RegistrationHandler;

// meant for callers that need the raw http layer
pub mod external {
    #[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
    pub use crate::http::{
        HttpClient, HttpClientError, HttpClientResponse, HttpClientResult,
    };
    #[cfg(any(target_arch = "wasm32", feature = "http_client"))]
    pub use crate::http::requests::post_json;
}
