use std::error::Error;
use std::fmt;

use url::ParseError;

#[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
use crate::http::HttpClientError;

#[derive(Debug)]
pub enum RegformError {
    Validation { field: String, details: String },
    UnknownField(String),
    ConfigError(String),
    Parse(ParseError),
    Json(serde_json::Error),
    Message(String),
    #[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
    HttpClientError(HttpClientError),
    #[cfg(target_arch = "wasm32")]
    Js(wasm_bindgen::JsValue),
}

impl fmt::Display for RegformError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RegformError::Validation { field, details } => {
                write!(f, "Validation error: {} - {}", field, details)
            }
            RegformError::UnknownField(s) => write!(f, "Unknown field: {}", s),
            RegformError::ConfigError(s) => write!(f, "Config error: {}", s),
            RegformError::Parse(e) => write!(f, "{}", e),
            RegformError::Json(e) => write!(f, "Invalid JSON: {}", e),
            RegformError::Message(s) => write!(f, "{}", s),
            #[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
            RegformError::HttpClientError(e) => write!(f, "{}", e),
            #[cfg(target_arch = "wasm32")]
            RegformError::Js(e) => write!(
                f,
                "JsError: {}",
                e.as_string().unwrap_or_else(|| "Unknown error".to_string())
            ),
        }
    }
}

impl Error for RegformError {}

impl From<ParseError> for RegformError {
    fn from(error: ParseError) -> Self {
        RegformError::Parse(error)
    }
}

impl From<serde_json::Error> for RegformError {
    fn from(error: serde_json::Error) -> Self {
        RegformError::Json(error)
    }
}

impl From<&str> for RegformError {
    fn from(error: &str) -> Self {
        RegformError::Message(error.to_owned())
    }
}

impl From<String> for RegformError {
    fn from(error: String) -> Self {
        RegformError::Message(error)
    }
}

#[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
impl From<HttpClientError> for RegformError {
    fn from(error: HttpClientError) -> Self {
        RegformError::HttpClientError(error)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for RegformError {
    fn from(error: wasm_bindgen::JsValue) -> Self {
        RegformError::Js(error)
    }
}
