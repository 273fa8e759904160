#[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
mod client;
#[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
pub use client::{
    HttpClient, HttpClientError, HttpClientResponse, HttpClientResult,
};

#[cfg(all(not(target_arch = "wasm32"), feature = "http_client"))]
pub mod requests;

#[cfg(all(test, not(target_arch = "wasm32"), feature = "http_client"))]
pub(crate) mod test_server;

#[cfg(target_arch = "wasm32")]
#[path = "requests_wasm32.rs"]
pub mod requests;
