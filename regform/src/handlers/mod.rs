mod client;

pub use client::RegistrationClient;

#[cfg(any(target_arch = "wasm32", feature = "http_client"))]
mod registration_handler;
#[cfg(any(target_arch = "wasm32", feature = "http_client"))]
pub use registration_handler::RegistrationHandler;
