use std::collections::HashMap;

use regform::{EnvironmentConfig, ENDPOINT_KEY};

// set at build time, e.g. REGFORM_ENDPOINT=http://localhost:9000 trunk serve
const REGFORM_ENDPOINT: Option<&str> = option_env!("REGFORM_ENDPOINT");

pub const PAGE_TITLE: &str = "Registration";

pub fn registration_config() -> EnvironmentConfig {
    let mut settings = HashMap::new();
    if let Some(endpoint) = REGFORM_ENDPOINT {
        settings.insert(ENDPOINT_KEY.to_string(), endpoint.to_string());
    }
    EnvironmentConfig::new(settings)
}
