use std::collections::HashMap;

use bytes::Bytes;

use super::HttpClient;
use crate::{EnvironmentConfig, RegformError};

type HttpResult = Result<(Bytes, u16), RegformError>;

pub async fn post_json(
    url: &str,
    body: Vec<u8>,
    config: &EnvironmentConfig,
) -> HttpResult {
    let client = HttpClient::new().with_timeout(config.timeout()?);
    let headers = json_headers();
    let response = client.post(url, Some(&headers), Some(body.into())).await?;
    let status = response.status_code();
    Ok((response.into_body(), status))
}

fn json_headers() -> HashMap<String, String> {
    let mut headers = HashMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers.insert("Accept".to_string(), "application/json".to_string());
    headers
}
