use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, Error as AnyhowError, Result};
use bytes::{Bytes, BytesMut};
use http_body_util::combinators::BoxBody;
use http_body_util::{BodyExt, Empty, Full};
use hyper::header::{HeaderName, HeaderValue};
use hyper::{Request, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tokio::time::timeout;

#[derive(Debug)]
pub struct HttpClientResponse {
    body: Bytes,
    status_code: u16,
}

impl HttpClientResponse {
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }
}

#[derive(Debug, Clone)]
pub enum HttpClientError {
    ConnectionError(String),
    Timeout,
    InvalidRequest(String),
    Other(String),
}

impl fmt::Display for HttpClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpClientError::ConnectionError(e) => {
                write!(f, "ConnectionError: {}", e)
            }
            HttpClientError::Timeout => write!(f, "Timeout"),
            HttpClientError::InvalidRequest(e) => {
                write!(f, "InvalidRequest: {}", e)
            }
            HttpClientError::Other(e) => write!(f, "Other: {}", e),
        }
    }
}

impl From<hyper::http::Error> for HttpClientError {
    fn from(err: hyper::http::Error) -> Self {
        HttpClientError::InvalidRequest(err.to_string())
    }
}

impl From<AnyhowError> for HttpClientError {
    fn from(err: AnyhowError) -> Self {
        HttpClientError::Other(err.to_string())
    }
}

pub type HttpClientResult = Result<HttpClientResponse, HttpClientError>;

/// Unlike a plain transport, non-2xx answers are returned as responses:
/// the body of an error response is what the caller wants to show.
#[derive(Clone)]
pub struct HttpClient {
    client: Client<
        HttpsConnector<HttpConnector>,
        BoxBody<bytes::Bytes, Infallible>,
    >,
    timeout: Duration,
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient {
    pub fn new() -> Self {
        let https = HttpsConnector::new();

        let client: Client<
            HttpsConnector<HttpConnector>,
            BoxBody<Bytes, Infallible>,
        > = Client::builder(TokioExecutor::new())
            .build::<_, BoxBody<Bytes, Infallible>>(https);

        HttpClient {
            client,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn request(
        &self,
        method: &str,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<Bytes>,
    ) -> HttpClientResult {
        log::debug!("{} {}", method, url);
        let uri = Uri::from_str(url)
            .map_err(|e| HttpClientError::InvalidRequest(e.to_string()))?;

        let mut req_builder = Request::builder().method(method).uri(uri);

        if let Some(headers_map) = headers {
            for (key, value) in headers_map.iter() {
                let header_name = HeaderName::from_str(key)
                    .map_err(|e| HttpClientError::InvalidRequest(e.to_string()))?;
                let header_value = HeaderValue::from_str(value)
                    .map_err(|e| HttpClientError::InvalidRequest(e.to_string()))?;
                req_builder = req_builder.header(header_name, header_value);
            }
        }
        let request = req_builder.body(create_request_body(body))?;

        // one deadline covers connect, headers and the full body
        match timeout(self.timeout, self.send(request, url)).await {
            Ok(result) => result,
            Err(_) => Err(HttpClientError::Timeout),
        }
    }

    async fn send(
        &self,
        request: Request<BoxBody<Bytes, Infallible>>,
        url: &str,
    ) -> HttpClientResult {
        let mut response = self
            .client
            .request(request)
            .await
            .map_err(|_| HttpClientError::ConnectionError(url.to_string()))?;

        let status_code = response.status().as_u16();

        let mut body_bytes = BytesMut::new();
        while let Some(next) = response.frame().await {
            let frame = next.map_err(|e| anyhow!(e))?;
            if let Some(chunk) = frame.data_ref() {
                body_bytes.extend_from_slice(chunk);
            }
        }

        Ok(HttpClientResponse {
            body: body_bytes.into(),
            status_code,
        })
    }

    pub async fn post(
        &self,
        url: &str,
        headers: Option<&HashMap<String, String>>,
        body: Option<Bytes>,
    ) -> HttpClientResult {
        self.request("POST", url, headers, body).await
    }
}

fn create_request_body(body_content: Option<Bytes>) -> BoxBody<Bytes, Infallible> {
    match body_content {
        Some(content) => {
            let full_body: Full<Bytes> = Full::new(content);
            BoxBody::new(full_body)
        }
        None => {
            let empty_body: Empty<Bytes> = Empty::new();
            BoxBody::new(empty_body)
        }
    }
}
