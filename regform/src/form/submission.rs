use std::fmt;

use bytes::Bytes;
use serde::Deserialize;

use crate::RegformError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    Success(String),
    Failure(String),
}

impl SubmissionResult {
    pub fn success(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success(msg) => Some(msg),
            SubmissionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionResult::Failure(msg) => Some(msg),
            SubmissionResult::Success(_) => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success(_))
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionResult::Success(msg) => write!(f, "{}!", msg),
            SubmissionResult::Failure(msg) => write!(f, "{}", msg),
        }
    }
}

/// Raw answer of the registration endpoint.
#[derive(Debug, Clone)]
pub struct ServerResponse {
    status: u16,
    body: Bytes,
}

#[derive(Debug, Deserialize)]
struct ServerMessage {
    message: String,
}

impl ServerResponse {
    pub fn new<B: Into<Bytes>>(status: u16, body: B) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn message(&self) -> Result<String, RegformError> {
        let parsed: ServerMessage = serde_json::from_slice(&self.body)?;
        Ok(parsed.message)
    }

    pub fn into_result(self) -> SubmissionResult {
        match (self.is_success(), self.message()) {
            (true, Ok(message)) => SubmissionResult::Success(message),
            (true, Err(err)) => SubmissionResult::Failure(format!(
                "Unreadable response from server: {}",
                err
            )),
            (false, Ok(message)) => SubmissionResult::Failure(message),
            (false, Err(_)) => {
                SubmissionResult::Failure(format!("HTTP {}", self.status))
            }
        }
    }
}

impl From<Result<ServerResponse, RegformError>> for SubmissionResult {
    fn from(outcome: Result<ServerResponse, RegformError>) -> Self {
        match outcome {
            Ok(response) => response.into_result(),
            Err(err) => SubmissionResult::Failure(err.to_string()),
        }
    }
}
