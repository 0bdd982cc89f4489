/// The one failure an exchange with the chat endpoint can produce.
///
/// Network errors, non-success statuses and undecodable bodies all collapse
/// into this type; the string is kept for diagnostics only.
#[derive(Debug, Clone, thiserror::Error)]
#[error("request failed: {0}")]
pub struct RequestFailed(String);

impl RequestFailed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    pub fn reason(&self) -> &str {
        &self.0
    }
}

impl From<reqwest::Error> for RequestFailed {
    fn from(err: reqwest::Error) -> Self {
        RequestFailed::new(err.to_string())
    }
}

impl From<serde_json::Error> for RequestFailed {
    fn from(err: serde_json::Error) -> Self {
        RequestFailed::new(format!("malformed response body: {err}"))
    }
}

pub type RequestResult<T> = Result<T, RequestFailed>;
