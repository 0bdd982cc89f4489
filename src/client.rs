use crate::config::ChatConfig;
use crate::error::{RequestFailed, RequestResult};
use crate::types::{ChatRequest, ChatResponse, ErrorBody};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// One request/response exchange with whatever answers the chat.
///
/// Browser futures are not `Send`, so the wasm build drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ChatBackend {
    async fn send(&self, message: &str) -> RequestResult<String>;
}

/// Posts `{"message": ..}` to the configured endpoint and reads `{"response": ..}` back.
#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    endpoint: String,
}

impl HttpBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(config.endpoint.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Make `endpoint` absolute, joining a path such as `/chat` onto `origin`.
pub fn resolve_endpoint(endpoint: &str, origin: Option<&str>) -> RequestResult<Url> {
    if let Ok(url) = Url::parse(endpoint) {
        return Ok(url);
    }
    let origin = origin.ok_or_else(|| {
        RequestFailed::new(format!("relative endpoint {endpoint} needs a page origin"))
    })?;
    Url::parse(origin)
        .and_then(|base| base.join(endpoint))
        .map_err(|err| RequestFailed::new(format!("invalid endpoint {endpoint}: {err}")))
}

/// Origin of the page hosting the widget.
#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ChatBackend for HttpBackend {
    async fn send(&self, message: &str) -> RequestResult<String> {
        let url = resolve_endpoint(&self.endpoint, page_origin().as_deref())?;
        tracing::debug!(%url, bytes = message.len(), "posting chat message");
        let response = self
            .client
            .post(url)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "chat endpoint returned an error status");
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .map(|parsed| parsed.error)
                .unwrap_or(body);
            return Err(RequestFailed::new(format!(
                "chat endpoint error {status}: {detail}"
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        Ok(parsed.response)
    }
}
