//! HTTP API Client
//!
//! Fetch-based implementation of the backend calls.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde_json::Value;

use synthlab::{
    join_url, Backend, BackendError, BackendResult, Credentials, DatasetKind, Endpoints,
    GenerationRequest, Reply, SampleRecord, DEFAULT_BASE_URL,
};

const API_URL_KEY: &str = "synthlab_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten());

    stored
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

/// Backend reached through the browser's fetch
#[derive(Debug, Clone)]
pub struct BrowserBackend {
    base_url: String,
    endpoints: Endpoints,
    token: Option<String>,
}

impl BrowserBackend {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        Self {
            base_url,
            endpoints: Endpoints::default(),
            token,
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    async fn post_json<T: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> BackendResult<Reply> {
        let response = self
            .authorize(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| BackendError::Transport(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(network_error)?;

        let (status, ok, text) = read_body(&response).await?;
        match serde_json::from_str::<Value>(&text) {
            Ok(body) => Ok(Reply { status, body }),
            Err(_) if !ok => Err(BackendError::Status { status, body: text }),
            Err(e) => Err(BackendError::decode(path, e)),
        }
    }
}

fn network_error(err: gloo_net::Error) -> BackendError {
    BackendError::Unavailable(format!("Network error: {}", err))
}

async fn read_body(response: &Response) -> BackendResult<(u16, bool, String)> {
    let text = response.text().await.map_err(network_error)?;
    Ok((response.status(), response.ok(), text))
}

#[async_trait(?Send)]
impl Backend for BrowserBackend {
    async fn fetch_dataset(&self, kind: DatasetKind) -> BackendResult<Vec<SampleRecord>> {
        let path = self.endpoints.dataset(kind);

        let response = self
            .authorize(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(network_error)?;

        let (status, ok, text) = read_body(&response).await?;
        if !ok {
            return Err(BackendError::Status { status, body: text });
        }

        serde_json::from_str(&text).map_err(|e| BackendError::decode(path, e))
    }

    async fn login(&self, credentials: &Credentials) -> BackendResult<Reply> {
        self.post_json(&self.endpoints.login, credentials).await
    }

    async fn generate(&self, request: &GenerationRequest) -> BackendResult<Reply> {
        self.post_json(&self.endpoints.generate, request).await
    }
}
