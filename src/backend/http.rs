//! Native HTTP backend
//!
//! reqwest client for the synthetic-data backend.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{join_url, Backend, Endpoints, Reply};
use crate::config::BackendConfig;
use crate::dataset::DatasetKind;
use crate::error::{BackendError, BackendResult};
use crate::records::SampleRecord;
use crate::session::{Credentials, GenerationRequest};

/// Backend reached over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
    endpoints: Endpoints,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            endpoints: config.endpoints.clone(),
            token: config.token.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Use a bearer token for subsequent requests
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// POST a JSON body and read a JSON reply whatever the status
    async fn post_json<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> BackendResult<Reply> {
        let url = self.url(path);
        debug!(%url, "POST");

        let response = self
            .authorize(self.client.post(&url).json(body))
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(body) => Ok(Reply {
                status: status.as_u16(),
                body,
            }),
            Err(_) if !status.is_success() => Err(status_error(status, &bytes)),
            Err(e) => Err(BackendError::decode(path, e)),
        }
    }
}

fn status_error(status: StatusCode, body: &[u8]) -> BackendError {
    BackendError::Status {
        status: status.as_u16(),
        body: String::from_utf8_lossy(body).into_owned(),
    }
}

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_dataset(&self, kind: DatasetKind) -> BackendResult<Vec<SampleRecord>> {
        let path = self.endpoints.dataset(kind);
        let url = self.url(path);
        debug!(%url, dataset = %kind, "GET");

        let response = self.authorize(self.client.get(&url)).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            return Err(status_error(status, &bytes));
        }

        serde_json::from_slice(&bytes).map_err(|e| BackendError::decode(path, e))
    }

    async fn login(&self, credentials: &Credentials) -> BackendResult<Reply> {
        self.post_json(&self.endpoints.login, credentials).await
    }

    async fn generate(&self, request: &GenerationRequest) -> BackendResult<Reply> {
        self.post_json(&self.endpoints.generate, request).await
    }
}
