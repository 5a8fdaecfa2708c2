//! Backend Interface
//!
//! The four calls the front end makes against the synthetic-data backend.
//!
//! ## Endpoints
//!
//! | Method | Path (default) | Body |
//! |--------|----------------|------|
//! | GET | `/get-sample` | - |
//! | GET | `/get-synthetic` | - |
//! | POST | `/login` | `{username, password}` |
//! | POST | `/generate` | `{rows}` |
//!
//! [`HttpBackend`] implements the trait natively; the web UI implements it
//! on top of the browser's fetch.

#[cfg(feature = "client")]
mod http;

#[cfg(feature = "client")]
pub use http::HttpBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::DatasetKind;
use crate::error::BackendResult;
use crate::records::SampleRecord;
use crate::session::{Credentials, GenerationRequest};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// A JSON reply to a POST, kept even for non-success statuses
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: u16,
    pub body: Value,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Calls the front end makes against the backend
#[async_trait(?Send)]
pub trait Backend {
    /// Fetch a dataset as a list of records
    async fn fetch_dataset(&self, kind: DatasetKind) -> BackendResult<Vec<SampleRecord>>;

    /// Submit credentials. The reply body is returned whatever the status.
    async fn login(&self, credentials: &Credentials) -> BackendResult<Reply>;

    /// Ask the backend to generate synthetic rows
    async fn generate(&self, request: &GenerationRequest) -> BackendResult<Reply>;
}

/// Endpoint paths, relative to the base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub sample: String,
    pub synthetic: String,
    pub login: String,
    pub generate: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sample: "/get-sample".to_string(),
            synthetic: "/get-synthetic".to_string(),
            login: "/login".to_string(),
            generate: "/generate".to_string(),
        }
    }
}

impl Endpoints {
    pub fn dataset(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Sample => &self.sample,
            DatasetKind::Synthetic => &self.synthetic,
        }
    }
}

/// Join a base URL and an endpoint path with exactly one slash
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use crate::error::BackendError;
    use std::cell::RefCell;

    /// Canned backend that records what it was asked
    #[derive(Default)]
    pub struct FakeBackend {
        pub sample: Option<BackendResult<Vec<SampleRecord>>>,
        pub synthetic: Option<BackendResult<Vec<SampleRecord>>>,
        pub login_reply: Option<BackendResult<Reply>>,
        pub generate_reply: Option<BackendResult<Reply>>,
        pub calls: RefCell<Vec<String>>,
        pub bodies: RefCell<Vec<Value>>,
    }

    fn canned<T: Clone>(slot: &Option<BackendResult<T>>) -> BackendResult<T> {
        slot.clone()
            .unwrap_or_else(|| Err(BackendError::Unavailable("not stubbed".to_string())))
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        async fn fetch_dataset(&self, kind: DatasetKind) -> BackendResult<Vec<SampleRecord>> {
            self.calls.borrow_mut().push(format!("fetch {}", kind));
            match kind {
                DatasetKind::Sample => canned(&self.sample),
                DatasetKind::Synthetic => canned(&self.synthetic),
            }
        }

        async fn login(&self, credentials: &Credentials) -> BackendResult<Reply> {
            self.calls.borrow_mut().push("login".to_string());
            self.bodies
                .borrow_mut()
                .push(serde_json::to_value(credentials).unwrap());
            canned(&self.login_reply)
        }

        async fn generate(&self, request: &GenerationRequest) -> BackendResult<Reply> {
            self.calls.borrow_mut().push("generate".to_string());
            self.bodies
                .borrow_mut()
                .push(serde_json::to_value(request).unwrap());
            canned(&self.generate_reply)
        }
    }
}
