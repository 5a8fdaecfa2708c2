//! Session and Generation Handler
//!
//! Handles the two form submissions: login and "generate synthetic rows".
//! Each is one request followed by one page update.

mod generate;
mod login;

pub use generate::{confirmation_message, GenerationRequest};
pub use login::{
    Credentials, LoginOutcome, LoginResponse, INVALID_CREDENTIALS_MESSAGE, LOGIN_SUCCESS_MESSAGE,
};

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::backend::Backend;
use crate::error::BackendResult;
use crate::view::{Notice, SessionView};

/// Page the browser lands on after a successful login
pub const DEFAULT_HOME_PATH: &str = "index.html";

/// Drives the login and generation forms against a backend
pub struct SessionHandler<B> {
    backend: B,
    home_path: String,
}

impl<B: Backend> SessionHandler<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            home_path: DEFAULT_HOME_PATH.to_string(),
        }
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Submit the login form.
    ///
    /// `status: "success"` shows a success notice and navigates home; any
    /// other reply shows "Invalid credentials" and stays put. Transport
    /// and parse failures show an error notice and are returned.
    pub async fn login<V>(
        &self,
        credentials: &Credentials,
        view: &mut V,
    ) -> BackendResult<LoginOutcome>
    where
        V: SessionView + ?Sized,
    {
        let reply = match self.backend.login(credentials).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(username = credentials.username(), error = %e, "Login request failed");
                view.notify(Notice::error(format!("Login failed: {}", e)));
                return Err(e);
            }
        };

        let response = LoginResponse::from_body(&reply.body);
        debug!(status = reply.status, body = %reply.body, "Login reply");

        if response.is_success() {
            info!(username = credentials.username(), "Login accepted");
            view.notify(Notice::success(LOGIN_SUCCESS_MESSAGE));
            view.navigate(&self.home_path);
            Ok(LoginOutcome::Success {
                redirect: self.home_path.clone(),
                token: response.token,
            })
        } else {
            warn!(
                username = credentials.username(),
                status = ?response.status,
                message = ?response.message,
                "Login rejected"
            );
            view.notify(Notice::error(INVALID_CREDENTIALS_MESSAGE));
            Ok(LoginOutcome::Rejected {
                message: response.message,
            })
        }
    }

    /// Submit the generation form.
    ///
    /// The status element is cleared first. Any JSON reply counts as done
    /// and writes the confirmation into it. The reply body is only logged.
    pub async fn generate<V>(&self, request: &GenerationRequest, view: &mut V) -> BackendResult<Value>
    where
        V: SessionView + ?Sized,
    {
        view.clear_status_message();

        let reply = match self.backend.generate(request).await {
            Ok(reply) => reply,
            Err(e) => {
                error!(rows = request.rows(), error = %e, "Generate request failed");
                view.notify(Notice::error(format!("Generation failed: {}", e)));
                return Err(e);
            }
        };

        if reply.is_success() {
            info!(rows = request.rows(), body = %reply.body, "Generate reply");
        } else {
            warn!(rows = request.rows(), status = reply.status, body = %reply.body, "Generate reply with error status");
        }

        view.set_status_message(&request.confirmation());
        Ok(reply.body)
    }
}
