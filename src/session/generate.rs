//! Synthetic row generation request

use serde::Serialize;

/// The row count exactly as typed into the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    rows: String,
}

impl GenerationRequest {
    pub fn new(rows: impl Into<String>) -> Self {
        Self { rows: rows.into() }
    }

    pub fn rows(&self) -> &str {
        &self.rows
    }

    pub fn confirmation(&self) -> String {
        confirmation_message(&self.rows)
    }
}

/// Text written into the status element once the backend answered
pub fn confirmation_message(rows: &str) -> String {
    format!(
        "✅ Generated {} rows of synthetic data. Check dataset page!",
        rows
    )
}
