//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;
use synthlab::{BarChart, DatasetKind, DatasetTable, LoadError, Notice, NoticeLevel};

use crate::api::{get_api_base, BrowserBackend};

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Backend base URL
    pub api_base: RwSignal<String>,
    /// Bearer token from the last successful login
    pub token: RwSignal<Option<String>>,
    /// Dataset table contents
    pub table: RwSignal<TableState>,
    /// Charts drawn on the dataset page
    pub charts: RwSignal<Vec<BarChart>>,
    /// Text of the generation form's response element
    pub status_message: RwSignal<Option<String>>,
    /// Global loading state
    pub loading: RwSignal<bool>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// What the dataset table currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum TableState {
    Loading,
    Loaded(DatasetTable),
    /// The sample dataset could not be fetched
    Failed(String),
}

impl TableState {
    /// State after a load ended with `err`. Only a sample failure touches
    /// the table; a rendered table survives a synthetic failure.
    pub fn after_error(self, err: &LoadError) -> Self {
        match (self, err) {
            (
                TableState::Loading,
                LoadError::Fetch {
                    kind: DatasetKind::Sample,
                    source,
                },
            ) => TableState::Failed(source.to_string()),
            (state, _) => state,
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        api_base: create_rw_signal(get_api_base()),
        token: create_rw_signal(None),
        table: create_rw_signal(TableState::Loading),
        charts: create_rw_signal(Vec::new()),
        status_message: create_rw_signal(None),
        loading: create_rw_signal(false),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Backend for the current base URL and token
    pub fn backend(&self) -> BrowserBackend {
        BrowserBackend::new(self.api_base.get_untracked(), self.token.get_untracked())
    }

    /// Route a core notice to the matching toast
    pub fn show_notice(&self, notice: &Notice) {
        match notice.level {
            NoticeLevel::Success => self.show_success(&notice.message),
            NoticeLevel::Error => self.show_error(&notice.message),
        }
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}
