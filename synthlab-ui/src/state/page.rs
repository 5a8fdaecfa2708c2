//! Reactive page surface
//!
//! Implements the core's page traits by writing into [`GlobalState`]
//! signals; components re-render from there.

use std::rc::Rc;

use synthlab::{BarChart, DatasetTable, DatasetView, Notice, Notify, SessionView};

use super::global::{GlobalState, TableState};

/// Page surface backed by signals
pub struct SignalPage {
    state: GlobalState,
    navigate: Option<Rc<dyn Fn(&str)>>,
}

impl SignalPage {
    pub fn new(state: GlobalState) -> Self {
        Self {
            state,
            navigate: None,
        }
    }

    /// Use `navigate` for navigation side effects (the router's navigate)
    pub fn with_navigation(mut self, navigate: Rc<dyn Fn(&str)>) -> Self {
        self.navigate = Some(navigate);
        self
    }
}

/// Turn a page path like `index.html` into an app route
pub fn route_for(path: &str) -> String {
    let trimmed = path.trim().trim_start_matches("./").trim_start_matches('/');
    match trimmed {
        "" | "index.html" => "/".to_string(),
        other => format!("/{}", other.trim_end_matches(".html")),
    }
}

impl Notify for SignalPage {
    fn notify(&mut self, notice: Notice) {
        self.state.show_notice(&notice);
    }
}

impl DatasetView for SignalPage {
    fn render_table(&mut self, table: &DatasetTable) {
        self.state.table.set(TableState::Loaded(table.clone()));
    }

    fn draw_charts(&mut self, charts: &[BarChart]) {
        self.state.charts.set(charts.to_vec());
    }
}

impl SessionView for SignalPage {
    fn navigate(&mut self, path: &str) {
        let route = route_for(path);
        match &self.navigate {
            Some(navigate) => navigate(&route),
            None => web_sys::console::warn_1(&format!("No router to navigate to {}", route).into()),
        }
    }

    fn set_status_message(&mut self, message: &str) {
        self.state.status_message.set(Some(message.to_string()));
    }

    fn clear_status_message(&mut self) {
        self.state.status_message.set(None);
    }
}
