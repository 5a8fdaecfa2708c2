//! Page Surface
//!
//! What the handlers can do to the page: fill the dataset table, draw the
//! charts, show a notice, write the status line and navigate. The terminal
//! renderer and the web UI each implement these traits.

mod terminal;

pub use terminal::TerminalPage;

use crate::dataset::{BarChart, DatasetTable};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A non-blocking notification shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "✓",
            NoticeLevel::Error => "✕",
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Anything that can show a notice
pub trait Notify {
    fn notify(&mut self, notice: Notice);
}

/// The dataset page
pub trait DatasetView: Notify {
    /// Replace the table contents
    fn render_table(&mut self, table: &DatasetTable);

    /// Draw a batch of charts that should appear together
    fn draw_charts(&mut self, charts: &[BarChart]);
}

/// The login and generation forms
pub trait SessionView: Notify {
    fn navigate(&mut self, path: &str);

    /// Write into the generation form's response element
    fn set_status_message(&mut self, message: &str);

    /// Empty the response element
    fn clear_status_message(&mut self);
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Everything a page was asked to do, in order
    #[derive(Debug, PartialEq)]
    pub enum PageEvent {
        Table(DatasetTable),
        Charts(Vec<BarChart>),
        Notice(Notice),
        Navigate(String),
        Status(String),
        StatusCleared,
    }

    #[derive(Debug, Default)]
    pub struct RecordingPage {
        pub events: Vec<PageEvent>,
    }

    impl RecordingPage {
        pub fn notices(&self) -> Vec<&Notice> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    PageEvent::Notice(n) => Some(n),
                    _ => None,
                })
                .collect()
        }

        pub fn tables(&self) -> Vec<&DatasetTable> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    PageEvent::Table(t) => Some(t),
                    _ => None,
                })
                .collect()
        }

        pub fn chart_batches(&self) -> Vec<&Vec<BarChart>> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    PageEvent::Charts(c) => Some(c),
                    _ => None,
                })
                .collect()
        }

        pub fn navigations(&self) -> Vec<&str> {
            self.events
                .iter()
                .filter_map(|e| match e {
                    PageEvent::Navigate(p) => Some(p.as_str()),
                    _ => None,
                })
                .collect()
        }

        pub fn status(&self) -> Option<&str> {
            self.events
                .iter()
                .rev()
                .find_map(|e| match e {
                    PageEvent::Status(s) => Some(Some(s.as_str())),
                    PageEvent::StatusCleared => Some(None),
                    _ => None,
                })
                .flatten()
        }
    }

    impl Notify for RecordingPage {
        fn notify(&mut self, notice: Notice) {
            self.events.push(PageEvent::Notice(notice));
        }
    }

    impl DatasetView for RecordingPage {
        fn render_table(&mut self, table: &DatasetTable) {
            self.events.push(PageEvent::Table(table.clone()));
        }

        fn draw_charts(&mut self, charts: &[BarChart]) {
            self.events.push(PageEvent::Charts(charts.to_vec()));
        }
    }

    impl SessionView for RecordingPage {
        fn navigate(&mut self, path: &str) {
            self.events.push(PageEvent::Navigate(path.to_string()));
        }

        fn set_status_message(&mut self, message: &str) {
            self.events.push(PageEvent::Status(message.to_string()));
        }

        fn clear_status_message(&mut self) {
            self.events.push(PageEvent::StatusCleared);
        }
    }
}
