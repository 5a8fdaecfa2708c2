//! UI Components
//!
//! Reusable Leptos components for the pages.

pub mod bar_chart;
pub mod dataset_table;
pub mod loading;
pub mod nav;
pub mod toast;

pub use bar_chart::BarChartView;
pub use dataset_table::DatasetTableView;
pub use loading::{InlineLoading, LoadingOverlay};
pub use nav::Nav;
pub use toast::Toast;
