//! Dataset Loader
//!
//! Fetches the real and synthetic datasets, fills the dataset table from
//! the real one and draws one bar chart per dataset.
//!
//! ## Data Flow
//!
//! 1. Both datasets are requested concurrently
//! 2. The table renders as soon as the sample dataset arrives
//! 3. Both charts are drawn together once both datasets resolved

mod chart;
mod loader;
mod table;

pub use chart::BarChart;
pub use loader::{DatasetLoader, LoadError, LoadReport};
pub use table::{DatasetTable, TableColumn, TableRow, TABLE_COLUMNS};

use std::fmt;

/// The two datasets the backend serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    /// Real data uploaded to the backend
    Sample,
    /// Rows produced by the generator
    Synthetic,
}

impl DatasetKind {
    /// Legend label of the chart
    pub fn chart_label(self) -> &'static str {
        match self {
            DatasetKind::Sample => "Real Dataset",
            DatasetKind::Synthetic => "Synthetic Dataset",
        }
    }

    /// Bar color
    pub fn color(self) -> &'static str {
        match self {
            DatasetKind::Sample => "#2563eb",
            DatasetKind::Synthetic => "#16a34a",
        }
    }

    /// Id of the chart mount on the dataset page
    pub fn mount_id(self) -> &'static str {
        match self {
            DatasetKind::Sample => "beforeChart",
            DatasetKind::Synthetic => "afterChart",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Sample => write!(f, "sample"),
            DatasetKind::Synthetic => write!(f, "synthetic"),
        }
    }
}
