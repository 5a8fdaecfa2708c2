//! Dataset page loader

use futures_util::future::join;
use thiserror::Error;
use tracing::{error, info, warn};

use super::{BarChart, DatasetKind, DatasetTable};
use crate::backend::Backend;
use crate::error::BackendError;
use crate::records::SampleRecord;
use crate::view::{DatasetView, Notice};

/// What a load put on the page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub rows_rendered: usize,
    pub charts_drawn: Vec<DatasetKind>,
    /// Charts left out because their dataset was empty
    pub charts_skipped: Vec<DatasetKind>,
}

/// Errors that abort a dataset load
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Failed to load {kind} dataset: {source}")]
    Fetch {
        kind: DatasetKind,
        #[source]
        source: BackendError,
    },
}

/// Fills the dataset page from the backend
pub struct DatasetLoader<B> {
    backend: B,
}

impl<B: Backend> DatasetLoader<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load both datasets and render them.
    ///
    /// Both requests run concurrently. The table is rendered as soon as the
    /// sample dataset arrives; the charts are drawn together once both
    /// datasets are in. Failures are shown on the page and returned.
    pub async fn load<V>(&self, view: &mut V) -> Result<LoadReport, LoadError>
    where
        V: DatasetView + ?Sized,
    {
        let sample_then_table = async {
            let records = self.backend.fetch_dataset(DatasetKind::Sample).await;
            if let Ok(records) = &records {
                view.render_table(&DatasetTable::from_records(records));
            }
            records
        };
        let synthetic = self.backend.fetch_dataset(DatasetKind::Synthetic);

        let (sample, synthetic) = join(sample_then_table, synthetic).await;

        // Report both failures before giving up on either
        let sample = Self::checked(DatasetKind::Sample, sample, view);
        let synthetic = Self::checked(DatasetKind::Synthetic, synthetic, view);
        let (sample, synthetic) = (sample?, synthetic?);

        let mut report = LoadReport {
            rows_rendered: sample.len(),
            ..Default::default()
        };

        let mut charts = Vec::with_capacity(2);
        for (kind, records) in [
            (DatasetKind::Sample, &sample),
            (DatasetKind::Synthetic, &synthetic),
        ] {
            match BarChart::from_first_record(kind, records) {
                Some(chart) => {
                    report.charts_drawn.push(kind);
                    charts.push(chart);
                }
                None => {
                    warn!(dataset = %kind, "Dataset is empty, skipping chart");
                    view.notify(Notice::error(format!(
                        "The {} dataset is empty; nothing to chart",
                        kind
                    )));
                    report.charts_skipped.push(kind);
                }
            }
        }

        if !charts.is_empty() {
            view.draw_charts(&charts);
        }

        info!(
            rows = report.rows_rendered,
            charts = report.charts_drawn.len(),
            skipped = report.charts_skipped.len(),
            "Datasets loaded"
        );

        Ok(report)
    }

    fn checked<V>(
        kind: DatasetKind,
        result: Result<Vec<SampleRecord>, BackendError>,
        view: &mut V,
    ) -> Result<Vec<SampleRecord>, LoadError>
    where
        V: DatasetView + ?Sized,
    {
        result.map_err(|source| {
            error!(dataset = %kind, error = %source, "Error loading dataset");
            view.notify(Notice::error(format!(
                "Could not load the {} dataset: {}",
                kind, source
            )));
            LoadError::Fetch { kind, source }
        })
    }
}
