//! Bar chart data
//!
//! A chart summarizes a dataset by its first record: field names become
//! the categories and field values the bar heights.

use super::DatasetKind;
use crate::records::{numeric_value, SampleRecord};

/// Bar chart for one chart mount
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub kind: DatasetKind,
    pub labels: Vec<String>,
    /// `None` where the field value is not numeric (no bar is drawn)
    pub values: Vec<Option<f64>>,
}

impl BarChart {
    /// Build the chart from the first record, or `None` for an empty dataset
    pub fn from_first_record(kind: DatasetKind, records: &[SampleRecord]) -> Option<Self> {
        let first = records.first()?;

        let (labels, values) = first
            .fields()
            .map(|(name, value)| (name.to_string(), numeric_value(value)))
            .unzip();

        Some(Self {
            kind,
            labels,
            values,
        })
    }

    pub fn label(&self) -> &'static str {
        self.kind.chart_label()
    }

    pub fn color(&self) -> &'static str {
        self.kind.color()
    }

    pub fn mount_id(&self) -> &'static str {
        self.kind.mount_id()
    }

    /// Label/value pairs in field order
    pub fn bars(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    /// Largest absolute bar value, used to scale the drawing
    pub fn max_magnitude(&self) -> f64 {
        self.values
            .iter()
            .flatten()
            .fold(0.0_f64, |acc, v| acc.max(v.abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uses_first_record_only() {
        let records = vec![
            SampleRecord::new()
                .with("pregnancies", 6)
                .with("glucose", 148)
                .with("outcome", 1),
            SampleRecord::new()
                .with("insulin", 0)
                .with("age", 50),
        ];

        let chart = BarChart::from_first_record(DatasetKind::Sample, &records).unwrap();
        assert_eq!(chart.labels, vec!["pregnancies", "glucose", "outcome"]);
        assert_eq!(chart.values, vec![Some(6.0), Some(148.0), Some(1.0)]);
        assert_eq!(chart.label(), "Real Dataset");
        assert_eq!(chart.mount_id(), "beforeChart");
    }

    #[test]
    fn test_non_numeric_values_become_gaps() {
        let records = vec![SampleRecord::new()
            .with("name", "Alice")
            .with("age", "34")
            .with("class", "A")];

        let chart = BarChart::from_first_record(DatasetKind::Synthetic, &records).unwrap();
        assert_eq!(chart.values, vec![None, Some(34.0), None]);
        assert_eq!(chart.color(), "#16a34a");
        assert_eq!(chart.max_magnitude(), 34.0);
    }

    #[test]
    fn test_empty_dataset_has_no_chart() {
        assert!(BarChart::from_first_record(DatasetKind::Sample, &[]).is_none());
    }
}
