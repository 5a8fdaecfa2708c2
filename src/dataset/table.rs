//! Dataset table
//!
//! One row per record, a 1-based index and three data columns.

use crate::records::{format_scalar, RecordShape, SampleRecord, TypedRecord};

/// A data column: the demographic field, else the clinical one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub primary: &'static str,
    pub fallback: &'static str,
}

pub const TABLE_COLUMNS: [TableColumn; 3] = [
    TableColumn {
        header: "Name / Pregnancies",
        primary: "name",
        fallback: "pregnancies",
    },
    TableColumn {
        header: "Age / Glucose",
        primary: "age",
        fallback: "glucose",
    },
    TableColumn {
        header: "Class / Outcome",
        primary: "class",
        fallback: "outcome",
    },
];

/// A rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// 1-based position in the dataset
    pub index: usize,
    pub shape: RecordShape,
    pub cells: [String; 3],
}

impl TableRow {
    pub fn from_record(index: usize, record: &SampleRecord) -> Self {
        let cells = match record.typed() {
            TypedRecord::Demographic { name, age, class } => {
                [format_scalar(name), format_scalar(age), format_scalar(class)]
            }
            TypedRecord::Clinical {
                pregnancies,
                glucose,
                outcome,
            } => [
                format_scalar(pregnancies),
                format_scalar(glucose),
                format_scalar(outcome),
            ],
            // Incomplete rows resolve each column on its own
            TypedRecord::Unrecognized(record) => TABLE_COLUMNS.map(|column| {
                record
                    .resolve(column.primary, column.fallback)
                    .map(format_scalar)
                    .unwrap_or_default()
            }),
        };

        Self {
            index,
            shape: record.shape(),
            cells,
        }
    }
}

/// The dataset table, rebuilt from scratch on every load
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetTable {
    rows: Vec<TableRow>,
}

impl DatasetTable {
    pub fn from_records(records: &[SampleRecord]) -> Self {
        let rows = records
            .iter()
            .enumerate()
            .map(|(idx, record)| TableRow::from_record(idx + 1, record))
            .collect();
        Self { rows }
    }

    pub fn headers() -> [&'static str; 4] {
        [
            "#",
            TABLE_COLUMNS[0].header,
            TABLE_COLUMNS[1].header,
            TABLE_COLUMNS[2].header,
        ]
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> SampleRecord {
        SampleRecord::new()
            .with("name", "Alice")
            .with("age", 34)
            .with("class", "A")
    }

    fn clinical() -> SampleRecord {
        SampleRecord::new()
            .with("pregnancies", 6)
            .with("glucose", 148)
            .with("bmi", 33.6)
            .with("outcome", 1)
    }

    #[test]
    fn test_one_row_per_record_with_1_based_index() {
        let records = vec![alice(), clinical(), alice()];
        let table = DatasetTable::from_records(&records);

        assert_eq!(table.len(), 3);
        let indices: Vec<usize> = table.rows().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![1, 2, 3]);
    }

    #[test]
    fn test_column_fallback_per_row() {
        let table = DatasetTable::from_records(&[alice(), clinical()]);

        assert_eq!(table.rows()[0].cells, ["Alice", "34", "A"]);
        assert_eq!(table.rows()[0].shape, RecordShape::Demographic);
        assert_eq!(table.rows()[1].cells, ["6", "148", "1"]);
        assert_eq!(table.rows()[1].shape, RecordShape::Clinical);
    }

    #[test]
    fn test_mixed_record_resolves_each_column() {
        let mixed = SampleRecord::new()
            .with("name", "Carol")
            .with("glucose", 90)
            .with("outcome", 0);
        let row = TableRow::from_record(1, &mixed);

        assert_eq!(row.shape, RecordShape::Unrecognized);
        assert_eq!(row.cells, ["Carol", "90", "0"]);
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let row = TableRow::from_record(1, &SampleRecord::new().with("bmi", 22.1));
        assert_eq!(row.cells, ["", "", ""]);
    }

    #[test]
    fn test_empty_dataset_renders_no_rows() {
        let table = DatasetTable::from_records(&[]);
        assert!(table.is_empty());
        assert_eq!(DatasetTable::headers()[0], "#");
    }
}
