//! Terminal renderer
//!
//! Draws the page surface as text: an aligned table, horizontal bar charts
//! and one line per notice.

use std::io::{self, Write};

use super::{DatasetView, Notice, Notify, SessionView};
use crate::dataset::{BarChart, DatasetTable};
use crate::records::format_number;

/// Width of the longest bar, in cells
const BAR_WIDTH: usize = 40;

/// Page surface that writes to a terminal (or any writer)
pub struct TerminalPage<W: Write> {
    out: W,
    location: Option<String>,
}

impl TerminalPage<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalPage<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            location: None,
        }
    }

    /// Where the last navigation pointed, if any
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a line outside of the page model (hints, tokens)
    pub fn write_line(&mut self, line: &str) {
        self.emit(format!("{}\n", line));
    }

    fn emit(&mut self, text: String) {
        if let Err(e) = self.out.write_all(text.as_bytes()).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to write to terminal");
        }
    }
}

/// Lay out the table as aligned text
pub fn render_table(table: &DatasetTable) -> String {
    let headers = DatasetTable::headers();
    let rows: Vec<[String; 4]> = table
        .rows()
        .iter()
        .map(|row| {
            [
                row.index.to_string(),
                row.cells[0].clone(),
                row.cells[1].clone(),
                row.cells[2].clone(),
            ]
        })
        .collect();

    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&table_line(headers, &widths));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+"),
    );
    out.push('\n');

    if rows.is_empty() {
        out.push_str(" (no records)\n");
    }
    for row in &rows {
        let cells = [
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ];
        out.push_str(&table_line(cells, &widths));
        out.push('\n');
    }
    out
}

fn table_line(cells: [&str; 4], widths: &[usize; 4]) -> String {
    cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!(" {:<width$} ", cell, width = *width))
        .collect::<Vec<_>>()
        .join("|")
}

/// Lay out one bar chart, bars scaled to the largest magnitude
pub fn render_chart(chart: &BarChart) -> String {
    let label_width = chart
        .labels
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let max = chart.max_magnitude();

    let mut out = format!("{} [{}]\n", chart.label(), chart.mount_id());
    for (label, value) in chart.bars() {
        let bar = match value {
            Some(v) => {
                let len = if max > 0.0 {
                    ((v.abs() / max) * BAR_WIDTH as f64).round() as usize
                } else {
                    0
                };
                let glyph = if v < 0.0 { "░" } else { "█" };
                format!("{} {}", glyph.repeat(len), format_number(v))
            }
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "  {:<width$} │{}\n",
            label,
            bar,
            width = label_width
        ));
    }
    out
}

impl<W: Write> Notify for TerminalPage<W> {
    fn notify(&mut self, notice: Notice) {
        self.emit(format!("{} {}\n", notice.icon(), notice.message));
    }
}

impl<W: Write> DatasetView for TerminalPage<W> {
    fn render_table(&mut self, table: &DatasetTable) {
        self.emit(render_table(table));
    }

    fn draw_charts(&mut self, charts: &[BarChart]) {
        let text = charts
            .iter()
            .map(render_chart)
            .collect::<Vec<_>>()
            .join("\n");
        self.emit(format!("\n{}", text));
    }
}

impl<W: Write> SessionView for TerminalPage<W> {
    fn navigate(&mut self, path: &str) {
        self.location = Some(path.to_string());
        self.emit(format!("→ {}\n", path));
    }

    fn set_status_message(&mut self, message: &str) {
        self.emit(format!("{}\n", message));
    }

    // Printed lines stay; nothing to clear
    fn clear_status_message(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetKind;
    use crate::records::SampleRecord;

    fn page_output(page: TerminalPage<Vec<u8>>) -> String {
        String::from_utf8(page.into_inner()).unwrap()
    }

    #[test]
    fn test_render_table_rows() {
        let table = DatasetTable::from_records(&[
            SampleRecord::new()
                .with("name", "Alice")
                .with("age", 34)
                .with("class", "A"),
            SampleRecord::new()
                .with("pregnancies", 6)
                .with("glucose", 148)
                .with("outcome", 1),
        ]);

        let text = render_table(&table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Name / Pregnancies"));
        assert!(lines[2].starts_with(" 1 "));
        assert!(lines[2].contains("Alice"));
        assert!(lines[3].starts_with(" 2 "));
        assert!(lines[3].contains("148"));
    }

    #[test]
    fn test_render_empty_table() {
        let text = render_table(&DatasetTable::default());
        assert!(text.contains("(no records)"));
    }

    #[test]
    fn test_render_chart_scales_bars() {
        let chart = BarChart::from_first_record(
            DatasetKind::Sample,
            &[SampleRecord::new()
                .with("glucose", 100)
                .with("outcome", 50)
                .with("name", "Alice")],
        )
        .unwrap();

        let text = render_chart(&chart);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Real Dataset [beforeChart]");
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[2].matches('█').count(), BAR_WIDTH / 2);
        assert!(lines[3].ends_with("│-"));
    }

    #[test]
    fn test_notices_and_navigation() {
        let mut page = TerminalPage::new(Vec::new());
        page.notify(Notice::success("Login successful"));
        page.navigate("index.html");
        page.set_status_message("done");

        assert_eq!(page.location(), Some("index.html"));
        let text = page_output(page);
        assert_eq!(text, "✓ Login successful\n→ index.html\ndone\n");
    }
}
