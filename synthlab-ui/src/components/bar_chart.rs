//! Bar Chart Component
//!
//! Category bar chart drawn on an HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use synthlab::{records::format_number, BarChart, DatasetKind};

use crate::state::global::GlobalState;

const MARGIN_LEFT: f64 = 60.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Share of a category slot the bar fills
const BAR_FILL: f64 = 0.7;

/// Bar chart mounted under the dataset's chart id
#[component]
pub fn BarChartView(kind: DatasetKind) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let charts = state.charts.get();
        let chart = charts.iter().find(|c| c.kind == kind);

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, chart);
        }
    });

    view! {
        <div class="bg-gray-800 rounded-xl p-4">
            <canvas
                id=kind.mount_id()
                node_ref=canvas_ref
                width="600"
                height="360"
                class="w-full rounded-lg"
            />
        </div>
    }
}

/// Placement of one category
#[derive(Debug, Clone, PartialEq)]
pub struct BarSlot {
    pub label: String,
    pub center_x: f64,
    /// `(x, y, width, height)`, absent for non-numeric values
    pub rect: Option<(f64, f64, f64, f64)>,
}

/// Value range shown on the y axis, always including zero
pub fn value_range(chart: &BarChart) -> (f64, f64) {
    let (min, max) = chart
        .values
        .iter()
        .flatten()
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)));
    if min == max {
        (min, min + 1.0)
    } else {
        (min, max)
    }
}

/// Lay out bars inside a canvas of the given size
pub fn bar_layout(chart: &BarChart, width: f64, height: f64) -> Vec<BarSlot> {
    let plot_width = width - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    let (min, max) = value_range(chart);
    let to_y = |v: f64| MARGIN_TOP + (max - v) / (max - min) * plot_height;

    let n = chart.labels.len().max(1) as f64;
    let slot = plot_width / n;
    let bar_width = slot * BAR_FILL;
    let zero_y = to_y(0.0);

    chart
        .bars()
        .enumerate()
        .map(|(i, (label, value))| {
            let center_x = MARGIN_LEFT + slot * (i as f64 + 0.5);
            let rect = value.map(|v| {
                let value_y = to_y(v);
                (
                    center_x - bar_width / 2.0,
                    value_y.min(zero_y),
                    bar_width,
                    (zero_y - value_y).abs(),
                )
            });
            BarSlot {
                label: label.to_string(),
                center_x,
                rect,
            }
        })
        .collect()
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, chart: Option<&BarChart>) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let chart = match chart {
        Some(chart) => chart,
        None => {
            ctx.set_fill_style(&"#6b7280".into());
            ctx.set_font("16px sans-serif");
            let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
            return;
        }
    };

    // Legend
    ctx.set_fill_style(&chart.color().into());
    ctx.fill_rect(MARGIN_LEFT, 12.0, 14.0, 14.0);
    ctx.set_fill_style(&"#d1d5db".into()); // gray-300
    ctx.set_font("13px sans-serif");
    let _ = ctx.fill_text(chart.label(), MARGIN_LEFT + 20.0, 24.0);

    // Horizontal grid lines with y-axis labels
    let (min, max) = value_range(chart);
    let plot_height = height - MARGIN_TOP - MARGIN_BOTTOM;
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    for i in 0..=5 {
        let y = MARGIN_TOP + (i as f64 / 5.0) * plot_height;
        ctx.begin_path();
        ctx.move_to(MARGIN_LEFT, y);
        ctx.line_to(width - MARGIN_RIGHT, y);
        ctx.stroke();

        let value = max - (i as f64 / 5.0) * (max - min);
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        let _ = ctx.fill_text(&format_number((value * 10.0).round() / 10.0), 5.0, y + 4.0);
    }

    // Bars and category labels
    for slot in bar_layout(chart, width, height) {
        if let Some((x, y, w, h)) = slot.rect {
            ctx.set_fill_style(&chart.color().into());
            ctx.fill_rect(x, y, w, h);
        }

        ctx.set_fill_style(&"#9ca3af".into());
        ctx.save();
        let _ = ctx.translate(slot.center_x, height - MARGIN_BOTTOM + 12.0);
        let _ = ctx.rotate(-std::f64::consts::FRAC_PI_4);
        ctx.set_text_align("right");
        let _ = ctx.fill_text(&slot.label, 0.0, 0.0);
        ctx.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthlab::SampleRecord;

    fn chart(record: SampleRecord) -> BarChart {
        BarChart::from_first_record(DatasetKind::Sample, &[record]).unwrap()
    }

    #[test]
    fn test_value_range_includes_zero() {
        let c = chart(SampleRecord::new().with("a", 10).with("b", 40));
        assert_eq!(value_range(&c), (0.0, 40.0));

        let c = chart(SampleRecord::new().with("a", -5).with("b", 5));
        assert_eq!(value_range(&c), (-5.0, 5.0));

        let c = chart(SampleRecord::new().with("name", "Alice"));
        assert_eq!(value_range(&c), (0.0, 1.0));
    }

    #[test]
    fn test_bar_layout() {
        let c = chart(
            SampleRecord::new()
                .with("glucose", 100)
                .with("outcome", 50)
                .with("name", "Alice"),
        );
        let slots = bar_layout(&c, 380.0, 200.0);

        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].label, "glucose");

        // Plot area is 300 x 100; tallest bar spans it
        let (_, y0, w0, h0) = slots[0].rect.unwrap();
        assert_eq!(y0, MARGIN_TOP);
        assert_eq!(h0, 100.0);
        assert_eq!(w0, 100.0 * BAR_FILL);

        let (_, _, _, h1) = slots[1].rect.unwrap();
        assert_eq!(h1, 50.0);

        assert!(slots[2].rect.is_none());
        assert_eq!(slots[2].center_x, MARGIN_LEFT + 250.0);
    }
}
