//! Presenter
//! Data preview plus the three chart views. Chart failures are collected as
//! warnings, never propagated.

use crate::charts::{InteractiveBarChart, StaticChartRenderer};
use crate::data::{column_names, ModelSales};
use crate::gui::ChartWindow;
use polars::prelude::*;
use std::fmt;
use tracing::{info, warn};

pub const PREVIEW_COLUMNS: [&str; 3] = ["Manufacturer", "Model", "Sales_in_thousands"];
pub const PREVIEW_ROWS: usize = 5;

/// First rows of the preview columns that exist in the table.
pub struct Preview {
    pub table: DataFrame,
    pub missing: Vec<String>,
}

pub fn preview(df: &DataFrame) -> PolarsResult<Preview> {
    let available = column_names(df);
    let (present, missing): (Vec<&str>, Vec<&str>) = PREVIEW_COLUMNS
        .into_iter()
        .partition(|c| available.iter().any(|a| a == *c));
    if !missing.is_empty() {
        warn!(?missing, "preview columns not in dataset");
    }
    Ok(Preview {
        table: df.select(present)?.head(Some(PREVIEW_ROWS)),
        missing: missing.into_iter().map(String::from).collect(),
    })
}

/// A chart that could not be rendered or shown.
#[derive(Debug)]
pub struct ChartWarning {
    pub chart: &'static str,
    pub message: String,
}

impl fmt::Display for ChartWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} chart: {}", self.chart, self.message)
    }
}

/// Render the bar, pie and interactive charts and, if `open_window`, show
/// them. Each chart fails independently.
pub fn present_charts(sales: &ModelSales, open_window: bool) -> Vec<ChartWarning> {
    let mut warnings = Vec::new();
    let mut rendered = Vec::new();
    let mut shown = Vec::new();

    let renders = [
        ("Bar", StaticChartRenderer::render_bar_chart(sales)),
        ("Pie", StaticChartRenderer::render_pie_chart(sales)),
    ];
    for (chart, result) in renders {
        match result {
            Ok(image) => {
                rendered.push(image);
                shown.push(chart);
            }
            Err(e) => {
                warn!(chart, error = %e, "static chart failed");
                warnings.push(ChartWarning {
                    chart,
                    message: format!("{e:#}"),
                });
            }
        }
    }

    let interactive = InteractiveBarChart::from_sales(sales);
    if interactive.is_empty() {
        warnings.push(ChartWarning {
            chart: "Interactive",
            message: "no models to plot".to_string(),
        });
    } else {
        shown.push("Interactive");
    }

    if !open_window {
        info!(charts = shown.len(), "chart window disabled");
        return warnings;
    }

    let window = ChartWindow::new(rendered, (!interactive.is_empty()).then_some(interactive));
    if window.has_charts() {
        if let Err(e) = window.run() {
            warn!(error = %e, ?shown, "chart window failed");
            warnings.extend(display_failures(&shown, &e.to_string()));
        }
    }
    warnings
}

/// One warning per chart the window was carrying when it failed to open.
fn display_failures(shown: &[&'static str], message: &str) -> Vec<ChartWarning> {
    shown
        .iter()
        .map(|&chart| ChartWarning {
            chart,
            message: format!("could not be displayed: {message}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_row_order_and_limits_rows() {
        let df = df!(
            "Manufacturer" => ["A", "B", "C", "D", "E", "F", "G"],
            "Model" => ["a", "b", "c", "d", "e", "f", "g"],
            "Sales_in_thousands" => [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0],
            "Price" => [9.0; 7],
        )
        .unwrap();
        let preview = preview(&df).unwrap();
        assert_eq!(preview.table.height(), 5);
        assert_eq!(column_names(&preview.table), PREVIEW_COLUMNS.to_vec());
        let models: Vec<Option<&str>> = preview
            .table
            .column("Model")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(
            models,
            vec![Some("a"), Some("b"), Some("c"), Some("d"), Some("e")]
        );
        assert!(preview.missing.is_empty());
    }

    #[test]
    fn preview_without_manufacturer_reports_it_missing() {
        let df = df!(
            "Model" => ["a", "b"],
            "Sales_in_thousands" => [1.0, 2.0],
        )
        .unwrap();
        let preview = preview(&df).unwrap();
        assert_eq!(preview.table.height(), 2);
        assert_eq!(preview.missing, vec!["Manufacturer"]);
        assert_eq!(
            column_names(&preview.table),
            vec!["Model", "Sales_in_thousands"]
        );
    }

    #[test]
    fn window_failure_warns_for_every_chart_it_carried() {
        let warnings = display_failures(&["Bar", "Pie", "Interactive"], "no display");
        let charts: Vec<&str> = warnings.iter().map(|w| w.chart).collect();
        assert_eq!(charts, vec!["Bar", "Pie", "Interactive"]);
        assert_eq!(
            warnings[1].to_string(),
            "Pie chart: could not be displayed: no display"
        );
    }

    #[test]
    fn window_failure_skips_charts_that_never_rendered() {
        let warnings = display_failures(&["Bar"], "no display");
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].chart, "Bar");
    }
}
