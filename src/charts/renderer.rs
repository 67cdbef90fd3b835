//! Static Chart Renderer
//! Draws the bar and pie charts with plotters into in-memory bitmaps.
//!
//! Layout:
//! 1. Bar: every model, sky blue bars, rotated model labels, axis titles
//! 2. Pie: top models only, slices labeled with their share of that subset

use crate::data::ModelSales;
use anyhow::{bail, Context, Result};
use image::RgbImage;
use plotters::element::Pie;
use plotters::prelude::*;
use tracing::debug;

pub const BAR_TITLE: &str = "Total Sales (in thousands) by Car Model";
pub const PIE_TITLE: &str = "Sales Distribution Among Top 10 Car Models";

/// Number of models shown in the pie chart.
pub const PIE_LIMIT: usize = 10;

const BAR_SIZE: (u32, u32) = (1200, 600);
const PIE_SIZE: (u32, u32) = (800, 800);
const PIE_START_ANGLE: f64 = 140.0;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);

// Slice colors (matplotlib default cycle)
const SLICE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// A rendered chart ready to be shown as an image.
#[derive(Clone)]
pub struct StaticChart {
    pub title: String,
    pub image: RgbImage,
}

impl StaticChart {
    pub fn size(&self) -> [usize; 2] {
        [self.image.width() as usize, self.image.height() as usize]
    }
}

/// One pie slice: a model, its total, and its share of the shown subset.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub model: String,
    pub value: f64,
    pub percent: f64,
}

impl PieSlice {
    pub fn label(&self) -> String {
        format!("{} ({:.1}%)", self.model, self.percent)
    }
}

/// Slices for the `limit` best-selling models.
///
/// Percentages are relative to the subtotal of those models, not the
/// grand total across every model.
pub fn pie_slices(sales: &ModelSales, limit: usize) -> Vec<PieSlice> {
    let top = sales.top(limit);
    let subtotal = top.total();
    top.iter()
        .map(|(model, value)| PieSlice {
            model: model.to_string(),
            value,
            percent: if subtotal > 0.0 {
                value / subtotal * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Bar chart of every model's total.
    pub fn render_bar_chart(sales: &ModelSales) -> Result<StaticChart> {
        if sales.is_empty() {
            bail!("no models to plot");
        }
        let (width, height) = BAR_SIZE;
        let models = sales.models();
        let values = sales.values();

        let y_min = values.iter().copied().fold(0.0, f64::min);
        let mut y_max = sales.max() * 1.05;
        if !y_max.is_finite() || y_max <= 0.0 {
            y_max = 1.0;
        }

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;

            let mut chart = ChartBuilder::on(&root)
                .caption(BAR_TITLE, ("sans-serif", 24))
                .margin(20)
                .x_label_area_size(150)
                .y_label_area_size(70)
                .build_cartesian_2d((0..models.len()).into_segmented(), y_min..y_max)?;

            let label_for = |v: &SegmentValue<usize>| match v {
                SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
                    models.get(*i).map(|m| m.to_string()).unwrap_or_default()
                }
                SegmentValue::Last => String::new(),
            };

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_labels(models.len())
                .x_label_formatter(&label_for)
                .x_label_style(
                    ("sans-serif", 12)
                        .into_font()
                        .transform(FontTransform::Rotate90),
                )
                .x_desc("Car Model")
                .y_desc("Total Sales (in thousands)")
                .draw()?;

            chart.draw_series(
                Histogram::vertical(&chart)
                    .style(SKY_BLUE.filled())
                    .margin(3)
                    .data(values.iter().enumerate().map(|(i, v)| (i, *v))),
            )?;

            root.present()?;
        }

        debug!(bars = models.len(), "bar chart rendered");
        let image =
            RgbImage::from_raw(width, height, buffer).context("bar chart buffer size mismatch")?;
        Ok(StaticChart {
            title: BAR_TITLE.to_string(),
            image,
        })
    }

    /// Pie chart of the top [`PIE_LIMIT`] models.
    pub fn render_pie_chart(sales: &ModelSales) -> Result<StaticChart> {
        let slices = pie_slices(sales, PIE_LIMIT);
        if let Some(neg) = slices.iter().find(|s| s.value < 0.0) {
            bail!("wedge sizes must be non negative ('{}' = {})", neg.model, neg.value);
        }
        let subtotal: f64 = slices.iter().map(|s| s.value).sum();
        if !(subtotal > 0.0) {
            bail!("cannot draw a pie chart with a zero total");
        }

        let (width, height) = PIE_SIZE;
        let sizes: Vec<f64> = slices.iter().map(|s| s.value).collect();
        let labels: Vec<String> = slices.iter().map(PieSlice::label).collect();
        let colors: Vec<RGBColor> = (0..slices.len())
            .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
            .collect();

        let mut buffer = vec![0u8; (width * height * 3) as usize];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE)?;
            let area = root.titled(PIE_TITLE, ("sans-serif", 24))?;

            let (w, h) = area.dim_in_pixel();
            let center = ((w / 2) as i32, (h / 2) as i32);
            let radius = f64::from(w.min(h)) * 0.3;

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(PIE_START_ANGLE);
            pie.label_style(("sans-serif", 14).into_font().color(&BLACK));
            pie.label_offset(15.0);
            area.draw(&pie)?;

            root.present()?;
        }

        debug!(slices = slices.len(), "pie chart rendered");
        let image =
            RgbImage::from_raw(width, height, buffer).context("pie chart buffer size mismatch")?;
        Ok(StaticChart {
            title: PIE_TITLE.to_string(),
            image,
        })
    }
}
