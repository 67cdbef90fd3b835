//! Chart Plotter Module
//! Interactive bar chart drawn with egui_plot.

use crate::data::ModelSales;
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Plot};

pub const INTERACTIVE_TITLE: &str = "Total Sales (in thousands) by Car Model (Interactive)";

/// Continuous "Blues" scale, light to dark.
const BLUES: [(f64, [u8; 3]); 9] = [
    (0.0, [247, 251, 255]),
    (0.125, [222, 235, 247]),
    (0.25, [198, 219, 239]),
    (0.375, [158, 202, 225]),
    (0.5, [107, 174, 214]),
    (0.625, [66, 146, 198]),
    (0.75, [33, 113, 181]),
    (0.875, [8, 81, 156]),
    (1.0, [8, 48, 107]),
];

/// Sample the Blues scale at `t` (clamped to 0..=1).
pub fn blues(t: f64) -> Color32 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let upper = BLUES
        .iter()
        .position(|(stop, _)| *stop >= t)
        .unwrap_or(BLUES.len() - 1)
        .max(1);
    let (t0, c0) = BLUES[upper - 1];
    let (t1, c1) = BLUES[upper];
    let f = (t - t0) / (t1 - t0);
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
    Color32::from_rgb(lerp(c0[0], c1[0]), lerp(c0[1], c1[1]), lerp(c0[2], c1[2]))
}

/// Position of `value` between `min` and `max`; a flat range maps to the top.
fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        1.0
    }
}

/// Every model as a bar, colored by its total.
#[derive(Clone)]
pub struct InteractiveBarChart {
    pub models: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Color32>,
    pub min: f64,
    pub max: f64,
}

impl InteractiveBarChart {
    pub fn from_sales(sales: &ModelSales) -> Self {
        let values = sales.values();
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let colors = values
            .iter()
            .map(|v| blues(normalize(*v, min, max)))
            .collect();
        Self {
            models: sales.models().into_iter().map(String::from).collect(),
            values,
            colors,
            min,
            max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    fn bars(&self) -> Vec<Bar> {
        self.models
            .iter()
            .zip(&self.values)
            .zip(&self.colors)
            .enumerate()
            .map(|(i, ((model, value), color))| {
                Bar::new(i as f64, *value)
                    .name(model)
                    .fill(*color)
                    .stroke(egui::Stroke::new(0.5, Color32::from_rgb(8, 48, 107)))
                    .width(0.8)
            })
            .collect()
    }

    /// Draw the chart with a color scale strip underneath.
    pub fn show(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new(INTERACTIVE_TITLE).size(18.0).strong());
        ui.add_space(6.0);

        let labels = self.models.clone();
        let height = (ui.available_height() - 60.0).max(200.0);

        Plot::new("interactive_sales")
            .height(height)
            .x_axis_label("Model")
            .y_axis_label("Sales_in_thousands")
            .include_y(0.0)
            .x_axis_formatter(move |mark, _range| {
                let v = mark.value;
                if (v - v.round()).abs() > 1e-6 || v < 0.0 {
                    return String::new();
                }
                labels.get(v.round() as usize).cloned().unwrap_or_default()
            })
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(
                    BarChart::new(self.bars())
                        .name("Sales_in_thousands")
                        .element_formatter(Box::new(|bar, _chart| {
                            format!("Model={}\nSales_in_thousands={:.2}", bar.name, bar.value)
                        })),
                );
            });

        self.draw_color_scale(ui);
    }

    fn draw_color_scale(&self, ui: &mut egui::Ui) {
        const STEPS: usize = 64;
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(format!("{:.1}", self.min)).size(11.0));
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(320.0, 14.0), egui::Sense::hover());
            let step = rect.width() / STEPS as f32;
            for i in 0..STEPS {
                let x = rect.left() + i as f32 * step;
                let cell = egui::Rect::from_min_size(
                    egui::pos2(x, rect.top()),
                    egui::vec2(step + 0.5, rect.height()),
                );
                ui.painter()
                    .rect_filled(cell, 0.0, blues(i as f64 / (STEPS - 1) as f64));
            }
            ui.label(RichText::new(format!("{:.1}", self.max)).size(11.0));
            ui.label(RichText::new("Sales_in_thousands").size(11.0));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn blues_endpoints_match_scale() {
        assert_eq!(blues(0.0), Color32::from_rgb(247, 251, 255));
        assert_eq!(blues(1.0), Color32::from_rgb(8, 48, 107));
        assert_eq!(blues(0.5), Color32::from_rgb(107, 174, 214));
    }

    #[test]
    fn blues_clamps_out_of_range() {
        assert_eq!(blues(-3.0), blues(0.0));
        assert_eq!(blues(7.0), blues(1.0));
        assert_eq!(blues(f64::NAN), blues(0.0));
    }

    #[test]
    fn blues_gets_darker_with_magnitude() {
        let light = blues(0.2);
        let dark = blues(0.8);
        assert!(dark.r() < light.r());
        assert!(dark.g() < light.g());
    }

    #[test]
    fn interactive_chart_covers_every_model() {
        let totals: BTreeMap<String, f64> = (0..15)
            .map(|i| (format!("M{i:02}"), f64::from(i) + 1.0))
            .collect();
        let chart = InteractiveBarChart::from_sales(&ModelSales::from_totals(totals));
        assert_eq!(chart.models.len(), 15);
        assert_eq!(chart.models[0], "M14");
        assert_eq!(chart.colors[0], blues(1.0));
        assert_eq!(chart.colors[14], blues(0.0));
        assert_eq!((chart.min, chart.max), (1.0, 15.0));
    }

    #[test]
    fn single_model_gets_darkest_color() {
        let totals = BTreeMap::from([("Corolla".to_string(), 80.0)]);
        let chart = InteractiveBarChart::from_sales(&ModelSales::from_totals(totals));
        assert_eq!(chart.colors, vec![blues(1.0)]);
    }
}
