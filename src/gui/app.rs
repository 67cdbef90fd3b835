//! Chart Window
//! One native window with a tab per chart that rendered successfully.

use crate::charts::{InteractiveBarChart, StaticChart, INTERACTIVE_TITLE};
use crate::gui::ChartViewer;
use egui::{RichText, TopBottomPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChartTab {
    Static(usize),
    Interactive,
}

/// Main application window.
pub struct ChartWindow {
    viewer: ChartViewer,
    interactive: Option<InteractiveBarChart>,
    selected: ChartTab,
}

impl ChartWindow {
    pub fn new(static_charts: Vec<StaticChart>, interactive: Option<InteractiveBarChart>) -> Self {
        let selected = if static_charts.is_empty() {
            ChartTab::Interactive
        } else {
            ChartTab::Static(0)
        };
        Self {
            viewer: ChartViewer::new(static_charts),
            interactive,
            selected,
        }
    }

    pub fn has_charts(&self) -> bool {
        !self.viewer.charts.is_empty() || self.interactive.is_some()
    }

    /// Open the window and block until it is closed.
    pub fn run(self) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 820.0])
                .with_min_inner_size([800.0, 600.0])
                .with_title("Car Sales Analysis"),
            ..Default::default()
        };

        eframe::run_native(
            "Car Sales Analysis",
            options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("chart_tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let titles: Vec<String> =
                    self.viewer.titles().into_iter().map(String::from).collect();
                for (idx, title) in titles.into_iter().enumerate() {
                    ui.selectable_value(&mut self.selected, ChartTab::Static(idx), title);
                }
                if self.interactive.is_some() {
                    ui.selectable_value(
                        &mut self.selected,
                        ChartTab::Interactive,
                        RichText::new(INTERACTIVE_TITLE).strong(),
                    );
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.selected {
            ChartTab::Static(idx) => self.viewer.show(ctx, ui, idx),
            ChartTab::Interactive => match &self.interactive {
                Some(chart) => chart.show(ui),
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new("No Data").size(20.0));
                    });
                }
            },
        });
    }
}
