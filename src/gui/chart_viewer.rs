//! Chart Viewer Widget
//! Shows pre-rendered static charts as textures, scaled to the available space.

use crate::charts::StaticChart;
use egui::{ColorImage, RichText, TextureHandle, TextureOptions};
use std::collections::HashMap;

/// Static chart images plus their uploaded textures.
#[derive(Default)]
pub struct ChartViewer {
    pub charts: Vec<StaticChart>,
    // Uploaded on first display
    textures: HashMap<usize, TextureHandle>,
}

impl ChartViewer {
    pub fn new(charts: Vec<StaticChart>) -> Self {
        Self {
            charts,
            textures: HashMap::new(),
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.charts.iter().map(|c| c.title.as_str()).collect()
    }

    fn texture(&mut self, ctx: &egui::Context, idx: usize) -> Option<&TextureHandle> {
        let chart = self.charts.get(idx)?;
        Some(self.textures.entry(idx).or_insert_with(|| {
            let image = ColorImage::from_rgb(chart.size(), chart.image.as_raw());
            ctx.load_texture(format!("static_chart_{idx}"), image, TextureOptions::LINEAR)
        }))
    }

    /// Draw chart `idx` centered and shrunk to fit.
    pub fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, idx: usize) {
        let Some(texture) = self.texture(ctx, idx) else {
            ui.centered_and_justified(|ui| {
                ui.label(RichText::new("No Chart").size(20.0));
            });
            return;
        };

        ui.centered_and_justified(|ui| {
            ui.add(egui::Image::new(texture).shrink_to_fit());
        });
    }
}
