//! GUI module - Chart window

mod app;
mod chart_viewer;

pub use app::ChartWindow;
pub use chart_viewer::ChartViewer;
