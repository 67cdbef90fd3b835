//! Charts module - Chart rendering

mod plotter;
mod renderer;

pub use plotter::{InteractiveBarChart, INTERACTIVE_TITLE};
pub use renderer::{StaticChart, StaticChartRenderer};
