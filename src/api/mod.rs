mod config;
mod engine;
mod frame;
mod layout;

pub use config::BrushChartConfig;
pub use engine::BrushChartEngine;
pub use frame::{BrushOverlay, ChartFrame, PaneFrame};
pub use layout::ChartLayout;
