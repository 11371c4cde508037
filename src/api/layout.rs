use serde::{Deserialize, Serialize};

use super::BrushChartConfig;

/// Pixel-region arithmetic for the stacked detail/overview panes.
///
/// The detail pane takes `detail_height_ratio` of the viewport height, the
/// overview pane takes what remains after the separation gap. Plot spans are
/// clamped at zero so a viewport smaller than its margins degrades to empty
/// panes instead of negative spans. Scale fitting and frame building need
/// non-empty plot regions and report a zero span as invalid data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    /// Width of the detail plot region.
    pub detail_x_max: f64,
    /// Height of the detail plot region.
    pub detail_y_max: f64,
    /// Width of the overview plot region.
    pub overview_x_max: f64,
    /// Height of the overview plot region.
    pub overview_y_max: f64,
    /// Viewport-space Y offset where the overview pane starts.
    pub overview_top: f64,
}

impl ChartLayout {
    #[must_use]
    pub fn compute(config: &BrushChartConfig) -> Self {
        let width = f64::from(config.viewport.width);
        let height = f64::from(config.viewport.height);

        let detail_height = config.detail_height_ratio * height;
        let overview_height = height - detail_height - config.chart_separation;

        let margin = config.margin;
        let brush_margin = config.brush_margin;

        Self {
            detail_x_max: (width - margin.left - margin.right).max(0.0),
            detail_y_max: (detail_height - margin.top - margin.bottom).max(0.0),
            overview_x_max: (width - brush_margin.left - brush_margin.right).max(0.0),
            overview_y_max: (overview_height - brush_margin.top - brush_margin.bottom).max(0.0),
            overview_top: detail_height + config.chart_separation,
        }
    }

    /// Viewport-space origin of the detail plot region.
    #[must_use]
    pub fn detail_origin(self, config: &BrushChartConfig) -> (f64, f64) {
        (config.margin.left, config.margin.top)
    }

    /// Viewport-space origin of the overview plot region.
    #[must_use]
    pub fn overview_origin(self, config: &BrushChartConfig) -> (f64, f64) {
        (
            config.brush_margin.left,
            self.overview_top + config.brush_margin.top,
        )
    }
}
