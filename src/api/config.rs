use serde::{Deserialize, Serialize};

use crate::core::{Margin, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushChartConfig {
    pub viewport: Viewport,
    pub margin: Margin,
    #[serde(default = "default_brush_margin")]
    pub brush_margin: Margin,
    /// Share of the viewport height given to the detail pane.
    #[serde(default = "default_detail_height_ratio")]
    pub detail_height_ratio: f64,
    /// Vertical gap between the detail and overview panes, in pixels.
    #[serde(default = "default_chart_separation")]
    pub chart_separation: f64,
}

fn default_brush_margin() -> Margin {
    Margin::new(0.0, 20.0, 50.0, 20.0)
}

fn default_detail_height_ratio() -> f64 {
    0.8
}

fn default_chart_separation() -> f64 {
    10.0
}

impl BrushChartConfig {
    /// Creates a configuration with the standard overview split.
    #[must_use]
    pub fn new(viewport: Viewport, margin: Margin) -> Self {
        Self {
            viewport,
            margin,
            brush_margin: default_brush_margin(),
            detail_height_ratio: default_detail_height_ratio(),
            chart_separation: default_chart_separation(),
        }
    }

    #[must_use]
    pub fn with_brush_margin(mut self, brush_margin: Margin) -> Self {
        self.brush_margin = brush_margin;
        self
    }

    #[must_use]
    pub fn with_detail_height_ratio(mut self, ratio: f64) -> Self {
        self.detail_height_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_chart_separation(mut self, separation: f64) -> Self {
        self.chart_separation = separation;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        self.margin.validate()?;
        self.brush_margin.validate()?;

        if !self.detail_height_ratio.is_finite()
            || self.detail_height_ratio <= 0.0
            || self.detail_height_ratio >= 1.0
        {
            return Err(ChartError::InvalidData(
                "detail height ratio must be finite and strictly between 0 and 1".to_owned(),
            ));
        }

        if !self.chart_separation.is_finite() || self.chart_separation < 0.0 {
            return Err(ChartError::InvalidData(
                "chart separation must be finite and >= 0".to_owned(),
            ));
        }

        Ok(self)
    }
}
