use serde::{Deserialize, Serialize};

use crate::core::{AreaGeometry, Viewport, project_area_geometry};
use crate::error::ChartResult;

use super::BrushChartEngine;

/// One pane of the frame: plot region plus the geometry drawn inside it.
///
/// All geometry coordinates are local to `origin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneFrame {
    /// Viewport-space origin of the plot region.
    pub origin: (f64, f64),
    pub width_px: f64,
    pub height_px: f64,
    pub time_domain: (f64, f64),
    pub value_domain: (f64, f64),
    pub geometry: AreaGeometry,
}

/// Committed brush rectangle in overview-local pixel coordinates, clamped to
/// the overview plot region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushOverlay {
    pub x0_px: f64,
    pub x1_px: f64,
    pub y_top_px: f64,
    pub y_bottom_px: f64,
}

/// Backend-agnostic description of one draw pass.
///
/// The external renderer turns panes into shapes and, as a separate layered
/// step, draws the optional brush overlay on top of the overview pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub viewport: Viewport,
    pub detail: PaneFrame,
    pub overview: PaneFrame,
    pub brush_overlay: Option<BrushOverlay>,
}

impl BrushChartEngine {
    /// Materializes the drawable description for one frame.
    ///
    /// The detail pane projects the filtered series through the detail
    /// scales; the overview pane projects the full series through the
    /// overview scales. Requires loaded data, since scale domains are
    /// undefined over an empty series, and non-empty plot regions: a
    /// viewport smaller than its margins is an explicit error here, not a
    /// NaN-valued frame.
    pub fn build_frame(&self) -> ChartResult<ChartFrame> {
        let config = self.config();
        let layout = self.layout();

        let detail_time = self.detail_time_scale()?;
        let detail_value = self.detail_value_scale()?;
        let detail = PaneFrame {
            origin: layout.detail_origin(&config),
            width_px: layout.detail_x_max,
            height_px: layout.detail_y_max,
            time_domain: detail_time.domain(),
            value_domain: detail_value.domain(),
            geometry: project_area_geometry(
                self.filtered_data(),
                detail_time,
                detail_value,
                layout.detail_x_max,
            )?,
        };

        let overview_time = self.overview_time_scale()?;
        let overview_value = self.overview_value_scale()?;
        let overview = PaneFrame {
            origin: layout.overview_origin(&config),
            width_px: layout.overview_x_max,
            height_px: layout.overview_y_max,
            time_domain: overview_time.domain(),
            value_domain: overview_value.domain(),
            geometry: project_area_geometry(
                self.data(),
                overview_time,
                overview_value,
                layout.overview_x_max,
            )?,
        };

        let brush_overlay = match self.selection() {
            None => None,
            Some(bounds) => {
                let x0_px = overview_time.time_to_pixel(bounds.x0, layout.overview_x_max)?;
                let x1_px = overview_time.time_to_pixel(bounds.x1, layout.overview_x_max)?;
                // Larger values sit higher on the inverted Y axis.
                let y_top_px = overview_value.value_to_pixel(bounds.y1)?;
                let y_bottom_px = overview_value.value_to_pixel(bounds.y0)?;
                Some(BrushOverlay {
                    x0_px: x0_px.clamp(0.0, layout.overview_x_max),
                    x1_px: x1_px.clamp(0.0, layout.overview_x_max),
                    y_top_px: y_top_px.clamp(0.0, layout.overview_y_max),
                    y_bottom_px: y_bottom_px.clamp(0.0, layout.overview_y_max),
                })
            }
        };

        Ok(ChartFrame {
            viewport: config.viewport,
            detail,
            overview,
            brush_overlay,
        })
    }
}
