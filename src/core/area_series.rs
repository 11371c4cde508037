use crate::core::{StockPoint, TimeScale, ValueScale};
use crate::error::ChartResult;
use serde::{Deserialize, Serialize};

/// Vertex in pixel coordinates used by deterministic area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for an area series.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }
}

/// Projects points into deterministic area-series geometry.
///
/// The fill baseline is anchored at value 0, which the value scale maps to
/// the bottom of its pixel span. An empty series yields empty geometry;
/// renderers draw nothing for it.
pub fn project_area_geometry(
    points: &[StockPoint],
    time_scale: TimeScale,
    value_scale: ValueScale,
    x_range_px: f64,
) -> ChartResult<AreaGeometry> {
    if points.is_empty() {
        return Ok(AreaGeometry::empty());
    }

    let mut line_points = Vec::with_capacity(points.len());
    for point in points {
        let x = time_scale.time_to_pixel(point.x, x_range_px)?;
        let y = value_scale.value_to_pixel(point.close)?;
        line_points.push(AreaVertex { x, y });
    }

    let baseline_y = value_scale.value_to_pixel(0.0)?;
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex {
        x: last_x,
        y: baseline_y,
    });
    // Explicitly repeat the first baseline vertex so consumers can render this
    // as a closed polygon without adding implicit closure rules.
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });

    Ok(AreaGeometry {
        line_points,
        fill_polygon,
    })
}
